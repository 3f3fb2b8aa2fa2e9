use serde::{Deserialize, Serialize};

/// Domain used when a session is started with an unknown identifier
pub const DEFAULT_DOMAIN_ID: &str = "hr";

/// A professional category the candidate can practise for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Lookup key for the question provider (e.g., "software")
    pub id: String,

    /// Display name (e.g., "Software Engineering")
    pub name: String,

    /// Short list of topics covered
    pub description: String,

    /// Size of the advertised question pool, display only
    pub question_count: u32,
}

impl Domain {
    pub fn new(id: &str, name: &str, description: &str, question_count: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            question_count,
        }
    }
}

/// All selectable domains, in display order
pub fn catalogue() -> Vec<Domain> {
    vec![
        Domain::new("software", "Software Engineering", "DSA, System Design, OOP, APIs", 50),
        Domain::new("data-science", "Data Science", "ML, Statistics, Python, SQL", 45),
        Domain::new("cloud", "Cloud & DevOps", "AWS, Azure, CI/CD, Kubernetes", 40),
        Domain::new("hr", "HR & Behavioral", "Leadership, Teamwork, Conflict Resolution", 35),
        Domain::new("product", "Product Management", "Strategy, Metrics, User Research", 38),
        Domain::new("analytics", "Business Analytics", "Excel, Tableau, Business Cases", 32),
        Domain::new("security", "Cybersecurity", "Network Security, Pentesting, Compliance", 30),
        Domain::new("design", "UX/UI Design", "User Research, Prototyping, Design Systems", 28),
    ]
}

/// Look up a domain by identifier
pub fn find(id: &str) -> Option<Domain> {
    catalogue().into_iter().find(|d| d.id == id)
}
