use super::QuestionProvider;
use crate::domain::DEFAULT_DOMAIN_ID;
use tracing::{debug, warn};

const SOFTWARE: &[&str] = &[
    "Tell me about yourself and your experience in software engineering.",
    "Can you explain the difference between REST and GraphQL APIs? When would you choose one over the other?",
    "Walk me through how you would design a URL shortening service like bit.ly.",
    "Describe a challenging bug you've encountered. How did you debug and resolve it?",
    "How do you ensure code quality in your projects? What practices do you follow?",
];

const DATA_SCIENCE: &[&str] = &[
    "What drew you to data science, and what's your experience in the field?",
    "Explain the bias-variance tradeoff and how it affects model performance.",
    "How would you handle missing data in a dataset? Walk me through your approach.",
    "Describe a machine learning project you've worked on from start to finish.",
    "What metrics would you use to evaluate a classification model with imbalanced classes?",
];

const CLOUD: &[&str] = &[
    "Tell me about your experience with cloud platforms and infrastructure.",
    "Explain the differences between containers and virtual machines. When would you use each?",
    "How would you design a highly available and scalable web application on AWS?",
    "Describe your experience with CI/CD pipelines. What tools have you used?",
    "How do you approach cloud cost optimization?",
];

const HR: &[&str] = &[
    "Tell me about yourself and what motivates you professionally.",
    "Describe a time when you had to resolve a conflict with a team member.",
    "How do you prioritize tasks when you have multiple deadlines?",
    "Tell me about a time you failed. What did you learn from it?",
    "Where do you see yourself in five years?",
];

const PRODUCT: &[&str] = &[
    "What interests you about product management?",
    "How would you prioritize features for a new product launch?",
    "Describe how you would measure the success of a product feature.",
    "Walk me through how you would handle disagreements with engineering on scope.",
    "How do you gather and incorporate user feedback into your product decisions?",
];

const ANALYTICS: &[&str] = &[
    "Tell me about your experience with data analysis and business intelligence.",
    "How would you approach analyzing a sudden drop in user engagement?",
    "Explain how you would build a dashboard to track key business metrics.",
    "Describe a time when your analysis influenced a business decision.",
    "What's your approach to presenting complex data to non-technical stakeholders?",
];

const SECURITY: &[&str] = &[
    "What drew you to cybersecurity, and what's your background?",
    "Explain the OWASP Top 10 and which vulnerabilities you consider most critical.",
    "How would you respond to a suspected data breach?",
    "Describe your experience with penetration testing methodologies.",
    "How do you stay current with the evolving threat landscape?",
];

const DESIGN: &[&str] = &[
    "Tell me about your design background and what inspires you.",
    "Walk me through your design process from research to final deliverable.",
    "How do you handle feedback that conflicts with your design vision?",
    "Describe a time when user research changed your design direction.",
    "How do you balance user needs with business requirements?",
];

/// Built-in question tables, five prompts per domain
#[derive(Debug, Clone, Copy)]
pub struct StaticQuestionBank {
    /// Table served for unknown domain identifiers
    fallback: &'static [&'static str],
}

impl StaticQuestionBank {
    pub fn new() -> Self {
        Self { fallback: HR }
    }

    /// Use another domain's table for unknown identifiers
    ///
    /// An unknown `domain_id` here keeps the default fallback.
    pub fn with_fallback(domain_id: &str) -> Self {
        match Self::table(domain_id) {
            Some(fallback) => Self { fallback },
            None => {
                warn!(
                    "Fallback domain {} not found, keeping {}",
                    domain_id,
                    DEFAULT_DOMAIN_ID
                );
                Self::new()
            }
        }
    }

    fn table(domain_id: &str) -> Option<&'static [&'static str]> {
        let table = match domain_id {
            "software" => SOFTWARE,
            "data-science" => DATA_SCIENCE,
            "cloud" => CLOUD,
            "hr" => HR,
            "product" => PRODUCT,
            "analytics" => ANALYTICS,
            "security" => SECURITY,
            "design" => DESIGN,
            _ => return None,
        };
        Some(table)
    }
}

impl Default for StaticQuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionProvider for StaticQuestionBank {
    fn question_for(&self, domain_id: &str, index: usize) -> String {
        let questions = Self::table(domain_id).unwrap_or_else(|| {
            debug!("Unknown domain {}, using fallback table", domain_id);
            self.fallback
        });

        // Past the end of the table: repeat the last prompt
        let index = index.min(questions.len() - 1);
        questions[index].to_string()
    }
}
