use super::scorer::{CategoryScore, Scorer};
use crate::domain::Domain;
use crate::session::{Message, Role};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

const STRENGTHS: &[&str] = &[
    "Strong technical foundation with clear explanations",
    "Good use of real-world examples to illustrate points",
    "Demonstrates structured problem-solving approach",
];

const IMPROVEMENTS: &[&str] = &[
    "Could provide more specific metrics and outcomes",
    "Consider diving deeper into edge cases",
    "Practice articulating trade-offs more clearly",
];

const ROADMAP: &[(&str, &str)] = &[
    ("Week 1-2", "Review fundamental concepts and practice explaining them concisely"),
    ("Week 3-4", "Work through 10+ practice problems with time constraints"),
    ("Week 5-6", "Record yourself and review for confidence and clarity"),
    ("Week 7-8", "Mock interviews with peers focusing on feedback areas"),
];

/// Verbal rating for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Excellent,
    VeryGood,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreLabel {
    pub fn for_score(score: u32) -> Self {
        if score >= 90 {
            Self::Excellent
        } else if score >= 80 {
            Self::VeryGood
        } else if score >= 70 {
            Self::Good
        } else if score >= 60 {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

/// Coarse band used to highlight a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Strong,
    Moderate,
    Weak,
}

impl ScoreTier {
    pub fn for_score(score: u32) -> Self {
        if score >= 80 {
            Self::Strong
        } else if score >= 60 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub week: String,
    pub task: String,
}

/// Performance report for a finished interview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub domain: Domain,
    pub completed_at: DateTime<Utc>,

    /// Number of candidate answers in the transcript
    pub answers: usize,

    pub scores: Vec<CategoryScore>,

    /// Rounded mean of the category scores
    pub overall: u32,

    pub label: ScoreLabel,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
}

impl InterviewReport {
    /// Score a transcript and assemble the report
    pub async fn generate(
        scorer: &dyn Scorer,
        domain: &Domain,
        transcript: &[Message],
    ) -> Result<Self> {
        let scores = scorer
            .score(domain, transcript)
            .await
            .with_context(|| format!("Scorer '{}' failed", scorer.name()))?;

        let report = Self::from_scores(domain.clone(), transcript, scores);

        info!(
            "Generated report for {} using {} scorer: overall {} ({})",
            domain.id,
            scorer.name(),
            report.overall,
            report.label.as_str()
        );

        Ok(report)
    }

    /// Assemble a report from already computed scores
    pub fn from_scores(domain: Domain, transcript: &[Message], scores: Vec<CategoryScore>) -> Self {
        let overall = overall_score(&scores);

        Self {
            domain,
            completed_at: Utc::now(),
            answers: transcript
                .iter()
                .filter(|m| m.role == Role::Candidate)
                .count(),
            scores,
            overall,
            label: ScoreLabel::for_score(overall),
            strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
            improvements: IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
            roadmap: ROADMAP
                .iter()
                .map(|(week, task)| RoadmapStep {
                    week: week.to_string(),
                    task: task.to_string(),
                })
                .collect(),
        }
    }
}

/// Rounded mean of the category scores, 0 when there are none
pub fn overall_score(scores: &[CategoryScore]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|s| s.score).sum();
    (sum as f64 / scores.len() as f64).round() as u32
}
