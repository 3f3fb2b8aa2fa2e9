use crate::domain::Domain;
use crate::session::Message;
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Score for one evaluation category, out of 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
}

impl CategoryScore {
    pub const FULL_MARK: u32 = 100;

    pub fn new(category: &str, score: u32) -> Self {
        Self {
            category: category.to_string(),
            score: score.min(Self::FULL_MARK),
        }
    }
}

/// Produces per-category scores for a finished interview
///
/// Implementations:
/// - Random: placeholder scores in fixed per-category ranges
/// - A real evaluator can grade the transcript behind the same trait
#[async_trait::async_trait]
pub trait Scorer: Send + Sync {
    /// Score a completed transcript
    async fn score(&self, domain: &Domain, transcript: &[Message]) -> Result<Vec<CategoryScore>>;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Category name and the half-open range its random score is drawn from
pub const RANDOM_RANGES: &[(&str, Range<u32>)] = &[
    ("Correctness", 70..95),
    ("Clarity", 65..95),
    ("Structure", 70..95),
    ("Relevance", 75..95),
    ("Confidence", 60..90),
];

/// Scores drawn uniformly at random, ignoring the transcript
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScorer;

#[async_trait::async_trait]
impl Scorer for RandomScorer {
    async fn score(&self, _domain: &Domain, _transcript: &[Message]) -> Result<Vec<CategoryScore>> {
        let mut rng = rand::thread_rng();

        Ok(RANDOM_RANGES
            .iter()
            .map(|(category, range)| CategoryScore::new(category, rng.gen_range(range.clone())))
            .collect())
    }

    fn name(&self) -> &str {
        "random"
    }
}
