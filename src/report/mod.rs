//! Post-interview performance report
//!
//! Scores come from a [`Scorer`]; the default [`RandomScorer`] draws
//! placeholder values. Strengths, improvements and the practice roadmap
//! are fixed text.

mod report;
mod scorer;

pub use report::{overall_score, InterviewReport, RoadmapStep, ScoreLabel, ScoreTier};
pub use scorer::{CategoryScore, RandomScorer, Scorer, RANDOM_RANGES};
