use crate::session::SessionConfig;
use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub interview: InterviewConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewConfig {
    pub total_questions: usize,
    pub answer_delay_ms: u64,
    pub default_domain: String,
}

impl Config {
    /// Load from `path` (any format the `config` crate understands),
    /// layered over built-in defaults and `MOCK_INTERVIEW__*` env vars.
    /// A missing file is not an error.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "mock-interview")?
            .set_default("interview.total_questions", 5_i64)?
            .set_default("interview.answer_delay_ms", 1500_i64)?
            .set_default("interview.default_domain", crate::domain::DEFAULT_DOMAIN_ID)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MOCK_INTERVIEW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Session settings for a fresh session
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            total_questions: self.interview.total_questions,
            answer_delay: Duration::from_millis(self.interview.answer_delay_ms),
            ..SessionConfig::default()
        }
    }
}
