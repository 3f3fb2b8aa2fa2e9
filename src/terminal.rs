//! Line-oriented terminal front end
//!
//! Drives the screen router over any async reader/writer pair: pick a
//! domain, answer each question on one line, then print the report.
//! `/exit` leaves the interview, `/mic` toggles the recording flag.
//! After the report, `/new` starts another interview and `/back`
//! returns to the start screen.

use crate::domain::{self, Domain};
use crate::questions::QuestionProvider;
use crate::report::{InterviewReport, ScoreTier, Scorer};
use crate::router::{Router, Screen, ScreenEvent};
use crate::session::{
    ChannelSink, InterviewSession, Message, Role, SessionConfig, SessionOutcome, SubmitOutcome,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};

const EXIT_COMMAND: &str = "/exit";
const MIC_COMMAND: &str = "/mic";
const BACK_COMMAND: &str = "/back";
const NEW_COMMAND: &str = "/new";
const QUIT_COMMAND: &str = "/quit";
const PROGRESS_WIDTH: usize = 20;

/// Options for one terminal run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Skip domain selection and use this domain
    pub domain: Option<String>,

    pub session: SessionConfig,
}

/// Transcript and report of a completed interview
#[derive(Debug, Clone, Serialize)]
pub struct InterviewResult {
    pub transcript: Vec<Message>,
    pub report: InterviewReport,
}

pub struct Terminal<R, W> {
    lines: Lines<R>,
    out: W,
    questions: Arc<dyn QuestionProvider>,
    scorer: Arc<dyn Scorer>,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        input: R,
        out: W,
        questions: Arc<dyn QuestionProvider>,
        scorer: Arc<dyn Scorer>,
    ) -> Self {
        Self {
            lines: input.lines(),
            out,
            questions,
            scorer,
        }
    }

    /// Run the screen flow until the user finishes or input ends
    ///
    /// Returns the most recent completed interview, or `None` if the user
    /// quit before finishing one.
    pub async fn run(&mut self, options: RunOptions) -> Result<Option<InterviewResult>> {
        let mut router = Router::new();
        router.apply(ScreenEvent::StartInterview)?;

        let mut last = None;

        loop {
            match router.screen().clone() {
                Screen::Landing => {
                    self.write_line(&format!(
                        "\nPress Enter to choose a domain, or type {} to leave.",
                        QUIT_COMMAND
                    ))
                    .await?;
                    self.write("> ").await?;

                    match self.next_line().await? {
                        Some(line) if line.trim() != QUIT_COMMAND => {
                            router.apply(ScreenEvent::StartInterview)?;
                        }
                        _ => return Ok(last),
                    }
                }
                Screen::DomainSelect => match &options.domain {
                    Some(id) => {
                        router.select_domain(id)?;
                    }
                    None => {
                        if !self.choose_domain(&mut router).await? {
                            return Ok(last);
                        }
                    }
                },
                Screen::Interview { domain } => {
                    let session_config = SessionConfig {
                        session_id: format!("interview-{}", uuid::Uuid::new_v4()),
                        ..options.session.clone()
                    };

                    match self.interview(domain, session_config).await? {
                        Some(transcript) => {
                            router.apply(ScreenEvent::Complete(transcript))?;
                        }
                        None => {
                            router.apply(ScreenEvent::ExitInterview)?;
                            if options.domain.is_some() {
                                return Ok(last);
                            }
                        }
                    }
                }
                Screen::Report { domain, transcript } => {
                    let report =
                        InterviewReport::generate(self.scorer.as_ref(), &domain, &transcript)
                            .await?;
                    self.render_report(&report).await?;
                    last = Some(InterviewResult { transcript, report });

                    self.write_line(&format!(
                        "\nType {} for another interview, {} for the start screen, or press Enter to finish.",
                        NEW_COMMAND, BACK_COMMAND
                    ))
                    .await?;
                    self.write("> ").await?;

                    let line = self.next_line().await?;
                    match line.as_deref().map(str::trim) {
                        Some(NEW_COMMAND) => {
                            router.apply(ScreenEvent::StartNew)?;
                        }
                        Some(BACK_COMMAND) => {
                            router.apply(ScreenEvent::BackToLanding)?;
                        }
                        _ => return Ok(last),
                    }
                }
            }
        }
    }

    /// Prompt for a domain; false once input ends
    async fn choose_domain(&mut self, router: &mut Router) -> Result<bool> {
        let domains = domain::catalogue();

        loop {
            self.write_line("Choose your domain:").await?;
            for (i, d) in domains.iter().enumerate() {
                self.write_line(&format!(
                    "  {}. {} ({}) - {} [{}+ questions]",
                    i + 1,
                    d.name,
                    d.id,
                    d.description,
                    d.question_count
                ))
                .await?;
            }
            self.write_line(&format!("Type {} to return to the start screen.", BACK_COMMAND))
                .await?;
            self.write("> ").await?;

            let Some(line) = self.next_line().await? else {
                return Ok(false);
            };
            let choice = line.trim();

            if choice == BACK_COMMAND {
                router.apply(ScreenEvent::BackToLanding)?;
                return Ok(true);
            }

            let id = match choice.parse::<usize>() {
                Ok(n) if (1..=domains.len()).contains(&n) => domains[n - 1].id.clone(),
                _ => choice.to_string(),
            };

            match router.select_domain(&id) {
                Ok(_) => return Ok(true),
                Err(e) => self.write_line(&format!("{}", e)).await?,
            }
        }
    }

    /// Run one session; `None` if the user exited early
    async fn interview(
        &mut self,
        domain: Domain,
        config: SessionConfig,
    ) -> Result<Option<Vec<Message>>> {
        let (sink, mut outcomes) = ChannelSink::new();
        let session = InterviewSession::new(
            config,
            domain.clone(),
            Arc::clone(&self.questions),
            Arc::new(sink),
        );

        info!("Starting interview {} ({})", session.session_id(), domain.name);
        self.write_line(&format!("\n{} interview. Type {} to leave.", domain.name, EXIT_COMMAND))
            .await?;

        let mut shown = 0;

        loop {
            let messages = session.messages().await;
            for message in messages.iter().skip(shown) {
                if message.role == Role::Interviewer {
                    let snapshot = session.snapshot().await;
                    self.write_line(&format!(
                        "\n{} Question {}/{}",
                        progress_bar(snapshot.progress),
                        snapshot.question_number(),
                        snapshot.total_questions
                    ))
                    .await?;
                    self.write_line(&format!("Interviewer: {}", message.content)).await?;
                }
            }
            shown = messages.len();

            if let Ok(outcome) = outcomes.try_recv() {
                match outcome {
                    SessionOutcome::Completed(transcript) => return Ok(Some(transcript)),
                    SessionOutcome::Exited => return Ok(None),
                }
            }

            self.write("You: ").await?;
            let Some(line) = self.next_line().await? else {
                session.exit().await;
                return Ok(None);
            };

            match line.trim() {
                EXIT_COMMAND => {
                    session.exit().await;
                    self.write_line("Interview exited.").await?;
                    return Ok(None);
                }
                MIC_COMMAND => {
                    let recording = session.toggle_recording().await;
                    let state = if recording { "on" } else { "off" };
                    self.write_line(&format!("Microphone {} (typing only)", state))
                        .await?;
                }
                _ => {
                    session.set_draft(line.as_str()).await;
                    match session.send_draft().await {
                        SubmitOutcome::Accepted => {
                            self.write_line("Interviewer is typing...").await?;
                            session.settle().await;
                        }
                        outcome => debug!("Answer not accepted: {:?}", outcome),
                    }
                }
            }
        }
    }

    async fn render_report(&mut self, report: &InterviewReport) -> Result<()> {
        self.write_line(&format!("\n=== Interview Report: {} ===", report.domain.name))
            .await?;
        self.write_line(&format!(
            "Completed on {}",
            report.completed_at.format("%A, %B %-d, %Y")
        ))
        .await?;
        self.write_line(&format!(
            "Overall score: {}/100 ({})",
            report.overall,
            report.label.as_str()
        ))
        .await?;

        self.write_line("\nScores:").await?;
        for score in &report.scores {
            let marker = match ScoreTier::for_score(score.score) {
                ScoreTier::Strong => "+",
                ScoreTier::Moderate => "~",
                ScoreTier::Weak => "-",
            };
            self.write_line(&format!("  {} {:<12} {:>3}", marker, score.category, score.score))
                .await?;
        }

        self.write_line("\nStrengths:").await?;
        for s in &report.strengths {
            self.write_line(&format!("  * {}", s)).await?;
        }

        self.write_line("\nAreas to improve:").await?;
        for s in &report.improvements {
            self.write_line(&format!("  * {}", s)).await?;
        }

        self.write_line("\nPractice roadmap:").await?;
        for step in &report.roadmap {
            self.write_line(&format!("  {}: {}", step.week, step.task)).await?;
        }

        Ok(())
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .context("Failed to read input")
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .await
            .context("Failed to write output")?;
        self.out.flush().await.context("Failed to flush output")
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text)).await
    }
}

/// Render `progress` (0..=1) as a fixed-width bar
pub fn progress_bar(progress: f64) -> String {
    let filled = (progress.clamp(0.0, 1.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(PROGRESS_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_width() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(0.2).matches('#').count(), 4);
        assert_eq!(progress_bar(7.0).len(), 22);
    }
}
