use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mock_interview::{domain, Config, RandomScorer, RunOptions, StaticQuestionBank, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mock-interview", version, about = "Practise interviews in the terminal")]
struct Cli {
    /// Configuration file (extension optional)
    #[arg(long, global = true, default_value = "config/mock-interview")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the available interview domains
    Domains,

    /// Run one interview
    Run {
        /// Domain identifier (skips the selection menu)
        #[arg(long)]
        domain: Option<String>,

        /// Number of questions to ask
        #[arg(long)]
        questions: Option<usize>,

        /// Simulated thinking time before each question, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print the transcript and report as JSON when done
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr and default to warn so they stay out of the chat
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config))?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Command::Run {
        domain: None,
        questions: None,
        delay_ms: None,
        json: false,
    }) {
        Command::Domains => {
            for d in domain::catalogue() {
                println!("{:<14} {:<22} {}", d.id, d.name, d.description);
            }
        }
        Command::Run {
            domain,
            questions,
            delay_ms,
            json,
        } => {
            let mut session = cfg.session_config();
            if let Some(n) = questions {
                session.total_questions = n;
            }
            if let Some(ms) = delay_ms {
                session.answer_delay = Duration::from_millis(ms);
            }

            let options = RunOptions { domain, session };
            let mut terminal = Terminal::new(
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
                Arc::new(StaticQuestionBank::with_fallback(&cfg.interview.default_domain)),
                Arc::new(RandomScorer),
            );

            match terminal.run(options).await? {
                Some(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Some(_) => {}
                None => info!("No interview completed"),
            }
        }
    }

    Ok(())
}
