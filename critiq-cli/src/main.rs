// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Critiq CLI - automated code review for GitHub repositories.
//!
//! # Examples
//!
//! ```bash
//! # Review a candidate's repository
//! critiq https://github.com/acme/widget -d "Build a URL shortener"
//!
//! # Expect senior-level code
//! critiq https://github.com/acme/widget -d "Build a URL shortener" --level senior
//!
//! # JSON output
//! critiq https://github.com/acme/widget -d "Build a URL shortener" --format json --pretty
//! ```
//!
//! Credentials come from the environment: `GITHUB_API_KEY` for the
//! repository fetch and `OPENAI_API_KEY` for the review generation.

mod config;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use critiq_core::{CandidateLevel, RepoId, ReviewRequest};
use critiq_http::{ReqwestTransport, Transport};
use critiq_services::{GitHubService, OpenAiService, ReviewCache, ReviewWorkflow};

use config::Credentials;

// ============================================================================
// CLI Definition
// ============================================================================

/// Critiq CLI - automated code review.
#[derive(Parser)]
#[command(name = "critiq")]
#[command(about = "Reviews a GitHub repository against an assignment")]
#[command(long_about = r"
Critiq fetches every file of a GitHub repository and asks an LLM to review
the code against the assignment it was written for.

Environment:
  GITHUB_API_KEY    token for the GitHub contents API
  OPENAI_API_KEY    key for the chat completions API

Examples:
  critiq https://github.com/acme/widget -d 'Build a URL shortener'
  critiq https://github.com/acme/widget -d 'Build a URL shortener' -l senior
  critiq https://github.com/acme/widget -d 'Build a URL shortener' -f json
")]
#[command(version)]
#[command(author = "Critiq Contributors")]
pub struct Cli {
    /// Repository URL (https://github.com/owner/name).
    pub repository: String,

    /// Assignment the candidate was asked to complete.
    #[arg(long, short)]
    pub description: String,

    /// Candidate seniority the review should assume.
    #[arg(long, short, default_value = "junior")]
    pub level: CandidateLevel,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Always fetch and review, even for a repeated request.
    #[arg(long)]
    pub no_cache: bool,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("critiq=debug,info")
    } else {
        EnvFilter::new("critiq=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Runs one review end to end.
async fn run(cli: &Cli) -> Result<()> {
    // Reject malformed URLs before touching credentials or the network.
    let repository = RepoId::parse(&cli.repository)?;

    let credentials = Credentials::from_env()?;
    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new());

    let github = GitHubService::new(credentials.github_token, Arc::clone(&transport));
    let openai = OpenAiService::new(credentials.openai_api_key, Arc::clone(&transport));

    let workflow = if cli.no_cache {
        ReviewWorkflow::new(github, openai)
    } else {
        ReviewWorkflow::with_cache(github, openai, ReviewCache::new())
    };

    let request = ReviewRequest::new(repository, cli.description.clone(), cli.level);

    debug!(repo = %request.repository, level = %request.level, "Starting review");
    let response = workflow.execute(&request).await?;

    let rendered = match cli.format {
        OutputFormat::Text => output::render_text(&response),
        OutputFormat::Json => output::render_json(&response, cli.pretty)?,
    };
    println!("{rendered}");

    Ok(())
}
