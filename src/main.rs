//! Code Insight CLI
//!
//! Thin shell over the analysis service: reads a source file, runs one
//! analysis against the configured provider, and prints the normalized
//! record as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use code_insight::core::{AnalysisMode, AnalysisRequest};
use code_insight::{create_provider, AnalysisService, InsightConfig};

#[derive(Parser)]
#[command(name = "code-insight", version, about = "LLM-backed code analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a source file in one of the supported modes
    Analyze {
        /// Path to the source file
        #[arg(long)]
        file: PathBuf,
        /// Source language identifier (e.g. python)
        #[arg(long)]
        language: String,
        /// Analysis mode (refactor, tests, security, performance,
        /// documentation, debug, modularization)
        #[arg(long)]
        mode: String,
        /// Target language for cross-language translation
        #[arg(long)]
        output_language: Option<String>,
        /// Print the raw model reply instead of the normalized record
        #[arg(long)]
        raw: bool,
    },
    /// List the supported analysis modes
    Modes,
    /// Verify the configured provider is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            file,
            language,
            mode,
            output_language,
            raw,
        } => {
            let mode: AnalysisMode = mode.parse()?;
            let source_code = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            let mut request = AnalysisRequest::new(source_code, language, mode);
            if let Some(target) = output_language {
                request = request.with_target_language(target);
            }

            let config = InsightConfig::from_env()?;
            let service = AnalysisService::new(create_provider(&config));
            let outcome = service.analyze(&request).await?;

            if raw {
                println!("{}", outcome.raw_text);
            } else {
                println!("{}", serde_json::to_string_pretty(&outcome.record)?);
            }
        }
        Command::Modes => {
            for mode in AnalysisMode::ALL {
                println!("{}", mode);
            }
        }
        Command::Health => {
            let config = InsightConfig::from_env()?;
            let provider = create_provider(&config);
            provider
                .health_check()
                .await
                .with_context(|| format!("provider '{}' is not healthy", provider.name()))?;
            println!("{} ({}) ok", provider.name(), provider.model());
        }
    }

    Ok(())
}
