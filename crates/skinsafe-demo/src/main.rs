//! skinsafe CLI
//!
//! Runs one classification — offline rule-based by default, or via the AI
//! path with `--ai` — prints the result contract as JSON, and optionally
//! saves a history record the way the result screen does.

use anyhow::Result;
use clap::Parser;
use skinsafe_ai::{AiClassifier, AiConfig, GroqBackend};
use skinsafe_core::Locale;
use skinsafe_rules::RuleClassifier;
use skinsafe_store::{save_history, JsonlHistoryStore};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "skinsafe")]
#[command(about = "Ingredient safety analysis engine", long_about = None)]
struct Cli {
    /// Comma-separated ingredient list, or a product/ingredient name
    text: String,

    /// Result locale (en or ms)
    #[arg(short, long, default_value = "en")]
    locale: Locale,

    /// Use the AI-augmented classifier instead of the offline rules
    #[arg(long)]
    ai: bool,

    /// AI configuration file path
    #[arg(short, long, default_value = "skinsafe.yaml")]
    config: String,

    /// Save the result to the history store
    #[arg(long)]
    save: bool,

    /// User id owning the saved record
    #[arg(short, long, default_value = "local")]
    user: String,

    /// History store file
    #[arg(long, default_value = "./history.jsonl")]
    history_file: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    describe_metrics();

    let result = if cli.ai {
        let config = AiConfig::load(&cli.config)?;
        info!(model = %config.model, "running AI-augmented analysis");
        let backend = Arc::new(GroqBackend::new(config.clone())?);
        AiClassifier::new(backend, config.model)
            .classify(&cli.text, cli.locale)
            .await
    } else {
        info!("running rule-based analysis");
        RuleClassifier::new().classify(&cli.text, cli.locale)
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    if cli.save {
        let store = JsonlHistoryStore::open(&cli.history_file)?;
        let record = save_history(&store, &cli.user, &cli.text, result).await?;
        info!(record_id = %record.id, file = %cli.history_file, "saved to history");
    }

    Ok(())
}

/// Initialize the tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Describe the counters the AI path records
fn describe_metrics() {
    metrics::describe_counter!(
        "skinsafe_ai_requests_total",
        "Total completion requests sent to the AI backend"
    );
    metrics::describe_counter!(
        "skinsafe_ai_fallbacks_total",
        "Total AI analyses that degraded to the fallback result"
    );
}
