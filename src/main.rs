use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use duet_algo::config::Settings;
use duet_algo::core::Matcher;
use duet_algo::error::MatchError;
use duet_algo::models::Snapshot;

/// Pair participants by music taste and emit the match records
#[derive(Debug, Parser)]
#[command(name = "duet-algo", version, about)]
struct Cli {
    /// Participant snapshot to match (JSON)
    #[arg(long)]
    snapshot: PathBuf,

    /// Write the outcome here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file overriding config/default.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        error!("Matching run failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MatchError> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .map_err(|e| MatchError::Config(e.to_string()))?;

    info!("Reading snapshot from {}", cli.snapshot.display());
    let raw = fs::read_to_string(&cli.snapshot)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)?;
    info!(
        "Snapshot loaded: {} participants, {} rank triples, {} catalogued artists",
        snapshot.participants.len(),
        snapshot.rankings.len(),
        snapshot.artists.len()
    );

    let matcher = Matcher::new(
        settings.graph_options(),
        settings.score_curve(),
        settings.matching.record_order,
    );
    let outcome = matcher.run(snapshot.participants, snapshot.rankings, &snapshot.artists)?;

    let body = if cli.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, body)?;
            info!("Outcome written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(body.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}
