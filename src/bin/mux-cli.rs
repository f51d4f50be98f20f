use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pattern_mux::config::{load_config, ConfigWatcher, StrategyConfig};
use pattern_mux::observability::logging;
use pattern_mux::{Hit, Mux};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "mux-cli")]
#[command(about = "Resolve queries against a pattern dispatch table", long_about = None)]
struct Cli {
    /// Table definition (TOML).
    #[arg(short, long, default_value = "mux.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best binding for a query
    Resolve { query: String },
    /// Print every binding matching a query
    All { query: String },
    /// Validate the table and list its patterns
    Check,
    /// Keep the table hot-reloaded from disk until Ctrl-C
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    if let Err(e) = logging::init(&config.observability.log_level) {
        eprintln!("Logging disabled: {}", e);
    }

    let mux = config.build();
    tracing::debug!(path = ?cli.config, bindings = mux.len(), "Table loaded");

    match cli.command {
        Commands::Resolve { query } => {
            let hit = mux.lookup(&query)?;
            print_json(&hit.map(to_json).unwrap_or(Value::Null))?;
        }
        Commands::All { query } => {
            let mut hits = mux.lookup_all(&query)?;
            hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.pattern.cmp(&b.pattern)));
            print_json(&Value::Array(hits.into_iter().map(to_json).collect()))?;
        }
        Commands::Check => {
            print_json(&json!({
                "bindings": mux.len(),
                "patterns": mux.patterns(),
            }))?;
        }
        Commands::Watch => watch(cli.config, config.strategy, mux).await?,
    }

    Ok(())
}

async fn watch(
    path: PathBuf,
    live: StrategyConfig,
    mux: Mux<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _handle = watcher.run()?;

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(config) = update else { break };
                match config.reload_into(&mux, &live) {
                    Ok(()) => tracing::info!(bindings = mux.len(), "Table reloaded"),
                    Err(e) => tracing::error!(error = %e, "Reload rejected, keeping current table"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-C received, stopping watcher");
                break;
            }
        }
    }
    Ok(())
}

fn to_json(hit: Hit<String>) -> Value {
    json!({
        "pattern": hit.pattern,
        "value": hit.value,
        "score": hit.score,
    })
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
