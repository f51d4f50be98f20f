//! Config file watching for hot reload.
//!
//! # Responsibilities
//! - Re-read the table definition when the file is created or modified
//! - Forward configs that parse and validate
//! - Skip half-written files instead of emptying the live table
//!
//! # Design Decisions
//! - A blank file is treated as "write in progress", never as "no bindings"
//! - Failed reloads are logged; the receiver keeps its current table

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::{parse_config, ConfigError};
use crate::config::schema::MuxConfig;

/// Read `path` for a reload. `Ok(None)` means the file is blank, which is
/// what a reader sees between an editor's truncate and its write.
pub fn read_reload(path: &Path) -> Result<Option<MuxConfig>, ConfigError> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    parse_config(&content).map(Some)
}

/// Watches a table definition and sends every valid reload.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<MuxConfig>,
}

impl ConfigWatcher {
    /// Returns the watcher and the receiving end for reloaded configs.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<MuxConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let watcher = Self {
            path: path.to_path_buf(),
            update_tx,
        };
        (watcher, update_rx)
    }

    /// Start watching. Updates stop when the returned handle is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, update_tx } = self;
        let watched = path.clone();

        let handler = move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!(error = ?e, "Watch error");
                    return;
                }
            };
            if !(event.kind.is_modify() || event.kind.is_create()) {
                return;
            }
            forward(&path, &update_tx);
        };

        let mut watcher = RecommendedWatcher::new(
            handler,
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&watched, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?watched, "Config watcher started");
        Ok(watcher)
    }
}

fn forward(path: &Path, update_tx: &mpsc::UnboundedSender<MuxConfig>) {
    match read_reload(path) {
        Ok(Some(config)) => {
            tracing::debug!(path = ?path, bindings = config.bindings.len(), "Config reloaded");
            if update_tx.send(config).is_err() {
                tracing::warn!(path = ?path, "Reload dropped, no receiver is listening");
            }
        }
        Ok(None) => {
            tracing::debug!(path = ?path, "Config file is blank, waiting for the write to finish");
        }
        Err(e) => {
            tracing::error!(path = ?path, error = %e, "Failed to reload config, keeping current bindings");
        }
    }
}
