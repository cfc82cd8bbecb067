//! Rebuild on change
//!
//! Events arrive on a channel from the notify watcher. After the first
//! relevant event the channel is drained until it stays quiet for
//! [`DEBOUNCE`], then one synchronous rebuild runs.

use crate::config::SiteConfig;
use crate::error::SiteError;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// File types whose changes affect the output
pub const WATCHED_EXTENSIONS: &[&str] = &["html", "css", "json"];

fn has_watched_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| WATCHED_EXTENSIONS.contains(&ext))
}

pub fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| has_watched_extension(p))
}

/// Block forever, calling `rebuild` after each burst of relevant changes.
/// Returns only if the watcher itself fails or disconnects.
pub fn watch<F>(config: &SiteConfig, mut rebuild: F) -> Result<(), SiteError>
where
    F: FnMut() -> Result<(), SiteError>,
{
    let (tx, rx) = mpsc::channel::<Result<Event, notify::Error>>();
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        let _ = tx.send(res);
    })?;

    for dir in config.watched_dirs() {
        if dir.is_dir() {
            watcher.watch(dir, RecursiveMode::Recursive)?;
            info!(dir = %dir.display(), "watching");
        } else {
            warn!(dir = %dir.display(), "not watching missing directory");
        }
    }
    info!("watching for changes (Ctrl+C to stop)");

    while let Ok(res) = rx.recv() {
        match res {
            Ok(event) if is_relevant(&event) => {
                if let Some(path) = event.paths.first() {
                    info!(path = %path.display(), "change detected");
                }
                drain(&rx);
                if let Err(e) = rebuild() {
                    error!("rebuild failed: {}", e);
                }
            }
            Ok(_) => {}
            Err(e) => warn!("watch error: {}", e),
        }
    }
    Ok(())
}

/// Swallow queued events until the channel has been quiet for [`DEBOUNCE`]
fn drain<T>(rx: &mpsc::Receiver<T>) -> usize {
    let mut dropped = 0;
    while rx.recv_timeout(DEBOUNCE).is_ok() {
        dropped += 1;
    }
    dropped
}
