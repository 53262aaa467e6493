// src/watch/watcher.rs

use std::path::PathBuf;

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Handle for the filesystem watcher.
///
/// Exists mainly so the underlying `RecommendedWatcher` stays alive for as
/// long as the watch session needs it. Dropping the handle stops watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher on `root` (non-recursive) that forwards raw
/// notify events into `event_tx`.
///
/// The watch session treats these events purely as a wake-up call: change
/// detection still goes through the fingerprint diff, which also filters out
/// events for paths the target doesn't cover.
pub fn spawn_event_watcher(
    root: impl Into<PathBuf>,
    event_tx: mpsc::UnboundedSender<Event>,
) -> Result<WatcherHandle> {
    let root = root.into();
    let root = root.canonicalize().unwrap_or_else(|_| root.clone()); // best-effort

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // We can't log via tracing here easily, so fall back to stderr.
                    eprintln!("jarvis: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("jarvis: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::NonRecursive)?;

    info!("file watcher started on {:?}", root);
    debug!("event watcher forwards raw notify events; diffing happens in the session");

    Ok(WatcherHandle { _inner: watcher })
}
