// src/watch/runner.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::playback;
use crate::summary;
use crate::synth::{AudioFormat, OpenAiClient, SpeechModel, SpeechRequest, Voice};
use crate::watch::fingerprint::{self, Fingerprints};
use crate::watch::target::WatchTarget;
use crate::watch::watcher::spawn_event_watcher;

/// Settings shared by every synthesis triggered from a watch session.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub voice: Voice,
    pub model: SpeechModel,
    pub response_format: AudioFormat,
    pub speed: f64,
    pub output_dir: PathBuf,
    pub auto_play: bool,
    pub summary_only: bool,
    pub max_length: usize,
    /// Seconds between the end of one poll cycle and the start of the next.
    pub polling_interval: f64,
}

/// A running watch: target, accumulated fingerprints and synthesis settings.
///
/// The session is strictly sequential. One cycle polls, voices every changed
/// file one after another, then sleeps; a slow synthesis call simply delays
/// the next poll. Fingerprints live only for the lifetime of the session,
/// nothing is persisted across restarts.
pub struct WatchSession {
    target: WatchTarget,
    options: WatchOptions,
    client: OpenAiClient,
    fingerprints: Fingerprints,
}

impl WatchSession {
    pub fn new(target: WatchTarget, options: WatchOptions, client: OpenAiClient) -> Self {
        Self {
            target,
            options,
            client,
            fingerprints: Fingerprints::new(),
        }
    }

    /// Poll-driven watch loop. Runs until Ctrl-C.
    ///
    /// The shutdown signal is only observed between cycles; an in-flight
    /// synthesis call is never interrupted.
    pub async fn run_polling(mut self) -> Result<()> {
        info!(target = ?self.target, "watching for responses");

        let mut shutdown_rx = spawn_ctrl_c_listener();
        let interval = Duration::from_secs_f64(self.options.polling_interval);

        loop {
            self.poll_cycle().await;

            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("stopping watcher");
                    return Ok(());
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }
    }

    /// Event-driven watch loop built on filesystem notifications.
    ///
    /// Events only decide *when* to look; whether a file actually changed is
    /// still settled by the fingerprint diff, so editor quirks (truncate +
    /// write, metadata-only touches) don't produce duplicate speech.
    pub async fn run_events(mut self) -> Result<()> {
        info!(target = ?self.target, "watching for responses (event backend)");

        let mut shutdown_rx = spawn_ctrl_c_listener();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let _handle = spawn_event_watcher(self.target.root_dir(), event_tx)?;

        // Baseline cycle so files present at startup are voiced once, same as
        // the first poll in polling mode.
        self.poll_cycle().await;

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("stopping watcher");
                    return Ok(());
                }
                event = event_rx.recv() => {
                    if event.is_none() {
                        warn!("event watcher channel closed, stopping");
                        return Ok(());
                    }
                    // Drain whatever piled up while we were busy; one cycle
                    // covers all of it.
                    while event_rx.try_recv().is_ok() {}
                    self.poll_cycle().await;
                }
            }
        }
    }

    /// One cycle: diff the target against stored fingerprints and voice every
    /// changed file. Errors are logged and swallowed so the watch continues.
    async fn poll_cycle(&mut self) {
        let (changed, updated) = match fingerprint::diff(&self.fingerprints, &self.target) {
            Ok(pair) => pair,
            Err(err) => {
                warn!(error = %err, "poll cycle failed, will retry next interval");
                return;
            }
        };
        self.fingerprints = updated;

        for path in changed {
            self.process_file(&path).await;
        }
    }

    async fn process_file(&self, path: &Path) {
        info!(path = ?path, "detected changes");

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = ?path, error = %err, "failed to read changed file, skipping");
                return;
            }
        };

        let original_chars = text.chars().count();
        let processed = summary::summarize(&text, self.options.max_length, self.options.summary_only);
        let spoken_chars = processed.chars().count();
        if spoken_chars != original_chars {
            info!(original_chars, spoken_chars, "reduced text before voicing");
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "response".to_string());

        let request = SpeechRequest::build(
            processed,
            self.options.voice,
            self.options.model,
            self.options.response_format,
            self.options.speed,
            self.options.output_dir.clone(),
            format!("jarvis_{stem}"),
        );

        let result = self.client.synthesize_speech(&request).await;

        if result.success {
            info!(saved = ?result.saved_path, "audio generated");
            if self.options.auto_play {
                if let Some(saved) = &result.saved_path {
                    playback::play_audio(saved).await;
                }
            }
        } else {
            // One failed file never aborts the watch.
            error!(
                source = ?path,
                error = result.error.as_deref().unwrap_or("unknown error"),
                "speech synthesis failed"
            );
        }
    }
}

/// Spawn a task that forwards Ctrl-C into a channel.
///
/// The channel latches the signal, so a Ctrl-C arriving mid-synthesis is
/// delivered once the session next checks for shutdown.
fn spawn_ctrl_c_listener() -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel::<()>(1);
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {err}");
            return;
        }
        let _ = tx.send(()).await;
    });
    rx
}
