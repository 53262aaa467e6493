// src/playback.rs

//! Local audio playback via the platform player.
//!
//! Playback spawns a child process and waits for it; depending on the
//! platform command this either blocks until playback finishes (`afplay`) or
//! returns as soon as the file is handed to a desktop player (`xdg-open`,
//! `start`). A missing or failing player is never fatal.

use std::path::Path;

use tokio::process::Command;
use tracing::{info, warn};

/// Play the audio file at `path` with whatever this platform offers.
pub async fn play_audio(path: &Path) {
    let mut cmd = if cfg!(target_os = "macos") {
        let mut c = Command::new("afplay");
        c.arg(path);
        c
    } else if cfg!(target_os = "linux") {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    } else if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg("start").arg("").arg(path);
        c
    } else {
        info!("auto-play not supported on this platform, audio saved to {:?}", path);
        return;
    };

    info!(path = ?path, "playing audio");

    match cmd.status().await {
        Ok(status) if !status.success() => {
            warn!(path = ?path, code = status.code(), "audio player exited with failure");
        }
        Ok(_) => {}
        Err(err) => {
            warn!(path = ?path, error = %err, "failed to launch audio player");
        }
    }
}
