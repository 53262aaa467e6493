// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Describing what to watch (a single file, or a directory + glob filter).
//! - Content-hash fingerprinting so a file only counts as changed when its
//!   bytes actually differ.
//! - Driving the poll-process-sleep loop (and an optional event-driven
//!   backend built on `notify`).
//!
//! It does **not** know how speech is synthesized; it only turns file changes
//! into calls on the synthesis client.

pub mod fingerprint;
pub mod runner;
pub mod target;
pub mod watcher;

pub use fingerprint::{diff, hash_file, snapshot, Fingerprints};
pub use runner::{WatchOptions, WatchSession};
pub use target::{WatchTarget, DEFAULT_GLOB};
pub use watcher::{spawn_event_watcher, WatcherHandle};
