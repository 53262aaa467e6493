// src/synth/mod.rs

//! Synthesis requests and the external API client.
//!
//! `request` holds the normalized, immutable request types and the result
//! envelope; `client` does the HTTP round trips; `types` carries the
//! parameter enums shared with the CLI.

pub mod client;
pub mod request;
pub mod types;

pub use client::{OpenAiClient, SynthError, DEFAULT_BASE_URL};
pub use request::{ImageRequest, SpeechRequest, SynthesisResult, IMAGE_MODEL, SPEED_RANGE};
pub use types::{AudioFormat, ImageQuality, ImageSize, ImageStyle, SpeechModel, Voice};
