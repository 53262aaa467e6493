// src/synth/request.rs

use std::ops::RangeInclusive;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::synth::types::{AudioFormat, ImageQuality, ImageSize, ImageStyle, SpeechModel, Voice};

/// Speed range documented by the speech endpoint.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.25..=4.0;

/// Image model used for generation requests.
pub const IMAGE_MODEL: &str = "dall-e-3";

/// A normalized speech synthesis request. Immutable once built.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub voice: Voice,
    pub model: SpeechModel,
    pub response_format: AudioFormat,
    pub speed: f64,
    pub output_dir: PathBuf,
    pub filename_prefix: String,
    /// Explicit output path; overrides `output_dir` + generated filename.
    pub output_file: Option<PathBuf>,
}

impl SpeechRequest {
    /// Assemble a request.
    ///
    /// An out-of-range `speed` is logged but still forwarded unclamped; the
    /// external service is the authority on what it accepts.
    pub fn build(
        text: impl Into<String>,
        voice: Voice,
        model: SpeechModel,
        response_format: AudioFormat,
        speed: f64,
        output_dir: impl Into<PathBuf>,
        filename_prefix: impl Into<String>,
    ) -> Self {
        if !SPEED_RANGE.contains(&speed) {
            warn!(
                speed,
                "speed outside documented range [0.25, 4.0], forwarding as-is"
            );
        }

        Self {
            text: text.into(),
            voice,
            model,
            response_format,
            speed,
            output_dir: output_dir.into(),
            filename_prefix: filename_prefix.into(),
            output_file: None,
        }
    }

    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// JSON body sent to the speech endpoint.
    pub fn body(&self) -> Value {
        json!({
            "model": self.model.as_str(),
            "input": self.text,
            "voice": self.voice.as_str(),
            "response_format": self.response_format.as_str(),
            "speed": self.speed,
        })
    }

    /// Where the synthesized audio goes: the explicit output file if set,
    /// otherwise `output_dir/<prefix>_<timestamp>.<ext>`.
    pub fn output_path(&self, now: DateTime<Local>) -> PathBuf {
        if let Some(path) = &self.output_file {
            return path.clone();
        }

        let prefix = if self.filename_prefix.is_empty() {
            "speech"
        } else {
            &self.filename_prefix
        };
        let stamp = now.format("%Y%m%d_%H%M%S");
        self.output_dir
            .join(format!("{prefix}_{stamp}.{}", self.response_format.extension()))
    }
}

/// A normalized image generation request. Immutable once built.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub prompt: String,
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub style: ImageStyle,
    pub output_dir: PathBuf,
    pub filename_prefix: String,
}

impl ImageRequest {
    pub fn build(
        prompt: impl Into<String>,
        size: ImageSize,
        quality: ImageQuality,
        style: ImageStyle,
        output_dir: impl Into<PathBuf>,
        filename_prefix: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            size,
            quality,
            style,
            output_dir: output_dir.into(),
            filename_prefix: filename_prefix.into(),
        }
    }

    /// JSON body sent to the image endpoint.
    pub fn body(&self) -> Value {
        json!({
            "model": IMAGE_MODEL,
            "prompt": self.prompt,
            "n": 1,
            "size": self.size.as_str(),
            "quality": self.quality.as_str(),
            "style": self.style.as_str(),
        })
    }

    pub fn output_path(&self, now: DateTime<Local>) -> PathBuf {
        let prefix = if self.filename_prefix.is_empty() {
            "image"
        } else {
            &self.filename_prefix
        };
        let stamp = now.format("%Y%m%d_%H%M%S");
        self.output_dir.join(format!("{prefix}_{stamp}.png"))
    }
}

/// Structured response envelope for one synthesis request.
///
/// Consumed immediately by the caller; also what `--format-output json`
/// prints. All fields are always present, absent values serialize as null.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisResult {
    pub success: bool,
    pub text: String,
    pub saved_path: Option<PathBuf>,
    pub image_url: Option<String>,
    pub error: Option<String>,
}

impl SynthesisResult {
    pub fn saved(text: impl Into<String>, path: PathBuf) -> Self {
        Self {
            success: true,
            text: text.into(),
            saved_path: Some(path),
            image_url: None,
            error: None,
        }
    }

    pub fn failed(text: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
            saved_path: None,
            image_url: None,
            error: Some(error.into()),
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
