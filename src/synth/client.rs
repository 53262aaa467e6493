// src/synth/client.rs

//! HTTP client for the external speech and image generation APIs.
//!
//! Both endpoints are treated as black boxes: parameters in, audio bytes or
//! an image URL out. Errors come back verbatim in the result envelope and are
//! never retried here.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::synth::request::{ImageRequest, SpeechRequest, SynthesisResult};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Errors from the synthesis client.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("writing artifact to {path:?}: {source}")]
    Save {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("image response contained no URL")]
    MissingImageUrl,
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
    #[allow(dead_code)]
    revised_prompt: Option<String>,
}

/// Client for the speech and image endpoints.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str) -> anyhow::Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
                .map_err(|e| anyhow::anyhow!("invalid API key: {e}"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Map non-2xx responses into `SynthError::Api`, pulling the message out
    /// of the JSON error body when the service provides one.
    async fn check_response(&self, response: Response) -> Result<Response, SynthError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = serde_json::from_str::<serde_json::Value>(&message)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or(message);

        Err(SynthError::Api { status, message })
    }

    /// Synthesize speech and save the returned audio bytes.
    ///
    /// Never fails at the type level; all errors end up as a `success: false`
    /// envelope so watch loops can log and continue.
    pub async fn synthesize_speech(&self, request: &SpeechRequest) -> SynthesisResult {
        match self.speech_inner(request).await {
            Ok(path) => SynthesisResult::saved(&request.text, path),
            Err(err) => SynthesisResult::failed(&request.text, err.to_string()),
        }
    }

    async fn speech_inner(&self, request: &SpeechRequest) -> Result<PathBuf, SynthError> {
        debug!(model = request.model.as_str(), voice = request.voice.as_str(), "requesting speech");

        let response = self
            .client
            .post(self.url("/audio/speech"))
            .json(&request.body())
            .send()
            .await?;
        let response = self.check_response(response).await?;
        let bytes = response.bytes().await?;

        let path = request.output_path(Local::now());
        save_bytes(&path, &bytes).await?;

        info!(path = ?path, bytes = bytes.len(), "saved synthesized audio");
        Ok(path)
    }

    /// Generate an image, download it from the returned URL, and save it.
    pub async fn generate_image(&self, request: &ImageRequest) -> SynthesisResult {
        match self.image_inner(request).await {
            Ok((path, url)) => SynthesisResult::saved(&request.prompt, path).with_image_url(url),
            Err(err) => SynthesisResult::failed(&request.prompt, err.to_string()),
        }
    }

    async fn image_inner(&self, request: &ImageRequest) -> Result<(PathBuf, String), SynthError> {
        debug!(size = request.size.as_str(), quality = request.quality.as_str(), "requesting image");

        let response = self
            .client
            .post(self.url("/images/generations"))
            .json(&request.body())
            .send()
            .await?;
        let response = self.check_response(response).await?;

        let image_response: ImageResponse = response.json().await?;
        let url = image_response
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or(SynthError::MissingImageUrl)?;

        let download = self.client.get(&url).send().await?;
        let download = self.check_response(download).await?;
        let bytes = download.bytes().await?;

        let path = request.output_path(Local::now());
        save_bytes(&path, &bytes).await?;

        info!(path = ?path, url = %url, "saved generated image");
        Ok((path, url))
    }
}

/// Write artifact bytes, creating the output directory if absent.
///
/// Directory-creation failures are reported rather than skipped; a watcher
/// that can never write its artifacts should say so loudly.
async fn save_bytes(path: &PathBuf, bytes: &[u8]) -> Result<(), SynthError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SynthError::Save {
                    path: path.clone(),
                    source,
                })?;
        }
    }

    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| SynthError::Save {
            path: path.clone(),
            source,
        })
}
