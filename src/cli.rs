// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! One binary, one subcommand per tool: `speak` for direct text-to-speech,
//! `watch` for the auto-response watcher, `image` for image generation, and
//! `crew` for validating agent role configs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::synth::{AudioFormat, ImageQuality, ImageSize, ImageStyle, SpeechModel, Voice};

/// Command-line arguments for `jarvis`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jarvis",
    version,
    about = "Voice and image generation tools for Jarvis responses.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JARVIS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert text to speech once and optionally play it.
    Speak(SpeakArgs),
    /// Watch a file or directory and voice responses as they change.
    Watch(WatchArgs),
    /// Generate an image from a text prompt.
    Image(ImageArgs),
    /// Validate a crew config and print the resolved agent roles.
    Crew(CrewArgs),
}

/// Shared speech parameters (voice, model, format, speed).
#[derive(Debug, Clone, Args)]
pub struct SpeechParams {
    /// Voice to use.
    #[arg(long, value_enum, default_value = "nova")]
    pub voice: Voice,

    /// TTS model to use.
    #[arg(long, value_enum, default_value = "tts-1")]
    pub model: SpeechModel,

    /// Audio format.
    #[arg(long, value_enum, default_value = "mp3")]
    pub format: AudioFormat,

    /// Speed of speech (0.25 to 4.0).
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,
}

#[derive(Debug, Clone, Args)]
pub struct SpeakArgs {
    /// Text to convert to speech (alternatively use --file or pipe via stdin).
    pub text: Option<String>,

    /// File containing text to convert to speech.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub speech: SpeechParams,

    /// Directory to save the generated audio.
    #[arg(long, value_name = "PATH", default_value = "workspace/generated_audio")]
    pub output_dir: PathBuf,

    /// Specific filename for the output file (overrides --output-dir).
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// API key (defaults to the OPENAI_API_KEY environment variable).
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Automatically play the audio after generation.
    #[arg(long)]
    pub auto_play: bool,

    /// Try to extract and convert only the summary section.
    #[arg(long)]
    pub summary_only: bool,

    /// Maximum text length before summarization.
    #[arg(long, default_value_t = 1000)]
    pub max_length: usize,

    /// Output format for the result envelope.
    #[arg(long, value_enum, default_value = "text")]
    pub format_output: OutputMode,
}

#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    /// Specific file to watch for changes.
    #[arg(long, value_name = "PATH")]
    pub watch_file: Option<PathBuf>,

    /// Directory to watch for new/modified files.
    #[arg(long, value_name = "PATH")]
    pub watch_dir: Option<PathBuf>,

    /// Filename filter for directory watching.
    #[arg(long, value_name = "PATTERN", default_value = crate::watch::DEFAULT_GLOB)]
    pub glob: String,

    /// How often to check for changes (seconds).
    #[arg(long, default_value_t = 1.0)]
    pub polling_interval: f64,

    /// Change-detection backend.
    #[arg(long, value_enum, default_value = "poll")]
    pub backend: WatchBackend,

    #[command(flatten)]
    pub speech: SpeechParams,

    /// Directory to save the generated audio.
    #[arg(long, value_name = "PATH", default_value = "workspace/generated_audio")]
    pub output_dir: PathBuf,

    /// API key (defaults to the OPENAI_API_KEY environment variable).
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Don't automatically play audio after generation.
    #[arg(long)]
    pub no_auto_play: bool,

    /// Try to extract and convert only the summary section.
    #[arg(long)]
    pub summary_only: bool,

    /// Maximum text length before summarization.
    #[arg(long, default_value_t = 1000)]
    pub max_length: usize,
}

#[derive(Debug, Clone, Args)]
pub struct ImageArgs {
    /// Text description to generate an image from.
    pub prompt: String,

    /// Size of the generated image.
    #[arg(long, value_enum, default_value = "1024x1024")]
    pub size: ImageSize,

    /// Quality of the generated image.
    #[arg(long, value_enum, default_value = "standard")]
    pub quality: ImageQuality,

    /// Style of the generated image.
    #[arg(long, value_enum, default_value = "vivid")]
    pub style: ImageStyle,

    /// Directory to save the generated image.
    #[arg(long, value_name = "PATH", default_value = "workspace/generated_images")]
    pub output_dir: PathBuf,

    /// Prefix for the output filename.
    #[arg(long, default_value = "image")]
    pub prefix: String,

    /// API key (defaults to the OPENAI_API_KEY environment variable).
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Output format for the result envelope.
    #[arg(long, value_enum, default_value = "text")]
    pub format_output: OutputMode,
}

#[derive(Debug, Clone, Args)]
pub struct CrewArgs {
    /// Path to the crew config file (TOML).
    #[arg(long, value_name = "PATH", default_value = "Crew.toml")]
    pub config: PathBuf,

    /// Only show this agent.
    #[arg(long, value_name = "NAME")]
    pub agent: Option<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Result envelope rendering for one-shot commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

/// Change-detection backend for watch mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum WatchBackend {
    /// Hash-compare the target at a fixed interval (default, portable).
    Poll,
    /// Wake on filesystem notifications, confirm changes by hash.
    Events,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
