// src/lib.rs

pub mod cli;
pub mod config;
pub mod crew;
pub mod errors;
pub mod logging;
pub mod playback;
pub mod summary;
pub mod synth;
pub mod watch;

use std::io::{IsTerminal, Read};

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use crate::cli::{CliArgs, Command, CrewArgs, ImageArgs, OutputMode, SpeakArgs, WatchArgs, WatchBackend};
use crate::config::{load_and_validate, resolve_api_key};
use crate::crew::resolve_agents;
use crate::synth::{ImageRequest, OpenAiClient, SpeechRequest, SynthesisResult};
use crate::watch::{WatchOptions, WatchSession, WatchTarget};

/// High-level entry point used by `main.rs`.
pub async fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Speak(args) => run_speak(args).await,
        Command::Watch(args) => run_watch(args).await,
        Command::Image(args) => run_image(args).await,
        Command::Crew(args) => run_crew(args),
    }
}

/// One-shot text-to-speech.
async fn run_speak(args: SpeakArgs) -> Result<()> {
    let text = read_text_source(&args)?;

    let processed = summary::summarize(&text, args.max_length, args.summary_only);
    let original_chars = text.chars().count();
    let spoken_chars = processed.chars().count();
    if spoken_chars != original_chars {
        info!(original_chars, spoken_chars, "reduced text before voicing");
    }

    let api_key = resolve_api_key(args.api_key.as_deref())?;
    let client = OpenAiClient::new(&api_key)?;

    let mut request = SpeechRequest::build(
        processed,
        args.speech.voice,
        args.speech.model,
        args.speech.format,
        args.speech.speed,
        args.output_dir.clone(),
        "jarvis",
    );
    if let Some(output_file) = &args.output_file {
        request = request.with_output_file(output_file);
    }

    let result = client.synthesize_speech(&request).await;

    if result.success {
        if args.auto_play {
            if let Some(saved) = &result.saved_path {
                playback::play_audio(saved).await;
            }
        }
    }

    render_result(&result, args.format_output)
}

/// Auto-response watcher: voice files as they change.
async fn run_watch(args: WatchArgs) -> Result<()> {
    let target = match (&args.watch_file, &args.watch_dir) {
        (Some(file), None) => WatchTarget::single_file(file),
        (None, Some(dir)) => WatchTarget::directory(dir, &args.glob)?,
        (Some(_), Some(_)) => {
            bail!("--watch-file and --watch-dir are mutually exclusive")
        }
        (None, None) => {
            bail!("either --watch-file or --watch-dir must be provided")
        }
    };

    if args.polling_interval <= 0.0 {
        bail!(
            "--polling-interval must be positive (got {})",
            args.polling_interval
        );
    }

    let api_key = resolve_api_key(args.api_key.as_deref())?;
    let client = OpenAiClient::new(&api_key)?;

    let options = WatchOptions {
        voice: args.speech.voice,
        model: args.speech.model,
        response_format: args.speech.format,
        speed: args.speech.speed,
        output_dir: args.output_dir,
        auto_play: !args.no_auto_play,
        summary_only: args.summary_only,
        max_length: args.max_length,
        polling_interval: args.polling_interval,
    };

    let session = WatchSession::new(target, options, client);
    match args.backend {
        WatchBackend::Poll => session.run_polling().await,
        WatchBackend::Events => session.run_events().await,
    }
}

/// One-shot image generation.
async fn run_image(args: ImageArgs) -> Result<()> {
    let api_key = resolve_api_key(args.api_key.as_deref())?;
    let client = OpenAiClient::new(&api_key)?;

    let request = ImageRequest::build(
        args.prompt,
        args.size,
        args.quality,
        args.style,
        args.output_dir,
        args.prefix,
    );

    let result = client.generate_image(&request).await;
    render_result(&result, args.format_output)
}

/// Validate a crew config and print the resolved agent roles.
fn run_crew(args: CrewArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;
    let mut agents = resolve_agents(&cfg)?;

    if let Some(name) = &args.agent {
        agents.retain(|a| &a.name == name);
        if agents.is_empty() {
            bail!("no agent named '{}' in {:?}", name, args.config);
        }
    }

    println!("crew config OK ({:?})", args.config);
    println!();
    println!("agents ({}):", agents.len());
    for agent in &agents {
        println!("  - {}", agent.name);
        println!("      role: {}", agent.role);
        println!("      goal: {}", agent.goal);
        if let Some(backstory) = &agent.backstory {
            println!("      backstory: {backstory}");
        }
        if agent.allow_delegation {
            println!("      delegation: allowed");
        }
        println!("      capabilities:");
        for cap in &agent.capabilities {
            println!("        - {}: {}", cap.name, cap.description);
        }
    }

    Ok(())
}

/// Get the speak text from the positional argument, `--file`, or stdin.
fn read_text_source(args: &SpeakArgs) -> Result<String> {
    let text = if let Some(text) = &args.text {
        text.clone()
    } else if let Some(file) = &args.file {
        std::fs::read_to_string(file)
            .with_context(|| format!("reading text from {:?}", file))?
    } else if !std::io::stdin().is_terminal() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading text from stdin")?;
        buf
    } else {
        bail!("either provide text as an argument, use --file, or pipe text via stdin");
    };

    if text.trim().is_empty() {
        bail!("no text content to process");
    }

    Ok(text)
}

/// Print the result envelope.
///
/// JSON mode always prints the envelope and exits cleanly; the error lives
/// inside it. Text mode turns a failed synthesis into a process failure.
fn render_result(result: &SynthesisResult, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
            Ok(())
        }
        OutputMode::Text => {
            if result.success {
                println!("Generated successfully!");
                if let Some(path) = &result.saved_path {
                    println!("Saved to: {}", path.display());
                }
                if let Some(url) = &result.image_url {
                    println!("Source URL: {url}");
                }
                Ok(())
            } else {
                Err(anyhow!(
                    "synthesis failed: {}",
                    result.error.as_deref().unwrap_or("unknown error")
                ))
            }
        }
    }
}
