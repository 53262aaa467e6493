// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::model::CrewFile;
use crate::config::validate::validate_crew;

/// Load a crew configuration file and return the raw `CrewFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (capability resolution, etc.). Use [`load_and_validate`] for
/// that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CrewFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading crew config at {:?}", path))?;

    let config: CrewFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML crew config from {:?}", path))?;

    Ok(config)
}

/// Load a crew configuration from path and run validation.
///
/// This is the entry point the CLI uses:
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that every capability name resolves against the registry.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CrewFile> {
    let config = load_from_path(&path)?;
    validate_crew(&config)?;
    Ok(config)
}

/// Default crew config path: `Crew.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Crew.toml")
}
