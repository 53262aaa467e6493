// src/config/mod.rs

//! Configuration: declarative crew roles (TOML) and secret resolution.

pub mod loader;
pub mod model;
pub mod secrets;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{AgentConfig, CrewFile, DefaultSection};
pub use secrets::{resolve_api_key, API_KEY_VAR};
pub use validate::validate_crew;
