// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! At the moment this is just a thin wrapper around `anyhow` (structured
//! errors for the API client live in `synth::client`), but the module gives
//! us a single place to add more shared error types later.

pub use anyhow::{Error, Result};
