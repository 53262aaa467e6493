// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Crew configuration as read from a TOML file.
///
/// A direct mapping of files like:
///
/// ```toml
/// [default]
/// capabilities = ["summarization"]
///
/// [agent.narrator]
/// role = "Response narrator"
/// goal = "Voice finished responses for the user"
/// capabilities = ["voice_generation", "summarization"]
/// ```
///
/// All sections are optional at parse time; semantic checks live in
/// `validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewFile {
    /// Fallbacks applied to agents that do not set their own values.
    #[serde(default)]
    pub default: DefaultSection,

    /// All agents from `[agent.<name>]`, keyed by agent name.
    #[serde(default)]
    pub agent: BTreeMap<String, AgentConfig>,
}

/// `[default]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultSection {
    /// Capabilities granted to agents that do not declare their own list.
    #[serde(default)]
    pub capabilities: Vec<String>,

    /// Default output directory for artifacts produced by agent capabilities.
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// `[agent.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Human-readable role title.
    pub role: String,

    /// What this agent is meant to accomplish.
    pub goal: String,

    /// Optional flavour text handed to the orchestration layer.
    #[serde(default)]
    pub backstory: Option<String>,

    /// Capability names this agent may use.
    ///
    /// If `None`, the agent falls back to `default.capabilities`.
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,

    /// Whether the agent may delegate work to other agents.
    #[serde(default)]
    pub allow_delegation: bool,
}

impl AgentConfig {
    /// Effective capability list given the `[default]` section.
    pub fn effective_capabilities<'a>(&'a self, defaults: &'a DefaultSection) -> &'a [String] {
        match &self.capabilities {
            Some(list) => list,
            None => &defaults.capabilities,
        }
    }
}
