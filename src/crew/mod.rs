// src/crew/mod.rs

//! Declarative agent roles over the capability registry.
//!
//! The orchestration engine itself is an external concern; this module only
//! resolves role descriptions (from `Crew.toml`) against the static registry
//! at startup, so misconfigured capability names fail before anything runs.

pub mod registry;

use anyhow::Result;

use crate::config::model::CrewFile;

pub use registry::{available_names, lookup, CapabilitySpec};

/// An agent role with its capability names resolved to descriptors.
#[derive(Debug, Clone)]
pub struct ResolvedAgent {
    pub name: String,
    pub role: String,
    pub goal: String,
    pub backstory: Option<String>,
    pub allow_delegation: bool,
    pub capabilities: Vec<CapabilitySpec>,
}

/// Resolve every agent in the configuration.
///
/// Assumes `cfg` has been validated; an unknown capability here is a bug in
/// the validation layer, not user error, so it is still reported rather than
/// panicking.
pub fn resolve_agents(cfg: &CrewFile) -> Result<Vec<ResolvedAgent>> {
    let mut agents = Vec::with_capacity(cfg.agent.len());

    for (name, agent) in cfg.agent.iter() {
        let mut capabilities = Vec::new();
        for cap_name in agent.effective_capabilities(&cfg.default) {
            let spec = registry::lookup(cap_name).ok_or_else(|| {
                anyhow::anyhow!("capability '{}' for agent '{}' not in registry", cap_name, name)
            })?;
            capabilities.push(spec);
        }

        agents.push(ResolvedAgent {
            name: name.clone(),
            role: agent.role.clone(),
            goal: agent.goal.clone(),
            backstory: agent.backstory.clone(),
            allow_delegation: agent.allow_delegation,
            capabilities,
        });
    }

    Ok(agents)
}
