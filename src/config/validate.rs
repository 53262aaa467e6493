// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::CrewFile;
use crate::crew::registry;

/// Run semantic validation against a loaded crew configuration.
///
/// This checks:
/// - there is at least one agent
/// - every capability name (per-agent and default) exists in the registry
/// - no agent ends up with an empty capability set
pub fn validate_crew(cfg: &CrewFile) -> Result<()> {
    ensure_has_agents(cfg)?;
    validate_capability_names(cfg)?;
    Ok(())
}

fn ensure_has_agents(cfg: &CrewFile) -> Result<()> {
    if cfg.agent.is_empty() {
        return Err(anyhow!(
            "crew config must contain at least one [agent.<name>] section"
        ));
    }
    Ok(())
}

fn validate_capability_names(cfg: &CrewFile) -> Result<()> {
    for name in &cfg.default.capabilities {
        if registry::lookup(name).is_none() {
            return Err(unknown_capability("[default]", name));
        }
    }

    for (agent_name, agent) in cfg.agent.iter() {
        let capabilities = agent.effective_capabilities(&cfg.default);

        if capabilities.is_empty() {
            return Err(anyhow!(
                "agent '{}' has no capabilities (set `capabilities` on the agent or in [default])",
                agent_name
            ));
        }

        for name in capabilities {
            if registry::lookup(name).is_none() {
                return Err(unknown_capability(agent_name, name));
            }
        }
    }

    Ok(())
}

fn unknown_capability(owner: &str, name: &str) -> anyhow::Error {
    anyhow!(
        "unknown capability '{}' for {} (available: {})",
        name,
        owner,
        registry::available_names().join(", ")
    )
}
