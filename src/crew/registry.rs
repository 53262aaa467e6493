// src/crew/registry.rs

//! Static capability registry.
//!
//! A capability is a named ability an agent may be granted (voicing text,
//! generating images, summarizing). The registry is a plain mapping from
//! capability name to a factory function producing a fresh descriptor; there
//! is no singleton with identity semantics, two lookups of the same name are
//! equal but independent values.

/// Descriptor for one capability, as handed to the orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySpec {
    pub name: &'static str,
    pub description: &'static str,
}

type CapabilityFactory = fn() -> CapabilitySpec;

/// All capabilities this toolset ships, by name.
static REGISTRY: &[(&str, CapabilityFactory)] = &[
    ("voice_generation", voice_generation),
    ("image_generation", image_generation),
    ("summarization", summarization),
];

fn voice_generation() -> CapabilitySpec {
    CapabilitySpec {
        name: "voice_generation",
        description: "Convert text to speech audio via the external TTS API",
    }
}

fn image_generation() -> CapabilitySpec {
    CapabilitySpec {
        name: "image_generation",
        description: "Generate images from text prompts via the external image API",
    }
}

fn summarization() -> CapabilitySpec {
    CapabilitySpec {
        name: "summarization",
        description: "Extract or truncate a summary from long text",
    }
}

/// Look up a capability by name.
pub fn lookup(name: &str) -> Option<CapabilitySpec> {
    REGISTRY
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, factory)| factory())
}

/// Names of all registered capabilities, in registry order.
pub fn available_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(key, _)| *key).collect()
}
