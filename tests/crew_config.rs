use std::error::Error;
use std::fs;

use tempfile::tempdir;

use jarvis_tools::config::load_and_validate;
use jarvis_tools::crew::{self, registry};

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> Result<(tempfile::TempDir, std::path::PathBuf), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("Crew.toml");
    fs::write(&path, contents)?;
    Ok((dir, path))
}

#[test]
fn valid_config_resolves_agents() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[default]
capabilities = ["summarization"]

[agent.narrator]
role = "Response narrator"
goal = "Voice finished responses for the user"
backstory = "Speaks every response aloud"
capabilities = ["voice_generation", "summarization"]

[agent.illustrator]
role = "Illustrator"
goal = "Produce images for reports"
capabilities = ["image_generation"]
allow_delegation = true
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    let agents = crew::resolve_agents(&cfg)?;

    assert_eq!(agents.len(), 2);

    let narrator = agents.iter().find(|a| a.name == "narrator").unwrap();
    let caps: Vec<_> = narrator.capabilities.iter().map(|c| c.name).collect();
    assert_eq!(caps, ["voice_generation", "summarization"]);
    assert!(!narrator.allow_delegation);

    let illustrator = agents.iter().find(|a| a.name == "illustrator").unwrap();
    assert!(illustrator.allow_delegation);
    assert_eq!(illustrator.capabilities[0].name, "image_generation");

    Ok(())
}

#[test]
fn agent_without_capabilities_falls_back_to_default() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[default]
capabilities = ["summarization"]

[agent.scribe]
role = "Scribe"
goal = "Condense responses"
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    let agents = crew::resolve_agents(&cfg)?;
    assert_eq!(agents[0].capabilities.len(), 1);
    assert_eq!(agents[0].capabilities[0].name, "summarization");

    Ok(())
}

#[test]
fn unknown_capability_is_rejected() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[agent.rogue]
role = "Rogue"
goal = "Use tools that do not exist"
capabilities = ["time_travel"]
"#,
    )?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(err.to_string().contains("time_travel"));

    Ok(())
}

#[test]
fn config_without_agents_is_rejected() -> TestResult {
    let (_dir, path) = write_config("[default]\ncapabilities = []\n")?;
    assert!(load_and_validate(&path).is_err());
    Ok(())
}

#[test]
fn agent_with_empty_capability_set_is_rejected() -> TestResult {
    let (_dir, path) = write_config(
        r#"
[agent.idle]
role = "Idle"
goal = "Do nothing"
"#,
    )?;

    // No agent capabilities and no [default] fallback.
    assert!(load_and_validate(&path).is_err());
    Ok(())
}

#[test]
fn registry_lookup_returns_fresh_equal_values() {
    let a = registry::lookup("voice_generation").unwrap();
    let b = registry::lookup("voice_generation").unwrap();
    assert_eq!(a, b);

    assert!(registry::lookup("nonexistent").is_none());
    assert_eq!(
        registry::available_names(),
        ["voice_generation", "image_generation", "summarization"]
    );
}
