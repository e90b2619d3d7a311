use crate::error::{HealthError, Result};
use crate::health::profile::ScoringProfile;
use crate::health::rules::ScoringRule;
use crate::types::machine::{MachineType, Part};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    rule: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    machine: MachineType,
    part: Part,
    scoring: ScoringRule,
}

/// Builtin scoring table, optionally overlaid with `[[rule]]` entries from
/// a TOML profile file. Overrides may re-tune existing pairs or register
/// new ones; a degenerate rule constant fails the whole load.
pub fn load_profile(path: Option<&Path>) -> Result<ScoringProfile> {
    let mut profile = ScoringProfile::builtin();
    let Some(path) = path else {
        return Ok(profile);
    };

    let content = std::fs::read_to_string(path)?;
    let parsed: ProfileFile = toml::from_str(&content)
        .map_err(|e| HealthError::ProfileParse(format!("{}: {}", path.display(), e)))?;

    for entry in parsed.rule {
        entry.scoring.validate().map_err(|msg| {
            HealthError::ProfileParse(format!("{}/{}: {}", entry.machine, entry.part, msg))
        })?;
        profile.set_rule(entry.machine, entry.part, entry.scoring);
    }

    Ok(profile)
}
