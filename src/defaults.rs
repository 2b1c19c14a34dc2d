use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

const ENV_PREFIX: &str = "RESUME";

/// Fallback values the assembler uses when the content directory does not
/// provide them. Overridable from a TOML file and `RESUME_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    pub name: String,
    pub label: String,
    pub country_code: String,
    pub region: String,
    /// Prefixed to phone numbers written without a leading `+`.
    pub calling_code: String,
    /// Network name used for a LinkedIn profile found in the contact page.
    pub linkedin_network: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        ProfileDefaults {
            name: "Saleh Mehdikhani".into(),
            label: "Senior System Software Developer".into(),
            country_code: "FI".into(),
            region: "Finland".into(),
            calling_code: "+358".into(),
            linkedin_network: "LinkedIn".into(),
        }
    }
}

impl ProfileDefaults {
    /// Built-in values, then the optional file, then the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            debug!(path = %path.display(), "Loading profile defaults file");
            builder = builder.add_source(config::File::from(path).required(false));
        }
        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read profile defaults")?
            .try_deserialize()
            .context("Invalid profile defaults")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_values() {
        let defaults = ProfileDefaults::default();
        assert_eq!(defaults.country_code, "FI");
        assert_eq!(defaults.linkedin_network, "LinkedIn");
    }

    #[test]
    fn file_overrides_some_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defaults.toml");
        std::fs::write(&path, "name = \"Jane Doe\"\ncalling_code = \"+46\"\n").unwrap();

        let defaults = ProfileDefaults::load(Some(&path)).unwrap();
        assert_eq!(defaults.name, "Jane Doe");
        assert_eq!(defaults.calling_code, "+46");
        assert_eq!(defaults.region, "Finland");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let defaults = ProfileDefaults::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(defaults.label, ProfileDefaults::default().label);
    }
}
