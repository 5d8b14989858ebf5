//! Layered configuration for the CLI.
//!
//! Capacity parameters come from, in increasing precedence: built-in
//! defaults, a `curator.toml` file, `CURATOR_`-prefixed environment
//! variables, and command-line flags (applied by the caller).

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Capacity settings resolved from file and environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Number of team members.
    pub team_size: u32,
    /// Effective processing hours per person per day.
    pub processing_hours_per_person: f64,
}

impl Settings {
    /// Load settings from an explicit config file, or from `curator.toml`
    /// in the working directory when none is given. `CURATOR_*` environment
    /// variables override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("team_size", 10)?
            .set_default("processing_hours_per_person", 3.0)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("curator").required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("CURATOR"))
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration values")?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = Settings::load(Some(Path::new("/nonexistent/curator.toml")));
        // An explicitly named file must exist.
        assert!(settings.is_err());

        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.team_size, 10);
        assert_eq!(settings.processing_hours_per_person, 3.0);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "team_size = 5").unwrap();
        writeln!(file, "processing_hours_per_person = 2.0").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.team_size, 5);
        assert_eq!(settings.processing_hours_per_person, 2.0);
    }
}
