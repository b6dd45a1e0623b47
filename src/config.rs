use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for the `humanize` command.
///
/// Every option defaults to `false`. Command-line flags can switch options
/// on but never off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Whether to carry on past inputs that are not valid numbers.
    ///
    /// When `false` (default): the first invalid input aborts the run.
    ///
    /// When `true`: each invalid input is reported on stderr, the remaining
    /// inputs are still converted, and the run fails at the end.
    pub keep_going: bool,

    /// Whether to prefix each line of output with the number it names.
    ///
    /// Example: `142: one hundred and forty-two`
    pub echo: bool,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns a copy of this configuration with the given overrides switched
    /// on.
    #[must_use]
    pub const fn with_overrides(self, keep_going: bool, echo: bool) -> Self {
        Self {
            keep_going: self.keep_going || keep_going,
            echo: self.echo || echo,
        }
    }
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        keep_going: bool,

        #[serde(default)]
        echo: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { keep_going, echo } => Self { keep_going, echo },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            keep_going: config.keep_going,
            echo: config.echo,
        }
    }
}
