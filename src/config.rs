use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format used when displaying the current inventory
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// One item per line, indented by two spaces
    #[default]
    Text,
    /// A JSON array of item names
    Json,
}

impl std::fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayFormat::Text => write!(f, "text"),
            DisplayFormat::Json => write!(f, "json"),
        }
    }
}

fn default_pause() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether to wait for Enter after each command before showing the menu again
    #[serde(default = "default_pause")]
    pub pause: bool,
    /// Format used by the display command
    #[serde(default)]
    pub format: DisplayFormat,
    /// Items which are appended to the inventory when a session starts
    #[serde(default)]
    pub items: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pause: default_pause(),
            format: DisplayFormat::default(),
            items: vec![],
        }
    }
}

impl Config {
    /// Parses a config from a YAML string. Missing fields take their default values.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let c = serde_yaml::from_str(contents)?;
        Ok(c)
    }

    /// Loads the config from the YAML file at `config_path`.
    ///
    /// If `verbose` is true, the loaded config is printed to stderr.
    pub fn load_from_file(config_path: impl AsRef<Path>, verbose: bool) -> Result<Self> {
        let config_path = config_path.as_ref();
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Reading config file {}", config_path.display()))?;
        let c = Self::from_yaml(&contents)
            .with_context(|| format!("Parsing config file {}", config_path.display()))?;
        if verbose {
            eprintln!("Loaded config from {}:", config_path.display());
            eprintln!("  pause: {}", c.pause);
            eprintln!("  format: {}", c.format);
            eprintln!("  items: {:?}", c.items);
        }
        Ok(c)
    }
}
