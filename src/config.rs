//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.blockfold.toml` files.

use crate::render::{ColorMode, OutputFormat, RenderOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = ".blockfold.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Builder defaults.
    #[serde(default)]
    pub builders: BuildersConfig,

    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path; stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Terminal colour mode.
    #[serde(default)]
    pub color: ColorMode,

    /// CSS class for HTML output.
    #[serde(default = "default_html_class")]
    pub html_class: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            html_class: default_html_class(),
        }
    }
}

fn default_html_class() -> String {
    "blockfold".to_string()
}

impl RenderConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            html_class: self.html_class.clone(),
        }
    }
}

/// Builder defaults, used when a document does not set them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildersConfig {
    /// Separator for `joined` documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Salutation for `greeting` documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
}

/// Document scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Document extensions to include.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Names to exclude.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,

    /// Maximum documents per directory input.
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excludes: default_excludes(),
            max_documents: default_max_documents(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["toml", "json"].into_iter().map(String::from).collect()
}

fn default_excludes() -> Vec<String> {
    vec!["target", "node_modules", "dist", "build"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_max_documents() -> usize {
    100
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load configuration from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly. `--separator` and `--salutation`
    /// stay out of `builders`, which only holds fallbacks for documents.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(format) = args.format {
            self.render.format = format;
        }
        if let Some(color) = args.color {
            self.render.color = color;
        }
        if let Some(ref output) = args.output {
            self.general.output = Some(output.display().to_string());
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Log level for this run. `--quiet` wins over a verbose config.
    pub fn log_level(&self, args: &crate::cli::Args) -> tracing::Level {
        if self.general.verbose && !args.quiet {
            tracing::Level::DEBUG
        } else {
            args.log_level()
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
