//! Output rendering.
//!
//! Turns an evaluated aggregate into terminal, HTML, plain or JSON text.

pub mod generator;

use serde::{Deserialize, Serialize};

pub use generator::{render, render_ansi, render_html, render_json, render_plain};

/// Output format of a rendered aggregate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal escape codes (default)
    #[default]
    Ansi,
    /// HTML spans with inline styles
    Html,
    /// Text only
    Plain,
    /// JSON
    Json,
}

/// When to emit terminal colour codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Install this mode as the process-wide colour setting.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Options shared by the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// CSS class on the outer HTML element.
    pub html_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            html_class: "blockfold".to_string(),
        }
    }
}
