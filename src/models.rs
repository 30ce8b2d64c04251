//! Data models for block documents.
//!
//! A block document describes, declaratively, the statements of one block:
//! which builder folds them, the flags its conditions read, and the ordered
//! segments themselves.

use crate::attributed::{Attributes, Color, Font, Shadow, Underline, UnderlineStyle};
use crate::error::{ComposeError, ComposeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Which builder folds the document's segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderKind {
    /// Plain concatenation.
    Concat,
    /// Separator join.
    Joined,
    /// One greeting line per segment.
    Greeting,
    /// Styled text runs.
    #[default]
    Attributed,
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderKind::Concat => write!(f, "concat"),
            BuilderKind::Joined => write!(f, "joined"),
            BuilderKind::Greeting => write!(f, "greeting"),
            BuilderKind::Attributed => write!(f, "attributed"),
        }
    }
}

/// Underline given either as a bare colour or with a style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnderlineSpec {
    Color(Color),
    Full(Underline),
}

impl From<UnderlineSpec> for Underline {
    fn from(spec: UnderlineSpec) -> Self {
        match spec {
            UnderlineSpec::Color(color) => Underline {
                color,
                style: UnderlineStyle::Single,
            },
            UnderlineSpec::Full(underline) => underline,
        }
    }
}

/// The text of one statement and its styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentBody {
    /// Segment text.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<UnderlineSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Keys no field claimed; rejected when the document is parsed.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

impl SegmentBody {
    /// Unstyled body.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            foreground: None,
            background: None,
            underline: None,
            font: None,
            shadow: None,
            unknown: BTreeMap::new(),
        }
    }

    /// The styling as an attribute set.
    pub fn attributes(&self) -> Attributes {
        Attributes {
            foreground: self.foreground,
            background: self.background,
            underline: self.underline.map(Underline::from),
            font: self.font.clone(),
            shadow: self.shadow,
        }
    }

    /// Whether any style field is set.
    pub fn is_styled(&self) -> bool {
        !self.attributes().is_plain()
    }
}

/// One statement of the block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    #[serde(flatten)]
    pub body: SegmentBody,
    /// Flag guarding the statement; `!name` negates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,
    /// Statement used when the guard is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<SegmentBody>,
}

impl SegmentSpec {
    /// An unconditional, unstyled statement.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            body: SegmentBody::plain(text),
            when: None,
            otherwise: None,
        }
    }

    /// The parsed guard, if any.
    pub fn condition(&self) -> Option<Condition> {
        self.when.as_deref().map(Condition::parse)
    }
}

/// A flag test: `name` or `!name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub flag: String,
    pub negated: bool,
}

impl Condition {
    /// Parse a `when` expression.
    pub fn parse(expr: &str) -> Self {
        let expr = expr.trim();
        match expr.strip_prefix('!') {
            Some(flag) => Self {
                flag: flag.trim().to_string(),
                negated: true,
            },
            None => Self {
                flag: expr.to_string(),
                negated: false,
            },
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.flag)
        } else {
            write!(f, "{}", self.flag)
        }
    }
}

/// Named boolean flags read by segment conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(BTreeMap<String, bool>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    /// Parse `NAME`, `NAME=true` or `NAME=false` and record it.
    pub fn assign(&mut self, assignment: &str) -> ComposeResult<()> {
        let invalid = || ComposeError::InvalidFlag(assignment.to_string());

        let (name, value) = match assignment.split_once('=') {
            Some((name, value)) => {
                let value = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
                (name.trim(), value)
            }
            None => (assignment.trim(), true),
        };

        if name.is_empty() || name.starts_with('!') {
            return Err(invalid());
        }

        self.set(name, value);
        Ok(())
    }

    /// These flags with `overrides` layered on top.
    pub fn overlay(&self, overrides: &Flags) -> Flags {
        let mut merged = self.clone();
        for (name, value) in &overrides.0 {
            merged.set(name.clone(), *value);
        }
        merged
    }

    /// Evaluate a condition for the segment at `index`.
    pub fn test(&self, condition: &Condition, index: usize) -> ComposeResult<bool> {
        let value = self
            .get(&condition.flag)
            .ok_or_else(|| ComposeError::UnknownFlag {
                flag: condition.flag.clone(),
                index,
            })?;
        Ok(value != condition.negated)
    }
}

/// A complete block document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockDocument {
    /// Builder that folds the segments.
    #[serde(default)]
    pub builder: BuilderKind,

    /// Separator for the `joined` builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// Salutation for the `greeting` builder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,

    /// Default flag values.
    #[serde(default)]
    pub flags: Flags,

    /// Statements, in declaration order.
    #[serde(default)]
    pub segments: Vec<SegmentSpec>,
}

impl BlockDocument {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str, path: &Path) -> ComposeResult<Self> {
        toml::from_str(content).map_err(|e| ComposeError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str, path: &Path) -> ComposeResult<Self> {
        serde_json::from_str(content).map_err(|e| ComposeError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse `content` according to the extension of `path`.
    ///
    /// Paths without an extension are read as TOML. Unknown segment keys
    /// are an error, so a misspelled `when` cannot drop its guard.
    pub fn parse(content: &str, path: &Path) -> ComposeResult<Self> {
        let document = match path.extension().and_then(|e| e.to_str()) {
            None | Some("toml") => Self::from_toml_str(content, path)?,
            Some("json") => Self::from_json_str(content, path)?,
            Some(other) => return Err(ComposeError::UnsupportedFormat(other.to_string())),
        };
        document.check_keys(path)?;
        Ok(document)
    }

    fn check_keys(&self, path: &Path) -> ComposeResult<()> {
        let unknown = self.segments.iter().enumerate().find_map(|(index, spec)| {
            std::iter::once(&spec.body)
                .chain(spec.otherwise.as_ref())
                .find_map(|body| body.unknown.keys().next())
                .map(|key| (index, key))
        });

        match unknown {
            Some((index, key)) => Err(ComposeError::Parse {
                path: path.to_path_buf(),
                message: format!("unknown key `{}` in segment {}", key, index),
            }),
            None => Ok(()),
        }
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Ok(Self::parse(&content, path)?)
    }

    /// Number of segments carrying a condition.
    pub fn conditional_count(&self) -> usize {
        self.segments.iter().filter(|s| s.when.is_some()).count()
    }
}
