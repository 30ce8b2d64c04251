//! Attributed strings and the modifiers that produce them.

use super::attributes::{Attributes, Color, Font, Shadow, UnderlineStyle};
use super::builder::AttributedStringBuilder;
use crate::builder::{Block, ResultBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stretch of text sharing one set of attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default, skip_serializing_if = "Attributes::is_plain")]
    pub attributes: Attributes,
}

/// Text made of styled runs, in reading order.
///
/// Runs never hold empty text. The empty attributed string has no runs and
/// is the identity for [`AttributedString::append`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredRuns")]
pub struct AttributedString {
    runs: Vec<Run>,
}

/// Serialized form; empty runs are dropped on the way in.
#[derive(Deserialize)]
struct StoredRuns {
    #[serde(default)]
    runs: Vec<Run>,
}

impl From<StoredRuns> for AttributedString {
    fn from(stored: StoredRuns) -> Self {
        let mut string = AttributedString::new();
        string.append(AttributedString { runs: stored.runs });
        string
    }
}

impl AttributedString {
    /// The empty attributed string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Attributes::default())
    }

    /// Text with a single set of attributes.
    pub fn styled(text: impl Into<String>, attributes: Attributes) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::new();
        }
        Self {
            runs: vec![Run { text, attributes }],
        }
    }

    /// Evaluate a block of segments with [`AttributedStringBuilder`].
    ///
    /// ```
    /// use blockfold::attributed::{AttributedString, Color, Styled};
    ///
    /// let greeting = AttributedString::build(|block| {
    ///     block
    ///         .add("Hello ".foreground_color(Color::Red))
    ///         .add("World".foreground_color(Color::Blue).underline(Color::Blue))
    /// });
    /// assert_eq!(greeting.text(), "Hello World");
    /// assert_eq!(greeting.runs().len(), 2);
    /// ```
    pub fn build<F>(content: F) -> Self
    where
        F: for<'b> FnOnce(
            Block<'b, AttributedStringBuilder>,
        ) -> Block<'b, AttributedStringBuilder>,
    {
        let builder = AttributedStringBuilder;
        content(builder.block()).build()
    }

    /// The runs, in order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The text without styling.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Attributes in effect at byte offset `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.text.len();
            if index < end {
                return Some(&run.attributes);
            }
            start = end;
        }
        None
    }

    /// Append another attributed string's runs after ours.
    pub fn append(&mut self, other: AttributedString) {
        self.runs
            .extend(other.runs.into_iter().filter(|run| !run.text.is_empty()));
    }

    /// A copy with `attributes` layered over every run.
    pub fn with_attributes(&self, attributes: &Attributes) -> Self {
        let runs = self
            .runs
            .iter()
            .map(|run| {
                let mut merged = run.attributes.clone();
                merged.merge(attributes);
                Run {
                    text: run.text.clone(),
                    attributes: merged,
                }
            })
            .collect();
        Self { runs }
    }
}

impl fmt::Display for AttributedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl From<&str> for AttributedString {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for AttributedString {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

/// Style modifiers, chainable on plain and attributed text.
///
/// ```
/// use blockfold::attributed::{Color, Font, Styled, UnderlineStyle};
///
/// let word = "World"
///     .foreground_color(Color::Green)
///     .underline_styled(Color::Orange, UnderlineStyle::Thick)
///     .font(Font::system(10.0));
/// assert_eq!(word.runs().len(), 1);
/// ```
pub trait Styled: Sized {
    /// Layer a whole attribute set over the text.
    fn apply(self, attributes: &Attributes) -> AttributedString;

    /// Sets the color of this text.
    fn foreground_color(self, color: Color) -> AttributedString {
        self.apply(&Attributes::default().with_foreground(color))
    }

    /// Sets the background color.
    fn background(self, color: Color) -> AttributedString {
        self.apply(&Attributes::default().with_background(color))
    }

    /// Applies a single-line underline.
    fn underline(self, color: Color) -> AttributedString {
        self.underline_styled(color, UnderlineStyle::Single)
    }

    /// Applies an underline with an explicit line style.
    fn underline_styled(self, color: Color, style: UnderlineStyle) -> AttributedString {
        self.apply(&Attributes::default().with_underline(color, style))
    }

    /// Sets the font.
    fn font(self, font: Font) -> AttributedString {
        self.apply(&Attributes::default().with_font(font))
    }

    /// Adds a shadow.
    fn shadow(self, shadow: Shadow) -> AttributedString {
        self.apply(&Attributes::default().with_shadow(shadow))
    }

    /// Unstyled attributed text.
    fn attributed(self) -> AttributedString {
        self.apply(&Attributes::default())
    }
}

impl Styled for &str {
    fn apply(self, attributes: &Attributes) -> AttributedString {
        AttributedString::styled(self, attributes.clone())
    }
}

impl Styled for String {
    fn apply(self, attributes: &Attributes) -> AttributedString {
        AttributedString::styled(self, attributes.clone())
    }
}

impl Styled for AttributedString {
    fn apply(self, attributes: &Attributes) -> AttributedString {
        self.with_attributes(attributes)
    }
}
