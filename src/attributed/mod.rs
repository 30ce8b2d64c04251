//! Attributed text.
//!
//! Styled runs of text, the modifiers that create them, and the builder
//! that folds styled segments into one composite string.

pub mod attributes;
pub mod builder;
pub mod string;

pub use attributes::{Attributes, Color, Font, Shadow, Underline, UnderlineStyle};
pub use builder::AttributedStringBuilder;
pub use string::{AttributedString, Run, Styled};
