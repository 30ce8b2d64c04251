//! Explicit block accumulator.
//!
//! [`Block`] stands in for the compiler transform: statements are added in
//! source order, each evaluated exactly once, and [`Block::build`] performs
//! the single fold.

use super::{Branch, ResultBuilder};
use tracing::trace;

/// An in-progress block for builder `B`.
#[must_use = "a block does nothing until `build` is called"]
pub struct Block<'b, B: ResultBuilder> {
    builder: &'b B,
    segments: Vec<B::Segment>,
}

impl<'b, B: ResultBuilder> Block<'b, B> {
    /// Start an empty block.
    pub fn new(builder: &'b B) -> Self {
        Self {
            builder,
            segments: Vec::new(),
        }
    }

    /// Append one statement.
    pub fn add(mut self, expression: impl Into<B::Expression>) -> Self {
        let segment = self.builder.build_expression(expression.into());
        self.segments.push(segment);
        self
    }

    /// Append a statement guarded by `condition`.
    ///
    /// The closure only runs when the condition holds; otherwise the
    /// identity segment takes the statement's place.
    pub fn add_if<E, F>(self, condition: bool, statement: F) -> Self
    where
        E: Into<B::Expression>,
        F: FnOnce() -> E,
    {
        let value = if condition { Some(statement()) } else { None };
        self.add_optional(value)
    }

    /// Append a value that may be absent.
    pub fn add_optional(mut self, expression: Option<impl Into<B::Expression>>) -> Self {
        let segment = expression.map(|e| self.builder.build_expression(e.into()));
        trace!(present = segment.is_some(), "optional statement");
        let segment = self.builder.build_optional(segment);
        self.segments.push(segment);
        self
    }

    /// Append an `if`/`else` statement. Only the taken branch is evaluated.
    pub fn add_either<E1, E2, F1, F2>(mut self, condition: bool, first: F1, second: F2) -> Self
    where
        E1: Into<B::Expression>,
        E2: Into<B::Expression>,
        F1: FnOnce() -> E1,
        F2: FnOnce() -> E2,
    {
        let branch = if condition {
            Branch::First(self.builder.build_expression(first().into()))
        } else {
            Branch::Second(self.builder.build_expression(second().into()))
        };
        let segment = self.builder.build_either(branch);
        self.segments.push(segment);
        self
    }

    /// Append one statement per item, in iteration order.
    pub fn add_all<I>(mut self, expressions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<B::Expression>,
    {
        for expression in expressions {
            self = self.add(expression);
        }
        self
    }

    /// Number of statements added so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no statement has been added.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Fold the block into its aggregate.
    pub fn build(self) -> B::Aggregate {
        trace!(segments = self.segments.len(), "folding block");
        self.builder.build_block(self.segments)
    }
}
