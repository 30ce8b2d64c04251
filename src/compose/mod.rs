//! Composition of block documents.

pub mod evaluator;

pub use evaluator::{evaluate, plan, BuilderOverrides, Composed, PlannedSegment};
