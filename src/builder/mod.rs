//! Result builders.
//!
//! A result builder folds the values produced by the statements of a block
//! into one aggregate. Each statement is evaluated once, in order, lifted
//! into a segment, and the segments are handed to [`ResultBuilder::build_block`].
//! Conditional statements go through [`ResultBuilder::build_optional`] or
//! [`ResultBuilder::build_either`] first so that every statement always
//! yields exactly one segment.

pub mod block;
pub mod macros;

pub use block::Block;

/// Outcome of an `if`/`else` statement inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch<T> {
    /// The `if` branch was taken.
    First(T),
    /// The `else` branch was taken.
    Second(T),
}

impl<T> Branch<T> {
    /// Pick a branch from a condition.
    pub fn select(condition: bool, first: T, second: T) -> Self {
        if condition {
            Branch::First(first)
        } else {
            Branch::Second(second)
        }
    }

    /// Returns the wrapped value, whichever branch holds it.
    pub fn into_inner(self) -> T {
        match self {
            Branch::First(value) | Branch::Second(value) => value,
        }
    }
}

/// The aggregation rule behind a block.
///
/// Implementations must keep declaration order: `build_block` may merge
/// segments but never reorders or drops non-identity segments.
pub trait ResultBuilder {
    /// What a single statement evaluates to.
    type Expression;
    /// One folded unit.
    type Segment;
    /// The result of folding a whole block.
    type Aggregate;

    /// Lift a statement's value into a segment.
    fn build_expression(&self, expression: Self::Expression) -> Self::Segment;

    /// Fold the segments of a block, in declaration order.
    fn build_block(&self, segments: Vec<Self::Segment>) -> Self::Aggregate;

    /// The identity segment: folding it contributes nothing.
    fn empty(&self) -> Self::Segment;

    /// Conditional inclusion (`if` without `else`).
    fn build_optional(&self, segment: Option<Self::Segment>) -> Self::Segment {
        segment.unwrap_or_else(|| self.empty())
    }

    /// `if`/`else`: the taken branch passes through unchanged.
    fn build_either(&self, branch: Branch<Self::Segment>) -> Self::Segment {
        branch.into_inner()
    }

    /// Start a new block folded by this builder.
    fn block(&self) -> Block<'_, Self>
    where
        Self: Sized,
    {
        Block::new(self)
    }
}

impl<B: ResultBuilder + ?Sized> ResultBuilder for &B {
    type Expression = B::Expression;
    type Segment = B::Segment;
    type Aggregate = B::Aggregate;

    fn build_expression(&self, expression: Self::Expression) -> Self::Segment {
        (**self).build_expression(expression)
    }

    fn build_block(&self, segments: Vec<Self::Segment>) -> Self::Aggregate {
        (**self).build_block(segments)
    }

    fn empty(&self) -> Self::Segment {
        (**self).empty()
    }

    fn build_optional(&self, segment: Option<Self::Segment>) -> Self::Segment {
        (**self).build_optional(segment)
    }

    fn build_either(&self, branch: Branch<Self::Segment>) -> Self::Segment {
        (**self).build_either(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects numbers as-is; the identity segment is `None`.
    struct Collect;

    impl ResultBuilder for Collect {
        type Expression = u32;
        type Segment = Option<u32>;
        type Aggregate = Vec<u32>;

        fn build_expression(&self, expression: u32) -> Option<u32> {
            Some(expression)
        }

        fn build_block(&self, segments: Vec<Option<u32>>) -> Vec<u32> {
            segments.into_iter().flatten().collect()
        }

        fn empty(&self) -> Option<u32> {
            None
        }
    }

    #[test]
    fn test_build_block_keeps_order() {
        let segments = vec![Some(3), Some(1), Some(2), Some(1)];
        assert_eq!(Collect.build_block(segments), vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_build_block_empty_is_identity() {
        assert!(Collect.build_block(Vec::new()).is_empty());
    }

    #[test]
    fn test_build_optional() {
        assert_eq!(Collect.build_optional(None), None);
        assert_eq!(Collect.build_optional(Some(Some(7))), Some(7));

        let absent = Collect.build_optional(None);
        assert_eq!(Collect.build_block(vec![Some(1), absent, Some(2)]), vec![1, 2]);
    }

    #[test]
    fn test_build_either() {
        assert_eq!(Collect.build_either(Branch::select(true, Some(1), Some(2))), Some(1));
        assert_eq!(Collect.build_either(Branch::select(false, Some(1), Some(2))), Some(2));
    }

    #[test]
    fn test_builder_by_reference() {
        let builder = &Collect;
        assert_eq!(builder.build_block(vec![Some(4)]), vec![4]);
    }
}
