//! Plain string builders.
//!
//! Three folding rules over text segments: straight concatenation,
//! separator join, and a greeting list that prefixes every name.

use crate::builder::ResultBuilder;

/// Concatenates segments with nothing in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Concat;

impl ResultBuilder for Concat {
    type Expression = String;
    type Segment = String;
    type Aggregate = String;

    fn build_expression(&self, expression: String) -> String {
        expression
    }

    fn build_block(&self, segments: Vec<String>) -> String {
        segments.concat()
    }

    fn empty(&self) -> String {
        String::new()
    }
}

/// Joins segments with a separator.
///
/// Empty segments are identities and never get a separator of their own,
/// so an absent optional statement leaves no trace in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    separator: String,
}

impl Joined {
    /// Create a join rule with the given separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// The separator placed between segments.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for Joined {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl ResultBuilder for Joined {
    type Expression = String;
    type Segment = String;
    type Aggregate = String;

    fn build_expression(&self, expression: String) -> String {
        expression
    }

    fn build_block(&self, segments: Vec<String>) -> String {
        let total: usize = segments.iter().map(String::len).sum();
        let mut output = String::with_capacity(total + self.separator.len() * segments.len());

        for segment in segments.iter().filter(|s| !s.is_empty()) {
            if !output.is_empty() {
                output.push_str(&self.separator);
            }
            output.push_str(segment);
        }

        output
    }

    fn empty(&self) -> String {
        String::new()
    }
}

/// Turns each name into a greeting line.
///
/// A statement yields a one-element segment; the identity segment is the
/// empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    salutation: String,
}

impl Greeting {
    /// Create a greeting rule with a custom salutation.
    pub fn new(salutation: impl Into<String>) -> Self {
        Self {
            salutation: salutation.into(),
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new("Hello")
    }
}

impl ResultBuilder for Greeting {
    type Expression = String;
    type Segment = Vec<String>;
    type Aggregate = Vec<String>;

    fn build_expression(&self, expression: String) -> Vec<String> {
        vec![expression]
    }

    fn build_block(&self, segments: Vec<Vec<String>>) -> Vec<String> {
        segments
            .into_iter()
            .flatten()
            .map(|name| format!("{} {}", self.salutation, name))
            .collect()
    }

    fn empty(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_concat() {
        assert_eq!(Concat.build_block(strings(&["Hello", "World"])), "HelloWorld");
        assert_eq!(Concat.build_block(Vec::new()), "");
    }

    #[test]
    fn test_joined() {
        let joined = Joined::new(" ");
        assert_eq!(joined.build_block(strings(&["Hello", "World"])), "Hello World");
        assert_eq!(joined.build_block(strings(&["only"])), "only");
        assert_eq!(joined.build_block(Vec::new()), "");
    }

    #[test]
    fn test_joined_absent_optional_leaves_no_separator() {
        let joined = Joined::new(", ");
        let absent = joined.build_optional(None);
        let segments = vec!["a".to_string(), absent, "b".to_string()];
        assert_eq!(joined.build_block(segments), "a, b");
    }

    #[test]
    fn test_joined_keeps_duplicates_in_order() {
        let joined = Joined::new("-");
        assert_eq!(joined.build_block(strings(&["b", "a", "b"])), "b-a-b");
    }

    #[test]
    fn test_optional_present_equals_plain_fold() {
        let present = Concat.build_optional(Some("x".to_string()));
        assert_eq!(
            Concat.build_block(vec![present]),
            Concat.build_block(strings(&["x"]))
        );
    }

    #[test]
    fn test_greeting() {
        let greeting = Greeting::default();
        let segments = vec![
            greeting.build_expression("World".to_string()),
            greeting.build_optional(None),
            greeting.build_expression("Rust".to_string()),
        ];
        assert_eq!(
            greeting.build_block(segments),
            vec!["Hello World", "Hello Rust"]
        );
    }

    #[test]
    fn test_greeting_custom_salutation() {
        let greeting = Greeting::new("Hi");
        let lines = greeting.block().add("there").build();
        assert_eq!(lines, vec!["Hi there"]);
    }
}
