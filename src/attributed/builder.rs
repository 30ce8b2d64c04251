use super::string::AttributedString;
use crate::builder::ResultBuilder;

/// Folds attributed segments into one attributed string.
///
/// Runs are appended in declaration order and keep their own attributes;
/// neighbouring runs with equal styling are not coalesced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributedStringBuilder;

impl ResultBuilder for AttributedStringBuilder {
    type Expression = AttributedString;
    type Segment = AttributedString;
    type Aggregate = AttributedString;

    fn build_expression(&self, expression: AttributedString) -> AttributedString {
        expression
    }

    fn build_block(&self, segments: Vec<AttributedString>) -> AttributedString {
        let mut string = AttributedString::new();
        for segment in segments {
            string.append(segment);
        }
        string
    }

    fn empty(&self) -> AttributedString {
        AttributedString::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributed::{Color, Font, Styled, UnderlineStyle};

    #[test]
    fn test_styled_segments_keep_their_styles() {
        let segments = vec![
            "Hello".foreground_color(Color::Red),
            "World".foreground_color(Color::Blue).underline(Color::Blue),
        ];

        let string = AttributedStringBuilder.build_block(segments);

        assert_eq!(string.text(), "HelloWorld");
        let runs = string.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Hello");
        assert_eq!(runs[0].attributes.foreground, Some(Color::Red));
        assert!(runs[0].attributes.underline.is_none());
        assert_eq!(runs[1].text, "World");
        assert_eq!(runs[1].attributes.foreground, Some(Color::Blue));
        assert_eq!(runs[1].attributes.underline.map(|u| u.color), Some(Color::Blue));
    }

    #[test]
    fn test_empty_block_is_identity() {
        assert_eq!(AttributedStringBuilder.build_block(Vec::new()), AttributedString::new());
    }

    #[test]
    fn test_equal_neighbours_not_coalesced() {
        let string = AttributedStringBuilder
            .block()
            .add("a".foreground_color(Color::Red))
            .add("b".foreground_color(Color::Red))
            .build();
        assert_eq!(string.runs().len(), 2);
    }

    #[test]
    fn test_optional_segment() {
        let builder = AttributedStringBuilder;
        let with = builder
            .block()
            .add("Hello")
            .add_if(true, || " there".font(Font::system(10.0)))
            .build();
        let without = builder
            .block()
            .add("Hello")
            .add_if(false, || " there".font(Font::system(10.0)))
            .build();

        assert_eq!(with.text(), "Hello there");
        assert_eq!(without, AttributedString::plain("Hello"));
    }

    #[test]
    fn test_build_convenience() {
        let string = AttributedString::build(|block| {
            block
                .add(
                    "Hello"
                        .foreground_color(Color::Red)
                        .font(Font::system(10.0)),
                )
                .add(
                    "World"
                        .foreground_color(Color::Green)
                        .underline_styled(Color::Orange, UnderlineStyle::Thick),
                )
        });

        assert_eq!(string.text(), "HelloWorld");
        assert_eq!(
            string.attributes_at(5).and_then(|a| a.underline).map(|u| u.style),
            Some(UnderlineStyle::Thick)
        );
    }
}
