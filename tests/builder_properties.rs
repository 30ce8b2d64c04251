use blockfold::attributed::{AttributedString, AttributedStringBuilder, Color, Styled};
use blockfold::block;
use blockfold::strings::{Concat, Greeting, Joined};
use blockfold::ResultBuilder;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn fold_preserves_declaration_order_for_every_length() {
    let words = ["d", "a", "c", "a", "b", "e", "b"];
    for n in 0..=words.len() {
        let input = owned(&words[..n]);
        assert_eq!(Concat.build_block(input.clone()), input.concat());
        assert_eq!(Joined::new(",").build_block(input.clone()), input.join(","));
        assert_eq!(
            Greeting::new("Hi").build_block(input.iter().map(|w| vec![w.clone()]).collect()),
            input.iter().map(|w| format!("Hi {}", w)).collect::<Vec<_>>()
        );
    }
}

#[test]
fn empty_block_is_identity() {
    assert_eq!(Concat.build_block(Vec::new()), "");
    assert_eq!(Joined::default().build_block(Vec::new()), "");
    assert!(Greeting::default().build_block(Vec::new()).is_empty());
    assert_eq!(
        AttributedStringBuilder.build_block(Vec::new()),
        AttributedString::new()
    );
}

#[test]
fn absent_optional_contributes_nothing() {
    let joined = Joined::new(" ");
    let with_absent = vec![
        "Hello".to_string(),
        joined.build_optional(None),
        "World".to_string(),
    ];
    assert_eq!(joined.build_block(with_absent), "Hello World");

    let builder = AttributedStringBuilder;
    let styled = vec![
        "Hello".foreground_color(Color::Red),
        builder.build_optional(None),
    ];
    assert_eq!(
        builder.build_block(styled),
        builder.build_block(vec!["Hello".foreground_color(Color::Red)])
    );
}

#[test]
fn present_optional_alone_equals_plain_fold() {
    let builder = AttributedStringBuilder;
    let x = "x".background(Color::Yellow);
    assert_eq!(
        builder.build_block(vec![builder.build_optional(Some(x.clone()))]),
        builder.build_block(vec![x])
    );
}

#[test]
fn hello_world_scenarios() {
    assert_eq!(block!(Concat; "Hello", "World"), "HelloWorld");
    assert_eq!(block!(Joined::new(" "); "Hello", "World"), "Hello World");
}

#[test]
fn styled_hello_world_keeps_each_segment_style() {
    let text = block!(AttributedStringBuilder;
        "Hello".foreground_color(Color::Red),
        "World".foreground_color(Color::Blue).underline(Color::Blue),
    );

    assert_eq!(text.text(), "HelloWorld");
    let runs = text.runs();
    assert_eq!(runs.len(), 2);
    assert_eq!((runs[0].text.as_str(), runs[0].attributes.foreground), ("Hello", Some(Color::Red)));
    assert!(runs[0].attributes.underline.is_none());
    assert_eq!((runs[1].text.as_str(), runs[1].attributes.foreground), ("World", Some(Color::Blue)));
    assert_eq!(runs[1].attributes.underline.map(|u| u.color), Some(Color::Blue));
}

#[test]
fn inputs_are_not_mutated() {
    let hello = "Hello".foreground_color(Color::Red);
    let snapshot = hello.clone();
    let _ = AttributedStringBuilder.build_block(vec![hello.clone(), "!".attributed()]);
    assert_eq!(hello, snapshot);
}
