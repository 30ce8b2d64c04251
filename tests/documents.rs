use blockfold::attributed::{Color, UnderlineStyle};
use blockfold::compose::{self, BuilderOverrides, Composed};
use blockfold::models::{BlockDocument, Flags};
use blockfold::render::{self, OutputFormat, RenderOptions};
use blockfold::scanner::{DocumentScanner, ScanConfig};
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn evaluate(name: &str, flags: &Flags) -> Composed {
    let document = BlockDocument::load(&demo(name)).unwrap();
    compose::evaluate(&document, flags, &BuilderOverrides::default()).unwrap()
}

#[test]
fn greeting_document_uses_otherwise_branch_by_default() {
    let composed = evaluate("greeting.toml", &Flags::new());
    assert_eq!(composed.plain_text(), "Hello World.");

    let mut flags = Flags::new();
    flags.assign("excited").unwrap();
    let composed = evaluate("greeting.toml", &flags);
    assert_eq!(composed.plain_text(), "Hello World!");
}

#[test]
fn styled_document_renders_each_run() {
    let Composed::Attributed(string) = evaluate("styled.toml", &Flags::new()) else {
        panic!("expected attributed output");
    };

    let world = &string.runs()[1].attributes;
    assert_eq!(world.foreground, Some(Color::Green));
    assert_eq!(world.underline.map(|u| u.style), Some(UnderlineStyle::Thick));
    assert_eq!(string.runs()[0].attributes.font.as_ref().map(|f| f.size), Some(10.0));

    let html = render::render(
        &Composed::Attributed(string),
        OutputFormat::Html,
        &RenderOptions::default(),
    )
    .unwrap();
    assert!(html.contains("font-size: 10px"));
    assert!(html.contains("text-decoration-thickness: 2px"));
}

#[test]
fn json_greeting_list() {
    let composed = evaluate("names.json", &Flags::new());
    assert_eq!(
        composed,
        Composed::Lines(vec![
            "Hello World".to_string(),
            "Hello Make a result builder".to_string(),
            "Hello reader".to_string(),
        ])
    );
}

#[test]
fn joined_words_render_plain() {
    let composed = evaluate("words.toml", &Flags::new());
    let output = render::render(&composed, OutputFormat::Plain, &RenderOptions::default()).unwrap();
    assert_eq!(output, "Hello World");
}

#[test]
fn demos_directory_is_discoverable() {
    let scanner = DocumentScanner::new(demo(""), ScanConfig::default());
    let found = scanner.scan().unwrap();
    assert_eq!(found.len(), 4);

    for path in found {
        let document = BlockDocument::load(&path).unwrap();
        assert!(compose::plan(&document, &Flags::new()).is_ok());
    }
}
