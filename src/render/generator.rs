//! Renderers for composed output.

use super::{OutputFormat, RenderOptions};
use crate::attributed::{AttributedString, Color, Run, UnderlineStyle};
use crate::compose::Composed;
use anyhow::Result;
use colored::Colorize;

/// Render an aggregate in the requested format.
pub fn render(composed: &Composed, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    let output = match format {
        OutputFormat::Ansi => render_ansi(composed),
        OutputFormat::Html => render_html(composed, options),
        OutputFormat::Plain => render_plain(composed),
        OutputFormat::Json => render_json(composed)?,
    };
    Ok(output)
}

/// Render with terminal escape codes.
///
/// Whether codes are emitted follows the process-wide colour setting
/// (see [`ColorMode::apply`](super::ColorMode::apply)).
pub fn render_ansi(composed: &Composed) -> String {
    match composed {
        Composed::Attributed(string) => ansi_string(string),
        other => render_plain(other),
    }
}

fn ansi_string(string: &AttributedString) -> String {
    string.runs().iter().map(ansi_run).collect()
}

fn ansi_run(run: &Run) -> String {
    let attributes = &run.attributes;
    if attributes.is_plain() {
        return run.text.clone();
    }

    let mut styled = run.text.as_str().normal();

    if let Some(color) = attributes.foreground.filter(|c| !c.is_clear()) {
        let (r, g, b) = color.rgb();
        styled = styled.truecolor(r, g, b);
    }
    if let Some(color) = attributes.background.filter(|c| !c.is_clear()) {
        let (r, g, b) = color.rgb();
        styled = styled.on_truecolor(r, g, b);
    }
    if attributes.underline.is_some() {
        styled = styled.underline();
    }
    if attributes.font.as_ref().is_some_and(|font| font.bold) {
        styled = styled.bold();
    }

    styled.to_string()
}

/// Render as HTML.
pub fn render_html(composed: &Composed, options: &RenderOptions) -> String {
    let class = html_escape::encode_double_quoted_attribute(&options.html_class);

    match composed {
        Composed::Text(text) => {
            format!("<p class=\"{}\">{}</p>\n", class, html_escape::encode_text(text))
        }
        Composed::Lines(lines) => {
            let mut html = format!("<ul class=\"{}\">\n", class);
            for line in lines {
                html.push_str(&format!("  <li>{}</li>\n", html_escape::encode_text(line)));
            }
            html.push_str("</ul>\n");
            html
        }
        Composed::Attributed(string) => {
            let body: String = string.runs().iter().map(html_run).collect();
            format!("<p class=\"{}\">{}</p>\n", class, body)
        }
    }
}

fn html_run(run: &Run) -> String {
    let text = html_escape::encode_text(&run.text);
    let style = css_declarations(run);

    if style.is_empty() {
        return text.into_owned();
    }

    format!(
        "<span style=\"{}\">{}</span>",
        html_escape::encode_double_quoted_attribute(&style.join("; ")),
        text
    )
}

fn css_declarations(run: &Run) -> Vec<String> {
    let attributes = &run.attributes;
    let mut css = Vec::new();

    if let Some(color) = attributes.foreground {
        css.push(format!("color: {}", css_color(color)));
    }
    if let Some(color) = attributes.background {
        css.push(format!("background-color: {}", css_color(color)));
    }
    if let Some(underline) = attributes.underline {
        css.push("text-decoration: underline".to_string());
        css.push(format!("text-decoration-color: {}", css_color(underline.color)));
        css.push(format!("text-decoration-style: {}", underline.style.css()));
        if underline.style == UnderlineStyle::Thick {
            css.push("text-decoration-thickness: 2px".to_string());
        }
    }
    if let Some(ref font) = attributes.font {
        if let Some(ref family) = font.family {
            css.push(format!("font-family: {}", family));
        }
        css.push(format!("font-size: {}px", font.size));
        if font.bold {
            css.push("font-weight: bold".to_string());
        }
    }
    if let Some(shadow) = attributes.shadow {
        css.push(format!(
            "text-shadow: {}px {}px {}px {}",
            shadow.offset_x,
            shadow.offset_y,
            shadow.blur,
            css_color(shadow.color)
        ));
    }

    css
}

fn css_color(color: Color) -> String {
    if color.is_clear() {
        "transparent".to_string()
    } else {
        color.to_hex()
    }
}

/// Render the text alone.
pub fn render_plain(composed: &Composed) -> String {
    composed.plain_text()
}

/// Render as pretty JSON.
pub fn render_json(composed: &Composed) -> Result<String> {
    serde_json::to_string_pretty(composed).map_err(Into::into)
}
