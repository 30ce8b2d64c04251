//! Block document evaluation.
//!
//! Walks a document's segments in order and feeds them through the builder
//! it names, using the same `Block` calls a hand-written block would.

use crate::attributed::{AttributedString, AttributedStringBuilder};
use crate::builder::ResultBuilder;
use crate::error::ComposeResult;
use crate::models::{BlockDocument, BuilderKind, Flags, SegmentBody};
use crate::strings::{Concat, Greeting, Joined};
use serde::Serialize;
use tracing::{debug, info};

/// Builder settings supplied by the caller.
///
/// Explicit values win over the document; defaults only fill in what the
/// document leaves unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderOverrides {
    pub separator: Option<String>,
    pub salutation: Option<String>,
    pub default_separator: Option<String>,
    pub default_salutation: Option<String>,
}

impl BuilderOverrides {
    fn separator_for(&self, document: &BlockDocument) -> Option<String> {
        self.separator
            .clone()
            .or_else(|| document.separator.clone())
            .or_else(|| self.default_separator.clone())
    }

    fn salutation_for(&self, document: &BlockDocument) -> Option<String> {
        self.salutation
            .clone()
            .or_else(|| document.salutation.clone())
            .or_else(|| self.default_salutation.clone())
    }
}

/// The aggregate of an evaluated document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Composed {
    /// Output of `concat` and `joined`.
    Text(String),
    /// Output of `greeting`.
    Lines(Vec<String>),
    /// Output of `attributed`.
    Attributed(AttributedString),
}

impl Composed {
    /// The content without styling.
    pub fn plain_text(&self) -> String {
        match self {
            Composed::Text(text) => text.clone(),
            Composed::Lines(lines) => lines.join("\n"),
            Composed::Attributed(string) => string.text(),
        }
    }
}

/// How one segment resolves under a given set of flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSegment {
    /// Position in declaration order.
    pub index: usize,
    /// The guard, as written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Text the statement contributes, if included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether the `otherwise` branch was taken.
    pub otherwise: bool,
}

impl PlannedSegment {
    pub fn is_included(&self) -> bool {
        self.text.is_some()
    }
}

/// Evaluate a document into its aggregate.
///
/// `flags` override the document's own flag defaults.
pub fn evaluate(
    document: &BlockDocument,
    flags: &Flags,
    overrides: &BuilderOverrides,
) -> ComposeResult<Composed> {
    let flags = document.flags.overlay(flags);
    info!(
        "Evaluating {} segments with the {} builder",
        document.segments.len(),
        document.builder
    );

    let composed = match document.builder {
        BuilderKind::Concat => Composed::Text(fold(&Concat, document, &flags, plain_text)?),
        BuilderKind::Joined => {
            let builder = overrides
                .separator_for(document)
                .map(Joined::new)
                .unwrap_or_default();
            Composed::Text(fold(&builder, document, &flags, plain_text)?)
        }
        BuilderKind::Greeting => {
            let builder = overrides
                .salutation_for(document)
                .map(Greeting::new)
                .unwrap_or_default();
            Composed::Lines(fold(&builder, document, &flags, plain_text)?)
        }
        BuilderKind::Attributed => Composed::Attributed(fold(
            &AttributedStringBuilder,
            document,
            &flags,
            styled_text,
        )?),
    };

    Ok(composed)
}

/// Resolve every segment's condition without folding.
pub fn plan(document: &BlockDocument, flags: &Flags) -> ComposeResult<Vec<PlannedSegment>> {
    let flags = document.flags.overlay(flags);

    document
        .segments
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let Some(condition) = spec.condition() else {
                return Ok(PlannedSegment {
                    index,
                    condition: None,
                    text: Some(spec.body.text.clone()),
                    otherwise: false,
                });
            };

            let holds = flags.test(&condition, index)?;
            let (text, otherwise) = match (holds, &spec.otherwise) {
                (true, _) => (Some(spec.body.text.clone()), false),
                (false, Some(body)) => (Some(body.text.clone()), true),
                (false, None) => (None, false),
            };

            Ok(PlannedSegment {
                index,
                condition: Some(condition.to_string()),
                text,
                otherwise,
            })
        })
        .collect()
}

/// Feed the document's statements through `builder`, in order.
fn fold<B, L>(
    builder: &B,
    document: &BlockDocument,
    flags: &Flags,
    lift: L,
) -> ComposeResult<B::Aggregate>
where
    B: ResultBuilder,
    L: Fn(&SegmentBody) -> B::Expression,
{
    let mut block = builder.block();

    for (index, spec) in document.segments.iter().enumerate() {
        block = match spec.condition() {
            None => block.add(lift(&spec.body)),
            Some(condition) => {
                let holds = flags.test(&condition, index)?;
                debug!("Segment {} guarded by '{}': {}", index, condition, holds);
                match spec.otherwise {
                    Some(ref otherwise) => {
                        block.add_either(holds, || lift(&spec.body), || lift(otherwise))
                    }
                    None => block.add_if(holds, || lift(&spec.body)),
                }
            }
        };
    }

    Ok(block.build())
}

fn plain_text(body: &SegmentBody) -> String {
    if body.is_styled() {
        debug!("Ignoring styling on '{}' for a plain text builder", body.text);
    }
    body.text.clone()
}

fn styled_text(body: &SegmentBody) -> AttributedString {
    AttributedString::styled(body.text.clone(), body.attributes())
}
