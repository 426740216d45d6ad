//! Brace modifier extraction
//!
//! `{abstract}`, `{static}`, `{field}` and `{method}` annotate the single line
//! they appear on. They are recorded per line and removed from the text so the
//! line grammars never see them.

use chumsky::prelude::*;
use tracing::warn;

use crate::core::chumsky_utils::word;

/// Modifiers recorded for one line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineModifiers {
    pub is_abstract: bool,
    pub is_static: bool,
    pub field: bool,
    pub method: bool,
}

impl LineModifiers {
    /// Whether the `{field}`/`{method}` markers name a different member kind
    /// than the one the line parsed as
    pub fn contradicts(&self, parsed_as_method: bool) -> bool {
        if parsed_as_method {
            self.field && !self.method
        } else {
            self.method && !self.field
        }
    }
}

/// A source line with its modifiers stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedLine {
    pub text: String,
    pub modifiers: LineModifiers,
}

#[derive(Debug, Clone, Copy)]
enum Segment<'src> {
    Modifier(&'src str),
    Text(char),
}

fn segments<'src>() -> impl Parser<'src, &'src str, Vec<Segment<'src>>> + Clone {
    let modifier = just('{')
        .ignore_then(word())
        .then_ignore(just('}'))
        .map(Segment::Modifier);

    modifier.or(any().map(Segment::Text)).repeated().collect()
}

/// Split `input` into lines, recording and removing brace modifiers.
///
/// Unknown modifier words are logged and removed as well.
pub fn strip_modifiers(input: &str) -> Vec<StrippedLine> {
    let parser = segments();

    input
        .split('\n')
        .map(|raw| {
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let mut line = StrippedLine {
                text: String::with_capacity(raw.len()),
                modifiers: LineModifiers::default(),
            };

            let parsed = parser.parse(raw).into_result().unwrap_or_default();
            for segment in parsed {
                match segment {
                    Segment::Text(c) => line.text.push(c),
                    Segment::Modifier("abstract") => line.modifiers.is_abstract = true,
                    Segment::Modifier("static") => line.modifiers.is_static = true,
                    Segment::Modifier("field") => line.modifiers.field = true,
                    Segment::Modifier("method") => line.modifiers.method = true,
                    Segment::Modifier(other) => warn!("Unknow modifier : {}", other),
                }
            }

            line
        })
        .collect()
}
