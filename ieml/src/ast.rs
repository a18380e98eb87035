//! AST infrastructure types
//!
//! - `Span` for tracking source locations reported by the parser
//! - `Literal` for the free-form annotations that may trail a word or a sentence

use std::fmt;

/// Span representing a location in source text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn from_pest_span(span: pest::Span) -> Self {
        let (line, col) = span.start_pos().line_col();
        Self {
            start: span.start(),
            end: span.end(),
            line,
            col,
        }
    }
}

/// A literal annotation, written `<...>` after a word or a sentence.
///
/// The body is kept verbatim, escapes included, so that printing a parsed
/// object gives back the exact input. Literals never take part in equality,
/// hashing or ordering of the object they annotate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal(String);

impl Literal {
    /// Build a literal from plain text, escaping `\`, `<` and `>`.
    pub fn new(text: &str) -> Self {
        let mut raw = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '\\' | '<' | '>') {
                raw.push('\\');
            }
            raw.push(c);
        }
        Self(raw)
    }

    /// The body as it appears between the angle brackets.
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// The body with escapes removed.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.0.len());
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    text.push(escaped);
                }
            } else {
                text.push(c);
            }
        }
        text
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

pub(crate) fn write_literals(f: &mut fmt::Formatter<'_>, literals: &[Literal]) -> fmt::Result {
    for literal in literals {
        write!(f, "{}", literal)?;
    }
    Ok(())
}
