use crate::ast::Span;
use crate::dictionary::Dictionary;
use crate::error::IemlError;
use crate::resource_limits::ResourceLimits;
use crate::syntax::{Ieml, Sentence, Word};
use crate::IemlResult;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;
use tracing::debug;

pub mod literals;
pub mod sentences;
pub mod texts;
pub mod words;

#[derive(Parser)]
#[grammar = "src/parser/ieml.pest"]
pub struct IemlGrammar;

/// Parses the textual form of IEML objects, resolving terms through a dictionary
#[derive(Debug, Clone)]
pub struct IemlParser<'d> {
    dictionary: &'d Dictionary,
    limits: ResourceLimits,
}

impl<'d> IemlParser<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_limits(dictionary, ResourceLimits::default())
    }

    pub fn with_limits(dictionary: &'d Dictionary, limits: ResourceLimits) -> Self {
        Self { dictionary, limits }
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn parse(&self, input: &str) -> IemlResult<Ieml> {
        self.parse_source(input, "<input>")
    }

    /// Parse `input`, naming it `source_id` in error reports
    pub fn parse_source(&self, input: &str, source_id: &str) -> IemlResult<Ieml> {
        if input.len() > self.limits.max_input_bytes {
            return Err(IemlError::SizeExceeded {
                what: "bytes of input".to_string(),
                limit: self.limits.max_input_bytes,
                actual: input.len(),
            });
        }

        debug!(source_id, bytes = input.len(), "parsing");
        let source: Arc<str> = Arc::from(input);

        let mut pairs = IemlGrammar::parse(Rule::ieml, input)
            .map_err(|e| syntax_error(e, source_id, &source))?;

        let ctx = Context {
            dictionary: self.dictionary,
            limits: &self.limits,
            source_id,
            source: Arc::clone(&source),
        };

        let top = pairs
            .next()
            .and_then(|ieml| ieml.into_inner().find(|p| p.as_rule() != Rule::EOI))
            .ok_or_else(|| {
                IemlError::parse(
                    "empty input",
                    Span {
                        start: 0,
                        end: 0,
                        line: 1,
                        col: 1,
                    },
                    source_id,
                    Arc::clone(&source),
                )
            })?;

        parse_ieml(top, &ctx)
    }
}

/// Parse `input` with the default limits
pub fn parse(input: &str, dictionary: &Dictionary) -> IemlResult<Ieml> {
    IemlParser::new(dictionary).parse(input)
}

/// What every parse function needs besides the pair it works on
pub(crate) struct Context<'a> {
    pub dictionary: &'a Dictionary,
    pub limits: &'a ResourceLimits,
    pub source_id: &'a str,
    pub source: Arc<str>,
}

impl Context<'_> {
    pub fn error(&self, span: Span, message: impl Into<String>) -> IemlError {
        IemlError::parse(message, span, self.source_id, Arc::clone(&self.source))
    }

    pub fn unexpected(&self, pair: &Pair<Rule>) -> IemlError {
        self.error(
            Span::from_pest_span(pair.as_span()),
            format!("unexpected {:?}", pair.as_rule()),
        )
    }
}

pub(crate) fn parse_ieml(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Ieml> {
    let ieml = match pair.as_rule() {
        Rule::script | Rule::term => Ieml::Term(words::parse_term(pair, ctx)?),
        Rule::morpheme => Ieml::Morpheme(words::parse_morpheme(pair, ctx)?),
        Rule::word => Ieml::Word(words::parse_word(pair, ctx)?),
        Rule::clause => Ieml::Clause(sentences::parse_clause::<Word>(pair, ctx)?),
        Rule::sentence => Ieml::Sentence(sentences::parse_sentence::<Word>(pair, ctx)?),
        Rule::super_clause => Ieml::SuperClause(sentences::parse_clause::<Sentence>(pair, ctx)?),
        Rule::super_sentence => {
            Ieml::SuperSentence(sentences::parse_sentence::<Sentence>(pair, ctx)?)
        }
        Rule::text => Ieml::Text(texts::parse_text(pair, ctx)?),
        Rule::hypertext => Ieml::Hypertext(texts::parse_hypertext(pair, ctx)?),
        _ => return Err(ctx.unexpected(&pair)),
    };
    Ok(ieml)
}

fn syntax_error(e: pest::error::Error<Rule>, source_id: &str, source: &Arc<str>) -> IemlError {
    let (start, end) = match e.location {
        pest::error::InputLocation::Pos(pos) => (pos, pos),
        pest::error::InputLocation::Span((start, end)) => (start, end),
    };
    let (line, col) = match e.line_col {
        pest::error::LineColLocation::Pos((line, col)) => (line, col),
        pest::error::LineColLocation::Span((start_line, start_col), (_, _)) => {
            (start_line, start_col)
        }
    };
    let span = Span {
        start,
        end,
        line,
        col,
    };
    let message = e.variant.message().into_owned();

    match unbalanced_delimiter(source) {
        Some(suggestion) => IemlError::parse_with_suggestion(
            message,
            span,
            source_id,
            Arc::clone(source),
            suggestion,
        ),
        None => IemlError::parse(message, span, source_id, Arc::clone(source)),
    }
}

/// Names the first bracket pair whose counts differ, literals ignored
fn unbalanced_delimiter(source: &str) -> Option<String> {
    let mut counts = [0i64; 3];
    let mut in_literal = false;
    let mut escaped = false;

    for c in source.chars() {
        if in_literal {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '>' => in_literal = false,
                _ => {}
            }
            continue;
        }
        match c {
            '<' => in_literal = true,
            '[' => counts[0] += 1,
            ']' => counts[0] -= 1,
            '(' => counts[1] += 1,
            ')' => counts[1] -= 1,
            '{' => counts[2] += 1,
            '}' => counts[2] -= 1,
            _ => {}
        }
    }

    [("[", "]"), ("(", ")"), ("{", "}")]
        .iter()
        .zip(counts)
        .find(|(_, count)| *count != 0)
        .map(|((open, close), _)| format!("every '{}' must be closed by a '{}'", open, close))
}
