use crate::ast::Span;
use crate::dictionary::Term;
use crate::parser::literals::parse_literal;
use crate::parser::{Context, Rule};
use crate::syntax::{Morpheme, Word};
use crate::IemlResult;
use pest::iterators::Pair;

/// Accepts both `[script]` and a bare script
pub(crate) fn parse_term(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Term> {
    let span = Span::from_pest_span(pair.as_span());
    let script = match pair.as_rule() {
        Rule::script => pair.as_str(),
        Rule::term => pair
            .into_inner()
            .next()
            .map(|p| p.as_str())
            .ok_or_else(|| ctx.error(span.clone(), "a term must contain a script"))?,
        _ => return Err(ctx.unexpected(&pair)),
    };

    if !ctx.dictionary.contains(script) {
        return Err(ctx.error(span, format!("unknown term '{}'", script)));
    }
    ctx.dictionary.term(script)
}

pub(crate) fn parse_morpheme(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Morpheme> {
    let terms = pair
        .into_inner()
        .map(|p| parse_term(p, ctx))
        .collect::<IemlResult<Vec<_>>>()?;
    Morpheme::new(terms)
}

pub(crate) fn parse_word(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Word> {
    let span = Span::from_pest_span(pair.as_span());
    let mut morphemes = Vec::with_capacity(2);
    let mut literals = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::morpheme => morphemes.push(parse_morpheme(inner, ctx)?),
            Rule::literal => literals.push(parse_literal(inner)),
            _ => return Err(ctx.unexpected(&inner)),
        }
    }

    let mut morphemes = morphemes.into_iter();
    let substance = morphemes
        .next()
        .ok_or_else(|| ctx.error(span, "a word must have a substance"))?;
    Ok(Word::new(substance, morphemes.next()).with_literals(literals))
}
