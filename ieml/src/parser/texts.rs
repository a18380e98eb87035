use crate::ast::Span;
use crate::parser::sentences::parse_sentence;
use crate::parser::words::parse_word;
use crate::parser::{parse_ieml, Context, Rule};
use crate::syntax::{Hyperlink, Hypertext, Ieml, PropositionPath, Sentence, Text, Word};
use crate::IemlResult;
use pest::iterators::Pair;

pub(crate) fn parse_text(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Text> {
    let members = pair
        .into_inner()
        .map(|inner| parse_proposition(inner, ctx))
        .collect::<IemlResult<Vec<_>>>()?;
    Text::new(members)
}

fn parse_proposition(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Ieml> {
    let proposition = match pair.as_rule() {
        Rule::word => Ieml::Word(parse_word(pair, ctx)?),
        Rule::sentence => Ieml::Sentence(parse_sentence::<Word>(pair, ctx)?),
        Rule::super_sentence => Ieml::SuperSentence(parse_sentence::<Sentence>(pair, ctx)?),
        _ => return Err(ctx.unexpected(&pair)),
    };
    Ok(proposition)
}

pub(crate) fn parse_hypertext(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Hypertext> {
    let mut links = Vec::new();
    for block in pair.into_inner() {
        links.extend(parse_hypertext_block(block, ctx)?);
    }
    Hypertext::new(links)
}

/// Links written inside one source text
fn parse_hypertext_block(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Vec<Hyperlink>> {
    let mut members = Vec::new();
    let mut anchors = Vec::new();

    for member in pair.into_inner() {
        let span = Span::from_pest_span(member.as_span());
        let mut inner = member.into_inner();
        let proposition = match inner.next() {
            Some(first) => parse_proposition(first, ctx)?,
            None => return Err(ctx.error(span, "a member must hold a proposition")),
        };
        for anchor in inner {
            anchors.push(parse_anchor(anchor, proposition.clone(), ctx)?);
        }
        members.push(proposition);
    }

    let source = Text::new(members)?;
    anchors
        .into_iter()
        .map(|(path, target)| Hyperlink::new(source.clone(), target, path))
        .collect()
}

/// The path starting on `member` and the text it links to
fn parse_anchor(
    pair: Pair<Rule>,
    member: Ieml,
    ctx: &Context,
) -> IemlResult<(PropositionPath, Text)> {
    let span = Span::from_pest_span(pair.as_span());
    let mut parts: Vec<Pair<Rule>> = pair.into_inner().collect();

    let target = match parts.pop() {
        Some(last) if last.as_rule() == Rule::text => parse_text(last, ctx)?,
        _ => return Err(ctx.error(span, "a link must end on a text")),
    };

    let mut steps = vec![member];
    for step in parts {
        steps.push(parse_ieml(step, ctx)?);
    }
    Ok((PropositionPath::new(steps)?, target))
}
