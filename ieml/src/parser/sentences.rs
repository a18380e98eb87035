use crate::parser::literals::parse_literal;
use crate::parser::words::parse_word;
use crate::parser::{Context, Rule};
use crate::syntax::{AbstractClause, AbstractSentence, Sentence, SentenceNode, Word};
use crate::IemlResult;
use pest::iterators::Pair;

/// Parses the nodes of a clause: words for sentences, sentences for super-sentences
pub(crate) trait NodeParser: SentenceNode {
    fn parse_node(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Self>;
}

impl NodeParser for Word {
    fn parse_node(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Self> {
        parse_word(pair, ctx)
    }
}

impl NodeParser for Sentence {
    fn parse_node(pair: Pair<Rule>, ctx: &Context) -> IemlResult<Self> {
        parse_sentence::<Word>(pair, ctx)
    }
}

pub(crate) fn parse_clause<N: NodeParser>(
    pair: Pair<Rule>,
    ctx: &Context,
) -> IemlResult<AbstractClause<N>> {
    let children = pair
        .into_inner()
        .map(|p| N::parse_node(p, ctx))
        .collect::<IemlResult<Vec<N>>>()?;
    AbstractClause::from_children(children)
}

pub(crate) fn parse_sentence<N: NodeParser>(
    pair: Pair<Rule>,
    ctx: &Context,
) -> IemlResult<AbstractSentence<N>> {
    let mut clauses = Vec::new();
    let mut literals = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::clause | Rule::super_clause => clauses.push(parse_clause(inner, ctx)?),
            Rule::literal => literals.push(parse_literal(inner)),
            _ => return Err(ctx.unexpected(&inner)),
        }
    }

    Ok(AbstractSentence::with_limits(clauses, ctx.limits)?.with_literals(literals))
}
