use crate::ast::Literal;
use crate::parser::Rule;
use pest::iterators::Pair;

/// The grammar guarantees the surrounding `<` and `>`; the body is kept verbatim.
pub(crate) fn parse_literal(pair: Pair<Rule>) -> Literal {
    let content = pair.as_str();
    Literal::from_raw(&content[1..content.len() - 1])
}
