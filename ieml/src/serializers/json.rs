use crate::dictionary::GrammaticalClass;
use crate::parser::IemlParser;
use crate::syntax::{
    AbstractClause, AbstractSentence, Canonical, Clause, Hypertext, Ieml, Morpheme, Sentence,
    SentenceNode, Text, Word,
};
use crate::{IemlError, IemlResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Serialize)]
struct IemlJson<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    rank: u8,
    ieml: String,
    canonical: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<GrammaticalClass>,
    children: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    literals: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<GraphJson<'a>>,
}

#[derive(Serialize)]
struct GraphJson<'a> {
    root: &'a str,
    stages: Vec<Vec<&'a str>>,
    edges: Vec<EdgeJson<'a>>,
}

#[derive(Serialize)]
struct EdgeJson<'a> {
    substance: &'a str,
    attribute: &'a str,
    mode: &'a str,
}

#[derive(Serialize)]
struct HypertextJson<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    rank: u8,
    ieml: &'a str,
    links: Vec<LinkJson<'a>>,
}

#[derive(Serialize)]
struct LinkJson<'a> {
    source: &'a str,
    target: &'a str,
    path: Vec<&'a str>,
}

/// Describe an object: kind, rank, textual and canonical forms, class,
/// children in canonical order, literals, and the tree of a sentence.
pub fn to_json(ieml: &Ieml) -> IemlResult<Value> {
    let (children, literals, graph): (Vec<&str>, Vec<&str>, Option<GraphJson>) = match ieml {
        Ieml::Term(_) => (Vec::new(), Vec::new(), None),
        Ieml::Morpheme(m) => (morpheme_children(m), Vec::new(), None),
        Ieml::Word(w) => (word_children(w), raw_literals(w.literals()), None),
        Ieml::Clause(c) => (clause_children(c), Vec::new(), None),
        Ieml::SuperClause(c) => (clause_children(c), Vec::new(), None),
        Ieml::Sentence(s) => (
            sentence_children(s),
            raw_literals(s.literals()),
            Some(graph_json(s)),
        ),
        Ieml::SuperSentence(s) => (
            sentence_children(s),
            raw_literals(s.literals()),
            Some(graph_json(s)),
        ),
        Ieml::Text(t) => (t.members().iter().map(|m| m.canonical()).collect(), Vec::new(), None),
        Ieml::Hypertext(h) => (
            h.texts().into_iter().map(Text::canonical).collect(),
            Vec::new(),
            None,
        ),
    };

    let json = IemlJson {
        kind: ieml.kind(),
        rank: ieml.rank(),
        ieml: ieml.to_string(),
        canonical: ieml.canonical(),
        class: ieml.grammatical_class(),
        children,
        literals,
        graph,
    };
    Ok(serde_json::to_value(json)?)
}

pub fn hypertext_to_json(hypertext: &Hypertext) -> IemlResult<Value> {
    let json = HypertextJson {
        kind: "hypertext",
        rank: crate::syntax::HYPERTEXT_RANK,
        ieml: hypertext.canonical(),
        links: hypertext
            .links()
            .map(|link| LinkJson {
                source: link.source().canonical(),
                target: link.target().canonical(),
                path: link.path().steps().iter().map(Ieml::canonical).collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_value(json)?)
}

fn morpheme_children(morpheme: &Morpheme) -> Vec<&str> {
    morpheme.terms().iter().map(|t| t.canonical()).collect()
}

fn word_children(word: &Word) -> Vec<&str> {
    std::iter::once(word.substance())
        .chain(word.mode())
        .map(Morpheme::canonical)
        .collect()
}

fn clause_children<N: SentenceNode>(clause: &AbstractClause<N>) -> Vec<&str> {
    clause.children().into_iter().map(Canonical::canonical).collect()
}

fn sentence_children<N: SentenceNode>(sentence: &AbstractSentence<N>) -> Vec<&str> {
    sentence.children().map(|c| c.canonical()).collect()
}

fn raw_literals(literals: &[crate::ast::Literal]) -> Vec<&str> {
    literals.iter().map(|l| l.raw()).collect()
}

fn graph_json<N: SentenceNode>(sentence: &AbstractSentence<N>) -> GraphJson<'_> {
    GraphJson {
        root: sentence.root().canonical(),
        stages: sentence
            .stages()
            .into_iter()
            .map(|stage| stage.into_iter().map(|n| n.canonical()).collect())
            .collect(),
        edges: sentence
            .children()
            .map(|clause| EdgeJson {
                substance: clause.substance().canonical(),
                attribute: clause.attribute().canonical(),
                mode: clause.mode().canonical(),
            })
            .collect(),
    }
}

#[derive(Debug, Deserialize)]
struct GraphNode {
    id: u64,
    ieml_string: String,
}

#[derive(Debug, Deserialize)]
struct WordGraph {
    nodes: Vec<GraphNode>,
    graph: WordRoles,
}

#[derive(Debug, Deserialize)]
struct WordRoles {
    substance: Vec<u64>,
    #[serde(default)]
    mode: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct SentenceGraph {
    nodes: Vec<GraphNode>,
    graph: Vec<GraphEdge>,
}

#[derive(Debug, Deserialize)]
struct GraphEdge {
    substance: u64,
    attribute: u64,
    mode: u64,
}

/// Parse every node and index it by id
fn parse_nodes(nodes: Vec<GraphNode>, parser: &IemlParser) -> IemlResult<HashMap<u64, Ieml>> {
    let mut parsed = HashMap::with_capacity(nodes.len());
    for node in nodes {
        let ieml = parser.parse_source(&node.ieml_string, &format!("node {}", node.id))?;
        if parsed.insert(node.id, ieml).is_some() {
            return Err(IemlError::Serialization(format!(
                "duplicate node id {}",
                node.id
            )));
        }
    }
    Ok(parsed)
}

fn node(nodes: &HashMap<u64, Ieml>, id: u64) -> IemlResult<&Ieml> {
    nodes
        .get(&id)
        .ok_or_else(|| IemlError::Serialization(format!("unknown node id {}", id)))
}

/// Build a word from a graph whose nodes are terms, grouped into a
/// substance and an optional mode by id.
///
/// ```json
/// {"nodes": [{"id": 1, "ieml_string": "[a.i.-]"}, {"id": 2, "ieml_string": "[E:A:T:.]"}],
///  "graph": {"substance": [1], "mode": [2]}}
/// ```
pub fn word_from_graph(json: &str, parser: &IemlParser) -> IemlResult<Word> {
    let document: WordGraph = serde_json::from_str(json)?;
    let nodes = parse_nodes(document.nodes, parser)?;

    let morpheme = |ids: &[u64]| -> IemlResult<Morpheme> {
        let terms = ids
            .iter()
            .map(|&id| match node(&nodes, id)? {
                Ieml::Term(term) => Ok(term.clone()),
                other => Err(IemlError::invalid_argument(
                    "Word",
                    format!("node {} is a {}, expected a term", id, other.kind()),
                )),
            })
            .collect::<IemlResult<Vec<_>>>()?;
        Morpheme::new(terms)
    };

    let substance = morpheme(&document.graph.substance)?;
    let mode = if document.graph.mode.is_empty() {
        None
    } else {
        Some(morpheme(&document.graph.mode)?)
    };
    Ok(Word::new(substance, mode))
}

/// Build a sentence from a graph whose nodes are words and whose edges are
/// clauses referencing them by id.
pub fn sentence_from_graph(json: &str, parser: &IemlParser) -> IemlResult<Sentence> {
    let document: SentenceGraph = serde_json::from_str(json)?;
    let nodes = parse_nodes(document.nodes, parser)?;

    let word = |id: u64| -> IemlResult<Word> {
        match node(&nodes, id)? {
            Ieml::Word(word) => Ok(word.clone()),
            other => Err(IemlError::invalid_argument(
                "Clause",
                format!("node {} is a {}, expected a word", id, other.kind()),
            )),
        }
    };

    let clauses = document
        .graph
        .iter()
        .map(|edge| Clause::new(word(edge.substance)?, word(edge.attribute)?, word(edge.mode)?))
        .collect::<IemlResult<Vec<_>>>()?;
    Sentence::with_limits(clauses, parser.limits())
}
