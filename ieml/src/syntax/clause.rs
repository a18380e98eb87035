use crate::ast::Literal;
use crate::dictionary::GrammaticalClass;
use crate::syntax::{Canonical, Ieml, Sentence, Word};
use crate::{IemlError, IemlResult};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// An object that can be a node of a sentence graph.
///
/// Words are the nodes of sentences and sentences are the nodes of
/// super-sentences; this trait is what lets one clause type and one
/// sentence type serve both levels.
pub trait SentenceNode: Canonical + Ord + Clone + fmt::Debug + fmt::Display {
    const NODE_KIND: &'static str;
    const CLAUSE_KIND: &'static str;
    const SENTENCE_KIND: &'static str;

    fn node_class(&self) -> GrammaticalClass;

    fn node_literal_set(&self) -> BTreeSet<&Literal>;

    /// True if `needle` is a strict descendant of this node
    fn node_contains(&self, needle: &Ieml) -> bool;

    fn as_node(ieml: &Ieml) -> Option<&Self>;

    fn into_node(ieml: Ieml) -> Result<Self, Ieml>;

    fn as_clause(ieml: &Ieml) -> Option<&AbstractClause<Self>>;

    fn into_clause(ieml: Ieml) -> Result<AbstractClause<Self>, Ieml>;
}

/// A `(substance, attribute, mode)` triple over nodes of the same level
#[derive(Debug, Clone)]
pub struct AbstractClause<N> {
    substance: N,
    attribute: N,
    mode: N,
    canonical: String,
}

/// A clause over words
pub type Clause = AbstractClause<Word>;

/// A clause over sentences
pub type SuperClause = AbstractClause<Sentence>;

impl<N: SentenceNode> AbstractClause<N> {
    /// Fails if the substance and the attribute are equal
    pub fn new(substance: N, attribute: N, mode: N) -> IemlResult<Self> {
        if substance == attribute {
            return Err(IemlError::StructuralConflict {
                kind: N::CLAUSE_KIND,
                node: substance.canonical().to_string(),
            });
        }

        let canonical = format!(
            "({}*{}*{})",
            substance.canonical(),
            attribute.canonical(),
            mode.canonical()
        );
        Ok(Self {
            substance,
            attribute,
            mode,
            canonical,
        })
    }

    /// Build a clause from a `[substance, attribute, mode]` sequence
    pub fn from_children(children: Vec<N>) -> IemlResult<Self> {
        let [substance, attribute, mode]: [N; 3] = children.try_into().map_err(|c: Vec<N>| {
            IemlError::invalid_argument(
                N::CLAUSE_KIND,
                format!("a clause must have three children ({} provided)", c.len()),
            )
        })?;
        Self::new(substance, attribute, mode)
    }

    /// Build a clause from untyped objects, checking each is a node of the right level
    pub fn from_objects(children: Vec<Ieml>) -> IemlResult<Self> {
        let children = children
            .into_iter()
            .map(N::into_node)
            .collect::<Result<Vec<N>, Ieml>>()
            .map_err(|other| {
                IemlError::invalid_argument(
                    N::CLAUSE_KIND,
                    format!(
                        "the children of a {} must be {} instances, got a {}",
                        N::CLAUSE_KIND,
                        N::NODE_KIND,
                        other.kind()
                    ),
                )
            })?;
        Self::from_children(children)
    }

    pub fn substance(&self) -> &N {
        &self.substance
    }

    pub fn attribute(&self) -> &N {
        &self.attribute
    }

    pub fn mode(&self) -> &N {
        &self.mode
    }

    pub fn children(&self) -> [&N; 3] {
        [&self.substance, &self.attribute, &self.mode]
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The attribute's class
    pub fn grammatical_class(&self) -> GrammaticalClass {
        self.attribute.node_class()
    }

    /// True if `needle` is one of the three nodes or a descendant of one
    pub fn contains(&self, needle: &Ieml) -> bool {
        if let Some(node) = N::as_node(needle) {
            if self.children().contains(&node) {
                return true;
            }
        }
        self.children()
            .iter()
            .any(|child| child.node_contains(needle))
    }
}

impl<N: SentenceNode> Canonical for AbstractClause<N> {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(AbstractClause<N: SentenceNode>);

/// Substance, then attribute, then mode.
impl<N: SentenceNode> Ord for AbstractClause<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.substance
            .cmp(&other.substance)
            .then_with(|| self.attribute.cmp(&other.attribute))
            .then_with(|| self.mode.cmp(&other.mode))
    }
}

impl<N: SentenceNode> fmt::Display for AbstractClause<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}*{}*{})", self.substance, self.attribute, self.mode)
    }
}

impl SentenceNode for Word {
    const NODE_KIND: &'static str = "Word";
    const CLAUSE_KIND: &'static str = "Clause";
    const SENTENCE_KIND: &'static str = "Sentence";

    fn node_class(&self) -> GrammaticalClass {
        self.grammatical_class()
    }

    fn node_literal_set(&self) -> BTreeSet<&Literal> {
        self.literals().iter().collect()
    }

    fn node_contains(&self, needle: &Ieml) -> bool {
        self.contains(needle)
    }

    fn as_node(ieml: &Ieml) -> Option<&Self> {
        match ieml {
            Ieml::Word(word) => Some(word),
            _ => None,
        }
    }

    fn into_node(ieml: Ieml) -> Result<Self, Ieml> {
        match ieml {
            Ieml::Word(word) => Ok(word),
            other => Err(other),
        }
    }

    fn as_clause(ieml: &Ieml) -> Option<&AbstractClause<Self>> {
        match ieml {
            Ieml::Clause(clause) => Some(clause),
            _ => None,
        }
    }

    fn into_clause(ieml: Ieml) -> Result<AbstractClause<Self>, Ieml> {
        match ieml {
            Ieml::Clause(clause) => Ok(clause),
            other => Err(other),
        }
    }
}

impl SentenceNode for Sentence {
    const NODE_KIND: &'static str = "Sentence";
    const CLAUSE_KIND: &'static str = "SuperClause";
    const SENTENCE_KIND: &'static str = "SuperSentence";

    fn node_class(&self) -> GrammaticalClass {
        self.grammatical_class()
    }

    fn node_literal_set(&self) -> BTreeSet<&Literal> {
        self.literal_set()
    }

    fn node_contains(&self, needle: &Ieml) -> bool {
        self.contains(needle)
    }

    fn as_node(ieml: &Ieml) -> Option<&Self> {
        match ieml {
            Ieml::Sentence(sentence) => Some(sentence),
            _ => None,
        }
    }

    fn into_node(ieml: Ieml) -> Result<Self, Ieml> {
        match ieml {
            Ieml::Sentence(sentence) => Ok(sentence),
            other => Err(other),
        }
    }

    fn as_clause(ieml: &Ieml) -> Option<&AbstractClause<Self>> {
        match ieml {
            Ieml::SuperClause(clause) => Some(clause),
            _ => None,
        }
    }

    fn into_clause(ieml: Ieml) -> Result<AbstractClause<Self>, Ieml> {
        match ieml {
            Ieml::SuperClause(clause) => Ok(clause),
            other => Err(other),
        }
    }
}
