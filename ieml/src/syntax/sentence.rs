use crate::ast::{write_literals, Literal};
use crate::dictionary::GrammaticalClass;
use crate::syntax::{AbstractClause, Canonical, Ieml, SentenceNode, TreeGraph, TreeGraphError, Word};
use crate::{IemlError, IemlResult, ResourceLimits};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A tree of clauses over nodes of one level
///
/// The clauses are the edges, from substance to attribute. The tree is
/// validated on construction and its canonical clause order is fixed then.
#[derive(Debug, Clone)]
pub struct AbstractSentence<N> {
    graph: TreeGraph<N, AbstractClause<N>>,
    literals: Vec<Literal>,
    canonical: String,
}

/// A sentence: a tree of words
pub type Sentence = AbstractSentence<Word>;

/// A super-sentence: a tree of sentences
pub type SuperSentence = AbstractSentence<Sentence>;

impl<N: SentenceNode> AbstractSentence<N> {
    pub fn new(clauses: impl IntoIterator<Item = AbstractClause<N>>) -> IemlResult<Self> {
        Self::with_limits(clauses, &ResourceLimits::default())
    }

    pub fn with_limits(
        clauses: impl IntoIterator<Item = AbstractClause<N>>,
        limits: &ResourceLimits,
    ) -> IemlResult<Self> {
        let edges = clauses.into_iter().map(|clause| {
            (
                clause.substance().clone(),
                clause.attribute().clone(),
                clause,
            )
        });

        let graph =
            TreeGraph::new(edges, limits.max_nodes_in_sentence).map_err(|error| {
                debug!(kind = N::SENTENCE_KIND, %error, "rejected sentence graph");
                match error {
                    TreeGraphError::Structure(cause) => IemlError::InvalidTreeStructure {
                        kind: N::SENTENCE_KIND,
                        cause,
                    },
                    TreeGraphError::TooManyNodes { limit, actual } => {
                        too_many_nodes::<N>(limit, actual)
                    }
                }
            })?;

        if graph.len() > limits.max_nodes_in_sentence {
            return Err(too_many_nodes::<N>(
                limits.max_nodes_in_sentence,
                graph.len(),
            ));
        }

        let canonical = format!(
            "[{}]",
            graph
                .payloads()
                .map(AbstractClause::canonical)
                .collect::<Vec<_>>()
                .join("+")
        );

        Ok(Self {
            graph,
            literals: Vec::new(),
            canonical,
        })
    }

    /// Build a sentence from untyped objects, checking each is a clause of the right level
    pub fn from_objects(children: Vec<Ieml>) -> IemlResult<Self> {
        let clauses = children
            .into_iter()
            .map(N::into_clause)
            .collect::<Result<Vec<_>, Ieml>>()
            .map_err(|other| {
                IemlError::invalid_argument(
                    N::SENTENCE_KIND,
                    format!(
                        "the children of a {} must be {} instances, got a {}",
                        N::SENTENCE_KIND,
                        N::CLAUSE_KIND,
                        other.kind()
                    ),
                )
            })?;
        Self::new(clauses)
    }

    pub fn with_literals(mut self, literals: Vec<Literal>) -> Self {
        self.literals = literals;
        self
    }

    /// Clauses in canonical order
    pub fn children(&self) -> impl Iterator<Item = &AbstractClause<N>> + '_ {
        self.graph.payloads()
    }

    pub fn len(&self) -> usize {
        self.children().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn graph(&self) -> &TreeGraph<N, AbstractClause<N>> {
        &self.graph
    }

    pub fn root(&self) -> &N {
        self.graph.root()
    }

    pub fn nodes(&self) -> &[N] {
        self.graph.nodes()
    }

    pub fn stages(&self) -> Vec<Vec<&N>> {
        self.graph.stages()
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Own literals together with those of every clause member, recursively
    pub fn literal_set(&self) -> BTreeSet<&Literal> {
        let mut literals: BTreeSet<&Literal> = self.literals.iter().collect();
        for clause in self.children() {
            for node in clause.children() {
                literals.extend(node.node_literal_set());
            }
        }
        literals
    }

    /// The root node's class
    pub fn grammatical_class(&self) -> GrammaticalClass {
        self.root().node_class()
    }

    /// True if `needle` is one of the clauses or a descendant of one
    pub fn contains(&self, needle: &Ieml) -> bool {
        if let Some(clause) = N::as_clause(needle) {
            return self.children().any(|own| own == clause);
        }
        self.children().any(|clause| clause.contains(needle))
    }
}

fn too_many_nodes<N: SentenceNode>(limit: usize, actual: usize) -> IemlError {
    IemlError::SizeExceeded {
        what: format!("distinct nodes in a {}", N::SENTENCE_KIND),
        limit,
        actual,
    }
}

impl<N: SentenceNode> Canonical for AbstractSentence<N> {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(AbstractSentence<N: SentenceNode>);

/// Lexicographic over the clauses in canonical order.
impl<N: SentenceNode> Ord for AbstractSentence<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.children().cmp(other.children())
    }
}

impl<N: SentenceNode> fmt::Display for AbstractSentence<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, clause) in self.children().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}", clause)?;
        }
        write!(f, "]")?;
        write_literals(f, &self.literals)
    }
}
