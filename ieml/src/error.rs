use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed parse error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// The specific condition a tree-graph validation failed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeStructureError {
    /// A node reaches itself; the path starts and ends on the same node
    Cycle(Vec<String>),
    /// No node without a parent (also the case for an empty edge set)
    NoRoot,
    /// More than one node without a parent: a forest, not a tree
    MultipleRoots(Vec<String>),
    /// A node with two or more incoming edges
    MultipleParents { node: String, parents: Vec<String> },
    /// Nodes not reachable from the root
    Disconnected(Vec<String>),
}

impl fmt::Display for TreeStructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStructureError::Cycle(path) => write!(f, "cycle detected: {}", path.join(" -> ")),
            TreeStructureError::NoRoot => write!(f, "no root node"),
            TreeStructureError::MultipleRoots(roots) => {
                write!(f, "multiple root nodes: {}", roots.join(", "))
            }
            TreeStructureError::MultipleParents { node, parents } => write!(
                f,
                "node {} has more than one parent: {}",
                node,
                parents.join(", ")
            ),
            TreeStructureError::Disconnected(nodes) => write!(
                f,
                "nodes not reachable from the root: {}",
                nodes.join(", ")
            ),
        }
    }
}

/// Error types for the IEML syntax engine
#[derive(Debug, Clone)]
pub enum IemlError {
    /// Wrong count or wrong kind of children supplied to a constructor
    InvalidArgument { kind: &'static str, message: String },

    /// The substance and the attribute of a clause are the same node
    StructuralConflict { kind: &'static str, node: String },

    /// The clauses of a sentence do not form a valid tree
    InvalidTreeStructure {
        kind: &'static str,
        cause: TreeStructureError,
    },

    /// A configured limit was exceeded
    SizeExceeded {
        what: String,
        limit: usize,
        actual: usize,
    },

    /// A referenced script is not defined in the dictionary
    TermNotFound(String),

    /// The textual form could not be parsed
    Parse(Box<ErrorDetails>),

    /// The dictionary data is malformed
    Dictionary(String),

    /// An object could not be serialized
    Serialization(String),
}

impl IemlError {
    pub fn invalid_argument(kind: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            message: message.into(),
        }
    }

    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }
}

impl fmt::Display for IemlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IemlError::InvalidArgument { kind, message } => {
                write!(f, "Invalid {} argument: {}", kind, message)
            }
            IemlError::StructuralConflict { kind, node } => write!(
                f,
                "Invalid {}: the substance and the attribute ({}) must be distinct",
                kind, node
            ),
            IemlError::InvalidTreeStructure { kind, cause } => {
                write!(f, "Invalid {} tree structure: {}", kind, cause)
            }
            IemlError::SizeExceeded {
                what,
                limit,
                actual,
            } => write!(f, "Too many {}: {} > {}", what, actual, limit),
            IemlError::TermNotFound(script) => {
                write!(f, "Term not found in dictionary: {}", script)
            }
            IemlError::Parse(details) => {
                write!(f, "Parse error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(
                    f,
                    " at {}:{}:{}",
                    details.source_id, details.span.line, details.span.col
                )
            }
            IemlError::Dictionary(msg) => write!(f, "Dictionary error: {}", msg),
            IemlError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for IemlError {}

impl From<serde_json::Error> for IemlError {
    fn from(err: serde_json::Error) -> Self {
        IemlError::Serialization(err.to_string())
    }
}
