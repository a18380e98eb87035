/// Maximum number of distinct nodes in a single sentence or super-sentence tree
pub const MAX_NODES_IN_SENTENCE: usize = 20;

/// Limits enforced while building and parsing IEML objects
///
/// Every limit is checked at construction time; an object that violates one
/// is never built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum number of distinct nodes in a sentence or super-sentence
    pub max_nodes_in_sentence: usize,

    /// Maximum size of a textual input handed to the parser, in bytes
    pub max_input_bytes: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_nodes_in_sentence: MAX_NODES_IN_SENTENCE,
            max_input_bytes: 1024 * 1024, // 1 MiB
        }
    }
}

impl ResourceLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes_in_sentence(mut self, max_nodes: usize) -> Self {
        self.max_nodes_in_sentence = max_nodes;
        self
    }

    pub fn with_max_input_bytes(mut self, max_bytes: usize) -> Self {
        self.max_input_bytes = max_bytes;
        self
    }
}
