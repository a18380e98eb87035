//! JSON interchange
//!
//! `to_json` describes any object for downstream renderers. The graph
//! importers read the node-and-edge documents produced by graphical editors
//! and build the word or sentence they describe.

mod json;

pub use json::{hypertext_to_json, sentence_from_graph, to_json, word_from_graph};
