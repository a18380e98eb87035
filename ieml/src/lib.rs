//! # IEML Engine
//!
//! Syntactic core of IEML, the Information Economy MetaLanguage.
//!
//! IEML objects are built bottom-up from the terms of a dictionary. Words
//! combine morphemes; sentences are trees of clauses between words;
//! super-sentences are trees of clauses between sentences; texts gather
//! propositions of any of those levels, and hypertexts link texts together.
//!
//! Every object is validated when it is built and has a canonical text form
//! that identifies it: two objects are equal exactly when their canonical
//! forms are, whatever order their parts were given in.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ieml::{Dictionary, IemlParser, IemlResult};
//!
//! fn main() -> IemlResult<()> {
//!     let dictionary = Dictionary::from_json(&std::fs::read_to_string("dictionary.json")
//!         .expect("dictionary file"))?;
//!
//!     let parser = IemlParser::new(&dictionary);
//!     let sentence = parser.parse("[([([A:])]*[([B:])]*[([S:])])]")?;
//!
//!     println!("{} is a {}", sentence, sentence.kind());
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Terms
//! The leaves. A term is defined by a script in the dictionary and is
//! interned: every lookup of a script returns the same shared instance.
//!
//! ### Sentences
//! A sentence is a set of `(substance*attribute*mode)` clauses that must form
//! a tree going from substance to attribute. Cycles, several roots, nodes
//! with two parents and disconnected nodes are all rejected.
//!
//! ### Literals
//! Words and sentences may carry `<...>` annotations. They survive printing
//! and parsing but play no part in identity.

pub mod ast;
pub mod dictionary;
pub mod error;
pub mod parser;
pub mod resource_limits;
pub mod serializers;
pub mod syntax;

pub use ast::{Literal, Span};
pub use dictionary::{Dictionary, GrammaticalClass, Relations, Term, TermEntry};
pub use error::{ErrorDetails, IemlError, TreeStructureError};
pub use parser::{parse, IemlParser};
pub use resource_limits::{ResourceLimits, MAX_NODES_IN_SENTENCE};
pub use syntax::*;

/// Result type for IEML operations
pub type IemlResult<T> = Result<T, IemlError>;

#[cfg(test)]
mod tests;
