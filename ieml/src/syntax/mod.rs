//! IEML syntactic objects
//!
//! Objects are built bottom-up: terms form morphemes, morphemes form words,
//! clauses over words form sentences, clauses over sentences form
//! super-sentences, and propositions of any of those levels form texts.
//!
//! Every object computes its canonical text form once, at construction.
//! Equality and hashing are derived from that form alone, so two objects
//! built from the same children in a different order are indistinguishable.

use crate::dictionary::{GrammaticalClass, Term};
use std::fmt;

/// Canonical text form of an object, literals excluded
pub trait Canonical {
    fn canonical(&self) -> &str;
}

impl Canonical for Term {
    fn canonical(&self) -> &str {
        Term::canonical(self)
    }
}

/// Derives `PartialEq`, `Eq`, `Hash` and `PartialOrd` from `Canonical` and `Ord`.
macro_rules! canonical_identity {
    ($ty:ident $(<$g:ident: $bound:path>)?) => {
        impl$(<$g: $bound>)? PartialEq for $ty$(<$g>)? {
            fn eq(&self, other: &Self) -> bool {
                $crate::syntax::Canonical::canonical(self)
                    == $crate::syntax::Canonical::canonical(other)
            }
        }

        impl$(<$g: $bound>)? Eq for $ty$(<$g>)? {}

        impl$(<$g: $bound>)? std::hash::Hash for $ty$(<$g>)? {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash($crate::syntax::Canonical::canonical(self), state)
            }
        }

        impl$(<$g: $bound>)? PartialOrd for $ty$(<$g>)? {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
    };
}

pub mod clause;
pub mod hypertext;
pub mod morpheme;
pub mod sentence;
pub mod text;
pub mod tree_graph;
pub mod word;

pub use clause::{AbstractClause, Clause, SentenceNode, SuperClause};
pub use hypertext::{Hyperlink, Hypertext, PropositionPath};
pub use morpheme::Morpheme;
pub use sentence::{AbstractSentence, Sentence, SuperSentence};
pub use text::{Proposition, Text};
pub use tree_graph::{TreeGraph, TreeGraphError};
pub use word::Word;

/// Any IEML object
///
/// The derived ordering sorts by level first (terms before morphemes before
/// words, and so on), then by each level's own order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ieml {
    Term(Term),
    Morpheme(Morpheme),
    Word(Word),
    Clause(Clause),
    Sentence(Sentence),
    SuperClause(SuperClause),
    SuperSentence(SuperSentence),
    Text(Text),
    Hypertext(Hypertext),
}

/// Syntactic rank of a hypertext, one above texts
pub const HYPERTEXT_RANK: u8 = 8;

impl Ieml {
    pub fn kind(&self) -> &'static str {
        match self {
            Ieml::Term(_) => "term",
            Ieml::Morpheme(_) => "morpheme",
            Ieml::Word(_) => "word",
            Ieml::Clause(_) => "clause",
            Ieml::Sentence(_) => "sentence",
            Ieml::SuperClause(_) => "super-clause",
            Ieml::SuperSentence(_) => "super-sentence",
            Ieml::Text(_) => "text",
            Ieml::Hypertext(_) => "hypertext",
        }
    }

    /// Syntactic rank. A morpheme shares rank 1 with the terms it groups.
    pub fn rank(&self) -> u8 {
        match self {
            Ieml::Term(_) | Ieml::Morpheme(_) => 1,
            Ieml::Word(_) => 2,
            Ieml::Clause(_) => 3,
            Ieml::Sentence(_) => 4,
            Ieml::SuperClause(_) => 5,
            Ieml::SuperSentence(_) => 6,
            Ieml::Text(_) => 7,
            Ieml::Hypertext(_) => HYPERTEXT_RANK,
        }
    }

    pub fn canonical(&self) -> &str {
        match self {
            Ieml::Term(t) => t.canonical(),
            Ieml::Morpheme(m) => m.canonical(),
            Ieml::Word(w) => w.canonical(),
            Ieml::Clause(c) => c.canonical(),
            Ieml::Sentence(s) => s.canonical(),
            Ieml::SuperClause(c) => c.canonical(),
            Ieml::SuperSentence(s) => s.canonical(),
            Ieml::Text(t) => t.canonical(),
            Ieml::Hypertext(h) => h.canonical(),
        }
    }

    /// Grammatical class; texts and hypertexts have none
    pub fn grammatical_class(&self) -> Option<GrammaticalClass> {
        match self {
            Ieml::Term(t) => Some(t.grammatical_class()),
            Ieml::Morpheme(m) => Some(m.grammatical_class()),
            Ieml::Word(w) => Some(w.grammatical_class()),
            Ieml::Clause(c) => Some(c.grammatical_class()),
            Ieml::Sentence(s) => Some(s.grammatical_class()),
            Ieml::SuperClause(c) => Some(c.grammatical_class()),
            Ieml::SuperSentence(s) => Some(s.grammatical_class()),
            Ieml::Text(_) | Ieml::Hypertext(_) => None,
        }
    }

    /// True if `needle` is a descendant of this object, at any depth
    pub fn contains(&self, needle: &Ieml) -> bool {
        match self {
            Ieml::Term(_) => false,
            Ieml::Morpheme(m) => matches!(needle, Ieml::Term(t) if m.contains_term(t)),
            Ieml::Word(w) => w.contains(needle),
            Ieml::Clause(c) => c.contains(needle),
            Ieml::Sentence(s) => s.contains(needle),
            Ieml::SuperClause(c) => c.contains(needle),
            Ieml::SuperSentence(s) => s.contains(needle),
            Ieml::Text(t) => t.contains(needle),
            Ieml::Hypertext(h) => h.contains(needle),
        }
    }

    /// True if `child` is a direct child of this object
    pub fn has_child(&self, child: &Ieml) -> bool {
        match (self, child) {
            (Ieml::Morpheme(m), Ieml::Term(t)) => m.contains_term(t),
            (Ieml::Word(w), Ieml::Morpheme(m)) => w.substance() == m || w.mode() == Some(m),
            (Ieml::Clause(c), Ieml::Word(w)) => c.children().contains(&w),
            (Ieml::Sentence(s), Ieml::Clause(c)) => s.children().any(|x| x == c),
            (Ieml::SuperClause(c), Ieml::Sentence(s)) => c.children().contains(&s),
            (Ieml::SuperSentence(s), Ieml::SuperClause(c)) => s.children().any(|x| x == c),
            (Ieml::Text(t), _) => t.members().iter().any(|m| m.matches(child)),
            (Ieml::Hypertext(h), Ieml::Text(t)) => h.texts().contains(&t),
            _ => false,
        }
    }
}

impl fmt::Display for Ieml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ieml::Term(t) => write!(f, "{}", t),
            Ieml::Morpheme(m) => write!(f, "{}", m),
            Ieml::Word(w) => write!(f, "{}", w),
            Ieml::Clause(c) => write!(f, "{}", c),
            Ieml::Sentence(s) => write!(f, "{}", s),
            Ieml::SuperClause(c) => write!(f, "{}", c),
            Ieml::SuperSentence(s) => write!(f, "{}", s),
            Ieml::Text(t) => write!(f, "{}", t),
            Ieml::Hypertext(h) => write!(f, "{}", h),
        }
    }
}

impl From<Term> for Ieml {
    fn from(term: Term) -> Self {
        Ieml::Term(term)
    }
}

impl From<Morpheme> for Ieml {
    fn from(morpheme: Morpheme) -> Self {
        Ieml::Morpheme(morpheme)
    }
}

impl From<Word> for Ieml {
    fn from(word: Word) -> Self {
        Ieml::Word(word)
    }
}

impl From<Clause> for Ieml {
    fn from(clause: Clause) -> Self {
        Ieml::Clause(clause)
    }
}

impl From<Sentence> for Ieml {
    fn from(sentence: Sentence) -> Self {
        Ieml::Sentence(sentence)
    }
}

impl From<SuperClause> for Ieml {
    fn from(clause: SuperClause) -> Self {
        Ieml::SuperClause(clause)
    }
}

impl From<SuperSentence> for Ieml {
    fn from(sentence: SuperSentence) -> Self {
        Ieml::SuperSentence(sentence)
    }
}

impl From<Text> for Ieml {
    fn from(text: Text) -> Self {
        Ieml::Text(text)
    }
}

impl From<Hypertext> for Ieml {
    fn from(hypertext: Hypertext) -> Self {
        Ieml::Hypertext(hypertext)
    }
}
