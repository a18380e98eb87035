use crate::ast::{write_literals, Literal};
use crate::dictionary::GrammaticalClass;
use crate::syntax::{Canonical, Ieml, Morpheme};
use std::cmp::Ordering;
use std::fmt;

/// A word: a substance morpheme and an optional mode morpheme
#[derive(Debug, Clone)]
pub struct Word {
    substance: Morpheme,
    mode: Option<Morpheme>,
    literals: Vec<Literal>,
    canonical: String,
}

impl Word {
    pub fn new(substance: Morpheme, mode: Option<Morpheme>) -> Self {
        let canonical = match &mode {
            Some(mode) => format!("[{}*{}]", substance.canonical(), mode.canonical()),
            None => format!("[{}]", substance.canonical()),
        };
        Self {
            substance,
            mode,
            literals: Vec::new(),
            canonical,
        }
    }

    pub fn with_literals(mut self, literals: Vec<Literal>) -> Self {
        self.literals = literals;
        self
    }

    pub fn substance(&self) -> &Morpheme {
        &self.substance
    }

    pub fn mode(&self) -> Option<&Morpheme> {
        self.mode.as_ref()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn grammatical_class(&self) -> GrammaticalClass {
        self.substance.grammatical_class()
    }

    /// True if `needle` is one of the word's morphemes or one of their terms
    pub fn contains(&self, needle: &Ieml) -> bool {
        let morphemes = std::iter::once(&self.substance).chain(self.mode.as_ref());
        match needle {
            Ieml::Morpheme(m) => morphemes.into_iter().any(|own| own == m),
            Ieml::Term(t) => morphemes.into_iter().any(|own| own.contains_term(t)),
            _ => false,
        }
    }
}

impl Canonical for Word {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(Word);

/// Substance first, then mode; a word without mode sorts first.
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.substance
            .cmp(&other.substance)
            .then_with(|| self.mode.cmp(&other.mode))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)?;
        write_literals(f, &self.literals)
    }
}
