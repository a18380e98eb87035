use crate::dictionary::{GrammaticalClass, Term};
use crate::syntax::Canonical;
use crate::{IemlError, IemlResult};
use std::cmp::Ordering;
use std::fmt;

/// A set of terms, kept in the terms' total order
#[derive(Debug, Clone)]
pub struct Morpheme {
    terms: Vec<Term>,
    canonical: String,
}

impl Morpheme {
    /// Build a morpheme from terms given in any order.
    ///
    /// Fails if no term is given or a term appears twice.
    pub fn new(terms: impl IntoIterator<Item = Term>) -> IemlResult<Self> {
        let mut terms: Vec<Term> = terms.into_iter().collect();
        if terms.is_empty() {
            return Err(IemlError::invalid_argument(
                "Morpheme",
                "a morpheme must contain at least one term",
            ));
        }

        terms.sort();
        if let Some(pair) = terms.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(IemlError::invalid_argument(
                "Morpheme",
                format!("duplicate term {} in morpheme", pair[0]),
            ));
        }

        let canonical = format!(
            "({})",
            terms
                .iter()
                .map(Term::canonical)
                .collect::<Vec<_>>()
                .join("|")
        );
        Ok(Self { terms, canonical })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn contains_term(&self, term: &Term) -> bool {
        self.terms.binary_search(term).is_ok()
    }

    /// The highest class among the terms
    pub fn grammatical_class(&self) -> GrammaticalClass {
        self.terms
            .iter()
            .map(Term::grammatical_class)
            .max()
            .unwrap_or(GrammaticalClass::Auxiliary)
    }
}

impl Canonical for Morpheme {
    fn canonical(&self) -> &str {
        &self.canonical
    }
}

canonical_identity!(Morpheme);

/// Lexicographic over the sorted terms; a prefix sorts first.
impl Ord for Morpheme {
    fn cmp(&self, other: &Self) -> Ordering {
        self.terms.cmp(&other.terms)
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
