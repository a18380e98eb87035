use crate::{Clause, Dictionary, Morpheme, Sentence, Word};
use std::sync::OnceLock;


mod texts;


// Error and serializer tests
mod error;

pub(crate) fn dictionary() -> &'static Dictionary {
    static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();
    DICTIONARY.get_or_init(|| {
        Dictionary::from_json(include_str!("../../tests/fixtures/dictionary.json")).unwrap()
    })
}

/// A word with a single-term substance and no mode
pub(crate) fn word(script: &str) -> Word {
    let term = dictionary().term(script).unwrap();
    Word::new(Morpheme::new([term]).unwrap(), None)
}

/// Six words in increasing order
pub(crate) fn words() -> [Word; 6] {
    ["A:", "B:", "E:", "S:", "T:", "U:"].map(word)
}

pub(crate) fn clause(substance: &Word, attribute: &Word, mode: &Word) -> Clause {
    Clause::new(substance.clone(), attribute.clone(), mode.clone()).unwrap()
}

/// `a -> b, a -> c, b -> d, b -> e`, every clause with mode `f`
pub(crate) fn two_level_clauses() -> Vec<Clause> {
    let [a, b, c, d, e, f] = words();
    vec![
        clause(&a, &b, &f),
        clause(&a, &c, &f),
        clause(&b, &d, &f),
        clause(&b, &e, &f),
    ]
}

pub(crate) fn two_level_sentence() -> Sentence {
    Sentence::new(two_level_clauses()).unwrap()
}
