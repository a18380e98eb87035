#![allow(dead_code)]

use ieml::{Clause, Dictionary, Morpheme, Word};

pub fn dictionary() -> Dictionary {
    Dictionary::from_json(include_str!("../fixtures/dictionary.json"))
        .expect("fixture dictionary loads")
}

/// One single-term word per dictionary term, in increasing order
pub fn words(dictionary: &Dictionary) -> Vec<Word> {
    dictionary
        .terms()
        .map(|term| Word::new(Morpheme::new([term]).unwrap(), None))
        .collect()
}

pub fn clause(words: &[Word], substance: usize, attribute: usize, mode: usize) -> Clause {
    Clause::new(
        words[substance].clone(),
        words[attribute].clone(),
        words[mode].clone(),
    )
    .unwrap()
}
