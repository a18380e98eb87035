#![no_main]

use ieml::{Clause, Dictionary, Morpheme, Sentence, Word};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn words() -> &'static [Word] {
    static WORDS: OnceLock<Vec<Word>> = OnceLock::new();
    WORDS.get_or_init(|| {
        let dictionary =
            Dictionary::from_json(include_str!("../../tests/fixtures/dictionary.json"))
                .expect("fixture dictionary");
        dictionary
            .terms()
            .map(|term| Word::new(Morpheme::new([term]).expect("morpheme"), None))
            .collect()
    })
}

// Each three bytes pick a clause among the fixture words
fuzz_target!(|data: &[u8]| {
    let words = words();
    let pick = |b: u8| words[b as usize % words.len()].clone();

    let clauses: Vec<Clause> = data
        .chunks_exact(3)
        .filter_map(|c| Clause::new(pick(c[0]), pick(c[1]), pick(c[2])).ok())
        .collect();

    if let Ok(sentence) = Sentence::new(clauses.clone()) {
        assert_eq!(sentence.stages()[0], vec![sentence.root()]);
        assert_eq!(sentence.len(), sentence.nodes().len() - 1);

        let mut reversed = clauses;
        reversed.reverse();
        let again = Sentence::new(reversed).expect("same clauses in another order");
        assert_eq!(sentence.canonical(), again.canonical());
    }
});
