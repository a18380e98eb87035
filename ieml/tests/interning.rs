//! Terms are shared across threads and every object can be read concurrently

mod common;

use common::{clause, dictionary, words};
use ieml::{Dictionary, Hypertext, Ieml, IemlError, Sentence, SuperSentence, Term, Text};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_objects_are_send_and_sync() {
    assert_send_sync::<Dictionary>();
    assert_send_sync::<Term>();
    assert_send_sync::<Sentence>();
    assert_send_sync::<SuperSentence>();
    assert_send_sync::<Text>();
    assert_send_sync::<Hypertext>();
    assert_send_sync::<Ieml>();
    assert_send_sync::<IemlError>();
}

#[test]
fn test_concurrent_lookups_share_one_instance() {
    let dictionary = dictionary();

    let terms: Vec<Term> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| dictionary.term("h.O:T:.-").unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(terms.windows(2).all(|pair| Term::ptr_eq(&pair[0], &pair[1])));
    assert!(Term::ptr_eq(&terms[0], &dictionary.term("h.O:T:.-").unwrap()));
}

#[test]
fn test_every_term_interned_once_under_contention() {
    let dictionary = dictionary();
    let scripts: Vec<String> = dictionary.terms().map(|t| t.script().to_string()).collect();

    let per_thread: Vec<Vec<Term>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|offset| {
                let dictionary = &dictionary;
                let scripts = &scripts;
                scope.spawn(move || {
                    scripts
                        .iter()
                        .cycle()
                        .skip(offset * 5)
                        .take(scripts.len())
                        .map(|script| dictionary.term(script).unwrap())
                        .collect::<Vec<Term>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for script in &scripts {
        let instances: Vec<&Term> = per_thread
            .iter()
            .flatten()
            .filter(|term| term.script() == script.as_str())
            .collect();
        assert_eq!(instances.len(), 4);
        assert!(instances
            .iter()
            .all(|term| Term::ptr_eq(term, instances[0])));
    }
}

#[test]
fn test_sentence_shared_between_readers() {
    let dictionary = dictionary();
    let words = words(&dictionary);
    let sentence = Arc::new(
        Sentence::new(vec![clause(&words, 0, 1, 5), clause(&words, 0, 2, 5)]).unwrap(),
    );

    let forms: HashSet<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sentence = Arc::clone(&sentence);
                scope.spawn(move || format!("{}|{}", sentence.canonical(), sentence.root()))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    assert_eq!(forms.len(), 1);
}

#[test]
fn test_equal_objects_from_separate_dictionaries() {
    let first = dictionary();
    let second = dictionary();
    let a = first.term("wa.").unwrap();
    let b = second.term("wa.").unwrap();

    assert!(!Term::ptr_eq(&a, &b));
    assert_eq!(a, b);

    let set: HashSet<Term> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}
