use super::{clause, two_level_sentence, word, words};
use crate::{
    Hyperlink, Hypertext, Ieml, IemlError, Proposition, PropositionPath, Sentence, SuperClause,
    SuperSentence, Text, HYPERTEXT_RANK,
};

fn super_sentence() -> SuperSentence {
    let [a, b, c, d, e, f] = words();
    let first = Sentence::new(vec![clause(&a, &b, &f)]).unwrap();
    let second = Sentence::new(vec![clause(&c, &d, &f)]).unwrap();
    let mode = Sentence::new(vec![clause(&e, &f, &a)]).unwrap();
    SuperSentence::new(vec![SuperClause::new(first, second, mode).unwrap()]).unwrap()
}

#[test]
fn test_members_ordered_by_level() {
    let text = Text::new(vec![
        Ieml::SuperSentence(super_sentence()),
        Ieml::Sentence(two_level_sentence()),
        Ieml::Word(word("wa.")),
    ])
    .unwrap();

    let members = text.members();
    assert!(matches!(members[0], Proposition::Word(_)));
    assert!(matches!(members[1], Proposition::Sentence(_)));
    assert!(matches!(members[2], Proposition::SuperSentence(_)));
}

#[test]
fn test_members_deduplicated() {
    let text = Text::new(vec![
        Ieml::Word(word("wa.")),
        Ieml::Word(word("wo.")),
        Ieml::Word(word("wa.")),
    ])
    .unwrap();
    assert_eq!(text.len(), 2);
    assert_eq!(text.canonical(), "{/[([wa.])]//[([wo.])]/}");
}

#[test]
fn test_members_of_one_kind_ordered_by_canonical_form() {
    let dictionary = super::dictionary();
    assert!(dictionary.term("S:").unwrap() < dictionary.term("E:A:T:.").unwrap());

    let text = Text::new(vec![Ieml::Word(word("S:")), Ieml::Word(word("E:A:T:."))]).unwrap();
    assert_eq!(text.canonical(), "{/[([E:A:T:.])]//[([S:])]/}");
    assert_eq!(text.members()[0].canonical(), "[([E:A:T:.])]");
}

#[test]
fn test_nested_text_is_flattened() {
    let inner = Text::new(vec![Ieml::Word(word("wa."))]).unwrap();
    let outer = Text::new(vec![Ieml::Text(inner.clone())]).unwrap();
    assert_eq!(outer, inner);

    let merged = Text::new(vec![Ieml::Text(inner), Ieml::Word(word("wu."))]).unwrap();
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_empty_text_rejected() {
    assert!(matches!(
        Text::new(Vec::new()),
        Err(IemlError::InvalidArgument { kind: "Text", .. })
    ));
}

#[test]
fn test_clause_is_not_a_proposition() {
    let [a, b, c, ..] = words();
    let result = Text::new(vec![Ieml::Clause(clause(&a, &b, &c))]);
    assert!(matches!(
        result,
        Err(IemlError::InvalidArgument { kind: "Text", message }) if message.contains("clause")
    ));
}

#[test]
fn test_contains_direct_and_nested() {
    let [a, b, ..] = words();
    let text = Text::new(vec![
        Ieml::Sentence(two_level_sentence()),
        Ieml::Word(b.clone()),
    ])
    .unwrap();

    assert!(text.contains(&Ieml::Word(b)), "direct member and node of the sentence");
    assert!(text.contains(&Ieml::Word(a)), "only a node of the sentence");
    assert!(text.contains(&Ieml::Sentence(two_level_sentence())));
    assert!(!text.contains(&Ieml::Word(word("wa."))));
}

#[test]
fn test_contains_text() {
    let text = Text::new(vec![
        Ieml::Sentence(two_level_sentence()),
        Ieml::Word(word("wa.")),
    ])
    .unwrap();
    let [a, ..] = words();

    let part = Text::new(vec![Ieml::Word(word("wa.")), Ieml::Word(a)]).unwrap();
    assert!(text.contains(&Ieml::Text(part)));

    let other = Text::new(vec![Ieml::Word(word("wo."))]).unwrap();
    assert!(!text.contains(&Ieml::Text(other)));
}

#[test]
fn test_text_ordering() {
    let words_only = Text::new(vec![Ieml::Word(word("wa."))]).unwrap();
    let with_sentence = Text::new(vec![Ieml::Sentence(two_level_sentence())]).unwrap();
    assert!(words_only < with_sentence);
}

fn hyperlink(source_script: &str, target_script: &str) -> Hyperlink {
    let proposition = word(source_script);
    let source = Text::new(vec![Ieml::Word(proposition.clone())]).unwrap();
    let target = Text::new(vec![Ieml::Word(word(target_script))]).unwrap();
    let path = PropositionPath::new(vec![Ieml::Word(proposition)]).unwrap();
    Hyperlink::new(source, target, path).unwrap()
}

#[test]
fn test_hypertext_form_differs_from_its_texts() {
    let link = hyperlink("wa.", "wo.");
    let hypertext = Hypertext::new(vec![link.clone()]).unwrap();

    assert_ne!(hypertext.canonical(), link.source().canonical());
    assert_ne!(hypertext.canonical(), link.target().canonical());
    assert_eq!(
        hypertext.canonical(),
        "{/[([wa.])]{/[([wo.])]/}/}"
    );
    assert_eq!(HYPERTEXT_RANK, 8);
}

#[test]
fn test_adding_a_link_recomputes() {
    let mut hypertext = Hypertext::new(vec![hyperlink("wa.", "wo.")]).unwrap();
    let before = hypertext.canonical().to_string();

    assert!(hypertext.add_hyperlink(hyperlink("wo.", "wu.")));
    let after = hypertext.canonical().to_string();
    assert_ne!(before, after);
    assert!(after.contains(&before[1..before.len() - 1]));
    assert_eq!(hypertext.len(), 2);
    assert_eq!(hypertext.texts().len(), 3);

    assert!(!hypertext.add_hyperlink(hyperlink("wo.", "wu.")));
    assert_eq!(hypertext.canonical(), after);
    assert_eq!(
        after,
        "{/[([wa.])]{/[([wo.])]/}/}{/[([wo.])]{/[([wu.])]/}/}"
    );
}

#[test]
fn test_hypertext_contains_its_texts() {
    let link = hyperlink("wa.", "wo.");
    let hypertext = Hypertext::new(vec![link.clone()]).unwrap();
    let as_ieml = Ieml::Hypertext(hypertext);

    assert!(as_ieml.has_child(&Ieml::Text(link.target().clone())));
    assert!(as_ieml.contains(&Ieml::Word(word("wo."))));
    assert!(!as_ieml.contains(&Ieml::Word(word("wu."))));
    assert_eq!(as_ieml.rank(), HYPERTEXT_RANK);
    assert!(as_ieml.grammatical_class().is_none());
}

#[test]
fn test_path_into_a_sentence() {
    let [a, b, _, _, _, f] = words();
    let sentence = two_level_sentence();
    let source = Text::new(vec![Ieml::Sentence(sentence.clone())]).unwrap();
    let target = Text::new(vec![Ieml::Word(word("wa."))]).unwrap();

    let path = PropositionPath::new(vec![
        Ieml::Sentence(sentence),
        Ieml::Clause(clause(&a, &b, &f)),
        Ieml::Word(b),
    ])
    .unwrap();
    assert_eq!(path.steps().len(), 3);

    let link = Hyperlink::new(source, target, path).unwrap();
    assert!(link.canonical().contains(">"));
}

#[test]
fn test_path_steps_must_be_children() {
    let [a, b, ..] = words();
    let result = PropositionPath::new(vec![Ieml::Sentence(two_level_sentence()), Ieml::Word(b)]);
    assert!(matches!(
        result,
        Err(IemlError::InvalidArgument { kind: "PropositionPath", .. })
    ));
    assert!(PropositionPath::new(vec![Ieml::Word(a)]).is_ok());
    assert!(PropositionPath::new(Vec::new()).is_err());
}

#[test]
fn test_path_must_start_in_source() {
    let source = Text::new(vec![Ieml::Word(word("wa."))]).unwrap();
    let target = Text::new(vec![Ieml::Word(word("wo."))]).unwrap();
    let path = PropositionPath::new(vec![Ieml::Word(word("wu."))]).unwrap();
    assert!(matches!(
        Hyperlink::new(source, target, path),
        Err(IemlError::InvalidArgument { kind: "Hyperlink", .. })
    ));
}
