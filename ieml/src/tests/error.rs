use crate::ast::Span;
use crate::error::{IemlError, TreeStructureError};
use std::sync::Arc;

fn test_span() -> Span {
    Span {
        start: 3,
        end: 10,
        line: 1,
        col: 4,
    }
}

#[test]
fn test_parse_error_display() {
    let error = IemlError::parse(
        "unknown term 'O:O:.'",
        test_span(),
        "test.ieml",
        Arc::from("[([O:O:.])]"),
    );
    let display = format!("{}", error);
    assert!(display.contains("Parse error: unknown term 'O:O:.'"));
    assert!(display.contains("test.ieml:1:4"));
    assert!(!display.contains("suggestion"));

    let with_suggestion = IemlError::parse_with_suggestion(
        "expected term",
        test_span(),
        "test.ieml",
        Arc::from("[([A:])"),
        "every '[' must be closed by a ']'",
    );
    let display = format!("{}", with_suggestion);
    assert!(display.contains("(suggestion: every '[' must be closed by a ']')"));
}

#[test]
fn test_structure_error_display() {
    let error = IemlError::InvalidTreeStructure {
        kind: "Sentence",
        cause: TreeStructureError::Cycle(vec!["a".into(), "b".into(), "a".into()]),
    };
    assert_eq!(
        error.to_string(),
        "Invalid Sentence tree structure: cycle detected: a -> b -> a"
    );

    let error = IemlError::InvalidTreeStructure {
        kind: "SuperSentence",
        cause: TreeStructureError::MultipleParents {
            node: "d".into(),
            parents: vec!["b".into(), "c".into()],
        },
    };
    assert_eq!(
        error.to_string(),
        "Invalid SuperSentence tree structure: node d has more than one parent: b, c"
    );
}

#[test]
fn test_other_error_display() {
    assert_eq!(
        IemlError::StructuralConflict {
            kind: "Clause",
            node: "[([A:])]".into()
        }
        .to_string(),
        "Invalid Clause: the substance and the attribute ([([A:])]) must be distinct"
    );
    assert_eq!(
        IemlError::SizeExceeded {
            what: "distinct nodes in a Sentence".into(),
            limit: 20,
            actual: 21
        }
        .to_string(),
        "Too many distinct nodes in a Sentence: 21 > 20"
    );
    assert_eq!(
        IemlError::invalid_argument("Text", "a text must contain at least one proposition")
            .to_string(),
        "Invalid Text argument: a text must contain at least one proposition"
    );
    assert_eq!(
        IemlError::TermNotFound("O:O:.".into()).to_string(),
        "Term not found in dictionary: O:O:."
    );
}

#[test]
fn test_serde_error_conversion() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(IemlError::from(err), IemlError::Serialization(_)));
}
