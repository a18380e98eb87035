#![no_main]

use ieml::{Dictionary, IemlParser};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn dictionary() -> &'static Dictionary {
    static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();
    DICTIONARY.get_or_init(|| {
        Dictionary::from_json(include_str!("../../tests/fixtures/dictionary.json"))
            .expect("fixture dictionary")
    })
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parser = IemlParser::new(dictionary());

        if let Ok(ieml) = parser.parse(s) {
            let printed = ieml.to_string();
            let reparsed = parser.parse(&printed).expect("printed form must parse");
            assert_eq!(ieml, reparsed);
        }
    }
});
