//! Integration tests for lexicon configuration.

use spokenmove_foundation::ErrorKind;
use spokenmove_parser::stdlib::{SPEECH_ALIASES, speech_aliases};
use spokenmove_parser::{Lexicon, MoveTranslator};

#[test]
fn lexicon_from_json() {
    let lexicon: Lexicon =
        serde_json::from_str(r#"{"Queen": ["clean", "cream"], "takes": ["grabs"]}"#).unwrap();
    assert_eq!(lexicon.aliases("queen"), ["clean", "cream"]);
    assert!(lexicon.contains("TAKES"));
    assert_eq!(lexicon.len(), 2);
}

#[test]
fn lexicon_json_rejects_empty_alias() {
    let result: Result<Lexicon, _> = serde_json::from_str(r#"{"queen": ["clean", " "]}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("queen"));
}

#[test]
fn lexicon_builder_reports_first_bad_entry() {
    let err = Lexicon::builder()
        .alias("", "nothing")
        .alias("queen", "")
        .build()
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidAlias {
            token: String::new(),
            alias: "nothing".to_string(),
        }
    );
}

#[test]
fn lexicons_are_independent() {
    let horses = Lexicon::builder().alias("knight", "horse").build().unwrap();
    let plain = MoveTranslator::new();
    let horsey = MoveTranslator::with_lexicon(horses);

    assert_eq!(horsey.parse("horse to c3").unwrap(), "Nc3");
    assert!(plain.parse("horse to c3").is_err());
    assert!(horsey.parse("night to c3").is_err());
}

#[test]
fn merged_lexicon_keeps_builtin_aliases_first() {
    let extra = Lexicon::builder().aliases("rook", ["rook piece", "rock"]).build().unwrap();
    let merged = speech_aliases().merged(&extra);

    let rook = merged.aliases("rook");
    assert_eq!(rook.first().map(String::as_str), Some("brooke"));
    assert_eq!(rook.last().map(String::as_str), Some("rook piece"));
    assert_eq!(rook.iter().filter(|a| *a == "rock").count(), 1);
}

#[test]
fn lexicon_builder_extend_copies_entries() {
    let lexicon = Lexicon::builder()
        .extend(&speech_aliases())
        .alias("bishop", "fish")
        .build()
        .unwrap();
    assert_eq!(lexicon.len(), SPEECH_ALIASES.len() + 1);
    assert_eq!(
        MoveTranslator::with_lexicon(lexicon).parse("fish takes age7").unwrap(),
        "Bxh7"
    );
}

#[test]
fn translator_reports_its_lexicon() {
    let translator = MoveTranslator::with_speech_aliases();
    assert_eq!(translator.lexicon(), &speech_aliases());
    assert!(translator.grammar().rule_id("en_passant").is_some());
}

#[test]
fn resolve_lists_canonical_then_synonyms() {
    let lexicon = speech_aliases();
    let knight = lexicon.resolve("knight");
    assert_eq!(knight, ["knight", "night"]);
    assert_eq!(lexicon.resolve("pawn"), ["pawn"]);

    let four = lexicon.resolve("4");
    assert_eq!(four[0], "4");
    assert_eq!(&four[1..], lexicon.aliases("4"));
}

#[test]
fn non_ascii_aliases_match_in_any_case() {
    let lexicon = Lexicon::builder().alias("queen", "Dāma").build().unwrap();
    let translator = MoveTranslator::with_lexicon(lexicon);

    assert_eq!(translator.parse("dāma to d1").unwrap(), "Qd1");
    assert_eq!(translator.parse("DĀMA to d1").unwrap(), "Qd1");
    assert!(translator.parse("dama to d1").is_err());
}
