//! Alias files and runtime configuration.

use spokenmove_foundation::ErrorKind;
use spokenmove_parser::MoveTranslator;
use spokenmove_runtime::config::parse_aliases;
use spokenmove_runtime::{RuntimeConfig, load_alias_file};

use crate::temp_file;

#[test]
fn alias_file_extends_translation() {
    let path = temp_file(
        "club_aliases.json",
        r#"{
            "bishop": ["fish", "bish"],
            "takes": ["eats"]
        }"#,
    );
    let lexicon = RuntimeConfig::default()
        .with_alias_file(&path)
        .lexicon()
        .unwrap();
    let translator = MoveTranslator::with_lexicon(lexicon);

    assert_eq!(translator.parse("fish eats age7").unwrap(), "Bxh7");
    assert_eq!(translator.parse("night to f3").unwrap(), "Nf3");
}

#[test]
fn alias_files_without_speech_aliases() {
    let path = temp_file("plain_aliases.json", r#"{"knight": ["horse"]}"#);
    let lexicon = RuntimeConfig::quiet()
        .with_speech_aliases(false)
        .with_alias_file(&path)
        .lexicon()
        .unwrap();
    assert_eq!(lexicon.len(), 1);

    let translator = MoveTranslator::with_lexicon(lexicon);
    assert_eq!(translator.parse("horse to c3").unwrap(), "Nc3");
    assert!(translator.parse("night to c3").is_err());
}

#[test]
fn malformed_file_reports_location() {
    let path = temp_file("broken_aliases.json", "{\n  \"queen\": [\"clean\",]\n}");
    let err = load_alias_file(&path).unwrap_err();

    let ErrorKind::ConfigError(message) = &err.kind else {
        panic!("expected a config error, got {err}");
    };
    assert!(message.starts_with("line 2:"), "{message}");
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some(path.display().to_string().as_str()));
    assert!(context.column.is_some());
}

#[test]
fn empty_alias_in_file_is_rejected() {
    let err = parse_aliases(r#"{"rook": [""]}"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ConfigError(_)));
}

#[test]
fn wrong_shape_is_rejected() {
    for source in [r#"["knight"]"#, r#"{"knight": "night"}"#, ""] {
        assert!(parse_aliases(source).is_err(), "{source:?}");
    }
}

#[test]
fn missing_file_fails_the_whole_config() {
    let missing = std::env::temp_dir().join("spokenmove_it_not_there.json");
    let err = RuntimeConfig::default()
        .with_alias_file(missing)
        .lexicon()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
}

#[test]
fn tracer_config_from_flags() {
    let config = RuntimeConfig::default().with_trace(true).with_trace_json(true);
    let tracer = config.tracer_config();
    assert!(tracer.enabled);
    assert!(tracer.json_format);
    assert_eq!(tracer.buffer_size, config.trace_buffer_size);

    assert!(!RuntimeConfig::default().tracer_config().enabled);
}
