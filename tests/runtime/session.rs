//! Session state across translations.

use std::path::Path;

use spokenmove_debug::Tracer;
use spokenmove_foundation::ErrorKind;
use spokenmove_parser::MoveTranslator;
use spokenmove_runtime::{RuntimeConfig, Session};

use crate::temp_file;

#[test]
fn history_records_successes_only() {
    let mut session = Session::new();
    session.translate("  night to f3 ").unwrap();
    assert!(session.translate("castle sideways").is_err());
    session.translate("queen captures H8 mate").unwrap();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].input, "night to f3");
    assert_eq!(history[0].notation, "Nf3");
    assert_eq!(history[1].notation, "Qxh8#");

    session.clear_history();
    assert!(session.history().is_empty());
}

#[test]
fn session_traces_every_translation() {
    let config = RuntimeConfig::debug();
    let mut session = Session::from_config(&config).unwrap();
    session.tracer_mut().set_output(spokenmove_debug::TraceOutput::None);

    session.translate("e4").unwrap();
    let _ = session.translate("e9");

    let tracer = session.tracer();
    assert_eq!(tracer.current_parse(), 2);
    assert_eq!(tracer.buffer().by_event_type("parse-end").len(), 2);
}

#[test]
fn load_aliases_relative_to_load_path() {
    let path = temp_file("session_aliases.json", r#"{"queen": ["clean"]}"#);
    let mut session = Session::with_translator(MoveTranslator::new(), Tracer::disabled());
    session.set_load_path(path.parent().unwrap().to_path_buf());

    let file_name = path.file_name().unwrap();
    let count = session.load_aliases(Path::new(file_name)).unwrap();
    assert_eq!(count, 1);
    assert_eq!(session.translate("clean to d1").unwrap(), "Qd1");
    assert_eq!(session.lexicon().aliases("queen"), ["clean"]);
}

#[test]
fn loads_accumulate() {
    let first = temp_file("session_first.json", r#"{"knight": ["horse"]}"#);
    let second = temp_file("session_second.json", r#"{"knight": ["pony"]}"#);
    let mut session = Session::with_translator(MoveTranslator::new(), Tracer::disabled());

    session.load_aliases(&first).unwrap();
    session.load_aliases(&second).unwrap();
    assert_eq!(session.lexicon().aliases("knight"), ["horse", "pony"]);
    assert_eq!(session.translate("horse to c3").unwrap(), "Nc3");
    assert_eq!(session.translate("pony to c3").unwrap(), "Nc3");
}

#[test]
fn failed_load_keeps_translator() {
    let broken = temp_file("session_broken.json", "{ not json");
    let mut session = Session::new();
    let before = session.lexicon().clone();

    let err = session.load_aliases(&broken).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ConfigError(_)));
    assert_eq!(session.lexicon(), &before);
    assert_eq!(session.translate("night to f3").unwrap(), "Nf3");
}

#[test]
fn absolute_paths_ignore_load_path() {
    let mut session = Session::new();
    session.set_load_path("relative/base".into());
    let absolute = std::env::temp_dir().join("x.json");
    assert_eq!(session.resolve_path(&absolute), absolute);
    assert_eq!(
        session.resolve_path(Path::new("x.json")),
        Path::new("relative/base").join("x.json")
    );
}
