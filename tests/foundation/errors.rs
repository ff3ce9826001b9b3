//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use spokenmove_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_parse_error() {
    let err = Error::parse_error("bishop to z9", 10, vec!["file".to_string()]);
    assert!(matches!(
        err.kind,
        ErrorKind::ParseError { offset: 10, .. }
    ));
    assert!(err.is_parse_error());
    assert!(!err.is_invalid_en_passant());
}

#[test]
fn error_invalid_en_passant() {
    let err = Error::invalid_en_passant('6');
    assert_eq!(err.kind, ErrorKind::InvalidEnPassant { rank: '6' });
    assert!(err.is_invalid_en_passant());
}

#[test]
fn error_undefined_rule() {
    let err = Error::undefined_rule("castle_side");
    assert!(matches!(err.kind, ErrorKind::UndefinedRule(_)));
    assert!(format!("{err}").contains("castle_side"));
}

#[test]
fn error_invalid_san() {
    let err = Error::invalid_san("Zz9");
    assert!(matches!(err.kind, ErrorKind::InvalidSan(_)));
    assert!(format!("{err}").contains("Zz9"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_expected_list() {
    let err = Error::parse_error(
        "castle sideways",
        7,
        vec!["\"kingside\"".to_string(), "\"queenside\"".to_string()],
    );
    let msg = format!("{err}");
    assert!(msg.contains("\"castle sideways\""));
    assert!(msg.contains("expected \"kingside\" or \"queenside\" at offset 7"));
}

#[test]
fn error_display_kinds() {
    let cases = [
        (ErrorKind::DuplicateRule("move".into()), "duplicate rule: move"),
        (ErrorKind::EmptyRule("piece".into()), "empty rule: piece"),
        (
            ErrorKind::LeftRecursion("square".into()),
            "left recursion through rule: square",
        ),
        (
            ErrorKind::ConfigError("line 3".into()),
            "configuration error: line 3",
        ),
        (ErrorKind::IoError("gone".into()), "I/O error: gone"),
    ];
    for (kind, expected) in cases {
        assert_eq!(Error::new(kind).to_string(), expected);
    }
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_context_default_is_empty() {
    let ctx = ErrorContext::default();
    assert!(ctx.source.is_none());
    assert!(ctx.column.is_none());
    assert!(ctx.stack.is_empty());
    assert_eq!(ctx.to_string(), "");
}

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new().with_source("aliases.json").with_column(12);
    assert_eq!(ctx.to_string(), "at aliases.json:12");
}

#[test]
fn error_context_survives_with_context() {
    let err = Error::invalid_en_passant('2')
        .with_context(ErrorContext::new().with_source("en_passant").with_frame("move"));
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.source.as_deref(), Some("en_passant"));
    assert_eq!(ctx.stack, ["move"]);
}
