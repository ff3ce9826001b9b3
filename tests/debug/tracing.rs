//! Tracing translations end to end.

use spokenmove_debug::{TraceEvent, Tracer, TracerConfig};
use spokenmove_parser::MoveTranslator;

fn enabled() -> Tracer {
    Tracer::new(TracerConfig::new().enabled())
}

#[test]
fn each_translation_gets_a_parse_number() {
    let translator = MoveTranslator::new();
    let mut tracer = enabled();

    translator.parse_observed("e4", &mut tracer).unwrap();
    translator.parse_observed("knight to f3", &mut tracer).unwrap();

    assert_eq!(tracer.current_parse(), 2);
    assert_eq!(tracer.buffer().parses(), vec![1, 2]);

    let last = tracer.buffer().last_parse();
    assert!(last.iter().all(|r| r.parse == 2));
    assert_eq!(
        last.first().map(|r| &r.event),
        Some(&TraceEvent::ParseStart {
            input: "knight to f3".to_string()
        })
    );
    assert_eq!(
        last.last().map(|r| &r.event),
        Some(&TraceEvent::ParseEnd {
            output: Some("Nf3".to_string()),
            error: None,
        })
    );
}

#[test]
fn start_rule_match_spans_the_input() {
    let mut tracer = enabled();
    MoveTranslator::new()
        .parse_observed(" bishop to d7 ", &mut tracer)
        .unwrap();

    let top = tracer
        .buffer()
        .filter(|r| matches!(&r.event, TraceEvent::RuleMatch { depth: 0, .. }));
    assert_eq!(top.len(), 1);
    let TraceEvent::RuleMatch {
        rule,
        start,
        end,
        output,
        ..
    } = &top[0].event
    else {
        unreachable!();
    };
    assert_eq!(rule, "start");
    assert_eq!((*start, *end), (0, 14));
    assert_eq!(output, "Bd7");
}

#[test]
fn enters_balance_outcomes() {
    let mut tracer = enabled();
    let _ = MoveTranslator::with_speech_aliases().parse_observed("castle sideways", &mut tracer);

    let stats = tracer.stats();
    let count = |kind: &str| stats.event_counts.get(kind).copied().unwrap_or(0);
    assert!(count("rule-enter") > 0);
    assert_eq!(
        count("rule-enter"),
        count("rule-match") + count("rule-fail") + count("action-error")
    );
}

#[test]
fn action_error_is_traced() {
    let mut tracer = enabled();
    let err = MoveTranslator::new()
        .parse_observed("g takes h7 en passant", &mut tracer)
        .unwrap_err();
    assert!(err.is_invalid_en_passant());

    let errors = tracer.buffer().by_event_type("action-error");
    assert_eq!(errors.len(), 1);
    let TraceEvent::ActionError { rule, .. } = &errors[0].event else {
        unreachable!();
    };
    assert_eq!(rule, "en_passant");

    let end = tracer.buffer().by_event_type("parse-end");
    assert!(matches!(
        &end[0].event,
        TraceEvent::ParseEnd { output: None, error: Some(_) }
    ));
}

#[test]
fn residual_input_is_traced() {
    let mut tracer = enabled();
    assert!(
        MoveTranslator::new()
            .parse_observed("e4 e5", &mut tracer)
            .is_err()
    );

    let residual = tracer.buffer().by_event_type("residual-input");
    assert_eq!(residual.len(), 1);
    assert_eq!(
        residual[0].event,
        TraceEvent::ResidualInput {
            offset: 3,
            rest: "e5".to_string(),
        }
    );
}

#[test]
fn disabled_tracer_records_nothing() {
    let mut tracer = Tracer::disabled();
    MoveTranslator::new().parse_observed("e4", &mut tracer).unwrap();
    assert!(tracer.buffer().is_empty());
    assert_eq!(tracer.current_parse(), 0);
}

#[test]
fn event_filter_keeps_only_named_types() {
    let config = TracerConfig::new()
        .enabled()
        .filter_events(vec!["parse-start".to_string(), "parse-end".to_string()]);
    let mut tracer = Tracer::new(config);

    let translator = MoveTranslator::new();
    translator.parse_observed("e4", &mut tracer).unwrap();
    let _ = translator.parse_observed("e9", &mut tracer);

    assert_eq!(tracer.buffer().len(), 4);
    assert!(tracer.buffer().iter().all(|r| r.event.is_parse_boundary()));
    assert_eq!(tracer.buffer().parses(), vec![1, 2]);
}
