//! Human and JSON trace output.

use spokenmove_debug::{
    HumanFormatter, JsonFormatter, TraceEvent, TraceFormatter, TraceRecord, Tracer, TracerConfig,
};
use spokenmove_parser::MoveTranslator;

fn traced(text: &str, config: TracerConfig) -> Tracer {
    let mut tracer = Tracer::new(config.enabled());
    let _ = MoveTranslator::new().parse_observed(text, &mut tracer);
    tracer
}

#[test]
fn human_trace_is_indented_by_depth() {
    let tracer = traced("e5", TracerConfig::new());
    let records = tracer.buffer().last_parse();
    let text = tracer.format_records(&records);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.first(), Some(&"P0001 === PARSE \"e5\" ==="));
    assert_eq!(lines.last(), Some(&"P0001 === OK e5 ==="));
    assert!(lines.contains(&"P0001   > start @0"));
    assert!(lines.contains(&"P0001   < start/0 0..2 => \"e5\""));
    assert!(lines.iter().any(|l| l.starts_with("P0001     > whitespace @0")));
}

#[test]
fn human_trace_reports_failures() {
    let tracer = traced("e4 e5", TracerConfig::new());
    let text = tracer.format_records(&tracer.buffer().last_parse());
    assert!(text.contains("  RESIDUAL @3 \"e5\""));
    assert!(text.contains("=== FAILED: "));
}

#[test]
fn human_formatter_options() {
    let record = TraceRecord::new(
        42,
        3,
        2_500_000,
        TraceEvent::RuleFail {
            rule: "castle_side".to_string(),
            depth: 1,
            offset: 7,
        },
    );
    let line = HumanFormatter::new().with_ids().with_timestamps().format(&record);
    assert_eq!(line, "[000042] P0003    2.500ms     x castle_side @7");
}

#[test]
fn json_trace_lines_parse_back() {
    let tracer = traced("knight to f3", TracerConfig::new().json());
    assert!(tracer.is_json());

    for record in tracer.buffer().iter() {
        let line = tracer.format_record(record);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["type"], record.event_type());
        assert_eq!(value["parse"], 1);
        assert_eq!(value["id"], record.id);
    }
}

#[test]
fn json_action_error_fields() {
    let tracer = traced("a takes b3 en passant", TracerConfig::new());
    let record = tracer.buffer().by_event_type("action-error")[0];
    let value: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new().format(record)).unwrap();
    assert_eq!(value["rule"], "en_passant");
    assert!(value["message"].as_str().unwrap().contains('3'));
}

#[test]
fn json_many_is_an_array() {
    let tracer = traced("e4", TracerConfig::new());
    let records: Vec<_> = tracer.buffer().iter().collect();
    for formatter in [JsonFormatter::new(), JsonFormatter::new().pretty()] {
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_many(&records)).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(records.len()));
    }
}
