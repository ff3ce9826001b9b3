//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form, indented by rule depth.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut line = String::new();

        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }

        let _ = write!(line, "P{:04} ", record.parse);

        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }

        let indent = "  ".repeat(record.event.depth().map_or(0, |d| d + 1));
        let _ = match &record.event {
            TraceEvent::ParseStart { input } => write!(line, "=== PARSE {input:?} ==="),
            TraceEvent::ParseEnd { output, error } => match (output, error) {
                (Some(output), _) => write!(line, "=== OK {output} ==="),
                (None, Some(error)) => write!(line, "=== FAILED: {error} ==="),
                (None, None) => write!(line, "=== FAILED ==="),
            },
            TraceEvent::RuleEnter { rule, offset, .. } => {
                write!(line, "{indent}> {rule} @{offset}")
            }
            TraceEvent::RuleMatch {
                rule,
                alternative,
                start,
                end,
                output,
                ..
            } => write!(
                line,
                "{indent}< {rule}/{alternative} {start}..{end} => {output:?}"
            ),
            TraceEvent::RuleFail { rule, offset, .. } => {
                write!(line, "{indent}x {rule} @{offset}")
            }
            TraceEvent::ActionError { rule, message, .. } => {
                write!(line, "{indent}! {rule}: {message}")
            }
            TraceEvent::ResidualInput { offset, rest } => {
                write!(line, "  RESIDUAL @{offset} {rest:?}")
            }
        };

        line
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON, one object per record.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        };
        // Records hold only strings and integers
        json.unwrap_or_else(|err| serde_json::json!({ "error": err.to_string() }).to_string())
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r)).collect();
        if self.pretty {
            format!("[\n{}\n]", items.join(",\n"))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
