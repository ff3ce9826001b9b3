//! Tracing system for spokenmove.
//!
//! Records how the grammar engine walks an utterance: which rules were tried,
//! which alternative matched, where matching gave up. Costs nothing beyond a
//! branch per event when disabled. Supports both human-readable and JSON
//! output formats.
//!
//! # Example
//!
//! ```text
//! :trace on                ;; Enable tracing
//! bishop to d7             ;; Translate (rule events are printed)
//! :trace off               ;; Disable tracing
//! :trace last 10           ;; Show recent trace records
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::ops::Range;
use std::time::Instant;

use spokenmove_foundation::Error;
use spokenmove_parser::ParseObserver;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write to stderr.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records parse events.
///
/// Pass a tracer to `MoveTranslator::parse_observed`; each call starts a new
/// parse number.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_parse: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_parse: 0,
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the number of the current (or last) parse.
    #[must_use]
    pub fn current_parse(&self) -> u64 {
        self.current_parse
    }

    /// Returns whether JSON output is selected.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.config.json_format
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event.
    ///
    /// This is the main entry point for recording events. It's designed
    /// to be as fast as possible when tracing is disabled.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        let id = self.buffer.push(self.current_parse, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.get(id) {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ParseObserver for Tracer {
    fn parse_start(&mut self, input: &str) {
        if !self.config.enabled {
            return;
        }
        self.current_parse += 1;
        self.record(TraceEvent::ParseStart {
            input: input.to_string(),
        });
    }

    fn rule_enter(&mut self, rule: &str, depth: usize, offset: usize) {
        if self.config.enabled {
            self.record(TraceEvent::RuleEnter {
                rule: rule.to_string(),
                depth,
                offset,
            });
        }
    }

    fn rule_match(
        &mut self,
        rule: &str,
        depth: usize,
        alternative: usize,
        span: Range<usize>,
        output: &str,
    ) {
        if self.config.enabled {
            self.record(TraceEvent::RuleMatch {
                rule: rule.to_string(),
                depth,
                alternative,
                start: span.start,
                end: span.end,
                output: output.to_string(),
            });
        }
    }

    fn rule_fail(&mut self, rule: &str, depth: usize, offset: usize) {
        if self.config.enabled {
            self.record(TraceEvent::RuleFail {
                rule: rule.to_string(),
                depth,
                offset,
            });
        }
    }

    fn action_error(&mut self, rule: &str, depth: usize, error: &Error) {
        if self.config.enabled {
            self.record(TraceEvent::ActionError {
                rule: rule.to_string(),
                depth,
                message: error.to_string(),
            });
        }
    }

    fn residual_input(&mut self, offset: usize, rest: &str) {
        if self.config.enabled {
            self.record(TraceEvent::ResidualInput {
                offset,
                rest: rest.to_string(),
            });
        }
    }

    fn parse_end(&mut self, _input: &str, result: Result<&str, &Error>) {
        if self.config.enabled {
            let (output, error) = match result {
                Ok(output) => (Some(output.to_string()), None),
                Err(err) => (None, Some(err.to_string())),
            };
            self.record(TraceEvent::ParseEnd { output, error });
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
