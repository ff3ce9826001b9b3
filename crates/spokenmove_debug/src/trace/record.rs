//! Trace event and record types.
//!
//! This module defines the events recorded while the grammar engine matches
//! an utterance.

use serde::Serialize;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during a parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// A parse has started.
    ParseStart {
        /// The utterance being parsed.
        input: String,
    },

    /// A parse has finished.
    ParseEnd {
        /// The SAN produced, if the parse succeeded.
        output: Option<String>,
        /// The error message, if it failed.
        error: Option<String>,
    },

    /// A rule is being tried.
    RuleEnter {
        /// Rule name.
        rule: String,
        /// Nesting depth, 0 for the start rule.
        depth: usize,
        /// Byte offset where the rule starts matching.
        offset: usize,
    },

    /// A rule matched.
    RuleMatch {
        /// Rule name.
        rule: String,
        /// Nesting depth.
        depth: usize,
        /// Index of the alternative that matched.
        alternative: usize,
        /// Start of the consumed span.
        start: usize,
        /// End of the consumed span.
        end: usize,
        /// The fragment the rule's action produced.
        output: String,
    },

    /// No alternative of a rule matched.
    RuleFail {
        /// Rule name.
        rule: String,
        /// Nesting depth.
        depth: usize,
        /// Byte offset where the rule was tried.
        offset: usize,
    },

    /// A semantic action failed, aborting the parse.
    ActionError {
        /// Rule whose action failed.
        rule: String,
        /// Nesting depth.
        depth: usize,
        /// The error message.
        message: String,
    },

    /// The start rule matched but input remained.
    ResidualInput {
        /// Byte offset of the unconsumed text.
        offset: usize,
        /// The unconsumed text.
        rest: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ParseStart { .. } => "parse-start",
            Self::ParseEnd { .. } => "parse-end",
            Self::RuleEnter { .. } => "rule-enter",
            Self::RuleMatch { .. } => "rule-match",
            Self::RuleFail { .. } => "rule-fail",
            Self::ActionError { .. } => "action-error",
            Self::ResidualInput { .. } => "residual-input",
        }
    }

    /// Returns true if this event starts or ends a parse.
    #[must_use]
    pub fn is_parse_boundary(&self) -> bool {
        matches!(self, Self::ParseStart { .. } | Self::ParseEnd { .. })
    }

    /// Returns true if this is a rule-related event.
    #[must_use]
    pub fn is_rule_event(&self) -> bool {
        matches!(
            self,
            Self::RuleEnter { .. }
                | Self::RuleMatch { .. }
                | Self::RuleFail { .. }
                | Self::ActionError { .. }
        )
    }

    /// Returns the rule nesting depth, if the event concerns a rule.
    #[must_use]
    pub fn depth(&self) -> Option<usize> {
        match self {
            Self::RuleEnter { depth, .. }
            | Self::RuleMatch { depth, .. }
            | Self::RuleFail { depth, .. }
            | Self::ActionError { depth, .. } => Some(*depth),
            _ => None,
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug, Serialize)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// The parse this event belongs to, counting from 1.
    pub parse: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, parse: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            parse,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
