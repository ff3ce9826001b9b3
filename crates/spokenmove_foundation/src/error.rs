//! Error types for the spokenmove system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for spokenmove operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result type alias using the spokenmove [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error for input that the grammar does not accept.
    #[must_use]
    pub fn parse_error(input: impl Into<String>, offset: usize, expected: Vec<String>) -> Self {
        Self::new(ErrorKind::ParseError {
            input: input.into(),
            offset,
            expected,
        })
    }

    /// Creates an invalid en passant error for the transcribed rank.
    #[must_use]
    pub fn invalid_en_passant(rank: char) -> Self {
        Self::new(ErrorKind::InvalidEnPassant { rank })
    }

    /// Creates an undefined rule error.
    #[must_use]
    pub fn undefined_rule(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedRule(name.into()))
    }

    /// Creates an invalid alias error.
    #[must_use]
    pub fn invalid_alias(token: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAlias {
            token: token.into(),
            alias: alias.into(),
        })
    }

    /// Creates an invalid SAN error.
    #[must_use]
    pub fn invalid_san(san: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSan(san.into()))
    }

    /// Returns true if the input was not understood at all.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ParseError { .. })
    }

    /// Returns true if the input described an impossible en passant capture.
    #[must_use]
    pub fn is_invalid_en_passant(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidEnPassant { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be matched by the grammar.
    #[error("could not understand {input:?}: expected {} at offset {offset}", ExpectedList(expected))]
    ParseError {
        /// The text that was being parsed.
        input: String,
        /// Furthest byte offset reached before matching failed.
        offset: usize,
        /// Descriptions of what would have been accepted at `offset`.
        expected: Vec<String>,
    },

    /// An en passant capture named a rank no double-stepped pawn can stand on.
    #[error("invalid en passant capture: a captured pawn cannot stand on rank {rank}")]
    InvalidEnPassant {
        /// The rank as transcribed.
        rank: char,
    },

    /// A grammar rule references a rule that was never defined.
    #[error("undefined rule: {0}")]
    UndefinedRule(String),

    /// A grammar rule was defined more than once.
    #[error("duplicate rule: {0}")]
    DuplicateRule(String),

    /// A grammar rule has no alternatives, or an alternative has no matchers.
    #[error("empty rule: {0}")]
    EmptyRule(String),

    /// A grammar rule can reach itself without consuming input.
    #[error("left recursion through rule: {0}")]
    LeftRecursion(String),

    /// An alias entry is unusable.
    #[error("invalid alias {alias:?} for token {token:?}")]
    InvalidAlias {
        /// The canonical token.
        token: String,
        /// The rejected surface form.
        alias: String,
    },

    /// A SAN string could not be read.
    #[error("invalid SAN: {0}")]
    InvalidSan(String),

    /// Configuration could not be read or is malformed.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Formats the expected set of a parse error.
struct ExpectedList<'a>(&'a [String]);

impl fmt::Display for ExpectedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [] => write!(f, "nothing"),
            [only] => write!(f, "{only}"),
            [init @ .., last] => write!(f, "{} or {last}", init.join(", ")),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Source file or rule name.
    pub source: Option<String>,
    /// Column number in the source line.
    pub column: Option<usize>,
    /// Stack of rules or operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the column.
    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(col) = self.column {
                write!(f, ":{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
