//! Runtime configuration.
//!
//! Alias files are JSON objects mapping canonical tokens to alias arrays:
//!
//! ```json
//! { "knight": ["horse", "night"], "4": ["for"] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use spokenmove_debug::TracerConfig;
use spokenmove_foundation::{Error, ErrorContext, ErrorKind, Result};
use spokenmove_parser::Lexicon;
use spokenmove_parser::stdlib::speech_aliases;

/// Configuration for a translation session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Whether the built-in speech aliases are loaded.
    pub speech_aliases: bool,

    /// Alias files merged over the built-in set, in order.
    pub alias_files: Vec<PathBuf>,

    /// Trace every parse to stderr.
    pub trace: bool,

    /// Trace output format: true for JSON, false for human-readable.
    pub trace_json: bool,

    /// Trace records kept for `:trace last`.
    pub trace_buffer_size: usize,

    /// REPL prompt.
    pub prompt: String,

    /// Whether the REPL prints its banner.
    pub show_banner: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            speech_aliases: true,
            alias_files: Vec::new(),
            trace: false,
            trace_json: false,
            trace_buffer_size: 10000,
            prompt: "♞> ".to_string(),
            show_banner: true,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for scripted use: no banner, plain prompt.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that traces every parse.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            trace: true,
            trace_buffer_size: 50000,
            ..Self::default()
        }
    }

    /// Builder method to toggle the built-in speech aliases.
    #[must_use]
    pub fn with_speech_aliases(mut self, enabled: bool) -> Self {
        self.speech_aliases = enabled;
        self
    }

    /// Builder method to add an alias file.
    #[must_use]
    pub fn with_alias_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.alias_files.push(path.into());
        self
    }

    /// Builder method to set tracing.
    #[must_use]
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Builder method to set JSON trace output.
    #[must_use]
    pub fn with_trace_json(mut self, json: bool) -> Self {
        self.trace_json = json;
        self
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builds the lexicon: built-in aliases (if enabled), then each alias
    /// file in order.
    ///
    /// # Errors
    ///
    /// Returns an error if an alias file cannot be read or parsed.
    pub fn lexicon(&self) -> Result<Lexicon> {
        let base = if self.speech_aliases {
            speech_aliases()
        } else {
            Lexicon::new()
        };
        self.alias_files.iter().try_fold(base, |lexicon, path| {
            Ok(lexicon.merged(&load_alias_file(path)?))
        })
    }

    /// Returns the tracer configuration.
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        let mut config = TracerConfig::new().with_buffer_size(self.trace_buffer_size);
        if self.trace {
            config = config.enabled().to_stderr();
        }
        if self.trace_json {
            config = config.json();
        }
        config
    }
}

/// Reads a JSON alias file.
///
/// # Errors
///
/// Returns an `IoError` if the file cannot be read, or a `ConfigError`
/// carrying the file and column if it is not a valid alias map.
pub fn load_alias_file(path: &Path) -> Result<Lexicon> {
    let source = fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read {}: {e}",
            path.display()
        )))
        .with_context(ErrorContext::new().with_source(path.display().to_string()))
    })?;

    parse_aliases(&source).map_err(|err| {
        let context = err
            .context
            .clone()
            .unwrap_or_default()
            .with_source(path.display().to_string());
        err.with_context(context)
    })
}

/// Parses alias JSON text.
///
/// # Errors
///
/// Returns a `ConfigError` with the line and column of malformed JSON or of
/// an empty token or alias.
pub fn parse_aliases(source: &str) -> Result<Lexicon> {
    serde_json::from_str(source).map_err(|e| {
        Error::new(ErrorKind::ConfigError(format!("line {}: {e}", e.line())))
            .with_context(ErrorContext::new().with_column(e.column()))
    })
}
