//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable.

use std::borrow::Cow;

use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};
use spokenmove_foundation::{Error, ErrorKind, Result};
use spokenmove_parser::chess::KEYWORDS;

use crate::highlight::SpokenHighlighter;

/// REPL meta-commands, offered by completion.
pub const META_COMMANDS: &[&str] = &[
    ":help", ":aliases", ":describe", ":trace", ":history", ":load", ":quit",
];

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Set available completions for words.
    fn set_keywords(&mut self, keywords: Vec<String>);
}

/// Default completion words: grammar keywords, then meta-commands.
#[must_use]
pub fn default_keywords() -> Vec<String> {
    KEYWORDS
        .iter()
        .chain(META_COMMANDS)
        .map(|&word| word.to_string())
        .collect()
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct SpokenHelper {
    #[rustyline(Completer)]
    completer: SpokenCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: SpokenHighlighter,
}

impl Highlighter for SpokenHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for move words, meta-commands, and alias file paths.
struct SpokenCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl SpokenCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: default_keywords(),
        }
    }

    /// Keywords starting with `word`, case-insensitively.
    fn candidates(&self, word: &str) -> Vec<Pair> {
        let word = word.to_ascii_lowercase();
        self.keywords
            .iter()
            .filter(|kw| kw.starts_with(&word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect()
    }
}

impl Completer for SpokenCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];

        // Alias files after :load
        if before.starts_with(":load ") {
            return self.file_completer.complete(line, pos, ctx);
        }

        let start = before.rfind(char::is_whitespace).map_or(0, |i| i + 1);
        Ok((start, self.candidates(&before[start..])))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<SpokenHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not happen
    /// with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = SpokenHelper {
            completer: SpokenCompleter::new(),
            hinter: HistoryHinter::new(),
            highlighter: SpokenHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::IoError(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.keywords = keywords;
        }
    }
}
