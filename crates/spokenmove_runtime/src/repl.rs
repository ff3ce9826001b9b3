//! The main REPL implementation.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use spokenmove_debug::TraceOutput;
use spokenmove_foundation::{Error, ErrorKind, Result};
use spokenmove_parser::describe;

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_keywords};
use crate::session::Session;

/// Trace records shown by `:trace last` without a count.
const DEFAULT_TRACE_TAIL: usize = 20;

const HELP: &str = "\
Say a move and it is printed in SAN:
  knight to f3          Nf3
  e takes d5            exd5
  castle queenside      O-O-O

Commands:
  :help                 Show this help
  :aliases [token]      List aliases, or those of one token
  :describe <san>       Read a SAN move back as words
  :trace on|off         Print rule-by-rule traces to stderr
  :trace json|human     Choose the trace format
  :trace last [n]       Show the last n trace records
  :trace clear          Empty the trace buffer
  :history              List translated moves
  :load <file>          Merge a JSON alias file
  :quit                 Exit (also Ctrl+D)";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (translator, tracer, history).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }

    /// Creates a REPL from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize or an alias file
    /// cannot be loaded.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let session = Session::from_config(config)?;
        let mut repl = Self::new()?
            .with_session(session)
            .with_prompt(config.prompt.clone());
        repl.show_banner = config.show_banner;
        repl.refresh_keywords();
        Ok(repl)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: RuntimeConfig::default().prompt,
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns the editor's error if reading a line fails. Translation and
    /// command errors are printed and do not stop the loop.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit. Only the editor
    /// can make this fail; evaluation errors are printed here.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(trimmed);

        if matches!(trimmed, ":quit" | ":q") {
            return Ok(false);
        }

        match self.eval(trimmed) {
            Ok(Some(output)) => println!("\x1b[1m{output}\x1b[0m"),
            Ok(None) => {}
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Evaluates one line: a meta-command or a spoken move.
    ///
    /// Returns the text to print, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the move cannot be translated or the command fails.
    pub fn eval(&mut self, input: &str) -> Result<Option<String>> {
        let input = input.trim();
        match input.strip_prefix(':') {
            Some(command) => self.eval_command(command),
            None => self
                .session
                .translate(input)
                .map(|notation| Some(notation.into_string())),
        }
    }

    /// Dispatches a meta-command (without its leading colon).
    fn eval_command(&mut self, command: &str) -> Result<Option<String>> {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match (name, args.as_slice()) {
            ("help" | "h", []) => Ok(Some(HELP.to_string())),
            ("aliases", []) => Ok(Some(self.format_aliases())),
            ("aliases", [token]) => {
                let aliases = self.session.lexicon().aliases(token);
                if aliases.is_empty() {
                    Ok(Some(format!("{token}: (no aliases)")))
                } else {
                    Ok(Some(format!("{token}: {}", aliases.join(", "))))
                }
            }
            ("describe", [san]) => describe(san).map(Some),
            ("trace", args) => self.eval_trace(args),
            ("history", []) => Ok(Some(self.format_history())),
            ("load", [path]) => {
                let count = self.session.load_aliases(Path::new(path))?;
                self.refresh_keywords();
                Ok(Some(format!("loaded aliases for {count} tokens from {path}")))
            }
            _ => Err(usage_error(format!("unknown command :{command}, try :help"))),
        }
    }

    fn eval_trace(&mut self, args: &[&str]) -> Result<Option<String>> {
        match args {
            ["last"] => return Ok(Some(self.format_trace_tail(DEFAULT_TRACE_TAIL))),
            ["last", n] => {
                let n = n
                    .parse()
                    .map_err(|_| usage_error(format!(":trace last expects a count, got {n}")))?;
                return Ok(Some(self.format_trace_tail(n)));
            }
            _ => {}
        }

        let tracer = self.session.tracer_mut();
        match args {
            ["on"] => {
                tracer.enable();
                tracer.set_output(TraceOutput::Stderr);
                Ok(Some("tracing on".to_string()))
            }
            ["off"] => {
                tracer.disable();
                Ok(Some("tracing off".to_string()))
            }
            ["json"] => {
                tracer.set_json_format(true);
                Ok(None)
            }
            ["human"] => {
                tracer.set_json_format(false);
                Ok(None)
            }
            ["clear"] => {
                tracer.clear();
                Ok(None)
            }
            _ => Err(usage_error(
                ":trace expects on, off, json, human, clear or last [n]",
            )),
        }
    }

    fn format_trace_tail(&self, n: usize) -> String {
        let tracer = self.session.tracer();
        let records = tracer.buffer().recent(n);
        if records.is_empty() {
            "no trace records (use :trace on)".to_string()
        } else {
            tracer.format_records(&records)
        }
    }

    fn format_aliases(&self) -> String {
        let lexicon = self.session.lexicon();
        if lexicon.is_empty() {
            return "no aliases configured".to_string();
        }
        let mut out = String::new();
        for (token, aliases) in lexicon.iter() {
            let _ = writeln!(out, "{token:>8}: {}", aliases.join(", "));
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn format_history(&self) -> String {
        let history = self.session.history();
        if history.is_empty() {
            return "no moves yet".to_string();
        }
        let mut out = String::new();
        for (i, entry) in history.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {:<8} {}", i + 1, entry.notation, entry.input);
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Offers the grammar keywords, meta-commands, and every loaded alias
    /// for completion.
    fn refresh_keywords(&mut self) {
        let mut keywords = default_keywords();
        for (_, aliases) in self.session.lexicon().iter() {
            keywords.extend(aliases.iter().filter(|a| a.len() > 2).cloned());
        }
        self.editor.set_keywords(keywords);
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!("  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        println!("  spokenmove v{}", env!("CARGO_PKG_VERSION"));
        println!("\x1b[0m");
        println!("Say a move to see it in SAN. Type :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

fn usage_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Internal(message.into()))
}
