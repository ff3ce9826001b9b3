//! Session state for the REPL and batch translation.
//!
//! A session owns the translator, the tracer that observes it, and the
//! history of successful translations.

use std::path::{Path, PathBuf};

use spokenmove_debug::Tracer;
use spokenmove_foundation::Result;
use spokenmove_parser::{Lexicon, MoveNotation, MoveTranslator};

use crate::config::{RuntimeConfig, load_alias_file};

/// One successful translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The text as spoken.
    pub input: String,
    /// The resulting SAN.
    pub notation: MoveNotation,
}

/// Translation session state.
pub struct Session {
    /// The translator in use; rebuilt when aliases are loaded.
    translator: MoveTranslator,

    /// Observes every translation.
    tracer: Tracer,

    /// Successful translations, oldest first.
    history: Vec<HistoryEntry>,

    /// Base directory for relative alias paths.
    load_path: PathBuf,
}

impl Session {
    /// Creates a session with the built-in speech aliases and tracing off.
    #[must_use]
    pub fn new() -> Self {
        Self::with_translator(MoveTranslator::with_speech_aliases(), Tracer::disabled())
    }

    /// Creates a session from runtime configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured alias file cannot be loaded.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let translator = MoveTranslator::with_lexicon(config.lexicon()?);
        Ok(Self::with_translator(
            translator,
            Tracer::new(config.tracer_config()),
        ))
    }

    /// Creates a session around an existing translator and tracer.
    #[must_use]
    pub fn with_translator(translator: MoveTranslator, tracer: Tracer) -> Self {
        Self {
            translator,
            tracer,
            history: Vec::new(),
            load_path: std::env::current_dir().unwrap_or_default(),
        }
    }

    /// Translates one utterance through the tracer, recording it in the
    /// history on success.
    ///
    /// # Errors
    ///
    /// Returns the translator's error for text that is not a move.
    pub fn translate(&mut self, text: &str) -> Result<MoveNotation> {
        let notation = self.translator.parse_observed(text, &mut self.tracer)?;
        self.history.push(HistoryEntry {
            input: text.trim().to_string(),
            notation: notation.clone(),
        });
        Ok(notation)
    }

    /// Merges an alias file over the current lexicon and rebuilds the
    /// translator. Returns the number of tokens the file configured.
    ///
    /// Relative paths resolve against the session's load path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. The current
    /// translator is left unchanged.
    pub fn load_aliases(&mut self, path: &Path) -> Result<usize> {
        let loaded = load_alias_file(&self.resolve_path(path))?;
        let lexicon = self.translator.lexicon().merged(&loaded);
        self.translator = MoveTranslator::with_lexicon(lexicon);
        Ok(loaded.len())
    }

    /// Resolves a path against the load path.
    #[must_use]
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.load_path.join(path)
        }
    }

    /// Returns the current load path.
    #[must_use]
    pub fn load_path(&self) -> &Path {
        &self.load_path
    }

    /// Sets the load path.
    pub fn set_load_path(&mut self, path: PathBuf) {
        self.load_path = path;
    }

    /// Returns the translator.
    #[must_use]
    pub fn translator(&self) -> &MoveTranslator {
        &self.translator
    }

    /// Returns the active lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        self.translator.lexicon()
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns a mutable reference to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns successful translations, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Clears the translation history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
