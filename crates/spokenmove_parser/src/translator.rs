//! Text-to-SAN translation.
//!
//! [`MoveTranslator`] is the entry point: it compiles the chess grammar once
//! against a lexicon and then translates any number of inputs.

use std::fmt;

use spokenmove_foundation::Result;

use crate::chess::chess_grammar;
use crate::engine::{NoopObserver, ParseObserver};
use crate::grammar::{CompiledGrammar, GrammarCompiler};
use crate::lexicon::Lexicon;
use crate::san::SanMove;
use crate::stdlib::speech_aliases;

/// A SAN string produced by a successful translation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveNotation(String);

impl MoveNotation {
    /// Returns the SAN text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the notation into a typed move.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSan` if the notation is not a SAN shape [`SanMove`]
    /// models. Every notation the chess grammar produces is.
    pub fn to_san_move(&self) -> Result<SanMove> {
        self.0.parse()
    }

    /// Unwraps the SAN text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for MoveNotation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for MoveNotation {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Translates spoken chess moves into SAN.
///
/// # Example
///
/// ```
/// use spokenmove_parser::MoveTranslator;
///
/// let translator = MoveTranslator::with_speech_aliases();
/// assert_eq!(translator.parse("night to f3").unwrap(), "Nf3");
/// assert_eq!(translator.parse("castle kingside").unwrap(), "O-O");
/// ```
#[derive(Clone, Debug)]
pub struct MoveTranslator {
    grammar: CompiledGrammar,
    lexicon: Lexicon,
}

impl MoveTranslator {
    /// Creates a translator that accepts only canonical words.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::new())
    }

    /// Creates a translator with the built-in speech aliases.
    #[must_use]
    pub fn with_speech_aliases() -> Self {
        Self::with_lexicon(speech_aliases())
    }

    /// Creates a translator that also accepts the lexicon's aliases.
    ///
    /// # Panics
    ///
    /// Panics if the built-in chess grammar fails to compile, which the
    /// compiler checks cannot depend on the lexicon.
    #[must_use]
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        let grammar = GrammarCompiler::compile(&chess_grammar(), &lexicon)
            .expect("chess grammar is well-formed");
        Self { grammar, lexicon }
    }

    /// Translates one utterance.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the text is not a move, or `InvalidEnPassant`
    /// if it describes an en passant capture of a pawn on an impossible rank.
    pub fn parse(&self, text: &str) -> Result<MoveNotation> {
        self.parse_observed(text, &mut NoopObserver)
    }

    /// Translates one utterance, reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`MoveTranslator::parse`].
    pub fn parse_observed(
        &self,
        text: &str,
        observer: &mut dyn ParseObserver,
    ) -> Result<MoveNotation> {
        self.grammar.parse_observed(text, observer).map(MoveNotation)
    }

    /// Returns the lexicon this translator was built with.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the compiled grammar.
    #[must_use]
    pub fn grammar(&self) -> &CompiledGrammar {
        &self.grammar
    }
}

impl Default for MoveTranslator {
    fn default() -> Self {
        Self::new()
    }
}
