//! Spoken chess move parser.
//!
//! This crate turns transcribed speech like "bishop to d7 check" or
//! "f captures g4 en passant" into Standard Algebraic Notation.
//!
//! # Architecture
//!
//! ```text
//! "Knight A takes B4 check"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEXICON         │  knight ← {night}, 4 ← {for, force, ...}
//! └─────────────────┘
//!          │  (aliases baked into matchers at compile time)
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  start → move → piece_move → piece departure action destination
//! │ (ordered choice)│  first matching alternative wins, cursor unwinds on failure
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTIONS         │  "N" + "a" + "x" + "b4" + "+"
//! └─────────────────┘
//!          │
//!          ▼
//!       "Naxb4+"
//! ```
//!
//! # Modules
//!
//! - [`lexicon`] - Alias table mapping canonical tokens to surface forms
//! - [`grammar`] - Rule definitions and the grammar compiler
//! - [`engine`] - Anchored ordered-choice matching over a compiled grammar
//! - [`chess`] - The spoken-move grammar and its semantic actions
//! - [`en_passant`] - Landing-rank rewrite for en passant captures
//! - [`san`] - Typed SAN moves and their spoken description
//! - [`translator`] - The public text-to-SAN facade
//! - [`stdlib`] - Built-in aliases for common speech misrecognitions

pub mod chess;
pub mod en_passant;
pub mod engine;
pub mod grammar;
pub mod lexicon;
pub mod san;
pub mod stdlib;
pub mod translator;

// Re-export main types for convenience
pub use engine::{NoopObserver, ParseObserver};
pub use grammar::{CompiledGrammar, GrammarCompiler, GrammarDef};
pub use lexicon::{Lexicon, LexiconBuilder};
pub use san::{SanMove, describe};
pub use translator::{MoveNotation, MoveTranslator};
