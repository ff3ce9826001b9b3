//! spokenmove - Spoken chess moves to Standard Algebraic Notation
//!
//! This crate re-exports all layers of the spokenmove system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: spokenmove_runtime    - REPL, CLI, alias files, batch translation
//! Layer 2: spokenmove_debug      - Parse tracing and trace formatting
//! Layer 1: spokenmove_parser     - Lexicon, grammar engine, chess grammar, SAN
//! Layer 0: spokenmove_foundation - Core types (Piece, Square, Error)
//! ```

pub use spokenmove_debug as debug;
pub use spokenmove_foundation as foundation;
pub use spokenmove_parser as parser;
pub use spokenmove_runtime as runtime;

pub use spokenmove_parser::{MoveNotation, MoveTranslator};
