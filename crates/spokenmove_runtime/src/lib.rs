//! REPL, CLI, and alias configuration for spokenmove.
//!
//! This crate provides:
//! - [`Repl`] - Interactive translate-and-print loop
//! - [`RuntimeConfig`] - Alias sources, tracing and prompt settings
//! - [`run_batch`] - Line-by-line translation for the CLI batch mode

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use batch::{BatchReport, run_batch};
pub use config::{RuntimeConfig, load_alias_file};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::SpokenHighlighter;
pub use repl::Repl;
pub use session::Session;
