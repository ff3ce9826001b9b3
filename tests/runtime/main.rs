//! Integration tests for the spokenmove_runtime crate.
//!
//! Tests for everything around the translator:
//! - Alias files and runtime configuration
//! - Sessions and batch translation
//! - REPL commands driven by a scripted editor

mod batch;
mod config;
mod session;

use std::fs;
use std::path::PathBuf;

/// Writes `contents` to a uniquely named file in the temp directory.
pub fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("spokenmove_it_{name}"));
    fs::write(&path, contents).unwrap();
    path
}
