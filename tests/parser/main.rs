//! Integration tests for the spokenmove_parser crate.
//!
//! Tests for the spoken-move pipeline:
//! - Translation fixtures
//! - Translation properties (determinism, case, aliases, anchoring)
//! - Grammar compilation and matching
//! - Lexicon configuration
//! - SAN reading and description

mod fixtures;
mod lexicon_tests;
mod san_tests;
