//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Piece, Side, Square, Error.

mod errors;
mod pieces;
