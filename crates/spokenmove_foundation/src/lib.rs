//! Core chess vocabulary types and errors for spokenmove.
//!
//! This crate provides:
//! - [`Piece`], [`Side`], [`CastleSide`] - The pieces and parties a spoken move names
//! - [`File`], [`Rank`], [`Square`] - Board coordinates as they appear in SAN
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod piece;
pub mod square;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use piece::{CastleSide, Piece, Side};
pub use square::{File, Rank, Square};
