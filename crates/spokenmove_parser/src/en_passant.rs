//! Landing square for en passant captures.
//!
//! Speakers name the square of the pawn being captured. SAN records the square
//! the capturing pawn lands on, one rank behind it from the captured pawn's
//! point of view. Only pawns that just double-stepped can be taken en passant,
//! so the captured pawn stands on rank 4 (white) or 5 (black).

use spokenmove_foundation::{Error, Rank, Result};

/// Returns the landing rank for a capture of the pawn standing on `captured`.
///
/// # Errors
///
/// Returns `InvalidEnPassant` for any rank other than 4 or 5.
pub fn landing_rank(captured: char) -> Result<Rank> {
    let landing = match captured {
        '4' => '3',
        '5' => '4',
        other => return Err(Error::invalid_en_passant(other)),
    };
    Rank::from_char(landing).ok_or_else(|| Error::invalid_en_passant(captured))
}
