//! Pieces, sides and castling directions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A chess piece kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    /// King (`K`)
    King,
    /// Queen (`Q`)
    Queen,
    /// Rook (`R`)
    Rook,
    /// Bishop (`B`)
    Bishop,
    /// Knight (`N`)
    Knight,
    /// Pawn (no letter)
    Pawn,
}

impl Piece {
    /// Pieces that carry a SAN letter, in the order the grammar tries them.
    pub const LETTERED: [Piece; 5] = [
        Piece::King,
        Piece::Queen,
        Piece::Rook,
        Piece::Bishop,
        Piece::Knight,
    ];

    /// Returns the SAN letter for this piece. Pawns have none.
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::King => Some('K'),
            Self::Queen => Some('Q'),
            Self::Rook => Some('R'),
            Self::Bishop => Some('B'),
            Self::Knight => Some('N'),
            Self::Pawn => None,
        }
    }

    /// Looks up a piece by its SAN letter (uppercase only).
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'R' => Some(Self::Rook),
            'B' => Some(Self::Bishop),
            'N' => Some(Self::Knight),
            _ => None,
        }
    }

    /// Returns the spoken name of this piece.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Queen => "queen",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
            Self::Pawn => "pawn",
        }
    }

    /// Looks up a piece by its spoken name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::King,
            Self::Queen,
            Self::Rook,
            Self::Bishop,
            Self::Knight,
            Self::Pawn,
        ]
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The player who moves first.
    White,
    /// The player who moves second.
    Black,
}

impl Side {
    /// Returns the spoken name of this side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Looks up a side by its spoken name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("white") {
            Some(Self::White)
        } else if name.eq_ignore_ascii_case("black") {
            Some(Self::Black)
        } else {
            None
        }
    }

    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns the game result token recorded when this side resigns.
    ///
    /// The result names the winner first: black resigning is `1-0`.
    #[must_use]
    pub const fn resignation_result(self) -> &'static str {
        match self {
            Self::Black => "1-0",
            Self::White => "0-1",
        }
    }

    /// Returns the side that resigned to produce a result token.
    #[must_use]
    pub fn from_resignation_result(result: &str) -> Option<Self> {
        match result {
            "1-0" => Some(Self::Black),
            "0-1" => Some(Self::White),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The wing a king castles towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Short castling, `O-O`.
    Kingside,
    /// Long castling, `O-O-O`.
    Queenside,
}

impl CastleSide {
    /// Returns the SAN token for this castling move.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Kingside => "O-O",
            Self::Queenside => "O-O-O",
        }
    }

    /// Returns the spoken name of this wing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kingside => "kingside",
            Self::Queenside => "queenside",
        }
    }

    /// Looks up a wing by its spoken name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("kingside") {
            Some(Self::Kingside)
        } else if name.eq_ignore_ascii_case("queenside") {
            Some(Self::Queenside)
        } else {
            None
        }
    }
}
