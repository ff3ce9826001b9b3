//! Typed SAN moves and their spoken description.
//!
//! [`SanMove`] covers exactly the shapes the spoken grammar produces: piece
//! moves with optional departure hints, pawn pushes and captures with optional
//! promotion, castling, and resignation results. [`SanMove::describe`] renders
//! a move as words the grammar reads back into the same SAN.

use std::fmt;
use std::str::FromStr;

use spokenmove_foundation::{CastleSide, Error, File, Piece, Rank, Result, Side, Square};

/// Disambiguation hint naming where a piece comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Departure {
    /// `Nbd7`
    File(File),
    /// `R1a3`
    Rank(Rank),
    /// `Qh4e1`
    Square(Square),
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(file) => write!(f, "{file}"),
            Self::Rank(rank) => write!(f, "{rank}"),
            Self::Square(square) => write!(f, "{square}"),
        }
    }
}

/// Check or mate marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Suffix {
    /// `+`
    Check,
    /// `#`
    Checkmate,
}

impl Suffix {
    /// Returns the SAN marker.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Check => '+',
            Self::Checkmate => '#',
        }
    }

    /// Returns the spoken word.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Checkmate => "checkmate",
        }
    }
}

/// A move in Standard Algebraic Notation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SanMove {
    /// A piece or pawn moving to a square.
    Normal {
        /// Moving piece
        piece: Piece,
        /// Disambiguation, or the capturing file for pawn captures
        departure: Option<Departure>,
        /// Whether the move captures
        capture: bool,
        /// Destination square
        to: Square,
        /// Promotion piece, pawns only
        promotion: Option<Piece>,
        /// Check marker
        suffix: Option<Suffix>,
    },
    /// Castling.
    Castle {
        /// Wing
        side: CastleSide,
        /// Check marker
        suffix: Option<Suffix>,
    },
    /// A resignation, recorded as the game result.
    Resign(Side),
}

impl SanMove {
    /// Returns the check marker, if any.
    #[must_use]
    pub fn suffix(&self) -> Option<Suffix> {
        match self {
            Self::Normal { suffix, .. } | Self::Castle { suffix, .. } => *suffix,
            Self::Resign(_) => None,
        }
    }

    /// Returns true if the move captures.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, Self::Normal { capture: true, .. })
    }

    /// Describes the move in words the spoken grammar understands.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut words: Vec<String> = Vec::new();
        match self {
            Self::Normal {
                piece: Piece::Pawn,
                departure,
                capture,
                to,
                promotion,
                ..
            } => {
                if *capture {
                    if let Some(departure) = departure {
                        words.push(departure.to_string());
                    }
                    words.push("captures".to_string());
                }
                words.push(to.to_string());
                if let Some(promotion) = promotion {
                    words.push("promote to".to_string());
                    words.push(promotion.name().to_string());
                }
            }
            Self::Normal {
                piece,
                departure,
                capture,
                to,
                ..
            } => {
                words.push(piece.name().to_string());
                if let Some(departure) = departure {
                    words.push(departure.to_string());
                }
                words.push(if *capture { "captures" } else { "to" }.to_string());
                words.push(to.to_string());
            }
            Self::Castle { side, .. } => {
                words.push("castle".to_string());
                words.push(side.name().to_string());
            }
            Self::Resign(side) => {
                words.push(side.name().to_string());
                words.push("resigns".to_string());
            }
        }
        if let Some(suffix) = self.suffix() {
            words.push(suffix.name().to_string());
        }
        words.join(" ")
    }
}

/// Describes a SAN string in words.
///
/// # Errors
///
/// Returns `InvalidSan` if `san` is not a move the spoken grammar produces.
pub fn describe(san: &str) -> Result<String> {
    Ok(san.parse::<SanMove>()?.describe())
}

impl fmt::Display for SanMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal {
                piece,
                departure,
                capture,
                to,
                promotion,
                suffix,
            } => {
                if let Some(letter) = piece.letter() {
                    write!(f, "{letter}")?;
                }
                if let Some(departure) = departure {
                    write!(f, "{departure}")?;
                }
                if *capture {
                    f.write_str("x")?;
                }
                write!(f, "{to}")?;
                if let Some(letter) = promotion.and_then(Piece::letter) {
                    write!(f, "={letter}")?;
                }
                if let Some(suffix) = suffix {
                    write!(f, "{}", suffix.symbol())?;
                }
                Ok(())
            }
            Self::Castle { side, suffix } => {
                f.write_str(side.notation())?;
                if let Some(suffix) = suffix {
                    write!(f, "{}", suffix.symbol())?;
                }
                Ok(())
            }
            Self::Resign(side) => f.write_str(side.resignation_result()),
        }
    }
}

/// SAN files are lowercase only.
fn san_file(c: char) -> Option<File> {
    if c.is_ascii_lowercase() {
        File::from_char(c)
    } else {
        None
    }
}

impl FromStr for SanMove {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_san(s);

        if let Some(side) = Side::from_resignation_result(s) {
            return Ok(Self::Resign(side));
        }

        let (body, suffix) = match s.as_bytes().last() {
            Some(b'+') => (&s[..s.len() - 1], Some(Suffix::Check)),
            Some(b'#') => (&s[..s.len() - 1], Some(Suffix::Checkmate)),
            _ => (s, None),
        };

        for side in [CastleSide::Queenside, CastleSide::Kingside] {
            if body == side.notation() {
                return Ok(Self::Castle { side, suffix });
            }
        }

        let chars: Vec<char> = body.chars().collect();
        let (piece, rest) = chars
            .split_first()
            .and_then(|(&c, rest)| Some((Piece::from_letter(c)?, rest)))
            .unwrap_or((Piece::Pawn, chars.as_slice()));

        let (rest, promotion) = match rest {
            [init @ .., '=', letter] => {
                (init, Some(Piece::from_letter(*letter).ok_or_else(invalid)?))
            }
            _ => (rest, None),
        };

        let [init @ .., file, rank] = rest else {
            return Err(invalid());
        };
        let to = match (san_file(*file), Rank::from_char(*rank)) {
            (Some(file), Some(rank)) => Square::new(file, rank),
            _ => return Err(invalid()),
        };

        let (init, capture) = match init {
            [departure @ .., 'x'] => (departure, true),
            _ => (init, false),
        };

        let departure = match init {
            [] => None,
            [c] => Some(
                san_file(*c)
                    .map(Departure::File)
                    .or_else(|| Rank::from_char(*c).map(Departure::Rank))
                    .ok_or_else(invalid)?,
            ),
            [f, r] => match (san_file(*f), Rank::from_char(*r)) {
                (Some(file), Some(rank)) => Some(Departure::Square(Square::new(file, rank))),
                _ => return Err(invalid()),
            },
            _ => return Err(invalid()),
        };

        let well_formed = if piece == Piece::Pawn {
            matches!(
                (departure, capture),
                (None, false) | (Some(Departure::File(_)), true)
            )
        } else {
            promotion.is_none()
        };
        if !well_formed {
            return Err(invalid());
        }

        Ok(Self::Normal {
            piece,
            departure,
            capture,
            to,
            promotion,
            suffix,
        })
    }
}
