//! Board coordinates.
//!
//! Files and ranks are stored zero-based; their SAN characters are `a`-`h`
//! and `1`-`8`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A board file, `a` through `h`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct File(u8);

impl File {
    /// All files in board order.
    pub const ALL: [File; 8] = [
        File(0),
        File(1),
        File(2),
        File(3),
        File(4),
        File(5),
        File(6),
        File(7),
    ];

    /// Creates a file from a zero-based index.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 { Some(Self(index)) } else { None }
    }

    /// Reads a file letter, ignoring ASCII case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let lower = c.to_ascii_lowercase();
        if ('a'..='h').contains(&lower) {
            Some(Self(lower as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the lowercase file letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A board rank, `1` through `8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rank(u8);

impl Rank {
    /// All ranks in board order.
    pub const ALL: [Rank; 8] = [
        Rank(0),
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
    ];

    /// Creates a rank from a zero-based index.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 { Some(Self(index)) } else { None }
    }

    /// Reads a rank digit.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if ('1'..='8').contains(&c) {
            Some(Self(c as u8 - b'1'))
        } else {
            None
        }
    }

    /// Returns the rank digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    /// The square's file.
    pub file: File,
    /// The square's rank.
    pub rank: Rank,
}

impl Square {
    /// Creates a square from its coordinates.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::invalid_san(s));
        };
        match (File::from_char(f), Rank::from_char(r)) {
            (Some(file), Some(rank)) => Ok(Self::new(file, rank)),
            _ => Err(Error::invalid_san(s)),
        }
    }
}
