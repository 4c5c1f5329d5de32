//! Compass approaches to the intersection.
//!
//! The four approaches are the only entry/exit points of the four-way
//! intersection.  Their clockwise order (N → E → S → W → N) is the single
//! geometric fact everything else is derived from: turn kinds fall out of
//! the `opposite`/`clockwise`/`counterclockwise` relations below.

use std::str::FromStr;

use crate::error::IxError;

/// One of the four roads meeting at the intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Approach {
    North,
    East,
    South,
    West,
}

impl Approach {
    /// All four approaches, in clockwise order starting from `North`.
    pub const ALL: [Approach; 4] = [
        Approach::North,
        Approach::East,
        Approach::South,
        Approach::West,
    ];

    /// The approach directly across the intersection.
    #[inline]
    pub fn opposite(self) -> Approach {
        match self {
            Approach::North => Approach::South,
            Approach::East  => Approach::West,
            Approach::South => Approach::North,
            Approach::West  => Approach::East,
        }
    }

    /// The next approach clockwise when viewed from above (N → E → S → W → N).
    ///
    /// A vehicle whose destination is `origin.clockwise()` is turning left.
    #[inline]
    pub fn clockwise(self) -> Approach {
        match self {
            Approach::North => Approach::East,
            Approach::East  => Approach::South,
            Approach::South => Approach::West,
            Approach::West  => Approach::North,
        }
    }

    /// The next approach counterclockwise (N → W → S → E → N).
    ///
    /// A vehicle whose destination is `origin.counterclockwise()` is turning
    /// right.
    #[inline]
    pub fn counterclockwise(self) -> Approach {
        match self {
            Approach::North => Approach::West,
            Approach::West  => Approach::South,
            Approach::South => Approach::East,
            Approach::East  => Approach::North,
        }
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Approach::North => "north",
            Approach::East  => "east",
            Approach::South => "south",
            Approach::West  => "west",
        }
    }

    /// Single-letter abbreviation (`'N'`, `'E'`, `'S'`, `'W'`).
    pub fn letter(self) -> char {
        match self {
            Approach::North => 'N',
            Approach::East  => 'E',
            Approach::South => 'S',
            Approach::West  => 'W',
        }
    }

    /// Parse a single-letter abbreviation (case-insensitive).
    pub fn from_letter(c: char) -> Option<Approach> {
        match c.to_ascii_uppercase() {
            'N' => Some(Approach::North),
            'E' => Some(Approach::East),
            'S' => Some(Approach::South),
            'W' => Some(Approach::West),
            _   => None,
        }
    }
}

impl std::fmt::Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Approach {
    type Err = IxError;

    /// Accepts full names (`"north"`) or single letters (`"N"`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, IxError> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Approach::North),
            "east"  | "e" => Ok(Approach::East),
            "south" | "s" => Ok(Approach::South),
            "west"  | "w" => Ok(Approach::West),
            other => Err(IxError::Parse(format!("unknown approach: {other:?}"))),
        }
    }
}
