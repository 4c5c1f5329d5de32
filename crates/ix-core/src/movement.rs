//! Movements through the intersection and their turn classification.
//!
//! # Design
//!
//! A movement is an `(origin, destination)` approach pair with
//! `origin != destination`, which leaves exactly twelve valid combinations.
//! Rather than carry a two-field struct whose invalid diagonal has to be
//! rejected at every call site, `Movement` is a twelve-variant enum: the
//! invalid pairs are unrepresentable, and the discriminant doubles as a
//! stable index into movement-keyed arrays (active counts, wait conditions,
//! the conflict table).
//!
//! The checked constructor [`Movement::new`] is the entry point for pairs
//! coming from outside the program (config files, CLI arguments).

use std::fmt;
use std::str::FromStr;

use crate::approach::Approach;
use crate::error::IxError;

// ── TurnKind ──────────────────────────────────────────────────────────────────

/// Classification of a movement by the shape of its path.
///
/// Derived purely from the origin/destination pair — see [`Movement::turn`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnKind {
    /// Crosses the opposing and cross traffic (widest conflict set).
    Left,
    /// Crosses the intersection square in a straight line.
    Straight,
    /// Hugs the near corner (narrowest conflict set).
    Right,
}

impl TurnKind {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TurnKind::Left     => "left",
            TurnKind::Straight => "straight",
            TurnKind::Right    => "right",
        }
    }
}

impl fmt::Display for TurnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

/// One of the twelve valid traffic flows through the intersection.
///
/// Variant order is fixed: origins in clockwise order (N, E, S, W), and for
/// each origin its destinations in left / straight / right order.  The
/// discriminant is the movement's [`index`][Movement::index].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    NorthEast,
    NorthSouth,
    NorthWest,
    EastSouth,
    EastWest,
    EastNorth,
    SouthWest,
    SouthNorth,
    SouthEast,
    WestNorth,
    WestEast,
    WestSouth,
}

impl Movement {
    /// Number of valid movements (4 origins × 3 reachable destinations).
    pub const COUNT: usize = 12;

    /// All twelve movements, in [`index`][Movement::index] order.
    pub const ALL: [Movement; Movement::COUNT] = [
        Movement::NorthEast,
        Movement::NorthSouth,
        Movement::NorthWest,
        Movement::EastSouth,
        Movement::EastWest,
        Movement::EastNorth,
        Movement::SouthWest,
        Movement::SouthNorth,
        Movement::SouthEast,
        Movement::WestNorth,
        Movement::WestEast,
        Movement::WestSouth,
    ];

    /// Checked constructor.  Returns `None` when `origin == destination`
    /// (there is no U-turn movement).
    pub fn new(origin: Approach, destination: Approach) -> Option<Movement> {
        use Approach::*;
        match (origin, destination) {
            (North, East)  => Some(Movement::NorthEast),
            (North, South) => Some(Movement::NorthSouth),
            (North, West)  => Some(Movement::NorthWest),
            (East, South)  => Some(Movement::EastSouth),
            (East, West)   => Some(Movement::EastWest),
            (East, North)  => Some(Movement::EastNorth),
            (South, West)  => Some(Movement::SouthWest),
            (South, North) => Some(Movement::SouthNorth),
            (South, East)  => Some(Movement::SouthEast),
            (West, North)  => Some(Movement::WestNorth),
            (West, East)   => Some(Movement::WestEast),
            (West, South)  => Some(Movement::WestSouth),
            _ => None,
        }
    }

    /// The approach the vehicle arrives from.
    pub fn origin(self) -> Approach {
        match self {
            Movement::NorthEast | Movement::NorthSouth | Movement::NorthWest => Approach::North,
            Movement::EastSouth | Movement::EastWest | Movement::EastNorth   => Approach::East,
            Movement::SouthWest | Movement::SouthNorth | Movement::SouthEast => Approach::South,
            Movement::WestNorth | Movement::WestEast | Movement::WestSouth   => Approach::West,
        }
    }

    /// The approach the vehicle leaves by.
    pub fn destination(self) -> Approach {
        match self {
            Movement::EastNorth | Movement::SouthNorth | Movement::WestNorth => Approach::North,
            Movement::NorthEast | Movement::SouthEast | Movement::WestEast   => Approach::East,
            Movement::NorthSouth | Movement::EastSouth | Movement::WestSouth => Approach::South,
            Movement::NorthWest | Movement::EastWest | Movement::SouthWest   => Approach::West,
        }
    }

    /// Turn kind, derived from intersection geometry: the opposite approach
    /// is straight ahead, the clockwise neighbour is reached by a left turn,
    /// the counterclockwise neighbour by a right turn.
    pub fn turn(self) -> TurnKind {
        let origin = self.origin();
        let destination = self.destination();
        if destination == origin.opposite() {
            TurnKind::Straight
        } else if destination == origin.clockwise() {
            TurnKind::Left
        } else {
            TurnKind::Right
        }
    }

    /// Stable index in `0..Movement::COUNT`, for direct use with
    /// movement-keyed arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compact label of the form `"N->E"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Movement::NorthEast  => "N->E",
            Movement::NorthSouth => "N->S",
            Movement::NorthWest  => "N->W",
            Movement::EastSouth  => "E->S",
            Movement::EastWest   => "E->W",
            Movement::EastNorth  => "E->N",
            Movement::SouthWest  => "S->W",
            Movement::SouthNorth => "S->N",
            Movement::SouthEast  => "S->E",
            Movement::WestNorth  => "W->N",
            Movement::WestEast   => "W->E",
            Movement::WestSouth  => "W->S",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Movement {
    type Err = IxError;

    /// Accepts `"N->E"`, `"NE"`, or `"n e"` — any string whose alphabetic
    /// characters are exactly two approach letters.
    fn from_str(s: &str) -> Result<Self, IxError> {
        let letters: Vec<char> = s.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        let [o, d] = letters.as_slice() else {
            return Err(IxError::Parse(format!("malformed movement: {s:?}")));
        };
        let origin = Approach::from_letter(*o)
            .ok_or_else(|| IxError::Parse(format!("unknown approach letter: {o:?}")))?;
        let destination = Approach::from_letter(*d)
            .ok_or_else(|| IxError::Parse(format!("unknown approach letter: {d:?}")))?;
        Movement::new(origin, destination)
            .ok_or_else(|| IxError::Parse(format!("movement {s:?} enters and leaves by {origin}")))
    }
}
