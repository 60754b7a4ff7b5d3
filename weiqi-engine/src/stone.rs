use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// A player's color. Serialized as `1` for Black and `-1` for White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn to_int(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Black => "Black",
            Stone::White => "White",
        };
        f.write_str(name)
    }
}

/// What a board point holds (in a snapshot) or who owns it (after scoring).
/// Uses the same integer encoding as [`Stone`], with `0` for empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Intersection {
    #[default]
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Intersection {
    pub fn is_empty(self) -> bool {
        self == Intersection::Empty
    }

    pub fn to_int(self) -> i8 {
        self as i8
    }
}

impl From<Stone> for Intersection {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Intersection::Black,
            Stone::White => Intersection::White,
        }
    }
}

impl From<Option<Stone>> for Intersection {
    fn from(stone: Option<Stone>) -> Self {
        stone.map_or(Intersection::Empty, Intersection::from)
    }
}
