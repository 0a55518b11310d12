use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Player {
    Black = 1,
    White = 2,
}

impl Player {
    pub fn from_int(v: u8) -> Option<Self> {
        match v {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }

    pub fn to_int(self) -> u8 {
        self as u8
    }

    pub fn other(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Dense index for per-color tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Player::Black => "B",
            Player::White => "W",
        }
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self {
        self.other()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}
