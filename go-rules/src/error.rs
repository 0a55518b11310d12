use std::fmt;

use crate::point::Point;
use crate::turn::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    /// Stone placed off the grid or on an occupied point.
    InvalidPlacement(Point),
    /// Move not among the state's legal moves.
    IllegalMove(Move),
    Config(String),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::InvalidPlacement(p) => write!(f, "invalid placement at {p}"),
            GoError::IllegalMove(m) => write!(f, "illegal move: {m}"),
            GoError::Config(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for GoError {}
