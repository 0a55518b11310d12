//! Checked replay of move sequences from outside sources (records, network).

use std::fmt;

use crate::error::GoError;
use crate::state::GameState;
use crate::turn::Move;

/// A move sequence failed at `index` (0-based) with `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayError {
    pub index: usize,
    pub error: GoError,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {}: {}", self.index + 1, self.error)
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Apply `moves` in order from `start`, validating each one.
///
/// Stops at the first move that is not legal in its position; nothing after
/// it is applied.
pub fn replay(start: &GameState, moves: &[Move]) -> Result<GameState, ReplayError> {
    moves
        .iter()
        .enumerate()
        .try_fold(start.clone(), |state, (index, &mv)| {
            state
                .try_apply_move(mv)
                .map_err(|error| ReplayError { index, error })
        })
}

/// Like [`replay`], but keeps every intermediate state, `start` first.
pub fn replay_states(start: &GameState, moves: &[Move]) -> Result<Vec<GameState>, ReplayError> {
    let mut states = Vec::with_capacity(moves.len() + 1);
    states.push(start.clone());
    for (index, &mv) in moves.iter().enumerate() {
        let next = states[index]
            .try_apply_move(mv)
            .map_err(|error| ReplayError { index, error })?;
        states.push(next);
    }
    Ok(states)
}
