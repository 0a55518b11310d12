//! Zobrist hash codes for (point, color) pairs.
//!
//! Codes are drawn from a seeded xoshiro generator, so two boards of the same
//! size built with the same seed hash identically, across runs and machines.

use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

use crate::player::Player;
use crate::point::Point;

pub const DEFAULT_SEED: u64 = 0x5EC1_60BA_2D0B_1A57;

/// Hash of a board with no stones.
pub const EMPTY_BOARD: u64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristTable {
    rows: u8,
    cols: u8,
    seed: u64,
    codes: Vec<[u64; 2]>,
}

impl ZobristTable {
    pub fn new(rows: u8, cols: u8, seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut next_code = || loop {
            let code = rng.next_u64();
            if code != EMPTY_BOARD {
                break code;
            }
        };

        let codes = (0..rows as usize * cols as usize)
            .map(|_| [next_code(), next_code()])
            .collect();

        ZobristTable {
            rows,
            cols,
            seed,
            codes,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Hash code for `player` occupying `point`.
    ///
    /// Panics if `point` is off the grid this table was built for.
    pub fn code(&self, point: Point, player: Player) -> u64 {
        assert!(
            point.row >= 1
                && point.col >= 1
                && point.row <= self.rows as i16
                && point.col <= self.cols as i16,
            "no hash code for off-grid point {point}"
        );
        let idx = (point.row as usize - 1) * self.cols as usize + (point.col as usize - 1);
        self.codes[idx][player.index()]
    }
}
