use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::error::GoError;
use crate::group::Group;
use crate::player::Player;
use crate::point::Point;
use crate::zobrist::{self, ZobristTable};

/// The Go board: a flat grid of group ownership plus an incrementally
/// maintained Zobrist hash.
///
/// Every stone of a group points at the same shared `Group`, so cloning a
/// board copies one reference per cell and never aliases mutable state.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    grid: Vec<Option<Arc<Group>>>,
    hash: u64,
    zobrist: Arc<ZobristTable>,
}

impl Board {
    /// Create an empty board hashed with the default seed.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self::with_seed(rows, cols, zobrist::DEFAULT_SEED)
    }

    pub fn with_seed(rows: u8, cols: u8, seed: u64) -> Self {
        Board {
            rows,
            cols,
            grid: vec![None; rows as usize * cols as usize],
            hash: zobrist::EMPTY_BOARD,
            zobrist: Arc::new(ZobristTable::new(rows, cols, seed)),
        }
    }

    // -- Accessors --

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn zobrist_hash(&self) -> u64 {
        self.hash
    }

    pub fn zobrist(&self) -> &ZobristTable {
        &self.zobrist
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        1 <= point.row
            && point.row <= self.rows as i16
            && 1 <= point.col
            && point.col <= self.cols as i16
    }

    /// Color of the stone at `point`, if any.
    pub fn get(&self, point: Point) -> Option<Player> {
        self.get_group(point).map(Group::color)
    }

    /// The group owning the stone at `point`, if any.
    pub fn get_group(&self, point: Point) -> Option<&Group> {
        self.cell(point).map(Arc::as_ref)
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(Option::is_none)
    }

    /// All on-grid points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (rows, cols) = (self.rows as i16, self.cols as i16);
        (1..=rows).flat_map(move |row| (1..=cols).map(move |col| Point::new(row, col)))
    }

    /// Every distinct group on the board, ordered by its first stone.
    pub fn groups(&self) -> Vec<&Group> {
        let mut groups: Vec<&Group> = Vec::new();
        for group in self.grid.iter().flatten() {
            if !groups.iter().any(|g| std::ptr::eq(*g, group.as_ref())) {
                groups.push(group);
            }
        }
        groups
    }

    /// The on-grid orthogonal neighbors of `point`.
    pub fn neighbors(&self, point: Point) -> ArrayVec<Point, 4> {
        point
            .neighbors()
            .into_iter()
            .filter(|&n| self.is_on_grid(n))
            .collect()
    }

    // -- Mutation --

    /// Place a stone for `player` at `point` and resolve captures.
    ///
    /// Every adjacent opponent group left without liberties is removed in
    /// this call. Placing off the grid or on an occupied point leaves the
    /// board untouched and returns `InvalidPlacement`.
    pub fn place_stone(&mut self, player: Player, point: Point) -> Result<(), GoError> {
        if !self.is_on_grid(point) || self.cell(point).is_some() {
            tracing::debug!(%point, %player, "rejected placement");
            return Err(GoError::InvalidPlacement(point));
        }

        let mut liberties: ArrayVec<Point, 4> = ArrayVec::new();
        let mut same_color: ArrayVec<Arc<Group>, 4> = ArrayVec::new();
        let mut opposite_color: ArrayVec<Arc<Group>, 4> = ArrayVec::new();

        for n in self.neighbors(point) {
            match self.cell(n) {
                None => liberties.push(n),
                Some(g) => {
                    let bucket = if g.color() == player {
                        &mut same_color
                    } else {
                        &mut opposite_color
                    };
                    if !bucket.iter().any(|seen| Arc::ptr_eq(seen, g)) {
                        bucket.push(Arc::clone(g));
                    }
                }
            }
        }

        let group = same_color
            .iter()
            .fold(Group::single(player, point, liberties), |acc, g| acc.merged_with(g));
        self.install(Arc::new(group));
        self.hash ^= self.zobrist.code(point, player);
        tracing::trace!(%point, %player, hash = self.hash, "placed stone");

        for other in &opposite_color {
            let reduced = other.without_liberty(point);
            if reduced.num_liberties() > 0 {
                self.install(Arc::new(reduced));
            } else {
                self.remove_group(other);
            }
        }

        Ok(())
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, point: Point) -> usize {
        (point.row as usize - 1) * self.cols as usize + (point.col as usize - 1)
    }

    fn cell(&self, point: Point) -> Option<&Arc<Group>> {
        if self.is_on_grid(point) {
            self.grid[self.idx(point)].as_ref()
        } else {
            None
        }
    }

    /// Make `group` the owner of every one of its stones.
    fn install(&mut self, group: Arc<Group>) {
        for &stone in group.stones() {
            let i = self.idx(stone);
            self.grid[i] = Some(Arc::clone(&group));
        }
    }

    fn remove_group(&mut self, group: &Arc<Group>) {
        tracing::debug!(
            color = %group.color(),
            stones = group.stones().len(),
            "captured group"
        );
        for &stone in group.stones() {
            for n in self.neighbors(stone) {
                let Some(neighbor) = self.cell(n) else {
                    continue;
                };
                if !Arc::ptr_eq(neighbor, group) {
                    let granted = neighbor.with_liberty(stone);
                    self.install(Arc::new(granted));
                }
            }
            let i = self.idx(stone);
            self.grid[i] = None;
            self.hash ^= self.zobrist.code(stone, group.color());
        }
    }
}

/// Boards compare by dimensions and position hash.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.hash == other.hash
    }
}

impl Eq for Board {}
