use std::collections::BTreeSet;

use crate::player::Player;
use crate::point::Point;

/// A connected chain of same-colored stones together with its liberties.
///
/// Groups are values: every operation returns a new group and leaves the
/// receiver untouched, so one group can be shared between board snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    color: Player,
    stones: BTreeSet<Point>,
    liberties: BTreeSet<Point>,
}

impl Group {
    /// A one-stone group at `point`.
    pub fn single(color: Player, point: Point, liberties: impl IntoIterator<Item = Point>) -> Self {
        Group {
            color,
            stones: BTreeSet::from([point]),
            liberties: liberties.into_iter().collect(),
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &BTreeSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &BTreeSet<Point> {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn without_liberty(&self, point: Point) -> Group {
        let mut liberties = self.liberties.clone();
        liberties.remove(&point);
        Group {
            color: self.color,
            stones: self.stones.clone(),
            liberties,
        }
    }

    pub fn with_liberty(&self, point: Point) -> Group {
        let mut liberties = self.liberties.clone();
        liberties.insert(point);
        Group {
            color: self.color,
            stones: self.stones.clone(),
            liberties,
        }
    }

    /// Union of two same-colored groups. Liberties that are stones of either
    /// group are dropped.
    ///
    /// Panics if the colors differ.
    pub fn merged_with(&self, other: &Group) -> Group {
        assert_eq!(
            self.color, other.color,
            "cannot merge groups of different colors"
        );
        let stones: BTreeSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .filter(|p| !stones.contains(*p))
            .copied()
            .collect();
        Group {
            color: self.color,
            stones,
            liberties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(row: i16, col: i16) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn single_stone_group() {
        let g = Group::single(Player::Black, pt(2, 2), [pt(1, 2), pt(3, 2)]);
        assert_eq!(g.color(), Player::Black);
        assert_eq!(g.stones().len(), 1);
        assert!(g.contains(pt(2, 2)));
        assert_eq!(g.num_liberties(), 2);
    }

    #[test]
    fn liberty_updates_return_new_groups() {
        let g = Group::single(Player::White, pt(2, 2), [pt(1, 2)]);
        let fewer = g.without_liberty(pt(1, 2));
        let more = g.with_liberty(pt(2, 3));

        assert_eq!(g.num_liberties(), 1);
        assert_eq!(fewer.num_liberties(), 0);
        assert_eq!(more.num_liberties(), 2);
        assert_eq!(fewer.stones(), g.stones());
    }

    #[test]
    fn removing_absent_liberty_is_noop() {
        let g = Group::single(Player::White, pt(2, 2), [pt(1, 2)]);
        assert_eq!(g.without_liberty(pt(5, 5)), g);
    }

    #[test]
    fn merge_drops_shared_stones_from_liberties() {
        // (2,2) and (2,3) are adjacent: each lists the other as a liberty.
        let a = Group::single(Player::Black, pt(2, 2), [pt(1, 2), pt(2, 3)]);
        let b = Group::single(Player::Black, pt(2, 3), [pt(2, 2), pt(2, 4)]);
        let merged = a.merged_with(&b);

        assert_eq!(merged.stones().len(), 2);
        assert_eq!(
            merged.liberties().iter().copied().collect::<Vec<_>>(),
            vec![pt(1, 2), pt(2, 4)]
        );
    }

    #[test]
    fn merge_is_commutative() {
        let a = Group::single(Player::Black, pt(2, 2), [pt(1, 2), pt(2, 3)]);
        let b = Group::single(Player::Black, pt(2, 3), [pt(2, 2), pt(2, 4)]);
        assert_eq!(a.merged_with(&b), b.merged_with(&a));
    }

    #[test]
    #[should_panic(expected = "different colors")]
    fn merge_rejects_mixed_colors() {
        let a = Group::single(Player::Black, pt(1, 1), [pt(2, 1)]);
        let b = Group::single(Player::White, pt(1, 2), [pt(2, 2)]);
        a.merged_with(&b);
    }
}
