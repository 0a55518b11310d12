use crate::board::Board;
use crate::player::Player;

/// Decides the winner of a game that ended without resignation.
///
/// Area or territory counting lives outside this crate; callers supply it.
/// `None` means a drawn game.
pub trait Scorer {
    fn winner(&self, board: &Board) -> Option<Player>;
}

impl<F> Scorer for F
where
    F: Fn(&Board) -> Option<Player>,
{
    fn winner(&self, board: &Board) -> Option<Player> {
        self(board)
    }
}
