use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GoError;
use crate::player::Player;
use crate::point::Point;
use crate::scoring::Scorer;
use crate::setup;
use crate::turn::Move;

/// Player to move paired with the position hash.
pub type Situation = (Player, u64);

/// Situations seen earlier in a game.
///
/// The newest entries sit in a short inline list owned by each state; once
/// it fills up they are folded into a set that all descendants share. A
/// move therefore copies at most `RECENT_CAPACITY` entries, and the full set
/// is rebuilt only once per `RECENT_CAPACITY` moves.
#[derive(Debug, Clone, Default)]
pub struct SituationHistory {
    shared: Arc<HashSet<Situation>>,
    recent: ArrayVec<Situation, RECENT_CAPACITY>,
}

const RECENT_CAPACITY: usize = 32;

impl SituationHistory {
    pub fn contains(&self, situation: &Situation) -> bool {
        self.recent.contains(situation) || self.shared.contains(situation)
    }

    pub fn len(&self) -> usize {
        self.shared.len() + self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Situation> {
        self.shared.iter().chain(self.recent.iter())
    }

    /// This history plus `situation`.
    fn with(&self, situation: Situation) -> Self {
        if self.contains(&situation) {
            return self.clone();
        }
        let mut next = self.clone();
        if next.recent.try_push(situation).is_err() {
            let mut shared = HashSet::clone(&self.shared);
            shared.extend(self.recent.iter().copied());
            shared.insert(situation);
            next = SituationHistory {
                shared: Arc::new(shared),
                recent: ArrayVec::new(),
            };
        }
        next
    }
}

/// An immutable snapshot of a game, linked to the state it was reached from.
///
/// `GameState` is a cheap handle: cloning it shares the snapshot. Applying a
/// move never touches the receiver, so any number of threads may branch from
/// the same state at once.
#[derive(Clone)]
pub struct GameState {
    node: Arc<Node>,
}

struct Node {
    board: Arc<Board>,
    next_player: Player,
    previous: Option<GameState>,
    last_move: Option<Move>,
    /// Situations of every ancestor, excluding this state's own.
    seen: SituationHistory,
    move_number: usize,
}

impl GameState {
    /// An empty board with Black to move.
    pub fn new_game(rows: u8, cols: u8) -> Self {
        Self::from_board(Board::new(rows, cols), Player::Black)
    }

    /// Start from a position prepared by a setup step, such as handicap stones.
    pub fn from_board(board: Board, next_player: Player) -> Self {
        GameState {
            node: Arc::new(Node {
                board: Arc::new(board),
                next_player,
                previous: None,
                last_move: None,
                seen: SituationHistory::default(),
                move_number: 0,
            }),
        }
    }

    /// Black handicap stones on their hoshi points, White to move.
    pub fn with_handicap(rows: u8, cols: u8, count: u8) -> Result<Self, GoError> {
        Self::from_config(&GameConfig {
            rows,
            cols,
            handicap: count,
            ..GameConfig::default()
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GoError> {
        config.validate()?;
        let mut board = Board::with_seed(config.rows, config.cols, config.zobrist_seed);
        if config.handicap == 0 {
            return Ok(Self::from_board(board, Player::Black));
        }

        let points = setup::handicap_points(config.rows, config.cols, config.handicap)
            .ok_or_else(|| GoError::Config(format!("handicap {} unsupported", config.handicap)))?;
        for point in points {
            board.place_stone(Player::Black, point)?;
        }
        tracing::debug!(handicap = config.handicap, "placed handicap stones");
        Ok(Self::from_board(board, Player::White))
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.node.board
    }

    pub fn next_player(&self) -> Player {
        self.node.next_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.node.last_move
    }

    pub fn previous_state(&self) -> Option<&GameState> {
        self.node.previous.as_ref()
    }

    /// Number of moves applied since the initial position.
    pub fn move_number(&self) -> usize {
        self.node.move_number
    }

    pub fn situation(&self) -> Situation {
        (self.node.next_player, self.node.board.zobrist_hash())
    }

    /// Situations that occurred before this one.
    pub fn previous_situations(&self) -> &SituationHistory {
        &self.node.seen
    }

    // -- Transitions --

    /// Apply `mv` for the player to move and return the resulting state.
    ///
    /// Legality is the caller's responsibility (see [`GameState::is_valid_move`]);
    /// only an off-grid or occupied placement is reported, as
    /// `InvalidPlacement`, and then no state is created.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, GoError> {
        let player = self.next_player();
        let board = match mv {
            Move::Play(point) => {
                let mut board = Board::clone(&self.node.board);
                board.place_stone(player, point)?;
                Arc::new(board)
            }
            Move::Pass | Move::Resign => Arc::clone(&self.node.board),
        };

        let seen = self.node.seen.with(self.situation());

        tracing::trace!(%player, %mv, move_number = self.node.move_number + 1, "applied move");

        Ok(GameState {
            node: Arc::new(Node {
                board,
                next_player: player.other(),
                previous: Some(self.clone()),
                last_move: Some(mv),
                seen,
                move_number: self.node.move_number + 1,
            }),
        })
    }

    /// Like [`GameState::apply_move`], but rejects moves that are not legal
    /// with `IllegalMove` before touching any board.
    pub fn try_apply_move(&self, mv: Move) -> Result<GameState, GoError> {
        if !self.is_valid_move(mv) {
            tracing::debug!(player = %self.next_player(), %mv, "rejected illegal move");
            return Err(GoError::IllegalMove(mv));
        }
        self.apply_move(mv)
    }

    // -- Rules --

    pub fn is_valid_move(&self, mv: Move) -> bool {
        if self.is_over() {
            return false;
        }
        let point = match mv {
            Move::Pass | Move::Resign => return true,
            Move::Play(point) => point,
        };

        let player = self.next_player();
        match self.board_after(player, point) {
            Some(board) => {
                !Self::is_captured_at(&board, point)
                    && !self.node.seen.contains(&(player.other(), board.zobrist_hash()))
            }
            None => false,
        }
    }

    /// Whether `mv` would leave `player`'s own group without liberties.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        mv.point()
            .and_then(|point| {
                self.board_after(player, point)
                    .map(|board| Self::is_captured_at(&board, point))
            })
            .unwrap_or(false)
    }

    /// Whether `mv` would recreate a situation already in this game's history.
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        mv.point()
            .and_then(|point| self.board_after(player, point))
            .is_some_and(|board| {
                self.node
                    .seen
                    .contains(&(player.other(), board.zobrist_hash()))
            })
    }

    pub fn is_over(&self) -> bool {
        match self.node.last_move {
            None | Some(Move::Play(_)) => false,
            Some(Move::Resign) => true,
            Some(Move::Pass) => self
                .previous_state()
                .and_then(GameState::last_move)
                .is_some_and(|m| m.is_pass()),
        }
    }

    /// Legal plays in row-major order, then pass, then resign.
    ///
    /// Once [`GameState::is_over`] holds, no play is listed but pass and
    /// resign still are, even though [`GameState::is_valid_move`] rejects them.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.node
            .board
            .points()
            .map(Move::Play)
            .filter(|&mv| self.is_valid_move(mv))
            .chain([Move::Pass, Move::Resign])
            .collect()
    }

    /// The winner of a finished game. A resignation decides the game
    /// directly; otherwise `scorer` judges the final board.
    pub fn winner(&self, scorer: &impl Scorer) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        if self.node.last_move == Some(Move::Resign) {
            // next_player already flipped past the resigning player
            return Some(self.next_player());
        }
        scorer.winner(&self.node.board)
    }

    // -- Internal helpers --

    fn board_after(&self, player: Player, point: Point) -> Option<Board> {
        let mut board = Board::clone(&self.node.board);
        board.place_stone(player, point).ok()?;
        Some(board)
    }

    fn is_captured_at(board: &Board, point: Point) -> bool {
        board
            .get_group(point)
            .is_none_or(|group| group.num_liberties() == 0)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("next_player", &self.node.next_player)
            .field("last_move", &self.node.last_move)
            .field("move_number", &self.node.move_number)
            .field("hash", &self.node.board.zobrist_hash())
            .finish()
    }
}

/// Unlinks the history chain iteratively so dropping a long game cannot
/// overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut previous = self.previous.take();
        while let Some(state) = previous {
            match Arc::try_unwrap(state.node) {
                Ok(mut node) => previous = node.previous.take(),
                Err(_) => break,
            }
        }
    }
}
