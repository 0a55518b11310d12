pub mod board;
pub mod config;
pub mod error;
pub mod group;
pub mod player;
pub mod point;
pub mod replay;
pub mod scoring;
pub mod setup;
pub mod state;
pub mod turn;
pub mod zobrist;

pub use board::Board;
pub use config::GameConfig;
pub use error::GoError;
pub use group::Group;
pub use player::Player;
pub use point::Point;
pub use replay::{ReplayError, replay};
pub use scoring::Scorer;
pub use state::{GameState, Situation, SituationHistory};
pub use turn::Move;
pub use zobrist::ZobristTable;
