pub mod board;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod game;
pub mod move_gen;
pub mod movelist;
pub mod r#move;
pub mod perft;
pub mod random;
pub mod square;

pub use board::Board;
pub use constants::{Color, Piece, PieceKind};
pub use error::{ChessError, ChessResult};
pub use game::{Game, MoveMode, Outcome};
pub use r#move::Move;
pub use square::Square;
