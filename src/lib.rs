pub mod bitboard;
pub mod board;
pub mod error;
pub mod game;
#[cfg(feature = "cli")]
pub mod logger;
pub mod moves;
pub mod square;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use board::{BitboardSet, CastleRights, Color, Piece, PieceKind};
pub use error::{IllegalMove, InvalidSquare, InvariantViolation, ParseError};
pub use game::{GameState, START_POSITION};
pub use moves::Move;
pub use square::Square;
