mod arrayvec;
mod bitboard;
mod castling;
mod color;
mod movelist;
mod moves;
mod piece;
mod score;
mod square;
mod variation;

pub use arrayvec::*;
pub use bitboard::*;
pub use castling::*;
pub use color::*;
pub use movelist::*;
pub use moves::*;
pub use piece::*;
pub use score::*;
pub use square::*;
pub use variation::*;

/// The maximum number of pseudo legal moves in a single position.
pub const MAX_MOVES: usize = 256;

/// The maximum number of plies the undo history can hold.
pub const MAX_HISTORY: usize = 256;

/// The maximum number of plies that can be searched, extensions included.
pub const MAX_PLY: usize = 128;
