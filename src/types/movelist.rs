use super::{ArrayVec, Move, MAX_MOVES};

/// The pseudo legal moves of a single position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
