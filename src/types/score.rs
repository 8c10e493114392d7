/// Search score constants, in centipawns from the perspective of the
/// side to move.
pub struct Score;

impl Score {
    pub const DRAW: i32 = 0;

    pub const INFINITY: i32 = 32000;

    pub const MATE: i32 = Self::INFINITY - 1000;
    pub const MATE_BOUND: i32 = Self::MATE - 500;

    /// The score of being checkmated `ply` moves from the root; closer
    /// mates score worse, so the search prefers the shortest one.
    pub const fn mated_in(ply: usize) -> i32 {
        -Self::MATE + ply as i32
    }

    /// Returns `true` for scores that indicate a forced mate for either side.
    pub const fn is_mate(score: i32) -> bool {
        score.abs() >= Self::MATE_BOUND
    }
}
