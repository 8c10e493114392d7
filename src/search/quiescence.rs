use super::{ordering::MovePicker, Searcher};
use crate::{
    board::GenMask,
    types::{Move, MAX_PLY},
};

impl Searcher<'_> {
    /// Resolves tactical instability at the horizon by searching only
    /// captures and promotions, with the static evaluation as the
    /// stand-pat lower bound.
    ///
    /// See [Quiescence Search](https://www.chessprogramming.org/Quiescence_Search)
    /// for more information.
    pub(super) fn quiescence(&mut self, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if self.ply >= MAX_PLY - 1 {
            return self.board.evaluate();
        }

        // Doing nothing is usually the least the side to move can
        // expect, and often already enough for a cutoff.
        let stand_pat = self.board.evaluate();
        if stand_pat >= beta {
            return stand_pat;
        }
        alpha = alpha.max(stand_pat);

        let moves = self.board.generate_moves(GenMask::NOISY);
        let mut picker = MovePicker::new(moves, Move::NULL);

        while let Some(mv) = picker.next() {
            if !self.board.is_legal(mv) {
                continue;
            }

            let score = {
                let mut node = self.apply(mv);
                -node.quiescence(-beta, -alpha)
            };

            if score >= beta {
                return score;
            }
            alpha = alpha.max(score);
        }

        alpha
    }
}
