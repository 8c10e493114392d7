use super::{ordering::MovePicker, Searcher};
use crate::{
    board::GenMask,
    transposition::Bound,
    types::{Move, MoveList, Score, Variation, MAX_PLY},
};

impl Searcher<'_> {
    /// Performs a negamax search with fail-hard alpha-beta cutoffs,
    /// rebuilding the principal variation into `pv` bottom-up.
    pub(super) fn alpha_beta(
        &mut self, mut alpha: i32, mut beta: i32, mut depth: i32, pv: &mut Variation,
    ) -> i32 {
        pv.clear();
        self.nodes += 1;

        // The undo history backing the recursion is bounded.
        if self.ply >= MAX_PLY - 1 {
            return self.board.evaluate();
        }

        let in_check = self.board.in_check();

        // Check extension: never enter the horizon in a forced sequence.
        if in_check {
            depth += 1;
        }

        if depth <= 0 {
            return self.quiescence(alpha, beta);
        }

        let original_alpha = alpha;
        let hash = self.board.hash();

        let mut table_move = Move::NULL;
        let mut cached = None;

        // A stored result deep enough can tighten the window or resolve
        // the node outright; the cached move list is reused either way.
        if let Some(entry) = self.tt.probe(hash) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower => beta = beta.min(entry.score),
                    Bound::Upper => alpha = alpha.max(entry.score),
                }

                if alpha > beta {
                    return entry.score;
                }
            }

            let mut moves = MoveList::new();
            moves.extend_from_slice(&entry.moves);

            table_move = entry.best_move;
            cached = Some(moves);
        }

        // Null Move Pruning: if passing the turn still meets beta, the
        // real moves will too. Unsound under zugzwang, hence the endgame
        // guard.
        if self.ply > 0
            && depth >= self.options.nmp_min_depth
            && !in_check
            && !self.board.is_endgame()
            && !self.board.last_move().is_some_and(|mv| mv.is_null())
        {
            let reduced_depth = depth - 1 - self.options.nmp_reduction;
            let score = {
                let mut node = self.apply(Move::NULL);
                -node.alpha_beta(-beta, -beta + 1, reduced_depth, &mut Variation::new())
            };

            if score >= beta {
                return if Score::is_mate(score) { beta } else { score };
            }
        }

        let moves = cached.unwrap_or_else(|| self.board.generate_moves(GenMask::ALL));
        let mut picker = MovePicker::new(moves, table_move);

        let mut child_pv = Variation::new();
        let mut best_move = Move::NULL;
        let mut legal_moves = 0;
        let mut reduced = false;

        while let Some(mv) = picker.next() {
            if !self.board.is_legal(mv) {
                continue;
            }
            legal_moves += 1;

            let mut new_depth = depth - 1;

            // Late Move Reduction: a late quiet move rarely beats the
            // ones ordered before it, so search it one ply shallower.
            // Applied to a single move per node.
            if !reduced
                && legal_moves > self.options.lmr_move_threshold
                && depth >= self.options.lmr_min_depth
                && mv.is_quiet()
            {
                new_depth -= 1;
                reduced = true;
            }

            let score = {
                let mut node = self.apply(mv);
                -node.alpha_beta(-beta, -alpha, new_depth, &mut child_pv)
            };

            if score >= beta {
                self.tt.write(hash, depth, score, Bound::Lower, mv, picker.moves());
                return score;
            }

            if score > alpha {
                alpha = score;
                best_move = mv;
                pv.load(mv, &child_pv);
            }
        }

        // No legal moves: checkmate if the king is attacked, stalemate
        // otherwise. Shorter mates score further from zero.
        if legal_moves == 0 {
            alpha = if in_check { Score::mated_in(self.ply) } else { Score::DRAW };
        }

        let bound = if alpha > original_alpha { Bound::Exact } else { Bound::Upper };
        self.tt.write(hash, depth, alpha, bound, best_move, picker.moves());

        alpha
    }
}
