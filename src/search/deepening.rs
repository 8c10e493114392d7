use std::time::Instant;

use super::{SearchResult, Searcher};
use crate::types::{Score, Variation};

impl Searcher<'_> {
    /// Incrementally explores deeper levels of the game tree, reporting
    /// the best move, score and principal variation after each completed
    /// depth. Stops early once a forced mate is found for either side,
    /// or when the root has no legal moves at all.
    pub fn run(&mut self) -> SearchResult {
        self.tt.clear();

        let stopwatch = Instant::now();
        let mut result = SearchResult {
            best_move: None,
            score: Score::DRAW,
            depth: 0,
            nodes: 0,
            pv: Variation::new(),
        };

        for depth in 2..=self.options.max_depth {
            self.ply = 0;

            let mut pv = Variation::new();
            let score = self.alpha_beta(-Score::INFINITY, Score::INFINITY, depth, &mut pv);

            result = SearchResult { best_move: pv.first(), score, depth, nodes: self.nodes, pv };

            if !self.silent {
                self.report(&result, stopwatch);
            }
            log::debug!("depth {depth} completed in {:?}", stopwatch.elapsed());

            if result.best_move.is_none() || Score::is_mate(score) {
                break;
            }
        }

        if !self.silent {
            match result.best_move {
                Some(best_move) => println!("bestmove {best_move}"),
                None => println!("bestmove none"),
            }
        }

        result
    }

    fn report(&self, result: &SearchResult, stopwatch: Instant) {
        let nps = result.nodes as f64 / stopwatch.elapsed().as_secs_f64();
        let best = result.best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string());

        println!(
            "depth {} best {best} score {} nodes {} nps {nps:.0} pv {}",
            result.depth, result.score, result.nodes, result.pv,
        );
    }
}
