use std::ops::{Deref, DerefMut};

use crate::{
    board::Board,
    transposition::TranspositionTable,
    types::{Move, Variation},
};

mod alphabeta;
mod deepening;
mod ordering;
mod quiescence;

#[cfg(test)]
mod tests;

/// Tunable search parameters. The heuristic constants default to the
/// values the engine was written with.
#[derive(Copy, Clone, Debug)]
pub struct SearchOptions {
    /// The highest depth the iterative deepening loop will reach.
    pub max_depth: i32,
    /// The smallest remaining depth at which a null move is tried.
    pub nmp_min_depth: i32,
    /// The depth reduction of the null move search.
    pub nmp_reduction: i32,
    /// The number of legal moves tried before late move reduction applies.
    pub lmr_move_threshold: i32,
    /// The smallest remaining depth at which late move reduction applies.
    pub lmr_min_depth: i32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: 6,
            nmp_min_depth: 3,
            nmp_reduction: 2,
            lmr_move_threshold: 4,
            lmr_min_depth: 3,
        }
    }
}

/// The outcome of the deepest completed iteration. `best_move` is `None`
/// only when the root position has no legal moves; `score` then tells
/// checkmate and stalemate apart.
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: i32,
    pub nodes: u64,
    pub pv: Variation,
}

/// The iterative deepening driver and the state shared by every node of
/// the recursion. The transposition table is borrowed from the caller
/// and reset per search invocation.
pub struct Searcher<'a> {
    board: Board,
    tt: &'a mut TranspositionTable,
    options: SearchOptions,
    ply: usize,
    nodes: u64,
    pub silent: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(board: Board, options: SearchOptions, tt: &'a mut TranspositionTable) -> Self {
        Self { board, tt, options, ply: 0, nodes: 0, silent: false }
    }

    /// Applies the move and returns a guard that unmakes it when it goes
    /// out of scope, so no exit path of a node can leak board state.
    fn apply(&mut self, mv: Move) -> NodeGuard<'_, 'a> {
        self.board.make_move(mv);
        self.ply += 1;

        NodeGuard { searcher: self }
    }
}

struct NodeGuard<'s, 'a> {
    searcher: &'s mut Searcher<'a>,
}

impl Drop for NodeGuard<'_, '_> {
    fn drop(&mut self) {
        self.searcher.ply -= 1;
        self.searcher.board.unmake_move();
    }
}

impl<'a> Deref for NodeGuard<'_, 'a> {
    type Target = Searcher<'a>;

    fn deref(&self) -> &Self::Target {
        self.searcher
    }
}

impl DerefMut for NodeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.searcher
    }
}
