//! Perft used for testing, debugging and benchmarking the move
//! generator by enumerating the leaf nodes reachable at a fixed depth.
//!
//! See [Perft](https://www.chessprogramming.org/Perft) for more information.

use std::time::Instant;

use crate::{
    board::{Board, GenMask},
    types::MoveKind,
};

/// Leaf counts of a perft walk, split by move kind. En passant captures
/// are counted both as captures and separately.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct PerftResult {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl std::ops::AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passants += rhs.en_passants;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Counts the leaf nodes reachable at the given depth.
pub fn perft(board: &mut Board, depth: u32) -> PerftResult {
    let mut result = PerftResult::default();

    if depth == 0 {
        result.nodes = 1;
        return result;
    }

    for &mv in board.generate_moves(GenMask::ALL).iter() {
        if !board.is_legal(mv) {
            continue;
        }

        if depth == 1 {
            result.nodes += 1;
            result.captures += u64::from(mv.is_capture());
            result.en_passants += u64::from(mv.kind() == MoveKind::EnPassant);
            result.castles += u64::from(mv.is_castle());
            result.promotions += u64::from(mv.is_promotion());
        } else {
            board.make_move(mv);
            result += perft(board, depth - 1);
            board.unmake_move();
        }
    }

    result
}

/// Runs the perft diagnostic, printing the node count of every root
/// move, the totals per move kind and the node rate.
pub fn divide(board: &mut Board, depth: u32) {
    if depth == 0 {
        println!("nodes      1");
        return;
    }

    println!("{}", "-".repeat(34));
    println!("{:>8} {:>14}", "Move", "Nodes");
    println!("{}", "-".repeat(34));

    let now = Instant::now();
    let mut total = PerftResult::default();

    for &mv in board.generate_moves(GenMask::ALL).iter() {
        if !board.is_legal(mv) {
            continue;
        }

        board.make_move(mv);
        let count = perft(board, depth - 1);
        board.unmake_move();

        total += count;
        println!("{mv:>8} {:>14}", count.nodes);
    }

    let seconds = now.elapsed().as_secs_f64();
    let nps = total.nodes as f64 / seconds;

    println!("{}", "-".repeat(34));
    println!("nodes      {}", total.nodes);
    println!("captures   {}", total.captures);
    println!("en passant {}", total.en_passants);
    println!("castles    {}", total.castles);
    println!("promotions {}", total.promotions);
    println!("elapsed    {seconds:.3}s ({nps:.0} nodes/s)");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Kind breakdowns from https://www.chessprogramming.org/Perft_Results
    #[test]
    fn classifies_leaves_from_the_start_position() {
        let mut board = Board::starting_position();

        let result = perft(&mut board, 4);
        assert_eq!(result.nodes, 197_281);
        assert_eq!(result.captures, 1576);
        assert_eq!(result.en_passants, 0);
        assert_eq!(result.castles, 0);
        assert_eq!(result.promotions, 0);
    }

    #[test]
    fn classifies_leaves_of_a_tactical_position() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut board = Board::from_fen(fen).unwrap();

        let result = perft(&mut board, 2);
        assert_eq!(result.nodes, 2039);
        assert_eq!(result.captures, 351);
        assert_eq!(result.en_passants, 1);
        assert_eq!(result.castles, 91);
        assert_eq!(result.promotions, 0);

        let result = perft(&mut board, 3);
        assert_eq!(result.nodes, 97_862);
        assert_eq!(result.captures, 17_102);
        assert_eq!(result.en_passants, 45);
        assert_eq!(result.castles, 3162);
        assert_eq!(result.promotions, 0);
    }
}
