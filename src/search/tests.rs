use super::{SearchOptions, SearchResult, Searcher};
use crate::{
    board::{Board, GenMask, START_FEN},
    transposition::TranspositionTable,
    types::{Move, Score, Variation},
};

fn run_search(fen: &str, options: SearchOptions) -> SearchResult {
    let board = Board::from_fen(fen).unwrap();
    let mut tt = TranspositionTable::new(1 << 16);
    let mut searcher = Searcher::new(board, options, &mut tt);
    searcher.silent = true;
    searcher.run()
}

fn legal_moves(fen: &str) -> Vec<Move> {
    let mut board = Board::from_fen(fen).unwrap();
    board
        .generate_moves(GenMask::ALL)
        .iter()
        .copied()
        .filter(|&mv| board.is_legal(mv))
        .collect::<Vec<_>>()
}

#[test]
fn depth_one_finds_an_opening_move() {
    let board = Board::from_fen(START_FEN).unwrap();
    let mut tt = TranspositionTable::new(1 << 16);
    let mut searcher = Searcher::new(board, SearchOptions::default(), &mut tt);

    let mut pv = Variation::new();
    let score = searcher.alpha_beta(-Score::INFINITY, Score::INFINITY, 1, &mut pv);

    let openings = legal_moves(START_FEN);
    assert_eq!(openings.len(), 20);
    assert!(openings.contains(&pv.first().unwrap()));
    assert!(score.abs() < Score::INFINITY);
}

#[test]
fn search_returns_a_legal_move() {
    for fen in [
        START_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ] {
        let result = run_search(fen, SearchOptions { max_depth: 4, ..Default::default() });
        let best_move = result.best_move.unwrap();

        assert!(legal_moves(fen).contains(&best_move), "illegal best move {best_move} for {fen}");
        assert_eq!(result.pv.first(), Some(best_move));
    }
}

#[test]
fn finds_a_mate_in_one() {
    let result = run_search("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", SearchOptions::default());

    assert!(Score::is_mate(result.score) && result.score > 0);
    assert_eq!(result.pv.len(), 1);
    assert_eq!(result.best_move.unwrap().to_string(), "a1a8");
}

#[test]
fn reports_a_checkmated_root() {
    let result = run_search("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1", SearchOptions::default());

    assert!(result.best_move.is_none());
    assert_eq!(result.score, Score::mated_in(0));
}

#[test]
fn reports_a_stalemated_root() {
    let result = run_search("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", SearchOptions::default());

    assert!(result.best_move.is_none());
    assert_eq!(result.score, Score::DRAW);
}

#[test]
fn guard_restores_the_board_on_drop() {
    let board = Board::from_fen(START_FEN).unwrap();
    let mut tt = TranspositionTable::new(16);
    let mut searcher = Searcher::new(board, SearchOptions::default(), &mut tt);

    let hash = searcher.board.hash();
    let mv = legal_moves(START_FEN)[0];

    {
        let node = searcher.apply(mv);
        assert_ne!(node.board.hash(), hash);
        assert_eq!(node.ply, 1);
    }

    assert_eq!(searcher.board.hash(), hash);
    assert_eq!(searcher.ply, 0);
}

/// Negamax without any pruning, mirroring the node semantics of the
/// engine search: check extension, quiescence dive at the horizon and
/// mate/stalemate scoring.
fn minimax(board: &mut Board, ply: usize, mut depth: i32) -> i32 {
    let in_check = board.in_check();
    if in_check {
        depth += 1;
    }
    if depth <= 0 {
        return quiescence(board);
    }

    let mut legal = 0;
    let mut best = -Score::INFINITY;

    for &mv in board.generate_moves(GenMask::ALL).iter() {
        if !board.is_legal(mv) {
            continue;
        }
        legal += 1;

        board.make_move(mv);
        best = best.max(-minimax(board, ply + 1, depth - 1));
        board.unmake_move();
    }

    if legal == 0 {
        return if in_check { Score::mated_in(ply) } else { Score::DRAW };
    }
    best
}

fn quiescence(board: &mut Board) -> i32 {
    let mut best = board.evaluate();

    for &mv in board.generate_moves(GenMask::NOISY).iter() {
        if !board.is_legal(mv) {
            continue;
        }

        board.make_move(mv);
        best = best.max(-quiescence(board));
        board.unmake_move();
    }

    best
}

#[test]
fn alpha_beta_equals_brute_force_minimax() {
    // Heuristic reductions change values, so they are disabled through
    // their configuration knobs; pruning alone must not.
    let options = SearchOptions {
        max_depth: 3,
        nmp_min_depth: i32::MAX,
        lmr_move_threshold: i32::MAX,
        ..Default::default()
    };

    for fen in [
        "8/2k5/8/8/5n2/8/1R4K1/8 w - - 0 1",
        "4k3/2r5/8/8/8/8/3N4/4K3 b - - 0 1",
        "8/8/8/3k4/8/3P4/3K4/8 w - - 0 1",
    ] {
        let mut board = Board::from_fen(fen).unwrap();
        let expected = minimax(&mut board, 0, 3);

        let mut tt = TranspositionTable::new(1 << 16);
        let mut searcher = Searcher::new(Board::from_fen(fen).unwrap(), options, &mut tt);
        let mut pv = Variation::new();
        let score = searcher.alpha_beta(-Score::INFINITY, Score::INFINITY, 3, &mut pv);

        assert_eq!(score, expected, "alpha-beta diverged from minimax on {fen}");
    }
}
