use anyhow::Context;
use clap::{Parser, Subcommand};

use restless::{
    board::{Board, START_FEN},
    perft,
    search::{SearchOptions, Searcher},
    transposition::{TranspositionTable, DEFAULT_TT_ENTRIES},
};

#[derive(Parser)]
#[command(version, about = "A bitboard chess engine with an iterative-deepening alpha-beta search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a position, reporting the best line per completed depth
    Search {
        /// The position to search, in FEN notation
        #[arg(default_value = START_FEN)]
        fen: String,

        /// The highest iterative-deepening depth
        #[arg(long, default_value_t = 6)]
        depth: i32,

        /// The number of transposition table slots
        #[arg(long, default_value_t = DEFAULT_TT_ENTRIES)]
        tt_entries: usize,

        /// The smallest remaining depth at which a null move is tried
        #[arg(long, default_value_t = 3)]
        nmp_depth: i32,

        /// The depth reduction of the null move search
        #[arg(long, default_value_t = 2)]
        nmp_reduction: i32,

        /// The number of legal moves tried before late move reduction applies
        #[arg(long, default_value_t = 4)]
        lmr_threshold: i32,

        /// The smallest remaining depth at which late move reduction applies
        #[arg(long, default_value_t = 3)]
        lmr_depth: i32,
    },
    /// Count the leaf nodes reachable at a fixed depth, split by move kind
    Perft {
        /// The depth to enumerate to
        depth: u32,

        /// The position to enumerate from, in FEN notation
        #[arg(default_value = START_FEN)]
        fen: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Search { fen, depth, tt_entries, nmp_depth, nmp_reduction, lmr_threshold, lmr_depth } => {
            let board = Board::from_fen(&fen).with_context(|| format!("invalid FEN '{fen}'"))?;
            println!("{board}");

            let options = SearchOptions {
                max_depth: depth,
                nmp_min_depth: nmp_depth,
                nmp_reduction,
                lmr_move_threshold: lmr_threshold,
                lmr_min_depth: lmr_depth,
            };

            let mut tt = TranspositionTable::new(tt_entries);
            Searcher::new(board, options, &mut tt).run();
        }
        Command::Perft { depth, fen } => {
            let mut board = Board::from_fen(&fen).with_context(|| format!("invalid FEN '{fen}'"))?;
            perft::divide(&mut board, depth);
        }
    }

    Ok(())
}
