use super::random::Random;
use crate::types::{CastlingRights, PieceType, Square};

/// The sets of random numbers used to produce an *almost* unique hash
/// value for a position.
///
/// See [Zobrist Hashing](https://en.wikipedia.org/wiki/Zobrist_hashing) for more information.
pub struct Zobrist {
    pub pieces: [[[u64; Square::NUM]; PieceType::NUM]; 2],
    pub en_passant: [u64; Square::NUM],
    pub castling: [u64; CastlingRights::NUM],
    pub side: u64,
}

impl Zobrist {
    pub(super) fn new(rng: &mut Random) -> Self {
        let mut pieces = [[[0; Square::NUM]; PieceType::NUM]; 2];
        for side in pieces.iter_mut() {
            for piece in side.iter_mut() {
                *piece = rng.array();
            }
        }

        Self {
            pieces,
            en_passant: rng.array(),
            castling: rng.array(),
            side: rng.next_u64(),
        }
    }
}
