//! Precomputed attack tables and Zobrist keys, built deterministically
//! once at startup and shared read-only by the board and the search.

use std::sync::OnceLock;
use std::time::Instant;

use crate::types::{Bitboard, Color, Square};

mod attacks;
mod magics;
mod random;
mod zobrist;

use magics::SliderAttacks;
use random::Random;
pub use zobrist::Zobrist;

/// The number of index bits of the rook attack tables.
const ROOK_BITS: u32 = 12;

/// The number of index bits of the bishop attack tables.
const BISHOP_BITS: u32 = 9;

/// The read-only lookup data of the engine: king and knight step masks,
/// magic-indexed slider attack sets and the Zobrist key sets.
pub struct Tables {
    king: [Bitboard; Square::NUM],
    knight: [Bitboard; Square::NUM],
    rooks: SliderAttacks,
    bishops: SliderAttacks,
    pub zobrist: Zobrist,
}

impl Tables {
    pub fn new() -> Self {
        let now = Instant::now();
        let mut rng = Random::new();

        let zobrist = Zobrist::new(&mut rng);

        let mut king = [Bitboard::EMPTY; Square::NUM];
        let mut knight = [Bitboard::EMPTY; Square::NUM];
        for square in 0..Square::NUM as u8 {
            king[square as usize] = Bitboard(attacks::king_attacks(square));
            knight[square as usize] = Bitboard(attacks::knight_attacks(square));
        }

        let rooks = SliderAttacks::build(ROOK_BITS, &attacks::ROOK_DIRECTIONS, &mut rng);
        let bishops = SliderAttacks::build(BISHOP_BITS, &attacks::BISHOP_DIRECTIONS, &mut rng);

        log::debug!("lookup tables built in {:?}", now.elapsed());

        Self { king, knight, rooks, bishops, zobrist }
    }

    pub fn king_attacks(&self, square: Square) -> Bitboard {
        self.king[square as usize]
    }

    pub fn knight_attacks(&self, square: Square) -> Bitboard {
        self.knight[square as usize]
    }

    pub fn rook_attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        self.rooks.attacks(square, occupancies)
    }

    pub fn bishop_attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        self.bishops.attacks(square, occupancies)
    }

    pub fn queen_attacks(&self, square: Square, occupancies: Bitboard) -> Bitboard {
        self.rook_attacks(square, occupancies) | self.bishop_attacks(square, occupancies)
    }

    /// The pawn attack set of a pawn of `color` on `square`, derived by
    /// diagonal steps clipped at the board edges.
    pub fn pawn_attacks(&self, square: Square, color: Color) -> Bitboard {
        let bitboard = square.to_bb();
        match color {
            Color::White => {
                (bitboard & !Bitboard::FILE_A).shift(7) | (bitboard & !Bitboard::FILE_H).shift(9)
            }
            Color::Black => {
                (bitboard & !Bitboard::FILE_H).shift(-7) | (bitboard & !Bitboard::FILE_A).shift(-9)
            }
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide lookup tables, built on first use.
pub fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(Tables::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaper_step_masks() {
        let tables = tables();

        assert_eq!(tables.knight_attacks(Square::A1), Square::B3.to_bb() | Square::C2.to_bb());
        assert_eq!(
            tables.king_attacks(Square::H1),
            Square::G1.to_bb() | Square::G2.to_bb() | Square::H2.to_bb()
        );
        assert_eq!(tables.king_attacks(Square::E4).len(), 8);
        assert_eq!(tables.knight_attacks(Square::D4).len(), 8);
    }

    #[test]
    fn magic_lookups_match_ray_walks() {
        let tables = tables();
        let mut rng = Random::new();

        for _ in 0..2000 {
            let square = (rng.next_u64() % 64) as u8;
            let occupancies = rng.next_u64() & rng.next_u64();

            let rook = tables.rook_attacks(Square::new(square), Bitboard(occupancies));
            let bishop = tables.bishop_attacks(Square::new(square), Bitboard(occupancies));

            assert_eq!(rook.0, attacks::sliding_attacks(square, occupancies, &attacks::ROOK_DIRECTIONS));
            assert_eq!(bishop.0, attacks::sliding_attacks(square, occupancies, &attacks::BISHOP_DIRECTIONS));
        }
    }

    #[test]
    fn pawn_attack_edges_are_clipped() {
        let tables = tables();

        assert_eq!(tables.pawn_attacks(Square::A2, Color::White), Square::B3.to_bb());
        assert_eq!(tables.pawn_attacks(Square::H7, Color::Black), Square::G6.to_bb());
        assert_eq!(
            tables.pawn_attacks(Square::E4, Color::White),
            Square::D5.to_bb() | Square::F5.to_bb()
        );
    }
}
