use super::Board;
use crate::types::{Bitboard, Color, Move, MoveList, PieceType, Square};

/// Selects the categories of pseudo legal moves to generate.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct GenMask(u8);

impl GenMask {
    /// Non-capturing pushes and steps, plus castling.
    pub const QUIET: Self = Self(0b01);
    /// Captures, en passant and promotions.
    pub const NOISY: Self = Self(0b10);
    pub const ALL: Self = Self(0b11);

    const fn includes(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Board {
    /// Generates pseudo legal moves of the requested categories for the
    /// side to move. Self-check is not filtered here; callers probe
    /// candidates with `is_legal`.
    pub fn generate_moves(&self, mask: GenMask) -> MoveList {
        let mut list = MoveList::new();

        if mask.includes(GenMask::NOISY) {
            self.collect_pawn_captures(&mut list);
            self.collect_quiet_promotions(&mut list);
            self.collect_steppers(&mut list, PieceType::Knight, true);
            self.collect_sliders(&mut list, true);
            self.collect_steppers(&mut list, PieceType::King, true);
        }

        if mask.includes(GenMask::QUIET) {
            self.collect_pawn_pushes(&mut list);
            self.collect_steppers(&mut list, PieceType::Knight, false);
            self.collect_sliders(&mut list, false);
            self.collect_steppers(&mut list, PieceType::King, false);
            self.collect_castles(&mut list);
        }

        list
    }

    /// Adds pawn captures, en passant and capturing promotions, batched
    /// per diagonal by shifting the whole pawn set.
    fn collect_pawn_captures(&self, list: &mut MoveList) {
        let pawns = self.our(PieceType::Pawn);
        let up = self.side_to_move.offset();

        let mut targets = self.them();
        if self.state.en_passant != Square::None {
            targets |= self.state.en_passant.to_bb();
        }

        let back_rank = match self.side_to_move {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        };

        for (shift, edge) in [(up - 1, Bitboard::FILE_A), (up + 1, Bitboard::FILE_H)] {
            let attacks = (pawns & !edge).shift(shift) & targets;

            for to in attacks {
                let from = to.shift(-shift);

                if back_rank.contains(to) {
                    let captured = self.piece_at(to);
                    for promotion in PieceType::PROMOTIONS {
                        list.push(Move::promotion_capture(from, to, promotion, captured));
                    }
                } else if to == self.state.en_passant {
                    list.push(Move::en_passant(from, to));
                } else {
                    list.push(Move::capture(from, to, PieceType::Pawn, self.piece_at(to)));
                }
            }
        }
    }

    /// Adds single and double pawn pushes. Pushes onto the back rank are
    /// promotions and belong to the noisy category instead.
    fn collect_pawn_pushes(&self, list: &mut MoveList) {
        let up = self.side_to_move.offset();
        let empty = !self.occupied;

        let (back_rank, double_rank) = match self.side_to_move {
            Color::White => (Bitboard::RANK_8, Bitboard::RANK_3),
            Color::Black => (Bitboard::RANK_1, Bitboard::RANK_6),
        };

        let singles = self.our(PieceType::Pawn).shift(up) & !back_rank & empty;
        let doubles = (singles & double_rank).shift(up) & empty;

        for to in singles {
            list.push(Move::quiet(to.shift(-up), to, PieceType::Pawn));
        }
        for to in doubles {
            list.push(Move::double_push(to.shift(-up * 2), to));
        }
    }

    fn collect_quiet_promotions(&self, list: &mut MoveList) {
        let up = self.side_to_move.offset();

        let back_rank = match self.side_to_move {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        };

        let promotions = self.our(PieceType::Pawn).shift(up) & back_rank & !self.occupied;

        for to in promotions {
            let from = to.shift(-up);
            for promotion in PieceType::PROMOTIONS {
                list.push(Move::promotion(from, to, promotion));
            }
        }
    }

    /// Adds knight or king moves from the step tables.
    fn collect_steppers(&self, list: &mut MoveList, piece: PieceType, captures: bool) {
        for from in self.our(piece) {
            let steps = match piece {
                PieceType::Knight => self.tables.knight_attacks(from),
                _ => self.tables.king_attacks(from),
            };

            self.collect_targets(list, from, piece, steps, captures);
        }
    }

    /// Adds rook, queen and bishop moves from the magic attack tables.
    fn collect_sliders(&self, list: &mut MoveList, captures: bool) {
        for piece in [PieceType::Rook, PieceType::Queen, PieceType::Bishop] {
            for from in self.our(piece) {
                let rays = match piece {
                    PieceType::Rook => self.tables.rook_attacks(from, self.occupied),
                    PieceType::Queen => self.tables.queen_attacks(from, self.occupied),
                    _ => self.tables.bishop_attacks(from, self.occupied),
                };

                self.collect_targets(list, from, piece, rays, captures);
            }
        }
    }

    fn collect_targets(
        &self, list: &mut MoveList, from: Square, piece: PieceType, attacks: Bitboard, captures: bool,
    ) {
        if captures {
            for to in attacks & self.them() {
                list.push(Move::capture(from, to, piece, self.piece_at(to)));
            }
        } else {
            for to in attacks & !self.occupied {
                list.push(Move::quiet(from, to, piece));
            }
        }
    }

    /// Adds the castling moves that are still allowed: the rights flag is
    /// set, the squares between king and rook are empty, and none of the
    /// three squares the king stands on or transits is attacked.
    fn collect_castles(&self, list: &mut MoveList) {
        let stm = self.side_to_move;
        let enemy = !stm;

        let (kingside_path, kingside_transit) = match stm {
            Color::White => (Bitboard(0x60), [Square::E1, Square::F1, Square::G1]),
            Color::Black => (Bitboard(0x6000_0000_0000_0000), [Square::E8, Square::F8, Square::G8]),
        };

        if self.state.castling.kingside(stm)
            && (self.occupied & kingside_path).is_empty()
            && !kingside_transit.iter().any(|&sq| self.is_square_attacked(enemy, sq))
        {
            list.push(Move::castle_kingside());
        }

        let (queenside_path, queenside_transit) = match stm {
            Color::White => (Bitboard(0x0E), [Square::E1, Square::D1, Square::C1]),
            Color::Black => (Bitboard(0x0E00_0000_0000_0000), [Square::E8, Square::D8, Square::C8]),
        };

        if self.state.castling.queenside(stm)
            && (self.occupied & queenside_path).is_empty()
            && !queenside_transit.iter().any(|&sq| self.is_square_attacked(enemy, sq))
        {
            list.push(Move::castle_queenside());
        }
    }
}
