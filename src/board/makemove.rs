use super::Board;
use crate::types::{Color, Move, MoveKind, PieceType, Square};

impl Board {
    /// Applies a move to the board, pushing an undo record. A null move
    /// only flips the side to move and clears the en passant target.
    ///
    /// Every call must be paired with exactly one `unmake_move`.
    pub fn make_move(&mut self, mv: Move) {
        self.history.push(mv);
        self.undo_stack.push(self.state);

        self.state.hash ^= self.tables.zobrist.side;

        if self.state.en_passant != Square::None {
            self.state.hash ^= self.tables.zobrist.en_passant[self.state.en_passant as usize];
            self.state.en_passant = Square::None;
        }

        if mv.is_null() {
            self.side_to_move = !self.side_to_move;
            return;
        }

        let stm = self.side_to_move;
        let piece = mv.piece();

        self.state.hash ^= self.tables.zobrist.castling[self.state.castling.raw() as usize];

        if mv.is_capture() || piece == PieceType::Pawn {
            self.state.halfmove_clock = 0;
        } else {
            self.state.halfmove_clock += 1;
        }

        match mv.kind() {
            MoveKind::Quiet => {
                self.toggle(stm, piece, mv.from());
                self.toggle(stm, piece, mv.to());
            }
            MoveKind::DoublePush => {
                self.toggle(stm, PieceType::Pawn, mv.from());
                self.toggle(stm, PieceType::Pawn, mv.to());

                let skipped = Square::new((mv.from() as u8 + mv.to() as u8) / 2);
                self.state.en_passant = skipped;
                self.state.hash ^= self.tables.zobrist.en_passant[skipped as usize];
            }
            MoveKind::EnPassant => {
                self.toggle(stm, PieceType::Pawn, mv.from());
                self.toggle(stm, PieceType::Pawn, mv.to());
                self.toggle(!stm, PieceType::Pawn, mv.to().ep_pawn());
            }
            MoveKind::Capture => {
                self.toggle(!stm, mv.captured(), mv.to());
                self.toggle(stm, piece, mv.from());
                self.toggle(stm, piece, mv.to());
                self.state.castling.revoke_for_square(mv.to());
            }
            MoveKind::Promotion => {
                self.toggle(stm, PieceType::Pawn, mv.from());
                self.toggle(stm, mv.promotion_piece(), mv.to());
            }
            MoveKind::PromotionCapture => {
                self.toggle(!stm, mv.captured(), mv.to());
                self.toggle(stm, PieceType::Pawn, mv.from());
                self.toggle(stm, mv.promotion_piece(), mv.to());
                self.state.castling.revoke_for_square(mv.to());
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let (king_from, king_to, rook_from, rook_to) = castle_squares(stm, mv.kind());
                self.toggle(stm, PieceType::King, king_from);
                self.toggle(stm, PieceType::King, king_to);
                self.toggle(stm, PieceType::Rook, rook_from);
                self.toggle(stm, PieceType::Rook, rook_to);
            }
        }

        if piece == PieceType::King {
            self.state.castling.revoke(stm);
        } else if piece == PieceType::Rook {
            self.state.castling.revoke_for_square(mv.from());
        }

        self.state.hash ^= self.tables.zobrist.castling[self.state.castling.raw() as usize];
        self.side_to_move = !self.side_to_move;
    }

    /// Reverts the most recently applied move, restoring the position
    /// bit-identically. Calling it without a matching `make_move` is a
    /// contract violation.
    pub fn unmake_move(&mut self) {
        self.side_to_move = !self.side_to_move;

        let mv = self.history.pop().expect("unmake without a matching make");
        let stm = self.side_to_move;

        if !mv.is_null() {
            match mv.kind() {
                MoveKind::Quiet | MoveKind::DoublePush => {
                    self.toggle(stm, mv.piece(), mv.to());
                    self.toggle(stm, mv.piece(), mv.from());
                }
                MoveKind::EnPassant => {
                    self.toggle(stm, PieceType::Pawn, mv.to());
                    self.toggle(stm, PieceType::Pawn, mv.from());
                    self.toggle(!stm, PieceType::Pawn, mv.to().ep_pawn());
                }
                MoveKind::Capture => {
                    self.toggle(stm, mv.piece(), mv.to());
                    self.toggle(stm, mv.piece(), mv.from());
                    self.toggle(!stm, mv.captured(), mv.to());
                }
                MoveKind::Promotion => {
                    self.toggle(stm, mv.promotion_piece(), mv.to());
                    self.toggle(stm, PieceType::Pawn, mv.from());
                }
                MoveKind::PromotionCapture => {
                    self.toggle(stm, mv.promotion_piece(), mv.to());
                    self.toggle(stm, PieceType::Pawn, mv.from());
                    self.toggle(!stm, mv.captured(), mv.to());
                }
                MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                    let (king_from, king_to, rook_from, rook_to) = castle_squares(stm, mv.kind());
                    self.toggle(stm, PieceType::King, king_to);
                    self.toggle(stm, PieceType::King, king_from);
                    self.toggle(stm, PieceType::Rook, rook_to);
                    self.toggle(stm, PieceType::Rook, rook_from);
                }
            }
        }

        self.state = self.undo_stack.pop().expect("unmake without a matching make");
    }

    /// Returns `true` if the move does not leave the mover's own king in
    /// check, evaluated by trial application rather than pin analysis.
    pub fn is_legal(&mut self, mv: Move) -> bool {
        self.make_move(mv);
        let legal = !self.is_king_attacked(!self.side_to_move);
        self.unmake_move();

        legal
    }
}

const fn castle_squares(color: Color, kind: MoveKind) -> (Square, Square, Square, Square) {
    match (color, kind) {
        (Color::White, MoveKind::CastleKingside) => (Square::E1, Square::G1, Square::H1, Square::F1),
        (Color::White, MoveKind::CastleQueenside) => (Square::E1, Square::C1, Square::A1, Square::D1),
        (Color::Black, MoveKind::CastleKingside) => (Square::E8, Square::G8, Square::H8, Square::F8),
        (Color::Black, MoveKind::CastleQueenside) => (Square::E8, Square::C8, Square::A8, Square::D8),
        _ => panic!("not a castling move"),
    }
}
