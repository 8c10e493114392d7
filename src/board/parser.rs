use super::Board;
use crate::types::{Color, PieceType, Square};

/// The ways a FEN string can fail to parse. The parser is not strict
/// beyond these: text that passes still produces an unspecified position
/// when it does not describe a legal one.
#[derive(Debug, thiserror::Error)]
pub enum ParseFenError {
    #[error("missing placement data")]
    MissingPlacementData,
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("missing or invalid active color")]
    InvalidActiveColor,
    #[error("invalid en passant target '{0}'")]
    InvalidEnPassant(String),
}

impl Board {
    /// Parses a [Forsyth–Edwards Notation][fen] string into a `Board`.
    ///
    /// [fen]: https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation
    pub fn from_fen(fen: &str) -> Result<Self, ParseFenError> {
        let mut board = Self::empty();
        let mut parts = fen.split_whitespace();

        let placement = parts.next().ok_or(ParseFenError::MissingPlacementData)?;

        for (rank, row) in placement.split('/').rev().enumerate() {
            let mut file = 0u32;

            for symbol in row.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    file += skip;
                    continue;
                }

                let color = if symbol.is_ascii_uppercase() { Color::White } else { Color::Black };
                let piece = match symbol.to_ascii_lowercase() {
                    'p' => PieceType::Pawn,
                    'n' => PieceType::Knight,
                    'b' => PieceType::Bishop,
                    'r' => PieceType::Rook,
                    'q' => PieceType::Queen,
                    'k' => PieceType::King,
                    _ => return Err(ParseFenError::InvalidPiece(symbol)),
                };

                if rank < 8 && file < 8 {
                    board.toggle(color, piece, Square::from_rank_file(rank as u8, file as u8));
                }
                file += 1;
            }
        }

        board.side_to_move = match parts.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            _ => return Err(ParseFenError::InvalidActiveColor),
        };

        for right in parts.next().unwrap_or("-").chars() {
            match right {
                'K' => board.state.castling.allow_kingside(Color::White),
                'Q' => board.state.castling.allow_queenside(Color::White),
                'k' => board.state.castling.allow_kingside(Color::Black),
                'q' => board.state.castling.allow_queenside(Color::Black),
                _ => (),
            }
        }

        board.state.en_passant = match parts.next() {
            None | Some("-") => Square::None,
            Some(text) => {
                text.try_into().map_err(|()| ParseFenError::InvalidEnPassant(text.to_string()))?
            }
        };

        board.state.halfmove_clock = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
        board.fullmove_number = parts.next().and_then(|v| v.parse().ok()).unwrap_or(1);

        board.state.hash = board.compute_hash();

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let square = Square::from_rank_file(rank, file);

                if let Some(piece) = self.piece_of(Color::White, square) {
                    write!(f, "{} ", piece.to_string().to_ascii_uppercase())?;
                } else if let Some(piece) = self.piece_of(Color::Black, square) {
                    write!(f, "{piece} ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }

        if self.state.en_passant != Square::None {
            writeln!(f, "en passant: {}", self.state.en_passant)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START_FEN;
    use crate::types::Bitboard;

    #[test]
    fn parses_the_starting_position() {
        let board = Board::from_fen(START_FEN).unwrap();

        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.pieces(Color::White, PieceType::Pawn), Bitboard(0xFF00));
        assert_eq!(board.pieces(Color::Black, PieceType::King), Square::E8.to_bb());
        assert_eq!(board.occupied().len(), 32);
        assert!(board.castling().kingside(Color::White) && board.castling().queenside(Color::Black));
        assert_eq!(board.en_passant(), Square::None);
        assert_eq!(board.hash(), board.compute_hash());
    }

    #[test]
    fn parses_en_passant_and_counters() {
        let board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 3 2")
            .unwrap();

        assert_eq!(board.en_passant(), Square::D6);
        assert_eq!(board.halfmove_clock(), 3);
        assert_eq!(board.fullmove_number(), 2);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(Board::from_fen("").is_err());
        assert!(Board::from_fen("8/8/8/8/8/8/8/8 x - -").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq zz").is_err());
        assert!(Board::from_fen("rnbqkbn?/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
    }
}
