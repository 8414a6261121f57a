//! Coordinate move text such as `e2e4` or `e7e8q`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

/// A move request parsed from text, before it is matched against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub start: Square,
    pub end: Square,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(text: &str) -> Result<MoveRequest, ChessErrors> {
    let invalid = || ChessErrors::InvalidLongAlgebraic(text.to_owned());
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let start = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let end = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(invalid)?),
    };

    Ok(MoveRequest {
        start,
        end,
        promotion,
    })
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_long_algebraic, MoveRequest};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{PieceKind, Square};

    #[test]
    fn plain_move_parses() {
        assert_eq!(
            parse_long_algebraic("e2e4"),
            Ok(MoveRequest {
                start: Square::new(6, 4),
                end: Square::new(4, 4),
                promotion: None,
            })
        );
    }

    #[test]
    fn promotion_suffix_parses_in_either_case() {
        let lower = parse_long_algebraic("a7a8n").expect("promotion should parse");
        assert_eq!(lower.promotion, Some(PieceKind::Knight));
        let upper = parse_long_algebraic("h2h1Q").expect("promotion should parse");
        assert_eq!(upper.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn malformed_text_is_rejected() {
        for bad in ["e2", "e2e9", "e2e4k", "e2e4qq", "é2e4"] {
            assert_eq!(
                parse_long_algebraic(bad),
                Err(ChessErrors::InvalidLongAlgebraic(bad.to_owned()))
            );
        }
    }
}
