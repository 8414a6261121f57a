//! FEN-to-GameState parser.
//!
//! Reads the placement, side-to-move, castling and en-passant fields. The
//! halfmove and fullmove counters are optional and ignored, since the rules
//! engine keeps no clocks.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for counter in parts.by_ref().take(2) {
        counter
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid move counter {counter:?}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castle_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;

    GameState::from_parts(board, side_to_move, castle_rights, en_passant_target)
}

fn invalid(reason: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFen(reason.into())
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board: Board = [[None; 8]; 8];
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count {ch:?}")));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(invalid(format!("rank {rank_str:?} has too many files")));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character {ch:?}")))?;
            if col >= 8 {
                return Err(invalid(format!("rank {rank_str:?} has too many files")));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!("rank {rank_str:?} does not cover 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side to move {side_part:?}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastleRights, ChessErrors> {
    let mut rights = CastleRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid(format!("invalid castling character {ch:?}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("invalid en-passant square {en_passant_part:?}")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn starting_fen_matches_new_game() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state, GameState::new_game());
    }

    #[test]
    fn side_rights_and_en_passant_are_read() {
        let game_state = parse_fen("4k3/8/8/3pP3/8/8/8/R3K3 w Q d6").expect("FEN should parse");
        assert_eq!(game_state.side_to_move(), Color::White);
        assert_eq!(game_state.en_passant_target(), Some(Square::new(2, 3)));
        assert!(game_state.castle_rights().queenside(Color::White));
        assert!(!game_state.castle_rights().kingside(Color::White));
        assert_eq!(
            game_state.piece_at(Square::new(3, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn malformed_fields_are_rejected() {
        for bad in [
            "",
            "8/8/8/8/8/8/8 w - -",
            "4k3/8/8/8/8/8/8/4K3 x - -",
            "4k3/8/8/8/8/8/8/4K3 w X -",
            "4k3/8/8/8/8/8/8/4K3 w - z9",
            "4k3/8/8/8/8/8/8/4K2 w - -",
            "4k3/8/8/8/8/8/8/4K4 w - -",
            "4k3/8/8/8/8/8/8/4X3 w - -",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessErrors::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_king_surfaces_from_construction() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::KingCount {
                color: Color::Black,
                count: 0
            })
        );
    }
}
