//! Canonical chess-rule constants.
//!
//! Static layout of the standard starting position plus the home squares
//! that castling rights are tied to.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;
/// Column of the rook that castles kingside.
pub const KINGSIDE_ROOK_COL: u8 = 7;
/// Column of the rook that castles queenside.
pub const QUEENSIDE_ROOK_COL: u8 = 0;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board of the standard starting position.
pub const fn starting_board() -> Board {
    let mut board: Board = [[None; 8]; 8];
    let mut col = 0usize;
    while col < 8 {
        board[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
        board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        board[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        col += 1;
    }
    board
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.home_row(), KING_HOME_COL)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::new(color.home_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::new(color.home_row(), QUEENSIDE_ROOK_COL)
}
