//! Material counter for display. Kings are not counted.

use crate::game_state::chess_types::*;

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

pub fn material_for_color(board: &Board, color: Color) -> i32 {
    board
        .iter()
        .flatten()
        .flatten()
        .filter(|piece| piece.color == color)
        .map(|piece| piece_value(piece.kind))
        .sum()
}

/// White material minus Black material.
pub fn material_balance(board: &Board) -> i32 {
    material_for_color(board, Color::White) - material_for_color(board, Color::Black)
}
