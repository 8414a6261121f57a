//! Helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Single-step targets (knight and king): every on-board square not
/// holding an ally.
#[inline]
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(piece) if piece.color == side => {}
            _ => out.push(ChessMove::new(from, to, &game_state.board)),
        }
    }
}

/// Sliding targets: each ray runs until the board edge or the first
/// occupied square, which is included only when it holds an enemy piece.
#[inline]
pub fn push_ray_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::new(from, to, &game_state.board)),
                Some(piece) => {
                    if piece.color != side {
                        out.push(ChessMove::new(from, to, &game_state.board));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

#[inline]
pub fn is_enemy(content: SquareContent, side: Color) -> bool {
    matches!(content, Some(piece) if piece.color != side)
}
