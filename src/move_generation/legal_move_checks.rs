//! Attack queries built on pseudo-legal generation.
//!
//! The attacking side is always an explicit argument; the side to move is
//! never toggled to ask the question. Castling candidates are never part
//! of the scanned set, since castling legality is itself answered here.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_pseudo_legal_moves;

/// True when some pseudo-legal move of `attacker` ends on `square`.
///
/// Pawns only contribute diagonals that hold an enemy piece (or the
/// en-passant target), so an empty square covered only by a pawn is not
/// reported as attacked.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Color) -> bool {
    generate_pseudo_legal_moves(game_state, attacker)
        .iter()
        .any(|mv| mv.end == square)
}

/// True when the side to move's king is attacked by the opponent.
pub fn in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}
