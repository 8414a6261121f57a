//! King steps. Castling is not produced here: it depends on attack queries,
//! which are themselves built on pseudo-legal generation, so it is added by
//! the legal-move filter instead.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    push_step_moves(game_state, from, side, &KING_OFFSETS, out);
}
