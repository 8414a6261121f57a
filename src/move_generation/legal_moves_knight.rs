use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    push_step_moves(game_state, from, side, &KNIGHT_OFFSETS, out);
}
