use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    push_ray_moves(game_state, from, side, &ROOK_DIRECTIONS, out);
}
