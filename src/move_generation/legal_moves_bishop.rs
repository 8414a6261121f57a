use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    push_ray_moves(game_state, from, side, &BISHOP_DIRECTIONS, out);
}
