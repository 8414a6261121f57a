use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

/// Union of the rook and bishop rays.
pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_rook_moves(game_state, from, side, out);
    generate_bishop_moves(game_state, from, side, out);
}
