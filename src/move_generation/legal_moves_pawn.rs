//! Pawn advances, captures and en-passant captures.
//!
//! Diagonal moves are only emitted onto an enemy piece or the en-passant
//! target, so an empty diagonal is never reported as pawn-attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_enemy;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{pawn_direction, pawn_start_row, PAWN_CAPTURE_COLS};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    side: Color,
    out: &mut Vec<ChessMove>,
) {
    let forward = pawn_direction(side);

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.piece_at(one_step).is_none() {
            out.push(ChessMove::new(from, one_step, &game_state.board));

            if from.row == pawn_start_row(side) {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(ChessMove::new(from, two_step, &game_state.board));
                    }
                }
            }
        }
    }

    for d_col in PAWN_CAPTURE_COLS {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if is_enemy(game_state.piece_at(to), side) {
            out.push(ChessMove::new(from, to, &game_state.board));
        } else if game_state.en_passant_target == Some(to) {
            out.push(ChessMove::en_passant(from, to, &game_state.board));
        }
    }
}
