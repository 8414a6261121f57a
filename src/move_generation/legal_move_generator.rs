//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal candidates, appends castling, then applies each
//! candidate, rejects those that leave the mover's king attacked, and undoes
//! it again. The surviving list also decides checkmate and stalemate.

use log::debug;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::ChessMove;

/// Legal moves for the side to move. Refreshes the checkmate and stalemate
/// flags; the position itself is left exactly as it was.
pub fn legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;

    let mut candidates = generate_pseudo_legal_moves(game_state, side);
    generate_castle_moves(game_state, side, &mut candidates);

    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        apply_move(game_state, mv);
        let exposes_king = is_king_in_check(game_state, side);
        undo_move(game_state);

        if !exposes_king {
            legal.push(mv);
        }
    }

    if legal.is_empty() {
        let checked = is_king_in_check(game_state, side);
        game_state.check_mate = checked;
        game_state.stale_mate = !checked;
        debug!(
            "{side:?} has no legal moves: {}",
            if checked { "checkmate" } else { "stalemate" }
        );
    } else {
        game_state.check_mate = false;
        game_state.stale_mate = false;
    }

    legal
}

/// Castling candidates for `side`. None are produced while the king is
/// attacked; each side additionally needs its right, empty squares up to
/// the rook, and unattacked transit and destination squares.
pub fn generate_castle_moves(game_state: &GameState, side: Color, out: &mut Vec<ChessMove>) {
    let king = game_state.king_square(side);
    let enemy = side.opposite();
    if is_square_attacked(game_state, king, enemy) {
        return;
    }

    let rights = game_state.castle_rights;
    if rights.kingside(side) {
        push_castle(game_state, king, enemy, &[1, 2], &[1, 2], out);
    }
    if rights.queenside(side) {
        push_castle(game_state, king, enemy, &[-1, -2, -3], &[-1, -2], out);
    }
}

fn push_castle(
    game_state: &GameState,
    king: Square,
    enemy: Color,
    must_be_empty: &[i8],
    must_be_safe: &[i8],
    out: &mut Vec<ChessMove>,
) {
    for &d_col in must_be_empty {
        match king.offset(0, d_col) {
            Some(square) if game_state.piece_at(square).is_none() => {}
            _ => return,
        }
    }
    for &d_col in must_be_safe {
        match king.offset(0, d_col) {
            Some(square) if !is_square_attacked(game_state, square, enemy) => {}
            _ => return,
        }
    }
    // The last safe square is the king's destination.
    let Some(&step) = must_be_safe.last() else {
        return;
    };
    if let Some(destination) = king.offset(0, step) {
        out.push(ChessMove::castle(king, destination, &game_state.board));
    }
}
