//! Reversible state transitions.
//!
//! `apply_move` and `undo_move` are exact inverses: after
//! `apply_move(s, m); undo_move(s)` the board, side to move, king cache,
//! castle rights and en-passant target all equal their prior values. The
//! legal-move filter depends on this for every candidate it simulates.

use log::trace;

use crate::game_state::chess_rules::{kingside_rook_home, queenside_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Apply `mv` without any legality check.
pub fn apply_move(game_state: &mut GameState, mv: ChessMove) {
    trace!("apply {mv}");

    set_square(game_state, mv.start, None);
    set_square(game_state, mv.end, mv.piece_moved);
    game_state.move_log.push(mv);
    game_state.side_to_move = game_state.side_to_move.opposite();

    if let Some(Piece {
        color,
        kind: PieceKind::King,
    }) = mv.piece_moved
    {
        game_state.king_locations[color.index()] = mv.end;
    }

    if mv.is_promotion {
        if let Some(moved) = mv.piece_moved {
            set_square(
                game_state,
                mv.end,
                Some(Piece::new(moved.color, mv.promotion_choice())),
            );
        }
    }

    if mv.is_en_passant {
        set_square(game_state, Square::new(mv.start.row, mv.end.col), None);
    }

    game_state.en_passant_target = if mv.moved_kind() == Some(PieceKind::Pawn)
        && mv.start.row.abs_diff(mv.end.row) == 2
    {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
    } else {
        None
    };
    game_state.en_passant_history.push(game_state.en_passant_target);

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_from);
        set_square(game_state, rook_to, rook);
        set_square(game_state, rook_from, None);
    }

    update_castle_rights(game_state, &mv);
    game_state.castle_rights_history.push(game_state.castle_rights);
}

/// Reverse the most recent move. Returns `None` (and changes nothing) when
/// the log is empty.
pub fn undo_move(game_state: &mut GameState) -> Option<ChessMove> {
    let mv = game_state.move_log.pop()?;
    trace!("undo {mv}");

    // Restoring the moved piece also reverses a promotion.
    set_square(game_state, mv.start, mv.piece_moved);
    set_square(game_state, mv.end, mv.piece_captured);
    game_state.side_to_move = game_state.side_to_move.opposite();

    if let Some(Piece {
        color,
        kind: PieceKind::King,
    }) = mv.piece_moved
    {
        game_state.king_locations[color.index()] = mv.start;
    }

    if mv.is_en_passant {
        set_square(game_state, mv.end, None);
        set_square(
            game_state,
            Square::new(mv.start.row, mv.end.col),
            mv.piece_captured,
        );
    }

    game_state.en_passant_history.pop();
    game_state.en_passant_target = game_state.en_passant_history.last().copied().flatten();

    game_state.castle_rights_history.pop();
    if let Some(rights) = game_state.castle_rights_history.last() {
        game_state.castle_rights = *rights;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        set_square(game_state, rook_from, rook);
        set_square(game_state, rook_to, None);
    }

    game_state.check_mate = false;
    game_state.stale_mate = false;

    Some(mv)
}

#[inline]
fn set_square(game_state: &mut GameState, square: Square, content: SquareContent) {
    game_state.board[square.row as usize][square.col as usize] = content;
}

/// Rook origin and destination for a castling king move: kingside the rook
/// jumps from three files right of the king's start to one file right,
/// queenside from four files left to one file left.
fn castle_rook_squares(mv: &ChessMove) -> (Square, Square) {
    let row = mv.start.row;
    if mv.end.col > mv.start.col {
        (
            Square::new(row, mv.start.col + 3),
            Square::new(row, mv.start.col + 1),
        )
    } else {
        (
            Square::new(row, mv.start.col - 4),
            Square::new(row, mv.start.col - 1),
        )
    }
}

/// Rights are lost by moving the king (both sides) or moving a rook off its
/// home square (that side). Beyond those two rules, a rook captured on its
/// home square also clears that side's right, so a later castle can never
/// relocate the capturing piece as if it were the rook.
fn update_castle_rights(game_state: &mut GameState, mv: &ChessMove) {
    let rights = &mut game_state.castle_rights;

    if let Some(moved) = mv.piece_moved {
        match moved.kind {
            PieceKind::King => rights.clear_both(moved.color),
            PieceKind::Rook => {
                if mv.start == kingside_rook_home(moved.color) {
                    rights.clear_kingside(moved.color);
                } else if mv.start == queenside_rook_home(moved.color) {
                    rights.clear_queenside(moved.color);
                }
            }
            _ => {}
        }
    }

    // A rook captured on its home square takes its right with it.
    if let Some(Piece {
        color,
        kind: PieceKind::Rook,
    }) = mv.piece_captured
    {
        if mv.end == kingside_rook_home(color) {
            rights.clear_kingside(color);
        } else if mv.end == queenside_rook_home(color) {
            rights.clear_queenside(color);
        }
    }
}
