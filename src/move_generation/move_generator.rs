//! Pseudo-legal move enumeration and the generator seam used by perft.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

/// Every move for `side` that obeys per-piece movement rules, ignoring
/// self-check and castling.
pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (row, rank) in game_state.board.iter().enumerate() {
        for (col, content) in rank.iter().enumerate() {
            let Some(piece) = content else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            let from = Square::new(row as u8, col as u8);
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, from, side, &mut out),
                PieceKind::Knight => generate_knight_moves(game_state, from, side, &mut out),
                PieceKind::Bishop => generate_bishop_moves(game_state, from, side, &mut out),
                PieceKind::Rook => generate_rook_moves(game_state, from, side, &mut out),
                PieceKind::Queen => generate_queen_moves(game_state, from, side, &mut out),
                PieceKind::King => generate_king_moves(game_state, from, side, &mut out),
            }
        }
    }
    out
}

pub trait MoveGenerator {
    /// Moves for the side to move. The state is borrowed mutably because
    /// legality is tested by applying and undoing each candidate; it is
    /// returned unchanged apart from the refreshed terminal flags.
    fn generate_moves(&self, game_state: &mut GameState) -> Vec<ChessMove>;
}

/// Fully legal moves, castling included.
pub struct LegalMoveGenerator;

/// Per-piece moves only: no castling, no self-check filter.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        legal_moves(game_state)
    }
}

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &mut GameState) -> Vec<ChessMove> {
        let side = game_state.side_to_move;
        generate_pseudo_legal_moves(game_state, side)
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_pseudo_legal_moves, MoveGenerator, PseudoLegalMoveGenerator};
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn start_position_has_twenty_pseudo_legal_moves_per_side() {
        let mut game = GameState::new_game();
        assert_eq!(generate_pseudo_legal_moves(&game, Color::White).len(), 20);
        assert_eq!(generate_pseudo_legal_moves(&game, Color::Black).len(), 20);
        assert_eq!(PseudoLegalMoveGenerator.generate_moves(&mut game).len(), 20);
    }

    #[test]
    fn rays_stop_at_first_occupied_square() {
        // Rook a1, own pawn a4, enemy knight d1.
        let game = GameState::from_fen("4k3/8/8/8/P7/8/8/R2n3K w - - 0 1").expect("FEN");
        let mut rook_targets: Vec<String> = generate_pseudo_legal_moves(&game, Color::White)
            .into_iter()
            .filter(|m| m.start == Square::new(7, 0))
            .map(|m| m.notation())
            .collect();
        rook_targets.sort();
        assert_eq!(rook_targets, ["a1a2", "a1a3", "a1b1", "a1c1", "a1d1"]);
    }

    #[test]
    fn queen_is_union_of_rook_and_bishop() {
        let game = GameState::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN");
        let queen_moves = generate_pseudo_legal_moves(&game, Color::White)
            .into_iter()
            .filter(|m| m.start == Square::new(4, 3))
            .count();
        // 14 orthogonal + 13 diagonal from d4.
        assert_eq!(queen_moves, 27);
    }

    #[test]
    fn knights_and_kings_skip_allied_squares() {
        let game = GameState::new_game();
        let knight_moves: Vec<String> = generate_pseudo_legal_moves(&game, Color::White)
            .into_iter()
            .filter(|m| m.moved_kind() == Some(PieceKind::Knight))
            .map(|m| m.notation())
            .collect();
        assert_eq!(knight_moves.len(), 4);
        assert!(generate_pseudo_legal_moves(&game, Color::White)
            .iter()
            .all(|m| m.moved_kind() != Some(PieceKind::King)));
    }
}
