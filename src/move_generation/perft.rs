//! Move-path enumeration for validating the generator.
//!
//! Walks the tree with apply/undo on a single state. Promotions are
//! counted once because the promotion piece is a caller choice rather
//! than a separate generated move.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of the legal-move tree `depth` plies deep.
pub fn perft(game_state: &mut GameState, depth: u8) -> u64 {
    perft_with(&LegalMoveGenerator, game_state, depth)
}

pub fn perft_with<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        apply_move(game_state, mv);
        nodes += perft_with(generator, game_state, depth - 1);
        undo_move(game_state);
    }
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = legal_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        apply_move(game_state, mv);
        let nodes = perft(game_state, depth - 1);
        undo_move(game_state);
        out.push((mv, nodes));
    }
    out
}

/// Leaf count plus move-kind tallies of the final ply. Every leaf is
/// applied to classify checks and mates, so this is far slower than
/// [`perft`].
pub fn perft_detailed(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(game_state) {
        apply_move(game_state, mv);
        if depth == 1 {
            total.merge(classify_leaf(game_state, &mv));
        } else {
            total.merge(perft_detailed(game_state, depth - 1));
        }
        undo_move(game_state);
    }
    total
}

fn classify_leaf(game_after_move: &mut GameState, mv: &ChessMove) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle {
        counts.castles += 1;
    }
    if mv.is_promotion {
        counts.promotions += 1;
    }
    if in_check(game_after_move) {
        counts.checks += 1;
        if legal_moves(game_after_move).is_empty() {
            counts.checkmates += 1;
        }
    }
    counts
}

// Reference counts from https://www.chessprogramming.org/Perft_Results

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 0), 1);
        assert_eq!(
            perft_detailed(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_shallow_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1), 20);
        assert_eq!(perft(&mut game, 2), 400);
        assert_eq!(perft(&mut game, 3), 8_902);
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn start_position_depth_four() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 4), 197_281);
    }

    #[test]
    fn detailed_counts_at_depth_three() {
        let mut game = GameState::new_game();
        let counts = perft_detailed(&mut game, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }

    #[test]
    fn pseudo_legal_generator_agrees_while_no_checks_are_possible() {
        let mut game = GameState::new_game();
        assert_eq!(perft_with(&PseudoLegalMoveGenerator, &mut game, 2), 400);
    }

    #[test]
    fn perft_restores_en_passant_positions() {
        for fen in [
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1",
        ] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let before = game.clone();
            perft(&mut game, 3);
            perft_detailed(&mut game, 2);
            assert_eq!(game, before, "{fen}");
        }
    }

    #[test]
    fn endgame_position_counts() {
        // "Position 3": no castling or promotions within three plies.
        let mut game = GameState::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(perft(&mut game, 1), 14);
        assert_eq!(perft(&mut game, 2), 191);
        assert_eq!(perft(&mut game, 3), 2_812);
    }
}
