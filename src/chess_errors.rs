//! Errors used throughout the rules engine.
//!
//! The rules core itself (generation, apply/undo, attack queries) is
//! infallible. `ChessErrors` covers the edges where text or caller requests
//! enter the crate: square and move notation, position strings, promotion
//! choices, and moves rejected by a [`crate::session::game_session::GameSession`].

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A square name was not a file `a`..`h` followed by a rank `1`..`8`.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// A long algebraic move was not `e2e4` or `e7e8q` shaped.
    #[error("invalid long algebraic move: {0:?}")]
    InvalidLongAlgebraic(String),

    /// A position string had malformed structure or an unknown token.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A placement did not hold exactly one king for a color.
    #[error("position has {count} {color:?} kings, expected exactly one")]
    KingCount { color: Color, count: usize },

    /// Pawns may only promote to a knight, bishop, rook or queen.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    /// The requested move is not in the current legal-move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::Color;

    #[test]
    fn messages_carry_context() {
        let err = ChessErrors::KingCount {
            color: Color::Black,
            count: 0,
        };
        assert_eq!(
            err.to_string(),
            "position has 0 Black kings, expected exactly one"
        );
        assert_eq!(
            ChessErrors::IllegalMove("e2e5".to_owned()).to_string(),
            "illegal move: e2e5"
        );
    }
}
