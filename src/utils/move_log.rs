//! Numbered move-log rows: one row per full move, White then Black.

use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLogRow {
    pub turn: usize,
    pub white: String,
    /// Empty while Black has not replied yet.
    pub black: Option<String>,
}

/// Rows for a log that started with White to move.
pub fn move_log_rows(log: &[ChessMove]) -> Vec<MoveLogRow> {
    log.chunks(2)
        .enumerate()
        .map(|(index, pair)| MoveLogRow {
            turn: index + 1,
            white: pair[0].notation(),
            black: pair.get(1).map(ChessMove::notation),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{move_log_rows, MoveLogRow};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rows_pair_white_and_black_moves() {
        let mut game = GameState::new_game();
        for notation in ["e2e4", "e7e5", "g1f3"] {
            let mv = game
                .legal_moves()
                .into_iter()
                .find(|m| m.notation() == notation)
                .expect("move should be legal");
            game.apply_move(mv);
        }

        assert_eq!(
            move_log_rows(game.move_log()),
            vec![
                MoveLogRow {
                    turn: 1,
                    white: "e2e4".to_owned(),
                    black: Some("e7e5".to_owned()),
                },
                MoveLogRow {
                    turn: 2,
                    white: "g1f3".to_owned(),
                    black: None,
                },
            ]
        );
    }

    #[test]
    fn empty_log_has_no_rows() {
        assert!(move_log_rows(&[]).is_empty());
    }
}
