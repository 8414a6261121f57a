//! Interactive game controller.
//!
//! Holds one `GameState`, the legal moves of the current position, and a
//! redo stack of undone moves. Callers propose moves as a start/end square
//! pair (a click pair) or as long algebraic text; anything not in the
//! cached legal list is rejected.

use log::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::long_algebraic::parse_long_algebraic;
use crate::utils::material::material_balance;
use crate::utils::move_log::{move_log_rows, MoveLogRow};

pub struct GameSession {
    game_state: GameState,
    legal_moves: Vec<ChessMove>,
    undone_moves: Vec<ChessMove>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_state(GameState::new_game())
    }

    pub fn from_state(mut game_state: GameState) -> Self {
        let legal_moves = game_state.legal_moves();
        Self {
            game_state,
            legal_moves,
            undone_moves: Vec::new(),
        }
    }

    /// Replace the game wholesale with a fresh one.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new();
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn legal_moves(&self) -> &[ChessMove] {
        &self.legal_moves
    }

    /// Legal moves starting on `square`, for highlighting a selection.
    pub fn legal_moves_from(&self, square: Square) -> impl Iterator<Item = &ChessMove> + '_ {
        self.legal_moves.iter().filter(move |mv| mv.start == square)
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status()
    }

    pub fn move_log_rows(&self) -> Vec<MoveLogRow> {
        move_log_rows(self.game_state.move_log())
    }

    pub fn material_balance(&self) -> i32 {
        material_balance(self.game_state.board())
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.undone_moves.is_empty()
    }

    /// Play the legal move matching `start`/`end`. `promotion` is used only
    /// when the move promotes; `None` keeps the default queen.
    pub fn try_move(
        &mut self,
        start: Square,
        end: Square,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        if !start.is_on_board() || !end.is_on_board() {
            return Err(ChessErrors::IllegalMove(format!(
                "off-board square ({}, {}) -> ({}, {})",
                start.row, start.col, end.row, end.col
            )));
        }
        let proposed = ChessMove::new(start, end, self.game_state.board());
        let mut mv = *self
            .legal_moves
            .iter()
            .find(|candidate| **candidate == proposed)
            .ok_or_else(|| ChessErrors::IllegalMove(proposed.notation()))?;

        if mv.is_promotion {
            if let Some(kind) = promotion {
                mv.set_promotion_choice(kind)?;
            }
        }

        self.game_state.apply_move(mv);
        self.undone_moves.clear();
        self.refresh();
        debug!("played {mv}");
        Ok(mv)
    }

    /// Same as [`GameSession::try_move`] from text such as `e2e4` or `e7e8n`.
    pub fn play(&mut self, text: &str) -> Result<ChessMove, ChessErrors> {
        let request = parse_long_algebraic(text)?;
        self.try_move(request.start, request.end, request.promotion)
    }

    /// Take back the last move and keep it for [`GameSession::redo`].
    pub fn undo(&mut self) -> Option<ChessMove> {
        let mv = self.game_state.undo_move()?;
        self.undone_moves.push(mv);
        self.refresh();
        debug!("undid {mv}");
        Some(mv)
    }

    /// Re-apply the most recently undone move.
    pub fn redo(&mut self) -> Option<ChessMove> {
        let mv = self.undone_moves.pop()?;
        self.game_state.apply_move(mv);
        self.refresh();
        debug!("redid {mv}");
        Some(mv)
    }

    fn refresh(&mut self) {
        self.legal_moves = self.game_state.legal_moves();
        debug!(
            "{:?} to move with {} legal moves",
            self.game_state.side_to_move(),
            self.legal_moves.len()
        );
        let status = self.game_state.status();
        if status.is_terminal() {
            info!("game over: {status:?}");
        }
    }
}
