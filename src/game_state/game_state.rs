//! Mutable game state representation.
//!
//! `GameState` owns the board grid, the side to move, the king location
//! cache, castle rights, the en-passant target, and the move log together
//! with its parallel history stacks. Only the mutator in
//! [`crate::move_generation::legal_move_apply`] writes to it; generation and
//! attack queries borrow it read-only.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    king_home, kingside_rook_home, queenside_rook_home, starting_board,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{pawn_direction, pawn_start_row};
use crate::utils::fen_parser::parse_fen;

/// Incremental game state mutated in place by apply/undo.
///
/// The history stacks hold one snapshot per applied move plus the seed
/// taken at construction, so `move_log.len() + 1` always equals the length
/// of both histories. The top of each history is the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    // [color]
    pub(crate) king_locations: [Square; 2],
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) move_log: Vec<ChessMove>,
    pub(crate) castle_rights_history: Vec<CastleRights>,
    pub(crate) en_passant_history: Vec<Option<Square>>,

    // Refreshed by `legal_moves`, cleared by undo.
    pub(crate) check_mate: bool,
    pub(crate) stale_mate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, full castling rights.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::White,
            king_locations: [king_home(Color::White), king_home(Color::Black)],
            castle_rights: CastleRights::ALL,
            en_passant_target: None,
            move_log: Vec::new(),
            castle_rights_history: vec![CastleRights::ALL],
            en_passant_history: vec![None],
            check_mate: false,
            stale_mate: false,
        }
    }

    /// Build a state from an arbitrary placement.
    ///
    /// Requires exactly one king per color. Rights whose king or rook is not
    /// on its home square are dropped, and so is an en-passant target that
    /// does not sit directly behind a pawn the opponent just advanced two
    /// squares.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant_target: Option<Square>,
    ) -> Result<Self, ChessErrors> {
        let white_king = find_single_king(&board, Color::White)?;
        let black_king = find_single_king(&board, Color::Black)?;

        let mut rights = castle_rights;
        for color in [Color::White, Color::Black] {
            let occupant = |sq: Square| board[sq.row as usize][sq.col as usize];
            if occupant(king_home(color)) != Some(Piece::new(color, PieceKind::King)) {
                rights.clear_both(color);
            }
            if occupant(kingside_rook_home(color)) != Some(Piece::new(color, PieceKind::Rook)) {
                rights.clear_kingside(color);
            }
            if occupant(queenside_rook_home(color)) != Some(Piece::new(color, PieceKind::Rook)) {
                rights.clear_queenside(color);
            }
        }

        let en_passant_target = en_passant_target
            .filter(|&target| en_passant_is_consistent(&board, side_to_move, target));

        Ok(Self {
            board,
            side_to_move,
            king_locations: [white_king, black_king],
            castle_rights: rights,
            en_passant_target,
            move_log: Vec::new(),
            castle_rights_history: vec![rights],
            en_passant_history: vec![en_passant_target],
            check_mate: false,
            stale_mate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> SquareContent {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    /// Only meaningful right after [`GameState::legal_moves`].
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.check_mate
    }

    /// Only meaningful right after [`GameState::legal_moves`].
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stale_mate
    }

    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        legal_moves(self)
    }

    pub fn in_check(&self) -> bool {
        legal_move_checks::in_check(self)
    }

    pub fn apply_move(&mut self, mv: ChessMove) {
        legal_move_apply::apply_move(self, mv);
    }

    pub fn undo_move(&mut self) -> Option<ChessMove> {
        legal_move_apply::undo_move(self)
    }

    /// Classification from the terminal flags and the current check state.
    pub fn status(&self) -> GameStatus {
        if self.check_mate {
            GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            }
        } else if self.stale_mate {
            GameStatus::Stalemate
        } else if self.in_check() {
            GameStatus::Check
        } else {
            GameStatus::Normal
        }
    }
}

fn en_passant_is_consistent(board: &Board, side_to_move: Color, target: Square) -> bool {
    let mover = side_to_move.opposite();
    let forward = pawn_direction(mover);
    if !target.is_on_board() || target.row as i8 != pawn_start_row(mover) as i8 + forward {
        return false;
    }
    let (Some(pawn_square), Some(origin)) = (target.offset(forward, 0), target.offset(-forward, 0))
    else {
        return false;
    };

    let occupant = |sq: Square| board[sq.row as usize][sq.col as usize];
    occupant(target).is_none()
        && occupant(origin).is_none()
        && occupant(pawn_square) == Some(Piece::new(mover, PieceKind::Pawn))
}

fn find_single_king(board: &Board, color: Color) -> Result<Square, ChessErrors> {
    let mut found = None;
    let mut count = 0usize;
    for (row, rank) in board.iter().enumerate() {
        for (col, content) in rank.iter().enumerate() {
            if *content == Some(Piece::new(color, PieceKind::King)) {
                count += 1;
                found = Some(Square::new(row as u8, col as u8));
            }
        }
    }
    match found {
        Some(square) if count == 1 => Ok(square),
        _ => Err(ChessErrors::KingCount { color, count }),
    }
}
