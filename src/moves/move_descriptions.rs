//! Move record.
//!
//! A `ChessMove` snapshots the moved and captured pieces off the board at
//! construction time and is immutable afterwards, apart from the promotion
//! choice a caller may set before applying it. Two moves compare equal when
//! their start and end squares match; flags and promotion choice are ignored.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::promotion_row;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub start: Square,
    pub end: Square,
    pub piece_moved: SquareContent,
    pub piece_captured: SquareContent,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
    promotion_choice: PieceKind,
}

impl ChessMove {
    /// Ordinary move read off `board`. Never fails; legality is decided by
    /// the legal-move filter.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board[start.row as usize][start.col as usize];
        let piece_captured = board[end.row as usize][end.col as usize];
        let is_promotion = match piece_moved {
            Some(Piece {
                color,
                kind: PieceKind::Pawn,
            }) => end.row == promotion_row(color),
            _ => false,
        };

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
            is_castle: false,
            is_promotion,
            promotion_choice: PieceKind::Queen,
        }
    }

    /// En-passant capture. The landing square is empty, so the captured
    /// piece is forced to the opposing pawn.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        let mut mv = Self::new(start, end, board);
        mv.is_en_passant = true;
        mv.piece_captured = mv
            .piece_moved
            .map(|moved| Piece::new(moved.color.opposite(), PieceKind::Pawn));
        mv
    }

    /// King's two-file castling step; the rook is relocated by the mutator.
    pub fn castle(start: Square, end: Square, board: &Board) -> Self {
        let mut mv = Self::new(start, end, board);
        mv.is_castle = true;
        mv
    }

    #[inline]
    pub fn promotion_choice(&self) -> PieceKind {
        self.promotion_choice
    }

    pub fn set_promotion_choice(&mut self, kind: PieceKind) -> Result<(), ChessErrors> {
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }
        self.promotion_choice = kind;
        Ok(())
    }

    pub fn with_promotion_choice(mut self, kind: PieceKind) -> Result<Self, ChessErrors> {
        self.set_promotion_choice(kind)?;
        Ok(self)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn moved_kind(&self) -> Option<PieceKind> {
        self.piece_moved.map(|p| p.kind)
    }

    /// Start and end squares in coordinate form, for example `e2e4`.
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(4);
        out.push_str(square_to_algebraic(self.start));
        out.push_str(square_to_algebraic(self.end));
        out
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}
