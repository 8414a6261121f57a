//! Value types shared by every part of the rules engine.
//!
//! Row 0 is rank 8 (Black's back rank) and column 0 is file a, so White
//! pawns travel toward row 0.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row of this color's back rank.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind (color is carried separately in [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pieces a pawn may become on the far rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// An occupied square's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Both fields must stay in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Step by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Square::new(row as u8, col as u8))
    }
}

/// Square content: `None` is an empty square.
pub type SquareContent = Option<Piece>;

/// 8x8 grid indexed `[row][col]`.
pub type Board = [[SquareContent; 8]; 8];

/// Castling eligibility per color and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub black_kingside: bool,
    pub white_queenside: bool,
    pub black_queenside: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        white_kingside: true,
        black_kingside: true,
        white_queenside: true,
        black_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        white_kingside: false,
        black_kingside: false,
        white_queenside: false,
        black_queenside: false,
    };

    #[inline]
    pub const fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn clear_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn clear_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn clear_both(&mut self, color: Color) {
        self.clear_kingside(color);
        self.clear_queenside(color);
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Position classification after legal moves have been (re)generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offset_stays_on_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(2, 1), Some(Square::new(2, 1)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(8, 0).is_on_board());
        assert!(!Square::new(0, 8).is_on_board());
    }

    #[test]
    fn clearing_rights_is_per_color() {
        let mut rights = CastleRights::ALL;
        rights.clear_both(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));

        rights.clear_queenside(Color::Black);
        assert!(rights.kingside(Color::Black));
        assert!(!rights.queenside(Color::Black));
    }

    #[test]
    fn only_minor_and_major_pieces_are_promotion_targets() {
        assert!(PieceKind::Queen.is_promotion_target());
        assert!(PieceKind::Knight.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
        assert!(!PieceKind::King.is_promotion_target());
    }
}
