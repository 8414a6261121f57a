//! Color-dependent pawn geometry.

use crate::game_state::chess_types::Color;

/// Row delta of a one-square advance.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Row from which the two-square advance is available.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Far rank where a pawn promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Column deltas of the two diagonal captures.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_advances_toward_row_zero() {
        assert_eq!(pawn_direction(Color::White), -1);
        assert_eq!(pawn_start_row(Color::White) as i8 + pawn_direction(Color::White) * 6, 0);
        assert_eq!(promotion_row(Color::White), 0);
    }

    #[test]
    fn black_advances_toward_row_seven() {
        assert_eq!(pawn_direction(Color::Black), 1);
        assert_eq!(pawn_start_row(Color::Black) as i8 + pawn_direction(Color::Black) * 6, 7);
        assert_eq!(promotion_row(Color::Black), 7);
    }
}
