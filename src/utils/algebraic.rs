//! Square names.
//!
//! Converts between board coordinates and algebraic square names (`e4`)
//! through fixed lookup tables: column 0..7 is file `a`..`h`, row 0..7 is
//! rank `8`..`1`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// File letter for each column.
pub const COL_TO_FILE: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank digit for each row.
pub const ROW_TO_RANK: [char; 8] = ['8', '7', '6', '5', '4', '3', '2', '1'];

// [row][col]
const SQUARE_NAMES: [[&str; 8]; 8] = [
    ["a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8"],
    ["a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7"],
    ["a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6"],
    ["a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5"],
    ["a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4"],
    ["a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3"],
    ["a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2"],
    ["a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1"],
];

/// Name of an on-board square, for example `e4` for row 4, col 4.
#[inline]
pub fn square_to_algebraic(square: Square) -> &'static str {
    SQUARE_NAMES[square.row as usize][square.col as usize]
}

/// Parse a two-character square name.
pub fn algebraic_to_square(name: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(name.to_owned());
    let mut chars = name.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let col = COL_TO_FILE.iter().position(|&f| f == file).ok_or_else(invalid)?;
    let row = ROW_TO_RANK.iter().position(|&r| r == rank).ok_or_else(invalid)?;
    Ok(Square::new(row as u8, col as u8))
}
