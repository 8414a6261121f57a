/// The eight (row, col) jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[cfg(test)]
mod tests {
    use super::KNIGHT_OFFSETS;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_in_the_centre_reaches_eight_squares() {
        let d4 = Square::new(4, 3);
        let targets = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| d4.offset(dr, dc))
            .count();
        assert_eq!(targets, 8);
    }

    #[test]
    fn knight_in_the_corner_reaches_two_squares() {
        let a1 = Square::new(7, 0);
        let targets = KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| a1.offset(dr, dc))
            .count();
        assert_eq!(targets, 2);
    }
}
