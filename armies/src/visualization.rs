use crate::{column_label, Coordinate};

const EMPTY_SQUARE: char = '·';

/// Draws the board as boxed Unicode text, row 0 on top.
pub fn visualize_board(n: usize, squares: &[Coordinate], glyph: &str) -> String {
    let mut occupied = vec![false; n * n];
    for sq in squares {
        if sq.row < n && sq.col < n {
            occupied[sq.row * n + sq.col] = true;
        }
    }

    // Draw the column letters and the top of the box
    let mut result = String::from("    ");
    for col in 0..n {
        result += &format!(" {}", column_label(col));
    }
    result += "\n    ╭";
    for _ in 0..n {
        result += "──";
    }
    result += "─╮\n";

    for row in 0..n {
        result += &format!("{:>3} │", row + 1);
        for col in 0..n {
            if occupied[row * n + col] {
                result += &format!(" {}", glyph);
            } else {
                result += &format!(" {}", EMPTY_SQUARE);
            }
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..n {
        result += "──";
    }
    result += "─╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queen_placements;

    #[test]
    fn four_queens() {
        let result = queen_placements(4);
        let expected = "     A B C D
    ╭─────────╮
  1 │ · · ♕ · │
  2 │ ♕ · · · │
  3 │ · · · ♕ │
  4 │ · ♕ · · │
    ╰─────────╯";
        assert_eq!(visualize_board(4, &result.squares, "♕"), expected);
    }

    #[test]
    fn empty_board() {
        let expected = "     A B
    ╭─────╮
  1 │ · · │
  2 │ · · │
    ╰─────╯";
        assert_eq!(visualize_board(2, &[], "♕"), expected);
    }
}
