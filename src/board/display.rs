use std::fmt;

use super::square;
use super::Board;

impl Board {
    /// A human-readable ASCII rendering, rank 8 at the top, used by tests and
    /// by the `trace!`-level generation logs to show what position a move list
    /// was computed from.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = square::from_file_rank(file, rank).unwrap();
                let c = match self.get(sq) {
                    Some(piece) => piece.to_fen_char(),
                    None => '.',
                };
                out.push(c);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ascii_starting_position() {
        let board = Board::starting_position();
        let ascii = board.to_ascii();
        assert_eq!(ascii.lines().count(), 8);
        assert!(ascii.lines().next().unwrap().starts_with("r n b q k b n r"));
    }
}
