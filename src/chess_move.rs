//! The `Move` value type and its string forms.
//!
//! Unlike the bitboard-era lineage this crate descends from, which grew a
//! separate struct per move shape (`StandardChessMove`, `CastleChessMove`, ...),
//! a mailbox board only ever needs one flat record: origin, destination, the
//! piece that moved, and a few optional flags. Keeping it flat also makes the
//! pseudo-legal move list a plain `Vec<Move>` that splicing (see `moves::make_unmake`)
//! can index into directly.

use std::fmt;

use thiserror::Error;

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::{self, Square};
use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub capture: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
    pub is_enpassant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            capture: None,
            promotion: None,
            is_castle: false,
            is_enpassant: false,
        }
    }

    pub fn with_capture(mut self, captured: PieceKind) -> Self {
        self.capture = Some(captured);
        self
    }

    pub fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self
    }

    pub fn castle(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            capture: None,
            promotion: None,
            is_castle: true,
            is_enpassant: false,
        }
    }

    pub fn en_passant(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            capture: Some(PieceKind::Pawn),
            promotion: None,
            is_castle: false,
            is_enpassant: true,
        }
    }

    /// The `<from><to>[<promo>]` key perft's `split` mode groups subtree counts by.
    pub fn split_key(&self) -> String {
        let mut key = format!(
            "{}{}",
            square::to_algebraic(self.from),
            square::to_algebraic(self.to)
        );
        if let Some(promotion) = self.promotion {
            key.push(promotion_char(promotion));
        }
        key
    }
}

fn promotion_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        _ => unreachable!("only queen/rook/bishop/knight are valid promotion kinds"),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            let is_kingside = self.to > self.from;
            return write!(f, "{}", if is_kingside { "O-O" } else { "O-O-O" });
        }

        let separator = if self.capture.is_some() { "x" } else { "-" };
        write!(
            f,
            "{}{}{}",
            square::to_algebraic(self.from),
            separator,
            square::to_algebraic(self.to)
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion_char(promotion).to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("`{0}` is not a valid algebraic square")]
    InvalidSquare(String),
    #[error("`{0}` is not a valid promotion letter")]
    InvalidPromotion(char),
    #[error("no pseudo-legal move from {from} to {to} in the current position")]
    NoSuchMove { from: String, to: String },
}

impl Board {
    /// Finds the unique pseudo-legal move matching `from`/`to` (and, for
    /// promotions, the promotion letter). Used by perft-validation drivers that
    /// replay a failing split key against the board.
    pub fn find_move(
        &self,
        from_str: &str,
        to_str: &str,
        promotion: Option<char>,
    ) -> Result<Move, MoveParseError> {
        let from = square::from_algebraic(from_str)
            .ok_or_else(|| MoveParseError::InvalidSquare(from_str.to_string()))?;
        let to = square::from_algebraic(to_str)
            .ok_or_else(|| MoveParseError::InvalidSquare(to_str.to_string()))?;
        let promotion_kind = match promotion {
            None => None,
            Some(c) => Some(parse_promotion_letter(c)?),
        };

        self.pseudolegal_moves()
            .iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion_kind)
            .copied()
            .ok_or_else(|| MoveParseError::NoSuchMove {
                from: from_str.to_string(),
                to: to_str.to_string(),
            })
    }
}

fn parse_promotion_letter(c: char) -> Result<PieceKind, MoveParseError> {
    match c.to_ascii_uppercase() {
        'Q' => Ok(PieceKind::Queen),
        'R' => Ok(PieceKind::Rook),
        'B' => Ok(PieceKind::Bishop),
        'N' => Ok(PieceKind::Knight),
        _ => Err(MoveParseError::InvalidPromotion(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{A7, A8, B8, E1, E4, G1};

    #[test]
    fn test_display_standard_move() {
        let m = Move::new(E1, E4, Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(m.to_string(), "e1-e4");
    }

    #[test]
    fn test_display_capture() {
        let m = Move::new(E1, E4, Piece::new(PieceKind::Queen, Color::White))
            .with_capture(PieceKind::Pawn);
        assert_eq!(m.to_string(), "e1xe4");
    }

    #[test]
    fn test_display_promotion() {
        let m = Move::new(A7, A8, Piece::new(PieceKind::Pawn, Color::White))
            .with_promotion(PieceKind::Queen);
        assert_eq!(m.to_string(), "a7-a8=Q");
    }

    #[test]
    fn test_display_castle() {
        let m = Move::castle(E1, G1, Piece::new(PieceKind::King, Color::White));
        assert_eq!(m.to_string(), "O-O");
    }

    #[test]
    fn test_split_key() {
        let m = Move::new(A7, B8, Piece::new(PieceKind::Pawn, Color::White))
            .with_capture(PieceKind::Rook)
            .with_promotion(PieceKind::Knight);
        assert_eq!(m.split_key(), "a7b8n");
    }
}
