pub mod display;
pub mod error;
pub mod fen;
pub mod piece;
pub mod square;

use smallvec::SmallVec;
use thiserror::Error;

use crate::chess_move::Move;
use piece::{Color, Piece, PieceCount, PieceKind};
use square::Square;

/// Index order for `castling_rights`, matching the FEN letter order `KQkq`.
pub const WHITE_SHORT: usize = 0;
pub const WHITE_LONG: usize = 1;
pub const BLACK_SHORT: usize = 2;
pub const BLACK_LONG: usize = 3;

/// The squares a king and rook must start from for the corresponding castling
/// right to be meaningful. Used only to read rights off; this crate never
/// re-derives rights from piece placement, it only clears them monotonically.
pub const WHITE_KING_START: Square = square::E1;
pub const WHITE_KINGSIDE_ROOK_START: Square = square::H1;
pub const WHITE_QUEENSIDE_ROOK_START: Square = square::A1;
pub const BLACK_KING_START: Square = square::E8;
pub const BLACK_KINGSIDE_ROOK_START: Square = square::H8;
pub const BLACK_QUEENSIDE_ROOK_START: Square = square::A8;

/// A single ply of undo state: everything `unmake_move` needs to restore scalar
/// board state without round-tripping through a FEN string (see design note in
/// SPEC_FULL.md §9 on the snapshot-vs-record tradeoff).
#[derive(Clone, Copy, Debug)]
pub(crate) struct UndoRecord {
    pub mv: Move,
    pub captured_piece: Option<(Piece, Square)>,
    pub prior_castling_rights: [bool; 4],
    pub prior_en_passant_square: Option<Square>,
    pub prior_halfmove_clock: u32,
    pub prior_fullmove_number: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("square is already occupied")]
    SquareOccupied,
}

pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) piece_count: PieceCount,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: [bool; 4],
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) pseudolegal_moves: Vec<Move>,
    pub(crate) move_history: Vec<UndoRecord>,
    /// Per-color index of occupied squares, maintained incrementally by `put`/
    /// `remove` so generation never has to scan all 64 squares to find a color's
    /// pieces. Not part of observable equality — it is fully derivable from
    /// `squares` and exists purely for iteration speed.
    pub(crate) occupied_by_color: [SmallVec<[Square; 16]>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board {
            squares: [None; 64],
            piece_count: PieceCount::new(),
            side_to_move: Color::White,
            castling_rights: [false; 4],
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            pseudolegal_moves: Vec::new(),
            move_history: Vec::new(),
            occupied_by_color: [SmallVec::new(), SmallVec::new()],
        }
    }
}

impl Board {
    /// An empty board: no pieces, White to move, no castling rights, no en
    /// passant target. Callers normally reach for `from_fen` or
    /// `starting_position` instead; `new` is useful for constructing small
    /// hand-built positions in tests.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        Self::from_fen(fen::STARTING_POSITION_FEN).expect("starting position FEN is well-formed")
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.squares[square as usize].is_some()
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupied);
        }
        self.squares[square as usize] = Some(piece);
        self.piece_count.increment(piece.color, piece.kind);
        self.occupied_by_color[piece.color as usize].push(square);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.squares[square as usize].take()?;
        self.piece_count.decrement(piece.color, piece.kind);
        let index = self.occupied_by_color[piece.color as usize]
            .iter()
            .position(|&s| s == square)
            .expect("occupied_by_color out of sync with squares");
        self.occupied_by_color[piece.color as usize].swap_remove(index);
        Some(piece)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> [bool; 4] {
        self.castling_rights
    }

    pub fn has_castling_right(&self, index: usize) -> bool {
        self.castling_rights[index]
    }

    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn piece_count(&self, color: Color, kind: PieceKind) -> u8 {
        self.piece_count.get(color, kind)
    }

    pub fn pseudolegal_moves(&self) -> &[Move] {
        &self.pseudolegal_moves
    }

    pub fn occupied_squares(&self, color: Color) -> &[Square] {
        &self.occupied_by_color[color as usize]
    }

    /// The square the king of `color` currently occupies. Panics if the
    /// invariant that every reachable position has exactly one king per color
    /// has been violated, which would itself be a bug elsewhere in the crate.
    pub fn king_square(&self, color: Color) -> Square {
        self.occupied_squares(color)
            .iter()
            .copied()
            .find(|&s| {
                matches!(
                    self.get(s),
                    Some(Piece {
                        kind: PieceKind::King,
                        ..
                    })
                )
            })
            .expect("board invariant violated: no king on the board for this color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{A1, A2, E1};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for square in square::ORDERED.iter() {
            assert_eq!(board.get(*square), None);
        }
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), [false; 4]);
    }

    #[test]
    fn test_put_and_remove_round_trip() {
        let mut board = Board::new();
        let piece = Piece::new(PieceKind::Rook, Color::White);
        board.put(A1, piece).unwrap();
        assert_eq!(board.get(A1), Some(piece));
        assert_eq!(board.piece_count(Color::White, PieceKind::Rook), 1);
        assert_eq!(board.occupied_squares(Color::White), &[A1]);

        let removed = board.remove(A1).unwrap();
        assert_eq!(removed, piece);
        assert_eq!(board.get(A1), None);
        assert_eq!(board.piece_count(Color::White, PieceKind::Rook), 0);
        assert!(board.occupied_squares(Color::White).is_empty());
    }

    #[test]
    fn test_put_on_occupied_square_fails() {
        let mut board = Board::new();
        board
            .put(A1, Piece::new(PieceKind::Rook, Color::White))
            .unwrap();
        let result = board.put(A1, Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(result, Err(BoardError::SquareOccupied));
    }

    #[test]
    fn test_king_square() {
        let mut board = Board::new();
        board
            .put(E1, Piece::new(PieceKind::King, Color::White))
            .unwrap();
        board
            .put(A2, Piece::new(PieceKind::Pawn, Color::White))
            .unwrap();
        assert_eq!(board.king_square(Color::White), E1);
    }
}
