//! A mailbox-representation chess board: FEN in and out, pseudo-legal move
//! generation, a make/unmake-based legality filter, and `perft` for
//! cross-checking the generator's node counts against known-good totals.
//!
//! This crate deliberately does not use bitboards. Every square lookup is a
//! `[Option<Piece>; 64]` index and every sliding-piece move is a walk along a
//! direction vector one square at a time — see `board::square::step` and
//! `moves::generate`. That keeps the representation close to what a human
//! reads off a board, at the cost of being slower than a bitboard engine for
//! the same depth of search. This crate does not search; it only generates,
//! applies, and counts moves, so that cost does not bite.

pub mod board;
pub mod chess_move;
pub mod moves;

pub use board::piece::{Color, Piece, PieceKind};
pub use board::square::Square;
pub use board::Board;
pub use chess_move::Move;
