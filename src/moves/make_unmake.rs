//! Applying and reverting moves, and the legality filter built on top of them.
//!
//! There is no separate "is this move legal" pass before `make_move` touches
//! the board. Instead a candidate is applied optimistically, the resulting
//! position is inspected for a king left in (or walked into) check, and if
//! that inspection fails the move is undone — the same shape as the
//! make/check/revert loop in the position this crate's move model descends
//! from, just without the Zobrist bookkeeping that loop also used to carry.

use log::trace;
use thiserror::Error;

use crate::board::piece::{Color, PieceKind};
use crate::board::square::{self, Square};
use crate::board::{Board, UndoRecord, BLACK_LONG, BLACK_SHORT, WHITE_LONG, WHITE_SHORT};
use crate::chess_move::Move;

use super::generate::is_square_attacked;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("{0} is not legal in the current position")]
    NotLegal(Move),
}

impl Board {
    /// Applies `mv` if it is legal, returning `true` on success. `mv` must be
    /// an entry of `self.pseudolegal_moves()` — moves built by hand rather
    /// than read off that list are rejected without inspecting the board.
    ///
    /// On failure, `mv` is removed from the cached pseudo-legal list: once a
    /// reply to this position is known to walk into check, it will be wrong
    /// on every subsequent attempt too, so there is no reason to keep testing
    /// it. Callers that iterate `pseudolegal_moves()` by index (perft's inner
    /// loop) must not advance their index after a failed `make_move` — the
    /// entry at that index now holds what used to be the next move.
    pub fn make_move(&mut self, mv: &Move) -> bool {
        if !self.pseudolegal_moves.iter().any(|candidate| candidate == mv) {
            return false;
        }

        let mover = mv.piece.color;
        let opponent = mover.opposite();

        if mv.is_castle {
            let king_home = match mover {
                Color::White => square::E1,
                Color::Black => square::E8,
            };
            let pass_through = castle_path_square(mv);
            if is_square_attacked(self, king_home, opponent)
                || is_square_attacked(self, pass_through, opponent)
            {
                trace!("rejecting {} as illegal: castles through check", mv);
                self.remove_pseudolegal_move(mv);
                return false;
            }
        }

        let record = self.apply(mv);

        self.side_to_move = opponent;
        self.castling_rights = updated_castling_rights(record.prior_castling_rights, mv);
        self.en_passant_square = new_en_passant_square(mv);
        self.halfmove_clock = new_halfmove_clock(record.prior_halfmove_clock, mv);
        if mover == Color::Black {
            self.fullmove_number += 1;
        }

        let king_square = self.king_square(mover);
        if is_square_attacked(self, king_square, opponent) {
            trace!("rejecting {} as illegal: leaves own king in check", mv);
            self.undo(&record);
            self.side_to_move = mover;
            self.remove_pseudolegal_move(mv);
            return false;
        }

        self.regenerate_pseudolegal_moves();
        self.move_history.push(record);
        true
    }

    /// Reverts the most recently applied move. A no-op if no move has been
    /// made (or all made moves have already been unmade).
    pub fn unmake_move(&mut self) {
        let record = match self.move_history.pop() {
            Some(record) => record,
            None => return,
        };
        let mover = record.mv.piece.color;
        self.undo(&record);
        self.side_to_move = mover;
        self.regenerate_pseudolegal_moves();
    }

    /// Whether `mv` is legal in the current position, determined by making it
    /// and immediately unmaking it. Illegal moves are left spliced out of
    /// `pseudolegal_moves()` as a side effect, same as a failed `make_move`.
    pub fn is_legal(&mut self, mv: &Move) -> bool {
        if self.make_move(mv) {
            self.unmake_move();
            true
        } else {
            false
        }
    }

    pub fn make_move_checked(&mut self, mv: &Move) -> Result<(), IllegalMove> {
        if self.make_move(mv) {
            Ok(())
        } else {
            Err(IllegalMove::NotLegal(*mv))
        }
    }

    fn remove_pseudolegal_move(&mut self, mv: &Move) {
        if let Some(index) = self.pseudolegal_moves.iter().position(|candidate| candidate == mv) {
            self.pseudolegal_moves.remove(index);
        }
    }

    /// Moves pieces on the board and removes whatever `mv` captures, without
    /// touching `side_to_move`, castling rights, the en passant target, or
    /// the clocks — `make_move` updates those afterward, since their new
    /// values (and the legality check that follows) depend on the physical
    /// result of the move already being in place.
    fn apply(&mut self, mv: &Move) -> UndoRecord {
        let prior_castling_rights = self.castling_rights;
        let prior_en_passant_square = self.en_passant_square;
        let prior_halfmove_clock = self.halfmove_clock;
        let prior_fullmove_number = self.fullmove_number;

        let captured_piece = if mv.is_enpassant {
            let captured_square = square::step(
                mv.to,
                0,
                match mv.piece.color {
                    Color::White => -1,
                    Color::Black => 1,
                },
            )
            .expect("en passant target always has a captured pawn directly behind it");
            let captured = self
                .remove(captured_square)
                .expect("en passant target's captured square must hold the passed pawn");
            Some((captured, captured_square))
        } else if mv.capture.is_some() {
            let captured = self
                .remove(mv.to)
                .expect("a move flagged as a capture must have a piece on its destination");
            Some((captured, mv.to))
        } else {
            None
        };

        self.remove(mv.from);
        let moved_piece = match mv.promotion {
            Some(promotion_kind) => crate::board::piece::Piece::new(promotion_kind, mv.piece.color),
            None => mv.piece,
        };
        self.put(mv.to, moved_piece)
            .expect("destination square was just vacated by capture or was already empty");

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.remove(rook_from).expect("castling rook must be on its home square");
            self.put(rook_to, rook).expect("castling rook's destination must be empty");
        }

        UndoRecord {
            mv: *mv,
            captured_piece,
            prior_castling_rights,
            prior_en_passant_square,
            prior_halfmove_clock,
            prior_fullmove_number,
        }
    }

    /// The exact inverse of `apply`. Restores scalar state from `record` too,
    /// leaving only `side_to_move` for the caller (`make_move`/`unmake_move`
    /// know which side that is without consulting the record).
    fn undo(&mut self, record: &UndoRecord) {
        let mv = record.mv;

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self
                .remove(rook_to)
                .expect("castling rook should be at its post-castle square");
            self.put(rook_from, rook).expect("rook's home square must be empty to undo castling");
        }

        self.remove(mv.to);
        self.put(mv.from, mv.piece).expect("move origin must be empty to undo");

        if let Some((captured, square)) = record.captured_piece {
            self.put(square, captured)
                .expect("captured piece's square must be empty before restoring it");
        }

        self.castling_rights = record.prior_castling_rights;
        self.en_passant_square = record.prior_en_passant_square;
        self.halfmove_clock = record.prior_halfmove_clock;
        self.fullmove_number = record.prior_fullmove_number;
    }
}

fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    match (mv.piece.color, mv.to) {
        (Color::White, square::G1) => (square::H1, square::F1),
        (Color::White, square::C1) => (square::A1, square::D1),
        (Color::Black, square::G8) => (square::H8, square::F8),
        (Color::Black, square::C8) => (square::A8, square::D8),
        _ => unreachable!("castle move must target g1, c1, g8, or c8"),
    }
}

fn castle_path_square(mv: &Move) -> Square {
    match (mv.piece.color, mv.to) {
        (Color::White, square::G1) => square::F1,
        (Color::White, square::C1) => square::D1,
        (Color::Black, square::G8) => square::F8,
        (Color::Black, square::C8) => square::D8,
        _ => unreachable!("castle move must target g1, c1, g8, or c8"),
    }
}

fn updated_castling_rights(prior: [bool; 4], mv: &Move) -> [bool; 4] {
    let mut rights = prior;

    match mv.piece.kind {
        PieceKind::King => match mv.piece.color {
            Color::White => {
                rights[WHITE_SHORT] = false;
                rights[WHITE_LONG] = false;
            }
            Color::Black => {
                rights[BLACK_SHORT] = false;
                rights[BLACK_LONG] = false;
            }
        },
        PieceKind::Rook => clear_right_for_corner(&mut rights, mv.from),
        _ => {}
    }

    if mv.capture.is_some() {
        clear_right_for_corner(&mut rights, mv.to);
    }

    rights
}

fn clear_right_for_corner(rights: &mut [bool; 4], corner: Square) {
    match corner {
        square::A1 => rights[WHITE_LONG] = false,
        square::H1 => rights[WHITE_SHORT] = false,
        square::A8 => rights[BLACK_LONG] = false,
        square::H8 => rights[BLACK_SHORT] = false,
        _ => {}
    }
}

fn new_en_passant_square(mv: &Move) -> Option<Square> {
    if mv.piece.kind != PieceKind::Pawn {
        return None;
    }
    let from_rank = square::rank(mv.from);
    let to_rank = square::rank(mv.to);
    if (to_rank - from_rank).abs() == 2 {
        let mid_rank = (from_rank + to_rank) / 2;
        return square::from_file_rank(square::file(mv.from), mid_rank);
    }
    None
}

fn new_halfmove_clock(prior: u32, mv: &Move) -> u32 {
    if mv.piece.kind == PieceKind::Pawn || mv.capture.is_some() || mv.is_castle {
        0
    } else {
        prior + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::square::*;

    #[test]
    fn test_make_and_unmake_standard_move() {
        let mut board = Board::starting_position();
        let mv = board.find_move("e2", "e4", None).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.get(E4).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(board.get(E2), None);
        assert_eq!(board.en_passant_square(), Some(E3));
        assert_eq!(board.side_to_move(), Color::Black);

        board.unmake_move();
        assert_eq!(board.to_fen(), crate::board::fen::STARTING_POSITION_FEN);
    }

    #[test]
    fn test_make_move_rejects_move_not_in_pseudolegal_list() {
        let mut board = Board::starting_position();
        let bogus = Move::new(E2, E5, Piece::new(PieceKind::Pawn, Color::White));
        assert!(!board.make_move(&bogus));
    }

    #[test]
    fn test_king_cannot_walk_into_check() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        let mv = board.find_move("e1", "d2", None).unwrap();
        assert!(!board.make_move(&mv));
        assert!(!board.pseudolegal_moves().iter().any(|m| m == &mv));
    }

    #[test]
    fn test_capture_resolves_check() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").unwrap();
        let mv = board.find_move("e1", "e2", None).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.piece_count(Color::Black, PieceKind::Rook), 0);
    }

    #[test]
    fn test_castle_through_check_is_rejected() {
        // black rook on e-file pins white's king to e1, so castling must be
        // rejected even though f1/g1 are empty and the rook never lands on them.
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.put(E5, Piece::new(PieceKind::Rook, Color::Black)).unwrap();
        board.regenerate_pseudolegal_moves();
        let mv = board.find_move("e1", "g1", None).unwrap();
        assert!(!board.make_move(&mv));
    }

    #[test]
    fn test_castle_clears_both_rights_for_that_side() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mv = board.find_move("e1", "g1", None).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.get(F1).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.get(H1), None);
        assert!(!board.has_castling_right(WHITE_SHORT));
        assert!(!board.has_castling_right(WHITE_LONG));
        assert_eq!(board.halfmove_clock(), 0);

        board.unmake_move();
        assert!(board.has_castling_right(WHITE_SHORT));
        assert!(board.has_castling_right(WHITE_LONG));
        assert_eq!(board.get(H1).map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn test_capturing_a_rook_clears_opponent_castling_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K1RR w Qkq - 0 1").unwrap();
        let mv = board.find_move("h1", "h8", None).unwrap();
        assert!(board.make_move(&mv));
        assert!(!board.has_castling_right(BLACK_SHORT));
        assert!(board.has_castling_right(BLACK_LONG));
    }

    #[test]
    fn test_en_passant_capture_removes_passed_pawn() {
        let mut board =
            Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .unwrap();
        let mv = board.find_move("e5", "d6", None).unwrap();
        assert!(mv.is_enpassant);
        assert!(board.make_move(&mv));
        assert_eq!(board.get(D5), None);
        assert_eq!(board.get(D6).map(|p| p.kind), Some(PieceKind::Pawn));

        board.unmake_move();
        assert_eq!(board.get(D5).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(board.get(D6), None);
        assert_eq!(board.en_passant_square(), Some(D6));
    }

    #[test]
    fn test_promotion_replaces_pawn_with_chosen_kind() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/4k2K w - - 0 1").unwrap();
        let mv = board.find_move("a7", "a8", Some('Q')).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.get(A8).map(|p| p.kind), Some(PieceKind::Queen));

        board.unmake_move();
        assert_eq!(board.get(A8), None);
        assert_eq!(board.get(A7).map(|p| p.kind), Some(PieceKind::Pawn));
    }

    #[test]
    fn test_halfmove_clock_resets_on_pawn_move_and_capture() {
        let mut board = Board::starting_position();
        let mv = board.find_move("g1", "f3", None).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.halfmove_clock(), 1);

        let mv = board.find_move("g8", "f6", None).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.halfmove_clock(), 2);

        let mv = board.find_move("e2", "e4", None).unwrap();
        assert!(board.make_move(&mv));
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_is_legal_leaves_board_unchanged() {
        let mut board = Board::starting_position();
        let fen_before = board.to_fen();
        let mv = board.find_move("e2", "e4", None).unwrap();
        assert!(board.is_legal(&mv));
        assert_eq!(board.to_fen(), fen_before);
    }
}
