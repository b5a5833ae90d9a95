//! Pseudo-legal move generation: every move a piece could make if king-safety
//! were ignored entirely. King-safety and castle-through-check are enforced
//! one layer up, in `make_unmake`, by applying a candidate move and inspecting
//! the opponent's reply — see that module for why generation itself stays this
//! simple.

use smallvec::SmallVec;

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::{self, Square};
use crate::board::{
    Board, BLACK_LONG, BLACK_SHORT, WHITE_LONG, WHITE_SHORT,
};
use crate::chess_move::Move;

/// Rook-like ray directions as `(delta_file, delta_rank)`.
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
/// Bishop-like ray directions.
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
/// Knight jump offsets, equivalent to the mailbox deltas {±6, ±10, ±15, ±17}
/// but expressed as file/rank pairs so wraparound is guarded exactly.
const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub fn regenerate_pseudolegal_moves(&mut self) {
        self.pseudolegal_moves = generate_pseudolegal_moves(self);
    }
}

pub fn generate_pseudolegal_moves(board: &Board) -> Vec<Move> {
    let color = board.side_to_move();
    let mut moves = Vec::with_capacity(48);

    // `occupied_by_color` lets us visit only this side's pieces rather than
    // scanning all 64 squares on every generation call.
    let squares: SmallVec<[Square; 16]> = board.occupied_squares(color).iter().copied().collect();

    for square in squares {
        let piece = board.get(square).expect("occupied_by_color out of sync");
        match piece.kind {
            PieceKind::Pawn => add_pawn_moves(board, square, piece, &mut moves),
            PieceKind::Knight => add_leaper_moves(board, square, piece, &KNIGHT_DIRS, &mut moves),
            PieceKind::Bishop => add_slider_moves(board, square, piece, &BISHOP_DIRS, &mut moves),
            PieceKind::Rook => add_slider_moves(board, square, piece, &ROOK_DIRS, &mut moves),
            PieceKind::Queen => {
                add_slider_moves(board, square, piece, &ROOK_DIRS, &mut moves);
                add_slider_moves(board, square, piece, &BISHOP_DIRS, &mut moves);
            }
            PieceKind::King => {
                let king_dirs: [(i8, i8); 8] = [
                    ROOK_DIRS[0],
                    ROOK_DIRS[1],
                    ROOK_DIRS[2],
                    ROOK_DIRS[3],
                    BISHOP_DIRS[0],
                    BISHOP_DIRS[1],
                    BISHOP_DIRS[2],
                    BISHOP_DIRS[3],
                ];
                add_leaper_moves(board, square, piece, &king_dirs, &mut moves);
            }
        }
    }

    add_castle_moves(board, &mut moves);

    moves
}

fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

fn start_rank(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn add_pawn_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    let color = piece.color;
    let step = forward(color);

    if let Some(single) = square::step(from, 0, step) {
        if board.get(single).is_none() {
            push_pawn_move(moves, from, single, piece, None);

            if square::rank(from) == start_rank(color) {
                if let Some(double) = square::step(from, 0, 2 * step) {
                    if board.get(double).is_none() {
                        push_pawn_move(moves, from, double, piece, None);
                    }
                }
            }
        }
    }

    for &delta_file in &[-1, 1] {
        let target = match square::step(from, delta_file, step) {
            Some(sq) => sq,
            None => continue,
        };

        if let Some(occupant) = board.get(target) {
            if occupant.color != color {
                push_pawn_move(moves, from, target, piece, Some(occupant.kind));
            }
        } else if board.en_passant_square() == Some(target) {
            moves.push(Move::en_passant(from, target, piece));
        }
    }
}

fn push_pawn_move(
    moves: &mut Vec<Move>,
    from: Square,
    to: Square,
    piece: Piece,
    capture: Option<PieceKind>,
) {
    if square::rank(to) == promotion_rank(piece.color) {
        for &promotion in PieceKind::PROMOTION_KINDS.iter() {
            let mut mv = Move::new(from, to, piece).with_promotion(promotion);
            if let Some(captured) = capture {
                mv = mv.with_capture(captured);
            }
            moves.push(mv);
        }
    } else {
        let mut mv = Move::new(from, to, piece);
        if let Some(captured) = capture {
            mv = mv.with_capture(captured);
        }
        moves.push(mv);
    }
}

fn add_leaper_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let target = match square::step(from, df, dr) {
            Some(sq) => sq,
            None => continue,
        };
        match board.get(target) {
            None => moves.push(Move::new(from, target, piece)),
            Some(occupant) if occupant.color != piece.color => {
                moves.push(Move::new(from, target, piece).with_capture(occupant.kind));
            }
            Some(_) => {}
        }
    }
}

fn add_slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut current = from;
        loop {
            let target = match square::step(current, df, dr) {
                Some(sq) => sq,
                None => break,
            };
            match board.get(target) {
                None => {
                    moves.push(Move::new(from, target, piece));
                    current = target;
                }
                Some(occupant) if occupant.color != piece.color => {
                    moves.push(Move::new(from, target, piece).with_capture(occupant.kind));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Whether any `by`-colored piece currently attacks `square`, computed by
/// walking the reverse rays/offsets from `square` rather than by generating and
/// filtering a full move list — a pawn's quiet push onto an empty square is
/// not an attack on that square, which a naive "does some pseudo-legal move
/// land here" check would get wrong. Used by `make_unmake` for check and
/// castle-through-check detection.
pub(crate) fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let pawn_back = -forward(by);
    for &delta_file in &[-1, 1] {
        if let Some(origin) = square::step(square, delta_file, pawn_back) {
            if let Some(p) = board.get(origin) {
                if p.color == by && p.kind == PieceKind::Pawn {
                    return true;
                }
            }
        }
    }

    for &(df, dr) in &KNIGHT_DIRS {
        if let Some(origin) = square::step(square, df, dr) {
            if let Some(p) = board.get(origin) {
                if p.color == by && p.kind == PieceKind::Knight {
                    return true;
                }
            }
        }
    }

    let king_dirs: [(i8, i8); 8] = [
        ROOK_DIRS[0],
        ROOK_DIRS[1],
        ROOK_DIRS[2],
        ROOK_DIRS[3],
        BISHOP_DIRS[0],
        BISHOP_DIRS[1],
        BISHOP_DIRS[2],
        BISHOP_DIRS[3],
    ];
    for &(df, dr) in &king_dirs {
        if let Some(origin) = square::step(square, df, dr) {
            if let Some(p) = board.get(origin) {
                if p.color == by && p.kind == PieceKind::King {
                    return true;
                }
            }
        }
    }

    if ray_attacks(board, square, by, &ROOK_DIRS, &[PieceKind::Rook, PieceKind::Queen]) {
        return true;
    }
    if ray_attacks(board, square, by, &BISHOP_DIRS, &[PieceKind::Bishop, PieceKind::Queen]) {
        return true;
    }

    false
}

fn ray_attacks(
    board: &Board,
    square: Square,
    by: Color,
    dirs: &[(i8, i8)],
    attacker_kinds: &[PieceKind],
) -> bool {
    for &(df, dr) in dirs {
        let mut current = square;
        loop {
            let next = match square::step(current, df, dr) {
                Some(sq) => sq,
                None => break,
            };
            match board.get(next) {
                None => current = next,
                Some(p) => {
                    if p.color == by && attacker_kinds.contains(&p.kind) {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

fn add_castle_moves(board: &Board, moves: &mut Vec<Move>) {
    use crate::board::square::{A1, A8, B1, B8, C1, C8, D1, D8, E1, E8, F1, F8, G1, G8, H1, H8};
    let _ = (H1, H8); // rook corners aren't touched during generation, only during make

    match board.side_to_move() {
        Color::White => {
            if board.has_castling_right(WHITE_SHORT)
                && board.get(F1).is_none()
                && board.get(G1).is_none()
            {
                moves.push(Move::castle(E1, G1, Piece::new(PieceKind::King, Color::White)));
            }
            if board.has_castling_right(WHITE_LONG)
                && board.get(D1).is_none()
                && board.get(C1).is_none()
                && board.get(B1).is_none()
            {
                moves.push(Move::castle(E1, C1, Piece::new(PieceKind::King, Color::White)));
            }
        }
        Color::Black => {
            if board.has_castling_right(BLACK_SHORT)
                && board.get(F8).is_none()
                && board.get(G8).is_none()
            {
                moves.push(Move::castle(E8, G8, Piece::new(PieceKind::King, Color::Black)));
            }
            if board.has_castling_right(BLACK_LONG)
                && board.get(D8).is_none()
                && board.get(C8).is_none()
                && board.get(B8).is_none()
            {
                moves.push(Move::castle(E8, C8, Piece::new(PieceKind::King, Color::Black)));
            }
        }
    }
}
