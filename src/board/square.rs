//! Square indices and the handful of conversions the rest of the crate needs.
//!
//! A square is a plain `u8` in `0..64`. `a1 = 0`, `h1 = 7`, `a2 = 8`, ..., `h8 = 63`.
//! There is no wrapper type: every other module in this crate treats squares as
//! indices into `Board::squares`, and a newtype would only get in the way of that.

pub type Square = u8;

pub const A1: Square = 0;
pub const B1: Square = 1;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const B8: Square = 57;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

/// File of a square, 0 (`a`) through 7 (`h`).
pub fn file(square: Square) -> i8 {
    (square % 8) as i8
}

/// Rank of a square, 0 (rank 1) through 7 (rank 8).
pub fn rank(square: Square) -> i8 {
    (square / 8) as i8
}

pub fn from_file_rank(file: i8, rank: i8) -> Option<Square> {
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return None;
    }
    Some((rank * 8 + file) as Square)
}

/// Steps `square` by `(delta_file, delta_rank)`, returning `None` if the result
/// would fall off the board in either dimension. This is the one place file-wrap
/// is guarded: every direction table in `generate` goes through this function
/// rather than adding raw deltas to a square index.
pub fn step(square: Square, delta_file: i8, delta_rank: i8) -> Option<Square> {
    from_file_rank(file(square) + delta_file, rank(square) + delta_rank)
}

pub fn to_algebraic(square: Square) -> String {
    let file_char = (b'a' + file(square) as u8) as char;
    let rank_char = (b'1' + rank(square) as u8) as char;
    format!("{}{}", file_char, rank_char)
}

pub fn from_algebraic(s: &str) -> Option<Square> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = match bytes[0] {
        b'a'..=b'h' => (bytes[0] - b'a') as i8,
        _ => return None,
    };
    let rank = match bytes[1] {
        b'1'..=b'8' => (bytes[1] - b'1') as i8,
        _ => return None,
    };
    from_file_rank(file, rank)
}

pub const ORDERED: [Square; 64] = {
    let mut squares = [0; 64];
    let mut i = 0;
    while i < 64 {
        squares[i] = i as Square;
        i += 1;
    }
    squares
};


// A handful of named squares used by tests throughout the crate, mirroring
// algebraic notation so test bodies read naturally.
pub const A2: Square = 8;
pub const B2: Square = 9;
pub const C2: Square = 10;
pub const D2: Square = 11;
pub const E2: Square = 12;
pub const F2: Square = 13;
pub const G2: Square = 14;
pub const H2: Square = 15;
pub const A3: Square = 16;
pub const B3: Square = 17;
pub const C3: Square = 18;
pub const D3: Square = 19;
pub const E3: Square = 20;
pub const F3: Square = 21;
pub const G3: Square = 22;
pub const H3: Square = 23;
pub const A4: Square = 24;
pub const B4: Square = 25;
pub const C4: Square = 26;
pub const D4: Square = 27;
pub const E4: Square = 28;
pub const F4: Square = 29;
pub const G4: Square = 30;
pub const H4: Square = 31;
pub const A5: Square = 32;
pub const B5: Square = 33;
pub const C5: Square = 34;
pub const D5: Square = 35;
pub const E5: Square = 36;
pub const F5: Square = 37;
pub const G5: Square = 38;
pub const H5: Square = 39;
pub const A6: Square = 40;
pub const B6: Square = 41;
pub const C6: Square = 42;
pub const D6: Square = 43;
pub const E6: Square = 44;
pub const F6: Square = 45;
pub const G6: Square = 46;
pub const H6: Square = 47;
pub const A7: Square = 48;
pub const B7: Square = 49;
pub const C7: Square = 50;
pub const D7: Square = 51;
pub const E7: Square = 52;
pub const F7: Square = 53;
pub const G7: Square = 54;
pub const H7: Square = 55;
