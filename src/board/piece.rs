use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// The four kinds a pawn may promote to, in the order this crate always
    /// expands them: queen first, since it is overwhelmingly the common case.
    pub const PROMOTION_KINDS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    pub fn to_fen_char(self) -> char {
        let upper = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match self.color {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

/// Piece inventory counts, indexed by color and kind. A small fixed-size array
/// rather than a hash map since the key space is exactly 12 and never grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceCount {
    counts: [[u8; 6]; 2],
}

impl Default for PieceCount {
    fn default() -> Self {
        PieceCount {
            counts: [[0; 6]; 2],
        }
    }
}

impl PieceCount {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, color: Color, kind: PieceKind) -> u8 {
        self.counts[color as usize][kind.index()]
    }

    pub fn increment(&mut self, color: Color, kind: PieceKind) {
        self.counts[color as usize][kind.index()] += 1;
    }

    pub fn decrement(&mut self, color: Color, kind: PieceKind) {
        debug_assert!(self.counts[color as usize][kind.index()] > 0);
        self.counts[color as usize][kind.index()] -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_char_round_trip() {
        for &kind in PieceKind::ALL.iter() {
            for &color in &[Color::White, Color::Black] {
                let piece = Piece::new(kind, color);
                let c = piece.to_fen_char();
                assert_eq!(Piece::from_fen_char(c), Some(piece));
            }
        }
    }

    #[test]
    fn test_piece_count_increment_decrement() {
        let mut counts = PieceCount::new();
        assert_eq!(counts.get(Color::White, PieceKind::Pawn), 0);
        counts.increment(Color::White, PieceKind::Pawn);
        counts.increment(Color::White, PieceKind::Pawn);
        assert_eq!(counts.get(Color::White, PieceKind::Pawn), 2);
        counts.decrement(Color::White, PieceKind::Pawn);
        assert_eq!(counts.get(Color::White, PieceKind::Pawn), 1);
    }
}
