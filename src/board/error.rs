use thiserror::Error;

/// Failures raised while parsing a FEN string. Never produced by make/unmake —
/// those report illegality as a plain `bool` (see `moves::make_unmake`).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FenParseError {
    #[error("expected 6 whitespace-separated fields, found {found}")]
    WrongFieldCount { found: usize },
    #[error("rank {rank_index} (`{rank}`) does not describe exactly 8 squares")]
    RankWrongLength { rank_index: usize, rank: String },
    #[error("`{0}` is not a recognized piece letter or empty-square digit")]
    UnknownPieceChar(char),
    #[error("`{0}` is not `w` or `b`")]
    InvalidSideToMove(String),
    #[error("`{0}` is not a valid castling rights field")]
    InvalidCastlingRights(String),
    #[error("`{0}` is not a valid en passant target square")]
    InvalidEnPassantSquare(String),
    #[error("`{field}` is not a valid non-negative integer for the {which} clock")]
    InvalidClock { field: String, which: &'static str },
}
