//! Forsyth-Edwards Notation parsing and emission.
//!
//! A FEN record contains six fields separated by single spaces:
//!   1. Piece placement (from White's perspective), rank 8 down to rank 1,
//!      file a through h within each rank. Digits 1-8 denote consecutive empty
//!      squares; letters from `PNBRQKpnbrqk` place pieces; `/` separates ranks.
//!   2. Active color: `w` or `b`.
//!   3. Castling availability: any subset of `KQkq`, or `-`.
//!   4. En passant target square in algebraic notation, or `-`.
//!   5. Halfmove clock: plies since the last capture or pawn advance.
//!   6. Fullmove number: starts at 1, incremented after Black's move.
//!
//! Starting position: `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`

use regex::Regex;

use super::error::FenParseError;
use super::piece::Piece;
use super::square;
use super::{Board, BLACK_LONG, BLACK_SHORT, WHITE_LONG, WHITE_SHORT};

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn rank_regex() -> Regex {
    Regex::new(
        r"(?x)
        ^
        ([pnbrqkPNBRQK1-8]{1,8}) # first rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # second rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # third rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # fourth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # fifth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # sixth rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # seventh rank
        /
        ([pnbrqkPNBRQK1-8]{1,8}) # eighth rank
        $
        ",
    )
    .expect("placement regex is a compile-time constant")
}

impl Board {
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenParseError::WrongFieldCount {
                found: fields.len(),
            });
        }
        let [placement, side, castling, en_passant, halfmove, fullmove]: [&str; 6] =
            fields.try_into().unwrap();

        let re = rank_regex();
        let caps = re
            .captures(placement)
            .ok_or_else(|| FenParseError::RankWrongLength {
                rank_index: 0,
                rank: placement.to_string(),
            })?;

        let mut board = Self::new();

        for capture_group in 1..=8 {
            let rank_str = &caps[capture_group];
            let rank = 8 - capture_group;
            let mut file = 0usize;

            for fen_char in rank_str.chars() {
                if let Some(piece) = Piece::from_fen_char(fen_char) {
                    if file >= 8 {
                        return Err(FenParseError::RankWrongLength {
                            rank_index: capture_group - 1,
                            rank: rank_str.to_string(),
                        });
                    }
                    let sq = square::from_file_rank(file as i8, rank as i8).unwrap();
                    board
                        .put(sq, piece)
                        .expect("from_fen placement cannot collide within a rank");
                    file += 1;
                } else if let Some(empty_count) = fen_char.to_digit(10) {
                    file += empty_count as usize;
                } else {
                    return Err(FenParseError::UnknownPieceChar(fen_char));
                }
            }

            if file != 8 {
                return Err(FenParseError::RankWrongLength {
                    rank_index: capture_group - 1,
                    rank: rank_str.to_string(),
                });
            }
        }

        board.side_to_move = match side {
            "w" => super::piece::Color::White,
            "b" => super::piece::Color::Black,
            _ => return Err(FenParseError::InvalidSideToMove(side.to_string())),
        };

        board.castling_rights = parse_castling_rights(castling)?;

        board.en_passant_square = match en_passant {
            "-" => None,
            s => Some(
                square::from_algebraic(s)
                    .ok_or_else(|| FenParseError::InvalidEnPassantSquare(s.to_string()))?,
            ),
        };

        board.halfmove_clock = halfmove.parse().map_err(|_| FenParseError::InvalidClock {
            field: halfmove.to_string(),
            which: "halfmove",
        })?;
        board.fullmove_number = fullmove.parse().map_err(|_| FenParseError::InvalidClock {
            field: fullmove.to_string(),
            which: "fullmove",
        })?;

        board.regenerate_pseudolegal_moves();

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let sq = square::from_file_rank(file, rank).unwrap();
                match self.get(sq) {
                    Some(piece) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        placement.push(piece.to_fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        let side = match self.side_to_move {
            super::piece::Color::White => "w",
            super::piece::Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castling_rights[WHITE_SHORT] {
            castling.push('K');
        }
        if self.castling_rights[WHITE_LONG] {
            castling.push('Q');
        }
        if self.castling_rights[BLACK_SHORT] {
            castling.push('k');
        }
        if self.castling_rights[BLACK_LONG] {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = match self.en_passant_square {
            Some(sq) => square::to_algebraic(sq),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            placement, side, castling, en_passant, self.halfmove_clock, self.fullmove_number
        )
    }
}

fn parse_castling_rights(field: &str) -> Result<[bool; 4], FenParseError> {
    if field == "-" {
        return Ok([false; 4]);
    }
    if field.is_empty() || field.len() > 4 || !field.chars().all(|c| "KQkq".contains(c)) {
        return Err(FenParseError::InvalidCastlingRights(field.to_string()));
    }
    let mut rights = [false; 4];
    rights[WHITE_SHORT] = field.contains('K');
    rights[WHITE_LONG] = field.contains('Q');
    rights[BLACK_SHORT] = field.contains('k');
    rights[BLACK_LONG] = field.contains('q');
    Ok(rights)
}
