//! Square identifiers in coordinate form (for example `e4`).
//!
//! Only single squares are converted here; move notation is not supported.

use std::str::FromStr;

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("invalid square text: {0:?} (expected file a-h followed by rank 1-8)")]
    InvalidLength(String),
    #[error("invalid file: {0:?}")]
    InvalidFile(char),
    #[error("invalid rank: {0:?}")]
    InvalidRank(char),
}

/// Convert coordinate text (`"e4"`, case-insensitive file) to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, SquareParseError> {
    let mut chars = text.trim().chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(SquareParseError::InvalidLength(text.to_owned()));
    };

    let file_lower = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file_lower) {
        return Err(SquareParseError::InvalidFile(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(SquareParseError::InvalidRank(rank));
    }

    let file_index = file_lower as u8 - b'a';
    let rank_index = rank as u8 - b'1';
    Square::new(file_index, rank_index).ok_or_else(|| SquareParseError::InvalidLength(text.to_owned()))
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// Test shorthand: parse a square literal known to be valid.
#[cfg(test)]
pub(crate) fn sq(text: &str) -> Square {
    algebraic_to_square(text).expect("test square literal should parse")
}
