//! Universal code (eHex): 0-33 as a single character, skipping I and O.

use crate::domain::model::Starport;
use crate::utils::error::{Result, WorldGenError};

pub const ALPHABET: &[u8; 34] = b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

pub const SEPARATOR: char = '-';

/// Input to the encoder: either a raw value or a character that is already
/// encoded (including the separator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UcValue {
    Raw(i64),
    Encoded(char),
}

impl From<i32> for UcValue {
    fn from(value: i32) -> Self {
        UcValue::Raw(value.into())
    }
}

impl From<char> for UcValue {
    fn from(value: char) -> Self {
        UcValue::Encoded(value)
    }
}

impl From<Starport> for UcValue {
    fn from(value: Starport) -> Self {
        UcValue::Encoded(value.code())
    }
}

pub fn encode(value: UcValue) -> Result<char> {
    match value {
        UcValue::Raw(n) => usize::try_from(n)
            .ok()
            .and_then(|i| ALPHABET.get(i))
            .map(|&b| b as char)
            .ok_or(WorldGenError::CodeOutOfRange { value: n }),
        UcValue::Encoded(c) if c == SEPARATOR || decode(c).is_some() => Ok(c),
        UcValue::Encoded(c) => Err(WorldGenError::InvalidCode { value: c }),
    }
}

/// Inverse of `encode` for raw values.
pub fn decode(code: char) -> Option<u8> {
    if !code.is_ascii() {
        return None;
    }
    ALPHABET.iter().position(|&b| b == code as u8).map(|i| i as u8)
}
