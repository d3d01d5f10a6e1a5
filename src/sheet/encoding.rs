//! The sign-up sheet is exported as ISO-8859-1. Every byte is exactly one code
//! point, so decoding cannot fail and encoding fails only for characters that
//! were never part of an export.

use crate::error::RosterError;

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

pub fn encode_latin1(text: &str) -> Result<Vec<u8>, RosterError> {
    text.chars()
        .map(|character| u8::try_from(u32::from(character)).map_err(|_| RosterError::Encoding { character }))
        .collect()
}
