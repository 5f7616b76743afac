//! Base64-to-text decoding.
//!
//! Wraps the `base64` crate's standard-alphabet engine with the forgiving
//! behavior users expect from a paste box: ASCII whitespace is ignored and
//! padding may be present or absent. Decoded bytes are rendered as text with
//! lossy UTF-8 conversion - the output is displayed, not re-parsed, so
//! non-text bytes become replacement characters instead of errors.

use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::{alphabet, Engine};
use thiserror::Error;

/// Errors that can occur while decoding.
///
/// The underlying primitive only fails on malformed encodings (bad alphabet
/// characters, impossible lengths, broken padding), so this stays a single
/// variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not valid Base64.
    #[error("Input is not valid Base64")]
    InvalidEncoding,
}

/// Standard-alphabet engine that accepts both padded and unpadded input.
const PERMISSIVE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes a Base64 string to text.
///
/// ASCII whitespace anywhere in the input is stripped before decoding, so
/// wrapped or indented pastes work. Decoding is deterministic and has no
/// side effects; there are no partial results.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidEncoding`] if the remaining input is not
/// well-formed Base64.
pub fn decode(raw: &str) -> Result<String, DecodeError> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = PERMISSIVE
        .decode(compact.as_bytes())
        .map_err(|_| DecodeError::InvalidEncoding)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
