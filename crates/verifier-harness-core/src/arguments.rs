// crates/verifier-harness-core/src/arguments.rs
// ============================================================================
// Module: Harness Arguments
// Description: Conversion of raw command-line values into signed integers.
// Purpose: Select decimal or two's-complement decoding for every argument.
// Dependencies: crate::signed, num-bigint, serde, thiserror
// ============================================================================

//! ## Overview
//! Harness arguments arrive as strings. In [`ArgumentMode::Decimal`] each is
//! parsed as a signed decimal integer of any magnitude; in
//! [`ArgumentMode::Binary`] each is decoded as a fixed-width two's-complement
//! bit string whose width is its length. Parsing stops at the first malformed
//! argument.

// ============================================================================
// SECTION: Imports
// ============================================================================

use num_bigint::BigInt;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::signed::DecodeError;
use crate::signed::decode_signed;
use crate::signed::decode_signed_bounded;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Interpretation applied to every harness argument.
///
/// # Invariants
/// - Variants are stable for CLI parsing and config files.
/// - [`ArgumentMode::Decimal`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentMode {
    /// Plain signed decimal integers.
    #[default]
    Decimal,
    /// Two's-complement bit strings.
    Binary,
}

impl ArgumentMode {
    /// Returns the canonical mode label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Binary => "binary",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Reason a single argument could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Text is not an optional `+`/`-` followed by ASCII digits.
    #[error("not a decimal integer")]
    Decimal,
    /// Two's-complement decoding failed.
    #[error("not a signed binary string: {0}")]
    Binary(#[source] DecodeError),
}

/// Argument conversion failure with its position in the argument list.
///
/// # Invariants
/// - `index` is zero-based and refers to the first malformed argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("argument {index} `{raw}` is {reason}")]
pub struct ArgumentError {
    /// Zero-based argument position.
    pub index: usize,
    /// Raw argument text as received.
    pub raw: String,
    /// Underlying conversion failure.
    #[source]
    pub reason: InvalidArgument,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Converts one raw argument according to `mode`.
///
/// `max_width` bounds binary inputs when set and is ignored for decimal inputs.
///
/// # Errors
///
/// Returns [`InvalidArgument`] when the argument is malformed for `mode`.
pub fn parse_argument(
    raw: &str,
    mode: ArgumentMode,
    max_width: Option<usize>,
) -> Result<BigInt, InvalidArgument> {
    match mode {
        ArgumentMode::Decimal => parse_decimal(raw),
        ArgumentMode::Binary => {
            let decoded = match max_width {
                Some(max_width) => decode_signed_bounded(raw, max_width),
                None => decode_signed(raw),
            };
            decoded.map_err(InvalidArgument::Binary)
        }
    }
}

/// Converts every raw argument according to `mode`, preserving order.
///
/// # Errors
///
/// Returns [`ArgumentError`] for the first malformed argument.
pub fn parse_arguments<I, S>(
    raws: I,
    mode: ArgumentMode,
    max_width: Option<usize>,
) -> Result<Vec<BigInt>, ArgumentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            parse_argument(raw, mode, max_width).map_err(|reason| ArgumentError {
                index,
                raw: raw.to_string(),
                reason,
            })
        })
        .collect()
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders parsed values as a bracketed, comma-separated list (`[7, -8]`).
#[must_use]
pub fn format_arguments(values: &[BigInt]) -> String {
    let joined = values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses `[+-]?[0-9]+` into an arbitrary-precision integer.
fn parse_decimal(raw: &str) -> Result<BigInt, InvalidArgument> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(InvalidArgument::Decimal);
    }
    BigInt::parse_bytes(raw.as_bytes(), 10).ok_or(InvalidArgument::Decimal)
}
