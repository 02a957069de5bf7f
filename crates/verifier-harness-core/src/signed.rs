// crates/verifier-harness-core/src/signed.rs
// ============================================================================
// Module: Signed Binary Codec
// Description: Fixed-width two's-complement decoding and encoding.
// Purpose: Convert `0`/`1` strings to signed integers and back.
// Dependencies: num-bigint, num-traits, thiserror
// ============================================================================

//! ## Overview
//! A bit string of length `N` is read as an unsigned base-2 number. When the
//! most significant bit is set, `2^N` is subtracted to obtain the signed
//! value. Values are arbitrary-precision [`BigInt`]s, so any width `N >= 1`
//! decodes; callers that want a ceiling use [`decode_signed_bounded`].
//!
//! ## Invariants
//! - Input is validated before conversion: non-empty, `0`/`1` only.
//! - The result of an `N`-bit decode lies in `[-2^(N-1), 2^(N-1) - 1]`.
//! - `decode_signed(&encode_signed(v, n)?)? == v` for every representable `v`.
//! - `encode_signed(&decode_signed(s)?, s.len())? == s` for every valid `s`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use num_traits::One;
use num_traits::Zero;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while decoding a signed bit string.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `position` is a zero-based character offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input contained no digits.
    #[error("binary string is empty")]
    Empty,
    /// Input contained a character outside `{0, 1}`.
    #[error("invalid binary digit '{found}' at position {position}")]
    InvalidDigit {
        /// Zero-based character offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
    /// Input is wider than the caller's width ceiling.
    #[error("binary string is {width} bits wide (limit {max})")]
    WidthExceeded {
        /// Width of the rejected input.
        width: usize,
        /// Width ceiling in effect.
        max: usize,
    },
}

/// Errors raised while encoding a signed value as a bit string.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Requested width is zero.
    #[error("bit width must be at least 1")]
    ZeroWidth,
    /// Value does not fit in the requested width.
    #[error("value {value} does not fit in {width} signed bits")]
    OutOfRange {
        /// Value that was requested.
        value: BigInt,
        /// Requested width.
        width: usize,
    },
}

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Decodes a two's-complement bit string whose width is its length.
///
/// # Errors
///
/// Returns [`DecodeError`] when the input is empty or contains characters
/// other than `0`/`1`.
pub fn decode_signed(bits: &str) -> Result<BigInt, DecodeError> {
    validate_bits(bits)?;
    Ok(decode_validated(bits))
}

/// Decodes a two's-complement bit string, rejecting inputs wider than `max_width`.
///
/// # Errors
///
/// Returns [`DecodeError`] when the input is empty, contains characters other
/// than `0`/`1`, or is wider than `max_width`.
pub fn decode_signed_bounded(bits: &str, max_width: usize) -> Result<BigInt, DecodeError> {
    validate_bits(bits)?;
    if bits.len() > max_width {
        return Err(DecodeError::WidthExceeded {
            width: bits.len(),
            max: max_width,
        });
    }
    Ok(decode_validated(bits))
}

/// Rejects empty input and characters outside the binary alphabet.
fn validate_bits(bits: &str) -> Result<(), DecodeError> {
    if bits.is_empty() {
        return Err(DecodeError::Empty);
    }
    let invalid = bits.chars().enumerate().find(|(_, ch)| !matches!(ch, '0' | '1'));
    if let Some((position, found)) = invalid {
        return Err(DecodeError::InvalidDigit {
            position,
            found,
        });
    }
    Ok(())
}

/// Converts a validated bit string; the width is its byte length.
fn decode_validated(bits: &str) -> BigInt {
    let magnitude = bits
        .bytes()
        .fold(BigUint::zero(), |acc, digit| (acc << 1u8) + u8::from(digit == b'1'));
    let value = BigInt::from(magnitude);
    if bits.starts_with('1') { value - (BigInt::one() << bits.len()) } else { value }
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Returns the inclusive signed range `[-2^(w-1), 2^(w-1) - 1]`.
///
/// Returns `None` when `width` is zero.
#[must_use]
pub fn signed_range(width: usize) -> Option<(BigInt, BigInt)> {
    let half = BigInt::one() << width.checked_sub(1)?;
    let max = &half - BigInt::one();
    Some((-half, max))
}

/// Encodes `value` as a `width`-bit two's-complement string.
///
/// # Errors
///
/// Returns [`EncodeError`] when `width` is zero or `value` does not fit.
pub fn encode_signed(value: &BigInt, width: usize) -> Result<String, EncodeError> {
    let (min, max) = signed_range(width).ok_or(EncodeError::ZeroWidth)?;
    if *value < min || *value > max {
        return Err(EncodeError::OutOfRange {
            value: value.clone(),
            width,
        });
    }
    let pattern = match value.sign() {
        Sign::Minus => value + (BigInt::one() << width),
        Sign::NoSign | Sign::Plus => value.clone(),
    };
    let digits = pattern.magnitude().to_str_radix(2);
    Ok(format!("{digits:0>width$}"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
