// crates/verifier-harness-core/tests/proptest_signed.rs
// ============================================================================
// Module: Signed Codec Property-Based Tests
// Description: Round-trip properties for the two's-complement codec.
// Purpose: Ensure the codec is lossless across narrow and very wide widths.
// Dependencies: verifier-harness-core, num-bigint, proptest
// ============================================================================

//! ## Overview
//! These tests check that decoding and encoding are inverse operations for
//! bit widths well past 128:
//! - Any in-range value survives encode-then-decode.
//! - Any bit string survives decode-then-encode at its own width.
//! - Decoded values stay inside the signed range of their width.
//! - Arbitrary strings never panic the decoder.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use num_bigint::BigInt;
use proptest::collection::vec;
use proptest::prelude::*;
use verifier_harness_core::decode_signed;
use verifier_harness_core::encode_signed;
use verifier_harness_core::signed_range;

// ============================================================================
// SECTION: Strategies
// ============================================================================

/// Widest pattern exercised by the round-trip properties.
const MAX_TEST_WIDTH: usize = 300;

/// Strategy producing a width and a value representable in that width.
///
/// The magnitude uses `width - 1` random bits, so negative values
/// `-(magnitude + 1)` reach the most negative pattern.
fn width_and_value() -> impl Strategy<Value = (usize, BigInt)> {
    (1 ..= MAX_TEST_WIDTH).prop_flat_map(|width| {
        (Just(width), vec(any::<bool>(), width - 1), any::<bool>()).prop_map(
            |(width, bits, negative)| {
                let magnitude: BigInt = bits
                    .into_iter()
                    .fold(BigInt::from(0), |acc, bit| (acc << 1u8) + u8::from(bit));
                let value = if negative { -(magnitude + 1u8) } else { magnitude };
                (width, value)
            },
        )
    })
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn encode_then_decode_returns_value((width, value) in width_and_value()) {
        let bits = encode_signed(&value, width).unwrap();
        prop_assert_eq!(bits.len(), width);
        prop_assert_eq!(decode_signed(&bits).unwrap(), value);
    }

    #[test]
    fn decode_then_encode_returns_bits(bits in "[01]{1,300}") {
        let value = decode_signed(&bits).unwrap();
        prop_assert_eq!(encode_signed(&value, bits.len()).unwrap(), bits);
    }

    #[test]
    fn decoded_values_stay_in_range(bits in "[01]{1,300}") {
        let value = decode_signed(&bits).unwrap();
        let (min, max) = signed_range(bits.len()).unwrap();
        prop_assert!(min <= value && value <= max);
    }

    #[test]
    fn decoder_never_panics(input in ".{0,320}") {
        let _ = decode_signed(&input);
    }
}
