// crates/verifier-harness-core/src/lib.rs
// ============================================================================
// Module: Verifier Harness Core Library
// Description: Public API surface for the verifier harness core.
// Purpose: Expose the signed binary codec, argument parsing, and entry seams.
// Dependencies: crate::{arguments, entry, signed, verifier}
// ============================================================================

//! ## Overview
//! The verifier harness wraps command-line values and feeds them into a
//! verification entry point whose body is interpreted by an external static
//! or symbolic verification tool. The only executable logic is argument
//! conversion: decimal parsing or fixed-width two's-complement decoding into
//! arbitrary-precision integers.
//! Everything else is a seam ([`EntryBody`], [`Verifier`]) with no-op
//! defaults.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod arguments;
pub mod entry;
pub mod signed;
pub mod verifier;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use arguments::ArgumentError;
pub use arguments::ArgumentMode;
pub use arguments::InvalidArgument;
pub use arguments::format_arguments;
pub use arguments::parse_argument;
pub use arguments::parse_arguments;
pub use entry::Binding;
pub use entry::EntryBody;
pub use entry::EntryError;
pub use entry::EntryPoint;
pub use entry::Invocation;
pub use entry::MAX_ENTRY_PARAMS;
pub use entry::PLACEHOLDER_ENTRY_NAME;
pub use entry::PLACEHOLDER_ENTRY_PARAMS;
pub use entry::PlaceholderBody;
pub use signed::DecodeError;
pub use signed::EncodeError;
pub use signed::decode_signed;
pub use signed::decode_signed_bounded;
pub use signed::encode_signed;
pub use signed::signed_range;
pub use verifier::ASSERT_HOOK;
pub use verifier::ASSUME_HOOK;
pub use verifier::NoopVerifier;
pub use verifier::Verifier;
