// crates/verifier-harness-core/src/verifier.rs
// ============================================================================
// Module: Verifier Hooks
// Description: Assertion and assumption hooks consumed by external verifiers.
// Purpose: Give entry bodies a stable hook vocabulary with no runtime effect.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Static and symbolic verification tools recognize calls to
//! `__VERIFIER_assert` and `__VERIFIER_assume` and reason about their
//! arguments. At runtime the hooks do nothing; [`NoopVerifier`] is the only
//! implementation the harness ships.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Symbol name external tools use for the assertion hook.
pub const ASSERT_HOOK: &str = "__VERIFIER_assert";
/// Symbol name external tools use for the assumption hook.
pub const ASSUME_HOOK: &str = "__VERIFIER_assume";

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Hooks available to an entry body.
pub trait Verifier {
    /// Records that `condition` must hold at this point.
    fn assert(&self, condition: bool);
    /// Records that `condition` may be assumed from this point on.
    fn assume(&self, condition: bool);
}

/// Verifier whose hooks have no effect.
///
/// # Invariants
/// - Conditions are intentionally discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVerifier;

impl Verifier for NoopVerifier {
    fn assert(&self, _condition: bool) {}

    fn assume(&self, _condition: bool) {}
}
