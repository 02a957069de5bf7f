// crates/verifier-harness-config/src/lib.rs
// ============================================================================
// Module: Verifier Harness Config Library
// Description: Canonical config model and validation for the harness.
// Purpose: Single source of truth for verifier-harness.toml semantics.
// Dependencies: verifier-harness-core, serde, toml
// ============================================================================

//! ## Overview
//! `verifier-harness-config` defines the configuration model for the
//! verifier harness: how arguments are interpreted and which entry point
//! receives them. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
