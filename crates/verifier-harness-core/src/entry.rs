// crates/verifier-harness-core/src/entry.rs
// ============================================================================
// Module: Verification Entry Point
// Description: Named entry point with positional parameters and a body seam.
// Purpose: Bind parsed harness values to parameters and run the entry body.
// Dependencies: crate::verifier, num-bigint, thiserror
// ============================================================================

//! ## Overview
//! An [`EntryPoint`] describes the function the harness calls: a name and an
//! ordered parameter list. Invocation binds values positionally and hands the
//! bindings to an [`EntryBody`] together with the [`Verifier`] hooks. The
//! shipped body is [`PlaceholderBody`], which does nothing; verification
//! tools substitute their own.
//!
//! ## Invariants
//! - Entry and parameter names are ASCII identifiers.
//! - Parameter names are unique and bounded by [`MAX_ENTRY_PARAMS`].
//! - The body never runs when the argument count differs from the arity.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use num_bigint::BigInt;
use thiserror::Error;

use crate::verifier::Verifier;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum number of parameters an entry point may declare.
pub const MAX_ENTRY_PARAMS: usize = 64;
/// Name of the placeholder entry point.
pub const PLACEHOLDER_ENTRY_NAME: &str = "main";
/// Parameters of the placeholder entry point.
pub const PLACEHOLDER_ENTRY_PARAMS: &[&str] = &["a", "b", "c", "d"];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Entry point construction and invocation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Entry name is not an identifier.
    #[error("entry point name `{0}` is not a valid identifier")]
    InvalidName(String),
    /// A parameter name is not an identifier.
    #[error("parameter `{param}` of entry point `{entry}` is not a valid identifier")]
    InvalidParam {
        /// Entry point name.
        entry: String,
        /// Offending parameter name.
        param: String,
    },
    /// A parameter name is declared twice.
    #[error("parameter `{param}` of entry point `{entry}` is declared more than once")]
    DuplicateParam {
        /// Entry point name.
        entry: String,
        /// Repeated parameter name.
        param: String,
    },
    /// Too many parameters were declared.
    #[error("entry point `{entry}` declares {count} parameters (limit {max})")]
    TooManyParams {
        /// Entry point name.
        entry: String,
        /// Declared parameter count.
        count: usize,
        /// Parameter limit.
        max: usize,
    },
    /// Argument count does not match the declared parameters.
    #[error("entry point `{entry}` takes {expected} arguments but {actual} were given")]
    ArityMismatch {
        /// Entry point name.
        entry: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },
}

// ============================================================================
// SECTION: Invocation Types
// ============================================================================

/// A parameter bound to its argument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Parameter name.
    pub name: String,
    /// Bound value.
    pub value: BigInt,
}

/// Record of a completed entry point invocation.
///
/// # Invariants
/// - `bindings` follow parameter declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Entry point name.
    pub entry: String,
    /// Bound parameters.
    pub bindings: Vec<Binding>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.entry)?;
        for (index, binding) in self.bindings.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", binding.name, binding.value)?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// SECTION: Entry Body
// ============================================================================

/// Body executed when an entry point is invoked.
pub trait EntryBody {
    /// Runs the body against bound parameters.
    fn run(&self, bindings: &[Binding], verifier: &dyn Verifier);
}

/// Entry body with no statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderBody;

impl EntryBody for PlaceholderBody {
    fn run(&self, _bindings: &[Binding], _verifier: &dyn Verifier) {}
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Named entry point with positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Entry point name.
    name: String,
    /// Ordered parameter names.
    params: Vec<String>,
}

impl EntryPoint {
    /// Builds an entry point after validating its name and parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] when a name is not an identifier, a parameter
    /// repeats, or more than [`MAX_ENTRY_PARAMS`] parameters are declared.
    pub fn new<I, S>(name: impl Into<String>, params: I) -> Result<Self, EntryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(EntryError::InvalidName(name));
        }
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        if params.len() > MAX_ENTRY_PARAMS {
            return Err(EntryError::TooManyParams {
                entry: name,
                count: params.len(),
                max: MAX_ENTRY_PARAMS,
            });
        }
        let mut seen = BTreeSet::new();
        for param in &params {
            if !is_identifier(param) {
                return Err(EntryError::InvalidParam {
                    entry: name,
                    param: param.clone(),
                });
            }
            if !seen.insert(param.as_str()) {
                return Err(EntryError::DuplicateParam {
                    entry: name,
                    param: param.clone(),
                });
            }
        }
        Ok(Self {
            name,
            params,
        })
    }

    /// Returns the placeholder entry point `main(a, b, c, d)`.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_ENTRY_NAME.to_string(),
            params: PLACEHOLDER_ENTRY_PARAMS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns the entry point name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared parameter names.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Binds `args` positionally and runs `body` with the verifier hooks.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::ArityMismatch`] when `args` does not match the
    /// declared parameter count; the body is not run in that case.
    pub fn invoke(
        &self,
        args: &[BigInt],
        body: &dyn EntryBody,
        verifier: &dyn Verifier,
    ) -> Result<Invocation, EntryError> {
        if args.len() != self.params.len() {
            return Err(EntryError::ArityMismatch {
                entry: self.name.clone(),
                expected: self.params.len(),
                actual: args.len(),
            });
        }
        let bindings: Vec<Binding> = self
            .params
            .iter()
            .zip(args)
            .map(|(name, value)| Binding {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();
        body.run(&bindings, verifier);
        Ok(Invocation {
            entry: self.name.clone(),
            bindings,
        })
    }
}

impl Default for EntryPoint {
    fn default() -> Self {
        Self::placeholder()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when `value` is an ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`).
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
