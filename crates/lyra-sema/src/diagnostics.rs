//! Errors raised by scope resolution.
//!
//! Recoverable conditions (unresolved references, error types, cyclic
//! hierarchies) never surface here; they degrade to skipped entries or
//! partial scopes. `SemaError` is reserved for broken internal
//! invariants that indicate a bug upstream in the declaration model.

use crate::symbols::SymbolId;
use lyra_common::diagnostics::{Diagnostic, diagnostic_codes};
use lyra_common::span::Span;
use std::fmt;

pub type SemaResult<T> = Result<T, SemaError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SemaError {
    /// A classifier that is neither class-like nor a type alias reached
    /// supertype collection or scope building. Only those two variants
    /// may ever be passed in; anything else means the upstream
    /// declaration model handed over a broken symbol.
    BrokenClassifierInvariant { symbol: SymbolId },
}

impl fmt::Display for SemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemaError::BrokenClassifierInvariant { symbol } => write!(
                f,
                "internal invariant violated: classifier {:?} is neither a class-like nor a type-alias symbol",
                symbol
            ),
        }
    }
}

impl std::error::Error for SemaError {}

impl SemaError {
    /// Diagnostic for reporting pipelines. The span is supplied by the
    /// caller since the broken symbol may not carry one.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        match self {
            SemaError::BrokenClassifierInvariant { .. } => Diagnostic::error(
                span,
                self.to_string(),
                diagnostic_codes::BROKEN_CLASSIFIER_INVARIANT,
            ),
        }
    }
}
