//! Common types and utilities for the lyra compiler front end.
//!
//! This crate provides foundational types used across the lyra crates:
//! - String interning (`Atom`, `Interner`, `SharedInterner`)
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner, SharedInterner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics - categories, codes and messages
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
