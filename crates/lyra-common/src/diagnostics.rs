//! Diagnostic categories, codes and messages.
//!
//! Diagnostics are plain values; producing phases build them and hand
//! them to whatever reporting pipeline the host embeds this front end
//! in. Codes in the 9xxx range are internal invariant failures.

use crate::span::Span;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

/// Well-known diagnostic codes.
pub mod diagnostic_codes {
    /// A classifier symbol of an unexpected kind reached the
    /// supertype collector or scope builder.
    pub const BROKEN_CLASSIFIER_INVARIANT: u32 = 9001;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub span: Span,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            span,
            message_text: message.into(),
        }
    }

    pub fn warning(span: Span, message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            span,
            message_text: message.into(),
        }
    }
}
