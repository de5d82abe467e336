//! Source location tracking (byte offsets).

use serde::Serialize;

/// A half-open byte range into a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: u32,
    /// Byte length of the range.
    pub len: u32,
}

impl Span {
    /// A zero-length span at offset 0, used for synthesized declarations.
    pub const SYNTHETIC: Span = Span { start: 0, len: 0 };

    pub fn new(start: u32, len: u32) -> Self {
        Span { start, len }
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(self) -> u32 {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}
