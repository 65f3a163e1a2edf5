//! Source locations.
//!
//! A [`SourceLoc`] is a 4-byte encoded file offset. Raw value 0 is reserved
//! for the invalid location, which is what synthesized nodes carry.

use std::fmt;

/// Error when encoding an offset that has no room in the 32-bit encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocError {
    /// Offset is `u32::MAX` or larger.
    OffsetTooLarge(usize),
}

impl fmt::Display for SourceLocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocError::OffsetTooLarge(v) => write!(
                f,
                "source offset {} (0x{:X}) exceeds the encodable maximum (0x{:X})",
                v,
                v,
                u32::MAX - 1
            ),
        }
    }
}

impl std::error::Error for SourceLocError {}

/// Encoded source location.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(transparent)]
pub struct SourceLoc(u32);

impl SourceLoc {
    /// The location of nodes that have no source text.
    pub const INVALID: SourceLoc = SourceLoc(0);

    /// Encode a byte offset.
    pub fn from_offset(offset: usize) -> Result<Self, SourceLocError> {
        u32::try_from(offset)
            .ok()
            .and_then(|o| o.checked_add(1))
            .map(SourceLoc)
            .ok_or(SourceLocError::OffsetTooLarge(offset))
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Decoded byte offset, `None` for the invalid location.
    #[inline]
    pub const fn offset(self) -> Option<u32> {
        if self.is_valid() {
            Some(self.0 - 1)
        } else {
            None
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset() {
            Some(offset) => write!(f, "@{offset}"),
            None => write!(f, "<invalid sloc>"),
        }
    }
}

/// Pair of begin/end locations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SourceRange {
    pub begin: SourceLoc,
    pub end: SourceLoc,
}

impl SourceRange {
    #[inline]
    pub const fn new(begin: SourceLoc, end: SourceLoc) -> Self {
        SourceRange { begin, end }
    }

    /// Both ends are valid.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.begin.is_valid() && self.end.is_valid()
    }

    /// Smallest range covering both; invalid ends are ignored.
    #[must_use]
    pub fn merge(self, other: SourceRange) -> SourceRange {
        fn pick(a: SourceLoc, b: SourceLoc, f: fn(u32, u32) -> u32) -> SourceLoc {
            match (a.is_valid(), b.is_valid()) {
                (true, true) => SourceLoc(f(a.0, b.0)),
                (true, false) => a,
                (false, _) => b,
            }
        }
        SourceRange {
            begin: pick(self.begin, other.begin, u32::min),
            end: pick(self.end, other.end, u32::max),
        }
    }
}

impl fmt::Debug for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.begin, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{SourceLoc, SourceRange};
    crate::static_assert_size!(SourceLoc, 4);
    crate::static_assert_size!(SourceRange, 8);
}
