//! Digit extraction at a byte offset.

/// The byte at `offset`, or `None` when the key ends at or before it.
#[inline(always)]
pub(crate) fn byte_at(key: &[u8], offset: usize) -> Option<u8> {
    key.get(offset).copied()
}

/// Up to two bytes read from `offset`, tagged with how many were available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Digit {
    /// No bytes left.
    End,
    /// Exactly one byte left.
    One(u8),
    /// Two or more bytes left; the first two packed big-endian.
    Two(u16),
}

impl Digit {
    #[inline(always)]
    pub fn read(key: &[u8], offset: usize) -> Self {
        match key.get(offset..) {
            Some([first, second, ..]) => Digit::Two(u16::from_be_bytes([*first, *second])),
            Some([only]) => Digit::One(*only),
            _ => Digit::End,
        }
    }
}
