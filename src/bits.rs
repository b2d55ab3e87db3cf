//! Bit accumulator used to regroup between 8-bit bytes and 18-bit symbols.
//!
//! Chunks are appended MSB-first: each new chunk lands below the bits already
//! buffered, and extraction always takes the oldest (highest) bits. Only the
//! low `len` bits of the register are meaningful; everything above is kept
//! cleared so the register never overflows.

/// Widest chunk the accumulator accepts in one call.
pub const MAX_CHUNK_BITS: u32 = 32;

/// A small MSB-first bit buffer.
///
/// # Invariants
/// - `len <= 64 - MAX_CHUNK_BITS` between calls when the caller drains after
///   every push, which both the encoder and decoder do.
/// - bits of `acc` above position `len` are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitAccumulator {
    acc: u64,
    len: u32,
}

impl BitAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Append the low `width` bits of `value`.
    ///
    /// # Panics
    /// Panics in debug builds if `width > MAX_CHUNK_BITS` or the buffer would
    /// exceed 64 bits.
    #[inline]
    pub fn push(&mut self, value: u32, width: u32) {
        debug_assert!(width <= MAX_CHUNK_BITS);
        debug_assert!(self.len + width <= 64);
        let mask = (1u64 << width) - 1;
        self.acc = (self.acc << width) | (u64::from(value) & mask);
        self.len += width;
    }

    /// Remove and return the highest `width` buffered bits, or `None` if
    /// fewer than `width` bits are buffered.
    #[inline]
    pub fn pop(&mut self, width: u32) -> Option<u32> {
        debug_assert!(width <= MAX_CHUNK_BITS);
        if self.len < width {
            return None;
        }
        self.len -= width;
        let value = (self.acc >> self.len) & ((1u64 << width) - 1);
        self.acc &= (1u64 << self.len) - 1;
        Some(value as u32)
    }

    /// Drain whatever is left as one `width`-bit group, left-aligned and
    /// zero-filled in the low bits. Returns `None` when the buffer is empty.
    ///
    /// Must only be called when fewer than `width` bits remain.
    pub fn pop_padded(&mut self, width: u32) -> Option<u32> {
        debug_assert!(self.len < width);
        if self.len == 0 {
            return None;
        }
        let value = self.acc << (width - self.len);
        *self = Self::new();
        Some(value as u32)
    }

    /// Number of buffered bits.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Check if no bits are buffered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
