//! Base-262144 encoder.
//!
//! Output layout: one header symbol holding the pad count, then
//! `ceil(8 * len / 18)` payload symbols. The final payload symbol is
//! zero-filled in its low `pad` bits.

use std::fmt;

use crate::alphabet::{value_to_symbol, SYMBOL_BITS};
use crate::bits::BitAccumulator;

/// Header value for an input of `byte_len` bytes: the number of zero bits
/// appended so the payload is a whole number of 18-bit groups.
#[inline]
pub fn pad_for(byte_len: usize) -> u32 {
    let rem = (byte_len % SYMBOL_BITS as usize) * 8 % SYMBOL_BITS as usize;
    ((SYMBOL_BITS as usize - rem) % SYMBOL_BITS as usize) as u32
}

/// Exact number of symbols [`encode`] produces for `byte_len` bytes,
/// header included.
pub fn encoded_len(byte_len: usize) -> usize {
    // 8 * byte_len / 18 == 4 * byte_len / 9, rounded up, without overflow.
    let groups = byte_len / 9 * 4 + (byte_len % 9 * 4).div_ceil(9);
    1 + groups
}

/// Encode bytes, returning the symbols as a [`String`].
///
/// Use [`crate::decode`] to reverse the operation.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    // Every symbol is a 4-byte UTF-8 sequence.
    let mut out = String::with_capacity(encoded_len(bytes.len()) * 4);
    for_each_symbol(bytes, |c| out.push(c));
    out
}

/// Encode bytes into a vector of symbols.
#[must_use]
pub fn encode_symbols(bytes: &[u8]) -> Vec<char> {
    let mut out = Vec::with_capacity(encoded_len(bytes.len()));
    for_each_symbol(bytes, |c| out.push(c));
    out
}

/// Encode bytes, writing the symbols to `writer`.
///
/// This can only return an [`Err`] if the writer does so.
pub fn encode_into<W: fmt::Write>(mut writer: W, bytes: &[u8]) -> fmt::Result {
    let mut result = Ok(());
    for_each_symbol(bytes, |c| {
        if result.is_ok() {
            result = writer.write_char(c);
        }
    });
    result
}

fn for_each_symbol(bytes: &[u8], mut emit: impl FnMut(char)) {
    let pad = pad_for(bytes.len());
    tracing::trace!(bytes = bytes.len(), pad, "encoding");

    emit(value_to_symbol(pad));

    let mut bits = BitAccumulator::new();
    for &b in bytes {
        bits.push(u32::from(b), 8);
        while let Some(group) = bits.pop(SYMBOL_BITS) {
            emit(value_to_symbol(group));
        }
    }

    // The leftover is exactly SYMBOL_BITS - pad bits, or nothing when pad == 0.
    debug_assert_eq!(bits.len(), (SYMBOL_BITS - pad) % SYMBOL_BITS);
    if let Some(group) = bits.pop_padded(SYMBOL_BITS) {
        emit(value_to_symbol(group));
    }
}
