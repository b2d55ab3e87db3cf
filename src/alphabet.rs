//! The Base-262144 alphabet.
//!
//! Every 18-bit value `v` maps to the scalar value `U+10000 + v`, so the
//! alphabet is the contiguous block `U+10000..=U+4FFFF` (planes 1 through 4).
//! None of those code points are surrogates, which means every value has a
//! Rust `char` and the mapping is a bijection with no holes.

use crate::error::SymbolError;

/// Number of symbols in the alphabet (2^18).
pub const BASE: u32 = 1 << SYMBOL_BITS;

/// Bits carried by one symbol.
pub const SYMBOL_BITS: u32 = 18;

/// Mask selecting the low [`SYMBOL_BITS`] bits.
pub const VALUE_MASK: u32 = BASE - 1;

/// First code point of the alphabet; encodes the value 0.
pub const CP_START: u32 = 0x10000;

/// Last code point of the alphabet; encodes the value `BASE - 1`.
pub const CP_END: u32 = CP_START + BASE - 1;

/// Largest pad count a header may carry.
pub const MAX_PAD: u32 = SYMBOL_BITS - 1;

/// Map an 18-bit value to its symbol.
///
/// Bits above the low 18 are ignored, so the function is total.
#[inline]
pub fn value_to_symbol(value: u32) -> char {
    char::from_u32(CP_START + (value & VALUE_MASK))
        .expect("alphabet block contains no surrogate code points")
}

/// Map a symbol back to its 18-bit value.
///
/// # Errors
/// Returns [`SymbolError::OutOfRange`] if `symbol` is not in
/// `U+10000..=U+4FFFF`.
#[inline]
pub fn symbol_to_value(symbol: char) -> Result<u32, SymbolError> {
    let cp = u32::from(symbol);
    if (CP_START..=CP_END).contains(&cp) {
        Ok(cp - CP_START)
    } else {
        Err(SymbolError::OutOfRange(cp))
    }
}
