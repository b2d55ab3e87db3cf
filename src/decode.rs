//! Base-262144 decoder.

use std::io;

use crate::alphabet::{symbol_to_value, MAX_PAD, SYMBOL_BITS};
use crate::bits::BitAccumulator;
use crate::error::{Error, Result, SymbolError};

/// Upper bound on the bytes `symbol_count` symbols can decode to.
///
/// This can be used to reserve space in a buffer.
pub const fn max_decoded_len(symbol_count: usize) -> usize {
    symbol_count.saturating_sub(1) / 4 * 9 + symbol_count.saturating_sub(1) % 4 * 9 / 4
}

/// Decode a Base-262144 string.
///
/// An empty string decodes to no bytes, as does a header on its own.
///
/// # Errors
/// - [`Error::InvalidSymbol`] if any character is outside the alphabet
/// - [`Error::InvalidHeader`] if the header's pad count exceeds 17
pub fn decode(text: &str) -> Result<Vec<u8>> {
    decode_symbols(text.chars())
}

/// Decode UTF-8 encoded Base-262144 text, as read from a file.
///
/// # Errors
/// As [`decode`], plus [`Error::InvalidSymbol`] with
/// [`SymbolError::Malformed`] if `bytes` is not valid UTF-8. The position is
/// the index of the first symbol that fails to decode.
pub fn decode_utf8(bytes: &[u8]) -> Result<Vec<u8>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => decode(text),
        Err(e) => {
            // Report earlier faults first; a good prefix only ever fails later.
            let valid = &bytes[..e.valid_up_to()];
            let prefix = std::str::from_utf8(valid).unwrap_or_default();
            decode_symbols(prefix.chars())?;
            let position = prefix.chars().count();
            tracing::debug!(position, "rejecting malformed UTF-8 input");
            Err(Error::InvalidSymbol {
                position,
                source: SymbolError::Malformed,
            })
        }
    }
}

/// Decode a Base-262144 string, writing the bytes to `writer`.
///
/// Nothing is written unless the whole input decodes.
pub fn decode_into<W: io::Write>(mut writer: W, text: &str) -> Result<()> {
    let bytes = decode(text)?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Decode a sequence of symbols.
///
/// # Errors
/// As [`decode`].
pub fn decode_symbols<I>(symbols: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = char>,
{
    let mut symbols = symbols.into_iter();
    let Some(header) = symbols.next() else {
        return Ok(Vec::new());
    };

    let pad = check_symbol(0, header)?;
    if pad > MAX_PAD {
        tracing::debug!(pad, "rejecting header");
        return Err(Error::InvalidHeader { pad });
    }

    let mut out = Vec::with_capacity(max_decoded_len(symbols.size_hint().0 + 1));
    let mut bits = BitAccumulator::new();
    let mut count = 1usize;
    for symbol in symbols {
        let value = check_symbol(count, symbol)?;
        count += 1;
        bits.push(value, SYMBOL_BITS);
        while let Some(byte) = bits.pop(8) {
            out.push(byte as u8);
        }
    }

    let payload_bits = (count - 1) * SYMBOL_BITS as usize;
    let useful_bits = payload_bits.saturating_sub(pad as usize);
    if useful_bits % 8 != 0 || payload_bits < pad as usize {
        tracing::debug!(
            symbols = count,
            pad,
            useful_bits,
            "padding does not match encoder output; truncating"
        );
    }
    if pad > 0 {
        out.truncate(useful_bits / 8);
    }

    tracing::trace!(symbols = count, pad, bytes = out.len(), "decoded");
    Ok(out)
}

fn check_symbol(position: usize, symbol: char) -> Result<u32> {
    symbol_to_value(symbol).map_err(|source| {
        tracing::debug!(position, %source, "rejecting symbol");
        Error::InvalidSymbol { position, source }
    })
}
