//! Error types for Base-262144 decoding.

use thiserror::Error;

/// Why a single symbol could not be mapped back to an 18-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The scalar value lies outside `U+10000..=U+4FFFF`.
    #[error("U+{0:04X} is outside the alphabet U+10000..=U+4FFFF")]
    OutOfRange(u32),

    /// The input bytes do not form a complete UTF-8 scalar value.
    #[error("malformed or truncated UTF-8 sequence")]
    Malformed,
}

/// Error variants for Base-262144 operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol could not be decoded. `position` is the zero-based symbol
    /// index, where 0 is the header.
    #[error("invalid symbol at position {position}: {source}")]
    InvalidSymbol {
        /// Index of the offending symbol.
        position: usize,
        /// What was wrong with it.
        source: SymbolError,
    },

    /// The header decoded to a pad count outside `0..=17`.
    #[error("invalid header: pad count {pad} is outside 0..=17")]
    InvalidHeader {
        /// The decoded header value.
        pad: u32,
    },

    /// An I/O error occurred while writing decoded output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Base-262144 operations.
pub type Result<T> = std::result::Result<T, Error>;
