//! # Base-262144
//!
//! *Binary-to-text encoding at 18 bits per character.*
//!
//! ## Intuition First
//!
//! Base64 spends one printable ASCII character on every 6 bits. If the
//! transport counts *characters* rather than bytes (a chat message, a tweet,
//! a text field with a length limit), a bigger alphabet is strictly better:
//! each character carries more bits. Unicode has room for far more than 64
//! symbols, so this crate takes 2^18 of them and packs 18 bits into each.
//!
//! ## The Alphabet
//!
//! The alphabet is the contiguous block `U+10000..=U+4FFFF`. Value `v` maps to
//! `U+10000 + v`. The block starts right after the Basic Multilingual Plane,
//! so it never touches surrogates, and every symbol is a single Rust `char`
//! (four bytes of UTF-8).
//!
//! ## Format
//!
//! ```text
//! [ header ][ payload 0 ][ payload 1 ] ... [ payload n-1 ]
//!     |          18 bits each, MSB-first over the input bytes
//!     +-- pad count p in 0..=17: zero bits appended to the last payload symbol
//! ```
//!
//! For `L` input bytes, `p = (18 - 8L mod 18) mod 18` and
//! `8L == 18n - p`. Empty input encodes to the header alone (`p = 0`).
//!
//! ## Failure Modes
//!
//! 1. **Foreign characters**: anything outside the alphabet is rejected with
//!    [`Error::InvalidSymbol`], as is malformed UTF-8 fed to [`decode_utf8`].
//! 2. **Bad header**: a pad count above 17 is rejected with
//!    [`Error::InvalidHeader`].
//! 3. **Inconsistent padding**: a header that does not match the payload
//!    length cannot come from [`encode`]; the decoder truncates to what the
//!    padding allows instead of failing.
//!
//! ## Example
//!
//! ```
//! let text = base262144::encode(b"\xFF");
//! assert_eq!(text.chars().count(), 2);
//! assert_eq!(base262144::decode(&text).unwrap(), b"\xFF");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod bits;
pub mod decode;
pub mod encode;
pub mod error;

pub use alphabet::{symbol_to_value, value_to_symbol};
pub use decode::{decode, decode_into, decode_symbols, decode_utf8, max_decoded_len};
pub use encode::{encode, encode_into, encode_symbols, encoded_len, pad_for};
pub use error::{Error, Result, SymbolError};
