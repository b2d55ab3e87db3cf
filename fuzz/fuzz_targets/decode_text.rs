#![no_main]
use base262144::{decode_utf8, max_decoded_len};
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must either decode or fail cleanly, never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(bytes) = decode_utf8(data) {
        let symbols = std::str::from_utf8(data).map(|s| s.chars().count()).unwrap_or(0);
        assert!(bytes.len() <= max_decoded_len(symbols));
    }
});
