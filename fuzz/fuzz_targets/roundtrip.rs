#![no_main]
use base262144::{decode, decode_utf8, encode, encoded_len};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let text = encode(&data);
    assert_eq!(text.chars().count(), encoded_len(data.len()));

    assert_eq!(decode(&text).unwrap(), data);
    assert_eq!(decode_utf8(text.as_bytes()).unwrap(), data);
});
