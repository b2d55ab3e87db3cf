use base262144::alphabet::{CP_END, CP_START, MAX_PAD};
use base262144::{decode, encode, encode_symbols, symbol_to_value, value_to_symbol, Error};
use proptest::prelude::*;

fn header(text: &str) -> u32 {
    symbol_to_value(text.chars().next().unwrap()).unwrap()
}

#[test]
fn test_every_residue_roundtrips() {
    // 8 * len mod 18 cycles with period 9; cover two full cycles.
    for len in 0..=18usize {
        let input: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
        let encoded = encode(&input);
        assert_eq!(decode(&encoded).unwrap(), input, "len {len}");
    }
}

#[test]
fn test_empty() {
    let encoded = encode(b"");
    assert_eq!(encoded.chars().count(), 1);
    assert_eq!(header(&encoded), 0);
    assert_eq!(decode(&encoded).unwrap(), b"");
    assert_eq!(decode("").unwrap(), b"");
}

#[test]
fn test_single_ff_byte() {
    let symbols = encode_symbols(&[0xFF]);
    let values: Vec<u32> = symbols.iter().map(|&c| symbol_to_value(c).unwrap()).collect();
    assert_eq!(values, vec![10, 255 << 10]);
    assert_eq!(decode(&encode(&[0xFF])).unwrap(), vec![0xFF]);
}

#[test]
fn test_three_bytes_two_payload_symbols() {
    let input = [0x12, 0x34, 0x56];
    let encoded = encode(&input);
    assert_eq!(header(&encoded), 12);
    assert_eq!(encoded.chars().count(), 3);
    assert_eq!(decode(&encoded).unwrap(), input);
}

#[test]
fn test_symbols_just_outside_alphabet() {
    for cp in [CP_START - 1, CP_END + 1] {
        let mut text: String = [value_to_symbol(0), value_to_symbol(1)].iter().collect();
        text.push(char::from_u32(cp).unwrap());
        let err = decode(&text).unwrap_err();
        assert!(
            matches!(err, Error::InvalidSymbol { position: 2, .. }),
            "{err}"
        );
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(input in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode(&encode(&input)).unwrap(), input);
    }

    #[test]
    fn prop_header_matches_length(input in prop::collection::vec(any::<u8>(), 0..128)) {
        let pad = header(&encode(&input));
        prop_assert!(pad <= MAX_PAD);
        prop_assert_eq!(pad as usize, (18 - (8 * input.len()) % 18) % 18);
    }

    #[test]
    fn prop_output_stays_in_alphabet(input in prop::collection::vec(any::<u8>(), 0..128)) {
        for c in encode(&input).chars() {
            let cp = u32::from(c);
            prop_assert!((CP_START..=CP_END).contains(&cp));
        }
    }

    #[test]
    fn prop_large_header_rejected(
        pad in (MAX_PAD + 1)..(1u32 << 18),
        payload in prop::collection::vec(0u32..(1 << 18), 0..8),
    ) {
        let text: String = std::iter::once(pad)
            .chain(payload)
            .map(value_to_symbol)
            .collect();
        let err = decode(&text).unwrap_err();
        let rejected = matches!(err, Error::InvalidHeader { pad: p } if p == pad);
        prop_assert!(rejected, "got {}", err);
    }
}
