mod common;

use common::encode;
use huffdec_core::{decode, decode_with, DecodeOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decodes_to_source_text(text in "[ -~]{1,300}") {
        let parts = encode(&text);
        let unpacked = decode_with(&parts.to_bytes(), &DecodeOptions::new().validate(true)).unwrap();

        prop_assert_eq!(&unpacked.text, &text);
        prop_assert_eq!(unpacked.stats.symbols_emitted, text.len());
    }

    #[test]
    fn test_cursor_ends_at_packed_bits(text in "[0-9|-]{2,200}") {
        let parts = encode(&text);
        prop_assume!(parts.entries.len() > 1);

        let unpacked = decode_with(&parts.to_bytes(), &DecodeOptions::default()).unwrap();
        prop_assert_eq!(unpacked.stats.bits_consumed, parts.packed_bits as usize);
    }

    #[test]
    fn test_single_symbol_repeats(symbol in 0x20u8..0x7f, count in 1usize..500) {
        let text: String = std::iter::repeat(char::from(symbol)).take(count).collect();
        let parts = encode(&text);

        prop_assert_eq!(parts.packed_bits, 0);
        prop_assert_eq!(decode(&parts.to_bytes()).unwrap(), text);
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode_with(&bytes, &DecodeOptions::new().validate(true).max_output_bytes(1 << 16));
    }
}
