//! Property-based tests for the LZ77 codec.
//!
//! These verify, across generated inputs and window sizes:
//! - decompress(compress(data)) == data
//! - every emitted match respects the window and the field widths
//! - the encoded size equals the token bit count rounded up to bytes
//! - framed streams round-trip as well

use proptest::prelude::*;

use oxilz_lz77::{
    Lz77Config, Lz77Encoder, MAX_WINDOW_SIZE, StreamStats, Token, compress, compress_framed,
    decompress, decompress_framed,
};

/// Inputs with a small alphabet so matches are common.
fn repetitive_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 0..600)
}

/// Arbitrary bytes, mostly incompressible.
fn arbitrary_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..600)
}

fn window_size() -> impl Strategy<Value = usize> {
    prop_oneof![
        Just(1usize),
        Just(2usize),
        Just(20usize),
        Just(MAX_WINDOW_SIZE),
        1..=MAX_WINDOW_SIZE,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    })]

    /// Property: compression followed by decompression is the identity.
    #[test]
    fn prop_roundtrip_repetitive(data in repetitive_bytes(), window in window_size()) {
        let config = Lz77Config::new(window).unwrap();
        let compressed = compress(&data, &config).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    /// Property: round-trip also holds for arbitrary bytes.
    #[test]
    fn prop_roundtrip_arbitrary(data in arbitrary_bytes(), window in window_size()) {
        let config = Lz77Config::new(window).unwrap();
        let compressed = compress(&data, &config).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    /// Property: matches stay inside the window and the 12/4-bit fields.
    #[test]
    fn prop_match_fields_bounded(data in repetitive_bytes(), window in window_size()) {
        let encoder = Lz77Encoder::with_window_size(window).unwrap();
        let mut covered = 0usize;

        for token in encoder.tokens(&data) {
            if let Token::Match { distance, length } = token {
                let distance = usize::from(distance);
                prop_assert!(distance >= 1 && distance <= window);
                prop_assert!(window < 4096);
                prop_assert!((2..=15).contains(&length));
                prop_assert!(distance <= covered);
            }
            covered += token.output_len();
        }
        prop_assert_eq!(covered, data.len());
    }

    /// Property: output size is the token bit count padded to a byte boundary.
    #[test]
    fn prop_size_matches_token_bits(data in repetitive_bytes(), window in window_size()) {
        let encoder = Lz77Encoder::with_window_size(window).unwrap();
        let tokens: Vec<Token> = encoder.tokens(&data).collect();
        let stats = StreamStats::from_tokens(&tokens);

        let compressed = encoder.encode(&data).unwrap();
        prop_assert_eq!(compressed.len() as u64, stats.encoded_bits.div_ceil(8));
        prop_assert_eq!(stats.original_bytes, data.len() as u64);
    }

    /// Property: a run of one byte is a literal then 15-byte matches, with a
    /// shorter final match or, when one byte is left over, a final literal.
    #[test]
    fn prop_single_byte_runs(len in 0usize..500, byte in any::<u8>()) {
        let data = vec![byte; len];
        let tokens: Vec<Token> = Lz77Encoder::default().tokens(&data).collect();
        let expected = if len == 0 { 0 } else { 1 + (len - 1).div_ceil(15) };
        prop_assert_eq!(tokens.len(), expected);
        prop_assert_eq!(decompress(&compress(&data, &Lz77Config::default()).unwrap()).unwrap(), data);
    }

    /// Property: framed streams round-trip and carry the original length.
    #[test]
    fn prop_framed_roundtrip(data in arbitrary_bytes(), window in window_size()) {
        let config = Lz77Config::new(window).unwrap();
        let framed = compress_framed(&data, &config).unwrap();
        prop_assert_eq!(decompress_framed(&framed).unwrap(), data);
    }
}
