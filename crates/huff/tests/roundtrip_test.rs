//! Integration test for round-trip compression/decompression

use huff::{compress, decompress, CompressedPayload, FrequencyTable, HuffDecoder, HuffEncoder};
use std::io::Cursor;

/// Helper function to create text-like test data
fn create_test_text(len: usize) -> Vec<u8> {
    let words = ["the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog\n"];
    words.iter().cycle().flat_map(|w| w.bytes()).take(len).collect()
}

fn roundtrip(data: &[u8]) -> Vec<u8> {
    let bytes = compress(data).unwrap().to_bytes().unwrap();
    decompress(&bytes).unwrap()
}

#[test]
fn test_roundtrip_text() {
    let data = create_test_text(10_000);
    assert_eq!(roundtrip(&data), data);
}

#[test]
fn test_roundtrip_empty() {
    assert!(roundtrip(&[]).is_empty());
}

#[test]
fn test_roundtrip_single_byte() {
    for byte in [0x00u8, b'a', 0x80, 0xFF] {
        assert_eq!(roundtrip(&[byte]), vec![byte]);
    }
}

#[test]
fn test_roundtrip_all_byte_values() {
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 7 + 13).collect();
    assert_eq!(roundtrip(&data), data);
}

#[test]
fn test_roundtrip_binary_pattern() {
    // Geometric-ish distribution gives long codes for rare bytes
    let data: Vec<u8> = (0..20_000u32)
        .map(|i| (i.trailing_zeros().min(40) as u8).wrapping_mul(7))
        .collect();
    assert_eq!(roundtrip(&data), data);
}

#[test]
fn test_roundtrip_through_writer_and_reader() {
    let data = create_test_text(4096);
    let mut buffer = Vec::new();
    let stats = HuffEncoder::default().encode(&data, &mut buffer).unwrap();
    assert_eq!(stats.compressed_bytes, buffer.len());

    let mut decoder = HuffDecoder::new();
    let restored = decoder.decode(Cursor::new(&buffer)).unwrap();
    assert_eq!(restored, data);
    assert_eq!(
        decoder.header().unwrap().frequencies,
        FrequencyTable::count(&data)
    );
}

#[test]
fn test_roundtrip_through_file() {
    let data = create_test_text(2048);
    let path = std::env::temp_dir().join(format!("huff_roundtrip_{}.huff", std::process::id()));

    HuffEncoder::default().encode_file(&data, &path).unwrap();
    let restored = HuffDecoder::new().decode_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored, data);
}

#[test]
fn test_determinism() {
    let data = create_test_text(5000);
    let first = compress(&data).unwrap().to_bytes().unwrap();
    let second = compress(&data).unwrap().to_bytes().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_skewed_input_compresses() {
    let data = b"aaaaaaaab";
    let payload = compress(data).unwrap();
    assert!((payload.header.packed_bits as usize) < 8 * data.len());
    assert_eq!(payload.header.packed_bits, 9);
}

#[test]
fn test_single_symbol_uses_one_bit() {
    let payload = compress(b"zzzz").unwrap();
    assert_eq!(payload.header.packed_bits, 4);
    assert_eq!(payload.header.frequencies.len(), 1);

    let bytes = payload.to_bytes().unwrap();
    assert_eq!(decompress(&bytes).unwrap(), b"zzzz".to_vec());
}

#[test]
fn test_text_compression_ratio() {
    let data = create_test_text(50_000);
    let stats = compress(&data).unwrap().stats();
    println!(
        "Text: {} -> {} bytes, {:.3} bits/symbol",
        stats.original_bytes,
        stats.compressed_bytes,
        stats.bits_per_symbol()
    );
    assert!(stats.ratio() > 1.5);
    assert!(stats.bits_per_symbol() < 5.0);
}

#[test]
fn test_parsed_payload_equals_original() {
    let payload = compress(b"payload equality").unwrap();
    let parsed = CompressedPayload::from_bytes(&payload.to_bytes().unwrap()).unwrap();
    assert_eq!(parsed, payload);
}
