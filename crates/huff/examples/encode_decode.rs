//! Example demonstrating basic Huffman compression and decompression
//!
//! ```bash
//! cargo run -p huff --example encode_decode
//! ```

use huff::{EncoderOptions, HuffDecoder, HuffEncoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Huffman codec - Example");
    println!("=======================\n");

    let text = "it was the best of times, it was the worst of times, \
                it was the age of wisdom, it was the age of foolishness\n"
        .repeat(64);
    let data = text.as_bytes();
    println!("Input: {} bytes", data.len());

    let encoder = HuffEncoder::new(EncoderOptions::new().verify(true));

    println!("\nHuffman codes:");
    print!("{}", encoder.code_table(data)?);

    let output_path = std::env::temp_dir().join("huff_example.huff");
    let stats = encoder.encode_file(data, &output_path)?;
    println!("\nEncoded to: {}", output_path.display());
    println!("  Compressed size: {} bytes", stats.compressed_bytes);
    println!("  Bits per symbol: {:.3}", stats.bits_per_symbol());
    println!("  Ratio:           {:.2}x", stats.ratio());

    let mut decoder = HuffDecoder::new();
    let restored = decoder.decode_file(&output_path)?;
    assert_eq!(restored, data);

    if let Some(header) = decoder.header() {
        println!("\nDecoded header information:");
        println!("  Original length: {}", header.original_length);
        println!("  Alphabet size:   {}", header.frequencies.len());
        println!("  Packed bits:     {}", header.packed_bits);
    }

    std::fs::remove_file(&output_path)?;
    println!("\nExample completed successfully!");

    Ok(())
}
