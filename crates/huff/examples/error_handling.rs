//! # Error Handling Examples
//!
//! Shows how damaged payloads surface as typed errors.
//!
//! ```bash
//! cargo run -p huff --example error_handling
//! ```

use huff::{compress, decompress, HuffDecoder, HuffError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Huffman Error Handling Examples");
    println!("===============================\n");

    let payload = compress(b"error handling with a static huffman code")?;
    let bytes = payload.to_bytes()?;

    println!("1. Truncated packed bits...");
    match decompress(&bytes[..bytes.len() - 2]) {
        Err(HuffError::TruncatedStream(msg)) => println!("   caught TruncatedStream: {}\n", msg),
        other => println!("   unexpected: {:?}\n", other),
    }

    println!("2. Tampered header...");
    let mut tampered = bytes.clone();
    tampered[3] ^= 0x01; // original length
    match decompress(&tampered) {
        Err(e @ HuffError::CorruptHeader(_)) => println!("   caught: {}\n", e),
        other => println!("   unexpected: {:?}\n", other),
    }

    println!("3. Missing file...");
    let missing = std::env::temp_dir().join("huff_nonexistent.huff");
    match HuffDecoder::new().decode_file(&missing) {
        Err(HuffError::IoError(e)) => println!("   caught IoError: {}\n", e),
        other => println!("   unexpected: {:?}\n", other),
    }

    println!("4. Classifying errors...");
    for result in [decompress(&bytes[..5]), decompress(&tampered), decompress(&bytes)] {
        match result {
            Ok(data) => println!("   ok: {} bytes", data.len()),
            Err(e) if e.is_data_error() => println!("   damaged input: {}", e),
            Err(e) => return Err(Box::new(e)),
        }
    }

    Ok(())
}
