//! huffc: compress, decompress and inspect files with the Huffman codec

mod config;

use anyhow::{Context, Result};
use config::{Command, Config};
use huff::{CompressionStats, EncoderOptions, HuffDecoder, HuffEncoder};
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            config::print_help();
            std::process::exit(2);
        }
    };

    log::debug!("{:?}", config);
    match config.command {
        Command::Help => {
            config::print_help();
            Ok(())
        }
        Command::Compress => compress(&config),
        Command::Decompress => decompress(&config),
        Command::Codes => codes(&config),
    }
}

fn read_input(config: &Config) -> Result<Vec<u8>> {
    fs::read(&config.input).with_context(|| format!("reading {}", config.input.display()))
}

fn compress(config: &Config) -> Result<()> {
    config.print();
    let data = read_input(config)?;
    println!("Size of file before compression: {} bytes", data.len());

    let encoder = HuffEncoder::new(EncoderOptions::new().verify(config.verify));
    let stats = encoder
        .encode_file(&data, &config.output)
        .with_context(|| format!("compressing into {}", config.output.display()))?;

    print_stats(&stats);
    Ok(())
}

fn decompress(config: &Config) -> Result<()> {
    config.print();
    let mut decoder = HuffDecoder::new();
    let data = decoder
        .decode_file(&config.input)
        .with_context(|| format!("decompressing {}", config.input.display()))?;
    fs::write(&config.output, &data)
        .with_context(|| format!("writing {}", config.output.display()))?;

    println!("Restored {} bytes", data.len());
    Ok(())
}

fn codes(config: &Config) -> Result<()> {
    let data = read_input(config)?;
    let encoder = HuffEncoder::default();

    let table = encoder.code_table(&data)?;
    println!("Huffman codes ({} symbols):", table.len());
    print!("{}", table);

    let payload = encoder.encode_payload(&data)?;
    print_stats(&payload.stats());
    Ok(())
}

fn print_stats(stats: &CompressionStats) {
    println!("Original size:     {} bytes", stats.original_bytes);
    println!("Compressed size:   {} bytes", stats.compressed_bytes);
    println!("Packed bits:       {}", stats.packed_bits);
    println!("Distinct symbols:  {}", stats.alphabet_size);
    println!("Bits per symbol:   {:.3}", stats.bits_per_symbol());
    println!("Compression ratio: {:.2}x", stats.ratio());
}
