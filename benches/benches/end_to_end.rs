//! End-to-end compression/decompression benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huff::{compress_batch, decompress_batch};
use huff_decoder::HuffDecoder;
use huff_encoder::{EncoderOptions, HuffEncoder};

fn create_test_text(len: usize) -> Vec<u8> {
    let words = ["lorem ", "ipsum ", "dolor ", "sit ", "amet, ", "consectetur ", "adipiscing ", "elit.\n"];
    words.iter().cycle().flat_map(|w| w.bytes()).take(len).collect()
}

fn bench_compress_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compress by Input Size");

    for &size in &[1024usize, 16 * 1024, 256 * 1024] {
        let data = create_test_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let encoder = HuffEncoder::new(EncoderOptions::default());
            b.iter(|| encoder.encode_payload(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

fn bench_decompress_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decompress by Input Size");

    for &size in &[1024usize, 16 * 1024, 256 * 1024] {
        let data = create_test_text(size);
        let encoded = HuffEncoder::default()
            .encode_payload(&data)
            .unwrap()
            .to_bytes()
            .unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut decoder = HuffDecoder::new();
                decoder.decode_bytes(black_box(&encoded)).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    let inputs: Vec<Vec<u8>> = (0..32).map(|i| create_test_text(8 * 1024 + i * 97)).collect();
    let payloads: Vec<Vec<u8>> = compress_batch(&inputs)
        .into_iter()
        .map(|p| p.unwrap().to_bytes().unwrap())
        .collect();

    group.bench_function("compress_batch_32x8k", |b| {
        b.iter(|| compress_batch(black_box(&inputs)));
    });
    group.bench_function("decompress_batch_32x8k", |b| {
        b.iter(|| decompress_batch(black_box(&payloads)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compress_by_size,
    bench_decompress_by_size,
    bench_batch
);
criterion_main!(benches);
