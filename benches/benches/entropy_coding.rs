//! Benchmarks for Huffman tree construction and bit packing
//!
//! Run with: cargo bench --bench entropy_coding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huff_bitstream::{pack, unpack, HuffmanTree};
use huff_core::FrequencyTable;

fn skewed_input(len: usize, alphabet_size: usize) -> Vec<u8> {
    (0..len)
        .map(|i| ((i * 7919) % (i % alphabet_size + 1)) as u8)
        .collect()
}

fn bench_tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("Huffman Tree Building");

    for alphabet_size in [4usize, 16, 64, 256].iter() {
        let frequencies: FrequencyTable = (0..*alphabet_size)
            .map(|i| (i as u8, ((i * 17) % 500 + 10) as u64))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(alphabet_size),
            alphabet_size,
            |b, _| {
                b.iter(|| {
                    let tree = HuffmanTree::build(black_box(&frequencies)).unwrap();
                    tree.derive_codes()
                });
            },
        );
    }

    group.finish();
}

fn bench_frequency_count(c: &mut Criterion) {
    let data = skewed_input(64 * 1024, 256);
    c.bench_function("count_frequencies_64k", |b| {
        b.iter(|| FrequencyTable::count(black_box(&data)));
    });
}

fn bench_pack_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit Packing");

    for alphabet_size in [4usize, 32, 256].iter() {
        let data = skewed_input(16 * 1024, *alphabet_size);
        let tree = HuffmanTree::build(&FrequencyTable::count(&data)).unwrap();
        let codes = tree.derive_codes();

        group.bench_with_input(
            BenchmarkId::new("pack", alphabet_size),
            alphabet_size,
            |b, _| {
                b.iter(|| pack(black_box(&data), black_box(&codes)).unwrap());
            },
        );

        let (packed, bits) = pack(&data, &codes).unwrap();
        group.bench_with_input(
            BenchmarkId::new("unpack", alphabet_size),
            alphabet_size,
            |b, _| {
                b.iter(|| unpack(black_box(&packed), bits, black_box(&tree)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tree_building,
    bench_frequency_count,
    bench_pack_unpack
);
criterion_main!(benches);
