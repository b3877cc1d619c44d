//! Performance benchmarks for hufpak-codec
//!
//! This benchmark suite evaluates:
//! - Compression/decompression throughput across data sizes
//! - Behaviour on uniform, text-like and random data
//! - Tree construction cost for a full 256-symbol alphabet

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hufpak_codec::{CodeTable, FrequencyTable, HuffmanTree, compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - a single symbol (one-bit codes)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - all symbols roughly equally likely
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const SMALL: usize = 4 * 1024; // 4 KB
    pub const MEDIUM: usize = 64 * 1024; // 64 KB
    pub const LARGE: usize = 1024 * 1024; // 1 MB
}

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("text", test_data::text_like),
];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for (pattern, generate) in PATTERNS {
        for size in [data_sizes::SMALL, data_sizes::MEDIUM, data_sizes::LARGE] {
            let data = generate(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(pattern, size),
                &data,
                |b, data| {
                    b.iter(|| black_box(compress(black_box(data)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for (pattern, generate) in PATTERNS {
        for size in [data_sizes::SMALL, data_sizes::MEDIUM, data_sizes::LARGE] {
            let compressed = compress(&generate(size)).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(pattern, size),
                &compressed,
                |b, compressed| {
                    b.iter(|| black_box(decompress(black_box(compressed)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_tree_build(c: &mut Criterion) {
    let freqs = FrequencyTable::count(&test_data::random(data_sizes::MEDIUM)).unwrap();

    c.bench_function("tree_build_256_symbols", |b| {
        b.iter(|| {
            let tree = HuffmanTree::build(black_box(&freqs)).unwrap();
            black_box(CodeTable::from_tree(&tree));
        });
    });
}

criterion_group!(benches, bench_compress, bench_decompress, bench_tree_build);
criterion_main!(benches);
