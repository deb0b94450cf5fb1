//! Performance benchmarks for huffpack-codec
//!
//! - Compression/decompression throughput for several data patterns
//! - Tree construction alone, for growing alphabets

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffpack_codec::{CodecConfig, FrequencyTable, HuffmanTree, compress_bytes, decompress_bytes};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Uniform data - one byte value plus the sentinel
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat distribution, close to 8 bits per byte
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
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
        text.iter().copied().cycle().take(size).collect()
    }
}

const SIZES: [(&str, usize); 3] = [("4KB", 4 * 1024), ("64KB", 64 * 1024), ("1MB", 1024 * 1024)];

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");
    let config = CodecConfig::default();

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| black_box(compress_bytes(black_box(data), &config).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");
    let config = CodecConfig::default();

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let compressed = compress_bytes(&generator(size), &config).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &compressed, |b, data| {
                b.iter(|| black_box(decompress_bytes(black_box(data), &config).unwrap()));
            });
        }
    }

    group.finish();
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");

    for distinct in [2usize, 16, 64, 256] {
        let data: Vec<u8> = (0..distinct)
            .flat_map(|b| std::iter::repeat_n(b as u8, b + 1))
            .collect();
        let frequencies = FrequencyTable::scan(&data).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(distinct),
            &frequencies,
            |b, frequencies| {
                b.iter(|| black_box(HuffmanTree::build(black_box(frequencies)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_tree_build
);
criterion_main!(benches);
