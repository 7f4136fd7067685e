use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lz77::{compress, configure, decompress};
use std::hint::black_box;

/// Generates pseudo-random bytes with a fixed-seed Linear Congruential Generator (LCG).
///
/// High entropy: the match finder scans the full window at every position and
/// finds nothing, the worst case for compression time.
fn generate_random(size: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(size);
    let mut seed: u64 = 0xDEAD_BEEF;
    for _ in 0..size {
        seed = (seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)) & 0xFFFF_FFFF;
        vec.push((seed >> 24) as u8);
    }
    vec
}

/// Generates repeated English text, typical compressible data.
fn generate_text(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    let mut vec = Vec::with_capacity(size);
    while vec.len() < size {
        vec.extend_from_slice(text);
    }
    vec.truncate(size);
    vec
}

/// A single repeated byte. Every match hits `max_match` on the first candidate.
fn generate_zeroes(size: usize) -> Vec<u8> {
    vec![0u8; size]
}

fn bench_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("LZ77 Compression");
    // Brute-force search is O(window * input); keep inputs modest.
    let size = 16 * 1024;
    let config = configure();

    let scenarios = [
        ("Zeroes", generate_zeroes(size)),
        ("Random", generate_random(size)),
        ("Text", generate_text(size)),
    ];

    for (name, input_data) in &scenarios {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{name} 16KB"), |b| {
            b.iter(|| compress(black_box(input_data), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

/// Throughput is measured against the uncompressed size.
fn bench_decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("LZ77 Decompression");
    let size = 16 * 1024;

    let scenarios = [
        ("Zeroes", generate_zeroes(size)),
        ("Random", generate_random(size)),
        ("Text", generate_text(size)),
    ];

    for (name, source_data) in &scenarios {
        let compressed_data = compress(source_data, &configure()).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{name} 16KB"), |b| {
            b.iter(|| decompress(black_box(&compressed_data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compression, bench_decompression);
criterion_main!(benches);
