#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77::{Config, compress, configure, decompress};

/// Feeds arbitrary bytes to the decompressor.
///
/// # Invariant
/// The decompressor must return either `Ok(_)` or `Err(_)`. It must **never** panic,
/// whatever tags, offsets or lengths the input claims.
fn verify_decompression_robustness(data: &[u8]) {
    // Success (coincidentally valid) and failure are both fine here.
    let _ = decompress(data);
}

/// Verifies the lossless round-trip property under `config`.
///
/// # Invariant
/// `decompress(compress(data)) == data`
///
/// # Panics
/// Panics if the decompressed output does not bit-match the input, or if the
/// decompressor rejects a stream the compressor produced.
fn verify_round_trip(data: &[u8], config: &Config) {
    let compressed = compress(data, config).expect("valid config rejected");

    match decompress(&compressed) {
        Ok(decompressed) => {
            if decompressed != data {
                panic!(
                    "Round-trip mismatch!\nInput len: {}\nCompressed len: {}\nDecompressed len: {}\nConfig: {:?}",
                    data.len(),
                    compressed.len(),
                    decompressed.len(),
                    config
                );
            }
        }
        Err(e) => {
            panic!(
                "Round-trip failed! Decompressor rejected valid compressed data.\nError: {:?}\nInput len: {}",
                e,
                data.len()
            );
        }
    }
}

fuzz_target!(|data: &[u8]| {
    // 1. Robustness: random noise must not crash the decompressor.
    verify_decompression_robustness(data);

    // 2. Correctness with the default parameters.
    verify_round_trip(data, &configure());

    // 3. Correctness with a tiny window and short matches, derived from the input.
    if let &[w, m, ..] = data {
        let min = usize::from(m % 4) + 1;
        let small = Config::new()
            .with_window_size(usize::from(w))
            .with_min_match(min)
            .with_max_match(min + usize::from(m >> 4));
        verify_round_trip(data, &small);
    }
});
