// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parallel_blocks_core::utils::generate_text;
use parallel_blocks_core::{partition_range, partition_text, DEFAULT_DELIMITER};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_random_ranges_are_covered_exactly() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let size = rng.random_range(0..10_000);
        let workers = rng.random_range(1..200);
        let blocks = partition_range(size, workers).unwrap();

        assert_eq!(blocks.len(), workers);
        assert_eq!(blocks.iter().map(|b| b.len()).sum::<usize>(), size);
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(blocks.last().unwrap().end, size);
    }
}

#[test]
fn test_random_text_boundaries_never_split_a_token() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let words = rng.random_range(1..400);
        let text = generate_text(&mut rng, words, 9, &["love", "hate"], 4);
        let buffer = text.as_bytes();
        let workers = rng.random_range(1..50);
        let blocks = partition_text(buffer, workers, DEFAULT_DELIMITER).unwrap();

        assert_eq!(blocks.len(), workers);
        assert_eq!(blocks[0].start, 0);
        assert_eq!(blocks.last().unwrap().end, buffer.len());
        for pair in blocks.windows(2) {
            let boundary = pair[0].end;
            assert_eq!(boundary, pair[1].start);
            if boundary > 0 && boundary < buffer.len() {
                assert_eq!(buffer[boundary], DEFAULT_DELIMITER, "token split at {boundary}");
            }
        }
    }
}
