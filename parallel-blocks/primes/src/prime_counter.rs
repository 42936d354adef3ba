// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parallel_blocks_core::{Block, BlockTask};
use std::ops::Range;
use std::time::Instant;
use tracing::debug;

/// Trial division by every integer in `2..n`.
///
/// Deliberately unoptimized: no square-root bound, no even-number shortcut.
/// The cost is the point, it is the CPU load being benchmarked.
pub fn is_prime(n: u64) -> bool {
    if n == 0 || n == 1 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}

pub fn count_primes(range: Range<u64>) -> u64 {
    range.filter(|&n| is_prime(n)).count() as u64
}

/// Worker task counting the primes of one integer block
pub struct PrimeCounter;

impl BlockTask for PrimeCounter {
    const NAME: &'static str = "primes";
    type Input = Block;
    type Output = u64;

    fn run(worker_id: usize, block: &Block) -> u64 {
        let start = Instant::now();
        let primes = count_primes(block.start as u64..block.end as u64);
        debug!(
            worker_id,
            start = block.start,
            end = block.end,
            primes,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "block counted"
        );
        primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let cases = [
            (0, false),
            (1, false),
            (2, true),
            (3, true),
            (4, false),
            (17, true),
            (100, false),
            (97, true),
        ];
        for (n, expected) in cases {
            assert_eq!(is_prime(n), expected, "is_prime({n})");
        }
    }

    #[test]
    fn test_primes_below_100() {
        assert_eq!(count_primes(0..100), 25);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(count_primes(50..50), 0);
    }

    #[test]
    fn test_task_counts_its_block_only() {
        assert_eq!(PrimeCounter::run(0, &Block::new(0, 0, 10)), 4);
        assert_eq!(PrimeCounter::run(1, &Block::new(1, 10, 20)), 4);
        assert_eq!(PrimeCounter::run(2, &Block::new(2, 20, 20)), 0);
    }
}
