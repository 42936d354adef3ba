// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod benchmark;
pub mod config;
pub mod prime_counter;

pub use benchmark::{benchmark, count_primes_below, BenchmarkSummary};
pub use config::{Cli, Config, StrategySelection};
pub use prime_counter::{count_primes, is_prime, PrimeCounter};
