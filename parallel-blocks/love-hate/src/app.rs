// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::Config;
use crate::text_domain::TextDomain;
use crate::word_counter::{LoveHateCounter, WordCounts};
use parallel_blocks_core::timing::millis;
use parallel_blocks_core::{
    Dispatch, Dispatcher, ExecutionStrategy, Result, TimingLog, TimingRecord,
};
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;
use tracing::info;

/// Partition `domain` and count the marker words with one worker per block
pub fn count_words<S: ExecutionStrategy>(
    domain: &TextDomain,
    workers: usize,
    delimiter: u8,
    strategy: S,
) -> Result<Dispatch<WordCounts>> {
    let blocks = domain.blocks(workers, delimiter)?;
    let inputs = domain.assignments(&blocks)?;
    Dispatcher::new(strategy).run::<LoveHateCounter>(inputs)
}

/// Outcome of one love/hate run
#[derive(Debug, Clone)]
pub struct Report {
    pub strategy: &'static str,
    pub per_worker: Vec<WordCounts>,
    pub totals: WordCounts,
    pub timing: TimingRecord,
}

/// Load, partition, dispatch, aggregate and record the timing
pub fn run(config: &Config) -> Result<Report> {
    let start = Instant::now();
    info!(
        workers = config.workers,
        strategy = ?config.strategy,
        input = %config.input.display(),
        "love-hate run started"
    );

    let domain = TextDomain::load(&config.input)?;
    let strategy = config.strategy.build(config.verbosity)?;
    let strategy_name = strategy.name();
    let dispatch = count_words(&domain, config.workers, config.delimiter_byte(), strategy)?;
    let totals = dispatch.total()?;

    let timing = TimingRecord {
        workers: config.workers,
        execution_ms: dispatch.elapsed_ms(),
        total_ms: millis(start.elapsed()),
    };
    if let Some(path) = &config.timing_log {
        TimingLog::new(path).append(&timing)?;
    }

    Ok(Report {
        strategy: strategy_name,
        per_worker: dispatch.results.iter().copied().collect(),
        totals,
        timing,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (worker_id, counts) in self.per_worker.iter().enumerate() {
            writeln!(
                f,
                "[worker {}] Found {} love words and {} hate words.",
                worker_id, counts.love, counts.hate
            )?;
        }
        writeln!(
            f,
            "Found a total of {} love words and {} hate words",
            self.totals.love, self.totals.hate
        )?;
        let comparison = match self.totals.love_vs_hate() {
            Ordering::Greater => "higher than",
            Ordering::Equal => "the same as",
            Ordering::Less => "lower than",
        };
        writeln!(
            f,
            "The total amount of occurrences of the word 'love' alone is {} the word 'hate'",
            comparison
        )?;
        writeln!(
            f,
            "The execution step took {:.3} milliseconds with {} {} workers.",
            self.timing.execution_ms, self.timing.workers, self.strategy
        )?;
        write!(f, "The total time was {:.3} milliseconds", self.timing.total_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallel_blocks_core::{InlineStrategy, ThreadStrategy, DEFAULT_DELIMITER};

    #[test]
    fn test_count_is_independent_of_worker_count() {
        let domain = TextDomain::new(
            "love is not love which alters when it alteration finds; \
             I hate the hate, love, and love again. lovehate hatelove love",
        );
        let expected = crate::word_counter::count_markers(domain.as_str().as_bytes());
        for workers in 1..=30 {
            let dispatch = count_words(&domain, workers, DEFAULT_DELIMITER, ThreadStrategy).unwrap();
            assert_eq!(dispatch.total().unwrap(), expected, "{workers} workers");
        }
        assert_eq!(expected, WordCounts::new(5, 2));
    }

    #[test]
    fn test_word_near_nominal_split_counted_once() {
        // With two workers the nominal boundary lands inside "love"
        let domain = TextDomain::new("abc I love cats");
        assert_eq!(domain.len() / 2, 7);
        let dispatch = count_words(&domain, 2, DEFAULT_DELIMITER, InlineStrategy).unwrap();
        assert_eq!(dispatch.total().unwrap(), WordCounts::new(1, 0));
    }

    #[test]
    fn test_report_wording() {
        let report = Report {
            strategy: "thread",
            per_worker: vec![WordCounts::new(2, 1), WordCounts::new(1, 0)],
            totals: WordCounts::new(3, 1),
            timing: TimingRecord {
                workers: 2,
                execution_ms: 1.5,
                total_ms: 3.25,
            },
        };
        let text = report.to_string();
        assert!(text.contains("[worker 1] Found 1 love words and 0 hate words."));
        assert!(text.contains("Found a total of 3 love words and 1 hate words"));
        assert!(text.contains("'love' alone is higher than the word 'hate'"));
        assert!(text.contains("The total time was 3.250 milliseconds"));
    }
}
