// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Whole-word counting of the two marker words.
//!
//! A match is the exact, case-sensitive byte sequence of the word with no
//! ASCII letter directly before or after it. The start and end of a block
//! count as non-letters. The scan is greedy and never overlaps matches, so
//! `"love,love"` holds two occurrences while `"lovelove"` and `"lovehate"`
//! hold none.

use parallel_blocks_core::BlockTask;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::AddAssign;
use tracing::debug;

pub const LOVE: &str = "love";
pub const HATE: &str = "hate";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCounts {
    pub love: u64,
    pub hate: u64,
}

impl WordCounts {
    pub fn new(love: u64, hate: u64) -> Self {
        Self { love, hate }
    }

    /// How the number of "love" compares to the number of "hate"
    pub fn love_vs_hate(&self) -> Ordering {
        self.love.cmp(&self.hate)
    }
}

impl AddAssign for WordCounts {
    fn add_assign(&mut self, other: Self) {
        self.love += other.love;
        self.hate += other.hate;
    }
}

/// Counts whole-word occurrences of `word` in `text`
pub fn count_word(text: &[u8], word: &[u8]) -> u64 {
    if word.is_empty() {
        return 0;
    }

    let len = word.len();
    let mut count = 0;
    let mut pos = 0;
    while pos + len <= text.len() {
        let starts_word = pos == 0 || !text[pos - 1].is_ascii_alphabetic();
        let ends_word = pos + len == text.len() || !text[pos + len].is_ascii_alphabetic();
        if starts_word && ends_word && &text[pos..pos + len] == word {
            count += 1;
            pos += len;
        } else {
            pos += 1;
        }
    }
    count
}

pub fn count_markers(text: &[u8]) -> WordCounts {
    WordCounts {
        love: count_word(text, LOVE.as_bytes()),
        hate: count_word(text, HATE.as_bytes()),
    }
}

/// Text of one block together with the block's position in the domain
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub index: usize,
    pub start: usize,
    pub text: String,
}

/// Worker task counting "love" and "hate" in one text block
pub struct LoveHateCounter;

impl BlockTask for LoveHateCounter {
    const NAME: &'static str = "love-hate";
    type Input = TextBlock;
    type Output = WordCounts;

    fn run(worker_id: usize, input: &TextBlock) -> WordCounts {
        let counts = count_markers(input.text.as_bytes());
        debug!(
            worker_id,
            block = input.index,
            bytes = input.text.len(),
            love = counts.love,
            hate = counts.hate,
            "block scanned"
        );
        counts
    }
}
