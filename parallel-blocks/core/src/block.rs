// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A contiguous half-open slice `[start, end)` of a domain, owned by the
/// worker whose id equals `index`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Block {
    pub fn new(index: usize, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "block {index} starts after it ends");
        Self { index, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
