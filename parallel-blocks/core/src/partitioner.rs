// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Static partitioning of a domain into one block per worker.
//!
//! Both partitioners return exactly `workers` blocks, ordered by index, whose
//! union is `[0, size)` and which never overlap. Blocks may be empty when
//! there are more workers than elements.

use crate::block::Block;
use crate::error::{Error, Result};
use tracing::debug;

/// Byte used to snap text block boundaries when none is configured
pub const DEFAULT_DELIMITER: u8 = b' ';

/// Splits the integer range `[0, size)` into `workers` even blocks.
/// The last block absorbs the remainder of the division.
pub fn partition_range(size: usize, workers: usize) -> Result<Vec<Block>> {
    if workers == 0 {
        return Err(Error::InvalidWorkerCount);
    }

    let block_size = size / workers;
    let blocks: Vec<Block> = (0..workers)
        .map(|index| {
            let start = index * block_size;
            let end = if index + 1 == workers {
                size
            } else {
                start + block_size
            };
            Block::new(index, start, end)
        })
        .collect();

    for block in &blocks {
        debug!(
            block = block.index,
            start = block.start,
            end = block.end,
            len = block.len(),
            "created range block"
        );
    }

    Ok(blocks)
}

/// Splits a byte buffer into `workers` blocks of roughly equal size.
///
/// Every interior boundary is moved forward from its nominal position to the
/// next `delimiter` byte (or to the end of the buffer), so a block never ends
/// in the middle of a token. A block starting at an interior boundary begins
/// with the delimiter itself. Boundaries never move backwards, which means a
/// long token can swallow the nominal share of the following blocks and leave
/// them empty.
pub fn partition_text(buffer: &[u8], workers: usize, delimiter: u8) -> Result<Vec<Block>> {
    if workers == 0 {
        return Err(Error::InvalidWorkerCount);
    }

    let size = buffer.len();
    let block_size = size / workers;
    let mut blocks = Vec::with_capacity(workers);
    let mut start = 0;

    for index in 0..workers {
        let end = if index + 1 == workers {
            size
        } else {
            let mut end = ((index + 1) * block_size).max(start);
            while end < size && buffer[end] != delimiter {
                end += 1;
            }
            end
        };

        let block = Block::new(index, start, end);
        debug!(
            block = block.index,
            start = block.start,
            end = block.end,
            len = block.len(),
            "created text block"
        );
        blocks.push(block);
        start = end;
    }

    Ok(blocks)
}
