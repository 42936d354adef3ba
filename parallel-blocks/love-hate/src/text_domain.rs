// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::word_counter::TextBlock;
use parallel_blocks_core::{partition_text, Block, Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// A whole text file held in memory, read-only once loaded
#[derive(Debug, Clone)]
pub struct TextDomain {
    text: String,
}

impl TextDomain {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads the whole file. Invalid UTF-8 sequences are replaced, since
    /// only ASCII words are ever counted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        info!(
            path = %path.display(),
            bytes = text.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "input loaded"
        );
        Ok(Self { text })
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// One block per worker, boundaries snapped to `delimiter`
    pub fn blocks(&self, workers: usize, delimiter: u8) -> Result<Vec<Block>> {
        if !delimiter.is_ascii() {
            return Err(Error::invalid_argument(format!(
                "delimiter byte {delimiter:#04x} is not ASCII"
            )));
        }
        partition_text(self.text.as_bytes(), workers, delimiter)
    }

    /// Copies the text of each block into its own worker input
    pub fn assignments(&self, blocks: &[Block]) -> Result<Vec<TextBlock>> {
        blocks
            .iter()
            .map(|block| {
                let text = self.text.get(block.range()).ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "block {} ({}..{}) does not fall on character boundaries",
                        block.index, block.start, block.end
                    ))
                })?;
                Ok(TextBlock {
                    index: block.index,
                    start: block.start,
                    text: text.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallel_blocks_core::DEFAULT_DELIMITER;

    #[test]
    fn test_assignments_cover_the_text() {
        let domain = TextDomain::new("to love or to hate, that is the question");
        let blocks = domain.blocks(4, DEFAULT_DELIMITER).unwrap();
        let inputs = domain.assignments(&blocks).unwrap();
        assert_eq!(inputs.len(), 4);
        let joined: String = inputs.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(joined, domain.as_str());
    }

    #[test]
    fn test_multibyte_text_is_sliced_on_char_boundaries() {
        let domain = TextDomain::new("café love naïve hate über love");
        for workers in 1..=10 {
            let blocks = domain.blocks(workers, DEFAULT_DELIMITER).unwrap();
            assert!(domain.assignments(&blocks).is_ok());
        }
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let domain = TextDomain::new("abc");
        assert!(matches!(
            domain.blocks(2, 0xC3),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TextDomain::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
