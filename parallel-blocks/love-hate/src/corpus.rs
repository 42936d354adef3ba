// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Builds large benchmark inputs out of a single source text.

use parallel_blocks_core::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes `repeat` copies of `source` to `output`, lowercased unless
/// `keep_case` is set. Returns the number of bytes written.
pub fn prepare_corpus(
    source: &Path,
    output: &Path,
    repeat: usize,
    keep_case: bool,
) -> Result<u64> {
    if repeat == 0 {
        return Err(Error::invalid_argument("repeat must be at least 1"));
    }

    let bytes = std::fs::read(source)
        .map_err(|e| Error::io(format!("failed to read {}", source.display()), e))?;
    let mut content = String::from_utf8_lossy(&bytes).into_owned();
    if !keep_case {
        content = content.to_lowercase();
    }

    let write_err =
        |e: std::io::Error| Error::io(format!("failed to write {}", output.display()), e);
    let file = File::create(output).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    for _ in 0..repeat {
        writer.write_all(content.as_bytes()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    let written = content.len() as u64 * repeat as u64;
    info!(
        source = %source.display(),
        output = %output.display(),
        repeat,
        bytes = written,
        "corpus prepared"
    );
    Ok(written)
}
