// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// One benchmark measurement: `workers execution_ms total_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub workers: usize,
    pub execution_ms: f64,
    pub total_ms: f64,
}

impl TimingRecord {
    pub fn to_line(&self) -> String {
        format!(
            "{} {:.3} {:.3}\n",
            self.workers, self.execution_ms, self.total_ms
        )
    }
}

/// Append-only, space separated timing file read by external plotting scripts
#[derive(Debug, Clone)]
pub struct TimingLog {
    path: PathBuf,
}

impl TimingLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &TimingRecord) -> Result<()> {
        let context = || format!("failed to append to {}", self.path.display());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(context(), e))?;
        file.write_all(record.to_line().as_bytes())
            .map_err(|e| Error::io(context(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_format() {
        let record = TimingRecord {
            workers: 8,
            execution_ms: 12.5,
            total_ms: 40.0,
        };
        assert_eq!(record.to_line(), "8 12.500 40.000\n");
    }

    #[test]
    fn test_log_appends_lines() {
        let path = std::env::temp_dir().join(format!(
            "parallel-blocks-timing-{}.txt",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let log = TimingLog::new(&path);
        for workers in [1, 2] {
            log.append(&TimingRecord {
                workers,
                execution_ms: 1.0,
                total_ms: 2.0,
            })
            .unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1 1.000 2.000\n2 1.000 2.000\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_log_reports_unwritable_path() {
        let log = TimingLog::new("/nonexistent-dir/for/sure/time.txt");
        let err = log
            .append(&TimingRecord {
                workers: 1,
                execution_ms: 0.0,
                total_ms: 0.0,
            })
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
