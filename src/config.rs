use anyhow::{Result, ensure};
use std::path::PathBuf;

pub const DEFAULT_LOG_PATH: &str = "./access_log/access_log";
pub const DEFAULT_BUCKET_COUNT: usize = 10_000;
pub const DEFAULT_TOP_K: usize = 10;

/// Settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Access log to scan, one request per line.
    pub log_path: PathBuf,
    /// Fixed bucket count for the chained table.
    pub bucket_count: usize,
    /// Length of the reported rankings.
    pub top_k: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            bucket_count: DEFAULT_BUCKET_COUNT,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl BenchConfig {
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.bucket_count > 0,
            "bucket_count must be greater than zero"
        );
        Ok(())
    }
}
