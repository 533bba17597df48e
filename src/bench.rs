use crate::access_log::{LogScanner, ScanStats};
use crate::config::BenchConfig;
use crate::tables::{ChainedTable, FrequencyTable, StdTable};
use crate::top_k::{RankedList, top_k};
use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const CUSTOM_LABEL: &str = "Custom Hash Table";
pub const REFERENCE_LABEL: &str = "std::collections::HashMap";

/// Outcome of scanning the log into one table.
#[derive(Debug, Clone)]
pub struct PassResult {
    pub label: String,
    pub ranked: RankedList,
    pub elapsed: Duration,
    pub stats: ScanStats,
}

/// Both passes of a run, printable in the report format.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub top_k: usize,
    pub custom: PassResult,
    pub reference: PassResult,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pass) in [&self.custom, &self.reference].into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(
                f,
                "Top {} Most Visited Pages from {}:",
                self.top_k, pass.label
            )?;
            for (key, visits) in &pass.ranked {
                writeln!(f, "{} - {} visits", key, visits)?;
            }
        }

        writeln!(f)?;
        for pass in [&self.custom, &self.reference] {
            writeln!(
                f,
                "{} processing time: {}ms",
                pass.label,
                pass.elapsed.as_millis()
            )?;
        }
        Ok(())
    }
}

/// Feeds every filename found in `reader` into `table`.
pub fn count_visits<T: FrequencyTable, R: BufRead>(table: &mut T, reader: R) -> io::Result<ScanStats> {
    let mut scanner = LogScanner::new(reader);
    while let Some(filename) = scanner.next_filename()? {
        table.insert_or_increment(&filename);
    }
    Ok(scanner.stats())
}

/// Opens the log, treating an unopenable file as an empty one.
fn open_log(path: &Path) -> Option<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Some(BufReader::new(file)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot open access log, treating it as empty");
            None
        }
    }
}

/// Scans the configured log into `table` and ranks the result, timing both.
pub fn run_pass<T: FrequencyTable>(
    label: &str,
    table: &mut T,
    config: &BenchConfig,
) -> Result<PassResult> {
    debug!(label, path = %config.log_path.display(), "starting pass");

    let start = Instant::now();
    let stats = match open_log(&config.log_path) {
        Some(reader) => count_visits(table, reader)
            .with_context(|| format!("failed to read {}", config.log_path.display()))?,
        None => ScanStats::default(),
    };
    let ranked = top_k(table.entries(), config.top_k);
    let elapsed = start.elapsed();

    info!(
        label,
        lines = stats.lines,
        matched = stats.matched,
        elapsed_ms = elapsed.as_millis() as u64,
        "pass finished"
    );

    Ok(PassResult {
        label: label.to_owned(),
        ranked,
        elapsed,
        stats,
    })
}

/// Runs the chained table and the `HashMap` baseline back to back.
pub fn run<S: BuildHasher + Default>(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    let mut custom = ChainedTable::try_new(config.bucket_count)?;
    let custom_pass = run_pass(CUSTOM_LABEL, &mut custom, config)?;
    info!(
        distinct = custom.len(),
        buckets = custom.bucket_count(),
        occupied = custom.occupied_buckets(),
        load_factor = custom.load_factor(),
        longest_chain = custom.longest_chain(),
        "chained table layout"
    );
    drop(custom);

    let mut reference: StdTable<S> = StdTable::new(config.bucket_count);
    let reference_pass = run_pass(REFERENCE_LABEL, &mut reference, config)?;

    if custom_pass.ranked != reference_pass.ranked {
        warn!("custom table and reference map disagree on the ranking");
    }

    Ok(BenchReport {
        top_k: config.top_k,
        custom: custom_pass,
        reference: reference_pass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pass(label: &str, ranked: RankedList, millis: u64) -> PassResult {
        PassResult {
            label: label.to_string(),
            ranked,
            elapsed: Duration::from_millis(millis),
            stats: ScanStats::default(),
        }
    }

    #[test]
    fn test_count_visits() {
        let data = b"GET /a HTTP/1.0\nGET /b HTTP/1.0\nbad line\nGET /a HTTP/1.0\n";
        let mut table = ChainedTable::new(4);

        let stats = count_visits(&mut table, Cursor::new(&data[..])).unwrap();

        assert_eq!(stats, ScanStats { lines: 4, matched: 3 });
        assert_eq!(table.get("/a"), Some(2));
        assert_eq!(table.get("/b"), Some(1));
    }

    #[test]
    fn test_report_format() {
        let report = BenchReport {
            top_k: 10,
            custom: pass(CUSTOM_LABEL, vec![("/y".to_string(), 5), ("/x".to_string(), 3)], 12),
            reference: pass(REFERENCE_LABEL, vec![("/y".to_string(), 5), ("/x".to_string(), 3)], 7),
        };

        let expected = "\
Top 10 Most Visited Pages from Custom Hash Table:
/y - 5 visits
/x - 3 visits

Top 10 Most Visited Pages from std::collections::HashMap:
/y - 5 visits
/x - 3 visits

Custom Hash Table processing time: 12ms
std::collections::HashMap processing time: 7ms
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_missing_log_counts_nothing() {
        let config = BenchConfig::default().with_log_path("/nonexistent/access_log");
        let mut table = ChainedTable::new(8);

        let result = run_pass(CUSTOM_LABEL, &mut table, &config).unwrap();

        assert!(result.ranked.is_empty());
        assert_eq!(result.stats, ScanStats::default());
        assert!(table.is_empty());
    }

    #[test]
    fn test_run_rejects_zero_buckets() {
        let config = BenchConfig {
            bucket_count: 0,
            ..BenchConfig::default()
        };
        assert!(run::<std::collections::hash_map::RandomState>(&config).is_err());
    }
}
