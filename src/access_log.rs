use std::io::{self, BufRead};

const REQUEST_PREFIX: &str = "GET ";
const REQUEST_SUFFIX: &str = " HTTP/1.0";

/// Extracts the requested path from a line of the form `... GET <path> HTTP/1.0 ...`.
///
/// The suffix is only looked for after the `GET ` marker. Lines missing
/// either marker, or with nothing between them, yield `None`.
pub fn extract_filename(line: &str) -> Option<&str> {
    let start = line.find(REQUEST_PREFIX)? + REQUEST_PREFIX.len();
    let len = line[start..].find(REQUEST_SUFFIX)?;
    let filename = &line[start..start + len];
    if filename.is_empty() {
        None
    } else {
        Some(filename)
    }
}

/// Line counters collected while scanning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: u64,
    pub matched: u64,
}

/// Streams the requested filenames out of an access log.
///
/// Lines are read as raw bytes and decoded lossily, so a stray non-UTF-8
/// byte does not end the scan.
pub struct LogScanner<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
    stats: ScanStats,
}

impl<R: BufRead> LogScanner<R> {
    pub fn new(reader: R) -> Self {
        LogScanner {
            reader,
            buffer: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Reads lines until one contains a request, returning its filename.
    ///
    /// Returns `Ok(None)` at EOF.
    pub fn next_filename(&mut self) -> io::Result<Option<String>> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.stats.lines += 1;

            let line = String::from_utf8_lossy(&self.buffer);
            if let Some(filename) = extract_filename(&line) {
                self.stats.matched += 1;
                return Ok(Some(filename.to_owned()));
            }
        }
    }
}

impl<R: BufRead> Iterator for LogScanner<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_filename().transpose()
    }
}
