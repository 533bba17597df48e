pub mod access_log;
pub mod bench;
pub mod config;
pub mod tables;
pub mod top_k;

pub use access_log::{LogScanner, ScanStats, extract_filename};
pub use bench::{BenchReport, PassResult};
pub use config::BenchConfig;
pub use tables::ChainedTable;
pub use tables::FrequencyTable;
pub use tables::StdTable;
pub use top_k::{RankedList, top_k};
