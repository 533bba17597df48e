pub mod chained_table;
pub mod std_table;
pub mod table_base;

pub use chained_table::ChainedTable;
pub use std_table::StdTable;
pub use table_base::FrequencyTable;
