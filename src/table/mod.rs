//! Reading rosters from and writing results to CSV files.
//!
//! Input rows are kept as ordered label/value pairs; output records are
//! projected onto a caller-chosen list of columns.

mod reader;
mod writer;

pub use reader::{parse_rows, read_rows};
pub use writer::{TableRecord, encode_rows, write_rows};
