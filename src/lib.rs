//! Bidirectional codec between tabular records and CSV text.
//!
//! [`CsvCodec::encode`] turns an ordered sequence of records into CSV text,
//! and [`CsvCodec::decode`] parses CSV text back into records. Records are
//! insertion-ordered maps from column name to cell value.

mod codec;
mod columns;
mod decode;
mod encode;

pub use codec::CsvCodec;
pub use columns::{column_name, default_header};

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
	/// A record or row whose field count differs from the column count
	/// established by the first record or the header.
	#[error("The records must have the same number of columns for each record.")]
	ColumnCountMismatch,
	/// The underlying row reader failed mid-input.
	#[error("failed to read row: {0}")]
	MalformedRow(String),
}

impl From<csv::Error> for Error {
	fn from(err: csv::Error) -> Self {
		Error::MalformedRow(err.to_string())
	}
}

/// One row of tabular data, as an insertion-ordered map from column name to
/// cell value.
pub type Record = linked_hash_map::LinkedHashMap<String, String>;

/// An ordered sequence of records sharing a uniform column count.
pub type Dataset = Vec<Record>;

#[cfg(test)]
pub(crate) fn record(pairs: &[(&str, &str)]) -> Record {
	pairs
		.iter()
		.map(|(name, value)| (name.to_string(), value.to_string()))
		.collect()
}
