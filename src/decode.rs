use crate::{columns, CsvCodec, Dataset, Error, Record};
use csv::ReaderBuilder;

impl CsvCodec {
	/// Decode CSV text into records.
	///
	/// With [`headers`](CsvCodec::headers) enabled (the default) the first
	/// row supplies the column names. Otherwise every row is a data row and
	/// column names are synthesized spreadsheet-style with
	/// [`column_name`](crate::column_name): `A`, `B`, ... `Z`, `AA`, `AB`.
	///
	/// Every row must have as many fields as the header has columns,
	/// otherwise the call fails with [`Error::ColumnCountMismatch`] and any
	/// records built so far are discarded. A blank line is a corrupt row,
	/// not end of input, and fails with [`Error::MalformedRow`], as does any
	/// failure of the underlying row reader.
	///
	/// ## Example
	///
	/// ```
	/// use csv_codec::CsvCodec;
	///
	/// let records = CsvCodec::new().decode("A,B\n1,2\n3,4\n").unwrap();
	///
	/// assert_eq!(records.len(), 2);
	/// assert_eq!(records[0]["A"], "1");
	/// assert_eq!(records[1]["B"], "4");
	/// ```
	pub fn decode(&self, csv: &str) -> Result<Dataset, Error> {
		if csv.is_empty() {
			return Ok(Dataset::new());
		}

		// The reader silently skips blank lines, so they are rejected up
		// front. A blank line is a corrupt row, not end of input.
		self.reject_blank_rows(csv)?;

		let reader = ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.delimiter(self.separator)
			.quote(self.quote)
			.escape(Some(self.escape))
			.from_reader(csv.as_bytes());
		let mut rows = reader.into_records();

		let first = match rows.next() {
			Some(row) => row?,
			None => return Ok(Dataset::new()),
		};

		// Without a header row, the first row doubles as the first record.
		let header: Vec<String>;
		let mut pending = None;
		if self.headers {
			header = first.iter().map(String::from).collect();
		} else {
			header = columns::default_header(first.len());
			pending = Some(first);
		}

		let column_count = header.len();
		let mut records = Dataset::new();

		let rows = pending
			.into_iter()
			.map(Ok)
			.chain(rows.map(|row| row.map_err(Error::from)));
		for row in rows {
			let row = row?;
			if row.len() != column_count {
				return Err(Error::ColumnCountMismatch);
			}
			let record: Record = header
				.iter()
				.cloned()
				.zip(row.iter().map(String::from))
				.collect();
			records.push(record);
		}

		Ok(records)
	}

	/// Errors on any blank line outside a quoted field. Line breaks inside
	/// quoted fields are field content, not row boundaries.
	fn reject_blank_rows(&self, csv: &str) -> Result<(), Error> {
		let mut in_quotes = false;
		let mut escaped = false;
		let mut blank = true;
		let mut bytes = csv.bytes().peekable();

		while let Some(byte) = bytes.next() {
			if in_quotes {
				if escaped {
					escaped = false;
				} else if byte == self.quote {
					// A doubled quote stays inside the field.
					if bytes.peek() == Some(&self.quote) {
						bytes.next();
					} else {
						in_quotes = false;
					}
				} else if byte == self.escape {
					escaped = true;
				}
			} else if byte == b'\n' {
				if blank {
					return Err(Error::MalformedRow("blank line".to_string()));
				}
				blank = true;
			} else {
				if byte == self.quote {
					in_quotes = true;
				}
				if byte != b'\r' {
					blank = false;
				}
			}
		}

		Ok(())
	}
}

#[cfg(test)]
use crate::record;

#[test]
fn decodes_csv() {
	let csv = "A,B,C\n1,2,3\n4,5,6\n7,8,9\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(
		records,
		vec![
			record(&[("A", "1"), ("B", "2"), ("C", "3")]),
			record(&[("A", "4"), ("B", "5"), ("C", "6")]),
			record(&[("A", "7"), ("B", "8"), ("C", "9")]),
		]
	);
}

#[test]
fn decodes_csv_without_header() {
	let csv = "1,2,3\n4,5,6\n7,8,9\n";

	let records = CsvCodec::new().headers(false).decode(csv).unwrap();

	assert_eq!(
		records,
		vec![
			record(&[("A", "1"), ("B", "2"), ("C", "3")]),
			record(&[("A", "4"), ("B", "5"), ("C", "6")]),
			record(&[("A", "7"), ("B", "8"), ("C", "9")]),
		]
	);
}

#[test]
fn decodes_empty_csv() {
	let records = CsvCodec::new().decode("").unwrap();

	assert_eq!(records, Dataset::new());
}

#[test]
fn rejects_mismatched_column_counts() {
	let csv = "A,B,C\n1,2,3\n4,5\n6\n";

	let err = CsvCodec::new().decode(csv).unwrap_err();

	assert_eq!(err, Error::ColumnCountMismatch);
	assert_eq!(
		err.to_string(),
		"The records must have the same number of columns for each record."
	);
}

#[test]
fn restores_quoted_terminators() {
	let csv = "A,B,C\n\"1\n2\",\"3\n4\",\"5\n6\"\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(
		records,
		vec![record(&[("A", "1\n2"), ("B", "3\n4"), ("C", "5\n6")])]
	);
}

#[test]
fn restores_doubled_quotes() {
	let csv = "A\n\"say \"\"hi\"\"\"\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(records, vec![record(&[("A", "say \"hi\"")])]);
}

#[test]
fn restores_escaped_quotes() {
	let csv = "A\n\"say \\\"hi\\\"\"\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(records, vec![record(&[("A", "say \"hi\"")])]);
}

#[test]
fn synthesizes_default_header_for_32_columns() {
	let csv = "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,25,26,27,28,29,30,31,32\n";

	let records = CsvCodec::new().headers(false).decode(csv).unwrap();

	assert_eq!(records.len(), 1);
	assert_eq!(records[0].len(), 32);
	assert_eq!(records[0]["A"], "1");
	assert_eq!(records[0]["Z"], "26");
	assert_eq!(records[0]["AA"], "27");
	assert_eq!(records[0]["AB"], "28");
	assert_eq!(records[0]["AF"], "32");
}

#[test]
fn decodes_crlf_terminated_rows() {
	let csv = "A,B\r\n1,2\r\n3,4\r\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(
		records,
		vec![
			record(&[("A", "1"), ("B", "2")]),
			record(&[("A", "3"), ("B", "4")]),
		]
	);
}

#[test]
fn decodes_custom_separator() {
	let csv = "A;B\n1;2\n";

	let records = CsvCodec::new().separator(b';').decode(csv).unwrap();

	assert_eq!(records, vec![record(&[("A", "1"), ("B", "2")])]);
}

#[test]
fn rejects_blank_only_csv() {
	let err = CsvCodec::new().decode("\n").unwrap_err();

	assert!(matches!(err, Error::MalformedRow(_)));
}

#[test]
fn rejects_blank_lines_between_rows() {
	let err = CsvCodec::new().decode("A\n\n1\n").unwrap_err();

	assert!(matches!(err, Error::MalformedRow(_)));
}

#[test]
fn rejects_trailing_blank_lines() {
	let err = CsvCodec::new().decode("A\n1\n\n").unwrap_err();

	assert!(matches!(err, Error::MalformedRow(_)));
}

#[test]
fn keeps_blank_lines_inside_quoted_fields() {
	let csv = "A\n\"1\n\n2\"\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(records, vec![record(&[("A", "1\n\n2")])]);
}

#[test]
fn decodes_header_only_csv() {
	let csv = "A,B,C\n";

	let records = CsvCodec::new().decode(csv).unwrap();

	assert_eq!(records, Dataset::new());
}
