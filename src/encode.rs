use crate::{CsvCodec, Error, Record};

impl CsvCodec {
	/// Encode records into CSV text.
	///
	/// Column order follows the key insertion order of each record, and the
	/// header row (if enabled) is built from the first record's keys. Every
	/// record must have the same number of columns as the first one,
	/// otherwise the call fails with [`Error::ColumnCountMismatch`] and no
	/// output is returned.
	///
	/// ## Example
	///
	/// ```
	/// use csv_codec::{CsvCodec, Record};
	///
	/// let records: Vec<Record> = vec![
	///   Record::from_iter([("A".to_string(), "1".to_string()), ("B".to_string(), "2".to_string())]),
	///   Record::from_iter([("A".to_string(), "3".to_string()), ("B".to_string(), "4".to_string())]),
	/// ];
	/// let csv = CsvCodec::new().encode(&records).unwrap();
	///
	/// assert_eq!(csv, "A,B\n1,2\n3,4\n");
	/// ```
	pub fn encode(&self, records: &[Record]) -> Result<String, Error> {
		if records.is_empty() {
			return Ok(String::new());
		}

		let column_count = records[0].len();
		let mut csv = String::new();

		if self.headers {
			self.write_row(&mut csv, records[0].keys().map(String::as_str));
		}

		for record in records {
			if record.len() != column_count {
				return Err(Error::ColumnCountMismatch);
			}
			self.write_row(&mut csv, record.values().map(String::as_str));
		}

		Ok(csv)
	}

	fn write_row<'a>(&self, csv: &mut String, fields: impl Iterator<Item = &'a str>) {
		let fields: Vec<&str> = fields.collect();
		// A row with one empty field would render as a blank line, which the
		// reader skips, so it gets quoted.
		if fields.len() == 1 && fields[0].is_empty() {
			csv.push(self.quote as char);
			csv.push(self.quote as char);
		} else {
			for (index, field) in fields.iter().enumerate() {
				if index > 0 {
					csv.push(self.separator as char);
				}
				self.write_field(csv, field);
			}
		}
		csv.push_str(&self.terminator);
	}

	fn write_field(&self, csv: &mut String, field: &str) {
		if !self.needs_quoting(field) {
			csv.push_str(field);
			return;
		}

		let quote = self.quote as char;
		let escape = self.escape as char;

		csv.push(quote);
		for c in field.chars() {
			// Embedded quotes are doubled, embedded escapes escape themselves.
			if c == quote || c == escape {
				csv.push(c);
			}
			csv.push(c);
		}
		csv.push(quote);
	}

	fn needs_quoting(&self, field: &str) -> bool {
		let special = [self.separator, self.quote, self.escape, b'\n', b'\r'];
		field.bytes().any(|byte| special.contains(&byte))
			|| (!self.terminator.is_empty() && field.contains(&self.terminator))
	}
}

#[cfg(test)]
use crate::record;

#[test]
fn encodes_records() {
	let records = vec![
		record(&[("A", "1"), ("B", "2"), ("C", "3")]),
		record(&[("A", "4"), ("B", "5"), ("C", "6")]),
		record(&[("A", "7"), ("B", "8"), ("C", "9")]),
	];

	let csv = CsvCodec::new().encode(&records).unwrap();

	assert_eq!(csv, "A,B,C\n1,2,3\n4,5,6\n7,8,9\n");
}

#[test]
fn encodes_records_without_header() {
	let records = vec![
		record(&[("A", "1"), ("B", "2"), ("C", "3")]),
		record(&[("A", "4"), ("B", "5"), ("C", "6")]),
		record(&[("A", "7"), ("B", "8"), ("C", "9")]),
	];

	let csv = CsvCodec::new().headers(false).encode(&records).unwrap();

	assert_eq!(csv, "1,2,3\n4,5,6\n7,8,9\n");
}

#[test]
fn encodes_empty_dataset() {
	let csv = CsvCodec::new().encode(&[]).unwrap();

	assert_eq!(csv, "");
}

#[test]
fn rejects_mismatched_column_counts() {
	let records = vec![
		record(&[("A", "1"), ("B", "2"), ("C", "3")]),
		record(&[("A", "4"), ("B", "5")]),
		record(&[("A", "6")]),
	];

	let err = CsvCodec::new().encode(&records).unwrap_err();

	assert_eq!(err, Error::ColumnCountMismatch);
	assert_eq!(
		err.to_string(),
		"The records must have the same number of columns for each record."
	);
}

#[test]
fn quotes_fields_containing_the_terminator() {
	let records = vec![record(&[("A", "1\n2"), ("B", "3\n4"), ("C", "5\n6")])];

	let csv = CsvCodec::new().encode(&records).unwrap();

	assert_eq!(csv, "A,B,C\n\"1\n2\",\"3\n4\",\"5\n6\"\n");
}

#[test]
fn quotes_fields_containing_the_separator() {
	let records = vec![record(&[("A", "1,2"), ("B", "3")])];

	let csv = CsvCodec::new().encode(&records).unwrap();

	assert_eq!(csv, "A,B\n\"1,2\",3\n");
}

#[test]
fn doubles_embedded_quotes() {
	let records = vec![record(&[("A", "say \"hi\"")])];

	let csv = CsvCodec::new().encode(&records).unwrap();

	assert_eq!(csv, "A\n\"say \"\"hi\"\"\"\n");
}

#[test]
fn escapes_embedded_escape_characters() {
	let records = vec![record(&[("A", "C:\\temp"), ("B", "1")])];

	let csv = CsvCodec::new().encode(&records).unwrap();

	assert_eq!(csv, "A,B\n\"C:\\\\temp\",1\n");
}

#[test]
fn uses_custom_separator_and_terminator() {
	let records = vec![
		record(&[("A", "1"), ("B", "2")]),
		record(&[("A", "3"), ("B", "4")]),
	];

	let csv = CsvCodec::new()
		.separator(b';')
		.terminator("\r\n")
		.encode(&records)
		.unwrap();

	assert_eq!(csv, "A;B\r\n1;2\r\n3;4\r\n");
}

#[test]
fn quotes_lone_empty_fields() {
	let records = vec![record(&[("A", "")])];

	let csv = CsvCodec::new().encode(&records).unwrap();

	assert_eq!(csv, "A\n\"\"\n");
}
