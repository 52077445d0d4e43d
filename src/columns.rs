/// The spreadsheet-style name of the column at a 0-based index.
///
/// Follows the bijective base-26 numbering used by spreadsheet column
/// letters, which has no digit for zero at non-final positions.
///
/// ## Example
///
/// ```
/// use csv_codec::column_name;
///
/// assert_eq!(column_name(0), "A");
/// assert_eq!(column_name(25), "Z");
/// assert_eq!(column_name(26), "AA");
/// assert_eq!(column_name(27), "AB");
/// ```
pub fn column_name(index: usize) -> String {
	let mut name = String::new();
	let mut index = index;

	loop {
		let letter = (b'A' + (index % 26) as u8) as char;
		name.insert(0, letter);

		let quotient = index / 26;
		if quotient == 0 {
			break;
		}
		index = quotient - 1;
		if index == 0 {
			name.insert(0, 'A');
			break;
		}
	}

	name
}

/// Default header names for `count` columns, one per index in order.
pub fn default_header(count: usize) -> Vec<String> {
	(0..count).map(column_name).collect()
}

#[test]
fn names_single_letter_columns() {
	let names: Vec<String> = (0..26).map(column_name).collect();
	assert_eq!(names.first().unwrap(), "A");
	assert_eq!(names.get(1).unwrap(), "B");
	assert_eq!(names.last().unwrap(), "Z");
}

#[test]
fn names_32_columns() {
	let header = default_header(32);
	assert_eq!(header.len(), 32);
	assert_eq!(header[25], "Z");
	assert_eq!(header[26], "AA");
	assert_eq!(header[27], "AB");
	assert_eq!(header[31], "AF");
}

#[test]
fn names_multi_letter_columns() {
	assert_eq!(column_name(51), "AZ");
	assert_eq!(column_name(52), "BA");
	assert_eq!(column_name(701), "ZZ");
	assert_eq!(column_name(702), "AAA");
}
