use csv_codec::{column_name, CsvCodec, Dataset, Record};
use proptest::collection::vec;
use proptest::prelude::*;

/// Datasets with 1 to 5 records sharing a uniform column count, with field
/// values drawn from printable ASCII plus line breaks so that separators,
/// quotes, escapes and terminators all show up embedded in fields.
fn datasets() -> impl Strategy<Value = Dataset> {
	(1usize..=5, 1usize..=5).prop_flat_map(|(records, columns)| {
		vec(vec("[ -~\n\r]{0,12}", columns), records).prop_map(|rows| {
			rows.into_iter()
				.map(|values| {
					values
						.into_iter()
						.enumerate()
						.map(|(index, value)| (column_name(index), value))
						.collect::<Record>()
				})
				.collect::<Dataset>()
		})
	})
}

proptest! {
	#[test]
	fn decode_reverses_encode(dataset in datasets()) {
		let codec = CsvCodec::new();
		let csv = codec.encode(&dataset).unwrap();
		let decoded = codec.decode(&csv).unwrap();

		prop_assert_eq!(decoded, dataset);
	}

	#[test]
	fn decode_reverses_encode_without_headers(dataset in datasets()) {
		let codec = CsvCodec::new().headers(false);
		let csv = codec.encode(&dataset).unwrap();
		let decoded = codec.decode(&csv).unwrap();

		prop_assert_eq!(decoded, dataset);
	}

	#[test]
	fn encode_is_stable(dataset in datasets()) {
		let codec = CsvCodec::new();

		prop_assert_eq!(codec.encode(&dataset).unwrap(), codec.encode(&dataset).unwrap());
	}
}
