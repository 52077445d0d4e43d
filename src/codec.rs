/// A configurable CSV codec.
///
/// The setters follow the builder style of [`csv::ReaderBuilder`] and
/// [`csv::WriterBuilder`]. A codec is a plain value: it holds no state
/// between calls, and the same codec can be reused for any number of
/// [`encode`](CsvCodec::encode) and [`decode`](CsvCodec::decode) calls.
///
/// ## Example
///
/// ```
/// use csv_codec::CsvCodec;
///
/// let codec = CsvCodec::new().separator(b';').headers(false);
/// let records = codec.decode("1;2\n3;4\n").unwrap();
///
/// assert_eq!(records[0]["A"], "1");
/// assert_eq!(records[1]["B"], "4");
/// ```
#[derive(Debug, Clone)]
pub struct CsvCodec {
	pub(crate) headers: bool,
	pub(crate) separator: u8,
	pub(crate) quote: u8,
	pub(crate) escape: u8,
	pub(crate) terminator: String,
}

impl Default for CsvCodec {
	fn default() -> Self {
		CsvCodec {
			headers: true,
			separator: b',',
			quote: b'"',
			escape: b'\\',
			terminator: "\n".to_string(),
		}
	}
}

impl CsvCodec {
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether `encode` emits a header row and `decode` treats the first row
	/// as one. Defaults to `true`.
	pub fn headers(mut self, yes: bool) -> Self {
		self.headers = yes;
		self
	}

	/// Field separator. Defaults to `b','`.
	pub fn separator(mut self, separator: u8) -> Self {
		self.separator = separator;
		self
	}

	/// Quote character wrapping fields that contain special characters.
	/// Defaults to `b'"'`.
	pub fn quote(mut self, quote: u8) -> Self {
		self.quote = quote;
		self
	}

	/// Escape character recognized inside quoted fields when decoding.
	/// Defaults to `b'\\'`.
	pub fn escape(mut self, escape: u8) -> Self {
		self.escape = escape;
		self
	}

	/// Row terminator used when encoding. Decoding always recognizes `\n`
	/// and `\r\n`. Defaults to `"\n"`.
	pub fn terminator<T: Into<String>>(mut self, terminator: T) -> Self {
		self.terminator = terminator.into();
		self
	}
}
