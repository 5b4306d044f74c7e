//! Byte builders for JSONB test fixtures.
//!
//! The library under test never encodes; these helpers exist so tests can
//! spell fixtures without hand-counting header bytes.

/// Raw type nibbles.
pub mod tag {
	/// `null`
	pub const NULL: u8 = 0;
	/// `true`
	pub const TRUE: u8 = 1;
	/// `false`
	pub const FALSE: u8 = 2;
	/// Canonical integer.
	pub const INT: u8 = 3;
	/// JSON5 integer.
	pub const INT5: u8 = 4;
	/// Canonical float.
	pub const FLOAT: u8 = 5;
	/// JSON5 float.
	pub const FLOAT5: u8 = 6;
	/// Text without escapes.
	pub const TEXT: u8 = 7;
	/// Text with RFC 8259 escapes.
	pub const TEXTJ: u8 = 8;
	/// Text with JSON5 escapes.
	pub const TEXT5: u8 = 9;
	/// Raw text.
	pub const TEXTRAW: u8 = 10;
	/// Array.
	pub const ARRAY: u8 = 11;
	/// Object.
	pub const OBJECT: u8 = 12;
}

/// Smallest header for a payload of `len` bytes.
pub fn header(tag: u8, len: usize) -> Vec<u8> {
	let size_class = match len {
		0..=11 => len as u8,
		12..=0xff => 12,
		0x100..=0xffff => 13,
		0x1_0000..=0xffff_ffff => 14,
		_ => 15,
	};
	header_with_class(tag, size_class, len)
}

/// Header using an explicit size class; classes 0-11 must equal `len`.
pub fn header_with_class(tag: u8, size_class: u8, len: usize) -> Vec<u8> {
	assert!(tag < 16 && size_class < 16, "nibbles out of range");
	let mut out = vec![(size_class << 4) | tag];
	let width = match size_class {
		0..=11 => {
			assert_eq!(usize::from(size_class), len, "inline size class must equal payload length");
			0
		}
		12 => 1,
		13 => 2,
		14 => 4,
		_ => 8,
	};
	let be = (len as u64).to_be_bytes();
	out.extend_from_slice(&be[8 - width..]);
	out
}

/// Header followed by `payload`.
pub fn node(tag: u8, payload: &[u8]) -> Vec<u8> {
	let mut out = header(tag, payload.len());
	out.extend_from_slice(payload);
	out
}

/// Encoded `null`.
pub fn null() -> Vec<u8> {
	vec![tag::NULL]
}

/// Encoded boolean.
pub fn boolean(value: bool) -> Vec<u8> {
	vec![if value { tag::TRUE } else { tag::FALSE }]
}

/// Encoded canonical integer.
pub fn int(value: i64) -> Vec<u8> {
	node(tag::INT, value.to_string().as_bytes())
}

/// Encoded escape-free text.
pub fn text(value: &str) -> Vec<u8> {
	node(tag::TEXT, value.as_bytes())
}

/// Array of already-encoded children.
pub fn array(items: &[Vec<u8>]) -> Vec<u8> {
	node(tag::ARRAY, &items.concat())
}

/// Object of already-encoded key/value pairs.
pub fn object(entries: &[(Vec<u8>, Vec<u8>)]) -> Vec<u8> {
	let mut payload = Vec::new();
	for (key, value) in entries {
		payload.extend_from_slice(key);
		payload.extend_from_slice(value);
	}
	node(tag::OBJECT, &payload)
}

/// Encode a JSON document, choosing `TEXTJ` for strings that need escaping.
pub fn from_json(value: &serde_json::Value) -> Vec<u8> {
	match value {
		serde_json::Value::Null => null(),
		serde_json::Value::Bool(value) => boolean(*value),
		serde_json::Value::Number(number) => {
			let tag = if number.is_f64() { tag::FLOAT } else { tag::INT };
			node(tag, number.to_string().as_bytes())
		}
		serde_json::Value::String(value) => string(value),
		serde_json::Value::Array(items) => array(&items.iter().map(from_json).collect::<Vec<_>>()),
		serde_json::Value::Object(map) => object(&map.iter().map(|(key, value)| (string(key), from_json(value))).collect::<Vec<_>>()),
	}
}

fn string(value: &str) -> Vec<u8> {
	let quoted = serde_json::Value::String(value.to_owned()).to_string();
	let escaped = &quoted[1..quoted.len() - 1];
	if escaped == value { text(value) } else { node(tag::TEXTJ, escaped.as_bytes()) }
}
