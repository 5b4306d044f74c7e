use std::borrow::Cow;

use indexmap::IndexMap;

use crate::jsonb::number::{Number, parse_number};
use crate::jsonb::text::{decode_key, decode_string};
use crate::jsonb::{ArrayIter, ByteView, Header, ObjectIter, Result, TypeTag};

/// One encoded element: a type tag and a borrowed payload window.
///
/// Containers are expanded on demand; nothing decoded is cached, so every
/// traversal re-parses the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value<'a> {
	tag: TypeTag,
	payload: ByteView<'a>,
}

/// Insertion-ordered object expansion keyed by decoded text.
pub type ObjectMap<'a> = IndexMap<String, Value<'a>>;

impl<'a> Value<'a> {
	/// Decode the element whose header starts at the beginning of `bytes`.
	///
	/// Bytes after the element's payload are ignored; see [`crate::jsonb::validate`] for a strict check.
	pub fn parse(bytes: &'a [u8]) -> Result<Self> {
		Self::from_view(ByteView::new(bytes))
	}

	/// Decode the element whose header starts at the beginning of `view`.
	pub fn from_view(view: ByteView<'a>) -> Result<Self> {
		let header = Header::parse(view)?;
		Ok(Self {
			tag: header.tag,
			payload: header.payload,
		})
	}

	/// `null` with an empty payload, built without decoding.
	pub const fn null() -> Self {
		Self {
			tag: TypeTag::Null,
			payload: ByteView::empty(),
		}
	}

	/// Element type.
	pub fn tag(&self) -> TypeTag {
		self.tag
	}

	/// Payload window, excluding header bytes.
	pub fn payload(&self) -> ByteView<'a> {
		self.payload
	}

	/// Raw payload bytes.
	pub fn payload_bytes(&self) -> &'a [u8] {
		self.payload.bytes()
	}

	/// True for arrays.
	pub fn is_array(&self) -> bool {
		self.tag == TypeTag::Array
	}

	/// True for objects.
	pub fn is_object(&self) -> bool {
		self.tag == TypeTag::Object
	}

	/// Lazily iterate array elements; yields nothing for non-arrays.
	pub fn iter_array(&self) -> ArrayIter<'a> {
		if self.is_array() { ArrayIter::new(self.payload) } else { ArrayIter::empty() }
	}

	/// Lazily iterate raw object key/value pairs; yields nothing for non-objects.
	pub fn iter_object(&self) -> ObjectIter<'a> {
		if self.is_object() { ObjectIter::new(self.payload) } else { ObjectIter::empty() }
	}

	/// Decode every array element, in order.
	pub fn as_array(&self) -> Result<Vec<Value<'a>>> {
		self.iter_array().collect()
	}

	/// Decode every object entry, in first-insertion order; a repeated key keeps the last value.
	pub fn as_object(&self) -> Result<ObjectMap<'a>> {
		let mut out = ObjectMap::new();
		for entry in self.iter_object() {
			let (key, value) = entry?;
			out.insert(decode_key(&key)?, value);
		}
		Ok(out)
	}

	/// Look up an object member; the last entry wins when a key repeats.
	pub fn get(&self, key: &str) -> Result<Option<Value<'a>>> {
		let mut found = None;
		for entry in self.iter_object() {
			let (raw_key, value) = entry?;
			if decode_string(raw_key.tag, raw_key.payload_bytes())? == key {
				found = Some(value);
			}
		}
		Ok(found)
	}

	/// Array element at `index`, decoding only the elements before it.
	pub fn at(&self, index: usize) -> Result<Option<Value<'a>>> {
		for (pos, item) in self.iter_array().enumerate() {
			let value = item?;
			if pos == index {
				return Ok(Some(value));
			}
		}
		Ok(None)
	}

	/// Decode a text element.
	pub fn as_text(&self) -> Result<Cow<'a, str>> {
		decode_string(self.tag, self.payload_bytes())
	}

	/// Decode a numeric element.
	pub fn as_number(&self) -> Result<Number> {
		parse_number(self.tag, self.payload_bytes())
	}

	/// Boolean for `true`/`false` elements.
	pub fn as_bool(&self) -> Option<bool> {
		match self.tag {
			TypeTag::True => Some(true),
			TypeTag::False => Some(false),
			_ => None,
		}
	}
}

impl Default for Value<'_> {
	fn default() -> Self {
		Self::null()
	}
}

#[cfg(test)]
mod tests;
