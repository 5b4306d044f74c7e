use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::jsonb::number::Number;
use crate::jsonb::text::decode_key;
use crate::jsonb::{JsonbError, Result, TypeTag, Value};

/// Nesting limit matching SQLite's JSON depth ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Runtime limits for conversion and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
	/// Maximum number of nested container levels, the root container included.
	pub max_depth: usize,
	/// Accept bytes after the root element when validating.
	pub allow_trailing_bytes: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			allow_trailing_bytes: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that rejects trailing input.
	pub fn strict() -> Self {
		Self::default()
	}

	/// Preset for blobs embedded in larger buffers.
	pub fn lenient() -> Self {
		Self {
			allow_trailing_bytes: true,
			..Self::default()
		}
	}

	pub(crate) fn enter(&self, depth: usize) -> Result<()> {
		if depth >= self.max_depth {
			debug!(depth, max_depth = self.max_depth, "jsonb: nesting depth exceeded");
			return Err(JsonbError::DepthExceeded { max_depth: self.max_depth });
		}
		Ok(())
	}
}

impl Value<'_> {
	/// Convert this element and everything below it into a `serde_json::Value`.
	///
	/// Objects keep first-insertion order with the last value of a repeated key.
	pub fn to_json(&self, opt: &DecodeOptions) -> Result<serde_json::Value> {
		to_json_impl(*self, opt, 0)
	}
}

fn to_json_impl(value: Value<'_>, opt: &DecodeOptions, depth: usize) -> Result<serde_json::Value> {
	let tag = value.tag();
	Ok(match tag {
		TypeTag::Null => serde_json::Value::Null,
		TypeTag::True => serde_json::Value::Bool(true),
		TypeTag::False => serde_json::Value::Bool(false),
		TypeTag::Int | TypeTag::Int5 | TypeTag::Float | TypeTag::Float5 => value.as_number()?.to_json(),
		TypeTag::Text | TypeTag::TextJ | TypeTag::Text5 | TypeTag::TextRaw => serde_json::Value::String(value.as_text()?.into_owned()),
		TypeTag::Array => {
			opt.enter(depth)?;
			let mut out = Vec::new();
			for item in value.iter_array() {
				out.push(to_json_impl(item?, opt, depth + 1)?);
			}
			serde_json::Value::Array(out)
		}
		TypeTag::Object => {
			opt.enter(depth)?;
			let mut out = serde_json::Map::new();
			for entry in value.iter_object() {
				let (key, item) = entry?;
				out.insert(decode_key(&key)?, to_json_impl(item, opt, depth + 1)?);
			}
			serde_json::Value::Object(out)
		}
		TypeTag::Reserved13 | TypeTag::Reserved14 | TypeTag::Reserved15 => return Err(JsonbError::UnhandledType { tag }),
	})
}

impl Serialize for Value<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		Bounded {
			value: *self,
			opt: &DecodeOptions::default(),
			depth: 0,
		}
		.serialize(serializer)
	}
}

/// Serializes one element while tracking container depth.
struct Bounded<'v, 'a> {
	value: Value<'a>,
	opt: &'v DecodeOptions,
	depth: usize,
}

impl<'a> Bounded<'_, 'a> {
	fn child(&self, value: Value<'a>) -> Bounded<'_, 'a> {
		Bounded {
			value,
			opt: self.opt,
			depth: self.depth + 1,
		}
	}
}

impl Serialize for Bounded<'_, '_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let value = self.value;
		let tag = value.tag();
		match tag {
			TypeTag::Null => serializer.serialize_unit(),
			TypeTag::True => serializer.serialize_bool(true),
			TypeTag::False => serializer.serialize_bool(false),
			TypeTag::Int | TypeTag::Int5 | TypeTag::Float | TypeTag::Float5 => match value.as_number().map_err(S::Error::custom)? {
				Number::Int(number) => serializer.serialize_i64(number),
				Number::Float(number) if number.is_finite() => serializer.serialize_f64(number),
				Number::Float(_) => serializer.serialize_unit(),
			},
			TypeTag::Text | TypeTag::TextJ | TypeTag::Text5 | TypeTag::TextRaw => {
				let text = value.as_text().map_err(S::Error::custom)?;
				serializer.serialize_str(&text)
			}
			TypeTag::Array => {
				self.opt.enter(self.depth).map_err(S::Error::custom)?;
				let mut seq = serializer.serialize_seq(None)?;
				for item in value.iter_array() {
					let item = item.map_err(S::Error::custom)?;
					seq.serialize_element(&self.child(item))?;
				}
				seq.end()
			}
			TypeTag::Object => {
				self.opt.enter(self.depth).map_err(S::Error::custom)?;
				let entries = value.as_object().map_err(S::Error::custom)?;
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, item) in &entries {
					map.serialize_entry(key, &self.child(*item))?;
				}
				map.end()
			}
			TypeTag::Reserved13 | TypeTag::Reserved14 | TypeTag::Reserved15 => Err(S::Error::custom(JsonbError::UnhandledType { tag })),
		}
	}
}
