use tracing::debug;

use crate::jsonb::{DecodeOptions, JsonbError, Result, TypeTag, Value};

/// Parse `bytes` as one JSONB document and check every element below the root.
///
/// Unlike [`Value::parse`], this rejects bytes after the root element unless
/// `opt.allow_trailing_bytes` is set.
pub fn validate<'a>(bytes: &'a [u8], opt: &DecodeOptions) -> Result<Value<'a>> {
	let root = Value::parse(bytes)?;
	let end = root.payload().end();
	if !opt.allow_trailing_bytes && end < bytes.len() {
		debug!(at = end, rem = bytes.len() - end, "jsonb: trailing bytes after root");
		return Err(JsonbError::TrailingBytes {
			at: end,
			rem: bytes.len() - end,
		});
	}

	root.validate(opt)?;
	Ok(root)
}

impl Value<'_> {
	/// Check this element and everything below it.
	///
	/// Every header must fit its parent, keys must be decodable text, scalar
	/// payloads must decode for their type, and nesting must stay within
	/// `opt.max_depth`.
	pub fn validate(&self, opt: &DecodeOptions) -> Result<()> {
		validate_impl(*self, opt, 0).inspect_err(|err| debug!(%err, "jsonb: validation failed"))
	}
}

fn validate_impl(value: Value<'_>, opt: &DecodeOptions, depth: usize) -> Result<()> {
	let tag = value.tag();
	match tag {
		TypeTag::Null | TypeTag::True | TypeTag::False => {
			if !value.payload().is_empty() {
				return Err(JsonbError::UnexpectedPayload {
					tag,
					len: value.payload().len(),
				});
			}
		}
		TypeTag::Int | TypeTag::Int5 | TypeTag::Float | TypeTag::Float5 => {
			value.as_number()?;
		}
		TypeTag::Text | TypeTag::TextJ | TypeTag::Text5 | TypeTag::TextRaw => {
			value.as_text()?;
		}
		TypeTag::Array => {
			opt.enter(depth)?;
			for item in value.iter_array() {
				validate_impl(item?, opt, depth + 1)?;
			}
		}
		TypeTag::Object => {
			opt.enter(depth)?;
			let mut consumed = value.payload().start();
			for entry in value.iter_object() {
				let (key, item) = entry?;
				key.as_text()?;
				validate_impl(item, opt, depth + 1)?;
				consumed = item.payload().end();
			}
			// Expansion skips a lone trailing byte; a valid document has none.
			if consumed != value.payload().end() {
				return Err(JsonbError::InvalidHeader { at: consumed });
			}
		}
		TypeTag::Reserved13 | TypeTag::Reserved14 | TypeTag::Reserved15 => return Err(JsonbError::UnhandledType { tag }),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use jsonb_view_testkit::{array, boolean, from_json, int, node, null, object, tag, text};
	use serde_json::json;

	use crate::jsonb::{DecodeOptions, JsonbError, TypeTag, validate};

	#[test]
	fn accepts_well_formed_document() {
		let bytes = from_json(&json!({"a": [1, 2.5, "x\ty"], "b": {"c": null}}));
		let root = validate(&bytes, &DecodeOptions::strict()).expect("document validates");
		assert_eq!(root.tag(), TypeTag::Object);
	}

	#[test]
	fn trailing_bytes_depend_on_options() {
		let mut bytes = array(&[null()]);
		bytes.push(0x00);

		let err = validate(&bytes, &DecodeOptions::strict()).expect_err("trailing byte rejected");
		assert_eq!(err, JsonbError::TrailingBytes { at: 2, rem: 1 });

		validate(&bytes, &DecodeOptions::lenient()).expect("trailing byte tolerated");
	}

	#[test]
	fn literal_with_payload_is_rejected() {
		let bytes = array(&[node(tag::TRUE, b"x")]);
		let err = validate(&bytes, &DecodeOptions::strict()).expect_err("payload on true rejected");
		assert_eq!(err, JsonbError::UnexpectedPayload { tag: TypeTag::True, len: 1 });
	}

	#[test]
	fn dangling_object_byte_is_rejected() {
		let mut payload = text("k");
		payload.extend(boolean(true));
		payload.push(0x00);
		let bytes = node(tag::OBJECT, &payload);

		let err = validate(&bytes, &DecodeOptions::strict()).expect_err("dangling byte rejected");
		assert_eq!(err, JsonbError::InvalidHeader { at: 4 });
	}

	#[test]
	fn bad_scalars_deep_in_tree_are_found() {
		let bytes = object(&[(text("n"), array(&[int(1), node(tag::INT, b"1.5")]))]);
		let err = validate(&bytes, &DecodeOptions::strict()).expect_err("bad int rejected");
		assert!(matches!(err, JsonbError::InvalidNumber { tag: TypeTag::Int, .. }));
	}

	#[test]
	fn non_text_key_is_rejected() {
		let bytes = object(&[(null(), int(1))]);
		let err = validate(&bytes, &DecodeOptions::strict()).expect_err("null key rejected");
		assert_eq!(err, JsonbError::NotText { tag: TypeTag::Null });
	}
}
