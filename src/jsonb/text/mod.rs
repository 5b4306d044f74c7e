use std::borrow::Cow;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::jsonb::{JsonbError, Result, TypeTag, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
	Json,
	Json5,
}

/// Decode a text payload into native text according to its element type.
///
/// `TEXT` and `TEXTRAW` are returned as-is. `TEXTJ` and `TEXT5` have their
/// escapes resolved; payloads without a backslash are still borrowed.
pub fn decode_string(tag: TypeTag, bytes: &[u8]) -> Result<Cow<'_, str>> {
	if !tag.is_text() {
		return Err(JsonbError::NotText { tag });
	}

	let text = std::str::from_utf8(bytes).map_err(|err| JsonbError::InvalidUtf8 { at: err.valid_up_to() })?;
	match tag {
		TypeTag::TextJ if text.contains('\\') => unescape(text, Dialect::Json).map(Cow::Owned),
		TypeTag::Text5 if text.contains('\\') => unescape(text, Dialect::Json5).map(Cow::Owned),
		_ => Ok(Cow::Borrowed(text)),
	}
}

/// Decode an object key element into an owned string.
pub fn decode_key(key: &Value<'_>) -> Result<String> {
	decode_string(key.tag(), key.payload_bytes()).map(Cow::into_owned)
}

fn unescape(text: &str, dialect: Dialect) -> Result<String> {
	let mut out = String::with_capacity(text.len());
	let mut chars = text.char_indices().peekable();

	while let Some((at, ch)) = chars.next() {
		if ch != '\\' {
			out.push(ch);
			continue;
		}

		let invalid = || JsonbError::InvalidEscape { at };
		let (_, escape) = chars.next().ok_or_else(invalid)?;
		match (escape, dialect) {
			('"' | '\\' | '/', _) => out.push(escape),
			('b', _) => out.push('\u{08}'),
			('f', _) => out.push('\u{0c}'),
			('n', _) => out.push('\n'),
			('r', _) => out.push('\r'),
			('t', _) => out.push('\t'),
			('u', _) => {
				let unit = read_hex(&mut chars, 4).ok_or_else(invalid)?;
				out.push(utf16_unit(unit, &mut chars));
			}
			('\'', Dialect::Json5) => out.push('\''),
			('v', Dialect::Json5) => out.push('\u{0b}'),
			('0', Dialect::Json5) => out.push('\0'),
			('x', Dialect::Json5) => {
				let byte = read_hex(&mut chars, 2).ok_or_else(invalid)?;
				out.extend(char::from_u32(byte));
			}
			('\n' | '\u{2028}' | '\u{2029}', Dialect::Json5) => {}
			('\r', Dialect::Json5) => {
				if chars.peek().is_some_and(|(_, next)| *next == '\n') {
					chars.next();
				}
			}
			_ => return Err(invalid()),
		}
	}

	Ok(out)
}

fn read_hex(chars: &mut Peekable<CharIndices<'_>>, digits: usize) -> Option<u32> {
	let mut value = 0_u32;
	for _ in 0..digits {
		let (_, ch) = chars.next()?;
		value = value * 16 + ch.to_digit(16)?;
	}
	Some(value)
}

/// Resolve one `\u` code unit, consuming a following low surrogate escape when present.
fn utf16_unit(unit: u32, chars: &mut Peekable<CharIndices<'_>>) -> char {
	if (0xd800..0xdc00).contains(&unit) {
		let mut ahead = chars.clone();
		let is_escape = matches!(ahead.next(), Some((_, '\\'))) && matches!(ahead.next(), Some((_, 'u')));
		let low = if is_escape { read_hex(&mut ahead, 4) } else { None };
		if let Some(low) = low.filter(|low| (0xdc00..0xe000).contains(low)) {
			*chars = ahead;
			let code = 0x10000 + ((unit - 0xd800) << 10) + (low - 0xdc00);
			return char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);
		}
	}
	char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER)
}
