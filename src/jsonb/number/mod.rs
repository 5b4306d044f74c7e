use crate::jsonb::{JsonbError, Result, TypeTag};

/// Native value of a numeric element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Integer that fits in `i64`.
	Int(i64),
	/// Float, or an integer too large for `i64`.
	Float(f64),
}

impl Number {
	/// Widen to `f64`.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Int(value) => value as f64,
			Self::Float(value) => value,
		}
	}

	/// Convert to a JSON number; non-finite floats become `null`.
	pub fn to_json(self) -> serde_json::Value {
		match self {
			Self::Int(value) => serde_json::Value::from(value),
			Self::Float(value) => serde_json::Value::from(value),
		}
	}
}

/// Parse the payload of a numeric element.
pub fn parse_number(tag: TypeTag, bytes: &[u8]) -> Result<Number> {
	let invalid = || JsonbError::InvalidNumber {
		tag,
		text: String::from_utf8_lossy(bytes).into_owned(),
	};
	let text = std::str::from_utf8(bytes).map_err(|_| invalid())?;

	let parsed = match tag {
		TypeTag::Int => parse_int(text),
		TypeTag::Int5 => parse_int5(text),
		TypeTag::Float => parse_float(text),
		TypeTag::Float5 => parse_float5(text),
		_ => return Err(JsonbError::UnhandledType { tag }),
	};
	parsed.ok_or_else(invalid)
}

fn parse_int(text: &str) -> Option<Number> {
	let digits = text.strip_prefix('-').unwrap_or(text);
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	match text.parse::<i64>() {
		Ok(value) => Some(Number::Int(value)),
		Err(_) => text.parse::<f64>().ok().map(Number::Float),
	}
}

fn parse_int5(text: &str) -> Option<Number> {
	let (negative, body) = split_sign(text);
	let (digits, radix) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
		Some(hex) => (hex, 16),
		None => (body, 10),
	};
	if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
		return None;
	}

	let Ok(magnitude) = u64::from_str_radix(digits, radix) else {
		let wide = digits.chars().filter_map(|ch| ch.to_digit(radix)).fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));
		return Some(Number::Float(signed(wide, negative)));
	};
	let value = if negative { 0_i64.checked_sub_unsigned(magnitude) } else { i64::try_from(magnitude).ok() };
	Some(match value {
		Some(value) => Number::Int(value),
		None => Number::Float(signed(magnitude as f64, negative)),
	})
}

fn parse_float(text: &str) -> Option<Number> {
	if !is_canonical_float(text) {
		return None;
	}
	text.parse::<f64>().ok().map(Number::Float)
}

/// RFC 8259 number grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
fn is_canonical_float(text: &str) -> bool {
	fn digit_run(bytes: &[u8]) -> usize {
		bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
	}

	let bytes = text.as_bytes();
	let mut pos = usize::from(bytes.first() == Some(&b'-'));

	let int_len = digit_run(&bytes[pos..]);
	if int_len == 0 || (int_len > 1 && bytes[pos] == b'0') {
		return false;
	}
	pos += int_len;

	if bytes.get(pos) == Some(&b'.') {
		let frac_len = digit_run(&bytes[pos + 1..]);
		if frac_len == 0 {
			return false;
		}
		pos += 1 + frac_len;
	}

	if matches!(bytes.get(pos), Some(b'e' | b'E')) {
		pos += 1;
		if matches!(bytes.get(pos), Some(b'+' | b'-')) {
			pos += 1;
		}
		let exp_len = digit_run(&bytes[pos..]);
		if exp_len == 0 {
			return false;
		}
		pos += exp_len;
	}

	pos == bytes.len()
}

fn parse_float5(text: &str) -> Option<Number> {
	let (negative, body) = split_sign(text);
	if body.eq_ignore_ascii_case("infinity") || body.eq_ignore_ascii_case("inf") {
		return Some(Number::Float(signed(f64::INFINITY, negative)));
	}
	if body.eq_ignore_ascii_case("nan") {
		return Some(Number::Float(f64::NAN));
	}
	if !body.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.') {
		return None;
	}
	body.parse::<f64>().ok().map(|value| Number::Float(signed(value, negative)))
}

fn split_sign(text: &str) -> (bool, &str) {
	if let Some(rest) = text.strip_prefix('-') {
		(true, rest)
	} else {
		(false, text.strip_prefix('+').unwrap_or(text))
	}
}

fn signed(value: f64, negative: bool) -> f64 {
	if negative { -value } else { value }
}
