use std::fmt;

/// Element type stored in the low nibble of every header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
	/// JSON `null`.
	Null = 0,
	/// JSON `true`.
	True = 1,
	/// JSON `false`.
	False = 2,
	/// Canonical decimal integer text.
	Int = 3,
	/// JSON5 integer text (hexadecimal or leading `+`).
	Int5 = 4,
	/// Canonical decimal float text.
	Float = 5,
	/// JSON5 float text (`Infinity`, `NaN`, bare leading or trailing `.`).
	Float5 = 6,
	/// UTF-8 text with no escapes.
	Text = 7,
	/// UTF-8 text containing RFC 8259 escapes.
	TextJ = 8,
	/// UTF-8 text containing JSON5 escapes.
	Text5 = 9,
	/// Raw UTF-8 text that would need escaping when rendered as JSON.
	TextRaw = 10,
	/// Array of concatenated child elements.
	Array = 11,
	/// Object of concatenated key/value element pairs.
	Object = 12,
	/// Reserved, unassigned.
	Reserved13 = 13,
	/// Reserved, unassigned.
	Reserved14 = 14,
	/// Reserved, unassigned.
	Reserved15 = 15,
}

impl TypeTag {
	/// Map a raw type nibble to its tag.
	pub fn from_raw(raw: u8) -> Option<Self> {
		Some(match raw {
			0 => Self::Null,
			1 => Self::True,
			2 => Self::False,
			3 => Self::Int,
			4 => Self::Int5,
			5 => Self::Float,
			6 => Self::Float5,
			7 => Self::Text,
			8 => Self::TextJ,
			9 => Self::Text5,
			10 => Self::TextRaw,
			11 => Self::Array,
			12 => Self::Object,
			13 => Self::Reserved13,
			14 => Self::Reserved14,
			15 => Self::Reserved15,
			_ => return None,
		})
	}

	/// Raw nibble value.
	pub fn raw(self) -> u8 {
		self as u8
	}

	/// Stable uppercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "NULL",
			Self::True => "TRUE",
			Self::False => "FALSE",
			Self::Int => "INT",
			Self::Int5 => "INT5",
			Self::Float => "FLOAT",
			Self::Float5 => "FLOAT5",
			Self::Text => "TEXT",
			Self::TextJ => "TEXTJ",
			Self::Text5 => "TEXT5",
			Self::TextRaw => "TEXTRAW",
			Self::Array => "ARRAY",
			Self::Object => "OBJECT",
			Self::Reserved13 => "RESERVED-13",
			Self::Reserved14 => "RESERVED-14",
			Self::Reserved15 => "RESERVED-15",
		}
	}

	/// True for the four text variants.
	pub fn is_text(self) -> bool {
		matches!(self, Self::Text | Self::TextJ | Self::Text5 | Self::TextRaw)
	}

	/// True for the four numeric variants.
	pub fn is_number(self) -> bool {
		matches!(self, Self::Int | Self::Int5 | Self::Float | Self::Float5)
	}

	/// True for arrays and objects.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Array | Self::Object)
	}

	/// True for the three unassigned tags.
	pub fn is_reserved(self) -> bool {
		matches!(self, Self::Reserved13 | Self::Reserved14 | Self::Reserved15)
	}
}

impl fmt::Display for TypeTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::TypeTag;

	#[test]
	fn every_nibble_maps_to_a_tag() {
		for raw in 0..16_u8 {
			let tag = TypeTag::from_raw(raw).expect("nibble maps");
			assert_eq!(tag.raw(), raw);
		}
		assert_eq!(TypeTag::from_raw(16), None);
	}

	#[test]
	fn classification_is_disjoint() {
		for raw in 0..16_u8 {
			let tag = TypeTag::from_raw(raw).expect("nibble maps");
			let hits = [tag.is_text(), tag.is_number(), tag.is_container(), tag.is_reserved()]
				.iter()
				.filter(|hit| **hit)
				.count();
			assert!(hits <= 1, "{tag} falls in {hits} classes");
		}
	}

	#[test]
	fn display_uses_label() {
		assert_eq!(TypeTag::TextJ.to_string(), "TEXTJ");
		assert_eq!(TypeTag::Reserved14.to_string(), "RESERVED-14");
	}
}
