use thiserror::Error;

use crate::jsonb::TypeTag;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonbError>;

/// Errors produced while decoding, converting, and validating JSONB data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonbError {
	/// Header is missing, truncated, or declares a payload past the end of the buffer.
	#[error("invalid header at offset {at}")]
	InvalidHeader {
		/// Absolute offset of the header's first byte.
		at: usize,
	},
	/// Type nibble has no assigned meaning.
	#[error("unknown element type {raw}")]
	UnknownType {
		/// Raw low nibble of the header byte.
		raw: u8,
	},
	/// Size-class nibble has no assigned length encoding.
	#[error("invalid size class {size_class}")]
	InvalidSizeType {
		/// Raw high nibble of the header byte.
		size_class: u8,
	},
	/// Text payload is not valid UTF-8.
	#[error("invalid utf-8 in text payload at byte {at}")]
	InvalidUtf8 {
		/// Byte offset inside the payload where validation failed.
		at: usize,
	},
	/// Text payload contains a malformed or unsupported escape sequence.
	#[error("invalid escape sequence in text payload at byte {at}")]
	InvalidEscape {
		/// Byte offset of the backslash inside the payload.
		at: usize,
	},
	/// Text conversion was requested on a non-text element.
	#[error("expected a text element, got {tag}")]
	NotText {
		/// Actual element type.
		tag: TypeTag,
	},
	/// Numeric payload does not parse for its element type.
	#[error("invalid {tag} payload {text:?}")]
	InvalidNumber {
		/// Numeric element type.
		tag: TypeTag,
		/// Payload rendered lossily for diagnostics.
		text: String,
	},
	/// Conversion met an element type it cannot turn into a native value.
	#[error("unhandled element type {tag}")]
	UnhandledType {
		/// Offending element type.
		tag: TypeTag,
	},
	/// Nesting went deeper than the configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
	/// A literal element carried payload bytes.
	#[error("{tag} element carries {len} payload bytes")]
	UnexpectedPayload {
		/// Literal element type.
		tag: TypeTag,
		/// Payload length found.
		len: usize,
	},
	/// Root element does not span the whole input.
	#[error("trailing bytes after root element at offset {at}, remaining {rem}")]
	TrailingBytes {
		/// Offset of the first byte past the root element.
		at: usize,
		/// Count of unconsumed bytes.
		rem: usize,
	},
}
