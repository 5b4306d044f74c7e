use tracing::trace;

use crate::jsonb::bytes::{ByteView, Endianness, bytes_to_uint};
use crate::jsonb::{JsonbError, Result, TypeTag};

/// Largest size class whose value is the payload length itself.
pub const MAX_INLINE_SIZE_CLASS: u8 = 11;

/// Decoded element header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
	/// Element type from the low nibble.
	pub tag: TypeTag,
	/// Size class from the high nibble.
	pub size_class: u8,
	/// Header length in bytes, including any length field.
	pub header_len: usize,
	/// Payload window directly after the header.
	pub payload: ByteView<'a>,
}

impl<'a> Header<'a> {
	/// Parse the header at the start of `buffer`.
	///
	/// The declared payload must fit inside `buffer`; nothing past `buffer.end()` is read.
	pub fn parse(buffer: ByteView<'a>) -> Result<Self> {
		let at = buffer.start();
		let Some(first) = buffer.byte_at(at) else {
			trace!(at, "jsonb header: empty buffer");
			return Err(JsonbError::InvalidHeader { at });
		};

		let raw = first & 0x0f;
		let tag = TypeTag::from_raw(raw).ok_or(JsonbError::UnknownType { raw })?;

		let size_class = first >> 4;
		let width = size_field_width(size_class).ok_or(JsonbError::InvalidSizeType { size_class })?;

		let payload_len = if width == 0 {
			u64::from(size_class)
		} else {
			let field = buffer.slice(at + 1, at + 1 + width).ok_or_else(|| {
				trace!(at, width, rem = buffer.len(), "jsonb header: truncated length field");
				JsonbError::InvalidHeader { at }
			})?;
			bytes_to_uint(field.bytes(), Endianness::Big)
		};

		let header_len = 1 + width;
		let payload_start = at + header_len;
		let payload = usize::try_from(payload_len)
			.ok()
			.and_then(|len| payload_start.checked_add(len))
			.and_then(|payload_end| buffer.slice(payload_start, payload_end))
			.ok_or_else(|| {
				trace!(at, payload_len, rem = buffer.len(), "jsonb header: payload exceeds buffer");
				JsonbError::InvalidHeader { at }
			})?;

		Ok(Self {
			tag,
			size_class,
			header_len,
			payload,
		})
	}

	/// Total bytes occupied by header and payload.
	pub fn total_len(&self) -> usize {
		self.header_len + self.payload.len()
	}
}

/// Decode one header, returning the element type and its payload window.
pub fn decode_header(buffer: ByteView<'_>) -> Result<(TypeTag, ByteView<'_>)> {
	let header = Header::parse(buffer)?;
	Ok((header.tag, header.payload))
}

/// Width of the big-endian length field that follows the first byte.
fn size_field_width(size_class: u8) -> Option<usize> {
	match size_class {
		0..=MAX_INLINE_SIZE_CLASS => Some(0),
		12 => Some(1),
		13 => Some(2),
		14 => Some(4),
		15 => Some(8),
		_ => None,
	}
}
