use std::fmt;

/// Byte order for multi-byte integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
	/// Least significant byte first.
	Little,
	/// Most significant byte first.
	Big,
}

/// Decode an unsigned integer of up to 8 bytes.
pub fn bytes_to_uint(bytes: &[u8], endianness: Endianness) -> u64 {
	debug_assert!(bytes.len() <= 8, "integer field wider than 8 bytes");
	match endianness {
		Endianness::Big => bytes.iter().fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte)),
		Endianness::Little => bytes.iter().rev().fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte)),
	}
}

/// Borrowed `[start, end)` window into a shared backing buffer.
///
/// Offsets are absolute positions in the backing buffer, so sibling views
/// can be compared and resumed without re-deriving their origin.
#[derive(Clone, Copy)]
pub struct ByteView<'a> {
	buf: &'a [u8],
	start: usize,
	end: usize,
}

impl<'a> ByteView<'a> {
	/// View spanning the whole buffer.
	pub fn new(buf: &'a [u8]) -> Self {
		Self { buf, start: 0, end: buf.len() }
	}

	/// Empty view with no backing bytes.
	pub const fn empty() -> Self {
		Self { buf: &[], start: 0, end: 0 }
	}

	/// Absolute start offset.
	pub fn start(&self) -> usize {
		self.start
	}

	/// Absolute end offset (exclusive).
	pub fn end(&self) -> usize {
		self.end
	}

	/// Number of bytes in the window.
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	/// True when the window holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Bytes inside the window.
	pub fn bytes(&self) -> &'a [u8] {
		&self.buf[self.start..self.end]
	}

	/// Whole backing buffer.
	pub fn backing(&self) -> &'a [u8] {
		self.buf
	}

	/// Byte at absolute offset `at`, if inside the window.
	pub fn byte_at(&self, at: usize) -> Option<u8> {
		if at < self.start || at >= self.end {
			return None;
		}
		Some(self.buf[at])
	}

	/// Sub-window by absolute offsets; `None` unless `start <= end` and both lie inside this window.
	pub fn slice(&self, start: usize, end: usize) -> Option<Self> {
		if start < self.start || end > self.end || start > end {
			return None;
		}
		Some(Self { buf: self.buf, start, end })
	}

	/// Remainder of this window from absolute offset `start`, empty when past the end.
	pub fn tail(&self, start: usize) -> Self {
		let start = start.clamp(self.start, self.end);
		Self { buf: self.buf, start, end: self.end }
	}
}

impl Default for ByteView<'_> {
	fn default() -> Self {
		Self::empty()
	}
}

impl PartialEq for ByteView<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.bytes() == other.bytes()
	}
}

impl Eq for ByteView<'_> {}

impl fmt::Debug for ByteView<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ByteView")
			.field("start", &self.start)
			.field("end", &self.end)
			.field("bytes", &self.bytes())
			.finish()
	}
}
