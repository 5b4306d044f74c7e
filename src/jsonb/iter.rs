use crate::jsonb::{ByteView, Result, Value};

/// Lazy iterator over the elements of an array payload.
///
/// Stops after the first error.
#[derive(Debug, Clone)]
pub struct ArrayIter<'a> {
	rest: ByteView<'a>,
	done: bool,
}

impl<'a> ArrayIter<'a> {
	/// Iterate the elements packed back-to-back in `payload`.
	pub fn new(payload: ByteView<'a>) -> Self {
		Self { rest: payload, done: false }
	}

	/// Iterator that yields nothing.
	pub fn empty() -> Self {
		Self {
			rest: ByteView::empty(),
			done: true,
		}
	}
}

impl<'a> Iterator for ArrayIter<'a> {
	type Item = Result<Value<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.rest.is_empty() {
			self.done = true;
			return None;
		}

		match Value::from_view(self.rest) {
			Ok(value) => {
				self.rest = self.rest.tail(value.payload().end());
				Some(Ok(value))
			}
			Err(err) => {
				self.done = true;
				Some(Err(err))
			}
		}
	}
}

impl std::iter::FusedIterator for ArrayIter<'_> {}

/// Lazy iterator over the raw key/value pairs of an object payload.
///
/// Keys are yielded undecoded; see [`crate::jsonb::decode_key`]. Stops after the first error.
#[derive(Debug, Clone)]
pub struct ObjectIter<'a> {
	rest: ByteView<'a>,
	done: bool,
}

impl<'a> ObjectIter<'a> {
	/// Iterate the key/value pairs packed back-to-back in `payload`.
	pub fn new(payload: ByteView<'a>) -> Self {
		Self { rest: payload, done: false }
	}

	/// Iterator that yields nothing.
	pub fn empty() -> Self {
		Self {
			rest: ByteView::empty(),
			done: true,
		}
	}

	fn next_pair(&mut self) -> Result<(Value<'a>, Value<'a>)> {
		let key = Value::from_view(self.rest)?;
		let value = Value::from_view(self.rest.tail(key.payload().end()))?;
		self.rest = self.rest.tail(value.payload().end());
		Ok((key, value))
	}
}

impl<'a> Iterator for ObjectIter<'a> {
	type Item = Result<(Value<'a>, Value<'a>)>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		// A lone trailing byte cannot hold a key and a value.
		if self.rest.len() < 2 {
			self.done = true;
			return None;
		}

		let item = self.next_pair();
		if item.is_err() {
			self.done = true;
		}
		Some(item)
	}
}

impl std::iter::FusedIterator for ObjectIter<'_> {}
