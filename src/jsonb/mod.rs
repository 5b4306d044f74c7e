mod bytes;
mod convert;
mod error;
mod header;
mod iter;
mod number;
mod tag;
mod text;
mod validate;
mod value;

/// Borrowed byte windows and integer field decoding.
pub use bytes::{ByteView, Endianness, bytes_to_uint};
/// Conversion options and limits.
pub use convert::{DEFAULT_MAX_DEPTH, DecodeOptions};
/// Error and result aliases.
pub use error::{JsonbError, Result};
/// Header decoding entry points.
pub use header::{Header, MAX_INLINE_SIZE_CLASS, decode_header};
/// Lazy container iterators.
pub use iter::{ArrayIter, ObjectIter};
/// Numeric payload decoding.
pub use number::{Number, parse_number};
/// Element type tags.
pub use tag::TypeTag;
/// Text payload decoding.
pub use text::{decode_key, decode_string};
/// Whole-document validation.
pub use validate::validate;
/// Decoded element handle and object expansion map.
pub use value::{ObjectMap, Value};
