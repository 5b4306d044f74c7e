//! Zero-copy reader for the SQLite JSONB binary encoding.
//!
//! Every element is a one-byte header (type in the low nibble, size class in
//! the high nibble), an optional big-endian length field, and a payload.
//! [`jsonb::Value`] borrows the caller's buffer and expands arrays and objects
//! on demand.

/// Header decoding, lazy tree traversal, and payload conversion.
pub mod jsonb;
