//! Bounded, position-tracked byte streams for binary translators.
//!
//! The core types live in `bytebound-core` and are re-exported here:
//!
//! - [`BoundedByteReader`] reads exactly the requested bytes or fails,
//!   optionally refusing to pass a known length;
//! - [`ByteWriter`] writes whole buffers and counts accepted bytes.
//!
//! A [`Translator`] is written against the [`ByteSource`] and [`ByteSink`]
//! traits and [`copy_file`] drives one over a pair of files.
//!
//! # Example
//!
//! ```
//! use bytebound::{BoundedByteReader, ByteSink, ByteSource, ByteWriter};
//!
//! let mut writer = ByteWriter::new(Vec::new());
//! writer.write_bytes(&[1, 2, 3]).unwrap();
//! let bytes = writer.into_inner();
//!
//! let mut reader = BoundedByteReader::bounded(&bytes[..], bytes.len() as u64);
//! assert_eq!(reader.read_bytes(3).unwrap(), vec![1, 2, 3]);
//! assert!(reader.read_byte().unwrap_err().is_end_of_data());
//! ```

#![warn(missing_docs)]

mod copy;
mod translate;

#[cfg(test)]
mod tests;

pub use bytebound_core::{
    BoundedByteReader, ByteSink, ByteSource, ByteWriter, ErrorKind, Result, StreamError,
};
pub use copy::{CopyError, CopyReport, ReadMode, copy_file};
pub use translate::{Passthrough, Translator};
