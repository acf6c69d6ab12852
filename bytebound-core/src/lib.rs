//! Core byte stream primitives for bytebound.
//!
//! A [`BoundedByteReader`] delivers exactly the requested number of bytes or
//! fails, optionally refusing to read past a known total length. A
//! [`ByteWriter`] pushes bytes to a sink while counting what was accepted.
//! Translators are written against the [`ByteSource`] and [`ByteSink`]
//! traits rather than the concrete types.

#![warn(missing_docs)]

mod error;
mod reader;
mod traits;
mod writer;


pub use error::{ErrorKind, Result, StreamError};
pub use reader::BoundedByteReader;
pub use traits::{ByteSink, ByteSource};
pub use writer::ByteWriter;
