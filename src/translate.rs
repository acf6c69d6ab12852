//! Translators turn structured values into byte streams and back.

use bytebound_core::{ByteSink, ByteSource, StreamError};

/// Decodes a value from a [`ByteSource`] and encodes it to a [`ByteSink`].
///
/// Implementations depend only on the two stream traits, never on the
/// concrete reader or writer, so the same translator works over files,
/// sockets and in-memory buffers.
pub trait Translator {
    /// The structured value being translated.
    type Value;

    /// Error raised by decoding or encoding. Stream failures must convert
    /// into it so `?` works on every primitive call.
    type Error: From<StreamError>;

    /// Materialize a value from `source`.
    fn decode<S: ByteSource>(&self, source: &mut S) -> Result<Self::Value, Self::Error>;

    /// Flatten `value` into `sink`.
    fn encode<K: ByteSink>(&self, sink: &mut K, value: &Self::Value) -> Result<(), Self::Error>;
}

/// Bijective translator treating the whole stream as one opaque blob.
///
/// Bounded sources are drained in chunks of [`chunk_size`](Self::chunk_size)
/// bytes. Unbounded sources are read a byte at a time until they report end
/// of data.
///
/// ```
/// use bytebound::{BoundedByteReader, ByteWriter, Passthrough, Translator};
///
/// let data = b"world data".to_vec();
/// let translator = Passthrough::with_chunk_size(4);
///
/// let mut reader = BoundedByteReader::bounded(&data[..], data.len() as u64);
/// let value = translator.decode(&mut reader).unwrap();
///
/// let mut writer = ByteWriter::new(Vec::new());
/// translator.encode(&mut writer, &value).unwrap();
/// assert_eq!(writer.into_inner(), data);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passthrough {
    chunk_size: usize,
}

impl Passthrough {
    /// Chunk size used by [`Passthrough::new`].
    pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

    /// Create a translator with the default chunk size.
    pub const fn new() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }

    /// Create a translator moving at most `chunk_size` bytes per call.
    ///
    /// A zero chunk size is raised to one.
    pub const fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: if chunk_size == 0 { 1 } else { chunk_size },
        }
    }

    /// Bytes moved per read or write call.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for Passthrough {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for Passthrough {
    type Value = Vec<u8>;
    type Error = StreamError;

    fn decode<S: ByteSource>(&self, source: &mut S) -> Result<Vec<u8>, StreamError> {
        let Some(mut left) = source.remaining() else {
            let mut out = Vec::new();
            loop {
                match source.read_byte() {
                    Ok(byte) => out.push(byte),
                    Err(err) if err.is_end_of_data() => return Ok(out),
                    Err(err) => return Err(err),
                }
            }
        };

        let mut out = Vec::with_capacity(usize::try_from(left).unwrap_or_default());
        while left > 0 {
            let n = usize::try_from(left).map_or(self.chunk_size, |l| l.min(self.chunk_size));
            out.extend_from_slice(&source.read_bytes(n)?);
            left -= n as u64;
        }
        Ok(out)
    }

    fn encode<K: ByteSink>(&self, sink: &mut K, value: &Vec<u8>) -> Result<(), StreamError> {
        for chunk in value.chunks(self.chunk_size) {
            sink.write_bytes(chunk)?;
        }
        Ok(())
    }
}
