//! Position-tracking writer.

use std::io::Write;

use log::{debug, trace};
use snafu::ResultExt;

use crate::error::{IoSnafu, ShortWriteSnafu};
use crate::{ByteSink, Result};

/// Forward-only writer over a [`Write`] sink.
///
/// Each logical write issues exactly one `write` call. A sink that accepts
/// fewer bytes than offered fails the call with
/// [`ShortWrite`](crate::StreamError::ShortWrite); the accepted prefix still
/// counts towards [`position`](Self::position), which always equals the
/// bytes the sink has taken.
///
/// ```
/// use bytebound_core::{ByteSink, ByteWriter};
///
/// let mut writer = ByteWriter::new(Vec::new());
/// writer.write_byte(0x01).unwrap();
/// writer.write_bytes(&[0x02, 0x03]).unwrap();
///
/// assert_eq!(writer.position(), 3);
/// assert_eq!(writer.into_inner(), vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct ByteWriter<W> {
    sink: W,
    position: u64,
}

impl<W: Write> ByteWriter<W> {
    /// Create a writer over `sink`.
    pub fn new(sink: W) -> Self {
        trace!("opening byte writer");
        Self { sink, position: 0 }
    }

    /// Bytes accepted by the sink so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn push(&mut self, data: &[u8]) -> Result<()> {
        let offered = data.len();
        if offered == 0 {
            return Ok(());
        }

        let start = self.position;
        let accepted = self
            .sink
            .write(data)
            .inspect_err(|e| debug!("write of {offered} bytes at {start} failed: {e}"))
            .context(IoSnafu { position: start })?;
        debug_assert!(accepted <= offered, "sink accepted more than offered");
        self.position += accepted as u64;

        if accepted < offered {
            let err = ShortWriteSnafu {
                position: start,
                offered,
                accepted,
            }
            .build();
            debug!("{err}");
            return Err(err);
        }
        Ok(())
    }
}

impl<W: Write> ByteSink for ByteWriter<W> {
    #[inline]
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.push(data)
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.push(&[byte])
    }

    fn flush(&mut self) -> Result<()> {
        self.sink.flush().context(IoSnafu {
            position: self.position,
        })
    }
}
