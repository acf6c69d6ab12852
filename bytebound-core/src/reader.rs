//! Bounded, position-tracking reader.

use std::fs::File;
use std::io::{Read, Seek};

use log::{debug, trace};
use snafu::ResultExt;

use crate::error::{EndOfDataSnafu, IoSnafu, ShortReadSnafu};
use crate::{ByteSource, Result};

/// Forward-only reader over a [`Read`] source, optionally bounded by a known
/// total length.
///
/// Each logical read issues exactly one `read` call on the source and
/// demands a complete answer:
///
/// - a request that would pass the bound fails with
///   [`EndOfData`](crate::StreamError::EndOfData) without touching the source;
/// - a source returning zero bytes fails with `EndOfData`;
/// - a source returning some but not all bytes fails with
///   [`ShortRead`](crate::StreamError::ShortRead). The partial bytes still
///   count towards [`position`](Self::position).
///
/// The reader does not own the lifecycle of the source. Pass `&mut File` (or
/// any other borrowed handle) to keep closing it in the caller's hands.
///
/// ```
/// use bytebound_core::{BoundedByteReader, ByteSource};
///
/// let data = [1u8, 2, 3, 4, 5];
/// let mut reader = BoundedByteReader::bounded(&data[..], 5);
///
/// assert_eq!(reader.read_bytes(5).unwrap(), vec![1, 2, 3, 4, 5]);
/// assert!(reader.read_byte().unwrap_err().is_end_of_data());
/// ```
#[derive(Debug)]
pub struct BoundedByteReader<R> {
    source: R,
    position: u64,
    bound: Option<u64>,
}

impl<R: Read> BoundedByteReader<R> {
    /// Create a reader with an optional bound.
    pub fn new(source: R, bound: Option<u64>) -> Self {
        trace!("opening byte reader (bound: {bound:?})");
        Self {
            source,
            position: 0,
            bound,
        }
    }

    /// Create a reader that may consume at most `len` bytes.
    #[inline]
    pub fn bounded(source: R, len: u64) -> Self {
        Self::new(source, Some(len))
    }

    /// Create a reader limited only by exhaustion of the source.
    #[inline]
    pub fn unbounded(source: R) -> Self {
        Self::new(source, None)
    }

    /// Bytes consumed so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The bound, if any.
    #[inline]
    #[must_use]
    pub fn bound(&self) -> Option<u64> {
        self.bound
    }

    /// Bytes left before the bound.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Option<u64> {
        self.bound.map(|bound| bound.saturating_sub(self.position))
    }

    /// Get a reference to the source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Consume the reader and return the source.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn check_bound(&self, requested: usize) -> Result<()> {
        let Some(bound) = self.bound else {
            return Ok(());
        };
        let end = u64::try_from(requested)
            .ok()
            .and_then(|n| self.position.checked_add(n));
        match end {
            Some(end) if end <= bound => Ok(()),
            _ => {
                let err = EndOfDataSnafu {
                    position: self.position,
                    requested,
                    bound: self.bound,
                }
                .build();
                debug!("{err}");
                Err(err)
            }
        }
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let requested = buf.len();
        if requested == 0 {
            return Ok(());
        }
        self.check_bound(requested)?;

        let start = self.position;
        let received = self
            .source
            .read(buf)
            .inspect_err(|e| debug!("read of {requested} bytes at {start} failed: {e}"))
            .context(IoSnafu { position: start })?;
        debug_assert!(received <= requested, "source overfilled the buffer");
        self.position += received as u64;

        if received == requested {
            return Ok(());
        }
        let err = if received == 0 {
            EndOfDataSnafu {
                position: start,
                requested,
                bound: self.bound,
            }
            .build()
        } else {
            ShortReadSnafu {
                position: start,
                requested,
                received,
            }
            .build()
        };
        debug!("{err}");
        Err(err)
    }
}

impl<'a> BoundedByteReader<&'a mut File> {
    /// Create a reader bounded at the bytes between the file's current
    /// offset and its end.
    pub fn from_file(file: &'a mut File) -> Result<Self> {
        let len = file.metadata().context(IoSnafu { position: 0u64 })?.len();
        let offset = file.stream_position().context(IoSnafu { position: 0u64 })?;
        Ok(Self::bounded(file, len.saturating_sub(offset)))
    }
}

impl<R: Read> ByteSource for BoundedByteReader<R> {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        self.fill(buf)
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        BoundedByteReader::remaining(self)
    }

    fn read_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        // Checked ahead of `fill` so a bogus size never allocates.
        self.check_bound(size)?;
        let mut buf = vec![0u8; size];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}
