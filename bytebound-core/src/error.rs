//! Error types for byte stream operations.

use snafu::Snafu;

/// Error raised by a [`ByteSource`](crate::ByteSource) or
/// [`ByteSink`](crate::ByteSink) operation.
///
/// Every variant records the stream position at which the failing call
/// started. None of them are recoverable: once raised, the position of the
/// stream relative to the encoded payload is no longer trustworthy.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StreamError {
    /// The read would pass the known bound, or the source had nothing left.
    #[snafu(display(
        "end of data at byte {position}: requested {requested} bytes (bound: {bound:?})"
    ))]
    EndOfData {
        /// Position where the read started.
        position: u64,
        /// Bytes requested by the call.
        requested: usize,
        /// Bound of the reader, if any.
        bound: Option<u64>,
    },

    /// The source returned some, but not all, of the requested bytes.
    #[snafu(display(
        "short read at byte {position}: requested {requested} bytes, source returned {received}"
    ))]
    ShortRead {
        /// Position where the read started.
        position: u64,
        /// Bytes requested by the call.
        requested: usize,
        /// Bytes the source actually returned.
        received: usize,
    },

    /// The sink accepted only part of the offered bytes.
    #[snafu(display(
        "short write at byte {position}: offered {offered} bytes, sink accepted {accepted}"
    ))]
    ShortWrite {
        /// Position where the write started.
        position: u64,
        /// Bytes handed to the sink.
        offered: usize,
        /// Bytes the sink reported as accepted.
        accepted: usize,
    },

    /// The underlying source or sink failed.
    #[snafu(display("I/O failure at byte {position}"))]
    Io {
        /// Position where the failing call started.
        position: u64,
        /// Fault reported by the underlying resource.
        source: std::io::Error,
    },
}

/// Coarse classification of a [`StreamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bound reached or source exhausted.
    EndOfData,
    /// Partial multi-byte read.
    ShortRead,
    /// Fault in the underlying resource, including partial writes.
    IoFailure,
}

impl StreamError {
    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EndOfData { .. } => ErrorKind::EndOfData,
            Self::ShortRead { .. } => ErrorKind::ShortRead,
            Self::ShortWrite { .. } | Self::Io { .. } => ErrorKind::IoFailure,
        }
    }

    /// Stream position at which the failing call started.
    #[must_use]
    pub fn position(&self) -> u64 {
        match self {
            Self::EndOfData { position, .. }
            | Self::ShortRead { position, .. }
            | Self::ShortWrite { position, .. }
            | Self::Io { position, .. } => *position,
        }
    }

    /// Whether this error means the source ran out of data.
    #[inline]
    #[must_use]
    pub fn is_end_of_data(&self) -> bool {
        self.kind() == ErrorKind::EndOfData
    }
}

/// Result type for stream operations.
pub type Result<T, E = StreamError> = core::result::Result<T, E>;
