
use std::fmt;

use crate::{ByteSink, ByteSource, StreamError, Translator};

/// Length-prefixed records: `[len: u16 LE] [len bytes]`, repeated.
struct Framed;

#[derive(Debug)]
enum FrameError {
    Stream(StreamError),
    Oversized(usize),
}

impl From<StreamError> for FrameError {
    fn from(err: StreamError) -> Self {
        Self::Stream(err)
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(_) => f.write_str("stream failure"),
            Self::Oversized(len) => write!(f, "frame of {len} bytes does not fit a u16 length"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(err) => Some(err),
            Self::Oversized(_) => None,
        }
    }
}

impl Translator for Framed {
    type Value = Vec<Vec<u8>>;
    type Error = FrameError;

    fn decode<S: ByteSource>(&self, source: &mut S) -> Result<Self::Value, FrameError> {
        let mut frames = Vec::new();
        loop {
            let lo = match source.read_byte() {
                Ok(byte) => byte,
                Err(err) if err.is_end_of_data() => return Ok(frames),
                Err(err) => return Err(err.into()),
            };
            let hi = source.read_byte()?;
            let len = u16::from_le_bytes([lo, hi]);
            frames.push(source.read_bytes(len.into())?);
        }
    }

    fn encode<K: ByteSink>(&self, sink: &mut K, value: &Self::Value) -> Result<(), FrameError> {
        for frame in value {
            let len = u16::try_from(frame.len()).map_err(|_| FrameError::Oversized(frame.len()))?;
            sink.write_bytes(&len.to_le_bytes())?;
            sink.write_bytes(frame)?;
        }
        Ok(())
    }
}
