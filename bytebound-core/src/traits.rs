//! The two narrow interfaces a translator is written against.

use crate::Result;

/// Sequential, forward-only source of bytes.
///
/// A call either transfers exactly the requested number of bytes or fails.
/// Implementations never hand back a short sequence as a success.
pub trait ByteSource {
    /// Fill `buf` completely from the source.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Bytes consumed so far.
    fn position(&self) -> u64;

    /// Bytes left before the bound, if the source is bounded.
    #[inline]
    fn remaining(&self) -> Option<u64> {
        None
    }

    /// Read a single byte.
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_into(&mut byte)?;
        Ok(byte[0])
    }

    /// Read exactly `size` bytes.
    ///
    /// Default implementation allocates and calls [`read_into`](Self::read_into).
    /// Bounded implementors override it to reject oversized requests before
    /// allocating.
    fn read_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; size];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `N` bytes into a stack array.
    ///
    /// ```
    /// use bytebound_core::{BoundedByteReader, ByteSource};
    ///
    /// let data = [0x78u8, 0x56, 0x34, 0x12];
    /// let mut reader = BoundedByteReader::bounded(&data[..], 4);
    /// let word = u32::from_le_bytes(reader.read_array().unwrap());
    /// assert_eq!(word, 0x1234_5678);
    /// ```
    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]>
    where
        Self: Sized,
    {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }
}

/// Sequential, forward-only sink of bytes.
pub trait ByteSink {
    /// Write all of `data` to the sink.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;

    /// Bytes accepted by the sink so far.
    fn position(&self) -> u64;

    /// Write a single byte.
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bytes(&[byte])
    }

    /// Flush the underlying sink.
    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).read_into(buf)
    }

    #[inline]
    fn position(&self) -> u64 {
        (**self).position()
    }

    #[inline]
    fn remaining(&self) -> Option<u64> {
        (**self).remaining()
    }

    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    #[inline]
    fn read_bytes(&mut self, size: usize) -> Result<Vec<u8>> {
        (**self).read_bytes(size)
    }
}

impl<K: ByteSink + ?Sized> ByteSink for &mut K {
    #[inline]
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_bytes(data)
    }

    #[inline]
    fn position(&self) -> u64 {
        (**self).position()
    }

    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
