use alloc::vec::Vec;
use core::ops::Index;

use crate::error::Error;

type Result<T> = core::result::Result<T, Error>;

/// Capacity reserved when a buffer is created.
pub const INITIAL_CAPACITY: usize = 1024;

/// Append-only byte buffer with fallible, doubling growth.
///
/// Both pipelines write into one of these. Growth never aborts the process:
/// a failed allocation surfaces as [`Error::OutOfMemory`] and the bytes
/// already written stay intact until the buffer is dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Creates an empty buffer with [`INITIAL_CAPACITY`] bytes reserved.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the initial allocation fails.
    pub fn new() -> Result<Self> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty buffer with at least `capacity` bytes reserved.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(Self { data })
    }

    /// Appends a single byte.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.grow(1)?;
        self.data.push(byte);
        Ok(())
    }

    /// Appends a contiguous run of bytes.
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if the buffer cannot grow.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.grow(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Returns the byte at `index`, if it has been written.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Hands the written bytes to the caller.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Ensures room for `additional` more bytes.
    ///
    /// New capacity is `capacity * 2 + 1`, doubled until it exceeds the
    /// required length.
    fn grow(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(Error::OutOfMemory)?;
        let capacity = self.data.capacity();
        if needed <= capacity {
            return Ok(());
        }

        let mut new_capacity = capacity.saturating_mul(2).saturating_add(1);
        while new_capacity <= needed {
            new_capacity = new_capacity.checked_mul(2).ok_or(Error::OutOfMemory)?;
        }

        self.data
            .try_reserve_exact(new_capacity - self.data.len())
            .map_err(Error::from)
    }
}

impl Index<usize> for ByteBuffer {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        &self.data[index]
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(buffer: ByteBuffer) -> Self {
        buffer.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_initial_capacity() {
        let buf = ByteBuffer::new().unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn push_and_append_preserve_order() {
        let mut buf = ByteBuffer::new().unwrap();
        buf.push(b'a').unwrap();
        buf.append(b"bcd").unwrap();
        buf.push(b'e').unwrap();
        assert_eq!(buf.as_slice(), b"abcde");
        assert_eq!(buf.get(2), Some(b'c'));
        assert_eq!(buf[4], b'e');
        assert_eq!(buf.get(5), None);
    }

    #[test]
    fn capacity_doubles_past_initial() {
        let mut buf = ByteBuffer::with_capacity(4).unwrap();
        let start = buf.capacity();
        buf.append(&alloc::vec![0u8; start]).unwrap();
        assert_eq!(buf.capacity(), start);
        buf.push(1).unwrap();
        // At least `start * 2 + 1`.
        assert!(buf.capacity() > start * 2);
        assert_eq!(buf.len(), start + 1);
    }

    #[test]
    fn large_append_grows_in_one_step() {
        let mut buf = ByteBuffer::with_capacity(1).unwrap();
        let block = alloc::vec![7u8; 10_000];
        buf.append(&block).unwrap();
        assert_eq!(buf.len(), 10_000);
        assert!(buf.capacity() > 10_000);
        assert_eq!(buf.into_vec(), block);
    }

    #[test]
    fn impossible_growth_is_out_of_memory() {
        let mut buf = ByteBuffer::with_capacity(0).unwrap();
        buf.push(1).unwrap();
        assert_eq!(buf.grow(usize::MAX), Err(Error::OutOfMemory));
        // Existing contents survive the failed growth.
        assert_eq!(buf.as_slice(), &[1]);
    }
}
