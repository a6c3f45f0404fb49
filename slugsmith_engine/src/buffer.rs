//! Fixed-capacity output region.

use crate::SlugError;

/// Writes into a caller-owned slice, always keeping one byte free for the
/// trailing `0` terminator.
#[derive(Debug)]
pub struct SlugBuffer<'a> {
    out: &'a mut [u8],
    len: usize,
}

impl<'a> SlugBuffer<'a> {
    pub fn new(out: &'a mut [u8]) -> Self {
        Self { out, len: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.out.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.out[..self.len]
    }

    fn reserve(&self, additional: usize) -> Result<(), SlugError> {
        let needed = self.len + additional + 1;
        if needed > self.out.len() {
            return Err(SlugError::BufferExceeded {
                needed,
                capacity: self.out.len(),
            });
        }
        Ok(())
    }

    pub fn push(&mut self, byte: u8) -> Result<(), SlugError> {
        self.reserve(1)?;
        self.out[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    pub fn extend(&mut self, bytes: &[u8]) -> Result<(), SlugError> {
        self.reserve(bytes.len())?;
        self.out[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
    }

    pub fn pop(&mut self) -> Option<u8> {
        let byte = self.last()?;
        self.len -= 1;
        Some(byte)
    }

    /// Write the terminator and return the content length.
    pub fn finish(self) -> usize {
        // zero-capacity buffers have nowhere to put it
        if let Some(slot) = self.out.get_mut(self.len) {
            *slot = 0;
        }
        self.len
    }
}
