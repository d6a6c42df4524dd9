use crate::constants::{CHUNK_SIZE, FILL_BYTE};

/// Fixed-size region of newline bytes that is written over and over.
///
/// The contents are set once in [`ScratchBuffer::new`] and only ever
/// handed out as a shared slice afterwards.
#[derive(Debug)]
pub struct ScratchBuffer {
    bytes: Box<[u8]>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self {
            bytes: vec![FILL_BYTE; CHUNK_SIZE].into_boxed_slice(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_one_mebibyte() {
        let buffer = ScratchBuffer::new();
        assert_eq!(buffer.len(), 1_048_576);
        assert_eq!(buffer.as_bytes().len(), buffer.len());
    }

    #[test]
    fn test_buffer_is_filled_with_newlines() {
        let buffer = ScratchBuffer::new();
        assert!(buffer.as_bytes().iter().all(|&b| b == 0x0A));
    }
}
