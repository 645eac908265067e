//! Sequential writer over a growable byte buffer.
//!
//! The mirror image of [`ByteReader`](crate::core::reader::ByteReader):
//! writes append to an internal [`BytesMut`] and cannot fail, so encoders
//! have no error path of their own.

use bytes::{BufMut, Bytes, BytesMut};

/// Cursor accumulating wire bytes.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buffer: BytesMut,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn write_byte(&mut self, value: u8) {
        self.buffer.put_u8(value);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.put_slice(bytes);
    }

    pub fn write_u16_le(&mut self, value: u16) {
        self.buffer.put_u16_le(value);
    }

    pub fn write_u32_le(&mut self, value: u32) {
        self.buffer.put_u32_le(value);
    }

    pub fn write_u64_le(&mut self, value: u64) {
        self.buffer.put_u64_le(value);
    }

    /// Writes a Bitcoin variable-length integer (1, 3, 5, or 9 bytes).
    pub fn write_var_int(&mut self, value: u64) {
        match value {
            0..=0xFC => self.write_byte(value as u8),
            0xFD..=0xFFFF => {
                self.write_byte(0xFD);
                self.write_u16_le(value as u16);
            }
            0x1_0000..=0xFFFF_FFFF => {
                self.write_byte(0xFE);
                self.write_u32_le(value as u32);
            }
            _ => {
                self.write_byte(0xFF);
                self.write_u64_le(value);
            }
        }
    }

    /// Consumes the writer, freezing the accumulated bytes.
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.to_vec()
    }
}
