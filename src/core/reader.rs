//! Sequential reader over a borrowed byte slice.
//!
//! The reader carries a permanent invalidation flag: any read past the end
//! of the input, or an explicit [`invalidate`](ByteReader::invalidate), sets
//! it. After that every read returns a zero value and
//! [`is_valid`](ByteReader::is_valid) reports false. Decoders read a whole
//! structure and check the flag once at their boundary instead of
//! propagating an error per field.

/// Cursor over a byte slice with permanent-failure semantics.
pub struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
    valid: bool,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            valid: true,
        }
    }

    /// False once any read has run past the end of input or
    /// [`invalidate`](Self::invalidate) has been called.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Marks the reader failed. The flag never resets.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, count: usize) -> Option<&'a [u8]> {
        if !self.valid || count > self.remaining() {
            self.valid = false;
            return None;
        }

        let start = self.position;
        self.position += count;
        Some(&self.data[start..start + count])
    }

    /// Reads one byte; `0` when the reader is (or becomes) invalid.
    pub fn read_byte(&mut self) -> u8 {
        self.take(1).map_or(0, |bytes| bytes[0])
    }

    /// Reads `count` raw bytes; empty when the reader is (or becomes)
    /// invalid.
    pub fn read_bytes(&mut self, count: usize) -> &'a [u8] {
        self.take(count).unwrap_or(&[])
    }

    /// Reads a fixed-width byte array; zero-filled when invalid.
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        if let Some(bytes) = self.take(N) {
            out.copy_from_slice(bytes);
        }
        out
    }

    pub fn read_u16_le(&mut self) -> u16 {
        u16::from_le_bytes(self.read_array())
    }

    pub fn read_u32_le(&mut self) -> u32 {
        u32::from_le_bytes(self.read_array())
    }

    pub fn read_u64_le(&mut self) -> u64 {
        u64::from_le_bytes(self.read_array())
    }

    /// Reads a Bitcoin variable-length integer (1, 3, 5, or 9 bytes).
    pub fn read_var_int(&mut self) -> u64 {
        match self.read_byte() {
            0xFD => u64::from(self.read_u16_le()),
            0xFE => u64::from(self.read_u32_le()),
            0xFF => self.read_u64_le(),
            prefix => u64::from(prefix),
        }
    }
}
