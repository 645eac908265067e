//! Fixed-format block header record.
//!
//! ## Wire Format
//! ```text
//! [Version(4 LE)] [PrevHash(32)] [MerkleRoot(32)] [Time(4 LE)] [Bits(4 LE)] [Nonce(4 LE)]
//! ```
//! Always 80 bytes, independent of protocol version. Hash fields are stored
//! in wire (internal) byte order.

use crate::core::checksum::double_sha256;
use crate::core::reader::ByteReader;
use crate::core::writer::ByteWriter;
use crate::error::{ProtocolError, Result};

/// The 80-byte record identifying a block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: u32,
    pub previous_block_hash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialized width in bytes: 4 + 32 + 32 + 4 + 4 + 4.
    pub const SIZE: usize = 80;

    pub fn new(
        version: u32,
        previous_block_hash: [u8; 32],
        merkle_root: [u8; 32],
        timestamp: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            previous_block_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    /// Reads the record off `reader`; truncation yields `Err(Truncated)` and
    /// no partial value.
    pub fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let header = Self {
            version: reader.read_u32_le(),
            previous_block_hash: reader.read_array(),
            merkle_root: reader.read_array(),
            timestamp: reader.read_u32_le(),
            bits: reader.read_u32_le(),
            nonce: reader.read_u32_le(),
        };

        if reader.is_valid() {
            Ok(header)
        } else {
            Err(ProtocolError::Truncated)
        }
    }

    pub fn encode(&self, writer: &mut ByteWriter) {
        writer.write_u32_le(self.version);
        writer.write_bytes(&self.previous_block_hash);
        writer.write_bytes(&self.merkle_root);
        writer.write_u32_le(self.timestamp);
        writer.write_u32_le(self.bits);
        writer.write_u32_le(self.nonce);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SIZE);
        self.encode(&mut writer);
        writer.into_vec()
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        Self::decode(&mut reader)
    }

    /// Block identity: double SHA-256 over the 80 encoded bytes, in wire
    /// byte order.
    pub fn hash(&self) -> [u8; 32] {
        double_sha256(&self.to_bytes())
    }
}
