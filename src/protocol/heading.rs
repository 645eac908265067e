//! Fixed-size heading prefixed to every wire message.
//!
//! ## Wire Format
//! ```text
//! [Magic(4 LE)] [Command(12, NUL-padded ASCII)] [Length(4 LE)] [Checksum(4 LE)]
//! ```
//! The heading is always 24 bytes and its layout is independent of the
//! negotiated protocol version; it can therefore be parsed before any
//! version-specific payload handling. The checksum covers the message body
//! that follows, never the heading itself.
//!
//! ## Security
//! - [`Heading::maximum_payload_size`] bounds the declared body length so a
//!   corrupt or hostile length field cannot drive a huge allocation
//! - Decoding is all-or-nothing: a truncated heading yields an error, never
//!   a partially populated value

use crate::core::checksum::checksum;
use crate::core::reader::ByteReader;
use crate::core::writer::ByteWriter;
use crate::error::{ProtocolError, Result};
use crate::protocol::identifier::Identifier;

/// Fixed width of the command field on the wire.
pub const COMMAND_SIZE: usize = 12;

/// An inventory vector is a 4-byte type tag plus a 32-byte hash.
const INVENTORY_SIZE: usize = 36;

/// Hard cap on inventory entries per message.
const MAX_INVENTORY: usize = 50_000;

/// Consensus weight limit for a block carrying witness data.
const MAX_BLOCK_WEIGHT: usize = 4_000_000;

/// The four fields every message is prefixed with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heading {
    magic: u32,
    command: String,
    payload_size: u32,
    checksum: u32,
}

impl Heading {
    /// Serialized heading width: magic + command + length + checksum.
    pub const SIZE: usize = 4 + COMMAND_SIZE + 4 + 4;

    /// Upper bound in bytes for a serialized heading. Constant, independent
    /// of any instance.
    pub const fn maximum_size() -> usize {
        Self::SIZE
    }

    /// Largest body length a peer may declare under the negotiated session.
    ///
    /// Callers must check `payload_size() <= maximum_payload_size(..)`
    /// before allocating or reading the body; a hostile length field is
    /// otherwise a memory-exhaustion vector. Without witness data the bound
    /// is the largest non-block message: a full inventory vector list and
    /// its length prefix.
    pub fn maximum_payload_size(_version: u32, witness: bool) -> usize {
        if witness {
            MAX_BLOCK_WEIGHT
        } else {
            3 + INVENTORY_SIZE * MAX_INVENTORY
        }
    }

    /// Heading for an outgoing message: length and checksum are computed
    /// from `payload`.
    pub fn new(magic: u32, command: &str, payload: &[u8]) -> Self {
        Self {
            magic,
            command: command.to_owned(),
            payload_size: payload.len() as u32,
            checksum: checksum(payload),
        }
    }

    /// Heading from already-known field values.
    pub fn from_parts(magic: u32, command: &str, payload_size: u32, checksum: u32) -> Self {
        Self {
            magic,
            command: command.to_owned(),
            payload_size,
            checksum,
        }
    }

    pub fn magic(&self) -> u32 {
        self.magic
    }

    pub fn set_magic(&mut self, value: u32) {
        self.magic = value;
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, value: impl Into<String>) {
        self.command = value.into();
    }

    pub fn payload_size(&self) -> u32 {
        self.payload_size
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Message-type identifier for dispatch. Total: unrecognized commands
    /// yield [`Identifier::Unknown`].
    pub fn id(&self) -> Identifier {
        Identifier::from_command(&self.command)
    }

    /// True when `body` hashes to the checksum this heading declares.
    /// Pure; performs no mutation.
    pub fn verify_checksum(&self, body: &[u8]) -> bool {
        checksum(body) == self.checksum
    }

    /// Reads all four fields off `reader`. Truncation anywhere yields
    /// `Err(Truncated)` and no heading value at all.
    pub fn decode(reader: &mut ByteReader<'_>) -> Result<Self> {
        let magic = reader.read_u32_le();
        let command_field: [u8; COMMAND_SIZE] = reader.read_array();
        let payload_size = reader.read_u32_le();
        let checksum = reader.read_u32_le();

        if !reader.is_valid() {
            return Err(ProtocolError::Truncated);
        }

        // Command is the bytes up to the first NUL of the fixed field.
        // Garbage that is not valid text still produces a heading; it simply
        // maps to Identifier::Unknown.
        let end = command_field
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(COMMAND_SIZE);
        let command = String::from_utf8_lossy(&command_field[..end]).into_owned();

        Ok(Self {
            magic,
            command,
            payload_size,
            checksum,
        })
    }

    /// Writes the four fields in wire order. Commands longer than the fixed
    /// field are truncated to its width.
    pub fn encode(&self, writer: &mut ByteWriter) {
        writer.write_u32_le(self.magic);

        let mut field = [0u8; COMMAND_SIZE];
        let bytes = self.command.as_bytes();
        let len = bytes.len().min(COMMAND_SIZE);
        field[..len].copy_from_slice(&bytes[..len]);
        writer.write_bytes(&field);

        writer.write_u32_le(self.payload_size);
        writer.write_u32_le(self.checksum);
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
}
