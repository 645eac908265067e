//! Contract every message payload implements.
//!
//! A payload serializes itself under a negotiated protocol version, which is
//! passed into every call rather than stored: the same value may need
//! different wire layouts for peers on different versions. Implementations
//! must keep [`size`](Payload::size), [`encode`](Payload::encode), and
//! [`decode`](Payload::decode) consistent so that round-tripping at the same
//! version is lossless.

use crate::core::reader::ByteReader;
use crate::core::writer::ByteWriter;
use crate::error::{ProtocolError, Result};
use crate::protocol::identifier::Identifier;

pub trait Payload: Sized {
    /// Wire command string carried in the heading for this payload type.
    fn command(&self) -> &'static str;

    /// Message-type identifier matching [`command`](Self::command).
    fn id(&self) -> Identifier;

    /// Exact encoded length in bytes under `version`.
    fn size(&self, version: u32) -> usize;

    /// Appends the wire encoding to `writer`. Cannot fail; the writer grows
    /// as needed.
    fn encode(&self, version: u32, writer: &mut ByteWriter);

    /// Reads one payload off `reader`. Returns a fully decoded value or an
    /// error; implementations must never yield partially populated values.
    fn decode(version: u32, reader: &mut ByteReader<'_>) -> Result<Self>;

    /// Complete wire encoding as a fresh buffer.
    fn to_bytes(&self, version: u32) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(self.size(version));
        self.encode(version, &mut writer);
        debug_assert_eq!(writer.len(), self.size(version));
        writer.into_vec()
    }

    /// Decodes from a complete message body. The body must contain exactly
    /// one payload; leftover bytes are rejected so a heading's declared
    /// length and the payload's actual length cannot silently disagree.
    fn from_bytes(version: u32, data: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(data);
        let payload = Self::decode(version, &mut reader)?;

        if !reader.is_exhausted() {
            return Err(ProtocolError::UnconsumedBytes(reader.remaining()));
        }

        Ok(payload)
    }
}
