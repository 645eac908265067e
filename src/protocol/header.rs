//! Block-header message payload.
//!
//! Wraps the chain-level [`BlockHeader`] record by composition and layers
//! the one version-dependent wire rule on top: below
//! [`level::CANONICAL`](crate::protocol::version::level::CANONICAL) the
//! encoded record trails a single mandatory `0x00` byte: the transaction
//! count slot that header announcements always leave empty
//! (bitcoin.org/en/developer-reference#headers). At the canonical level the
//! byte is absent entirely.
//!
//! The trailing byte carries no information, so equality delegates to the
//! inner record alone.

use crate::chain::header::BlockHeader;
use crate::core::reader::ByteReader;
use crate::core::writer::ByteWriter;
use crate::error::{ProtocolError, Result};
use crate::protocol::identifier::Identifier;
use crate::protocol::payload::Payload;
use crate::protocol::version::level;

/// One announced block header, as carried inside a `headers` message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMessage {
    pub header: BlockHeader,
}

impl HeaderMessage {
    pub fn new(header: BlockHeader) -> Self {
        Self { header }
    }

    /// Encoded length under `version`, computable before any decode.
    pub fn fixed_size(version: u32) -> usize {
        BlockHeader::SIZE + usize::from(version != level::CANONICAL)
    }
}

impl Payload for HeaderMessage {
    fn command(&self) -> &'static str {
        "headers"
    }

    fn id(&self) -> Identifier {
        Identifier::Headers
    }

    fn size(&self, version: u32) -> usize {
        Self::fixed_size(version)
    }

    fn encode(&self, version: u32, writer: &mut ByteWriter) {
        self.header.encode(writer);

        if version != level::CANONICAL {
            writer.write_byte(0x00);
        }
    }

    fn decode(version: u32, reader: &mut ByteReader<'_>) -> Result<Self> {
        let header = BlockHeader::decode(reader)?;

        if version != level::CANONICAL {
            // Strict on purpose: a non-zero byte here is not tolerated even
            // though the inner record already decoded cleanly.
            let trailing = reader.read_byte();
            if !reader.is_valid() {
                return Err(ProtocolError::Truncated);
            }
            if trailing != 0x00 {
                reader.invalidate();
                return Err(ProtocolError::InvalidTrailingByte(trailing));
            }
        }

        Ok(Self { header })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeaderMessage {
        HeaderMessage::new(BlockHeader::new(
            2,
            [0xAB; 32],
            [0xCD; 32],
            1_415_239_972,
            0x1800_9C8A,
            0x0012_D846,
        ))
    }

    #[test]
    fn size_includes_trailing_byte_below_canonical() {
        assert_eq!(HeaderMessage::fixed_size(level::CANONICAL), 80);
        assert_eq!(HeaderMessage::fixed_size(level::MINIMUM), 81);
        assert_eq!(HeaderMessage::fixed_size(60002), 81);
    }

    #[test]
    fn encode_appends_zero_byte_only_below_canonical() {
        let message = sample();

        let canonical = message.to_bytes(level::CANONICAL);
        assert_eq!(canonical.len(), 80);

        let legacy = message.to_bytes(60002);
        assert_eq!(legacy.len(), 81);
        assert_eq!(legacy[80], 0x00);
        assert_eq!(&legacy[..80], canonical.as_slice());
    }

    #[test]
    fn roundtrip_at_both_version_regimes() {
        let message = sample();

        for version in [level::MINIMUM, 60002, level::CANONICAL] {
            let bytes = message.to_bytes(version);
            assert_eq!(bytes.len(), message.size(version));

            let decoded = HeaderMessage::from_bytes(version, &bytes).unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn non_zero_trailing_byte_fails_decode() {
        let mut bytes = sample().to_bytes(60002);
        bytes[80] = 0x01;

        let result = HeaderMessage::from_bytes(60002, &bytes);
        assert!(matches!(
            result,
            Err(ProtocolError::InvalidTrailingByte(0x01))
        ));

        // The inner record alone is still a clean decode; only the envelope
        // rule fails.
        assert!(BlockHeader::from_bytes(&bytes[..80]).is_ok());
    }

    #[test]
    fn missing_trailing_byte_fails_decode() {
        let bytes = sample().to_bytes(level::CANONICAL);

        let result = HeaderMessage::from_bytes(60002, &bytes);
        assert!(matches!(result, Err(ProtocolError::Truncated)));
    }

    #[test]
    fn trailing_byte_rejected_at_canonical_version() {
        // At the canonical level the byte must be absent; its presence is
        // trailing garbage.
        let bytes = sample().to_bytes(60002);

        let result = HeaderMessage::from_bytes(level::CANONICAL, &bytes);
        assert!(matches!(result, Err(ProtocolError::UnconsumedBytes(1))));
    }

    #[test]
    fn equality_ignores_serialization_version() {
        let message = sample();
        let legacy = HeaderMessage::from_bytes(60002, &message.to_bytes(60002)).unwrap();
        let canonical =
            HeaderMessage::from_bytes(level::CANONICAL, &message.to_bytes(level::CANONICAL))
                .unwrap();

        assert_eq!(legacy, canonical);
        assert_eq!(legacy.header, message.header);
    }

    #[test]
    fn truncated_inner_record_fails() {
        let bytes = sample().to_bytes(60002);

        let result = HeaderMessage::from_bytes(60002, &bytes[..40]);
        assert!(matches!(result, Err(ProtocolError::Truncated)));
    }
}
