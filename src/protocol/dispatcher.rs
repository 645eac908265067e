//! Verified read path and per-identifier message routing.
//!
//! [`read_message`] performs the caller-side sequence the framing layer
//! requires: decode the heading, check the network magic, bound the declared
//! body length before allocating it, read the body, and verify its checksum.
//! [`Dispatcher`] then routes the verified body to a handler registered per
//! [`Identifier`]. Payload decoding itself stays with the handler, which
//! knows the negotiated version.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{trace, warn};

use crate::core::reader::ByteReader;
use crate::error::{ProtocolError, Result};
use crate::protocol::heading::Heading;
use crate::protocol::identifier::Identifier;

type HandlerFn = dyn Fn(&Heading, &[u8]) -> Result<()> + Send + Sync + 'static;

/// Routes verified message bodies to handlers keyed by message identifier.
pub struct Dispatcher {
    handlers: Arc<RwLock<HashMap<Identifier, Box<HandlerFn>>>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn register<F>(&self, id: Identifier, handler: F) -> Result<()>
    where
        F: Fn(&Heading, &[u8]) -> Result<()> + Send + Sync + 'static,
    {
        let mut handlers = self
            .handlers
            .write()
            .map_err(|_| ProtocolError::LockPoisoned)?;

        handlers.insert(id, Box::new(handler));
        Ok(())
    }

    /// Hands a verified message to the matching handler. An identifier with
    /// no handler yields [`ProtocolError::UnexpectedMessage`]; whether that
    /// is fatal for the connection is the caller's policy.
    pub fn dispatch(&self, heading: &Heading, body: &[u8]) -> Result<()> {
        let id = heading.id();

        let handlers = self
            .handlers
            .read()
            .map_err(|_| ProtocolError::LockPoisoned)?;

        match handlers.get(&id) {
            Some(handler) => {
                trace!(command = heading.command(), size = body.len(), "dispatching message");
                handler(heading, body)
            }
            None => Err(ProtocolError::UnexpectedMessage(id)),
        }
    }
}

/// Reads one complete message off `reader` and verifies it.
///
/// On success the returned body has the declared length and a matching
/// checksum; the heading's command has NOT been interpreted beyond framing.
/// Every failure is local to this message.
pub fn read_message(
    expected_magic: u32,
    version: u32,
    witness: bool,
    reader: &mut ByteReader<'_>,
) -> Result<(Heading, Vec<u8>)> {
    let heading = Heading::decode(reader)?;

    if heading.magic() != expected_magic {
        warn!(
            expected = expected_magic,
            found = heading.magic(),
            "network magic mismatch"
        );
        return Err(ProtocolError::MagicMismatch {
            expected: expected_magic,
            found: heading.magic(),
        });
    }

    // Bound the declared length before touching the body. This is the only
    // defense against a hostile length field driving a huge allocation.
    let size = heading.payload_size() as usize;
    let limit = Heading::maximum_payload_size(version, witness);
    if size > limit {
        warn!(command = heading.command(), size, limit, "oversized payload declared");
        return Err(ProtocolError::OversizedPayload { size, limit });
    }

    let body = reader.read_bytes(size).to_vec();
    if !reader.is_valid() {
        return Err(ProtocolError::Truncated);
    }

    if !heading.verify_checksum(&body) {
        let found = crate::core::checksum::checksum(&body);
        warn!(
            command = heading.command(),
            declared = heading.checksum(),
            computed = found,
            "payload checksum mismatch"
        );
        return Err(ProtocolError::ChecksumMismatch {
            expected: heading.checksum(),
            found,
        });
    }

    trace!(command = heading.command(), size, "message read");
    Ok((heading, body))
}
