//! # Bitcoin Wire
//!
//! Message framing and versioned serialization core for the Bitcoin P2P
//! network protocol.
//!
//! Every message a node exchanges is prefixed with a fixed-size [`Heading`]
//! carrying the network magic, a command name, the payload length, and a
//! checksum over the payload. Payload types implement the [`Payload`]
//! contract and serialize themselves under a negotiated protocol version,
//! which can change their wire layout (see [`HeaderMessage`] and its legacy
//! trailing byte).
//!
//! ## Components
//! - **Core**: byte cursors and the double-SHA-256 checksum
//! - **Chain**: the fixed-format block header record
//! - **Protocol**: heading, message identifiers, versioned payloads, and the
//!   verified read path
//! - **Config**: network selection and negotiated session parameters
//!
//! ## Wire Format
//! ```text
//! [Magic(4 LE)] [Command(12, NUL-padded ASCII)] [Length(4 LE)] [Checksum(4 LE)] [Body(N)]
//! ```
//!
//! ## Security
//! - Declared payload lengths are bounded before any body allocation
//! - Checksums detect corruption (they are not authentication)
//! - Malformed or truncated input is rejected without panicking; the worst
//!   outcome of a bad message is rejecting that message
//!
//! ## Example
//! ```rust
//! use bitcoin_wire::chain::BlockHeader;
//! use bitcoin_wire::config::Network;
//! use bitcoin_wire::protocol::version::level;
//! use bitcoin_wire::protocol::{Heading, HeaderMessage, Payload};
//!
//! let message = HeaderMessage::new(BlockHeader::default());
//! let body = message.to_bytes(level::CANONICAL);
//! let heading = Heading::new(Network::Mainnet.magic(), "headers", &body);
//!
//! assert_eq!(heading.payload_size() as usize, body.len());
//! assert!(heading.verify_checksum(&body));
//! ```

pub mod chain;
pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::config::Network;
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::{Heading, HeaderMessage, Identifier, Payload};
