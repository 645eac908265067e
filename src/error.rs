//! # Error Types
//!
//! Error handling for the framing layer.
//!
//! This module defines all error variants a message can fail with, from
//! truncated input to checksum mismatches. Every failure is local to the
//! message being decoded: nothing here is fatal, and the worst outcome is
//! rejecting that one message.
//!
//! ## Error Categories
//! - **Truncated input**: the byte stream ran out mid-field
//! - **Integrity**: checksum or network magic does not match
//! - **Limits**: a declared payload length exceeds the negotiated bound
//! - **Wire quirks**: the mandatory trailing byte is missing or non-zero
//!
//! An unrecognized command is deliberately NOT an error; it maps to
//! [`Identifier::Unknown`](crate::protocol::Identifier::Unknown) and routing
//! policy is left to the caller.

use std::io;
use thiserror::Error;

use crate::protocol::identifier::Identifier;

/// Primary error type for all framing operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("truncated input: byte stream exhausted mid-field")]
    Truncated,

    #[error("checksum mismatch: heading declares {expected:#010x}, body hashes to {found:#010x}")]
    ChecksumMismatch { expected: u32, found: u32 },

    #[error("payload too large: {size} bytes (limit: {limit})")]
    OversizedPayload { size: usize, limit: usize },

    #[error("network magic mismatch: expected {expected:#010x}, found {found:#010x}")]
    MagicMismatch { expected: u32, found: u32 },

    #[error("invalid trailing byte: expected 0x00, found {0:#04x}")]
    InvalidTrailingByte(u8),

    #[error("unconsumed bytes after payload: {0} remaining")]
    UnconsumedBytes(usize),

    #[error("no handler registered for '{0}' messages")]
    UnexpectedMessage(Identifier),

    #[error("dispatcher lock poisoned")]
    LockPoisoned,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using ProtocolError.
pub type Result<T> = std::result::Result<T, ProtocolError>;
