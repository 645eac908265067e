//! # Chain Primitives
//!
//! Consensus-level records the message layer reuses.
//!
//! The message layer wraps these records rather than redefining them: a
//! block header has exactly one canonical 80-byte encoding, and every
//! message that carries one defers to it.

pub mod header;

pub use header::BlockHeader;
