//! # Core Byte-Level Components
//!
//! Cursors and hashing primitives behind the wire format.
//!
//! This module provides the foundation the message layer is built on:
//! sequential byte cursors with little-endian and variable-length integer
//! support, and the double-SHA-256 checksum.
//!
//! ## Components
//! - **Reader**: cursor over a borrowed byte slice with a permanent
//!   invalidation flag
//! - **Writer**: cursor over a growable buffer; writes cannot fail
//! - **Checksum**: double SHA-256 and the 4-byte wire checksum
//!
//! ## Security
//! - Reads past the end of input invalidate the cursor instead of panicking
//! - The checksum detects corruption; it is not an authenticator

pub mod checksum;
pub mod reader;
pub mod writer;

pub use checksum::{checksum, double_sha256};
pub use reader::ByteReader;
pub use writer::ByteWriter;
