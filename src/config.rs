//! # Configuration
//!
//! Network selection and negotiated session parameters.
//!
//! This module carries the facts the framing layer needs about a session:
//! which network's magic to expect, which protocol version was negotiated,
//! and whether witness size limits apply. It does not manage connections or
//! handshakes; the values here are inputs every encode/decode call threads
//! through explicitly.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ProtocolError, Result};
use crate::protocol::heading::Heading;
use crate::protocol::version::level;

/// Networks this layer can frame messages for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    /// Wire magic identifying this network's message stream.
    pub const fn magic(self) -> u32 {
        match self {
            Network::Mainnet => 0xD9B4_BEF9,
            Network::Testnet => 0x0709_110B,
            Network::Regtest => 0xDAB5_BFFA,
        }
    }
}

/// Session parameters for one peer connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Which network's messages to accept.
    #[serde(default)]
    pub network: Network,

    /// Negotiated protocol version for this session.
    pub protocol_version: u32,

    /// Whether witness block-size limits apply to payload bounds.
    pub witness: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            protocol_version: level::MAXIMUM,
            witness: true,
        }
    }
}

impl NetworkConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ProtocolError::Config(format!("failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::Config(format!("failed to parse TOML: {e}")))
    }

    pub fn magic(&self) -> u32 {
        self.network.magic()
    }

    /// Payload bound for this session, as enforced by the read path.
    pub fn maximum_payload_size(&self) -> usize {
        Heading::maximum_payload_size(self.protocol_version, self.witness)
    }

    /// Validate the configuration for common issues.
    ///
    /// Returns a list of validation errors. Empty list means the
    /// configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.protocol_version < level::MINIMUM {
            errors.push(format!(
                "protocol version {} predates the oldest supported level ({})",
                self.protocol_version,
                level::MINIMUM
            ));
        }

        if self.protocol_version > level::MAXIMUM {
            errors.push(format!(
                "protocol version {} is newer than the latest supported level ({})",
                self.protocol_version,
                level::MAXIMUM
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method.
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::Config(format!(
                "configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}
