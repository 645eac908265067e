#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Configuration loading and validation tests.

use bitcoin_wire::config::{Network, NetworkConfig};
use bitcoin_wire::error::ProtocolError;
use bitcoin_wire::protocol::version::level;

#[test]
fn test_default_config_passes_validation() {
    let config = NetworkConfig::default();

    assert!(config.validate().is_empty());
    assert!(config.validate_strict().is_ok());
    assert_eq!(config.network, Network::Mainnet);
    assert_eq!(config.protocol_version, level::MAXIMUM);
}

#[test]
fn test_config_from_toml() {
    let toml = r#"
        network = "regtest"
        protocol_version = 70001
        witness = false
    "#;

    let config = NetworkConfig::from_toml(toml).unwrap();

    assert_eq!(config.network, Network::Regtest);
    assert_eq!(config.protocol_version, 70001);
    assert!(!config.witness);
    assert_eq!(config.magic(), 0xDAB5_BFFA);
}

#[test]
fn test_config_network_defaults_to_mainnet() {
    let toml = r#"
        protocol_version = 60002
        witness = true
    "#;

    let config = NetworkConfig::from_toml(toml).unwrap();
    assert_eq!(config.network, Network::Mainnet);
}

#[test]
fn test_config_rejects_unknown_network() {
    let toml = r#"
        network = "simnet"
        protocol_version = 60002
        witness = true
    "#;

    assert!(matches!(
        NetworkConfig::from_toml(toml),
        Err(ProtocolError::Config(_))
    ));
}

#[test]
fn test_config_missing_file() {
    let result = NetworkConfig::from_file("/nonexistent/bitcoin-wire.toml");
    assert!(matches!(result, Err(ProtocolError::Config(_))));
}

#[test]
fn test_validation_reports_every_issue() {
    let config = NetworkConfig {
        network: Network::Mainnet,
        protocol_version: 100,
        witness: true,
    };

    let errors = config.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("predates"));

    let strict = config.validate_strict();
    assert!(matches!(strict, Err(ProtocolError::Config(_))));
}

#[test]
fn test_version_bounds_are_inclusive() {
    let mut config = NetworkConfig::default();

    config.protocol_version = level::MINIMUM;
    assert!(config.validate_strict().is_ok());

    config.protocol_version = level::MAXIMUM;
    assert!(config.validate_strict().is_ok());
}
