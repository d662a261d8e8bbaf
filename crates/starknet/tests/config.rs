//! Tests for Starknet settings validation.

use mancala_starknet::{
    ACCOUNT_ADDRESS, ChainError, Felt, PRIVATE_KEY, PROVIDER_URL, validate_starknet_config,
};
use mcore::Settings;

fn settings() -> Settings {
    Settings::isolated()
        .secret(ACCOUNT_ADDRESS, "0x0123")
        .secret(PRIVATE_KEY, "0x0abc")
        .secret(PROVIDER_URL, "https://starknet-sepolia.example.com/rpc")
}

#[test]
fn valid_settings() {
    let config = validate_starknet_config(&settings()).unwrap();
    assert_eq!(config.account_address, Felt::from(0x123_u64));
    assert_eq!(config.private_key, Felt::from(0xabc_u64));
    assert_eq!(
        config.provider_url.as_str(),
        "https://starknet-sepolia.example.com/rpc"
    );
}

#[test]
fn missing_key_names_the_setting() {
    let settings = Settings::isolated()
        .secret(ACCOUNT_ADDRESS, "0x0123")
        .secret(PROVIDER_URL, "https://example.com");
    let err = validate_starknet_config(&settings).unwrap_err();
    assert!(matches!(err, ChainError::Config(_)));
    assert_eq!(
        err.to_string(),
        "Starknet configuration error: STARKNET_PRIVATE_KEY is required"
    );
}

#[test]
fn blank_values_count_as_missing() {
    let settings = settings().secret(ACCOUNT_ADDRESS, "   ");
    let err = validate_starknet_config(&settings).unwrap_err();
    assert!(err.to_string().contains("STARKNET_ACCOUNT_ADDRESS is required"));
}

#[test]
fn malformed_values_are_rejected() {
    let err = validate_starknet_config(&settings().secret(PRIVATE_KEY, "0xnothex")).unwrap_err();
    assert!(err.to_string().contains("STARKNET_PRIVATE_KEY"));

    let err = validate_starknet_config(&settings().secret(PROVIDER_URL, "not a url")).unwrap_err();
    assert!(err.to_string().contains("STARKNET_PROVIDER_URL"));

    let err =
        validate_starknet_config(&settings().secret(PROVIDER_URL, "ftp://example.com")).unwrap_err();
    assert!(err.to_string().contains("http(s)"));
}

#[test]
fn debug_redacts_private_key() {
    let config = validate_starknet_config(&settings()).unwrap();
    let debug = format!("{config:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("0xabc"));
}
