//! Input validation for addresses, IBC identifiers and denoms.
//!
//! Identifier rules follow ICS-024 host requirements:
//!
//! | Identifier | Length   |
//! |------------|----------|
//! | client     | 9..=64   |
//! | port       | 2..=128  |
//! | channel    | 8..=64   |
//!
//! Allowed characters: ASCII alphanumerics and `. _ + - # [ ] < >`.
//! Denoms follow the Cosmos SDK pattern `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.

use cosmwasm_std::{Addr, Api, Coin};

use crate::error::ContractError;
use crate::msg::IbcSettings;
use crate::precision::validate_decimal_difference;

const CLIENT_ID_LENGTH: (usize, usize) = (9, 64);
const PORT_ID_LENGTH: (usize, usize) = (2, 128);
const CHANNEL_ID_LENGTH: (usize, usize) = (8, 64);
const DENOM_LENGTH: (usize, usize) = (3, 128);

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> ContractError {
    ContractError::InvalidFormat {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Validate a bech32 address through the chain's address codec.
pub fn validate_address(api: &dyn Api, field: &str, address: &str) -> Result<Addr, ContractError> {
    api.addr_validate(address)
        .map_err(|e| invalid(field, address, e.to_string()))
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-' | '#' | '[' | ']' | '<' | '>')
}

fn validate_identifier(
    field: &str,
    id: &str,
    (min, max): (usize, usize),
) -> Result<(), ContractError> {
    if id.trim().is_empty() {
        return Err(invalid(field, id, "identifier cannot be blank"));
    }
    if id.contains('/') {
        return Err(invalid(field, id, "identifier cannot contain separator '/'"));
    }
    if id.len() < min || id.len() > max {
        return Err(invalid(
            field,
            id,
            format!("length {} outside of {}..={}", id.len(), min, max),
        ));
    }
    if let Some(c) = id.chars().find(|c| !is_identifier_char(*c)) {
        return Err(invalid(field, id, format!("invalid character '{}'", c)));
    }
    Ok(())
}

pub fn validate_client_id(field: &str, id: &str) -> Result<(), ContractError> {
    validate_identifier(field, id, CLIENT_ID_LENGTH)
}

pub fn validate_port_id(field: &str, id: &str) -> Result<(), ContractError> {
    validate_identifier(field, id, PORT_ID_LENGTH)
}

pub fn validate_channel_id(field: &str, id: &str) -> Result<(), ContractError> {
    validate_identifier(field, id, CHANNEL_ID_LENGTH)
}

pub fn validate_denom(field: &str, denom: &str) -> Result<(), ContractError> {
    let (min, max) = DENOM_LENGTH;
    if denom.len() < min || denom.len() > max {
        return Err(invalid(
            field,
            denom,
            format!("length {} outside of {}..={}", denom.len(), min, max),
        ));
    }
    if !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid(field, denom, "must start with a letter"));
    }
    if let Some(c) = denom
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')))
    {
        return Err(invalid(field, denom, format!("invalid character '{}'", c)));
    }
    Ok(())
}

/// Validate settings field by field, stopping at the first failure.
pub fn validate_ibc_settings(settings: &IbcSettings) -> Result<(), ContractError> {
    validate_client_id("native_client_id", &settings.native_client_id)?;
    validate_client_id("counterparty_client_id", &settings.counterparty_client_id)?;
    validate_port_id("native_port", &settings.native_port)?;
    validate_port_id("counterparty_port", &settings.counterparty_port)?;
    validate_channel_id("native_channel", &settings.native_channel)?;
    validate_channel_id("counterparty_channel", &settings.counterparty_channel)?;
    validate_denom("denom", &settings.denom)?;
    validate_decimal_difference(settings.decimal_difference)?;
    Ok(())
}

/// Coins moved by a custody operation: non-empty, positive, well-formed denoms.
pub fn validate_coins(coins: &[Coin]) -> Result<(), ContractError> {
    if coins.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "no coins provided".to_string(),
        });
    }
    for coin in coins {
        validate_denom("amount denom", &coin.denom)?;
        if coin.amount.is_zero() {
            return Err(ContractError::InvalidAmount {
                reason: format!("zero amount of {}", coin.denom),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;
    use cosmwasm_std::coin;

    fn valid_settings() -> IbcSettings {
        IbcSettings {
            native_client_id: "07-tendermint-0".to_string(),
            counterparty_client_id: "07-tendermint-12".to_string(),
            native_port: "transfer".to_string(),
            counterparty_port: "transfer".to_string(),
            native_channel: "channel-0".to_string(),
            counterparty_channel: "channel-42".to_string(),
            denom: "uzig".to_string(),
            decimal_difference: 12,
        }
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_ibc_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_client_id_too_short() {
        let err = validate_client_id("native_client_id", "07-tm").unwrap_err();
        assert!(matches!(err, ContractError::InvalidFormat { ref field, .. } if field == "native_client_id"));
    }

    #[test]
    fn test_port_rejects_separator_and_charset() {
        assert!(validate_port_id("native_port", "trans/fer").is_err());
        assert!(validate_port_id("native_port", "trans fer").is_err());
        assert!(validate_port_id("native_port", "t").is_err());
        assert!(validate_port_id("native_port", "icahost").is_ok());
    }

    #[test]
    fn test_channel_length_bounds() {
        assert!(validate_channel_id("native_channel", "chan-1").is_err());
        assert!(validate_channel_id("native_channel", "channel-1").is_ok());
        assert!(validate_channel_id("native_channel", &"c".repeat(65)).is_err());
    }

    #[test]
    fn test_denom_rules() {
        assert!(validate_denom("denom", "uzig").is_ok());
        assert!(validate_denom("denom", "ibc/27394FB092D2ECCD").is_ok());
        assert!(validate_denom("denom", "factory/zig1abc/coin").is_ok());
        assert!(validate_denom("denom", "1zig").is_err());
        assert!(validate_denom("denom", "zg").is_err());
        assert!(validate_denom("denom", "u zig").is_err());
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let mut settings = valid_settings();
        settings.native_port = "x".to_string();
        settings.denom = "1bad".to_string();
        settings.decimal_difference = 30;

        let err = validate_ibc_settings(&settings).unwrap_err();
        match err {
            ContractError::InvalidFormat { field, value, .. } => {
                assert_eq!(field, "native_port");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decimal_difference_checked_last() {
        let mut settings = valid_settings();
        settings.decimal_difference = 19;
        assert_eq!(
            validate_ibc_settings(&settings).unwrap_err(),
            ContractError::DecimalDifferenceOutOfRange { value: 19, max: 18 }
        );
    }

    #[test]
    fn test_validate_address_maps_to_format_error() {
        let api = MockApi::default();
        assert!(validate_address(&api, "address", "zig1user").is_ok());

        let err = validate_address(&api, "address", "Zig1User").unwrap_err();
        assert!(matches!(err, ContractError::InvalidFormat { ref field, .. } if field == "address"));
    }

    #[test]
    fn test_validate_coins() {
        assert!(validate_coins(&[]).is_err());
        assert!(validate_coins(&[coin(0, "uzig")]).is_err());
        assert!(validate_coins(&[coin(10, "uzig")]).is_ok());
    }
}
