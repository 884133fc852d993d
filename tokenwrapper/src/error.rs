//! Error types for the token wrapper module

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: {signer} is not the {role}")]
    Unauthorized { signer: String, role: String },

    // ========================================================================
    // Role Errors
    // ========================================================================

    #[error("No pending operator proposal")]
    NoProposal,

    #[error("Proposed operator {address} is already the operator")]
    SameAddress { address: String },

    // ========================================================================
    // Module State Errors
    // ========================================================================

    #[error("Token wrapper module is disabled")]
    ModuleDisabled,

    #[error("Recovery is not allowed on the operator address {address}")]
    RecoveryNotAllowedOnOperator { address: String },

    #[error("Recovery is not allowed on the custody address {address}")]
    RecoveryNotAllowedOnModule { address: String },

    #[error("IBC settings are not configured: {field} is empty")]
    IbcSettingsNotConfigured { field: String },

    #[error("No {denom} vouchers available for {address}")]
    NoVouchersAvailable { address: String, denom: String },

    // ========================================================================
    // Amount & Balance Errors
    // ========================================================================

    #[error("Insufficient balance: {account} does not hold {amount}{denom}")]
    InsufficientBalance {
        account: String,
        denom: String,
        amount: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Conversion of {amount} failed: {reason}")]
    Conversion { amount: Uint128, reason: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Decimal difference {value} exceeds maximum of {max}")]
    DecimalDifferenceOutOfRange { value: u32, max: u32 },

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidFormat {
        field: String,
        value: String,
        reason: String,
    },

    // ========================================================================
    // Recovery Errors
    // ========================================================================

    #[error("Failed to unlock native tokens to {address}: {source}")]
    UnlockFailed {
        address: String,
        source: Box<ContractError>,
    },
}

impl ContractError {
    pub fn unauthorized(signer: impl ToString, role: &str) -> Self {
        ContractError::Unauthorized {
            signer: signer.to_string(),
            role: role.to_string(),
        }
    }
}
