//! Message types for the token wrapper module
//!
//! This module defines the instantiate, execute, migrate and query messages
//! together with their response payloads.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128, Uint256};

// ============================================================================
// Shared Types
// ============================================================================

/// IBC connection settings plus the precision gap of the wrapped asset
#[cw_serde]
pub struct IbcSettings {
    /// Light client of the counterparty chain, on this chain
    pub native_client_id: String,
    /// Light client of this chain, on the counterparty chain
    pub counterparty_client_id: String,
    /// Transfer port on this chain
    pub native_port: String,
    /// Transfer port on the counterparty chain
    pub counterparty_port: String,
    /// Transfer channel on this chain
    pub native_channel: String,
    /// Transfer channel on the counterparty chain
    pub counterparty_channel: String,
    /// Base denom on the counterparty chain
    pub denom: String,
    /// Voucher decimals minus native decimals (0..=18)
    pub decimal_difference: u32,
}

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial operator address
    pub operator: String,
    /// Initial pauser addresses
    #[serde(default)]
    pub pausers: Vec<String>,
    /// Native denom (defaults to `uzig`)
    pub native_denom: Option<String>,
    /// Whether the module starts enabled
    #[serde(default)]
    pub enabled: bool,
    /// Initial IBC settings (validated like `UpdateIbcSettings`)
    pub ibc_settings: Option<IbcSettings>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Operator Rotation
    // ========================================================================
    /// Propose a new operator
    ///
    /// Authorization: Operator only
    ProposeOperatorAddress {
        /// Candidate operator address
        new_operator: String,
    },

    /// Claim the operator role
    ///
    /// Authorization: Proposed operator only
    ClaimOperatorAddress {},

    // ========================================================================
    // Pauser Management
    // ========================================================================
    /// Add a pauser (idempotent)
    ///
    /// Authorization: Operator only
    AddPauserAddress {
        /// Address to grant pauser role
        new_pauser: String,
    },

    /// Remove a pauser (idempotent)
    ///
    /// Authorization: Operator only
    RemovePauserAddress {
        /// Address to revoke pauser role
        pauser: String,
    },

    // ========================================================================
    // Enable / Disable
    // ========================================================================
    /// Enable the module
    ///
    /// Authorization: Operator only
    EnableTokenWrapper {},

    /// Disable the module
    ///
    /// Authorization: Operator or pauser
    DisableTokenWrapper {},

    // ========================================================================
    // Module Wallet
    // ========================================================================
    /// Move coins from the operator into module custody
    ///
    /// Authorization: Operator only
    FundModuleWallet { amount: Vec<Coin> },

    /// Move coins from module custody to the operator
    ///
    /// Authorization: Operator only
    WithdrawFromModuleWallet { amount: Vec<Coin> },

    // ========================================================================
    // IBC Settings
    // ========================================================================
    /// Replace the IBC settings and decimal difference
    ///
    /// Authorization: Operator only
    UpdateIbcSettings {
        native_client_id: String,
        counterparty_client_id: String,
        native_port: String,
        counterparty_port: String,
        native_channel: String,
        counterparty_channel: String,
        denom: String,
        decimal_difference: u32,
    },

    // ========================================================================
    // Conversion
    // ========================================================================
    /// Convert every voucher held by `address` back to native tokens
    ///
    /// Authorization: Anyone (the operator address cannot be recovered)
    RecoverZig {
        /// Account holding stranded vouchers
        address: String,
    },

    /// Lock native tokens for an outgoing transfer
    ///
    /// Authorization: Anyone, module must be enabled. The sender's own
    /// native coins are locked.
    WrapOutgoing { amount: Uint128 },

    /// Convert freshly received vouchers to native tokens
    ///
    /// Authorization: Anyone, module must be enabled. The sender's own
    /// vouchers are converted.
    UnwrapIncoming { amount: Uint128 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Full module snapshot: roles, settings and balances
    #[returns(ModuleInfoResponse)]
    ModuleInfo {},

    /// Cumulative transfer counters
    #[returns(TotalTransfersResponse)]
    TotalTransfers {},

    /// Current pauser set
    #[returns(PauserAddressesResponse)]
    PauserAddresses {},

    /// Current and proposed operator
    #[returns(OperatorInfoResponse)]
    OperatorInfo {},

    /// cw2 name and version
    #[returns(cw2::ContractVersion)]
    ContractVersion {},
}

// ============================================================================
// Responses
// ============================================================================

#[cw_serde]
pub struct ModuleInfoResponse {
    pub module_address: Addr,
    pub operator: Addr,
    pub proposed_operator: Option<Addr>,
    pub pausers: Vec<Addr>,
    pub enabled: bool,
    pub native_denom: String,
    pub ibc_settings: IbcSettings,
    /// Voucher denom derived from the settings (None until configured)
    pub voucher_denom: Option<String>,
    /// Custody balance of the native denom
    pub native_balance: Coin,
    /// Custody balance of the voucher denom (None until configured)
    pub voucher_balance: Option<Coin>,
}

#[cw_serde]
pub struct TotalTransfersResponse {
    pub total_transferred_in: Uint256,
    pub total_transferred_out: Uint256,
}

#[cw_serde]
pub struct PauserAddressesResponse {
    pub pausers: Vec<Addr>,
}

#[cw_serde]
pub struct OperatorInfoResponse {
    pub operator: Addr,
    pub proposed_operator: Option<Addr>,
}

/// Data of `FundModuleWallet` / `WithdrawFromModuleWallet`
#[cw_serde]
pub struct ModuleWalletResponse {
    pub signer: Addr,
    pub module_address: Addr,
    pub amount: Vec<Coin>,
    /// Custody balances of the moved denoms after the operation
    pub module_balances: Vec<Coin>,
    /// Operator balances of the moved denoms after the operation
    pub signer_balances: Vec<Coin>,
}

/// Data of `RecoverZig` / `UnwrapIncoming`
#[cw_serde]
pub struct RecoverZigResponse {
    pub address: Addr,
    pub locked_tokens: Coin,
    pub unlocked_tokens: Coin,
}

/// Data of `WrapOutgoing`
#[cw_serde]
pub struct WrapOutgoingResponse {
    pub sender: Addr,
    pub locked_tokens: Coin,
    /// Amount the counterparty credits, in voucher precision
    pub wrapped_amount: Uint128,
}
