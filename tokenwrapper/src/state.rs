//! State definitions for the token wrapper module
//!
//! Every persisted field lives under its own fixed key. Nothing is range
//! scanned, and nothing is created ahead of time: an unset item reads as its
//! zero value (see the `load_*` helpers).

use std::collections::BTreeSet;

use cosmwasm_std::{Addr, StdResult, Storage, Uint256};
use cw_storage_plus::Item;

use crate::msg::IbcSettings;

// ============================================================================
// Constants
// ============================================================================

/// Module name, also the name of the custody account in the bank ledger
pub const MODULE_NAME: &str = "tokenwrapper";

/// Contract name for cw2 version info
pub const CONTRACT_NAME: &str = "crates.io:zig-tokenwrapper";

/// Contract version for cw2 version info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default native denom of the chain
pub const DEFAULT_NATIVE_DENOM: &str = "uzig";

// ============================================================================
// Role State
// ============================================================================

/// Current operator
pub const OPERATOR: Item<Addr> = Item::new("operator");

/// Candidate operator awaiting claim (absent = no proposal)
pub const PROPOSED_OPERATOR: Item<Addr> = Item::new("proposed_operator");

/// Addresses allowed to disable the module
pub const PAUSERS: Item<BTreeSet<Addr>> = Item::new("pausers");

/// Whether the module is enabled
pub const ENABLED: Item<bool> = Item::new("enabled");

// ============================================================================
// Precision & IBC Settings
// ============================================================================

/// Denom of the native asset held in custody
pub const NATIVE_DENOM: Item<String> = Item::new("native_denom");

/// Power-of-ten gap between voucher and native precision (0..=18)
pub const DECIMAL_DIFFERENCE: Item<u32> = Item::new("decimal_difference");

pub const NATIVE_CLIENT_ID: Item<String> = Item::new("native_client_id");
pub const COUNTERPARTY_CLIENT_ID: Item<String> = Item::new("counterparty_client_id");
pub const NATIVE_PORT: Item<String> = Item::new("native_port");
pub const COUNTERPARTY_PORT: Item<String> = Item::new("counterparty_port");
pub const NATIVE_CHANNEL: Item<String> = Item::new("native_channel");
pub const COUNTERPARTY_CHANNEL: Item<String> = Item::new("counterparty_channel");

/// Counterparty base denom the voucher denom is derived from
pub const DENOM: Item<String> = Item::new("denom");

// ============================================================================
// Transfer Accounting
// ============================================================================

/// Cumulative native amount released into the chain
pub const TOTAL_TRANSFERRED_IN: Item<Uint256> = Item::new("total_transferred_in");

/// Cumulative native amount locked for outgoing transfers
pub const TOTAL_TRANSFERRED_OUT: Item<Uint256> = Item::new("total_transferred_out");

// ============================================================================
// Load Helpers
// ============================================================================

pub fn load_pausers(storage: &dyn Storage) -> StdResult<BTreeSet<Addr>> {
    Ok(PAUSERS.may_load(storage)?.unwrap_or_default())
}

pub fn load_enabled(storage: &dyn Storage) -> StdResult<bool> {
    Ok(ENABLED.may_load(storage)?.unwrap_or(false))
}

pub fn load_native_denom(storage: &dyn Storage) -> StdResult<String> {
    Ok(NATIVE_DENOM
        .may_load(storage)?
        .unwrap_or_else(|| DEFAULT_NATIVE_DENOM.to_string()))
}

pub fn load_decimal_difference(storage: &dyn Storage) -> StdResult<u32> {
    Ok(DECIMAL_DIFFERENCE.may_load(storage)?.unwrap_or(0))
}

pub fn load_counter(storage: &dyn Storage, counter: &Item<Uint256>) -> StdResult<Uint256> {
    Ok(counter.may_load(storage)?.unwrap_or_else(Uint256::zero))
}

fn load_string(storage: &dyn Storage, item: &Item<String>) -> StdResult<String> {
    Ok(item.may_load(storage)?.unwrap_or_default())
}

/// Read all IBC settings fields.
pub fn load_ibc_settings(storage: &dyn Storage) -> StdResult<IbcSettings> {
    Ok(IbcSettings {
        native_client_id: load_string(storage, &NATIVE_CLIENT_ID)?,
        counterparty_client_id: load_string(storage, &COUNTERPARTY_CLIENT_ID)?,
        native_port: load_string(storage, &NATIVE_PORT)?,
        counterparty_port: load_string(storage, &COUNTERPARTY_PORT)?,
        native_channel: load_string(storage, &NATIVE_CHANNEL)?,
        counterparty_channel: load_string(storage, &COUNTERPARTY_CHANNEL)?,
        denom: load_string(storage, &DENOM)?,
        decimal_difference: load_decimal_difference(storage)?,
    })
}

/// Write all IBC settings fields. Callers validate first.
pub fn save_ibc_settings(storage: &mut dyn Storage, settings: &IbcSettings) -> StdResult<()> {
    NATIVE_CLIENT_ID.save(storage, &settings.native_client_id)?;
    COUNTERPARTY_CLIENT_ID.save(storage, &settings.counterparty_client_id)?;
    NATIVE_PORT.save(storage, &settings.native_port)?;
    COUNTERPARTY_PORT.save(storage, &settings.counterparty_port)?;
    NATIVE_CHANNEL.save(storage, &settings.native_channel)?;
    COUNTERPARTY_CHANNEL.save(storage, &settings.counterparty_channel)?;
    DENOM.save(storage, &settings.denom)?;
    DECIMAL_DIFFERENCE.save(storage, &settings.decimal_difference)?;
    Ok(())
}
