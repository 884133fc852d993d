//! Query handlers for the token wrapper module.

use cosmwasm_std::{StdError, StdResult};

use crate::deps::{ModuleEnv, ModuleQueryDeps};
use crate::error::ContractError;
use crate::execute::resolve_voucher_denom;
use crate::msg::{
    ModuleInfoResponse, OperatorInfoResponse, PauserAddressesResponse, TotalTransfersResponse,
};
use crate::state::{
    load_counter, load_enabled, load_ibc_settings, load_native_denom, load_pausers, OPERATOR,
    PROPOSED_OPERATOR, TOTAL_TRANSFERRED_IN, TOTAL_TRANSFERRED_OUT,
};

/// Full snapshot of roles, settings and custody balances.
pub fn query_module_info(deps: ModuleQueryDeps, env: &ModuleEnv) -> StdResult<ModuleInfoResponse> {
    let native_denom = load_native_denom(deps.storage)?;
    let native_balance = deps.bank.get_balance(&env.module_address, &native_denom);

    // Unconfigured settings simply have no voucher denom yet
    let voucher_denom = match resolve_voucher_denom(deps.storage, deps.tracer) {
        Ok(denom) => Some(denom),
        Err(ContractError::IbcSettingsNotConfigured { .. }) => None,
        Err(ContractError::Std(err)) => return Err(err),
        Err(err) => return Err(StdError::generic_err(err.to_string())),
    };
    let voucher_balance = voucher_denom
        .as_deref()
        .map(|denom| deps.bank.get_balance(&env.module_address, denom));

    Ok(ModuleInfoResponse {
        module_address: env.module_address.clone(),
        operator: OPERATOR.load(deps.storage)?,
        proposed_operator: PROPOSED_OPERATOR.may_load(deps.storage)?,
        pausers: load_pausers(deps.storage)?.into_iter().collect(),
        enabled: load_enabled(deps.storage)?,
        native_denom,
        ibc_settings: load_ibc_settings(deps.storage)?,
        voucher_denom,
        native_balance,
        voucher_balance,
    })
}

/// Cumulative transfer counters.
pub fn query_total_transfers(deps: ModuleQueryDeps) -> StdResult<TotalTransfersResponse> {
    Ok(TotalTransfersResponse {
        total_transferred_in: load_counter(deps.storage, &TOTAL_TRANSFERRED_IN)?,
        total_transferred_out: load_counter(deps.storage, &TOTAL_TRANSFERRED_OUT)?,
    })
}

/// Current pauser set, in address order.
pub fn query_pauser_addresses(deps: ModuleQueryDeps) -> StdResult<PauserAddressesResponse> {
    Ok(PauserAddressesResponse {
        pausers: load_pausers(deps.storage)?.into_iter().collect(),
    })
}

/// Current and proposed operator.
pub fn query_operator_info(deps: ModuleQueryDeps) -> StdResult<OperatorInfoResponse> {
    Ok(OperatorInfoResponse {
        operator: OPERATOR.load(deps.storage)?,
        proposed_operator: PROPOSED_OPERATOR.may_load(deps.storage)?,
    })
}
