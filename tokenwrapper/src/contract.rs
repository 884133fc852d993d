//! Token Wrapper Module - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//!
//! Entry points take the module handles from `deps` instead of the contract
//! `DepsMut`, since the balance ledger is called synchronously.

use std::collections::BTreeSet;

use cosmwasm_std::{to_json_binary, Addr, Binary, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version};

use crate::deps::{ModuleDeps, ModuleEnv, ModuleQueryDeps};
use crate::error::ContractError;
use crate::execute::{
    execute_add_pauser, execute_claim_operator, execute_disable, execute_enable,
    execute_fund_module_wallet, execute_propose_operator, execute_recover_zig,
    execute_remove_pauser, execute_unwrap_incoming, execute_update_ibc_settings,
    execute_withdraw_from_module_wallet, execute_wrap_outgoing,
};
use crate::msg::{ExecuteMsg, IbcSettings, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_module_info, query_operator_info, query_pauser_addresses, query_total_transfers,
};
use crate::state::{
    save_ibc_settings, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_NATIVE_DENOM, ENABLED,
    NATIVE_DENOM, OPERATOR, PAUSERS,
};
use crate::validation::{validate_address, validate_denom, validate_ibc_settings};

// ============================================================================
// Instantiate
// ============================================================================

pub fn instantiate(
    deps: ModuleDeps,
    env: &ModuleEnv,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let operator = validate_address(deps.api, "operator", &msg.operator)?;

    let pausers = msg
        .pausers
        .iter()
        .map(|pauser| validate_address(deps.api, "pauser", pauser))
        .collect::<Result<BTreeSet<Addr>, ContractError>>()?;

    let native_denom = msg
        .native_denom
        .unwrap_or_else(|| DEFAULT_NATIVE_DENOM.to_string());
    validate_denom("native_denom", &native_denom)?;

    if let Some(settings) = &msg.ibc_settings {
        validate_ibc_settings(settings)?;
    }

    OPERATOR.save(deps.storage, &operator)?;
    PAUSERS.save(deps.storage, &pausers)?;
    ENABLED.save(deps.storage, &msg.enabled)?;
    NATIVE_DENOM.save(deps.storage, &native_denom)?;
    if let Some(settings) = &msg.ibc_settings {
        save_ibc_settings(deps.storage, settings)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("operator", operator)
        .add_attribute("module_address", env.module_address.as_str())
        .add_attribute("native_denom", native_denom)
        .add_attribute("enabled", msg.enabled.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

pub fn execute(
    deps: ModuleDeps,
    env: &ModuleEnv,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Operator rotation
        ExecuteMsg::ProposeOperatorAddress { new_operator } => {
            execute_propose_operator(deps, info, new_operator)
        }
        ExecuteMsg::ClaimOperatorAddress {} => execute_claim_operator(deps, info),

        // Pausers
        ExecuteMsg::AddPauserAddress { new_pauser } => execute_add_pauser(deps, info, new_pauser),
        ExecuteMsg::RemovePauserAddress { pauser } => execute_remove_pauser(deps, info, pauser),

        // Enable / disable
        ExecuteMsg::EnableTokenWrapper {} => execute_enable(deps, info),
        ExecuteMsg::DisableTokenWrapper {} => execute_disable(deps, info),

        // Module wallet
        ExecuteMsg::FundModuleWallet { amount } => {
            execute_fund_module_wallet(deps, env, info, amount)
        }
        ExecuteMsg::WithdrawFromModuleWallet { amount } => {
            execute_withdraw_from_module_wallet(deps, env, info, amount)
        }

        // IBC settings
        ExecuteMsg::UpdateIbcSettings {
            native_client_id,
            counterparty_client_id,
            native_port,
            counterparty_port,
            native_channel,
            counterparty_channel,
            denom,
            decimal_difference,
        } => execute_update_ibc_settings(
            deps,
            info,
            IbcSettings {
                native_client_id,
                counterparty_client_id,
                native_port,
                counterparty_port,
                native_channel,
                counterparty_channel,
                denom,
                decimal_difference,
            },
        ),

        // Conversion
        ExecuteMsg::RecoverZig { address } => execute_recover_zig(deps, env, info, address),
        ExecuteMsg::WrapOutgoing { amount } => execute_wrap_outgoing(deps, env, info, amount),
        ExecuteMsg::UnwrapIncoming { amount } => execute_unwrap_incoming(deps, env, info, amount),
    }
}

// ============================================================================
// Query
// ============================================================================

pub fn query(deps: ModuleQueryDeps, env: &ModuleEnv, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ModuleInfo {} => to_json_binary(&query_module_info(deps, env)?),
        QueryMsg::TotalTransfers {} => to_json_binary(&query_total_transfers(deps)?),
        QueryMsg::PauserAddresses {} => to_json_binary(&query_pauser_addresses(deps)?),
        QueryMsg::OperatorInfo {} => to_json_binary(&query_operator_info(deps)?),
        QueryMsg::ContractVersion {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

pub fn migrate(deps: ModuleDeps, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
