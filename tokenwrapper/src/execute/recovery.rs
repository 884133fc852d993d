//! Voucher to native conversion.
//!
//! `RecoverZig` and `UnwrapIncoming` share one two-step saga:
//!
//! 1. lock the vouchers from the target into custody
//! 2. unlock the equivalent native amount from custody to the target
//!
//! The two ledger calls are not atomic. If step 2 fails, step 1 is reversed
//! once; a failed reversal is logged and reported on the failure event, and
//! the caller always receives the step 2 error.

use cosmwasm_std::{to_json_binary, Addr, Coin, MessageInfo, Response, Storage, Uint128};

use common::DenomTracer;

use crate::deps::{ModuleDeps, ModuleEnv};
use crate::error::ContractError;
use crate::execute::{
    add_to_total_transferred_in, assert_enabled, check_account_balance, check_module_balance,
    lock, module_event, unlock,
};
use crate::msg::RecoverZigResponse;
use crate::precision::scale_down_stored;
use crate::state::{load_native_denom, DENOM, NATIVE_CHANNEL, NATIVE_PORT, OPERATOR};
use crate::validation::validate_address;

/// Coins moved by one saga execution. Never persisted.
#[derive(Debug, Clone, PartialEq)]
struct CustodyIntent {
    locked_voucher: Coin,
    target_native: Coin,
}

/// Voucher denom of the configured counterparty denom on this chain.
pub fn resolve_voucher_denom(
    storage: &dyn Storage,
    tracer: &dyn DenomTracer,
) -> Result<String, ContractError> {
    let port = NATIVE_PORT.may_load(storage)?.unwrap_or_default();
    let channel = NATIVE_CHANNEL.may_load(storage)?.unwrap_or_default();
    let denom = DENOM.may_load(storage)?.unwrap_or_default();

    for (field, value) in [("native_port", &port), ("native_channel", &channel), ("denom", &denom)] {
        if value.is_empty() {
            return Err(ContractError::IbcSettingsNotConfigured {
                field: field.to_string(),
            });
        }
    }

    Ok(tracer.derive_voucher_denom(&port, &channel, &denom))
}

/// Custody cannot convert its own vouchers: both legs would be self-transfers.
fn assert_not_custody(env: &ModuleEnv, target: &Addr) -> Result<(), ContractError> {
    if *target == env.module_address {
        return Err(ContractError::RecoveryNotAllowedOnModule {
            address: target.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// RecoverZig - Anyone
// ============================================================================

/// Convert every voucher held by `address` back to native tokens.
pub fn execute_recover_zig(
    mut deps: ModuleDeps,
    env: &ModuleEnv,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let (target, intent) = match recover_zig(deps.branch(), env, &address) {
        Ok(recovered) => recovered,
        Err(err) => {
            deps.events.emit(
                module_event("recover_zig_failed")
                    .add_attribute("signer", info.sender.as_str())
                    .add_attribute("address", &address)
                    .add_attribute("error", err.to_string()),
            );
            return Err(err);
        }
    };

    deps.events.emit(
        module_event("zig_recovered")
            .add_attribute("signer", info.sender.as_str())
            .add_attribute("address", target.as_str())
            .add_attribute("locked_tokens", intent.locked_voucher.to_string())
            .add_attribute("unlocked_tokens", intent.target_native.to_string()),
    );

    let data = RecoverZigResponse {
        address: target,
        locked_tokens: intent.locked_voucher,
        unlocked_tokens: intent.target_native,
    };

    Ok(Response::new()
        .add_attribute("method", "recover_zig")
        .add_attribute("address", data.address.as_str())
        .add_attribute("unlocked_tokens", data.unlocked_tokens.to_string())
        .set_data(to_json_binary(&data)?))
}

fn recover_zig(
    deps: ModuleDeps,
    env: &ModuleEnv,
    address: &str,
) -> Result<(Addr, CustodyIntent), ContractError> {
    assert_enabled(deps.storage)?;

    let target = validate_address(deps.api, "address", address)?;
    let operator = OPERATOR.load(deps.storage)?;
    if target == operator {
        return Err(ContractError::RecoveryNotAllowedOnOperator {
            address: target.to_string(),
        });
    }
    assert_not_custody(env, &target)?;

    let voucher_denom = resolve_voucher_denom(deps.storage, deps.tracer)?;
    let voucher = deps.bank.get_balance(&target, &voucher_denom);
    if voucher.amount.is_zero() {
        return Err(ContractError::NoVouchersAvailable {
            address: target.to_string(),
            denom: voucher_denom,
        });
    }

    let intent = convert_vouchers_to_native(deps, env, &target, voucher)?;
    Ok((target, intent))
}

// ============================================================================
// UnwrapIncoming - Anyone
// ============================================================================

/// Convert `amount` of the sender's vouchers to native tokens.
pub fn execute_unwrap_incoming(
    mut deps: ModuleDeps,
    env: &ModuleEnv,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let intent = match unwrap_incoming(deps.branch(), env, &info.sender, amount) {
        Ok(intent) => intent,
        Err(err) => {
            deps.events.emit(
                module_event("unwrap_incoming_failed")
                    .add_attribute("receiver", info.sender.as_str())
                    .add_attribute("amount", amount.to_string())
                    .add_attribute("error", err.to_string()),
            );
            return Err(err);
        }
    };

    deps.events.emit(
        module_event("vouchers_unwrapped")
            .add_attribute("receiver", info.sender.as_str())
            .add_attribute("locked_tokens", intent.locked_voucher.to_string())
            .add_attribute("unlocked_tokens", intent.target_native.to_string()),
    );

    let data = RecoverZigResponse {
        address: info.sender,
        locked_tokens: intent.locked_voucher,
        unlocked_tokens: intent.target_native,
    };

    Ok(Response::new()
        .add_attribute("method", "unwrap_incoming")
        .add_attribute("unlocked_tokens", data.unlocked_tokens.to_string())
        .set_data(to_json_binary(&data)?))
}

fn unwrap_incoming(
    deps: ModuleDeps,
    env: &ModuleEnv,
    receiver: &Addr,
    amount: Uint128,
) -> Result<CustodyIntent, ContractError> {
    assert_enabled(deps.storage)?;
    assert_not_custody(env, receiver)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "voucher amount must be positive".to_string(),
        });
    }

    let voucher = Coin {
        denom: resolve_voucher_denom(deps.storage, deps.tracer)?,
        amount,
    };

    convert_vouchers_to_native(deps, env, receiver, voucher)
}

// ============================================================================
// Saga
// ============================================================================

fn convert_vouchers_to_native(
    deps: ModuleDeps,
    env: &ModuleEnv,
    target: &Addr,
    voucher: Coin,
) -> Result<CustodyIntent, ContractError> {
    let native_amount = scale_down_stored(deps.storage, voucher.amount)?;
    let intent = CustodyIntent {
        target_native: Coin {
            denom: load_native_denom(deps.storage)?,
            amount: native_amount,
        },
        locked_voucher: voucher,
    };

    check_account_balance(&*deps.bank, target, std::slice::from_ref(&intent.locked_voucher))?;
    check_module_balance(&*deps.bank, env, std::slice::from_ref(&intent.target_native))?;

    lock(
        deps.bank,
        env,
        target,
        std::slice::from_ref(&intent.locked_voucher),
    )?;

    if let Err(unlock_err) = unlock(
        deps.bank,
        env,
        target,
        std::slice::from_ref(&intent.target_native),
    ) {
        let reverted = unlock(
            deps.bank,
            env,
            target,
            std::slice::from_ref(&intent.locked_voucher),
        );

        let mut event = module_event("voucher_lock_reverted")
            .add_attribute("address", target.as_str())
            .add_attribute("locked_tokens", intent.locked_voucher.to_string())
            .add_attribute("cause", unlock_err.to_string())
            .add_attribute("reverted", reverted.is_ok().to_string());
        if let Err(revert_err) = reverted {
            deps.api.debug(&format!(
                "tokenwrapper: failed to return {} to {} after unlock failure: {}",
                intent.locked_voucher, target, revert_err
            ));
            event = event.add_attribute("revert_error", revert_err.to_string());
        }
        deps.events.emit(event);

        return Err(ContractError::UnlockFailed {
            address: target.to_string(),
            source: Box::new(unlock_err),
        });
    }

    add_to_total_transferred_in(deps.storage, native_amount)?;

    Ok(intent)
}
