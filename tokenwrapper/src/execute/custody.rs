//! Custody accounting.
//!
//! Every movement of the custody account's balance goes through `lock`,
//! `unlock` or `burn`; each checks the paying side before calling the ledger.

use cosmwasm_std::{to_json_binary, Addr, Coin, MessageInfo, Response, Storage, Uint128, Uint256};
use cw_storage_plus::Item;

use common::BankKeeper;

use crate::deps::{ModuleDeps, ModuleEnv};
use crate::error::ContractError;
use crate::execute::{
    assert_enabled, assert_operator, coins_to_string, module_event, resolve_voucher_denom,
};
use crate::msg::{ModuleWalletResponse, WrapOutgoingResponse};
use crate::precision::scale_up_stored;
use crate::state::{load_counter, load_native_denom, TOTAL_TRANSFERRED_IN, TOTAL_TRANSFERRED_OUT};
use crate::validation::validate_coins;

// ============================================================================
// Balance Checks
// ============================================================================

/// `account` must hold every coin in `coins`.
pub fn check_account_balance(
    bank: &dyn BankKeeper,
    account: &Addr,
    coins: &[Coin],
) -> Result<(), ContractError> {
    for coin in coins {
        if !bank.has_balance(account, coin) {
            return Err(ContractError::InsufficientBalance {
                account: account.to_string(),
                denom: coin.denom.clone(),
                amount: coin.amount,
            });
        }
    }
    Ok(())
}

/// The custody account must hold every coin in `coins`.
pub fn check_module_balance(
    bank: &dyn BankKeeper,
    env: &ModuleEnv,
    coins: &[Coin],
) -> Result<(), ContractError> {
    check_account_balance(bank, &env.module_address, coins)
}

// ============================================================================
// Primitives
// ============================================================================

/// Move `coins` from `account` into custody.
pub fn lock(
    bank: &mut dyn BankKeeper,
    env: &ModuleEnv,
    account: &Addr,
    coins: &[Coin],
) -> Result<(), ContractError> {
    check_account_balance(&*bank, account, coins)?;
    bank.send_coins(account, &env.module_address, coins)?;
    Ok(())
}

/// Move `coins` from custody to `account`.
pub fn unlock(
    bank: &mut dyn BankKeeper,
    env: &ModuleEnv,
    account: &Addr,
    coins: &[Coin],
) -> Result<(), ContractError> {
    check_module_balance(&*bank, env, coins)?;
    bank.send_coins(&env.module_address, account, coins)?;
    Ok(())
}

/// Destroy `coins` held in custody.
pub fn burn(bank: &mut dyn BankKeeper, env: &ModuleEnv, coins: &[Coin]) -> Result<(), ContractError> {
    check_module_balance(&*bank, env, coins)?;
    bank.burn_coins(&env.module_name, coins)?;
    Ok(())
}

// ============================================================================
// Transfer Counters
// ============================================================================

fn add_to_counter(
    storage: &mut dyn Storage,
    counter: &Item<Uint256>,
    amount: Uint128,
) -> Result<Uint256, ContractError> {
    let total = load_counter(storage, counter)?
        .checked_add(Uint256::from(amount))
        .map_err(cosmwasm_std::StdError::from)?;
    counter.save(storage, &total)?;
    Ok(total)
}

pub fn add_to_total_transferred_in(
    storage: &mut dyn Storage,
    amount: Uint128,
) -> Result<Uint256, ContractError> {
    add_to_counter(storage, &TOTAL_TRANSFERRED_IN, amount)
}

pub fn add_to_total_transferred_out(
    storage: &mut dyn Storage,
    amount: Uint128,
) -> Result<Uint256, ContractError> {
    add_to_counter(storage, &TOTAL_TRANSFERRED_OUT, amount)
}

// ============================================================================
// Module Wallet
// ============================================================================

/// Move coins from the operator into custody.
pub fn execute_fund_module_wallet(
    deps: ModuleDeps,
    env: &ModuleEnv,
    info: MessageInfo,
    amount: Vec<Coin>,
) -> Result<Response, ContractError> {
    let operator = assert_operator(deps.storage, &info.sender)?;
    validate_coins(&amount)?;

    lock(deps.bank, env, &operator, &amount)?;

    let wallet = wallet_response(&*deps.bank, env, operator, amount);
    deps.events.emit(wallet_event("module_wallet_funded", &wallet));

    Ok(Response::new()
        .add_attribute("method", "fund_module_wallet")
        .add_attribute("amount", coins_to_string(&wallet.amount))
        .set_data(to_json_binary(&wallet)?))
}

/// Move coins from custody to the operator.
pub fn execute_withdraw_from_module_wallet(
    deps: ModuleDeps,
    env: &ModuleEnv,
    info: MessageInfo,
    amount: Vec<Coin>,
) -> Result<Response, ContractError> {
    let operator = assert_operator(deps.storage, &info.sender)?;
    validate_coins(&amount)?;

    unlock(deps.bank, env, &operator, &amount)?;

    let wallet = wallet_response(&*deps.bank, env, operator, amount);
    deps.events.emit(wallet_event("module_wallet_withdrawn", &wallet));

    Ok(Response::new()
        .add_attribute("method", "withdraw_from_module_wallet")
        .add_attribute("amount", coins_to_string(&wallet.amount))
        .set_data(to_json_binary(&wallet)?))
}

fn wallet_response(
    bank: &dyn BankKeeper,
    env: &ModuleEnv,
    signer: Addr,
    amount: Vec<Coin>,
) -> ModuleWalletResponse {
    let denoms: Vec<&str> = amount.iter().map(|c| c.denom.as_str()).collect();
    let module_balances = bank.get_balances(&env.module_address, &denoms);
    let signer_balances = bank.get_balances(&signer, &denoms);
    ModuleWalletResponse {
        signer,
        module_address: env.module_address.clone(),
        amount,
        module_balances,
        signer_balances,
    }
}

fn wallet_event(ty: &str, wallet: &ModuleWalletResponse) -> cosmwasm_std::Event {
    module_event(ty)
        .add_attribute("signer", wallet.signer.as_str())
        .add_attribute("module_address", wallet.module_address.as_str())
        .add_attribute("amount", coins_to_string(&wallet.amount))
        .add_attribute("balances", coins_to_string(&wallet.module_balances))
        .add_attribute("signer_balances", coins_to_string(&wallet.signer_balances))
}

// ============================================================================
// Outgoing Transfers
// ============================================================================

/// Lock the sender's native tokens for an outgoing transfer.
///
/// Returns the amount the counterparty credits in voucher precision.
pub fn execute_wrap_outgoing(
    deps: ModuleDeps,
    env: &ModuleEnv,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_enabled(deps.storage)?;
    // The decimal difference is only meaningful once the route is configured
    let voucher_denom = resolve_voucher_denom(deps.storage, deps.tracer)?;

    let native_denom = load_native_denom(deps.storage)?;
    let locked = Coin {
        denom: native_denom,
        amount,
    };
    validate_coins(std::slice::from_ref(&locked))?;
    let wrapped_amount = scale_up_stored(deps.storage, amount)?;

    lock(deps.bank, env, &info.sender, std::slice::from_ref(&locked))?;
    let total = add_to_total_transferred_out(deps.storage, amount)?;

    deps.events.emit(
        module_event("native_locked_for_transfer")
            .add_attribute("sender", info.sender.as_str())
            .add_attribute("locked_amount", locked.to_string())
            .add_attribute("wrapped_amount", wrapped_amount.to_string())
            .add_attribute("voucher_denom", voucher_denom)
            .add_attribute("total_transferred_out", total.to_string()),
    );

    let data = WrapOutgoingResponse {
        sender: info.sender,
        locked_tokens: locked,
        wrapped_amount,
    };

    Ok(Response::new()
        .add_attribute("method", "wrap_outgoing")
        .add_attribute("wrapped_amount", wrapped_amount.to_string())
        .set_data(to_json_binary(&data)?))
}
