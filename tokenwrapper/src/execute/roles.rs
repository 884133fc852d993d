//! Role registry handlers and authorization guards.
//!
//! This module handles:
//! - Operator rotation (propose/claim)
//! - Pauser management (add/remove, both idempotent)
//! - Enable (operator) / disable (operator or pauser)

use cosmwasm_std::{Addr, MessageInfo, Response, Storage};

use crate::deps::ModuleDeps;
use crate::error::ContractError;
use crate::execute::module_event;
use crate::state::{load_enabled, load_pausers, ENABLED, OPERATOR, PAUSERS, PROPOSED_OPERATOR};
use crate::validation::validate_address;

// ============================================================================
// Guards
// ============================================================================

/// Signer must be the current operator. Returns the operator.
pub fn assert_operator(storage: &dyn Storage, signer: &Addr) -> Result<Addr, ContractError> {
    let operator = OPERATOR.load(storage)?;
    if *signer != operator {
        return Err(ContractError::unauthorized(signer, "operator"));
    }
    Ok(operator)
}

/// Signer must be the operator or a pauser.
pub fn assert_operator_or_pauser(storage: &dyn Storage, signer: &Addr) -> Result<(), ContractError> {
    let operator = OPERATOR.load(storage)?;
    if *signer == operator {
        return Ok(());
    }
    if load_pausers(storage)?.contains(signer) {
        return Ok(());
    }
    Err(ContractError::unauthorized(signer, "operator or a pauser"))
}

/// Module must be enabled.
pub fn assert_enabled(storage: &dyn Storage) -> Result<(), ContractError> {
    if !load_enabled(storage)? {
        return Err(ContractError::ModuleDisabled);
    }
    Ok(())
}

// ============================================================================
// Operator Rotation
// ============================================================================

/// Propose a new operator. Replaces any pending proposal.
pub fn execute_propose_operator(
    deps: ModuleDeps,
    info: MessageInfo,
    new_operator: String,
) -> Result<Response, ContractError> {
    let operator = assert_operator(deps.storage, &info.sender)?;

    let candidate = validate_address(deps.api, "new_operator", &new_operator)?;
    if candidate == operator {
        return Err(ContractError::SameAddress {
            address: candidate.to_string(),
        });
    }

    PROPOSED_OPERATOR.save(deps.storage, &candidate)?;

    deps.events.emit(
        module_event("operator_proposed")
            .add_attribute("old_operator", operator.as_str())
            .add_attribute("new_operator", candidate.as_str()),
    );

    Ok(Response::new()
        .add_attribute("method", "propose_operator_address")
        .add_attribute("new_operator", candidate))
}

/// Claim the operator role (proposed operator only).
pub fn execute_claim_operator(
    deps: ModuleDeps,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let candidate = PROPOSED_OPERATOR
        .may_load(deps.storage)?
        .ok_or(ContractError::NoProposal)?;

    if info.sender != candidate {
        return Err(ContractError::unauthorized(&info.sender, "proposed operator"));
    }

    let old_operator = OPERATOR.load(deps.storage)?;
    OPERATOR.save(deps.storage, &candidate)?;
    PROPOSED_OPERATOR.remove(deps.storage);

    deps.events.emit(
        module_event("operator_claimed")
            .add_attribute("old_operator", old_operator.as_str())
            .add_attribute("new_operator", candidate.as_str()),
    );

    Ok(Response::new()
        .add_attribute("method", "claim_operator_address")
        .add_attribute("operator", candidate))
}

// ============================================================================
// Pauser Management
// ============================================================================

/// Add a pauser. Adding an existing pauser succeeds.
pub fn execute_add_pauser(
    deps: ModuleDeps,
    info: MessageInfo,
    new_pauser: String,
) -> Result<Response, ContractError> {
    assert_operator(deps.storage, &info.sender)?;

    let pauser = validate_address(deps.api, "new_pauser", &new_pauser)?;
    let mut pausers = load_pausers(deps.storage)?;
    pausers.insert(pauser.clone());
    PAUSERS.save(deps.storage, &pausers)?;

    deps.events.emit(
        module_event("pauser_added")
            .add_attribute("signer", info.sender.as_str())
            .add_attribute("pauser", pauser.as_str()),
    );

    Ok(Response::new()
        .add_attribute("method", "add_pauser_address")
        .add_attribute("pauser", pauser))
}

/// Remove a pauser. Removing a non-member succeeds.
pub fn execute_remove_pauser(
    deps: ModuleDeps,
    info: MessageInfo,
    pauser: String,
) -> Result<Response, ContractError> {
    assert_operator(deps.storage, &info.sender)?;

    let pauser = validate_address(deps.api, "pauser", &pauser)?;
    let mut pausers = load_pausers(deps.storage)?;
    pausers.remove(&pauser);
    PAUSERS.save(deps.storage, &pausers)?;

    deps.events.emit(
        module_event("pauser_removed")
            .add_attribute("signer", info.sender.as_str())
            .add_attribute("pauser", pauser.as_str()),
    );

    Ok(Response::new()
        .add_attribute("method", "remove_pauser_address")
        .add_attribute("pauser", pauser))
}

// ============================================================================
// Enable / Disable
// ============================================================================

/// Enable the module (operator only). Enabling twice is a no-op.
pub fn execute_enable(deps: ModuleDeps, info: MessageInfo) -> Result<Response, ContractError> {
    assert_operator(deps.storage, &info.sender)?;

    ENABLED.save(deps.storage, &true)?;

    deps.events.emit(
        module_event("module_enabled").add_attribute("signer", info.sender.as_str()),
    );

    Ok(Response::new().add_attribute("method", "enable_token_wrapper"))
}

/// Disable the module (operator or pauser). Pausers cannot re-enable.
pub fn execute_disable(deps: ModuleDeps, info: MessageInfo) -> Result<Response, ContractError> {
    assert_operator_or_pauser(deps.storage, &info.sender)?;

    ENABLED.save(deps.storage, &false)?;

    deps.events.emit(
        module_event("module_disabled").add_attribute("signer", info.sender.as_str()),
    );

    Ok(Response::new().add_attribute("method", "disable_token_wrapper"))
}
