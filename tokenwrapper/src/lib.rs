//! Token Wrapper Module - Native/Voucher Custody for the ZIG IBC Bridge
//!
//! The module escrows native ZIG and IBC vouchers in a module-owned custody
//! account and converts between the two representations using the configured
//! decimal difference.
//!
//! # Roles
//! - Operator: configures IBC settings, funds/defunds custody, manages pausers.
//!   Rotated in two phases (propose, then claim by the candidate).
//! - Pausers: may only disable the module.
//!
//! # Recovery
//! Vouchers stranded in a user account (e.g. after a failed unwrap) are
//! converted back to native tokens by `RecoverZig`: the vouchers are locked
//! into custody, the equivalent native amount is unlocked to the user, and the
//! lock is reversed if the unlock fails.
//!
//! # Collaborators
//! The balance ledger, denom tracer and event sink are external; see the
//! `common` package for their interfaces.

pub mod contract;
pub mod deps;
pub mod error;
mod execute;
pub mod msg;
pub mod precision;
mod query;
pub mod state;
#[cfg(not(target_arch = "wasm32"))]
pub mod testing;
pub mod validation;

pub use crate::deps::{ModuleDeps, ModuleEnv, ModuleQueryDeps};
pub use crate::error::ContractError;
pub use crate::execute::{
    burn, check_account_balance, check_module_balance, lock, resolve_voucher_denom, unlock,
};
pub use crate::precision::{scale_down, scale_up, MAX_DECIMAL_DIFFERENCE};
