//! Execute handlers for the token wrapper module.
//!
//! This module contains all execute message handlers, organized by category:
//! - `roles` - Operator rotation, pausers, enable/disable and the guards
//! - `custody` - Lock/unlock/burn primitives, module wallet, transfer counters
//! - `recovery` - Voucher to native conversion saga (RecoverZig, UnwrapIncoming)
//! - `settings` - IBC settings registry

mod custody;
mod recovery;
mod roles;
mod settings;

pub use custody::*;
pub use recovery::*;
pub use roles::*;
pub use settings::*;

use cosmwasm_std::Event;

use crate::state::MODULE_NAME;

/// Domain event tagged with the module name.
pub(crate) fn module_event(ty: &str) -> Event {
    Event::new(ty).add_attribute("module", MODULE_NAME)
}

/// Render coins as `100uzig,5ibc/...` for event attributes.
pub(crate) fn coins_to_string(coins: &[cosmwasm_std::Coin]) -> String {
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
