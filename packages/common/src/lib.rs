//! Common - Collaborator Interfaces for the Token Wrapper Module
//!
//! The token wrapper never owns balances, never relays packets and never
//! publishes events itself. It talks to the surrounding chain through the
//! three interfaces defined here:
//!
//! - [`BankKeeper`] - the multi-asset balance ledger
//! - [`DenomTracer`] - derivation of IBC voucher denoms
//! - [`EventSink`] - fire-and-forget event publication

pub mod denom;
pub mod events;
pub mod ledger;

pub use denom::{DenomTracer, IbcDenomTracer};
pub use events::EventSink;
pub use ledger::BankKeeper;
