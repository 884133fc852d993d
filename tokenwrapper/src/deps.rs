//! Explicit handles threaded through every operation.
//!
//! `ModuleDeps` plays the role `DepsMut` plays for a contract: it bundles the
//! key/value store with the external collaborators. Nothing in the module
//! reaches state through globals.

use cosmwasm_std::{Addr, Api, Storage};

use common::{BankKeeper, DenomTracer, EventSink};

use crate::state::MODULE_NAME;

/// Mutable handle for state transitions
pub struct ModuleDeps<'a> {
    pub storage: &'a mut dyn Storage,
    /// Address codec and debug logging
    pub api: &'a dyn Api,
    pub bank: &'a mut dyn BankKeeper,
    pub tracer: &'a dyn DenomTracer,
    pub events: &'a mut dyn EventSink,
}

impl<'a> ModuleDeps<'a> {
    /// Reborrow for a nested call without giving up the handle.
    pub fn branch(&mut self) -> ModuleDeps<'_> {
        ModuleDeps {
            storage: &mut *self.storage,
            api: self.api,
            bank: &mut *self.bank,
            tracer: self.tracer,
            events: &mut *self.events,
        }
    }

    pub fn as_query(&self) -> ModuleQueryDeps<'_> {
        ModuleQueryDeps {
            storage: &*self.storage,
            api: self.api,
            bank: &*self.bank,
            tracer: self.tracer,
        }
    }
}

/// Read-only handle for queries
#[derive(Clone, Copy)]
pub struct ModuleQueryDeps<'a> {
    pub storage: &'a dyn Storage,
    pub api: &'a dyn Api,
    pub bank: &'a dyn BankKeeper,
    pub tracer: &'a dyn DenomTracer,
}

/// Module identity within the chain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleEnv {
    /// Name used for bank mint/burn calls
    pub module_name: String,
    /// Custody account address
    pub module_address: Addr,
}

impl ModuleEnv {
    pub fn new(module_address: Addr) -> Self {
        Self {
            module_name: MODULE_NAME.to_string(),
            module_address,
        }
    }
}
