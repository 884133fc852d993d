//! In-memory collaborators for exercising the module off-chain.
//!
//! `MockBank` is a map-backed ledger with send failure injection, used to
//! drive the recovery saga down its compensation paths. `TokenWrapperApp`
//! owns every handle the module needs and plays the role `App` plays for
//! contract tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use cosmwasm_std::testing::{mock_info, MockApi, MockStorage};
use cosmwasm_std::{from_json, Addr, Coin, Event, Response, StdError, StdResult, Uint128};
use serde::de::DeserializeOwned;

use common::{BankKeeper, IbcDenomTracer};

use crate::contract;
use crate::deps::{ModuleDeps, ModuleEnv, ModuleQueryDeps};
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, IbcSettings, InstantiateMsg, QueryMsg};
use crate::state::MODULE_NAME;

pub const MODULE_ADDRESS: &str = "zig1tokenwrapper";
pub const OPERATOR: &str = "zig1operator";
pub const PAUSER: &str = "zig1pauser";
pub const USER: &str = "zig1user";
pub const NATIVE_DENOM: &str = "uzig";

// ============================================================================
// Mock Bank
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct MockBank {
    balances: BTreeMap<Addr, BTreeMap<String, Uint128>>,
    module_accounts: HashMap<String, Addr>,
    blocked_denoms: BTreeSet<String>,
    sends_until_failure: Option<usize>,
}

impl MockBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a module name to its account, for mint and burn.
    pub fn register_module_account(&mut self, module: &str, address: &Addr) {
        self.module_accounts
            .insert(module.to_string(), address.clone());
    }

    /// Add `coins` to the balance of `addr`.
    pub fn init_balance(&mut self, addr: &Addr, coins: &[Coin]) {
        for coin in coins {
            let balance = self.entry(addr, &coin.denom);
            *balance += coin.amount;
        }
    }

    /// Overwrite the balance of one denom.
    pub fn set_balance(&mut self, addr: &Addr, coin: Coin) {
        *self.entry(addr, &coin.denom) = coin.amount;
    }

    pub fn balance_of(&self, addr: &Addr, denom: &str) -> Uint128 {
        self.balances
            .get(addr)
            .and_then(|denoms| denoms.get(denom))
            .copied()
            .unwrap_or_default()
    }

    /// Sum of `denom` over every account.
    pub fn supply_of(&self, denom: &str) -> Uint128 {
        self.balances
            .values()
            .filter_map(|denoms| denoms.get(denom))
            .fold(Uint128::zero(), |acc, amount| acc + *amount)
    }

    /// Every send touching `denom` fails until `enable_send` is called.
    pub fn disable_send(&mut self, denom: &str) {
        self.blocked_denoms.insert(denom.to_string());
    }

    pub fn enable_send(&mut self, denom: &str) {
        self.blocked_denoms.remove(denom);
    }

    /// Let the next `sends` calls through, then fail every later send.
    pub fn fail_sends_after(&mut self, sends: usize) {
        self.sends_until_failure = Some(sends);
    }

    pub fn clear_failures(&mut self) {
        self.blocked_denoms.clear();
        self.sends_until_failure = None;
    }

    fn entry(&mut self, addr: &Addr, denom: &str) -> &mut Uint128 {
        self.balances
            .entry(addr.clone())
            .or_default()
            .entry(denom.to_string())
            .or_default()
    }

    fn module_account(&self, module: &str) -> StdResult<Addr> {
        self.module_accounts
            .get(module)
            .cloned()
            .ok_or_else(|| StdError::not_found(format!("module account {module}")))
    }

    fn debit(&mut self, addr: &Addr, coins: &[Coin]) -> StdResult<()> {
        for coin in coins {
            let balance = self.balance_of(addr, &coin.denom);
            if balance < coin.amount {
                return Err(StdError::generic_err(format!(
                    "insufficient funds: {addr} has {balance}{}, needs {coin}",
                    coin.denom
                )));
            }
        }
        for coin in coins {
            *self.entry(addr, &coin.denom) -= coin.amount;
        }
        Ok(())
    }
}

impl BankKeeper for MockBank {
    fn has_balance(&self, addr: &Addr, coin: &Coin) -> bool {
        self.balance_of(addr, &coin.denom) >= coin.amount
    }

    fn get_balance(&self, addr: &Addr, denom: &str) -> Coin {
        Coin {
            denom: denom.to_string(),
            amount: self.balance_of(addr, denom),
        }
    }

    fn send_coins(&mut self, from: &Addr, to: &Addr, coins: &[Coin]) -> StdResult<()> {
        if let Some(remaining) = self.sends_until_failure.as_mut() {
            if *remaining == 0 {
                return Err(StdError::generic_err("bank: send failed"));
            }
            *remaining -= 1;
        }
        if let Some(coin) = coins
            .iter()
            .find(|coin| self.blocked_denoms.contains(&coin.denom))
        {
            return Err(StdError::generic_err(format!(
                "bank: sends of {} are disabled",
                coin.denom
            )));
        }

        self.debit(from, coins)?;
        self.init_balance(to, coins);
        Ok(())
    }

    fn mint_coins(&mut self, module: &str, coins: &[Coin]) -> StdResult<()> {
        let account = self.module_account(module)?;
        self.init_balance(&account, coins);
        Ok(())
    }

    fn burn_coins(&mut self, module: &str, coins: &[Coin]) -> StdResult<()> {
        let account = self.module_account(module)?;
        self.debit(&account, coins)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Settings of a counterparty asset with 18 decimals against 6 native ones.
pub fn mock_ibc_settings() -> IbcSettings {
    IbcSettings {
        native_client_id: "07-tendermint-0".to_string(),
        counterparty_client_id: "07-tendermint-12".to_string(),
        native_port: "transfer".to_string(),
        counterparty_port: "transfer".to_string(),
        native_channel: "channel-0".to_string(),
        counterparty_channel: "channel-42".to_string(),
        denom: "uzig".to_string(),
        decimal_difference: 12,
    }
}

pub fn mock_module_env() -> ModuleEnv {
    ModuleEnv::new(Addr::unchecked(MODULE_ADDRESS))
}

pub fn mock_instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        operator: OPERATOR.to_string(),
        pausers: vec![PAUSER.to_string()],
        native_denom: None,
        enabled: true,
        ibc_settings: Some(mock_ibc_settings()),
    }
}

/// Attribute value of `event`, if present.
pub fn event_attr<'a>(event: &'a Event, key: &str) -> Option<&'a str> {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
}

// ============================================================================
// App
// ============================================================================

pub struct TokenWrapperApp {
    pub storage: MockStorage,
    pub api: MockApi,
    pub bank: MockBank,
    pub tracer: IbcDenomTracer,
    pub events: Vec<Event>,
    pub env: ModuleEnv,
}

impl Default for TokenWrapperApp {
    fn default() -> Self {
        let env = mock_module_env();
        let mut bank = MockBank::new();
        bank.register_module_account(MODULE_NAME, &env.module_address);
        Self {
            storage: MockStorage::new(),
            api: MockApi::default(),
            bank,
            tracer: IbcDenomTracer,
            events: vec![],
            env,
        }
    }
}

impl TokenWrapperApp {
    /// App instantiated with `mock_instantiate_msg`.
    pub fn new() -> Self {
        let mut app = Self::default();
        app.instantiate(OPERATOR, mock_instantiate_msg())
            .expect("instantiate");
        app.events.clear();
        app
    }

    pub fn deps(&mut self) -> ModuleDeps<'_> {
        ModuleDeps {
            storage: &mut self.storage,
            api: &self.api,
            bank: &mut self.bank,
            tracer: &self.tracer,
            events: &mut self.events,
        }
    }

    pub fn query_deps(&self) -> ModuleQueryDeps<'_> {
        ModuleQueryDeps {
            storage: &self.storage,
            api: &self.api,
            bank: &self.bank,
            tracer: &self.tracer,
        }
    }

    pub fn instantiate(
        &mut self,
        sender: &str,
        msg: InstantiateMsg,
    ) -> Result<Response, ContractError> {
        let env = self.env.clone();
        contract::instantiate(self.deps(), &env, mock_info(sender, &[]), msg)
    }

    pub fn execute(&mut self, sender: &str, msg: ExecuteMsg) -> Result<Response, ContractError> {
        let env = self.env.clone();
        contract::execute(self.deps(), &env, mock_info(sender, &[]), msg)
    }

    pub fn query<T: DeserializeOwned>(&self, msg: QueryMsg) -> StdResult<T> {
        let bin = contract::query(self.query_deps(), &self.env, msg)?;
        from_json(bin)
    }

    pub fn module_address(&self) -> Addr {
        self.env.module_address.clone()
    }

    /// Voucher denom of the configured counterparty denom.
    pub fn voucher_denom(&self) -> String {
        crate::execute::resolve_voucher_denom(&self.storage, &self.tracer)
            .expect("ibc settings configured")
    }

    pub fn balance(&self, addr: &str, denom: &str) -> Uint128 {
        self.bank.balance_of(&Addr::unchecked(addr), denom)
    }

    pub fn module_balance(&self, denom: &str) -> Uint128 {
        self.bank.balance_of(&self.env.module_address, denom)
    }

    pub fn fund(&mut self, addr: &str, coins: &[Coin]) {
        self.bank.init_balance(&Addr::unchecked(addr), coins);
    }

    pub fn fund_module(&mut self, coins: &[Coin]) {
        let module = self.env.module_address.clone();
        self.bank.init_balance(&module, coins);
    }

    /// Events emitted so far with type `ty`.
    pub fn events_of(&self, ty: &str) -> Vec<&Event> {
        self.events.iter().filter(|event| event.ty == ty).collect()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
