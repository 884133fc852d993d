//! Balance ledger interface.
//!
//! Every amount is a non-negative integer paired with a string denom
//! (`cosmwasm_std::Coin`). Implementations must apply each call atomically:
//! a failed `send_coins` leaves every balance untouched.

use cosmwasm_std::{Addr, Coin, StdResult};

/// Multi-asset balance ledger consumed by the module.
pub trait BankKeeper {
    /// Whether `addr` holds at least `coin.amount` of `coin.denom`.
    fn has_balance(&self, addr: &Addr, coin: &Coin) -> bool;

    /// Current balance of `denom` held by `addr` (zero amount if none).
    fn get_balance(&self, addr: &Addr, denom: &str) -> Coin;

    /// Move `coins` from `from` to `to`.
    fn send_coins(&mut self, from: &Addr, to: &Addr, coins: &[Coin]) -> StdResult<()>;

    /// Create `coins` in the account of module `module`.
    fn mint_coins(&mut self, module: &str, coins: &[Coin]) -> StdResult<()>;

    /// Destroy `coins` held by module `module`.
    fn burn_coins(&mut self, module: &str, coins: &[Coin]) -> StdResult<()>;

    /// Balances of several denoms at once, in the order requested.
    fn get_balances(&self, addr: &Addr, denoms: &[&str]) -> Vec<Coin> {
        denoms
            .iter()
            .map(|denom| self.get_balance(addr, denom))
            .collect()
    }
}
