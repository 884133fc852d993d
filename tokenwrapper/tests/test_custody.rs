//! Custody Accounting Tests.
//!
//! Tests the module wallet (fund/withdraw) and the outgoing lock path:
//! - Operator-only access and amount validation
//! - Resulting balances reported as data and on events
//! - Outgoing transfer counter

use cosmwasm_std::{coin, coins, from_json, Uint128, Uint256};

use tokenwrapper::msg::{
    ExecuteMsg, InstantiateMsg, ModuleWalletResponse, QueryMsg, TotalTransfersResponse,
    WrapOutgoingResponse,
};
use tokenwrapper::testing::{
    event_attr, mock_instantiate_msg, TokenWrapperApp, NATIVE_DENOM, OPERATOR, PAUSER, USER,
};
use tokenwrapper::ContractError;

const OPERATOR_FUNDS: u128 = 50_000_000;

// ============================================================================
// Test Setup
// ============================================================================

fn setup() -> TokenWrapperApp {
    let mut app = TokenWrapperApp::new();
    app.fund(OPERATOR, &coins(OPERATOR_FUNDS, NATIVE_DENOM));
    app.fund(USER, &coins(5_000_000, NATIVE_DENOM));
    app
}

fn totals(app: &TokenWrapperApp) -> TotalTransfersResponse {
    app.query(QueryMsg::TotalTransfers {}).unwrap()
}

// ============================================================================
// Module Wallet
// ============================================================================

#[test]
fn test_fund_module_wallet() {
    let mut app = setup();

    let res = app
        .execute(
            OPERATOR,
            ExecuteMsg::FundModuleWallet {
                amount: coins(10_000_000, NATIVE_DENOM),
            },
        )
        .unwrap();

    assert_eq!(app.module_balance(NATIVE_DENOM), Uint128::new(10_000_000));
    assert_eq!(
        app.balance(OPERATOR, NATIVE_DENOM),
        Uint128::new(OPERATOR_FUNDS - 10_000_000)
    );

    let data: ModuleWalletResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.signer.as_str(), OPERATOR);
    assert_eq!(data.module_address, app.module_address());
    assert_eq!(data.module_balances, coins(10_000_000, NATIVE_DENOM));
    assert_eq!(
        data.signer_balances,
        coins(OPERATOR_FUNDS - 10_000_000, NATIVE_DENOM)
    );

    let funded = app.events_of("module_wallet_funded");
    assert_eq!(funded.len(), 1);
    assert_eq!(event_attr(funded[0], "module"), Some("tokenwrapper"));
    assert_eq!(event_attr(funded[0], "amount"), Some("10000000uzig"));
    assert_eq!(event_attr(funded[0], "balances"), Some("10000000uzig"));
}

#[test]
fn test_fund_module_wallet_multiple_denoms() {
    let mut app = setup();
    let voucher = app.voucher_denom();
    app.fund(OPERATOR, &[coin(3_000, &voucher)]);

    let res = app
        .execute(
            OPERATOR,
            ExecuteMsg::FundModuleWallet {
                amount: vec![coin(1_000, NATIVE_DENOM), coin(2_000, &voucher)],
            },
        )
        .unwrap();

    let data: ModuleWalletResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(
        data.module_balances,
        vec![coin(1_000, NATIVE_DENOM), coin(2_000, &voucher)]
    );
    assert_eq!(app.balance(OPERATOR, &voucher), Uint128::new(1_000));
}

#[test]
fn test_fund_module_wallet_operator_only() {
    let mut app = setup();

    for sender in [PAUSER, USER] {
        let err = app
            .execute(
                sender,
                ExecuteMsg::FundModuleWallet {
                    amount: coins(1, NATIVE_DENOM),
                },
            )
            .unwrap_err();
        assert_eq!(err, ContractError::unauthorized(sender, "operator"));
    }
    assert!(app.module_balance(NATIVE_DENOM).is_zero());
}

#[test]
fn test_fund_module_wallet_insufficient_funds() {
    let mut app = setup();

    let err = app
        .execute(
            OPERATOR,
            ExecuteMsg::FundModuleWallet {
                amount: coins(OPERATOR_FUNDS + 1, NATIVE_DENOM),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            account: OPERATOR.to_string(),
            denom: NATIVE_DENOM.to_string(),
            amount: Uint128::new(OPERATOR_FUNDS + 1),
        }
    );
    assert!(app.events_of("module_wallet_funded").is_empty());
}

#[test]
fn test_module_wallet_rejects_empty_and_zero_amounts() {
    let mut app = setup();

    let err = app
        .execute(OPERATOR, ExecuteMsg::FundModuleWallet { amount: vec![] })
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAmount { .. }));

    let err = app
        .execute(
            OPERATOR,
            ExecuteMsg::WithdrawFromModuleWallet {
                amount: coins(0, NATIVE_DENOM),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAmount { .. }));
}

#[test]
fn test_withdraw_from_module_wallet() {
    let mut app = setup();
    app.execute(
        OPERATOR,
        ExecuteMsg::FundModuleWallet {
            amount: coins(10_000_000, NATIVE_DENOM),
        },
    )
    .unwrap();

    let res = app
        .execute(
            OPERATOR,
            ExecuteMsg::WithdrawFromModuleWallet {
                amount: coins(4_000_000, NATIVE_DENOM),
            },
        )
        .unwrap();

    let data: ModuleWalletResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.module_balances, coins(6_000_000, NATIVE_DENOM));
    assert_eq!(
        data.signer_balances,
        coins(OPERATOR_FUNDS - 6_000_000, NATIVE_DENOM)
    );

    let withdrawn = app.events_of("module_wallet_withdrawn");
    assert_eq!(withdrawn.len(), 1);
    assert_eq!(event_attr(withdrawn[0], "signer"), Some(OPERATOR));
}

#[test]
fn test_withdraw_more_than_custody() {
    let mut app = setup();
    app.fund_module(&coins(100, NATIVE_DENOM));

    let err = app
        .execute(
            OPERATOR,
            ExecuteMsg::WithdrawFromModuleWallet {
                amount: coins(101, NATIVE_DENOM),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            account: app.module_address().to_string(),
            denom: NATIVE_DENOM.to_string(),
            amount: Uint128::new(101),
        }
    );
    assert_eq!(app.module_balance(NATIVE_DENOM), Uint128::new(100));
}

#[test]
fn test_withdraw_operator_only() {
    let mut app = setup();
    app.fund_module(&coins(100, NATIVE_DENOM));

    let err = app
        .execute(
            PAUSER,
            ExecuteMsg::WithdrawFromModuleWallet {
                amount: coins(100, NATIVE_DENOM),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::unauthorized(PAUSER, "operator"));
}

#[test]
fn test_module_wallet_works_while_disabled() {
    let mut app = setup();
    app.execute(PAUSER, ExecuteMsg::DisableTokenWrapper {})
        .unwrap();

    app.execute(
        OPERATOR,
        ExecuteMsg::FundModuleWallet {
            amount: coins(1_000, NATIVE_DENOM),
        },
    )
    .unwrap();
    app.execute(
        OPERATOR,
        ExecuteMsg::WithdrawFromModuleWallet {
            amount: coins(1_000, NATIVE_DENOM),
        },
    )
    .unwrap();
}

// ============================================================================
// Outgoing Transfers
// ============================================================================

#[test]
fn test_wrap_outgoing_locks_and_scales_up() {
    let mut app = setup();

    let res = app
        .execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::new(1_000_000),
            },
        )
        .unwrap();

    let data: WrapOutgoingResponse = from_json(res.data.unwrap()).unwrap();
    assert_eq!(data.sender.as_str(), USER);
    assert_eq!(data.locked_tokens, coin(1_000_000, NATIVE_DENOM));
    assert_eq!(data.wrapped_amount, Uint128::new(1_000_000_000_000_000_000));

    assert_eq!(app.balance(USER, NATIVE_DENOM), Uint128::new(4_000_000));
    assert_eq!(app.module_balance(NATIVE_DENOM), Uint128::new(1_000_000));
    assert_eq!(totals(&app).total_transferred_out, Uint256::from(1_000_000u128));
    assert!(totals(&app).total_transferred_in.is_zero());

    let locked = app.events_of("native_locked_for_transfer");
    assert_eq!(locked.len(), 1);
    assert_eq!(
        event_attr(locked[0], "wrapped_amount"),
        Some("1000000000000000000")
    );
    assert_eq!(
        event_attr(locked[0], "voucher_denom"),
        Some(app.voucher_denom().as_str())
    );
}

#[test]
fn test_wrap_outgoing_accumulates_counter() {
    let mut app = setup();

    for _ in 0..3 {
        app.execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::new(250_000),
            },
        )
        .unwrap();
    }
    assert_eq!(totals(&app).total_transferred_out, Uint256::from(750_000u128));
}

#[test]
fn test_wrap_outgoing_rejections() {
    let mut app = setup();

    let err = app
        .execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::zero(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAmount { .. }));

    let err = app
        .execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::new(5_000_001),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InsufficientBalance { .. }));

    app.execute(OPERATOR, ExecuteMsg::DisableTokenWrapper {})
        .unwrap();
    let err = app
        .execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::new(1),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::ModuleDisabled);

    assert!(totals(&app).total_transferred_out.is_zero());
    assert_eq!(app.balance(USER, NATIVE_DENOM), Uint128::new(5_000_000));

    // No route configured yet, so there is no decimal difference to apply
    let mut app = TokenWrapperApp::default();
    app.instantiate(
        OPERATOR,
        InstantiateMsg {
            ibc_settings: None,
            ..mock_instantiate_msg()
        },
    )
    .unwrap();
    app.fund(USER, &coins(100, NATIVE_DENOM));

    let err = app
        .execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::new(100),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::IbcSettingsNotConfigured {
            field: "native_port".to_string()
        }
    );
    assert!(totals(&app).total_transferred_out.is_zero());
    assert_eq!(app.balance(USER, NATIVE_DENOM), Uint128::new(100));
    assert!(app.module_balance(NATIVE_DENOM).is_zero());
}

#[test]
fn test_wrap_outgoing_overflow_rejected() {
    let mut app = setup();
    app.fund(USER, &coins(u128::MAX - 5_000_000, NATIVE_DENOM));

    let err = app
        .execute(
            USER,
            ExecuteMsg::WrapOutgoing {
                amount: Uint128::MAX,
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::Conversion { .. }));
    assert!(app.module_balance(NATIVE_DENOM).is_zero());
}
