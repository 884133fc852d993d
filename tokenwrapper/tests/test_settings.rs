//! IBC Settings Registry Tests.

use tokenwrapper::msg::{ExecuteMsg, IbcSettings, ModuleInfoResponse, QueryMsg};
use tokenwrapper::testing::{
    event_attr, mock_ibc_settings, TokenWrapperApp, OPERATOR, PAUSER,
};
use tokenwrapper::ContractError;

use common::{DenomTracer, IbcDenomTracer};

// ============================================================================
// Test Setup
// ============================================================================

fn update_msg(settings: IbcSettings) -> ExecuteMsg {
    ExecuteMsg::UpdateIbcSettings {
        native_client_id: settings.native_client_id,
        counterparty_client_id: settings.counterparty_client_id,
        native_port: settings.native_port,
        counterparty_port: settings.counterparty_port,
        native_channel: settings.native_channel,
        counterparty_channel: settings.counterparty_channel,
        denom: settings.denom,
        decimal_difference: settings.decimal_difference,
    }
}

fn new_settings() -> IbcSettings {
    IbcSettings {
        native_client_id: "07-tendermint-7".to_string(),
        counterparty_client_id: "07-tendermint-99".to_string(),
        native_port: "transfer".to_string(),
        counterparty_port: "wasm.zig1bridge".to_string(),
        native_channel: "channel-7".to_string(),
        counterparty_channel: "channel-103".to_string(),
        denom: "aevmzig".to_string(),
        decimal_difference: 6,
    }
}

fn module_info(app: &TokenWrapperApp) -> ModuleInfoResponse {
    app.query(QueryMsg::ModuleInfo {}).unwrap()
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_ibc_settings() {
    let mut app = TokenWrapperApp::new();

    app.execute(OPERATOR, update_msg(new_settings())).unwrap();

    let info = module_info(&app);
    assert_eq!(info.ibc_settings, new_settings());
    assert_eq!(
        info.voucher_denom,
        Some(IbcDenomTracer.derive_voucher_denom("transfer", "channel-7", "aevmzig"))
    );

    let updated = app.events_of("ibc_settings_updated");
    assert_eq!(updated.len(), 1);
    assert_eq!(event_attr(updated[0], "signer"), Some(OPERATOR));
    assert_eq!(event_attr(updated[0], "native_client_id"), Some("07-tendermint-7"));
    assert_eq!(
        event_attr(updated[0], "counterparty_client_id"),
        Some("07-tendermint-99")
    );
    assert_eq!(event_attr(updated[0], "native_port"), Some("transfer"));
    assert_eq!(
        event_attr(updated[0], "counterparty_port"),
        Some("wasm.zig1bridge")
    );
    assert_eq!(event_attr(updated[0], "native_channel"), Some("channel-7"));
    assert_eq!(
        event_attr(updated[0], "counterparty_channel"),
        Some("channel-103")
    );
    assert_eq!(event_attr(updated[0], "denom"), Some("aevmzig"));
    assert_eq!(event_attr(updated[0], "decimal_difference"), Some("6"));
}

#[test]
fn test_update_ibc_settings_operator_only() {
    let mut app = TokenWrapperApp::new();

    let err = app
        .execute(PAUSER, update_msg(new_settings()))
        .unwrap_err();
    assert_eq!(err, ContractError::unauthorized(PAUSER, "operator"));
    assert_eq!(module_info(&app).ibc_settings, mock_ibc_settings());
}

#[test]
fn test_first_invalid_field_reported_and_nothing_written() {
    let mut app = TokenWrapperApp::new();

    let mut settings = new_settings();
    settings.counterparty_client_id = "07".to_string();
    settings.native_channel = "ch/0".to_string();
    settings.decimal_difference = 40;

    let err = app.execute(OPERATOR, update_msg(settings)).unwrap_err();
    match err {
        ContractError::InvalidFormat { field, value, .. } => {
            assert_eq!(field, "counterparty_client_id");
            assert_eq!(value, "07");
        }
        other => panic!("unexpected error: {other}"),
    }

    // The valid native_client_id in front of the bad field was not written
    assert_eq!(module_info(&app).ibc_settings, mock_ibc_settings());
    assert!(app.events_of("ibc_settings_updated").is_empty());
}

#[test]
fn test_each_field_validated() {
    let cases: [(&str, fn(&mut IbcSettings)); 5] = [
        ("native_client_id", |s| s.native_client_id = "short".to_string()),
        ("native_port", |s| s.native_port = "trans/fer".to_string()),
        ("counterparty_port", |s| s.counterparty_port = " ".to_string()),
        ("counterparty_channel", |s| {
            s.counterparty_channel = "channel 1".to_string()
        }),
        ("denom", |s| s.denom = "9zig".to_string()),
    ];

    for (field, corrupt) in cases {
        let mut app = TokenWrapperApp::new();
        let mut settings = new_settings();
        corrupt(&mut settings);

        let err = app.execute(OPERATOR, update_msg(settings)).unwrap_err();
        assert!(
            matches!(err, ContractError::InvalidFormat { field: ref f, .. } if f == field),
            "expected {field} to be rejected, got {err}"
        );
    }
}

#[test]
fn test_decimal_difference_bounds() {
    let mut app = TokenWrapperApp::new();

    let mut settings = new_settings();
    settings.decimal_difference = 19;
    let err = app.execute(OPERATOR, update_msg(settings)).unwrap_err();
    assert_eq!(
        err,
        ContractError::DecimalDifferenceOutOfRange { value: 19, max: 18 }
    );

    for decimal_difference in [0, 18] {
        let mut settings = new_settings();
        settings.decimal_difference = decimal_difference;
        app.execute(OPERATOR, update_msg(settings)).unwrap();
        assert_eq!(
            module_info(&app).ibc_settings.decimal_difference,
            decimal_difference
        );
    }
}
