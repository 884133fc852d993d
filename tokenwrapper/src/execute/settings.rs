//! IBC settings registry.

use cosmwasm_std::{MessageInfo, Response};

use crate::deps::ModuleDeps;
use crate::error::ContractError;
use crate::execute::{assert_operator, module_event};
use crate::msg::IbcSettings;
use crate::state::save_ibc_settings;
use crate::validation::validate_ibc_settings;

/// Replace the IBC settings and decimal difference (operator only).
///
/// Fields are validated in declaration order and nothing is written unless
/// all of them pass.
pub fn execute_update_ibc_settings(
    deps: ModuleDeps,
    info: MessageInfo,
    settings: IbcSettings,
) -> Result<Response, ContractError> {
    assert_operator(deps.storage, &info.sender)?;
    validate_ibc_settings(&settings)?;

    save_ibc_settings(deps.storage, &settings)?;

    deps.events.emit(
        module_event("ibc_settings_updated")
            .add_attribute("signer", info.sender.as_str())
            .add_attribute("native_client_id", &settings.native_client_id)
            .add_attribute("counterparty_client_id", &settings.counterparty_client_id)
            .add_attribute("native_port", &settings.native_port)
            .add_attribute("counterparty_port", &settings.counterparty_port)
            .add_attribute("native_channel", &settings.native_channel)
            .add_attribute("counterparty_channel", &settings.counterparty_channel)
            .add_attribute("denom", &settings.denom)
            .add_attribute(
                "decimal_difference",
                settings.decimal_difference.to_string(),
            ),
    );

    Ok(Response::new()
        .add_attribute("method", "update_ibc_settings")
        .add_attribute("native_channel", settings.native_channel)
        .add_attribute("denom", settings.denom))
}
