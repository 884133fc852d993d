//! Precision conversion between voucher and native amounts.
//!
//! Vouchers carry `decimal_difference` more decimals than the native token.
//!
//! | Direction        | Operation                 | Rounding        |
//! |------------------|---------------------------|-----------------|
//! | voucher → native | `amount / 10^d`           | truncates       |
//! | native → voucher | `amount * 10^d`           | exact           |
//!
//! Truncation keeps the remainder in custody: a depositor can lose dust, the
//! pool never pays out more than it received. A conversion that yields zero
//! is rejected instead of producing a zero-value transfer.

use cosmwasm_std::{Storage, Uint128};

use crate::error::ContractError;
use crate::state::load_decimal_difference;

/// Largest supported precision gap between the two representations
pub const MAX_DECIMAL_DIFFERENCE: u32 = 18;

/// Reject decimal differences above [`MAX_DECIMAL_DIFFERENCE`].
pub fn validate_decimal_difference(decimal_difference: u32) -> Result<(), ContractError> {
    if decimal_difference > MAX_DECIMAL_DIFFERENCE {
        return Err(ContractError::DecimalDifferenceOutOfRange {
            value: decimal_difference,
            max: MAX_DECIMAL_DIFFERENCE,
        });
    }
    Ok(())
}

/// `10^decimal_difference`
pub fn conversion_factor(decimal_difference: u32) -> Result<Uint128, ContractError> {
    validate_decimal_difference(decimal_difference)?;
    Ok(Uint128::new(10u128.pow(decimal_difference)))
}

/// Voucher amount to native amount, rounding down.
pub fn scale_down(amount: Uint128, decimal_difference: u32) -> Result<Uint128, ContractError> {
    let factor = conversion_factor(decimal_difference)?;
    let result = amount.checked_div(factor).map_err(|e| ContractError::Conversion {
        amount,
        reason: e.to_string(),
    })?;

    if result.is_zero() {
        return Err(ContractError::Conversion {
            amount,
            reason: format!("amount is below the conversion factor {}", factor),
        });
    }
    Ok(result)
}

/// Native amount to voucher amount.
pub fn scale_up(amount: Uint128, decimal_difference: u32) -> Result<Uint128, ContractError> {
    let factor = conversion_factor(decimal_difference)?;
    let result = amount
        .checked_mul(factor)
        .map_err(|e| ContractError::Conversion {
            amount,
            reason: e.to_string(),
        })?;

    if result.is_zero() {
        return Err(ContractError::Conversion {
            amount,
            reason: "converted amount is zero".to_string(),
        });
    }
    Ok(result)
}

/// [`scale_down`] with the stored decimal difference.
pub fn scale_down_stored(storage: &dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    scale_down(amount, load_decimal_difference(storage)?)
}

/// [`scale_up`] with the stored decimal difference.
pub fn scale_up_stored(storage: &dyn Storage, amount: Uint128) -> Result<Uint128, ContractError> {
    scale_up(amount, load_decimal_difference(storage)?)
}
