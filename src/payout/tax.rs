use crate::payout::{error::PayoutError, settings::TaxType};

/// Converts a tax into the fraction of the payout it takes.
///
/// # Arguments
/// - `tax_type` - Whether `tax_value` is a fraction or an absolute ISK amount
/// - `tax_value` - The tax as entered by the user
/// - `expected_total` - Expected site payout in ISK, only consulted for flat taxes
///
/// # Returns
/// - `Ok(f64)` - `tax_value` for percent taxes, `tax_value / expected_total` for flat taxes
/// - `Err(PayoutError::InvalidPayoutTotal)` - A flat tax against a payout that is not a positive
///   finite number
pub fn tax_to_percentage(
    tax_type: TaxType,
    tax_value: f64,
    expected_total: f64,
) -> Result<f64, PayoutError> {
    match tax_type {
        TaxType::Percent => Ok(tax_value),
        TaxType::Flat => {
            if !expected_total.is_finite() || expected_total <= 0.0 {
                return Err(PayoutError::InvalidPayoutTotal(expected_total));
            }

            Ok(tax_value / expected_total)
        }
    }
}
