use serde::{Deserialize, Serialize};

use crate::payout::error::PayoutError;

/// How a tax value is expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxType {
    /// An absolute ISK amount taken from the payout
    Flat,
    /// A fraction of the payout, `0.1` being 10%
    #[default]
    Percent,
}

impl TaxType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Percent => "Percent",
        }
    }
}

/// Tunable share and tax settings for a payout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareSettings {
    /// Shares every main character receives
    pub shares_per_main: f64,
    /// Bonus shares a main receives for each linked alt
    pub shares_per_alt: f64,
    /// Cap on the shares a single account (main + alts) can receive
    pub shares_total: f64,
    pub corp_tax_type: TaxType,
    pub corp_tax_value: f64,
    pub sig_tax_type: TaxType,
    pub sig_tax_value: f64,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            shares_per_main: 1.0,
            shares_per_alt: 0.5,
            shares_total: 2.0,
            corp_tax_type: TaxType::Percent,
            corp_tax_value: 0.0,
            sig_tax_type: TaxType::Percent,
            sig_tax_value: 0.0,
        }
    }
}

impl ShareSettings {
    /// Checks the assumptions the allocation formula makes about the share settings.
    ///
    /// Edits are never blocked on this; the share editor uses it to warn that the account cap
    /// sits below the guaranteed main share.
    ///
    /// # Returns
    /// - `Ok(())` - Share counts are non-negative and `shares_total >= shares_per_main`
    /// - `Err(PayoutError::InvalidShareSettings)` - Describes the first violated rule
    pub fn validate(&self) -> Result<(), PayoutError> {
        if self.shares_per_main < 0.0 || self.shares_per_alt < 0.0 {
            return Err(PayoutError::InvalidShareSettings(
                "shares per main and per alt cannot be negative".to_string(),
            ));
        }

        if self.shares_total < self.shares_per_main {
            return Err(PayoutError::InvalidShareSettings(format!(
                "total shares per account ({}) is below shares per main ({})",
                self.shares_total, self.shares_per_main
            )));
        }

        Ok(())
    }
}

/// Pay-in parameters for the site being paid out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PayInContext {
    /// Total ISK the site is expected to pay out
    pub expected_site_payout: f64,
}
