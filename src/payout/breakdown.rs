//! Normalization of raw shares into payout percentages after taxes.

use serde::{Deserialize, Serialize};

use crate::payout::{
    error::PayoutError, settings::ShareSettings, share::Share, tax::tax_to_percentage,
};

pub const CORPORATION_CUT_LABEL: &str = "Corporation's Cut";
pub const SIG_CUT_LABEL: &str = "SIG's Cut";
pub const UNALLOCATED_LABEL: &str = "Unallocated";

/// What a slice of the payout goes to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SliceKind {
    CorporationTax,
    SigTax,
    /// A main character's group
    Group,
    /// Payout left over when no group qualifies
    Unallocated,
}

/// A labelled fraction of the site payout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoutSlice {
    pub name: String,
    pub kind: SliceKind,
    /// Fraction of the site payout, `0.25` being 25%
    pub percentage: f64,
}

/// Corporation and SIG tax, both as fractions of the payout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaxPercentages {
    pub corp: f64,
    pub sig: f64,
}

impl TaxPercentages {
    /// Converts the settings' taxes against the expected site payout.
    pub fn from_settings(
        settings: &ShareSettings,
        expected_total: f64,
    ) -> Result<Self, PayoutError> {
        Ok(Self {
            corp: tax_to_percentage(settings.corp_tax_type, settings.corp_tax_value, expected_total)?,
            sig: tax_to_percentage(settings.sig_tax_type, settings.sig_tax_value, expected_total)?,
        })
    }

    /// Fraction of the payout left for the fleet after both taxes.
    pub fn remaining(&self) -> f64 {
        1.0 - self.corp - self.sig
    }
}

/// Splits the site payout into tax slices followed by one slice per share.
///
/// # Arguments
/// - `settings` - Tax settings are read from here
/// - `shares` - Output of [`calculate_shares`](crate::payout::share::calculate_shares)
/// - `expected_total` - Expected site payout, used to convert flat taxes
///
/// # Returns
/// - `Ok(Vec<PayoutSlice>)` - Corporation cut, SIG cut, then each group's percentage of what is
///   left. With no shares a single `Unallocated` slice holds the remainder instead.
/// - `Err(PayoutError::InvalidPayoutTotal)` - A flat tax with no positive expected payout
pub fn percentage_breakdown(
    settings: &ShareSettings,
    shares: &[Share],
    expected_total: f64,
) -> Result<Vec<PayoutSlice>, PayoutError> {
    let taxes = TaxPercentages::from_settings(settings, expected_total)?;
    let remaining = taxes.remaining();

    let mut slices = vec![
        PayoutSlice {
            name: CORPORATION_CUT_LABEL.to_string(),
            kind: SliceKind::CorporationTax,
            percentage: taxes.corp,
        },
        PayoutSlice {
            name: SIG_CUT_LABEL.to_string(),
            kind: SliceKind::SigTax,
            percentage: taxes.sig,
        },
    ];

    let total_shares: f64 = shares.iter().map(|share| share.value).sum();

    if shares.is_empty() || total_shares <= 0.0 {
        slices.push(PayoutSlice {
            name: UNALLOCATED_LABEL.to_string(),
            kind: SliceKind::Unallocated,
            percentage: remaining,
        });

        return Ok(slices);
    }

    slices.extend(shares.iter().map(|share| PayoutSlice {
        name: share.name.clone(),
        kind: SliceKind::Group,
        percentage: remaining * (share.value / total_shares),
    }));

    Ok(slices)
}
