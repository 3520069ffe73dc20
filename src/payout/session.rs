use serde::{Deserialize, Serialize};

use crate::{
    model::wallet::WalletJournalEntryDto,
    payout::{
        breakdown::{percentage_breakdown, PayoutSlice},
        error::PayoutError,
        group::{group_by_mains, sorted_groups, MainAltGroup},
        reconcile::{payout_per_character, reconcile, GroupPayIn, TransactionSelections},
        roster::FleetRoster,
        settings::{PayInContext, ShareSettings},
        share::{calculate_shares, Share},
    },
};

/// Everything the user has entered for one payout, kept in browser memory for the page's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutSession {
    pub roster: FleetRoster,
    pub settings: ShareSettings,
    pub pay_in: PayInContext,
    pub selections: TransactionSelections,
}

impl PayoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every roster member grouped under its main, in display order.
    pub fn groups(&self) -> Result<Vec<MainAltGroup>, PayoutError> {
        Ok(sorted_groups(group_by_mains(self.roster.members())?))
    }

    pub fn shares(&self) -> Result<Vec<Share>, PayoutError> {
        calculate_shares(&self.settings, self.roster.members())
    }

    /// Shares normalized against the expected site payout after taxes.
    pub fn breakdown(&self) -> Result<Vec<PayoutSlice>, PayoutError> {
        let shares = self.shares()?;

        percentage_breakdown(&self.settings, &shares, self.pay_in.expected_site_payout)
    }

    pub fn payout_per_character(&self) -> Result<Option<f64>, PayoutError> {
        payout_per_character(&self.pay_in, &self.settings, self.roster.in_payout().count())
    }

    pub fn reconciliation(&self) -> Result<Vec<GroupPayIn>, PayoutError> {
        reconcile(&self.roster, &self.pay_in, &self.selections)
    }

    pub fn toggle_transaction(&mut self, entry: &WalletJournalEntryDto) -> bool {
        self.selections.toggle(entry)
    }
}
