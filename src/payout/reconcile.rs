//! Pay-in reconciliation: which groups have paid their part of the site payout.
//!
//! Wallet journal entries only count once the user confirms them, a donation from a fleet member
//! may well be unrelated to the site.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    model::wallet::WalletJournalEntryDto,
    payout::{
        error::PayoutError,
        group::{group_by_mains, sorted_groups},
        member::FleetMember,
        roster::FleetRoster,
        settings::{PayInContext, ShareSettings},
        tax::tax_to_percentage,
    },
};

/// Journal entry types a pay-in can arrive as.
pub const PAY_IN_REF_TYPES: [&str; 2] = ["player_donation", "corporation_account_withdrawal"];

/// Keeps journal entries that could be a pay-in from a roster member.
///
/// An entry qualifies when its type is in [`PAY_IN_REF_TYPES`], the amount is positive and the
/// first party is a character in the roster.
pub fn relevant_transactions(
    journal: &[WalletJournalEntryDto],
    roster: &FleetRoster,
) -> Vec<WalletJournalEntryDto> {
    journal
        .iter()
        .filter(|entry| PAY_IN_REF_TYPES.contains(&entry.ref_type.as_str()))
        .filter(|entry| entry.amount.unwrap_or(0.0) > 0.0)
        .filter(|entry| {
            entry
                .first_party_id
                .is_some_and(|character_id| roster.contains(character_id))
        })
        .cloned()
        .collect()
}

/// A journal entry the user has ticked at least once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedTransaction {
    pub character_id: i64,
    pub amount: f64,
    pub enabled: bool,
}

/// The user's confirmations of wallet journal entries, keyed by journal entry ID.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSelections {
    entries: HashMap<i64, SelectedTransaction>,
}

impl TransactionSelections {
    /// Flips the confirmation of a journal entry, enabling it the first time.
    ///
    /// # Returns
    /// The new state; entries without a first party cannot be confirmed and return `false`
    pub fn toggle(&mut self, entry: &WalletJournalEntryDto) -> bool {
        let Some(character_id) = entry.first_party_id else {
            return false;
        };

        let selection = self
            .entries
            .entry(entry.id)
            .and_modify(|selection| selection.enabled = !selection.enabled)
            .or_insert(SelectedTransaction {
                character_id,
                amount: entry.amount.unwrap_or(0.0),
                enabled: true,
            });

        selection.enabled
    }

    pub fn is_enabled(&self, transaction_id: i64) -> bool {
        self.entries
            .get(&transaction_id)
            .is_some_and(|selection| selection.enabled)
    }

    /// Sum of enabled transactions paid by any of `character_ids`.
    pub fn received_from(&self, character_ids: &[i64]) -> f64 {
        self.entries
            .values()
            .filter(|selection| selection.enabled && character_ids.contains(&selection.character_id))
            .map(|selection| selection.amount)
            .sum()
    }
}

/// ISK each character in the payout is expected to pay in: the payout split evenly across them.
///
/// # Returns
/// `None` when nobody is in the payout
pub fn pay_in_threshold(pay_in: &PayInContext, in_payout_count: usize) -> Option<f64> {
    if in_payout_count == 0 {
        return None;
    }

    Some(pay_in.expected_site_payout / in_payout_count as f64)
}

/// Expected payout per character after the corporation's cut.
///
/// # Returns
/// - `Ok(Some(f64))` - Per-character figure
/// - `Ok(None)` - Nobody is in the payout
/// - `Err(PayoutError::InvalidPayoutTotal)` - Flat corporation tax without a positive payout
pub fn payout_per_character(
    pay_in: &PayInContext,
    settings: &ShareSettings,
    in_payout_count: usize,
) -> Result<Option<f64>, PayoutError> {
    let Some(threshold) = pay_in_threshold(pay_in, in_payout_count) else {
        return Ok(None);
    };

    let corp_tax = tax_to_percentage(
        settings.corp_tax_type,
        settings.corp_tax_value,
        pay_in.expected_site_payout,
    )?;

    Ok(Some(threshold * (1.0 - corp_tax)))
}

/// Pay-in status of one main character's group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupPayIn {
    pub main: FleetMember,
    /// Characters of the group in the payout, main included
    pub character_count: usize,
    /// Confirmed ISK received from the main or any of its alts
    pub received: f64,
    pub paid_in_full: bool,
}

/// Reconciles confirmed transactions against every group in the site payout.
///
/// Groups are built from the members marked as part of the site payout and ordered like the
/// member list. A group is paid in full once it has sent at least [`pay_in_threshold`]; with
/// no positive expected payout nothing is flagged.
///
/// # Returns
/// - `Ok(Vec<GroupPayIn>)` - One entry per main in the payout
/// - `Err(PayoutError::DanglingAltReference)` - An alt is in the payout without its main
pub fn reconcile(
    roster: &FleetRoster,
    pay_in: &PayInContext,
    selections: &TransactionSelections,
) -> Result<Vec<GroupPayIn>, PayoutError> {
    let in_payout: Vec<&FleetMember> = roster.in_payout().collect();
    let threshold = pay_in_threshold(pay_in, in_payout.len());

    let groups = sorted_groups(group_by_mains(in_payout)?);

    Ok(groups
        .into_iter()
        .map(|group| {
            let received = selections.received_from(&group.character_ids());
            let paid_in_full = match threshold {
                Some(threshold) if threshold > 0.0 => received >= threshold,
                _ => false,
            };

            GroupPayIn {
                character_count: group.size(),
                main: group.main,
                received,
                paid_in_full,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn entry(id: i64, ref_type: &str, amount: f64, first_party_id: i64) -> WalletJournalEntryDto {
        WalletJournalEntryDto {
            id,
            date: Utc::now(),
            ref_type: ref_type.to_string(),
            amount: Some(amount),
            first_party_id: Some(first_party_id),
            description: String::new(),
        }
    }

    fn in_payout(id: i64, name: &str, alt_of_id: Option<i64>) -> FleetMember {
        FleetMember {
            alt_of_id,
            part_of_site_payout: true,
            ..FleetMember::new(id, name)
        }
    }

    mod relevant_transactions {
        use super::*;

        /// Expect only positive donations from roster members to remain
        #[test]
        fn filters_journal() {
            let roster = FleetRoster::from_iter(vec![FleetMember::new(1, "A")]);
            let journal = vec![
                entry(10, "player_donation", 100.0, 1),
                entry(11, "corporation_account_withdrawal", 50.0, 1),
                entry(12, "bounty_prizes", 100.0, 1),
                entry(13, "player_donation", -100.0, 1),
                entry(14, "player_donation", 100.0, 2),
                WalletJournalEntryDto {
                    first_party_id: None,
                    ..entry(15, "player_donation", 100.0, 1)
                },
            ];

            let relevant = relevant_transactions(&journal, &roster);

            let ids: Vec<i64> = relevant.iter().map(|e| e.id).collect();
            assert_eq!(ids, vec![10, 11]);
        }
    }

    mod transaction_selections {
        use super::*;

        /// Expect the first toggle to enable and the next to disable
        #[test]
        fn toggles_entries() {
            let mut selections = TransactionSelections::default();
            let donation = entry(10, "player_donation", 100.0, 1);

            assert!(selections.toggle(&donation));
            assert!(selections.is_enabled(10));
            assert!(!selections.toggle(&donation));
            assert!(!selections.is_enabled(10));
        }

        /// Expect only enabled entries from the given characters to be summed
        #[test]
        fn sums_enabled_entries() {
            let mut selections = TransactionSelections::default();
            selections.toggle(&entry(10, "player_donation", 100.0, 1));
            selections.toggle(&entry(11, "player_donation", 50.0, 2));
            selections.toggle(&entry(12, "player_donation", 25.0, 3));
            let disabled = entry(13, "player_donation", 1_000.0, 1);
            selections.toggle(&disabled);
            selections.toggle(&disabled);

            assert_eq!(selections.received_from(&[1, 2]), 150.0);
            assert_eq!(selections.received_from(&[4]), 0.0);
        }
    }

    mod payout_per_character {
        use super::*;
        use crate::payout::settings::TaxType;

        /// Expect the payout split per character after corporation tax
        #[test]
        fn splits_after_corp_tax() {
            let pay_in = PayInContext {
                expected_site_payout: 1_000_000_000.0,
            };
            let settings = ShareSettings {
                corp_tax_type: TaxType::Percent,
                corp_tax_value: 0.1,
                ..Default::default()
            };

            let result = payout_per_character(&pay_in, &settings, 4).unwrap();

            assert_eq!(result, Some(225_000_000.0));
        }

        /// Expect None when nobody is in the payout
        #[test]
        fn none_without_members() {
            let result =
                payout_per_character(&PayInContext::default(), &ShareSettings::default(), 0);

            assert_eq!(result, Ok(None));
        }

        /// Expect InvalidPayoutTotal for a flat corp tax without a payout
        #[test]
        fn fails_for_flat_tax_without_payout() {
            let settings = ShareSettings {
                corp_tax_type: TaxType::Flat,
                corp_tax_value: 10.0,
                ..Default::default()
            };

            let result = payout_per_character(&PayInContext::default(), &settings, 2);

            assert_eq!(result, Err(PayoutError::InvalidPayoutTotal(0.0)));
        }
    }

    mod reconcile {
        use super::*;

        /// Expect each of two single-character groups to owe half of 3.54b
        #[test]
        fn flags_groups_paid_in_full() {
            let roster =
                FleetRoster::from_iter(vec![in_payout(1, "A", None), in_payout(2, "C", None)]);
            let pay_in = PayInContext {
                expected_site_payout: 3_540_000_000.0,
            };
            let mut selections = TransactionSelections::default();
            selections.toggle(&entry(10, "player_donation", 1_770_000_000.0, 1));
            selections.toggle(&entry(11, "player_donation", 1_000_000_000.0, 2));

            assert_eq!(pay_in_threshold(&pay_in, 2), Some(1_770_000_000.0));

            let groups = reconcile(&roster, &pay_in, &selections).unwrap();

            assert_eq!(groups.len(), 2);
            assert_eq!(groups[0].main.name, "A");
            assert!(groups[0].paid_in_full);
            assert_eq!(groups[1].main.name, "C");
            assert_eq!(groups[1].received, 1_000_000_000.0);
            assert!(!groups[1].paid_in_full);
        }

        /// Expect alt payments to count towards their main's group
        #[test]
        fn counts_alt_payments() {
            let roster = FleetRoster::from_iter(vec![
                in_payout(1, "A", None),
                in_payout(2, "A Alt", Some(1)),
                FleetMember::new(3, "Not In Site"),
            ]);
            let pay_in = PayInContext {
                expected_site_payout: 200.0,
            };
            let mut selections = TransactionSelections::default();
            selections.toggle(&entry(10, "player_donation", 60.0, 1));
            selections.toggle(&entry(11, "player_donation", 60.0, 2));

            let groups = reconcile(&roster, &pay_in, &selections).unwrap();

            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].character_count, 2);
            assert_eq!(groups[0].received, 120.0);
            assert!(groups[0].paid_in_full);
        }

        /// Expect nothing flagged while the expected payout is zero
        #[test]
        fn no_flags_without_expected_payout() {
            let roster = FleetRoster::from_iter(vec![in_payout(1, "A", None)]);

            let groups = reconcile(
                &roster,
                &PayInContext::default(),
                &TransactionSelections::default(),
            )
            .unwrap();

            assert!(!groups[0].paid_in_full);
        }

        /// Expect DanglingAltReference when an alt is in the payout without its main
        #[test]
        fn fails_for_alt_without_main() {
            let mut roster = FleetRoster::from_iter(vec![
                FleetMember::new(1, "A"),
                in_payout(2, "A Alt", None),
            ]);
            roster.set_alt_of(2, Some(1)).unwrap();

            let result = reconcile(
                &roster,
                &PayInContext::default(),
                &TransactionSelections::default(),
            );

            assert!(matches!(
                result,
                Err(PayoutError::DanglingAltReference { .. })
            ));
        }
    }
}
