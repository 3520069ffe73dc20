//! The fleet roster and its validated edit operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::payout::{error::PayoutError, member::FleetMember};

/// Fleet members keyed by character ID.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetRoster {
    members: BTreeMap<i64, FleetMember>,
}

impl FleetRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, character_id: i64) -> Option<&FleetMember> {
        self.members.get(&character_id)
    }

    pub fn contains(&self, character_id: i64) -> bool {
        self.members.contains_key(&character_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over every member in character ID order.
    pub fn members(&self) -> impl Iterator<Item = &FleetMember> {
        self.members.values()
    }

    /// Members marked as taking part in the site payout.
    pub fn in_payout(&self) -> impl Iterator<Item = &FleetMember> {
        self.members
            .values()
            .filter(|member| member.part_of_site_payout)
    }

    /// Merges imported characters into the roster.
    ///
    /// Characters already present keep their current eligibility, payout and alt state so that
    /// importing the same list twice does not undo edits.
    ///
    /// # Returns
    /// Number of characters that were not in the roster before
    pub fn import<I>(&mut self, members: I) -> usize
    where
        I: IntoIterator<Item = FleetMember>,
    {
        let mut added = 0;

        for member in members {
            if let std::collections::btree_map::Entry::Vacant(entry) =
                self.members.entry(member.character_id)
            {
                entry.insert(member);
                added += 1;
            }
        }

        added
    }

    /// Flips whether the character earns shares.
    ///
    /// # Returns
    /// - `Ok(bool)` - The new eligibility
    /// - `Err(PayoutError::UnknownCharacter)` - Character is not in the roster
    pub fn toggle_eligible(&mut self, character_id: i64) -> Result<bool, PayoutError> {
        let member = self.member_mut(character_id)?;
        member.eligible = !member.eligible;

        Ok(member.eligible)
    }

    /// Flips whether the character took part in the site being paid out.
    ///
    /// # Returns
    /// - `Ok(bool)` - The new payout status
    /// - `Err(PayoutError::UnknownCharacter)` - Character is not in the roster
    pub fn toggle_in_payout(&mut self, character_id: i64) -> Result<bool, PayoutError> {
        let member = self.member_mut(character_id)?;
        member.part_of_site_payout = !member.part_of_site_payout;

        Ok(member.part_of_site_payout)
    }

    /// Makes a character an alt of `main_id`, or a main again when `main_id` is `None`.
    ///
    /// Only mains may be targeted and a character with alts of its own cannot become an alt,
    /// which keeps every roster one level deep.
    ///
    /// # Returns
    /// - `Ok(())` - Relationship updated
    /// - `Err(PayoutError::UnknownCharacter)` - Either character is not in the roster
    /// - `Err(PayoutError::SelfReferentialAlt)` - `main_id` equals `character_id`
    /// - `Err(PayoutError::AltTargetNotMain)` - `main_id` is itself an alt
    /// - `Err(PayoutError::MainHasAlts)` - The character still has alts attached
    pub fn set_alt_of(
        &mut self,
        character_id: i64,
        main_id: Option<i64>,
    ) -> Result<(), PayoutError> {
        if !self.contains(character_id) {
            return Err(PayoutError::UnknownCharacter(character_id));
        }

        if let Some(main_id) = main_id {
            if main_id == character_id {
                return Err(PayoutError::SelfReferentialAlt(character_id));
            }

            let target = self
                .get(main_id)
                .ok_or(PayoutError::UnknownCharacter(main_id))?;

            if !target.is_main() {
                return Err(PayoutError::AltTargetNotMain {
                    character_id,
                    target_id: main_id,
                });
            }

            if self.alts_of(character_id).next().is_some() {
                return Err(PayoutError::MainHasAlts(character_id));
            }
        }

        self.member_mut(character_id)?.alt_of_id = main_id;

        Ok(())
    }

    /// Alts linked to `main_id`.
    pub fn alts_of(&self, main_id: i64) -> impl Iterator<Item = &FleetMember> {
        self.members
            .values()
            .filter(move |member| member.alt_of_id == Some(main_id))
    }

    /// Mains other than `character_id` in name order, the choices for "Alt of ...".
    pub fn main_options(&self, character_id: i64) -> Vec<&FleetMember> {
        let mut mains: Vec<&FleetMember> = self
            .members
            .values()
            .filter(|member| member.is_main() && member.character_id != character_id)
            .collect();
        mains.sort_by(|a, b| a.name.cmp(&b.name).then(a.character_id.cmp(&b.character_id)));

        mains
    }

    fn member_mut(&mut self, character_id: i64) -> Result<&mut FleetMember, PayoutError> {
        self.members
            .get_mut(&character_id)
            .ok_or(PayoutError::UnknownCharacter(character_id))
    }
}

impl FromIterator<FleetMember> for FleetRoster {
    fn from_iter<T: IntoIterator<Item = FleetMember>>(iter: T) -> Self {
        let mut roster = FleetRoster::new();
        roster.import(iter);
        roster
    }
}
