//! Main/alt grouping of fleet members.
//!
//! Every character without an `alt_of_id` leads a group, every other character is attached to the
//! group of the main it names. Grouping is recomputed from the roster whenever it changes and is
//! never stored on its own.

use std::collections::HashMap;

use crate::payout::{error::PayoutError, member::FleetMember};

/// A main character together with the alts linked to it.
#[derive(Clone, Debug, PartialEq)]
pub struct MainAltGroup {
    pub main: FleetMember,
    pub alts: Vec<FleetMember>,
}

impl MainAltGroup {
    fn new(main: FleetMember) -> Self {
        Self {
            main,
            alts: Vec::new(),
        }
    }

    /// Character IDs of the main followed by every alt.
    pub fn character_ids(&self) -> Vec<i64> {
        std::iter::once(self.main.character_id)
            .chain(self.alts.iter().map(|alt| alt.character_id))
            .collect()
    }

    /// Number of characters in the group including the main.
    pub fn size(&self) -> usize {
        self.alts.len() + 1
    }
}

/// Partitions `members` into groups keyed by the main's character ID.
///
/// # Arguments
/// - `members` - Members to group, typically already filtered by eligibility or payout status
///
/// # Returns
/// - `Ok(HashMap<i64, MainAltGroup>)` - One group per main, alts attached in input order
/// - `Err(PayoutError::SelfReferentialAlt)` - A member names itself as its main
/// - `Err(PayoutError::DanglingAltReference)` - An alt names a main absent from `members`,
///   e.g. because the main was filtered out as ineligible
pub fn group_by_mains<'a, I>(members: I) -> Result<HashMap<i64, MainAltGroup>, PayoutError>
where
    I: IntoIterator<Item = &'a FleetMember>,
{
    let (mains, alts): (Vec<&FleetMember>, Vec<&FleetMember>) =
        members.into_iter().partition(|member| member.is_main());

    let mut groups: HashMap<i64, MainAltGroup> = mains
        .into_iter()
        .map(|main| (main.character_id, MainAltGroup::new(main.clone())))
        .collect();

    for alt in alts {
        let Some(main_id) = alt.alt_of_id else {
            continue;
        };

        if main_id == alt.character_id {
            return Err(PayoutError::SelfReferentialAlt(alt.character_id));
        }

        match groups.get_mut(&main_id) {
            Some(group) => group.alts.push(alt.clone()),
            None => {
                return Err(PayoutError::DanglingAltReference {
                    alt_id: alt.character_id,
                    main_id,
                })
            }
        }
    }

    Ok(groups)
}

/// Orders groups for display: by main name, alts by name within each group.
///
/// Comparison is case-sensitive, ties are broken by character ID so the order is stable across
/// recomputations.
pub fn sorted_groups(groups: HashMap<i64, MainAltGroup>) -> Vec<MainAltGroup> {
    let mut groups: Vec<MainAltGroup> = groups.into_values().collect();

    for group in groups.iter_mut() {
        group.alts.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then(a.character_id.cmp(&b.character_id))
        });
    }

    groups.sort_by(|a, b| {
        a.main
            .name
            .cmp(&b.main.name)
            .then(a.main.character_id.cmp(&b.main.character_id))
    });

    groups
}
