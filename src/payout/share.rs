use serde::{Deserialize, Serialize};

use crate::payout::{
    error::PayoutError,
    group::{group_by_mains, sorted_groups, MainAltGroup},
    member::FleetMember,
    settings::ShareSettings,
};

/// Raw, unnormalized shares assigned to a main character's group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Name of the group's main character
    pub name: String,
    pub value: f64,
}

/// Shares earned by a single group.
///
/// Every main gets `shares_per_main`, plus `shares_per_alt` for each alt until the account
/// reaches `shares_total`. A cap below the main share never takes shares away from the main.
pub fn group_share_value(settings: &ShareSettings, alt_count: usize) -> f64 {
    let alt_cap = (settings.shares_total - settings.shares_per_main).max(0.0);
    let alt_shares = alt_count as f64 * settings.shares_per_alt;

    settings.shares_per_main + alt_cap.min(alt_shares)
}

/// Calculates one share per main character among members who are eligible and in the payout.
///
/// # Arguments
/// - `settings` - Share settings to apply
/// - `members` - Every fleet member, filtering happens here
///
/// # Returns
/// - `Ok(Vec<Share>)` - One share per group in display order, empty when nobody qualifies
/// - `Err(PayoutError)` - Grouping failed, e.g. an eligible alt whose main is not in the payout
pub fn calculate_shares<'a, I>(settings: &ShareSettings, members: I) -> Result<Vec<Share>, PayoutError>
where
    I: IntoIterator<Item = &'a FleetMember>,
{
    let groups = group_by_mains(members.into_iter().filter(|member| member.is_paid_out()))?;

    Ok(sorted_groups(groups)
        .iter()
        .map(|group| share_for_group(settings, group))
        .collect())
}

fn share_for_group(settings: &ShareSettings, group: &MainAltGroup) -> Share {
    Share {
        name: group.main.name.clone(),
        value: group_share_value(settings, group.alts.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, name: &str, alt_of_id: Option<i64>) -> FleetMember {
        FleetMember {
            alt_of_id,
            part_of_site_payout: true,
            ..FleetMember::new(id, name)
        }
    }

    fn settings(per_main: f64, per_alt: f64, total: f64) -> ShareSettings {
        ShareSettings {
            shares_per_main: per_main,
            shares_per_alt: per_alt,
            shares_total: total,
            ..Default::default()
        }
    }

    mod group_share_value {
        use super::*;

        /// Expect values between the main share and the account cap for any alt count
        #[test]
        fn stays_within_bounds() {
            let configs = [
                settings(1.0, 0.5, 2.5),
                settings(0.0, 2.0, 10.0),
                settings(2.0, 0.0, 2.0),
                settings(1.5, 1.5, 4.0),
            ];

            for config in configs.iter() {
                for alt_count in 0..20 {
                    let value = group_share_value(config, alt_count);

                    assert!(value >= config.shares_per_main);
                    assert!(value <= config.shares_total);
                }
            }
        }

        /// Expect a main without alts to receive exactly the main share
        #[test]
        fn no_alts_gets_main_share() {
            assert_eq!(group_share_value(&settings(1.0, 0.5, 2.5), 0), 1.0);
        }

        /// Expect alt bonuses to stop at the account cap
        #[test]
        fn caps_alt_bonus() {
            let config = settings(1.0, 0.5, 2.0);

            assert_eq!(group_share_value(&config, 1), 1.5);
            assert_eq!(group_share_value(&config, 2), 2.0);
            assert_eq!(group_share_value(&config, 5), 2.0);
        }

        /// Expect a cap below the main share to leave the main share untouched
        #[test]
        fn cap_below_main_share_keeps_main_share() {
            assert_eq!(group_share_value(&settings(2.0, 0.5, 1.0), 3), 2.0);
        }
    }

    mod calculate_shares {
        use super::*;

        /// Expect the A/B/C scenario to give A 1.5 and C 1 shares
        #[test]
        fn calculates_main_with_alt() {
            let members = vec![
                member(1, "A", None),
                member(2, "B", Some(1)),
                member(3, "C", None),
            ];

            let shares = calculate_shares(&settings(1.0, 0.5, 2.5), &members).unwrap();

            assert_eq!(
                shares,
                vec![
                    Share {
                        name: "A".to_string(),
                        value: 1.5
                    },
                    Share {
                        name: "C".to_string(),
                        value: 1.0
                    },
                ]
            );
        }

        /// Expect members who are ineligible or not in the payout to be skipped
        #[test]
        fn skips_members_outside_payout() {
            let mut not_in_payout = member(2, "B", None);
            not_in_payout.part_of_site_payout = false;
            let mut ineligible_alt = member(3, "A Alt", Some(1));
            ineligible_alt.eligible = false;
            let members = vec![member(1, "A", None), not_in_payout, ineligible_alt];

            let shares = calculate_shares(&settings(1.0, 0.5, 2.5), &members).unwrap();

            assert_eq!(shares.len(), 1);
            assert_eq!(shares[0].name, "A");
            assert_eq!(shares[0].value, 1.0);
        }

        /// Expect no shares when nobody is eligible and in the payout
        #[test]
        fn empty_when_nobody_qualifies() {
            let mut outside = member(1, "A", None);
            outside.part_of_site_payout = false;

            let shares = calculate_shares(&ShareSettings::default(), &vec![outside]).unwrap();

            assert!(shares.is_empty());
        }

        /// Expect DanglingAltReference when an alt is in the payout but its main is not
        #[test]
        fn fails_when_main_not_in_payout() {
            let mut main = member(1, "A", None);
            main.eligible = false;
            let members = vec![main, member(2, "B", Some(1))];

            let result = calculate_shares(&ShareSettings::default(), &members);

            assert_eq!(
                result,
                Err(PayoutError::DanglingAltReference {
                    alt_id: 2,
                    main_id: 1
                })
            );
        }

        /// Expect repeated calls on the same input to give identical output
        #[test]
        fn is_idempotent() {
            let members = vec![
                member(10, "Zed", None),
                member(11, "Zed Alt", Some(10)),
                member(12, "Amy", None),
                member(13, "Mo", None),
                member(14, "Mo Alt", Some(13)),
                member(15, "Mo Alt 2", Some(13)),
            ];
            let config = settings(1.0, 0.5, 2.0);

            let first = calculate_shares(&config, &members).unwrap();
            let second = calculate_shares(&config, &members).unwrap();

            assert_eq!(first, second);
            let names: Vec<&str> = first.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["Amy", "Mo", "Zed"]);
        }
    }
}
