//! Manual fleet import from a pasted list of character names.

use std::collections::HashSet;

use crate::{model::fleet::CharacterDto, payout::member::FleetMember};

/// Splits pasted text into character names.
///
/// One name per line, surrounding whitespace trimmed; empty lines and repeated names are dropped
/// with the first occurrence keeping its place.
pub fn parse_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    text.lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Roster entries for characters resolved through ESI.
pub fn members_from_characters(characters: Vec<CharacterDto>) -> Vec<FleetMember> {
    characters
        .into_iter()
        .map(|character| FleetMember::new(character.id, character.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse_names {
        use super::*;

        /// Expect names trimmed with blank lines removed
        #[test]
        fn trims_and_drops_empty_lines() {
            let names = parse_names("  Alpha \n\n\tBravo\n   \nCharlie Delta\n");

            assert_eq!(names, vec!["Alpha", "Bravo", "Charlie Delta"]);
        }

        /// Expect duplicates dropped while keeping first-seen order
        #[test]
        fn drops_duplicates() {
            let names = parse_names("Bravo\nAlpha\nBravo\n Alpha");

            assert_eq!(names, vec!["Bravo", "Alpha"]);
        }

        /// Expect Windows line endings to be handled
        #[test]
        fn handles_crlf() {
            let names = parse_names("Alpha\r\nBravo\r\n");

            assert_eq!(names, vec!["Alpha", "Bravo"]);
        }

        /// Expect nothing from blank input
        #[test]
        fn empty_input() {
            assert!(parse_names("   \n\n").is_empty());
        }
    }

    mod members_from_characters {
        use super::*;

        /// Expect eligible mains outside the site payout
        #[test]
        fn builds_default_members() {
            let members = members_from_characters(vec![CharacterDto {
                id: 1,
                name: "Alpha".to_string(),
            }]);

            assert_eq!(members.len(), 1);
            assert_eq!(members[0].character_id, 1);
            assert!(members[0].is_main());
            assert!(members[0].eligible);
            assert!(!members[0].part_of_site_payout);
        }
    }
}
