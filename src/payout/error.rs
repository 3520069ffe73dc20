use thiserror::Error;

/// Errors produced by the payout engine.
///
/// These are contract violations between the roster a caller hands in and what the engine
/// requires of it. They are returned rather than coerced into zero or `NaN` so the caller can
/// show the user what needs fixing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoutError {
    /// An alt references a main that is not part of the members being grouped.
    #[error("Character {alt_id} is an alt of character {main_id} which is not part of this payout")]
    DanglingAltReference { alt_id: i64, main_id: i64 },
    /// A character was marked as an alt of itself.
    #[error("Character {0} cannot be an alt of itself")]
    SelfReferentialAlt(i64),
    /// A flat tax was converted against an expected payout that is zero, negative or not finite.
    #[error("Expected site payout must be greater than zero to convert a flat tax, got {0}")]
    InvalidPayoutTotal(f64),
    /// The character ID is not present in the fleet roster.
    #[error("Character {0} is not part of the fleet roster")]
    UnknownCharacter(i64),
    /// An alt may only be attached to a main character.
    #[error("Character {character_id} cannot become an alt of {target_id} because {target_id} is itself an alt")]
    AltTargetNotMain { character_id: i64, target_id: i64 },
    /// A main with alts of its own cannot become an alt.
    #[error("Character {0} still has alts, reassign them before making it an alt")]
    MainHasAlts(i64),
    /// Share settings that break `shares_per_main <= shares_total` or contain negative values.
    #[error("Invalid share settings: {0}")]
    InvalidShareSettings(String),
}
