//! Contains requirements via the [`Requirement`] and [`Requirements`] types.

use std::ops::Deref;
use strum_macros::{Display, EnumString};

/// A domain requirement. Only the flags describing features the planner
/// supports are accepted by the reader.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumString, Display)]
pub enum Requirement {
    #[strum(serialize = ":strips")]
    Strips,
    #[strum(serialize = ":typing")]
    Typing,
    #[strum(serialize = ":negative-preconditions")]
    NegativePreconditions,
    #[strum(serialize = ":disjunctive-preconditions")]
    DisjunctivePreconditions,
    #[strum(serialize = ":equality")]
    Equality,
    #[strum(serialize = ":existential-preconditions")]
    ExistentialPreconditions,
    #[strum(serialize = ":universal-preconditions")]
    UniversalPreconditions,
    #[strum(serialize = ":quantified-preconditions")]
    QuantifiedPreconditions,
    #[strum(serialize = ":action-costs")]
    ActionCosts,
}

/// A set of requirements.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Requirements(Vec<Requirement>);

impl Requirements {
    pub fn new<I: IntoIterator<Item = Requirement>>(requirements: I) -> Self {
        Self(requirements.into_iter().collect())
    }
}

impl Deref for Requirements {
    type Target = [Requirement];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn requirement_keys_round_trip_through_display() {
        let requirement = Requirement::from_str(":universal-preconditions").unwrap();
        assert_eq!(requirement, Requirement::UniversalPreconditions);
        assert_eq!(requirement.to_string(), ":universal-preconditions");
        assert!(Requirement::from_str(":fluents").is_err());
    }
}
