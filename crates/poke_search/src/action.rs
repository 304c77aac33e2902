//! Action identifiers.
//!
//! Actions cross the API boundary as opaque strings: a normalized move id,
//! `switch <id>` for a switch, or `none` when a side has nothing to do.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const SWITCH_PREFIX: &str = "switch ";
pub const NO_ACTION: &str = "none";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Action {
    Move(String),
    Switch(String),
    None,
}

impl Action {
    pub fn parse(s: &str) -> Action {
        if let Some(target) = s.strip_prefix(SWITCH_PREFIX) {
            Action::Switch(target.trim().to_string())
        } else if s == NO_ACTION {
            Action::None
        } else {
            Action::Move(s.to_string())
        }
    }

    pub fn switch(target: impl Into<String>) -> Action {
        Action::Switch(target.into())
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Action::Switch(_))
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(id) => f.write_str(id),
            Action::Switch(target) => write!(f, "{SWITCH_PREFIX}{target}"),
            Action::None => f.write_str(NO_ACTION),
        }
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Action::parse(&s)
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Action::parse(s)
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Action::parse("earthquake"), Action::Move("earthquake".into()));
        assert_eq!(Action::parse("switch garchomp"), Action::Switch("garchomp".into()));
        assert_eq!(Action::parse("none"), Action::None);
    }

    #[test]
    fn test_display_matches_parse() {
        for s in ["earthquake", "switch toxapex", "none"] {
            assert_eq!(Action::parse(s).to_string(), s);
        }
    }
}
