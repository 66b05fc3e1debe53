//! Team member positions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Role a team member holds in the studio. Stored as its lowercase key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamPosition {
    Designer,
    Architect,
    Coordinator,
    Manager,
    Founder,
}

impl TeamPosition {
    pub const ALL: [TeamPosition; 5] = [
        TeamPosition::Designer,
        TeamPosition::Architect,
        TeamPosition::Coordinator,
        TeamPosition::Manager,
        TeamPosition::Founder,
    ];

    /// Storage key, as persisted in `team_members.position`.
    pub fn as_str(self) -> &'static str {
        match self {
            TeamPosition::Designer => "designer",
            TeamPosition::Architect => "architect",
            TeamPosition::Coordinator => "coordinator",
            TeamPosition::Manager => "manager",
            TeamPosition::Founder => "founder",
        }
    }

    /// Human-readable title shown on the team page.
    pub fn label(self) -> &'static str {
        match self {
            TeamPosition::Designer => "Interior Designer",
            TeamPosition::Architect => "Architect",
            TeamPosition::Coordinator => "Project Coordinator",
            TeamPosition::Manager => "Project Manager",
            TeamPosition::Founder => "Founder",
        }
    }
}

impl fmt::Display for TeamPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamPosition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamPosition::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = TeamPosition::ALL.iter().map(|p| p.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid position '{s}'. Valid positions: {}",
                    valid.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_storage_key() {
        for position in TeamPosition::ALL {
            assert_eq!(position.as_str().parse::<TeamPosition>().unwrap(), position);
        }
    }

    #[test]
    fn rejects_unknown_position() {
        let err = "intern".parse::<TeamPosition>().unwrap_err();
        assert!(err.to_string().contains("Valid positions: designer"));
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(TeamPosition::Designer.label(), "Interior Designer");
        assert_eq!(TeamPosition::Coordinator.label(), "Project Coordinator");
    }
}
