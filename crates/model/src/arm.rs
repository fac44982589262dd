//! Experiment arm

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two experiment groups.
///
/// Serializes to exactly `control` / `treatment`; downstream consumers
/// match on these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    /// Baseline experience
    Control,
    /// Ranked-feed experience under test
    Treatment,
}

impl Arm {
    /// Wire string for this arm
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Treatment => "treatment",
        }
    }

    /// Whether this is the treatment arm
    pub fn is_treatment(&self) -> bool {
        matches!(self, Self::Treatment)
    }
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Arm::Control.as_str(), "control");
        assert_eq!(Arm::Treatment.as_str(), "treatment");
        assert_eq!(Arm::Treatment.to_string(), "treatment");
    }

    #[test]
    fn test_is_treatment() {
        assert!(Arm::Treatment.is_treatment());
        assert!(!Arm::Control.is_treatment());
    }
}
