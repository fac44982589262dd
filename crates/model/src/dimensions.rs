//! Categorical dimensions copied onto every record
//!
//! Device type and country are sampled once per user and denormalized onto
//! sessions and events for downstream convenience.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device the user engages from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
    Tablet,
}

impl DeviceType {
    /// All device types, in sampling-weight order
    pub const ALL: [DeviceType; 3] = [Self::Mobile, Self::Desktop, Self::Tablet];

    /// Wire string for this device type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User country (ISO 3166-1 alpha-2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Us,
    Ca,
    Gb,
    Au,
    In,
}

impl Country {
    /// All countries, in sampling-weight order
    pub const ALL: [Country; 5] = [Self::Us, Self::Ca, Self::Gb, Self::Au, Self::In];

    /// Wire string for this country
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Ca => "CA",
            Self::Gb => "GB",
            Self::Au => "AU",
            Self::In => "IN",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_wire_strings() {
        assert_eq!(DeviceType::Mobile.as_str(), "mobile");
        assert_eq!(DeviceType::Desktop.as_str(), "desktop");
        assert_eq!(DeviceType::Tablet.as_str(), "tablet");
    }

    #[test]
    fn test_country_wire_strings() {
        let strs: Vec<_> = Country::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(strs, vec!["US", "CA", "GB", "AU", "IN"]);
    }
}
