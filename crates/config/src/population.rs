//! Population configuration
//!
//! Size and categorical distributions for the synthetic user population.

use serde::Deserialize;

/// Population size and per-user attribute distributions
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of users to generate. Zero yields an empty population.
    /// Default: 5000
    pub num_users: u64,

    /// Device-type sampling weights (need not sum to 100)
    pub device_weights: DeviceWeights,

    /// Country sampling weights (need not sum to 100)
    pub country_weights: CountryWeights,

    /// Probability a generated user is flagged as new
    /// Default: 0.3
    pub new_user_prob: f64,

    /// Upper bound (inclusive) for uniformly sampled pre-period saves
    /// Default: 20
    pub pre_period_saves_max: u32,

    /// Join-date lookback window in days; join dates are uniform in
    /// `[today - lookback, today]`
    /// Default: 90
    pub join_lookback_days: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            num_users: 5000,
            device_weights: DeviceWeights::default(),
            country_weights: CountryWeights::default(),
            new_user_prob: 0.3,
            pre_period_saves_max: 20,
            join_lookback_days: 90,
        }
    }
}

/// Device-type sampling weights
///
/// Order matches `uplift_model::DeviceType::ALL`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceWeights {
    /// Default: 70
    pub mobile: f64,
    /// Default: 25
    pub desktop: f64,
    /// Default: 5
    pub tablet: f64,
}

impl Default for DeviceWeights {
    fn default() -> Self {
        Self {
            mobile: 70.0,
            desktop: 25.0,
            tablet: 5.0,
        }
    }
}

impl DeviceWeights {
    /// Weights in `DeviceType::ALL` order
    pub fn as_array(&self) -> [f64; 3] {
        [self.mobile, self.desktop, self.tablet]
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// Country sampling weights
///
/// Order matches `uplift_model::Country::ALL`. TOML keys are the wire
/// country codes (`US`, `CA`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CountryWeights {
    /// Default: 50
    #[serde(rename = "US")]
    pub us: f64,
    /// Default: 10
    #[serde(rename = "CA")]
    pub ca: f64,
    /// Default: 15
    #[serde(rename = "GB")]
    pub gb: f64,
    /// Default: 10
    #[serde(rename = "AU")]
    pub au: f64,
    /// Default: 15
    #[serde(rename = "IN")]
    pub india: f64,
}

impl Default for CountryWeights {
    fn default() -> Self {
        Self {
            us: 50.0,
            ca: 10.0,
            gb: 15.0,
            au: 10.0,
            india: 15.0,
        }
    }
}

impl CountryWeights {
    /// Weights in `Country::ALL` order
    pub fn as_array(&self) -> [f64; 5] {
        [self.us, self.ca, self.gb, self.au, self.india]
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}
