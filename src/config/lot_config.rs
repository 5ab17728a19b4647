use crate::core::parking_lot::LotRules;
use crate::core::pricing::{
    FlatRatePricing, DEFAULT_BASE_CHARGE, DEFAULT_BASE_HOURS, DEFAULT_HOURLY_RATE,
};
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{validate_non_negative, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    pub pricing: PricingConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub base_charge: i64,
    pub base_hours: i64,
    pub hourly_rate: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_charge: DEFAULT_BASE_CHARGE,
            base_hours: DEFAULT_BASE_HOURS,
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub reject_duplicate_park: bool,
    pub max_capacity: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let rules = LotRules::default();
        Self {
            reject_duplicate_park: rules.reject_duplicate_park,
            max_capacity: rules.max_capacity,
        }
    }
}

impl LotConfig {
    /// Loads and parses a TOML file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ParkingError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ParkingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn pricing(&self) -> FlatRatePricing {
        FlatRatePricing::new(
            self.pricing.base_charge,
            self.pricing.base_hours,
            self.pricing.hourly_rate,
        )
    }

    pub fn rules(&self) -> LotRules {
        LotRules {
            reject_duplicate_park: self.rules.reject_duplicate_park,
            max_capacity: self.rules.max_capacity,
        }
    }
}

impl Validate for LotConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("pricing.base_charge", self.pricing.base_charge)?;
        validate_non_negative("pricing.base_hours", self.pricing.base_hours)?;
        validate_non_negative("pricing.hourly_rate", self.pricing.hourly_rate)?;
        if self.rules.max_capacity == 0 {
            return Err(ParkingError::InvalidConfigValueError {
                field: "rules.max_capacity".to_string(),
                value: "0".to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
