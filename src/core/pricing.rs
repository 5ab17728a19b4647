use crate::domain::ports::PricingPolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_CHARGE: i64 = 10;
pub const DEFAULT_BASE_HOURS: i64 = 2;
pub const DEFAULT_HOURLY_RATE: i64 = 10;

/// Flat charge up to `base_hours` (inclusive), then `hourly_rate` per extra hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRatePricing {
    pub base_charge: i64,
    pub base_hours: i64,
    pub hourly_rate: i64,
}

impl FlatRatePricing {
    pub fn new(base_charge: i64, base_hours: i64, hourly_rate: i64) -> Self {
        Self {
            base_charge,
            base_hours,
            hourly_rate,
        }
    }
}

impl Default for FlatRatePricing {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_CHARGE, DEFAULT_BASE_HOURS, DEFAULT_HOURLY_RATE)
    }
}

impl PricingPolicy for FlatRatePricing {
    fn charge(&self, hours: i64) -> Option<i64> {
        if hours <= self.base_hours {
            return Some(self.base_charge);
        }
        hours
            .checked_sub(self.base_hours)?
            .checked_mul(self.hourly_rate)?
            .checked_add(self.base_charge)
    }
}
