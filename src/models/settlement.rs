//! Settlement transfers and the parameters that shape them

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::person::Person;
use crate::config::Settings;
use crate::error::{SplitterError, SplitterResult};

/// One payment from a debtor to a creditor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: Person,
    pub to: Person,
    pub amount: Money,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

/// Threshold used when reducing balances, and the precision amounts are shown at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettlementPolicy {
    /// Balances with a magnitude below this are treated as settled
    threshold: f64,
    /// Amounts are rounded to this many decimals for display and export
    decimal_places: u32,
}

impl SettlementPolicy {
    pub const DEFAULT_THRESHOLD: f64 = 0.01;
    pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

    /// Create a policy
    ///
    /// The threshold must exceed half a minor unit, otherwise a balance
    /// still owed could be shown as a zero transfer.
    pub fn new(threshold: f64, decimal_places: u32) -> SplitterResult<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(SplitterError::Config(format!(
                "settle threshold must be a positive number, got {}",
                threshold
            )));
        }

        if decimal_places > 8 {
            return Err(SplitterError::Config(format!(
                "decimal places must be at most 8, got {}",
                decimal_places
            )));
        }

        let half_unit = 0.5 * 10f64.powi(-(decimal_places as i32));
        if threshold <= half_unit {
            return Err(SplitterError::Config(format!(
                "settle threshold {} must exceed half a minor unit ({}) at {} decimal places",
                threshold, half_unit, decimal_places
            )));
        }

        Ok(Self {
            threshold,
            decimal_places,
        })
    }

    /// Build the policy described by user settings
    pub fn from_settings(settings: &Settings) -> SplitterResult<Self> {
        Self::new(settings.settle_threshold, settings.decimal_places)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }
}

impl Default for SettlementPolicy {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            decimal_places: Self::DEFAULT_DECIMAL_PLACES,
        }
    }
}
