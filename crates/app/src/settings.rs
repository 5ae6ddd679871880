//! Environment-driven settings.
//!
//! | Variable                          | Default |
//! |-----------------------------------|---------|
//! | `ORDERDESK_DISCOUNT_POLICY`       | `fixed` (`fixed` or `rate`) |
//! | `ORDERDESK_FIXED_DISCOUNT_AMOUNT` | `1000`  |
//! | `ORDERDESK_DISCOUNT_PERCENT`      | `10`    |

use thiserror::Error;

use orderdesk_discount::{
    DEFAULT_DISCOUNT_PERCENT, DEFAULT_FIXED_DISCOUNT_AMOUNT, DiscountPolicyKind,
    FixedDiscountPolicy, RateDiscountPolicy,
};

pub const DISCOUNT_POLICY_ENV: &str = "ORDERDESK_DISCOUNT_POLICY";
pub const FIXED_DISCOUNT_AMOUNT_ENV: &str = "ORDERDESK_FIXED_DISCOUNT_AMOUNT";
pub const DISCOUNT_PERCENT_ENV: &str = "ORDERDESK_DISCOUNT_PERCENT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown discount policy '{0}' (expected 'fixed' or 'rate')")]
    UnknownPolicy(String),

    #[error("{key} must be an integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be within {min}..={max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Which policy variant to wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PolicyChoice {
    #[default]
    Fixed,
    Rate,
}

impl core::str::FromStr for PolicyChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fix" => Ok(PolicyChoice::Fixed),
            "rate" | "percent" | "percentage" => Ok(PolicyChoice::Rate),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub policy: PolicyChoice,
    pub fixed_discount_amount: i64,
    pub discount_percent: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: PolicyChoice::default(),
            fixed_discount_amount: DEFAULT_FIXED_DISCOUNT_AMOUNT,
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(DISCOUNT_POLICY_ENV) {
            settings.policy = raw.parse()?;
        }
        if let Some(raw) = lookup(FIXED_DISCOUNT_AMOUNT_ENV) {
            settings.fixed_discount_amount =
                parse_in_range(FIXED_DISCOUNT_AMOUNT_ENV, &raw, 0, i64::MAX)?;
        }
        if let Some(raw) = lookup(DISCOUNT_PERCENT_ENV) {
            settings.discount_percent = parse_in_range(DISCOUNT_PERCENT_ENV, &raw, 0, 100)?;
        }

        Ok(settings)
    }

    pub fn discount_policy(&self) -> DiscountPolicyKind {
        match self.policy {
            PolicyChoice::Fixed => FixedDiscountPolicy::new(self.fixed_discount_amount).into(),
            PolicyChoice::Rate => RateDiscountPolicy::new(self.discount_percent).into(),
        }
    }
}

/// Discount amounts are never negative and a rate never exceeds 100%.
fn parse_in_range(key: &'static str, raw: &str, min: i64, max: i64) -> Result<i64, ConfigError> {
    let value = raw.trim().parse::<i64>().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })?;

    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}
