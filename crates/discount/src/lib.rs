//! Discount policies.
//!
//! A policy maps `(member, price)` to a discount amount, purely. Only VIP members
//! are eligible; BASIC members always get zero. Which policy applies is decided
//! once, when the services are wired, never per call.

pub mod fixed;
pub mod kind;
pub mod policy;
pub mod rate;

pub use fixed::{DEFAULT_FIXED_DISCOUNT_AMOUNT, FixedDiscountPolicy};
pub use kind::DiscountPolicyKind;
pub use policy::DiscountPolicy;
pub use rate::{DEFAULT_DISCOUNT_PERCENT, RateDiscountPolicy};
