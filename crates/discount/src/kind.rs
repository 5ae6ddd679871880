use serde::{Deserialize, Serialize};

use orderdesk_members::Member;

use crate::fixed::FixedDiscountPolicy;
use crate::policy::DiscountPolicy;
use crate::rate::RateDiscountPolicy;

/// Closed set of the policies the application knows how to wire.
///
/// Configuration yields one of these, so the choice of strategy is plain data
/// handed to the composition root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiscountPolicyKind {
    Fixed(FixedDiscountPolicy),
    Rate(RateDiscountPolicy),
}

impl DiscountPolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            DiscountPolicyKind::Fixed(_) => "fixed",
            DiscountPolicyKind::Rate(_) => "rate",
        }
    }
}

impl Default for DiscountPolicyKind {
    fn default() -> Self {
        DiscountPolicyKind::Fixed(FixedDiscountPolicy::default())
    }
}

impl From<FixedDiscountPolicy> for DiscountPolicyKind {
    fn from(value: FixedDiscountPolicy) -> Self {
        DiscountPolicyKind::Fixed(value)
    }
}

impl From<RateDiscountPolicy> for DiscountPolicyKind {
    fn from(value: RateDiscountPolicy) -> Self {
        DiscountPolicyKind::Rate(value)
    }
}

impl DiscountPolicy for DiscountPolicyKind {
    fn discount(&self, member: &Member, price: i64) -> i64 {
        match self {
            DiscountPolicyKind::Fixed(p) => p.discount(member, price),
            DiscountPolicyKind::Rate(p) => p.discount(member, price),
        }
    }
}
