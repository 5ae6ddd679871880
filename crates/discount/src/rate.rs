use serde::{Deserialize, Serialize};

use orderdesk_members::Member;

use crate::policy::DiscountPolicy;

/// Percentage taken off a VIP order.
pub const DEFAULT_DISCOUNT_PERCENT: i64 = 10;

/// Percentage policy: VIP members get `price * percent / 100`, truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDiscountPolicy {
    percent: i64,
}

impl RateDiscountPolicy {
    pub fn new(percent: i64) -> Self {
        Self { percent }
    }

    pub fn percent(&self) -> i64 {
        self.percent
    }
}

impl Default for RateDiscountPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOUNT_PERCENT)
    }
}

impl DiscountPolicy for RateDiscountPolicy {
    fn discount(&self, member: &Member, price: i64) -> i64 {
        if member.grade().is_vip() {
            // Widened so any i64 price multiplies safely; division truncates
            // (3333 at 10% is 333).
            let discount = i128::from(price) * i128::from(self.percent) / 100;
            i64::try_from(discount).unwrap_or(if discount < 0 { i64::MIN } else { i64::MAX })
        } else {
            0
        }
    }
}
