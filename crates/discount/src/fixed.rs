use serde::{Deserialize, Serialize};

use orderdesk_members::Member;

use crate::policy::DiscountPolicy;

/// Flat amount taken off a VIP order.
pub const DEFAULT_FIXED_DISCOUNT_AMOUNT: i64 = 1000;

/// Fixed-amount policy: VIP members get `amount` off whatever the price.
///
/// The amount is deliberately not capped at the price, so a cheap item can end
/// up with a negative final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDiscountPolicy {
    amount: i64,
}

impl FixedDiscountPolicy {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

impl Default for FixedDiscountPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DISCOUNT_AMOUNT)
    }
}

impl DiscountPolicy for FixedDiscountPolicy {
    fn discount(&self, member: &Member, _price: i64) -> i64 {
        if member.grade().is_vip() { self.amount } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_members::Grade;
    use proptest::prelude::*;

    fn vip() -> Member {
        Member::new(1, "memberVIP", Grade::Vip)
    }

    fn basic() -> Member {
        Member::new(2, "memberBASIC", Grade::Basic)
    }

    #[test]
    fn vip_gets_fixed_amount() {
        let policy = FixedDiscountPolicy::default();

        assert_eq!(policy.discount(&vip(), 10_000), 1000);
    }

    #[test]
    fn basic_gets_nothing() {
        let policy = FixedDiscountPolicy::default();

        assert_eq!(policy.discount(&basic(), 10_000), 0);
    }

    #[test]
    fn vip_amount_is_not_capped_by_small_price() {
        let policy = FixedDiscountPolicy::default();

        assert_eq!(policy.discount(&vip(), 500), 1000);
    }

    #[test]
    fn custom_amount_is_used() {
        let policy = FixedDiscountPolicy::new(2500);

        assert_eq!(policy.amount(), 2500);
        assert_eq!(policy.discount(&vip(), 10_000), 2500);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: VIP discount is the constant, independent of price.
        #[test]
        fn vip_discount_ignores_price(price in 0i64..10_000_000) {
            prop_assert_eq!(FixedDiscountPolicy::default().discount(&vip(), price), 1000);
        }

        /// Property: BASIC members never get a discount.
        #[test]
        fn basic_discount_is_zero(price in 0i64..10_000_000) {
            prop_assert_eq!(FixedDiscountPolicy::default().discount(&basic(), price), 0);
        }
    }
}
