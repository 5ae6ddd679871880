use std::sync::Arc;

use orderdesk_members::Member;

/// Pricing strategy: how much comes off `price` for `member`.
///
/// Implementations must be pure (no IO, no interior state changes) so the same
/// inputs always give the same amount. Amounts are in the smallest currency unit
/// and are not clamped to `price`.
pub trait DiscountPolicy: Send + Sync + core::fmt::Debug {
    fn discount(&self, member: &Member, price: i64) -> i64;
}

impl<P> DiscountPolicy for Arc<P>
where
    P: DiscountPolicy + ?Sized,
{
    fn discount(&self, member: &Member, price: i64) -> i64 {
        (**self).discount(member, price)
    }
}

impl<P> DiscountPolicy for &P
where
    P: DiscountPolicy + ?Sized,
{
    fn discount(&self, member: &Member, price: i64) -> i64 {
        (**self).discount(member, price)
    }
}
