//! Order pricing service.
//!
//! ```text
//! create_order(member_id, item, price)
//!   ↓
//! 1. look up member in the shared store
//!   ↓ (absent → MemberNotFound, policy never runs)
//! 2. discount = policy.discount(&member, price)
//!   ↓
//! 3. Order { member_id, item, price, discount }
//! ```

use orderdesk_core::MemberId;
use orderdesk_discount::DiscountPolicy;
use orderdesk_members::MemberStore;

use crate::error::{OrderError, OrderResult};
use crate::order::Order;

/// Prices orders for registered members.
///
/// Both the store and the policy are injected handles; the pricer does not own
/// the member data and never caches lookups or discounts between calls.
#[derive(Debug)]
pub struct OrderPricer<S, P>
where
    S: MemberStore,
    P: DiscountPolicy,
{
    store: S,
    policy: P,
}

impl<S, P> OrderPricer<S, P>
where
    S: MemberStore,
    P: DiscountPolicy,
{
    pub fn new(store: S, policy: P) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Price one order for `member_id`.
    ///
    /// Fails with `MemberNotFound` when the member was never registered.
    pub fn create_order(
        &self,
        member_id: MemberId,
        item_name: impl Into<String>,
        item_price: i64,
    ) -> OrderResult<Order> {
        let member = self
            .store
            .find_by_id(member_id)
            .ok_or(OrderError::MemberNotFound(member_id))?;

        let discount = self.policy.discount(&member, item_price);
        let order = Order::new(member_id, item_name, item_price, discount);

        tracing::debug!(
            member_id = %member_id,
            grade = %member.grade(),
            item_name = order.item_name(),
            item_price,
            discount,
            "order priced"
        );

        Ok(order)
    }
}
