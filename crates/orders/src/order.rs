use serde::{Deserialize, Serialize};

use orderdesk_core::MemberId;

/// A priced order: an immutable value, equal to any other with the same fields.
///
/// The discount is fixed when the order is built and never recomputed. Prices
/// are in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    member_id: MemberId,
    item_name: String,
    item_price: i64,
    discount_price: i64,
}

impl Order {
    pub fn new(
        member_id: MemberId,
        item_name: impl Into<String>,
        item_price: i64,
        discount_price: i64,
    ) -> Self {
        Self {
            member_id,
            item_name: item_name.into(),
            item_price,
            discount_price,
        }
    }

    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn item_price(&self) -> i64 {
        self.item_price
    }

    pub fn discount_price(&self) -> i64 {
        self.discount_price
    }

    /// Amount to charge: item price minus discount. May go negative when a
    /// fixed discount exceeds the price.
    pub fn final_price(&self) -> i64 {
        self.item_price - self.discount_price
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order{{memberId={}, itemName='{}', itemPrice={}, discountPrice={}}}",
            self.member_id, self.item_name, self.item_price, self.discount_price
        )
    }
}
