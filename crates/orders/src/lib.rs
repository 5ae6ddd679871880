//! Order pricing module.
//!
//! Looks members up, applies the injected discount policy, and hands back an
//! immutable priced `Order`. No IO, no persistence of orders.

pub mod error;
pub mod order;
pub mod pricer;

pub use error::{OrderError, OrderResult};
pub use order::Order;
pub use pricer::OrderPricer;
