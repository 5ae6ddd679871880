//! Composition root.
//!
//! `AppConfig` makes exactly two decisions: which member store backs the
//! services, and which discount policy prices orders. Every service accessor
//! builds a fresh wrapper around those same two handles, so a registry and a
//! pricer taken from one `AppConfig` can never end up on different stores.

use std::sync::Arc;

use orderdesk_discount::DiscountPolicyKind;
use orderdesk_members::{InMemoryMemberStore, MemberRegistry};
use orderdesk_orders::OrderPricer;

use crate::settings::Settings;

pub type SharedMemberStore = Arc<InMemoryMemberStore>;
pub type SharedDiscountPolicy = Arc<DiscountPolicyKind>;

pub type AppMemberRegistry = MemberRegistry<SharedMemberStore>;
pub type AppOrderPricer = OrderPricer<SharedMemberStore, SharedDiscountPolicy>;

#[derive(Debug, Clone)]
pub struct AppConfig {
    member_store: SharedMemberStore,
    discount_policy: SharedDiscountPolicy,
}

impl AppConfig {
    /// Default wiring: in-memory store, fixed 1000 discount.
    pub fn new() -> Self {
        Self::with_policy(DiscountPolicyKind::default())
    }

    pub fn with_policy(policy: DiscountPolicyKind) -> Self {
        tracing::info!(policy = policy.name(), "wiring services");
        Self {
            member_store: Arc::new(InMemoryMemberStore::new()),
            discount_policy: Arc::new(policy),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_policy(settings.discount_policy())
    }

    /// The one store instance every service built here shares.
    pub fn member_store(&self) -> SharedMemberStore {
        Arc::clone(&self.member_store)
    }

    pub fn discount_policy(&self) -> SharedDiscountPolicy {
        Arc::clone(&self.discount_policy)
    }

    pub fn member_registry(&self) -> AppMemberRegistry {
        MemberRegistry::new(self.member_store())
    }

    pub fn order_pricer(&self) -> AppOrderPricer {
        OrderPricer::new(self.member_store(), self.discount_policy())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_discount::{FixedDiscountPolicy, RateDiscountPolicy};

    #[test]
    fn store_accessor_returns_same_instance() {
        let config = AppConfig::new();

        assert!(Arc::ptr_eq(&config.member_store(), &config.member_store()));
    }

    #[test]
    fn default_policy_is_fixed() {
        let config = AppConfig::new();

        assert_eq!(
            *config.discount_policy(),
            DiscountPolicyKind::Fixed(FixedDiscountPolicy::default())
        );
    }

    #[test]
    fn pricer_uses_configured_policy() {
        let config = AppConfig::with_policy(RateDiscountPolicy::new(20).into());

        assert_eq!(
            **config.order_pricer().policy(),
            DiscountPolicyKind::Rate(RateDiscountPolicy::new(20))
        );
    }

    #[test]
    fn from_settings_picks_policy() {
        let settings = Settings {
            policy: crate::settings::PolicyChoice::Rate,
            ..Settings::default()
        };

        let config = AppConfig::from_settings(&settings);

        assert_eq!(config.discount_policy().name(), "rate");
    }

    #[test]
    fn separate_configs_have_separate_stores() {
        let a = AppConfig::new();
        let b = AppConfig::new();

        assert!(!Arc::ptr_eq(&a.member_store(), &b.member_store()));
    }
}
