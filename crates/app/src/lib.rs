//! Application wiring for orderdesk.
//!
//! `AppConfig` is the composition root: the one place that picks the member
//! store and discount policy and hands them to the services.

pub mod config;
pub mod demo;
pub mod settings;

pub use config::AppConfig;
pub use settings::{ConfigError, Settings};
