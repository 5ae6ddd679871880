//! `orderdesk-core`: domain foundation building blocks.
//!
//! Identity primitives shared by the member, discount and order crates (no
//! storage, no wiring).

pub mod entity;
pub mod id;

pub use entity::Entity;
pub use id::MemberId;
