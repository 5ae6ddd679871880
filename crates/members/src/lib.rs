//! Membership domain module.
//!
//! Members, their grade, the storage seam they live behind, and the registry
//! service callers use to join and look up members.

pub mod member;
pub mod registry;
pub mod store;

pub use member::{Grade, Member};
pub use orderdesk_core::{Entity, MemberId};
pub use registry::MemberRegistry;
pub use store::{InMemoryMemberStore, MemberStore};
