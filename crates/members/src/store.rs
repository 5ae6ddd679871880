use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use orderdesk_core::{Entity, MemberId};

use crate::member::Member;

/// Keyed member storage: the seam every backing (map, table, ...) satisfies.
///
/// Entries are keyed through `Entity::id`, so a stored member always has
/// `id == key`. Lookups of unknown ids answer `None`, never an error.
pub trait MemberStore: Send + Sync {
    /// Insert, or replace wholesale, the entry for `Entity::id(&member)`.
    fn save(&self, member: Member);
    fn find_by_id(&self, id: MemberId) -> Option<Member>;
}

impl<S> MemberStore for Arc<S>
where
    S: MemberStore + ?Sized,
{
    fn save(&self, member: Member) {
        (**self).save(member)
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        (**self).find_by_id(id)
    }
}

/// In-memory member store, lives as long as its owner.
#[derive(Debug)]
pub struct InMemoryMemberStore {
    inner: RwLock<HashMap<MemberId, Member>>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryMemberStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberStore for InMemoryMemberStore {
    fn save(&self, member: Member) {
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(member.id(), member);
            }
            Err(_) => {
                tracing::warn!(member_id = %member.id(), "member store lock poisoned; save dropped");
            }
        }
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => {
                tracing::warn!(member_id = %id, "member store lock poisoned; lookup treated as absent");
                return None;
            }
        };

        map.get(&id).cloned()
    }
}
