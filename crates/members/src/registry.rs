use orderdesk_core::{Entity, MemberId};

use crate::member::Member;
use crate::store::MemberStore;

/// Member service: joins and looks up members.
///
/// A narrow contract over whichever `MemberStore` was injected. The store handle
/// may be shared with other services (e.g. the order pricer), so the registry
/// never assumes it owns the data.
#[derive(Debug)]
pub struct MemberRegistry<S>
where
    S: MemberStore,
{
    store: S,
}

impl<S> MemberRegistry<S>
where
    S: MemberStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a member. An existing entry with the same id is replaced.
    pub fn register(&self, member: Member) {
        tracing::debug!(
            member_id = %member.id(),
            grade = %member.grade(),
            "registering member"
        );
        self.store.save(member);
    }

    pub fn find(&self, id: MemberId) -> Option<Member> {
        let found = self.store.find_by_id(id);
        tracing::debug!(member_id = %id, found = found.is_some(), "member lookup");
        found
    }
}
