use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, MemberId};

/// Membership tier. Drives discount eligibility and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Basic,
    Vip,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Basic => "BASIC",
            Grade::Vip => "VIP",
        }
    }

    pub fn is_vip(&self) -> bool {
        matches!(self, Grade::Vip)
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered (or about to be registered) member.
///
/// Immutable once built; re-registering an id stores a whole new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    grade: Grade,
}

impl Member {
    pub fn new(id: i64, name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id: MemberId::new(id),
            name: name.into(),
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> MemberId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_exposes_its_fields() {
        let member = Member::new(1, "memberA", Grade::Vip);

        assert_eq!(member.id(), MemberId::new(1));
        assert_eq!(member.name(), "memberA");
        assert_eq!(member.grade(), Grade::Vip);
    }

    #[test]
    fn grade_renders_uppercase() {
        assert_eq!(Grade::Vip.to_string(), "VIP");
        assert_eq!(Grade::Basic.to_string(), "BASIC");
        assert!(Grade::Vip.is_vip());
        assert!(!Grade::Basic.is_vip());
    }

    #[test]
    fn serializes_with_uppercase_grade() {
        let member = Member::new(2, "memberB", Grade::Basic);
        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 2, "name": "memberB", "grade": "BASIC" })
        );

        let back: Member = serde_json::from_value(json).unwrap();
        assert_eq!(back, member);
    }
}
