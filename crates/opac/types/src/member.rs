//! Member records: who belongs to the library
//!
//! A `Member` is created only through a successful registry registration
//! and destroyed only through a successful removal. Name, email, and age
//! are mutable in place via a presence-tagged `MemberUpdate`.

use crate::{Fee, FeeTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a library member
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(pub String);

impl MemberId {
    /// Generate a new random MemberId
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Create a MemberId from a known string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered library member
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    /// The member's identity
    pub id: MemberId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Age in years; determines the fee tier
    pub age: u32,
    /// When the member joined
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member record
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            joined_at: Utc::now(),
        }
    }

    /// The fee tier this member falls into
    pub fn tier(&self) -> FeeTier {
        FeeTier::for_age(self.age)
    }

    /// The fee this member contributes
    pub fn fee(&self) -> Fee {
        self.tier().fee()
    }
}

/// A presence-tagged patch for updating a member
///
/// `None` means "leave the stored value unchanged". `Some(value)` always
/// applies, including `Some(0)` for age and `Some("")` for name or email.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    /// Replacement display name
    pub name: Option<String>,
    /// Replacement contact email
    pub email: Option<String>,
    /// Replacement age
    pub age: Option<u32>,
}

impl MemberUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_generate() {
        let id = MemberId::generate();
        assert!(!id.0.is_empty());
    }

    #[test]
    fn test_member_id_display() {
        let id = MemberId::new("m-42");
        assert_eq!(format!("{}", id), "m-42");
    }

    #[test]
    fn test_member_fee_follows_age() {
        let member = Member::new(MemberId::new("m1"), "Ada", "ada@example.org", 17);
        assert_eq!(member.tier(), FeeTier::Student);
        assert_eq!(member.fee(), Fee::new(10));
    }

    #[test]
    fn test_update_builders() {
        let update = MemberUpdate::new()
            .with_name("Grace")
            .with_email("grace@example.org")
            .with_age(30);

        assert_eq!(update.name.as_deref(), Some("Grace"));
        assert_eq!(update.email.as_deref(), Some("grace@example.org"));
        assert_eq!(update.age, Some(30));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_empty_values_are_present() {
        // A supplied empty string or zero age is a real value, not "absent"
        let update = MemberUpdate::new().with_name("").with_age(0);
        assert_eq!(update.name.as_deref(), Some(""));
        assert_eq!(update.age, Some(0));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_default_is_empty() {
        assert!(MemberUpdate::default().is_empty());
    }
}
