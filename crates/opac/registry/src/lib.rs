//! Membership Registry — lifecycle management for library members
//!
//! Owns the set of member records, enforces identity uniqueness, and
//! maintains a running fee total consistent with the current member set.
//! The total is adjusted incrementally on every mutation; it is never
//! recomputed from the member set on the query path.

#![deny(unsafe_code)]

use opac_types::{fee_for_age, Fee, Member, MemberId, MemberUpdate, RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// The canonical "who's in" data structure for the library.
///
/// Invariants, holding after every operation:
/// - `total_fee` equals the sum of `fee(member.age)` over all present members
/// - `member_count` equals the number of present members
///
/// Every failed operation leaves the registry bit-for-bit unchanged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipRegistry {
    /// All member records, keyed by member ID
    members: HashMap<MemberId, Member>,
    /// Running total of fees across all present members
    total_fee: Fee,
    /// Number of present members, kept explicit for O(1) averaging
    member_count: usize,
}

impl MembershipRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            total_fee: Fee::zero(),
            member_count: 0,
        }
    }

    /// Register a new member
    ///
    /// Fails with `AlreadyExists` when the ID is taken; the registry is
    /// left untouched in that case.
    pub fn register(&mut self, member: Member) -> RegistryResult<()> {
        if self.members.contains_key(&member.id) {
            warn!(member = %member.id, "Registration rejected: duplicate id");
            return Err(RegistryError::AlreadyExists(member.id));
        }

        let fee = member.fee();
        self.total_fee = self.total_fee.saturating_add(fee);
        self.member_count += 1;

        info!(member = %member.id, fee = %fee, "Member registered");

        self.members.insert(member.id.clone(), member);
        Ok(())
    }

    /// Apply a presence-tagged update to a member
    ///
    /// Supplied fields replace the stored fields; absent fields stay as
    /// they are. An age change adjusts the fee total by the tier delta,
    /// computed against the age on record before it is overwritten.
    pub fn update(&mut self, id: &MemberId, update: MemberUpdate) -> RegistryResult<()> {
        let member = self
            .members
            .get_mut(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;

        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(email) = update.email {
            member.email = email;
        }
        if let Some(age) = update.age {
            let old_fee = fee_for_age(member.age);
            let new_fee = fee_for_age(age);
            self.total_fee = self.total_fee.saturating_sub(old_fee).saturating_add(new_fee);
            member.age = age;

            info!(member = %id, old_fee = %old_fee, new_fee = %new_fee, "Member age updated");
        }

        Ok(())
    }

    /// Remove a member, returning the removed record
    ///
    /// Fails with `NotFound` when the ID is absent; the registry is left
    /// untouched in that case.
    pub fn remove(&mut self, id: &MemberId) -> RegistryResult<Member> {
        let member = self
            .members
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;

        let fee = member.fee();
        self.total_fee = self.total_fee.saturating_sub(fee);
        self.member_count -= 1;

        info!(member = %id, fee = %fee, "Member removed");

        Ok(member)
    }

    // --- Query methods ---

    /// Snapshot of all current members (order not significant)
    pub fn roster(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    /// Get a member record
    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    /// Check whether an ID is registered
    pub fn contains(&self, id: &MemberId) -> bool {
        self.members.contains_key(id)
    }

    /// True when no members are registered
    pub fn is_empty(&self) -> bool {
        self.member_count == 0
    }

    /// Number of present members
    pub fn member_count(&self) -> usize {
        self.member_count
    }

    /// Running total of membership fees
    pub fn total_fee(&self) -> Fee {
        self.total_fee
    }

    /// Average fee per member; 0.0 for an empty registry
    pub fn average_fee(&self) -> f64 {
        if self.member_count == 0 {
            return 0.0;
        }
        self.total_fee.0 as f64 / self.member_count as f64
    }
}

impl Default for MembershipRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, age: u32) -> Member {
        Member::new(MemberId::new(id), format!("Member {}", id), format!("{}@example.org", id), age)
    }

    /// The accumulator must always agree with a from-scratch recomputation
    fn assert_books_balance(registry: &MembershipRegistry) {
        let expected = registry
            .roster()
            .iter()
            .fold(Fee::zero(), |acc, m| acc.saturating_add(m.fee()));
        assert_eq!(registry.total_fee(), expected);
        assert_eq!(registry.member_count(), registry.roster().len());
    }

    #[test]
    fn test_register_and_query() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();

        assert!(registry.contains(&MemberId::new("m1")));
        assert_eq!(registry.get(&MemberId::new("m1")).unwrap().age, 30);
        assert_eq!(registry.member_count(), 1);
        assert_eq!(registry.total_fee(), Fee::new(20));
        assert_books_balance(&registry);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 17)).unwrap();

        let result = registry.register(member("m1", 40));
        assert!(matches!(result, Err(RegistryError::AlreadyExists(_))));

        // Rejection is an atomic no-op
        assert_eq!(registry.member_count(), 1);
        assert_eq!(registry.total_fee(), Fee::new(10));
        assert_eq!(registry.get(&MemberId::new("m1")).unwrap().age, 17);
        assert_books_balance(&registry);
    }

    #[test]
    fn test_fee_accumulation_scenario() {
        let mut registry = MembershipRegistry::new();

        registry.register(member("m1", 17)).unwrap();
        assert_eq!(registry.total_fee(), Fee::new(10));

        registry.register(member("m2", 70)).unwrap();
        assert_eq!(registry.total_fee(), Fee::new(25));
        assert_eq!(registry.average_fee(), 12.5);
        assert_books_balance(&registry);
    }

    #[test]
    fn test_update_age_adjusts_total_by_delta() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 17)).unwrap();
        registry.register(member("m2", 70)).unwrap();

        // Student -> Regular moves the total from 25 to 35
        registry
            .update(&MemberId::new("m1"), MemberUpdate::new().with_age(30))
            .unwrap();

        assert_eq!(registry.total_fee(), Fee::new(35));
        assert_eq!(registry.get(&MemberId::new("m1")).unwrap().age, 30);
        assert_books_balance(&registry);
    }

    #[test]
    fn test_update_within_tier_keeps_total() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 20)).unwrap();

        registry
            .update(&MemberId::new("m1"), MemberUpdate::new().with_age(40))
            .unwrap();

        assert_eq!(registry.total_fee(), Fee::new(20));
        assert_books_balance(&registry);
    }

    #[test]
    fn test_update_presence_semantics() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();

        // Absent fields stay untouched
        registry
            .update(&MemberId::new("m1"), MemberUpdate::new().with_name("Grace"))
            .unwrap();
        let m = registry.get(&MemberId::new("m1")).unwrap();
        assert_eq!(m.name, "Grace");
        assert_eq!(m.email, "m1@example.org");
        assert_eq!(m.age, 30);

        // Supplied empty string and zero age apply deliberately
        registry
            .update(
                &MemberId::new("m1"),
                MemberUpdate::new().with_email("").with_age(0),
            )
            .unwrap();
        let m = registry.get(&MemberId::new("m1")).unwrap();
        assert_eq!(m.email, "");
        assert_eq!(m.age, 0);
        assert_eq!(registry.total_fee(), Fee::new(10)); // Regular -> Student
        assert_books_balance(&registry);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();

        registry
            .update(&MemberId::new("m1"), MemberUpdate::default())
            .unwrap();

        assert_eq!(registry.get(&MemberId::new("m1")).unwrap().name, "Member m1");
        assert_eq!(registry.total_fee(), Fee::new(20));
        assert_books_balance(&registry);
    }

    #[test]
    fn test_update_missing_member() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();

        let result = registry.update(&MemberId::new("ghost"), MemberUpdate::new().with_age(50));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
        assert_eq!(registry.total_fee(), Fee::new(20));
        assert_books_balance(&registry);
    }

    #[test]
    fn test_remove_adjusts_total() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();
        registry.register(member("m2", 70)).unwrap();

        let removed = registry.remove(&MemberId::new("m2")).unwrap();
        assert_eq!(removed.age, 70);

        assert_eq!(registry.total_fee(), Fee::new(20));
        assert_eq!(registry.member_count(), 1);
        assert!(!registry.contains(&MemberId::new("m2")));
        assert_books_balance(&registry);
    }

    #[test]
    fn test_remove_missing_member() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();

        let result = registry.remove(&MemberId::new("ghost"));
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
        assert_eq!(registry.member_count(), 1);
        assert_eq!(registry.total_fee(), Fee::new(20));
        assert_books_balance(&registry);
    }

    #[test]
    fn test_average_on_empty_registry() {
        let registry = MembershipRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.average_fee(), 0.0);
        assert!(registry.roster().is_empty());
    }

    #[test]
    fn test_register_remove_register_again() {
        let mut registry = MembershipRegistry::new();
        registry.register(member("m1", 30)).unwrap();
        registry.remove(&MemberId::new("m1")).unwrap();

        // The ID is free again after removal
        registry.register(member("m1", 70)).unwrap();
        assert_eq!(registry.total_fee(), Fee::new(15));
        assert_books_balance(&registry);
    }
}
