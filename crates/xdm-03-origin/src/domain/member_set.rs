//! # Member Set
//!
//! Address set with O(1) membership, insert and remove. Removal swaps the
//! last element into the hole, so enumeration order is not insertion order.

use shared_types::Address;
use std::collections::HashMap;

/// Enumerable address set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSet {
    values: Vec<Address>,
    positions: HashMap<Address, usize>,
}

impl MemberSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert; false if already present.
    pub fn add(&mut self, member: Address) -> bool {
        if self.positions.contains_key(&member) {
            return false;
        }
        self.positions.insert(member, self.values.len());
        self.values.push(member);
        true
    }

    /// Remove; false if absent.
    pub fn remove(&mut self, member: &Address) -> bool {
        let Some(index) = self.positions.remove(member) else {
            return false;
        };
        self.values.swap_remove(index);
        if let Some(moved) = self.values.get(index) {
            self.positions.insert(*moved, index);
        }
        true
    }

    /// Membership check.
    pub fn contains(&self, member: &Address) -> bool {
        self.positions.contains_key(member)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Member at `index` in the current enumeration order.
    pub fn at(&self, index: usize) -> Option<Address> {
        self.values.get(index).copied()
    }

    /// All members.
    pub fn values(&self) -> &[Address] {
        &self.values
    }
}
