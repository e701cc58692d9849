//! Component B: the staker record and the ordered stores that hold pending
//! and current stakers.
//!
//! Grounded on `avalanche_types::platformvm::txs::{add_validator,
//! add_delegator, add_permissionless_validator, add_permissionless_delegator}`
//! for the staking transaction shapes these records summarize, and on
//! `avalanche_types::txs::utxo::Id`'s manual `Ord` (tuple-of-fields,
//! `.then_with()` chain) for how the total order below is implemented.
use std::collections::{BTreeSet, HashMap, HashSet};

use avalanche_types::ids::{node, Id};
use serde::{Deserialize, Serialize};

/// Where a staker sits in the promotion/removal total order. Lower values
/// sort first. Pending-set priorities (0-5) and current-set priorities
/// (6-10) are never compared against each other since pending and current
/// stakers live in separate stores, but sharing one enum keeps a single
/// definition of "how stakers of different kinds tie-break."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Priority {
    // -- pending set: order of promotion to current --
    PrimaryNetworkApricotDelegatorPending = 0,
    PrimaryNetworkValidatorPending = 1,
    PrimaryNetworkBanffDelegatorPending = 2,
    SupernetPermissionlessValidatorPending = 3,
    SupernetPermissionlessDelegatorPending = 4,
    SupernetPermissionedValidatorPending = 5,
    // -- current set: order of removal at expiry --
    SupernetPermissionedValidatorCurrent = 6,
    SupernetPermissionlessDelegatorCurrent = 7,
    SupernetPermissionlessValidatorCurrent = 8,
    PrimaryNetworkDelegatorCurrent = 9,
    PrimaryNetworkValidatorCurrent = 10,
}

impl Priority {
    pub fn is_pending(self) -> bool {
        (self as u8) <= (Priority::SupernetPermissionedValidatorPending as u8)
    }

    pub fn is_current(self) -> bool {
        !self.is_pending()
    }

    pub fn is_validator(self) -> bool {
        matches!(
            self,
            Priority::PrimaryNetworkValidatorPending
                | Priority::SupernetPermissionlessValidatorPending
                | Priority::SupernetPermissionedValidatorPending
                | Priority::SupernetPermissionedValidatorCurrent
                | Priority::SupernetPermissionlessValidatorCurrent
                | Priority::PrimaryNetworkValidatorCurrent
        )
    }

    pub fn is_delegator(self) -> bool {
        !self.is_validator()
    }
}

/// A staking commitment: either a validator or a delegator, of the primary
/// network or of a supernet, in the pending or current set.
///
/// Ordered by `(next_time, priority, tx_id)`, the total order the pending
/// and current stores iterate in. `next_time` is the start time while
/// pending, the end time once current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staker {
    pub tx_id: Id,
    pub node_id: node::Id,
    pub supernet_id: Id,
    pub weight: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub next_time: u64,
    pub priority: Priority,
    /// Reward this staker will mint if it completes its term without being
    /// slashed; zero for stakers ineligible for a reward (e.g. delegatees
    /// past the max bonus share).
    pub potential_reward: u64,
    /// Delegation fee this validator charges, in parts-per-million. Only
    /// meaningful when `priority.is_validator()`.
    pub delegation_fee_ppm: u32,
    /// Compressed BLS public key bytes, present only for primary-network
    /// validators registered with a `ProofOfPossession` (see
    /// `avalanche_types::key::bls::ProofOfPossession`, which carries the
    /// same compressed-bytes shape rather than the raw `blst` key type so
    /// this record stays serde-friendly).
    pub bls_public_key: Option<Vec<u8>>,
}

impl PartialEq for Staker {
    fn eq(&self, other: &Self) -> bool {
        self.tx_id == other.tx_id
    }
}
impl Eq for Staker {}

impl Ord for Staker {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.next_time
            .cmp(&other.next_time)
            .then_with(|| self.priority.cmp(&other.priority))
            .then_with(|| self.tx_id.cmp(&other.tx_id))
    }
}

impl PartialOrd for Staker {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Tracks weight added/removed for a `(supernet, node)` pair at a given
/// height, for historical validator-set reconstruction (spec "Staker store"
/// design note). A validator addition is `weight_delta > 0`; a validator's
/// removal, or a delegator's add/remove against an existing validator, is
/// folded into the same signed delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeightDiff {
    pub amount: u64,
    pub decrease: bool,
}

impl WeightDiff {
    pub fn add(&mut self, amount: u64) -> crate::errors::Result<()> {
        if self.decrease {
            if amount >= self.amount {
                self.amount = amount - self.amount;
                self.decrease = false;
            } else {
                self.amount -= amount;
            }
        } else {
            self.amount = self
                .amount
                .checked_add(amount)
                .ok_or_else(|| crate::errors::Error::Overflow {
                    during: "accumulating validator weight diff".to_string(),
                })?;
        }
        Ok(())
    }

    pub fn subtract(&mut self, amount: u64) -> crate::errors::Result<()> {
        if self.decrease {
            self.amount = self
                .amount
                .checked_add(amount)
                .ok_or_else(|| crate::errors::Error::Overflow {
                    during: "accumulating validator weight diff".to_string(),
                })?;
        } else if amount >= self.amount {
            self.amount = amount - self.amount;
            self.decrease = true;
        } else {
            self.amount -= amount;
        }
        Ok(())
    }
}

/// An ordered store of stakers: a global tree for total-order iteration plus
/// per-`(supernet, node)` indexes for point lookups, as described for the
/// "Staker store" component. One instance models the pending set, another
/// the current set; promotion moves a `Staker` from one store to the other
/// (handled by the caller, not by this type).
#[derive(Debug, Clone, Default)]
pub struct StakerStore {
    by_order: BTreeSet<Staker>,
    validators: HashMap<(Id, node::Id), Staker>,
    delegators: HashMap<(Id, node::Id), BTreeSet<Staker>>,
}

impl StakerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, staker: Staker) {
        if staker.priority.is_validator() {
            self.validators
                .insert((staker.supernet_id, staker.node_id), staker.clone());
        } else {
            self.delegators
                .entry((staker.supernet_id, staker.node_id))
                .or_default()
                .insert(staker.clone());
        }
        self.by_order.insert(staker);
    }

    pub fn remove(&mut self, staker: &Staker) {
        self.by_order.remove(staker);
        if staker.priority.is_validator() {
            self.validators
                .remove(&(staker.supernet_id, staker.node_id));
        } else if let Some(set) = self
            .delegators
            .get_mut(&(staker.supernet_id, staker.node_id))
        {
            set.remove(staker);
        }
    }

    pub fn get_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<&Staker> {
        self.validators.get(&(*supernet_id, *node_id))
    }

    pub fn delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker> {
        self.delegators
            .get(&(*supernet_id, *node_id))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Iterates the full store in total order (ascending `next_time`).
    pub fn iter(&self) -> impl Iterator<Item = &Staker> {
        self.by_order.iter()
    }

    pub fn len(&self) -> usize {
        self.by_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_order.is_empty()
    }
}

/// The big-endian `(next_time, priority, tx_id)` byte encoding a staker
/// sorts by, used as the db key suffix under `stakers/current/` and
/// `stakers/pending/` (spec.md §6's "keyed by staker total-order bytes") so
/// an on-disk scan iterates in the same order `StakerStore::iter` does.
pub fn staker_order_key(staker: &Staker) -> Vec<u8> {
    let mut key = Vec::with_capacity(8 + 1 + 32);
    key.extend_from_slice(&staker.next_time.to_be_bytes());
    key.push(staker.priority as u8);
    key.extend_from_slice(staker.tx_id.as_ref());
    key
}

/// Merges a base store's iteration order with an overlay's additions and
/// removals (by `tx_id`), without mutating either. Used by a `Diff` to
/// present a combined pending/current view without copying the parent's
/// tree.
pub fn merge<'a>(
    base: impl Iterator<Item = &'a Staker>,
    added: impl Iterator<Item = &'a Staker>,
    removed: &HashSet<Id>,
) -> Vec<Staker> {
    let mut merged: BTreeSet<Staker> = base
        .filter(|s| !removed.contains(&s.tx_id))
        .cloned()
        .collect();
    for staker in added {
        merged.insert(staker.clone());
    }
    merged.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staker(tx_id: u8, next_time: u64, priority: Priority) -> Staker {
        Staker {
            tx_id: Id::from_slice(&[tx_id; 32]),
            node_id: node::Id::empty(),
            supernet_id: Id::empty(),
            weight: 1,
            start_time: 0,
            end_time: next_time,
            next_time,
            priority,
            potential_reward: 0,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        }
    }

    #[test]
    fn iterates_by_next_time_then_priority_then_tx_id() {
        let mut store = StakerStore::new();
        store.put(staker(3, 100, Priority::PrimaryNetworkValidatorCurrent));
        store.put(staker(1, 50, Priority::PrimaryNetworkValidatorCurrent));
        store.put(staker(2, 50, Priority::PrimaryNetworkDelegatorCurrent));

        let order: Vec<u8> = store.iter().map(|s| s.tx_id.as_ref()[0]).collect();
        // next_time=50 entries come first; among them, lower Priority value
        // (PrimaryNetworkValidatorCurrent=10 vs PrimaryNetworkDelegatorCurrent=9)
        // sorts the delegator (tx 2) ahead of the validator (tx 1).
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn validator_point_lookup() {
        let mut store = StakerStore::new();
        let s = staker(1, 100, Priority::PrimaryNetworkValidatorCurrent);
        let node_id = s.node_id;
        let supernet_id = s.supernet_id;
        store.put(s);
        assert!(store.get_validator(&supernet_id, &node_id).is_some());
        assert_eq!(store.delegators_of(&supernet_id, &node_id).len(), 0);
    }

    #[test]
    fn weight_diff_accumulates_across_add_and_remove() {
        let mut diff = WeightDiff::default();
        diff.add(100).unwrap();
        diff.subtract(30).unwrap();
        assert_eq!(diff.amount, 70);
        assert!(!diff.decrease);
        diff.subtract(200).unwrap();
        assert_eq!(diff.amount, 130);
        assert!(diff.decrease);
    }

    #[test]
    fn order_key_sorts_the_same_way_as_ord() {
        let a = staker(1, 50, Priority::PrimaryNetworkDelegatorCurrent);
        let b = staker(2, 50, Priority::PrimaryNetworkValidatorCurrent);
        let c = staker(3, 100, Priority::PrimaryNetworkValidatorCurrent);
        assert!(a < b);
        assert!(staker_order_key(&a) < staker_order_key(&b));
        assert!(b < c);
        assert!(staker_order_key(&b) < staker_order_key(&c));
    }

    #[test]
    fn merge_hides_removed_and_adds_overlay_entries() {
        let mut base = StakerStore::new();
        base.put(staker(1, 10, Priority::PrimaryNetworkValidatorCurrent));
        base.put(staker(2, 20, Priority::PrimaryNetworkValidatorCurrent));

        let mut removed = HashSet::new();
        removed.insert(Id::from_slice(&[1u8; 32]));

        let added = vec![staker(3, 5, Priority::PrimaryNetworkValidatorCurrent)];

        let merged = merge(base.iter(), added.iter(), &removed);
        let order: Vec<u8> = merged.iter().map(|s| s.tx_id.as_ref()[0]).collect();
        assert_eq!(order, vec![3, 2]);
    }
}
