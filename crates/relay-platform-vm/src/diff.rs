//! Component C's overlay half: a `Diff` stages one block's modifications
//! against a parent `Chain` without mutating it, and later replays them onto
//! the base `State` in one fixed order via `Apply`.
//!
//! Grounded on the design note "Chain-state capability parent lookup
//! cycles": a diff names its parent by ID and asks a registry for the live
//! `Arc<dyn Chain>` rather than holding a pointer, so a chain of diffs can be
//! built and torn down without reference cycles. `stakers::merge` (already
//! written for component B) does the overlay-vs-parent reconciliation for
//! both the pending and current staker iterators.
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use avalanche_types::ids::{node, Id};
use avalanche_types::txs::utxo::{Id as UtxoId, Utxo};

use crate::errors::{Error, Result};
use crate::stakers::{self, Staker, WeightDiff};
use crate::state::{Chain, State, TxStatus};
use crate::subnet::{Supernet, Transformation};
use crate::txs::Tx;

/// A registry of not-yet-accepted block states, keyed by block ID, letting a
/// `Diff` resolve its parent by ID instead of holding a strong reference to
/// it. The block manager (component G) owns one of these; `Diff::new` takes
/// whatever it returns for a given parent ID.
pub trait Versions: Send + Sync {
    fn state_for(&self, block_id: &Id) -> Option<Arc<dyn Chain>>;
}

/// One block's staged modifications, read-through to `parent` for anything
/// this diff hasn't touched.
pub struct Diff {
    parent_id: Id,
    parent: Arc<dyn Chain>,

    timestamp: Option<u64>,
    fees_delta: u64,
    supply: HashMap<Id, u64>,
    rewards_pool_supply: HashMap<Id, u64>,

    added_current: Vec<Staker>,
    removed_current: Vec<Staker>,
    added_pending: Vec<Staker>,
    removed_pending: Vec<Staker>,

    /// Per-`(supernet, node)` signed weight delta this diff's current-set
    /// changes cause, and any primary-network BLS keys a removed validator
    /// carried. Accumulated as `add_current_staker`/`remove_current_staker`
    /// are called, so the block manager can hand the finished diff's record
    /// to `State::record_validator_diffs` at Accept without re-deriving it
    /// (spec.md §4.2's "compact diff record" for historical validator-set
    /// reconstruction).
    weight_diffs: HashMap<(Id, node::Id), WeightDiff>,
    bls_removals: Vec<(node::Id, Vec<u8>)>,

    added_supernets: Vec<Supernet>,
    added_transformations: HashMap<Id, Transformation>,
    added_chains: Vec<(Id, Id)>,
    added_txs: HashMap<Id, (Tx, TxStatus)>,
    added_reward_utxos: HashMap<Id, Vec<Utxo>>,

    /// `None` means deleted (a tombstone over a parent entry); `Some` means
    /// added or overwritten.
    utxos: BTreeMap<UtxoId, Option<Utxo>>,
}

impl Diff {
    pub fn new(parent_id: Id, parent: Arc<dyn Chain>) -> Self {
        Self {
            parent_id,
            parent,
            timestamp: None,
            fees_delta: 0,
            supply: HashMap::new(),
            rewards_pool_supply: HashMap::new(),
            added_current: Vec::new(),
            removed_current: Vec::new(),
            added_pending: Vec::new(),
            removed_pending: Vec::new(),
            weight_diffs: HashMap::new(),
            bls_removals: Vec::new(),
            added_supernets: Vec::new(),
            added_transformations: HashMap::new(),
            added_chains: Vec::new(),
            added_txs: HashMap::new(),
            added_reward_utxos: HashMap::new(),
            utxos: BTreeMap::new(),
        }
    }

    /// Builds a diff atop `parent_id`, resolving the live parent state
    /// through `versions`. Fails with `MissingParentState` if the parent has
    /// already been dropped (accepted-and-applied, or rejected) -- the hard
    /// error spec.md §4.3 requires.
    pub fn new_from_versions(parent_id: Id, versions: &dyn Versions) -> Result<Self> {
        let parent = versions
            .state_for(&parent_id)
            .ok_or_else(|| Error::MissingParentState {
                block_id: format!("{:?}", parent_id),
            })?;
        Ok(Self::new(parent_id, parent))
    }

    pub fn parent_id(&self) -> Id {
        self.parent_id
    }

    // -- mutators, called by the tx executor (component E) --

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = Some(timestamp);
    }

    pub fn add_fee(&mut self, amount: u64) -> Result<()> {
        self.fees_delta = self.fees_delta.checked_add(amount).ok_or_else(|| Error::Overflow {
            during: "accumulating fees-pool delta in diff".to_string(),
        })?;
        Ok(())
    }

    pub fn set_supply(&mut self, supernet_id: Id, amount: u64) {
        self.supply.insert(supernet_id, amount);
    }

    pub fn set_rewards_pool_supply(&mut self, supernet_id: Id, amount: u64) {
        self.rewards_pool_supply.insert(supernet_id, amount);
    }

    pub fn add_current_staker(&mut self, staker: Staker) -> Result<()> {
        self.weight_diffs
            .entry((staker.supernet_id, staker.node_id))
            .or_default()
            .add(staker.weight)?;
        self.added_current.push(staker);
        Ok(())
    }

    pub fn remove_current_staker(&mut self, staker: Staker) -> Result<()> {
        self.weight_diffs
            .entry((staker.supernet_id, staker.node_id))
            .or_default()
            .subtract(staker.weight)?;
        if let Some(key) = &staker.bls_public_key {
            self.bls_removals.push((staker.node_id, key.clone()));
        }
        self.removed_current.push(staker);
        Ok(())
    }

    pub fn add_pending_staker(&mut self, staker: Staker) {
        self.added_pending.push(staker);
    }

    pub fn remove_pending_staker(&mut self, staker: Staker) {
        self.removed_pending.push(staker);
    }

    pub fn add_supernet(&mut self, supernet: Supernet) {
        self.added_supernets.push(supernet);
    }

    pub fn set_transformation(&mut self, supernet_id: Id, transformation: Transformation) {
        self.added_transformations.insert(supernet_id, transformation);
    }

    pub fn add_chain(&mut self, supernet_id: Id, chain_id: Id) {
        self.added_chains.push((supernet_id, chain_id));
    }

    pub fn put_tx(&mut self, tx_id: Id, tx: Tx, status: TxStatus) {
        self.added_txs.insert(tx_id, (tx, status));
    }

    pub fn add_reward_utxos(&mut self, tx_id: Id, utxos: Vec<Utxo>) {
        self.added_reward_utxos.entry(tx_id).or_default().extend(utxos);
    }

    pub fn put_utxo(&mut self, utxo_id: UtxoId, utxo: Utxo) {
        self.utxos.insert(utxo_id, Some(utxo));
    }

    pub fn delete_utxo(&mut self, utxo_id: UtxoId) {
        self.utxos.insert(utxo_id, None);
    }

    // -- accessors consumed by `state::apply_diff` --

    pub(crate) fn staged_timestamp(&self) -> Option<u64> {
        self.timestamp
    }

    pub(crate) fn staged_supply(&self) -> Vec<(Id, u64)> {
        self.supply.iter().map(|(k, v)| (*k, *v)).collect()
    }

    pub(crate) fn staged_rewards_pool_supply(&self) -> Vec<(Id, u64)> {
        self.rewards_pool_supply.iter().map(|(k, v)| (*k, *v)).collect()
    }

    pub(crate) fn staged_fees_delta(&self) -> Option<u64> {
        if self.fees_delta == 0 {
            None
        } else {
            Some(self.fees_delta)
        }
    }

    pub(crate) fn removed_current_stakers(&self) -> Vec<Staker> {
        self.removed_current.clone()
    }

    pub(crate) fn added_current_stakers(&self) -> Vec<Staker> {
        self.added_current.clone()
    }

    pub(crate) fn removed_pending_stakers(&self) -> Vec<Staker> {
        self.removed_pending.clone()
    }

    pub(crate) fn added_pending_stakers(&self) -> Vec<Staker> {
        self.added_pending.clone()
    }

    pub(crate) fn added_supernets(&self) -> Vec<Supernet> {
        self.added_supernets.clone()
    }

    pub(crate) fn added_transformations(&self) -> Vec<(Id, Transformation)> {
        self.added_transformations
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect()
    }

    pub(crate) fn added_chains(&self) -> Vec<(Id, Id)> {
        self.added_chains.clone()
    }

    pub(crate) fn added_txs(&self) -> Vec<(Id, Tx, TxStatus)> {
        self.added_txs
            .iter()
            .map(|(tx_id, (tx, status))| (*tx_id, tx.clone(), *status))
            .collect()
    }

    pub(crate) fn added_reward_utxos(&self) -> Vec<(Id, Vec<Utxo>)> {
        self.added_reward_utxos
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect()
    }

    /// The finished weight-delta/BLS-removal record this diff's current-set
    /// changes produced, for the block manager to hand to
    /// `State::record_validator_diffs` at Accept.
    pub fn weight_diffs(&self) -> HashMap<(Id, node::Id), WeightDiff> {
        self.weight_diffs.clone()
    }

    pub fn bls_removals(&self) -> Vec<(node::Id, Vec<u8>)> {
        self.bls_removals.clone()
    }

    pub(crate) fn removed_utxos(&self) -> Vec<UtxoId> {
        self.utxos
            .iter()
            .filter_map(|(k, v)| if v.is_none() { Some(k.clone()) } else { None })
            .collect()
    }

    pub(crate) fn added_utxos(&self) -> Vec<(UtxoId, Utxo)> {
        self.utxos
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|u| (k.clone(), u.clone())))
            .collect()
    }

    fn removed_current_ids(&self) -> std::collections::HashSet<Id> {
        self.removed_current.iter().map(|s| s.tx_id).collect()
    }

    fn removed_pending_ids(&self) -> std::collections::HashSet<Id> {
        self.removed_pending.iter().map(|s| s.tx_id).collect()
    }

    /// Writes every staged modification onto `base` in the order spec.md
    /// §4.3 requires. Called once, at `Accept` time.
    pub fn apply(&self, base: &State) -> Result<()> {
        crate::state::apply_diff(base, self)
    }
}

impl Chain for Diff {
    fn timestamp(&self) -> u64 {
        self.timestamp.unwrap_or_else(|| self.parent.timestamp())
    }

    fn supply(&self, supernet_id: &Id) -> u64 {
        self.supply
            .get(supernet_id)
            .copied()
            .unwrap_or_else(|| self.parent.supply(supernet_id))
    }

    fn rewards_pool_supply(&self, supernet_id: &Id) -> u64 {
        self.rewards_pool_supply
            .get(supernet_id)
            .copied()
            .unwrap_or_else(|| self.parent.rewards_pool_supply(supernet_id))
    }

    fn fees_pool(&self) -> u64 {
        self.parent.fees_pool().saturating_add(self.fees_delta)
    }

    fn get_utxo(&self, utxo_id: &UtxoId) -> Option<Utxo> {
        match self.utxos.get(utxo_id) {
            Some(Some(utxo)) => Some(utxo.clone()),
            Some(None) => None,
            None => self.parent.get_utxo(utxo_id),
        }
    }

    fn get_current_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<Staker> {
        if let Some(s) = self
            .added_current
            .iter()
            .find(|s| s.supernet_id == *supernet_id && s.node_id == *node_id && s.priority.is_validator())
        {
            return Some(s.clone());
        }
        let parent_val = self.parent.get_current_validator(supernet_id, node_id)?;
        if self.removed_current_ids().contains(&parent_val.tx_id) {
            None
        } else {
            Some(parent_val)
        }
    }

    fn get_pending_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<Staker> {
        if let Some(s) = self
            .added_pending
            .iter()
            .find(|s| s.supernet_id == *supernet_id && s.node_id == *node_id && s.priority.is_validator())
        {
            return Some(s.clone());
        }
        let parent_val = self.parent.get_pending_validator(supernet_id, node_id)?;
        if self.removed_pending_ids().contains(&parent_val.tx_id) {
            None
        } else {
            Some(parent_val)
        }
    }

    fn current_stakers(&self) -> Vec<Staker> {
        let parent_list = self.parent.current_stakers();
        stakers::merge(parent_list.iter(), self.added_current.iter(), &self.removed_current_ids())
    }

    fn pending_stakers(&self) -> Vec<Staker> {
        let parent_list = self.parent.pending_stakers();
        stakers::merge(parent_list.iter(), self.added_pending.iter(), &self.removed_pending_ids())
    }

    fn current_delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker> {
        self.current_stakers()
            .into_iter()
            .filter(|s| s.supernet_id == *supernet_id && s.node_id == *node_id && s.priority.is_delegator())
            .collect()
    }

    fn pending_delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker> {
        self.pending_stakers()
            .into_iter()
            .filter(|s| s.supernet_id == *supernet_id && s.node_id == *node_id && s.priority.is_delegator())
            .collect()
    }

    fn get_supernet(&self, id: &Id) -> Option<Supernet> {
        self.added_supernets
            .iter()
            .find(|s| s.id == *id)
            .cloned()
            .or_else(|| self.parent.get_supernet(id))
    }

    fn supernets(&self) -> Vec<Supernet> {
        let mut all = self.parent.supernets();
        all.extend(self.added_supernets.iter().cloned());
        all
    }

    fn get_transformation(&self, supernet_id: &Id) -> Option<Transformation> {
        self.added_transformations
            .get(supernet_id)
            .cloned()
            .or_else(|| self.parent.get_transformation(supernet_id))
    }

    fn chains_of(&self, supernet_id: &Id) -> Vec<Id> {
        let mut all = self.parent.chains_of(supernet_id);
        all.extend(
            self.added_chains
                .iter()
                .filter(|(s, _)| s == supernet_id)
                .map(|(_, c)| *c),
        );
        all
    }

    fn get_tx(&self, tx_id: &Id) -> Option<(Tx, TxStatus)> {
        self.added_txs
            .get(tx_id)
            .cloned()
            .or_else(|| self.parent.get_tx(tx_id))
    }

    fn reward_utxos(&self, tx_id: &Id) -> Vec<Utxo> {
        let mut all = self.parent.reward_utxos(tx_id);
        if let Some(added) = self.added_reward_utxos.get(tx_id) {
            all.extend(added.iter().cloned());
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDatabase;
    use crate::stakers::Priority;

    fn sample_staker(tx_id: u8, next_time: u64) -> Staker {
        Staker {
            tx_id: Id::from_slice(&[tx_id; 32]),
            node_id: node::Id::empty(),
            supernet_id: Id::empty(),
            weight: 100,
            start_time: 0,
            end_time: next_time,
            next_time,
            priority: Priority::PrimaryNetworkValidatorCurrent,
            potential_reward: 0,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        }
    }

    #[test]
    fn diff_falls_through_to_parent_for_untouched_fields() {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let diff = Diff::new(Id::empty(), base.clone());
        assert_eq!(diff.timestamp(), base.timestamp());
        assert_eq!(diff.supply(&Id::empty()), 0);
    }

    #[test]
    fn diff_overrides_timestamp_without_mutating_parent() {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = Diff::new(Id::empty(), base.clone());
        diff.set_timestamp(500);
        assert_eq!(diff.timestamp(), 500);
        assert_eq!(base.timestamp(), 0);
    }

    #[test]
    fn added_staker_visible_removed_staker_hidden() {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = Diff::new(Id::empty(), base.clone());
        let added = sample_staker(1, 100);
        diff.add_current_staker(added.clone()).unwrap();
        assert_eq!(diff.current_stakers().len(), 1);

        let mut diff2 = Diff::new(Id::empty(), Arc::new(diff));
        // the staker added by the first diff is visible through the second
        assert_eq!(diff2.current_stakers().len(), 1);
        diff2.remove_current_staker(added).unwrap();
        assert!(diff2.current_stakers().is_empty());
    }

    #[test]
    fn apply_writes_staged_timestamp_and_utxos_onto_base() {
        let base = State::new(Box::new(MemoryDatabase::new()));
        let parent: Arc<dyn Chain> = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = Diff::new(Id::empty(), parent);
        diff.set_timestamp(999);
        diff.add_current_staker(sample_staker(1, 100)).unwrap();
        diff.apply(&base).unwrap();
        assert_eq!(base.timestamp(), 999);
        assert_eq!(base.current_stakers().len(), 1);
    }

    #[test]
    fn add_current_staker_accumulates_a_positive_weight_diff() {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = Diff::new(Id::empty(), base);
        let staker = sample_staker(1, 100);
        let key = (staker.supernet_id, staker.node_id);
        diff.add_current_staker(staker.clone()).unwrap();
        let recorded = diff.weight_diffs().get(&key).copied().unwrap();
        assert_eq!(recorded.amount, staker.weight);
        assert!(!recorded.decrease);
    }

    #[test]
    fn remove_current_staker_records_bls_removal_and_negative_weight_diff() {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = Diff::new(Id::empty(), base);
        let mut staker = sample_staker(2, 100);
        staker.bls_public_key = Some(vec![9u8; 48]);
        let key = (staker.supernet_id, staker.node_id);

        diff.remove_current_staker(staker.clone()).unwrap();

        let recorded = diff.weight_diffs().get(&key).copied().unwrap();
        assert_eq!(recorded.amount, staker.weight);
        assert!(recorded.decrease);
        assert_eq!(diff.bls_removals(), vec![(staker.node_id, vec![9u8; 48])]);
    }
}
