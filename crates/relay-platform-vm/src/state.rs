//! The "Chain" capability (spec.md §3) and the base, durable chain state
//! that implements it directly against a `Database`.
//!
//! Grounded on `avalanche_types::platformvm::txs::status::Status` for the
//! `TxStatus` enum's shape (a small C-like enum with a stable `as_str`), and
//! on `database.rs`'s `Database`/`Batch` pair for how the base state commits
//! its in-memory structures to persistent storage. The logical key layout
//! below mirrors spec.md §6's "Persistent state layout" section.
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use avalanche_types::ids::{node, Id};
use avalanche_types::txs::utxo::{Id as UtxoId, Utxo};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::errors::{Error, Result};
use crate::stakers::{self, Staker, StakerStore, WeightDiff};
use crate::subnet::{Supernet, Transformation};
use crate::txs::Tx;

/// JSON-encodes a value for storage, the same way the atomic adapter encodes
/// a `Utxo` crossing the shared-memory boundary (`executor::execute_export`)
/// -- this crate never claims wire compatibility with avalanchego's legacy
/// codec (spec.md Non-goals), only stable round-tripping of its own values.
fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| Error::Database {
        message: format!("failed to encode value for storage: {e}"),
    })
}

/// A transaction's lifecycle state, as recorded in the `status/` keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    Processing,
    Committed,
    Aborted,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxStatus::Processing => "Processing",
            TxStatus::Committed => "Committed",
            TxStatus::Aborted => "Aborted",
        }
    }
}

/// The read interface every chain state -- base or diff -- exposes. §4.3's
/// "Read path" describes point lookups consulting an overlay before falling
/// back to its parent; that fallback lives in `Diff`'s impl, not here.
pub trait Chain: Send + Sync {
    fn timestamp(&self) -> u64;
    fn supply(&self, supernet_id: &Id) -> u64;
    fn rewards_pool_supply(&self, supernet_id: &Id) -> u64;
    fn fees_pool(&self) -> u64;

    fn get_utxo(&self, utxo_id: &UtxoId) -> Option<Utxo>;

    fn get_current_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<Staker>;
    fn get_pending_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<Staker>;
    /// Full current-set iteration in total order (§4.2).
    fn current_stakers(&self) -> Vec<Staker>;
    /// Full pending-set iteration in total order (§4.2).
    fn pending_stakers(&self) -> Vec<Staker>;
    fn current_delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker>;
    fn pending_delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker>;

    fn get_supernet(&self, id: &Id) -> Option<Supernet>;
    fn supernets(&self) -> Vec<Supernet>;
    fn get_transformation(&self, supernet_id: &Id) -> Option<Transformation>;
    fn chains_of(&self, supernet_id: &Id) -> Vec<Id>;

    fn get_tx(&self, tx_id: &Id) -> Option<(Tx, TxStatus)>;
    fn reward_utxos(&self, tx_id: &Id) -> Vec<Utxo>;
}

#[derive(Default)]
struct Inner {
    timestamp: u64,
    fees_pool: u64,
    supply: HashMap<Id, u64>,
    rewards_pool_supply: HashMap<Id, u64>,
    current: StakerStore,
    pending: StakerStore,
    utxos: BTreeMap<UtxoId, Utxo>,
    supernets: HashMap<Id, Supernet>,
    transformations: HashMap<Id, Transformation>,
    chains: HashMap<Id, Vec<Id>>,
    txs: HashMap<Id, (Tx, TxStatus)>,
    reward_utxos: HashMap<Id, Vec<Utxo>>,
    /// Per-height compact staker diff records (spec.md §4.2): one entry per
    /// accepted block whose diff touched the current set, keyed by height so
    /// a consumer can reconstruct a historical validator set by walking
    /// diffs backward from the tip.
    validator_diffs: BTreeMap<u64, HashMap<(Id, node::Id), WeightDiff>>,
    bls_removals: BTreeMap<u64, Vec<(node::Id, Vec<u8>)>>,
}

/// The durable chain state: `lastAccepted`'s view, the only state with a
/// backing `Database`. Every `Diff` ultimately bottoms out here (directly,
/// or transitively through other diffs whose chain of parents reaches it).
pub struct State {
    db: Box<dyn Database>,
    inner: RwLock<Inner>,
}

impl State {
    pub fn new(db: Box<dyn Database>) -> Self {
        Self {
            db,
            inner: RwLock::new(Inner::default()),
        }
    }

    fn inner(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("chain state lock poisoned")
    }

    fn inner_mut(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("chain state lock poisoned")
    }

    /// Writes every field a `Diff::apply` batch touched into the backing
    /// database, keyed the way spec.md §6 lays the keyspace out. Called once
    /// per `Accept`, never mid-verification. Re-serializes the full
    /// in-memory snapshot each time rather than tracking a per-commit
    /// changeset -- the `Batch` put-per-key is idempotent, and this core's
    /// working sets (stakers, supernets, UTXOs) stay small enough that a
    /// full re-write per block is cheap (see `DESIGN.md` for the bound this
    /// assumes).
    pub fn commit(&self) -> Result<()> {
        let inner = self.inner();
        let mut batch = self.db.new_batch();
        batch.put(b"singleton/timestamp", &inner.timestamp.to_be_bytes());
        batch.put(b"singleton/fees_pool", &inner.fees_pool.to_be_bytes());
        for (supernet_id, amount) in &inner.supply {
            let key = [b"supply/".as_slice(), supernet_id.as_ref()].concat();
            batch.put(&key, &amount.to_be_bytes());
        }
        for (supernet_id, amount) in &inner.rewards_pool_supply {
            let key = [b"rewards_pool/".as_slice(), supernet_id.as_ref()].concat();
            batch.put(&key, &amount.to_be_bytes());
        }
        for staker in inner.current.iter() {
            let key = [b"stakers/current/".as_slice(), &stakers::staker_order_key(staker)].concat();
            batch.put(&key, &encode(staker)?);
        }
        for staker in inner.pending.iter() {
            let key = [b"stakers/pending/".as_slice(), &stakers::staker_order_key(staker)].concat();
            batch.put(&key, &encode(staker)?);
        }
        for (utxo_id, utxo) in &inner.utxos {
            let key = [b"utxo/".as_slice(), utxo_id.id.as_ref()].concat();
            batch.put(&key, &encode(utxo)?);
        }
        for (supernet_id, supernet) in &inner.supernets {
            let key = [b"supernets/".as_slice(), supernet_id.as_ref()].concat();
            batch.put(&key, &encode(supernet)?);
        }
        for (supernet_id, transformation) in &inner.transformations {
            let key = [b"transformations/".as_slice(), supernet_id.as_ref()].concat();
            batch.put(&key, &encode(transformation)?);
        }
        for (supernet_id, chain_ids) in &inner.chains {
            for chain_id in chain_ids {
                let key = [b"chains/".as_slice(), supernet_id.as_ref(), b"/".as_slice(), chain_id.as_ref()].concat();
                batch.put(&key, &[]);
            }
        }
        for (tx_id, (tx, status)) in &inner.txs {
            let status_key = [b"status/".as_slice(), tx_id.as_ref()].concat();
            batch.put(&status_key, status.as_str().as_bytes());
            let tx_key = [b"tx/".as_slice(), tx_id.as_ref()].concat();
            batch.put(&tx_key, &encode(tx)?);
        }
        for (tx_id, utxos) in &inner.reward_utxos {
            let key = [b"rewardUTXOs/".as_slice(), tx_id.as_ref()].concat();
            batch.put(&key, &encode(utxos)?);
        }
        self.db.write(&batch)
    }

    /// Records one accepted block's compact staker-diff (spec.md §4.2),
    /// keyed by its height. Called once per `Accept`, after the block's
    /// `Diff` has been applied. A height whose diff touched nothing is
    /// simply not recorded rather than stored empty.
    pub fn record_validator_diffs(
        &self,
        height: u64,
        weight_diffs: HashMap<(Id, node::Id), WeightDiff>,
        bls_removals: Vec<(node::Id, Vec<u8>)>,
    ) {
        let mut inner = self.inner_mut();
        if !weight_diffs.is_empty() {
            inner.validator_diffs.insert(height, weight_diffs);
        }
        if !bls_removals.is_empty() {
            inner.bls_removals.insert(height, bls_removals);
        }
    }

    /// The weight delta recorded for `(supernet, node)` at `height`, if the
    /// block accepted at that height touched it.
    pub fn validator_weight_diff_at(
        &self,
        height: u64,
        supernet_id: &Id,
        node_id: &node::Id,
    ) -> Option<WeightDiff> {
        self.inner()
            .validator_diffs
            .get(&height)
            .and_then(|diffs| diffs.get(&(*supernet_id, *node_id)))
            .copied()
    }

    /// Any primary-network BLS public keys removed by the block accepted at
    /// `height`.
    pub fn bls_removals_at(&self, height: u64) -> Vec<(node::Id, Vec<u8>)> {
        self.inner()
            .bls_removals
            .get(&height)
            .cloned()
            .unwrap_or_default()
    }

    /// Bootstraps `State` from a genesis payload: seeds the initial UTXO
    /// set, the primary network's genesis validators (as pending stakers),
    /// and per-supernet supply. Mirrors the order a from-scratch
    /// `avalanchego::platformvm` VM applies its own genesis block.
    pub fn from_genesis(
        db: Box<dyn Database>,
        genesis: &crate::genesis::Genesis,
        config: &crate::config::Config,
    ) -> Result<Self> {
        let state = Self::new(db);
        {
            let mut inner = state.inner_mut();
            inner.timestamp = genesis.start_time;

            let mut total = 0u64;
            for (index, allocation) in genesis.allocations.iter().enumerate() {
                let utxo_id = UtxoId::new(&[0u8; 32], index as u32, false)?;
                let utxo = Utxo {
                    utxo_id: utxo_id.clone(),
                    asset_id: config.staking_asset_id,
                    transfer_output: Some(avalanche_types::key::secp256k1::txs::transfer::Output {
                        amount: allocation.initial_amount,
                        output_owners: avalanche_types::key::secp256k1::txs::OutputOwners {
                            locktime: 0,
                            threshold: 1,
                            addresses: vec![allocation.address],
                        },
                    }),
                    stakeable_lock_out: None,
                };
                total = total.checked_add(allocation.initial_amount).ok_or_else(|| {
                    Error::Overflow {
                        during: "summing genesis allocations".to_string(),
                    }
                })?;
                inner.utxos.insert(utxo_id, utxo);
            }
            inner
                .supply
                .insert(crate::config::primary_network_id(), total);

            for (index, staker) in genesis.initial_stakers.iter().enumerate() {
                let tx_id = Id::from_slice(&avalanche_types::hash::sha256(
                    format!("genesis-staker-{index}").as_bytes(),
                ));
                let start = genesis.start_time
                    + index as u64 * genesis.initial_stake_duration_offset_seconds;
                let end = start + genesis.initial_stake_duration_seconds;
                let weight = config.min_validator_stake;
                inner.pending.put(crate::stakers::Staker {
                    tx_id,
                    node_id: staker.node_id,
                    supernet_id: crate::config::primary_network_id(),
                    weight,
                    start_time: start,
                    end_time: end,
                    next_time: start,
                    priority: crate::stakers::Priority::PrimaryNetworkValidatorPending,
                    potential_reward: 0,
                    delegation_fee_ppm: staker.delegation_fee_ppm,
                    bls_public_key: None,
                });
            }
        }
        Ok(state)
    }
}

impl Chain for State {
    fn timestamp(&self) -> u64 {
        self.inner().timestamp
    }

    fn supply(&self, supernet_id: &Id) -> u64 {
        self.inner().supply.get(supernet_id).copied().unwrap_or(0)
    }

    fn rewards_pool_supply(&self, supernet_id: &Id) -> u64 {
        self.inner()
            .rewards_pool_supply
            .get(supernet_id)
            .copied()
            .unwrap_or(0)
    }

    fn fees_pool(&self) -> u64 {
        self.inner().fees_pool
    }

    fn get_utxo(&self, utxo_id: &UtxoId) -> Option<Utxo> {
        self.inner().utxos.get(utxo_id).cloned()
    }

    fn get_current_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<Staker> {
        self.inner()
            .current
            .get_validator(supernet_id, node_id)
            .cloned()
    }

    fn get_pending_validator(&self, supernet_id: &Id, node_id: &node::Id) -> Option<Staker> {
        self.inner()
            .pending
            .get_validator(supernet_id, node_id)
            .cloned()
    }

    fn current_stakers(&self) -> Vec<Staker> {
        self.inner().current.iter().cloned().collect()
    }

    fn pending_stakers(&self) -> Vec<Staker> {
        self.inner().pending.iter().cloned().collect()
    }

    fn current_delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker> {
        self.inner().current.delegators_of(supernet_id, node_id)
    }

    fn pending_delegators_of(&self, supernet_id: &Id, node_id: &node::Id) -> Vec<Staker> {
        self.inner().pending.delegators_of(supernet_id, node_id)
    }

    fn get_supernet(&self, id: &Id) -> Option<Supernet> {
        self.inner().supernets.get(id).cloned()
    }

    fn supernets(&self) -> Vec<Supernet> {
        self.inner().supernets.values().cloned().collect()
    }

    fn get_transformation(&self, supernet_id: &Id) -> Option<Transformation> {
        self.inner().transformations.get(supernet_id).cloned()
    }

    fn chains_of(&self, supernet_id: &Id) -> Vec<Id> {
        self.inner().chains.get(supernet_id).cloned().unwrap_or_default()
    }

    fn get_tx(&self, tx_id: &Id) -> Option<(Tx, TxStatus)> {
        self.inner().txs.get(tx_id).cloned()
    }

    fn reward_utxos(&self, tx_id: &Id) -> Vec<Utxo> {
        self.inner().reward_utxos.get(tx_id).cloned().unwrap_or_default()
    }
}

/// Applies one diff's staged modifications directly onto `state`'s inner
/// structures, in the fixed order spec.md §4.3 requires. Lives in this
/// module (rather than on `Diff` itself) since it is the one place allowed
/// to reach into `State`'s private `Inner`.
pub(crate) fn apply_diff(state: &State, diff: &crate::diff::Diff) -> Result<()> {
    let mut inner = state.inner_mut();

    if let Some(timestamp) = diff.staged_timestamp() {
        inner.timestamp = timestamp;
    }
    for (supernet_id, amount) in diff.staged_supply() {
        inner.supply.insert(supernet_id, amount);
    }
    for (supernet_id, amount) in diff.staged_rewards_pool_supply() {
        inner.rewards_pool_supply.insert(supernet_id, amount);
    }
    if let Some(delta) = diff.staged_fees_delta() {
        inner.fees_pool = inner.fees_pool.checked_add(delta).ok_or_else(|| Error::Overflow {
            during: "applying fees-pool delta".to_string(),
        })?;
    }
    // Current set first, then pending (spec.md §4.3's fixed apply order);
    // within each, removals land before additions so a staker promoted and
    // re-keyed in the same diff doesn't collide with its own stale entry.
    for staker in diff.removed_current_stakers() {
        inner.current.remove(&staker);
    }
    for staker in diff.added_current_stakers() {
        inner.current.put(staker);
    }
    for staker in diff.removed_pending_stakers() {
        inner.pending.remove(&staker);
    }
    for staker in diff.added_pending_stakers() {
        inner.pending.put(staker);
    }
    for supernet in diff.added_supernets() {
        inner.supernets.insert(supernet.id, supernet);
    }
    for (supernet_id, transformation) in diff.added_transformations() {
        inner.transformations.insert(supernet_id, transformation);
    }
    for (supernet_id, chain_id) in diff.added_chains() {
        inner.chains.entry(supernet_id).or_default().push(chain_id);
    }
    for (tx_id, tx, status) in diff.added_txs() {
        inner.txs.insert(tx_id, (tx, status));
    }
    for (tx_id, utxos) in diff.added_reward_utxos() {
        inner.reward_utxos.entry(tx_id).or_default().extend(utxos);
    }
    for utxo_id in diff.removed_utxos() {
        inner.utxos.remove(&utxo_id);
    }
    for (utxo_id, utxo) in diff.added_utxos() {
        inner.utxos.insert(utxo_id, utxo);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryDatabase;

    fn empty_state() -> State {
        State::new(Box::new(MemoryDatabase::new()))
    }

    #[test]
    fn fresh_state_has_zero_supply_and_timestamp() {
        let state = empty_state();
        assert_eq!(state.timestamp(), 0);
        assert_eq!(state.supply(&Id::empty()), 0);
        assert!(state.current_stakers().is_empty());
    }

    #[test]
    fn commit_persists_timestamp_into_database() {
        let state = empty_state();
        {
            let mut inner = state.inner_mut();
            inner.timestamp = 12345;
        }
        state.commit().unwrap();
        let stored = state.db.get(b"singleton/timestamp").unwrap().unwrap();
        assert_eq!(stored, 12345u64.to_be_bytes().to_vec());
    }

    #[test]
    fn commit_persists_current_stakers_and_utxos_under_their_spec_keys() {
        use crate::stakers::{staker_order_key, Priority};
        use avalanche_types::key::secp256k1::txs::{transfer, OutputOwners};
        use avalanche_types::txs::utxo::{Id as UtxoId, Utxo};

        let state = empty_state();
        let staker = Staker {
            tx_id: Id::from_slice(&[3u8; 32]),
            node_id: node::Id::empty(),
            supernet_id: Id::empty(),
            weight: 500,
            start_time: 0,
            end_time: 100,
            next_time: 100,
            priority: Priority::PrimaryNetworkValidatorCurrent,
            potential_reward: 0,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        };
        let utxo_id = UtxoId::new(&[9u8; 32], 0, false).unwrap();
        let utxo = Utxo {
            utxo_id: utxo_id.clone(),
            asset_id: Id::empty(),
            transfer_output: Some(transfer::Output {
                amount: 10,
                output_owners: OutputOwners {
                    locktime: 0,
                    threshold: 1,
                    addresses: vec![],
                },
            }),
            stakeable_lock_out: None,
        };
        {
            let mut inner = state.inner_mut();
            inner.current.put(staker.clone());
            inner.utxos.insert(utxo_id.clone(), utxo);
        }
        state.commit().unwrap();

        let staker_key = [b"stakers/current/".as_slice(), &staker_order_key(&staker)].concat();
        assert!(state.db.get(&staker_key).unwrap().is_some());

        let utxo_key = [b"utxo/".as_slice(), utxo_id.id.as_ref()].concat();
        assert!(state.db.get(&utxo_key).unwrap().is_some());
    }

    #[test]
    fn genesis_seeds_allocations_as_spendable_utxos() {
        let genesis = crate::genesis::Genesis {
            network_id: 1,
            allocations: vec![crate::genesis::Allocation {
                address: avalanche_types::ids::short::Id::empty(),
                initial_amount: 500,
            }],
            start_time: 1_000,
            initial_stake_duration_seconds: 100,
            initial_stake_duration_offset_seconds: 0,
            initial_staked_funds: vec![],
            initial_stakers: vec![],
            message: None,
        };
        let config = crate::config::Config::default();
        let state = State::from_genesis(Box::new(MemoryDatabase::new()), &genesis, &config).unwrap();
        assert_eq!(state.supply(&crate::config::primary_network_id()), 500);
        assert_eq!(state.timestamp(), 1_000);
    }
}
