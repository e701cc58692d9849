//! Component H: the mempool and block builder.
//!
//! Grounded on `platformvm/txs/mempool`'s split between "decision" txs
//! (bundled many-to-a-block) and "proposal" txs (exactly one per block,
//! since accepting/rejecting one is itself a consensus decision, spec.md
//! §4.8) -- `txs::UnsignedTx::is_staker_proposal` (component E's tagging)
//! already draws that line, so the mempool just needs two queues keyed off
//! it.
use std::collections::{HashMap, HashSet, VecDeque};

use avalanche_types::ids::Id;

use crate::block::BlockBody;
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::executor;
use crate::state::Chain;
use crate::time_advance;
use crate::txs::{AdvanceTimeTx, BaseTx, RewardValidatorTx, Tx, UnsignedTx};

/// How many decision txs a single `Standard` block bundles at most. Not
/// spec-mandated; a generous constant keeps block size bounded without
/// requiring a byte-budget calculation this core doesn't otherwise need
/// (wire size accounting is out of scope, spec.md §1).
const MAX_DECISION_TXS_PER_BLOCK: usize = 64;

/// Holds not-yet-accepted txs the builder may include in its next block.
/// `decision` and `proposal` are FIFO: a tx that's been sitting the longest
/// is tried first, matching the teacher's mempool's "oldest first" policy.
#[derive(Default)]
pub struct Mempool {
    decision: VecDeque<Tx>,
    proposal: VecDeque<Tx>,
    seen: HashSet<Id>,
    /// txID -> reason, for txs pulled out of the active queues via
    /// `mark_dropped` but not yet `remove`d. Spec.md §4.8: "Dropped txs
    /// remain addressable for re-issuance until explicitly removed" -- so a
    /// dropped tx still answers `has`/`get_drop_reason` but the builder
    /// never sees it again until a caller `remove`s then re-`add`s it.
    dropped: HashMap<Id, String>,
    max_size: usize,
}

impl Mempool {
    pub fn new(max_size: usize) -> Self {
        Self {
            decision: VecDeque::new(),
            proposal: VecDeque::new(),
            seen: HashSet::new(),
            dropped: HashMap::new(),
            max_size,
        }
    }

    pub fn len(&self) -> usize {
        self.decision.len() + self.proposal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has(&self, tx_id: &Id) -> bool {
        self.seen.contains(tx_id)
    }

    /// spec.md §4.8's `HasStakerTx`: is there a staker-proposal tx (add
    /// validator/delegator) still queued for proposal?
    pub fn has_staker_tx(&self) -> bool {
        !self.proposal.is_empty()
    }

    /// spec.md §4.8's `HasTxs`: is there a decision tx still queued?
    pub fn has_txs(&self) -> bool {
        !self.decision.is_empty()
    }

    /// spec.md §4.8's `PeekTxs(sizeCap)`: a non-destructive view of up to
    /// `size_cap` queued decision txs, oldest first. Callers that actually
    /// build a block with these still need to `remove` them once the block
    /// that carries them is accepted.
    pub fn peek_txs(&self, size_cap: usize) -> Vec<Tx> {
        self.decision.iter().take(size_cap).cloned().collect()
    }

    /// Queues `tx` for the next block it's eligible for. Rejects a tx
    /// already queued (by content-addressed ID) and rejects once the
    /// mempool is at capacity -- the caller (gossip/RPC ingestion, out of
    /// scope itself) decides whether that's worth retrying later. A tx
    /// still marked dropped is left alone (Ok, no-op): a client must
    /// `remove` it first to clear the drop reason before it can be
    /// re-queued (spec.md §4.8, testable property 10).
    pub fn add(&mut self, tx: Tx) -> Result<()> {
        let tx_id = tx.id()?;
        if self.seen.contains(&tx_id) {
            return Ok(());
        }
        if self.len() >= self.max_size {
            return Err(Error::Other {
                message: "mempool is full".to_string(),
                retryable: true,
            });
        }
        self.seen.insert(tx_id);
        if tx.unsigned.is_staker_proposal() {
            self.proposal.push_back(tx);
        } else {
            self.decision.push_back(tx);
        }
        Ok(())
    }

    pub fn remove(&mut self, tx_id: &Id) {
        self.seen.remove(tx_id);
        self.dropped.remove(tx_id);
        self.decision.retain(|tx| tx.id().map(|id| id != *tx_id).unwrap_or(true));
        self.proposal.retain(|tx| tx.id().map(|id| id != *tx_id).unwrap_or(true));
    }

    /// Pulls `tx_id` out of the active queues (so the builder stops
    /// offering it) while keeping it addressable: `has` still returns true
    /// and `get_drop_reason` now returns `reason`, until a caller `remove`s
    /// it outright.
    pub fn mark_dropped(&mut self, tx_id: Id, reason: String) {
        self.decision.retain(|tx| tx.id().map(|id| id != tx_id).unwrap_or(true));
        self.proposal.retain(|tx| tx.id().map(|id| id != tx_id).unwrap_or(true));
        self.dropped.insert(tx_id, reason);
    }

    pub fn get_drop_reason(&self, tx_id: &Id) -> Option<&str> {
        self.dropped.get(tx_id).map(|s| s.as_str())
    }
}

/// The proposed timestamp for a block this full: at/after Banff the chain
/// time may advance on its own up to the bound §4.5 allows; pre-Banff it
/// only moves by an explicit `AdvanceTimeTx`, so a decision-only block just
/// carries the parent's unchanged time.
fn decision_block_time(config: &Config, parent: &dyn Chain, now: u64) -> u64 {
    let parent_time = parent.timestamp();
    if !config.is_banff(parent_time) {
        return parent_time;
    }
    let mut bound = now;
    if let Some(next_change) = time_advance::next_staker_change_time(parent) {
        bound = bound.min(next_change);
    }
    bound = bound.min(parent_time + config.sync_bound_seconds);
    bound.max(parent_time)
}

/// Builds the next block atop `parent` (already resolved to the preferred
/// tip's `Chain` view), draining whatever the mempool can offer in priority
/// order: a single staker-proposal tx first (each gets its own `Proposal`
/// block, spec.md §4.8), then as many decision txs as fit one `Standard`
/// block, then a staker-change block once one is due, and finally -- if
/// `force_advance_time` is set and the wall clock has moved past the
/// parent's time even though no staker change is due yet -- an empty
/// `Standard` block stamped with however far the clock may be advanced
/// right now, so `AcceptedFrontier`/downstream timestamp queries keep
/// moving even with no stakers and no user traffic (spec.md §4.8 case 3).
pub fn build_block(
    config: &Config,
    parent: &dyn Chain,
    parent_id: Id,
    height: u64,
    now: u64,
    force_advance_time: bool,
    mempool: &mut Mempool,
) -> Result<BlockBody> {
    // Rule 1 (spec.md §4.8): a permissionless staker whose term already
    // expired outranks everything else sitting in the mempool -- it must be
    // rewarded/removed before any other proposal or decision tx lands, or
    // the staker set would silently miss a removal it was owed.
    if let Some(target) = executor::next_reward_target(parent) {
        if target.end_time <= parent.timestamp() {
            let tx = Tx::new(UnsignedTx::RewardValidator(RewardValidatorTx {
                base_tx: BaseTx::default(),
                staker_tx_id: target.tx_id,
            }));
            return Ok(BlockBody {
                parent_id,
                height,
                time: parent.timestamp(),
                kind: crate::block::BlockKind::Proposal { tx },
            });
        }
    }

    if let Some(tx) = mempool.proposal.pop_front() {
        let tx_id = tx.id()?;
        mempool.seen.remove(&tx_id);
        let time = match &tx.unsigned {
            UnsignedTx::AdvanceTime(inner) => inner.time,
            _ => parent.timestamp(),
        };
        return Ok(BlockBody {
            parent_id,
            height,
            time,
            kind: crate::block::BlockKind::Proposal { tx },
        });
    }

    if !mempool.decision.is_empty() {
        let mut txs = Vec::new();
        while txs.len() < MAX_DECISION_TXS_PER_BLOCK {
            match mempool.decision.pop_front() {
                Some(tx) => {
                    let tx_id = tx.id()?;
                    mempool.seen.remove(&tx_id);
                    txs.push(tx);
                }
                None => break,
            }
        }
        let time = decision_block_time(config, parent, now);
        return Ok(BlockBody {
            parent_id,
            height,
            time,
            kind: crate::block::BlockKind::Standard { txs },
        });
    }

    let next_change = time_advance::next_staker_change_time(parent);
    let parent_time = parent.timestamp();
    if let Some(next_change) = next_change {
        if next_change <= now {
            return if config.is_banff(parent_time) {
                Ok(BlockBody {
                    parent_id,
                    height,
                    time: next_change,
                    kind: crate::block::BlockKind::Standard { txs: vec![] },
                })
            } else {
                let tx = Tx::new(UnsignedTx::AdvanceTime(AdvanceTimeTx { time: next_change }));
                Ok(BlockBody {
                    parent_id,
                    height,
                    time: next_change,
                    kind: crate::block::BlockKind::Proposal { tx },
                })
            };
        }
    }

    // Case 3 (spec.md §4.8): no staker change is due yet, but the caller
    // asked to move the clock forward anyway. Cap at whichever comes
    // first: the wall clock, or (if one exists) the next staker change.
    if force_advance_time && now > parent_time {
        let time = next_change.map(|t| t.min(now)).unwrap_or(now);
        return Ok(BlockBody {
            parent_id,
            height,
            time,
            kind: crate::block::BlockKind::Standard { txs: vec![] },
        });
    }

    Err(Error::Other {
        message: "no pending blocks to build".to_string(),
        retryable: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use crate::database::MemoryDatabase;
    use crate::state::State;
    use avalanche_types::platformvm::txs::Validator;
    use avalanche_types::key::secp256k1::txs::OutputOwners;
    use crate::txs::{AddValidatorTx, BaseTx};

    fn sample_add_validator() -> Tx {
        Tx::new(UnsignedTx::AddValidator(AddValidatorTx {
            base_tx: BaseTx::default(),
            validator: Validator::default(),
            stake_transferable_outputs: Vec::new(),
            rewards_owner: OutputOwners::default(),
            delegation_shares_ppm: 20_000,
        }))
    }

    #[test]
    fn add_rejects_duplicate_tx() {
        let mut mempool = Mempool::new(10);
        let tx = sample_add_validator();
        mempool.add(tx.clone()).unwrap();
        mempool.add(tx.clone()).unwrap();
        assert_eq!(mempool.len(), 1);
    }

    #[test]
    fn add_rejects_once_full() {
        let mut mempool = Mempool::new(0);
        let err = mempool.add(sample_add_validator()).unwrap_err();
        assert!(matches!(err, Error::Other { retryable: true, .. }));
    }

    /// Testable property 10 (spec.md §8): `MarkDropped` then `Remove` then
    /// `Add` leaves the tx present and not dropped.
    #[test]
    fn drop_then_remove_then_add_clears_the_drop_reason() {
        let mut mempool = Mempool::new(10);
        let tx = sample_add_validator();
        let tx_id = tx.id().unwrap();
        mempool.add(tx.clone()).unwrap();

        mempool.mark_dropped(tx_id, "stale nonce".to_string());
        assert!(mempool.has(&tx_id));
        assert_eq!(mempool.get_drop_reason(&tx_id), Some("stale nonce"));
        assert!(!mempool.has_staker_tx(), "dropped tx must not be offered by the builder");

        mempool.remove(&tx_id);
        assert!(!mempool.has(&tx_id));
        assert_eq!(mempool.get_drop_reason(&tx_id), None);

        mempool.add(tx).unwrap();
        assert!(mempool.has(&tx_id));
        assert_eq!(mempool.get_drop_reason(&tx_id), None);
        assert!(mempool.has_staker_tx());
    }

    #[test]
    fn peek_txs_does_not_remove_them() {
        let mut mempool = Mempool::new(10);
        let tx = Tx::new(UnsignedTx::CreateSupernet(crate::txs::CreateSupernetTx {
            base_tx: BaseTx::default(),
            owner: OutputOwners::default(),
        }));
        mempool.add(tx.clone()).unwrap();
        assert!(mempool.has_txs());
        let peeked = mempool.peek_txs(10);
        assert_eq!(peeked.len(), 1);
        assert!(mempool.has_txs(), "peek must not drain the queue");
        assert_eq!(mempool.len(), 1);
    }

    #[test]
    fn build_block_prefers_a_lone_proposal_tx_over_decision_txs() {
        let state = State::new(Box::new(MemoryDatabase::new()));
        let config = Config::default();
        let mut mempool = Mempool::new(10);
        mempool.add(sample_add_validator()).unwrap();

        let body = build_block(&config, &state, Id::empty(), 1, 0, false, &mut mempool).unwrap();
        assert!(matches!(body.kind, BlockKind::Proposal { .. }));
        assert!(mempool.is_empty());
    }

    #[test]
    fn build_block_errs_when_nothing_to_build() {
        let state = State::new(Box::new(MemoryDatabase::new()));
        let config = Config::default();
        let mut mempool = Mempool::new(10);
        let err = build_block(&config, &state, Id::empty(), 1, 0, false, &mut mempool).unwrap_err();
        assert!(matches!(err, Error::Other { .. }));
    }

    /// Scenario S3 (spec.md §4.8 case 3): no staker change is due (the next
    /// one is 60s out) but the caller forces the clock forward 2s anyway --
    /// the builder must emit an empty `Standard` block capped at `now`, not
    /// error out and not jump straight to the distant staker change.
    #[test]
    fn build_block_forces_an_empty_advance_when_no_staker_change_is_due() {
        use crate::config::primary_network_id;
        use crate::stakers::{Priority, Staker};
        use avalanche_types::ids::node;

        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        let parent_time = 1_000u64;
        diff.set_timestamp(parent_time);
        diff.add_current_staker(Staker {
            tx_id: Id::from_slice(&[9u8; 32]),
            node_id: node::Id::empty(),
            supernet_id: primary_network_id(),
            weight: 2_000,
            start_time: parent_time,
            end_time: parent_time + 60,
            next_time: parent_time + 60,
            priority: Priority::PrimaryNetworkValidatorCurrent,
            potential_reward: 500,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        })
        .unwrap();

        let config = Config::default();
        let mut mempool = Mempool::new(10);
        let now = parent_time + 2;

        let body = build_block(&config, &diff, Id::empty(), 1, now, true, &mut mempool).unwrap();
        assert_eq!(body.time, now);
        match body.kind {
            BlockKind::Standard { txs } => assert!(txs.is_empty()),
            other => panic!("expected an empty Standard block, got {other:?}"),
        }
    }

    /// Scenario S2: an expired permissionless validator outranks whatever
    /// else is sitting in the mempool -- the builder must propose its
    /// `RewardValidatorTx`, never drain decision txs first.
    #[test]
    fn build_block_proposes_reward_before_decision_txs() {
        use crate::config::primary_network_id;
        use crate::stakers::{Priority, Staker};
        use avalanche_types::ids::node;

        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        let expired = Staker {
            tx_id: Id::from_slice(&[7u8; 32]),
            node_id: node::Id::empty(),
            supernet_id: primary_network_id(),
            weight: 2_000,
            start_time: 0,
            end_time: 100,
            next_time: 100,
            priority: Priority::PrimaryNetworkValidatorCurrent,
            potential_reward: 500,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        };
        diff.add_current_staker(expired).unwrap();
        diff.set_timestamp(100);

        let config = Config::default();
        let mut mempool = Mempool::new(10);
        mempool.decision.push_back(sample_add_validator());

        let body = build_block(&config, &diff, Id::empty(), 1, 100, false, &mut mempool).unwrap();
        match body.kind {
            BlockKind::Proposal { tx } => match tx.unsigned {
                UnsignedTx::RewardValidator(inner) => {
                    assert_eq!(inner.staker_tx_id, Id::from_slice(&[7u8; 32]));
                }
                other => panic!("expected RewardValidatorTx, got {other:?}"),
            },
            other => panic!("expected Proposal block, got {other:?}"),
        }
        assert_eq!(mempool.len(), 1, "decision tx stays queued for a later block");
    }
}
