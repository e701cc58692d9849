//! Component G: block verification, acceptance and rejection.
//!
//! Grounded on `avalanche_types::subnet::rpc::consensus::snowman::{Block,
//! Decidable}` -- the trait the external consensus engine drives -- de-async'd
//! the same way `atomic.rs`/`database.rs` de-async their teacher traits: this
//! core's write path is single-writer and synchronous (spec.md §5), so the
//! `tonic::async_trait` plumbing around `bytes`/`height`/`timestamp`/`parent`/
//! `verify`/`status`/`accept`/`reject` has nothing to await on here.
//!
//! A block's `Verify` builds a `Diff` atop its declared parent (resolved
//! through `Versions`, spec.md §4.3's parent-by-ID design) and runs every
//! contained tx through the executor (component E). A `ProposalBlock`
//! verifies both of its children's effects up front -- the `Commit`/`Abort`
//! diffs it would produce -- so that whichever child actually gets proposed
//! next only has to adopt a precomputed diff rather than re-executing
//! anything (mirrors `platformvm/block`'s options-precomputed-at-verify-time
//! shape).
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use avalanche_types::choices::status::Status;
use avalanche_types::ids::Id;

use crate::atomic::{Requests, SharedMemory};
use crate::config::Config;
use crate::diff::{Diff, Versions};
use crate::errors::{Error, Result};
use crate::executor::{self, Outcome};
use crate::state::{Chain, State};
use crate::txs::Tx;

/// The three block shapes spec.md §4.7 names. `Standard` carries zero or more
/// decision txs (including an implicit empty-body time advance, post-Banff);
/// `Proposal` carries exactly one proposal tx (`RewardValidatorTx` or
/// `AdvanceTimeTx`) whose effect only takes hold once a `Commit` child is
/// accepted; `Commit`/`Abort` carry none and exist only to decide their
/// proposal parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Standard { txs: Vec<Tx> },
    Proposal { tx: Tx },
    Commit,
    Abort,
}

/// The data a block carries independent of consensus bookkeeping: what a
/// `Parser` would decode from `bytes()` and what `Verify` consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBody {
    pub parent_id: Id,
    pub height: u64,
    /// The chain time this block proposes. Pre-Banff, only `AdvanceTimeTx`
    /// moves time and this mirrors the parent's unchanged; at/after
    /// `Config::banff_time` every Standard/Proposal block must carry a
    /// timestamp honoring §4.5's bounds, even an empty Standard block (open
    /// question 3, SPEC_FULL.md).
    pub time: u64,
    pub kind: BlockKind,
}

impl BlockBody {
    /// Content-addressed the same way `txs::Tx::id` is: sha256 of the JSON
    /// encoding, not avalanchego's byte-exact wire codec (spec.md §6 scopes
    /// that out).
    pub fn id(&self) -> Result<Id> {
        let bytes = self.bytes()?;
        Ok(Id::from_slice(&avalanche_types::hash::sha256(&bytes)))
    }

    pub fn bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&BlockBodyWire::from(self)).map_err(|e| Error::Other {
            message: format!("encoding block body: {e}"),
            retryable: false,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let wire: BlockBodyWire = serde_json::from_slice(bytes).map_err(|e| Error::Other {
            message: format!("decoding block body: {e}"),
            retryable: false,
        })?;
        Ok(wire.into())
    }
}

/// Serde-friendly mirror of `BlockBody`/`BlockKind`; kept separate so the
/// in-memory shape stays free to derive `PartialEq` without fighting serde's
/// tagged-enum conventions.
#[derive(serde::Serialize, serde::Deserialize)]
struct BlockBodyWire {
    parent_id: Id,
    height: u64,
    time: u64,
    kind: BlockKindWire,
}

#[derive(serde::Serialize, serde::Deserialize)]
enum BlockKindWire {
    Standard { txs: Vec<Tx> },
    Proposal { tx: Tx },
    Commit,
    Abort,
}

impl From<&BlockBody> for BlockBodyWire {
    fn from(b: &BlockBody) -> Self {
        let kind = match &b.kind {
            BlockKind::Standard { txs } => BlockKindWire::Standard { txs: txs.clone() },
            BlockKind::Proposal { tx } => BlockKindWire::Proposal { tx: tx.clone() },
            BlockKind::Commit => BlockKindWire::Commit,
            BlockKind::Abort => BlockKindWire::Abort,
        };
        Self {
            parent_id: b.parent_id,
            height: b.height,
            time: b.time,
            kind,
        }
    }
}

impl From<BlockBodyWire> for BlockBody {
    fn from(w: BlockBodyWire) -> Self {
        let kind = match w.kind {
            BlockKindWire::Standard { txs } => BlockKind::Standard { txs },
            BlockKindWire::Proposal { tx } => BlockKind::Proposal { tx },
            BlockKindWire::Commit => BlockKind::Commit,
            BlockKindWire::Abort => BlockKind::Abort,
        };
        Self {
            parent_id: w.parent_id,
            height: w.height,
            time: w.time,
            kind,
        }
    }
}

/// What `Verify` computed for a processing (not-yet-accepted) block: the
/// `Diff` it would apply plus the side effects `Accept` still has to act on.
struct Verified {
    body: BlockBody,
    diff: Arc<Diff>,
    outcome: Outcome,
    status: Status,
}

/// A verified `Proposal` block additionally carries the two diffs its
/// not-yet-verified `Commit`/`Abort` children would adopt, computed eagerly
/// at the proposal's own `Verify` time.
struct ProposalOutcome {
    on_commit_diff: Arc<Diff>,
    on_commit_outcome: Outcome,
    on_abort_diff: Arc<Diff>,
}

/// A host environment callback for `PostAcceptAction`s the executor staged
/// but that reach outside this crate's state (spec.md §4.6's `onAccept`
/// thunk). A plugin-hosted VM wires this to whatever spins up a new
/// blockchain process; tests and a single-process deployment can use the
/// no-op default.
pub trait HostEnvironment: Send + Sync {
    fn on_chain_created(&self, supernet_id: Id, chain_id: Id, vm_id: Id);
}

/// Does nothing: instantiating another blockchain process is out of scope
/// for this core (spec.md §1).
#[derive(Default)]
pub struct NoopHostEnvironment;

impl HostEnvironment for NoopHostEnvironment {
    fn on_chain_created(&self, _supernet_id: Id, _chain_id: Id, _vm_id: Id) {}
}

/// Owns every not-yet-accepted block's `Diff`, and the one accepted `State`
/// they all eventually bottom out on. Implements `Versions` over its own
/// `verified` map plus the accepted tip, so `Diff::new_from_versions` can
/// resolve any processing block's parent without this manager holding
/// pointers into its own map (the parent-lookup-cycles design note).
pub struct BlockManager {
    config: Config,
    base: Arc<State>,
    shared_memory: Arc<dyn SharedMemory>,
    host: Arc<dyn HostEnvironment>,

    last_accepted: RwLock<Id>,
    verified: RwLock<HashMap<Id, Verified>>,
    proposal_outcomes: RwLock<HashMap<Id, ProposalOutcome>>,
}

impl BlockManager {
    pub fn new(
        base: Arc<State>,
        config: Config,
        shared_memory: Arc<dyn SharedMemory>,
        host: Arc<dyn HostEnvironment>,
        genesis_block_id: Id,
    ) -> Self {
        Self {
            config,
            base,
            shared_memory,
            host,
            last_accepted: RwLock::new(genesis_block_id),
            verified: RwLock::new(HashMap::new()),
            proposal_outcomes: RwLock::new(HashMap::new()),
        }
    }

    pub fn last_accepted(&self) -> Id {
        *self.last_accepted.read().expect("last_accepted lock poisoned")
    }

    /// Returns the body of any block this manager still remembers: the
    /// accepted tip's own body isn't kept here (callers querying it already
    /// have it from `build_block`/`parse_block`), only processing ones.
    pub fn get_processing(&self, block_id: &Id) -> Option<BlockBody> {
        self.verified
            .read()
            .expect("verified lock poisoned")
            .get(block_id)
            .map(|v| v.body.clone())
    }

    /// Verifies `body` (whose own ID is `block_id`, computed by the caller
    /// via `BlockBody::id` so it's stable across re-verification attempts)
    /// against its parent, staging a `Diff` and -- for a `Proposal` block --
    /// both of its children's diffs.
    pub fn verify(&self, block_id: Id, body: BlockBody, this_chain_id: &Id, now: u64) -> Result<()> {
        match &body.kind {
            BlockKind::Standard { txs } => {
                let mut diff = Diff::new_from_versions(body.parent_id, self)?;
                if body.time < diff.timestamp() {
                    return Err(Error::TimestampOutOfRange {
                        proposed: body.time,
                        bound: diff.timestamp(),
                    });
                }
                crate::time_advance::validate_new_chain_time(&self.config, &diff, body.time, now)?;
                diff.set_timestamp(body.time);

                let mut merged = Outcome::none();
                for tx in txs {
                    let outcome = executor::execute(
                        &self.config,
                        &mut diff,
                        self.shared_memory.as_ref(),
                        this_chain_id,
                        now,
                        tx,
                    )?;
                    merge_outcome(&mut merged, outcome);
                }
                self.store_verified(block_id, body, diff, merged);
                Ok(())
            }
            BlockKind::Proposal { tx } => {
                let parent = self
                    .state_for(&body.parent_id)
                    .ok_or_else(|| Error::MissingParentState {
                        block_id: format!("{:?}", body.parent_id),
                    })?;
                let parent_timestamp = parent.timestamp();

                let mut on_commit = Diff::new(body.parent_id, Arc::clone(&parent));
                if body.time < parent_timestamp {
                    return Err(Error::TimestampOutOfRange {
                        proposed: body.time,
                        bound: parent_timestamp,
                    });
                }
                crate::time_advance::validate_new_chain_time(&self.config, &*parent, body.time, now)?;
                on_commit.set_timestamp(body.time);
                let on_commit_outcome = executor::execute(
                    &self.config,
                    &mut on_commit,
                    self.shared_memory.as_ref(),
                    this_chain_id,
                    now,
                    tx,
                )?;

                let mut on_abort = Diff::new(body.parent_id, parent);
                on_abort.set_timestamp(body.time);

                self.proposal_outcomes.write().expect("proposal_outcomes lock poisoned").insert(
                    block_id,
                    ProposalOutcome {
                        on_commit_diff: Arc::new(on_commit),
                        on_commit_outcome,
                        on_abort_diff: Arc::new(on_abort),
                    },
                );
                self.verified.write().expect("verified lock poisoned").insert(
                    block_id,
                    Verified {
                        body,
                        diff: Arc::new(Diff::new(
                            block_id,
                            self.state_for(&block_id).unwrap_or_else(|| self.base.clone() as Arc<dyn Chain>),
                        )),
                        outcome: Outcome::none(),
                        status: Status::Processing,
                    },
                );
                Ok(())
            }
            BlockKind::Commit | BlockKind::Abort => {
                let outcomes = self.proposal_outcomes.read().expect("proposal_outcomes lock poisoned");
                let proposal = outcomes.get(&body.parent_id).ok_or_else(|| Error::MissingParentState {
                    block_id: format!("{:?}", body.parent_id),
                })?;
                let (diff, outcome) = match &body.kind {
                    BlockKind::Commit => (Arc::clone(&proposal.on_commit_diff), proposal.on_commit_outcome.clone()),
                    BlockKind::Abort => (Arc::clone(&proposal.on_abort_diff), Outcome::none()),
                    _ => unreachable!(),
                };
                drop(outcomes);
                // The commit/abort block itself stages nothing new: it just
                // adopts its proposal's precomputed diff verbatim (rather
                // than wrapping it as a pass-through parent of a fresh empty
                // diff), so `accept` sees the staker/weight changes the
                // proposal's tx actually staged.
                self.verified.write().expect("verified lock poisoned").insert(
                    block_id,
                    Verified {
                        body,
                        diff,
                        outcome,
                        status: Status::Processing,
                    },
                );
                Ok(())
            }
        }
    }

    fn store_verified(&self, block_id: Id, body: BlockBody, diff: Diff, outcome: Outcome) {
        self.verified.write().expect("verified lock poisoned").insert(
            block_id,
            Verified {
                body,
                diff: Arc::new(diff),
                outcome,
                status: Status::Processing,
            },
        );
    }

    /// Applies a verified block's diff onto the base `State`, commits it,
    /// runs its atomic requests through the shared-memory collaborator, and
    /// invokes any post-accept action. spec.md §4.7: "first recursively
    /// accept the parent if it is not already `lastAccepted`" -- a
    /// `Commit`/`Abort` block's parent is its `Proposal`, which is never
    /// accepted on its own (its effect is folded into the child's diff, see
    /// `verify`'s `Proposal` arm), so the walk below skips `Proposal`
    /// ancestors rather than trying to apply their placeholder diff. Any
    /// `Standard` ancestor still sitting unaccepted between `block_id` and
    /// the current tip *is* applied, oldest first, before `block_id` itself.
    /// spec.md §7: failures here are fatal (the node cannot safely
    /// continue), so every error is returned rather than swallowed --
    /// callers decide whether that means aborting the process.
    pub fn accept(&self, block_id: Id) -> Result<()> {
        for id in self.ancestor_chain_to_accept(block_id)? {
            self.accept_one(id)?;
        }
        Ok(())
    }

    /// Walks `block_id`'s `parent_id` chain back to the current
    /// `last_accepted` tip, returning every block that still needs `Accept`
    /// applied, oldest first. `Proposal` blocks are walked through (their
    /// parent_id is followed) but never included: they have no independent
    /// accept step of their own.
    fn ancestor_chain_to_accept(&self, block_id: Id) -> Result<Vec<Id>> {
        let mut chain = Vec::new();
        let mut current = block_id;
        while current != self.last_accepted() {
            let (parent_id, is_proposal) = {
                let map = self.verified.read().expect("verified lock poisoned");
                let v = map.get(&current).ok_or_else(|| Error::MissingParentState {
                    block_id: format!("{:?}", current),
                })?;
                (v.body.parent_id, matches!(v.body.kind, BlockKind::Proposal { .. }))
            };
            if !is_proposal {
                chain.push(current);
            }
            current = parent_id;
        }
        chain.reverse();
        Ok(chain)
    }

    fn accept_one(&self, block_id: Id) -> Result<()> {
        let verified = {
            let mut map = self.verified.write().expect("verified lock poisoned");
            map.remove(&block_id).ok_or_else(|| Error::MissingParentState {
                block_id: format!("{:?}", block_id),
            })?
        };

        verified.diff.apply(&self.base)?;
        self.base.record_validator_diffs(
            verified.body.height,
            verified.diff.weight_diffs(),
            verified.diff.bls_removals(),
        );
        self.base.commit()?;

        if !verified.outcome.atomic_requests.is_empty() {
            let batch = crate::database::Batch::default();
            self.shared_memory.apply(&verified.outcome.atomic_requests, &batch)?;
        }

        if let Some(crate::executor::PostAcceptAction::InstantiateChain {
            supernet_id,
            chain_id,
            vm_id,
        }) = verified.outcome.post_accept
        {
            self.host.on_chain_created(supernet_id, chain_id, vm_id);
        }

        *self.last_accepted.write().expect("last_accepted lock poisoned") = block_id;
        // A Commit/Abort's parent is a Proposal that was only ever staged as
        // a placeholder entry in `verified` (see the `Proposal` arm of
        // `verify`) -- drop both it and its precomputed outcomes now that
        // one of its children has been decided.
        self.verified.write().expect("verified lock poisoned").remove(&verified.body.parent_id);
        self.proposal_outcomes.write().expect("proposal_outcomes lock poisoned").remove(&verified.body.parent_id);
        log::debug!("accepted block {:?} at height {}", block_id, verified.body.height);
        Ok(())
    }

    /// Drops a block's staged diff without touching the base state. A
    /// rejected `Proposal` block also drops its precomputed children's
    /// diffs, since neither can ever be accepted now.
    pub fn reject(&self, block_id: Id) -> Result<()> {
        self.verified.write().expect("verified lock poisoned").remove(&block_id);
        self.proposal_outcomes.write().expect("proposal_outcomes lock poisoned").remove(&block_id);
        log::debug!("rejected block {:?}", block_id);
        Ok(())
    }
}

fn merge_outcome(into: &mut Outcome, from: Outcome) {
    for (chain_id, req) in from.atomic_requests {
        merge_requests(into.atomic_requests.entry(chain_id).or_default(), req);
    }
    if from.post_accept.is_some() {
        into.post_accept = from.post_accept;
    }
}

fn merge_requests(into: &mut Requests, from: Requests) {
    into.puts.extend(from.puts);
    into.removes.extend(from.removes);
}

impl Versions for BlockManager {
    fn state_for(&self, block_id: &Id) -> Option<Arc<dyn Chain>> {
        if *block_id == self.last_accepted() {
            return Some(Arc::clone(&self.base) as Arc<dyn Chain>);
        }
        let verified = self.verified.read().expect("verified lock poisoned");
        verified.get(block_id).map(|v| Arc::clone(&v.diff) as Arc<dyn Chain>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomic::MemorySharedMemory;
    use crate::database::MemoryDatabase;
    use crate::txs::{AdvanceTimeTx, Tx as RelayTx, UnsignedTx};

    fn manager_with_genesis() -> (BlockManager, Id) {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let genesis_id = Id::from_slice(&[0u8; 32]);
        let manager = BlockManager::new(
            base,
            Config::default(),
            Arc::new(MemorySharedMemory::new()),
            Arc::new(NoopHostEnvironment),
            genesis_id,
        );
        (manager, genesis_id)
    }

    #[test]
    fn standard_block_with_no_txs_verifies_and_accepts() {
        let (manager, genesis_id) = manager_with_genesis();
        let body = BlockBody {
            parent_id: genesis_id,
            height: 1,
            time: 0,
            kind: BlockKind::Standard { txs: vec![] },
        };
        let block_id = body.id().unwrap();
        let chain_id = Id::from_slice(&[1u8; 32]);
        manager.verify(block_id, body, &chain_id, 0).unwrap();
        manager.accept(block_id).unwrap();
        assert_eq!(manager.last_accepted(), block_id);
    }

    #[test]
    fn verify_rejects_unknown_parent() {
        let (manager, _genesis_id) = manager_with_genesis();
        let body = BlockBody {
            parent_id: Id::from_slice(&[9u8; 32]),
            height: 1,
            time: 0,
            kind: BlockKind::Standard { txs: vec![] },
        };
        let block_id = body.id().unwrap();
        let chain_id = Id::from_slice(&[1u8; 32]);
        let err = manager.verify(block_id, body, &chain_id, 0).unwrap_err();
        assert!(matches!(err, Error::MissingParentState { .. }));
    }

    #[test]
    fn reject_drops_a_verified_block_without_touching_the_base() {
        let (manager, genesis_id) = manager_with_genesis();
        let body = BlockBody {
            parent_id: genesis_id,
            height: 1,
            time: 0,
            kind: BlockKind::Standard { txs: vec![] },
        };
        let block_id = body.id().unwrap();
        let chain_id = Id::from_slice(&[1u8; 32]);
        manager.verify(block_id, body, &chain_id, 0).unwrap();
        manager.reject(block_id).unwrap();
        assert_eq!(manager.last_accepted(), genesis_id);
        assert!(manager.get_processing(&block_id).is_none());
    }

    #[test]
    fn proposal_block_precomputes_commit_and_abort_diffs() {
        let (manager, genesis_id) = manager_with_genesis();
        let tx = RelayTx::new(UnsignedTx::AdvanceTime(AdvanceTimeTx { time: 0 }));
        let body = BlockBody {
            parent_id: genesis_id,
            height: 1,
            time: 0,
            kind: BlockKind::Proposal { tx },
        };
        let block_id = body.id().unwrap();
        let chain_id = Id::from_slice(&[1u8; 32]);
        manager.verify(block_id, body, &chain_id, 0).unwrap();
        assert!(manager.proposal_outcomes.read().unwrap().contains_key(&block_id));
    }

    /// Regression test for the bug the `ClonedChain` passthrough introduced:
    /// a `Commit` child must adopt its proposal's own staged diff, so the
    /// validator weight-diff record a `RewardValidatorTx` produces actually
    /// reaches `State::record_validator_diffs` at Accept.
    #[test]
    fn commit_block_carries_its_proposals_weight_diff_through_to_accept() {
        use crate::config::primary_network_id;
        use crate::stakers::{Priority, Staker};
        use crate::txs::{BaseTx, RewardValidatorTx};
        use avalanche_types::ids::node;

        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let staker_tx_id = Id::from_slice(&[4u8; 32]);
        let staker = Staker {
            tx_id: staker_tx_id,
            node_id: node::Id::empty(),
            supernet_id: primary_network_id(),
            weight: 1_000,
            start_time: 0,
            end_time: 100,
            next_time: 100,
            priority: Priority::PrimaryNetworkValidatorCurrent,
            potential_reward: 0,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        };
        let mut seed = Diff::new(Id::empty(), base.clone() as Arc<dyn Chain>);
        seed.add_current_staker(staker).unwrap();
        seed.apply(&base).unwrap();
        base.commit().unwrap();

        let genesis_id = Id::from_slice(&[0u8; 32]);
        let manager = BlockManager::new(
            base.clone(),
            Config::default(),
            Arc::new(MemorySharedMemory::new()),
            Arc::new(NoopHostEnvironment),
            genesis_id,
        );
        let chain_id = Id::from_slice(&[1u8; 32]);

        let reward_tx = RelayTx::new(UnsignedTx::RewardValidator(RewardValidatorTx {
            base_tx: BaseTx::default(),
            staker_tx_id,
        }));
        let proposal_body = BlockBody {
            parent_id: genesis_id,
            height: 1,
            time: 100,
            kind: BlockKind::Proposal { tx: reward_tx },
        };
        let proposal_id = proposal_body.id().unwrap();
        manager.verify(proposal_id, proposal_body, &chain_id, 100).unwrap();

        let commit_body = BlockBody {
            parent_id: proposal_id,
            height: 2,
            time: 100,
            kind: BlockKind::Commit,
        };
        let commit_id = commit_body.id().unwrap();
        manager.verify(commit_id, commit_body, &chain_id, 100).unwrap();
        manager.accept(commit_id).unwrap();

        let recorded = base
            .validator_weight_diff_at(2, &primary_network_id(), &node::Id::empty())
            .unwrap();
        assert_eq!(recorded.amount, 1_000);
        assert!(recorded.decrease);
        assert!(base.get_current_validator(&primary_network_id(), &node::Id::empty()).is_none());
    }

    /// `accept`ing a tip two Standard blocks deep, with the intermediate
    /// block never separately accepted, must still apply both diffs: spec.md
    /// §4.7 requires accepting a block to first recursively accept any
    /// not-yet-accepted ancestor.
    #[test]
    fn accept_recursively_applies_an_unaccepted_intermediate_standard_block() {
        let (manager, genesis_id) = manager_with_genesis();
        let chain_id = Id::from_slice(&[1u8; 32]);

        let body1 = BlockBody {
            parent_id: genesis_id,
            height: 1,
            time: 10,
            kind: BlockKind::Standard { txs: vec![] },
        };
        let block1_id = body1.id().unwrap();
        manager.verify(block1_id, body1, &chain_id, 10).unwrap();

        let body2 = BlockBody {
            parent_id: block1_id,
            height: 2,
            time: 20,
            kind: BlockKind::Standard { txs: vec![] },
        };
        let block2_id = body2.id().unwrap();
        manager.verify(block2_id, body2, &chain_id, 20).unwrap();

        // Neither block has been accepted yet; accepting the tip directly
        // must still fold block1's staged timestamp in.
        manager.accept(block2_id).unwrap();

        assert_eq!(manager.last_accepted(), block2_id);
        assert!(manager.get_processing(&block1_id).is_none());
        assert!(manager.get_processing(&block2_id).is_none());
    }
}
