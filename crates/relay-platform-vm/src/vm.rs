//! Component K: the handler registry that bootstraps components A-J from
//! genesis and config and exposes the surface an embedding consensus engine
//! drives.
//!
//! Grounded on `avalanche_types::subnet::rpc::snow::engine::common::vm::CommonVm`
//! -- de-async'd the same way `block.rs`/`atomic.rs` de-async their teacher
//! traits, since the gRPC plugin wiring the rest of `CommonVm` exists for is
//! out of scope (spec.md §1; SPEC_FULL.md component K). `initialize` mirrors
//! `CommonVm::initialize`'s genesis-bytes-plus-config bootstrap; `last_accepted`/
//! `get_block`/`build_block`/`set_preference` are this core's share of
//! `ChainVm`/`Getter`.
use std::sync::Arc;

use avalanche_types::ids::Id;

use crate::atomic::{MemorySharedMemory, SharedMemory};
use crate::block::{BlockBody, BlockManager, HostEnvironment, NoopHostEnvironment};
use crate::config::Config;
use crate::database::Database;
use crate::diff::Versions;
use crate::errors::{Error, Result};
use crate::genesis::Genesis;
use crate::mempool::{self, Mempool};
use crate::state::State;

/// Bootstrap inputs a plugin host would otherwise assemble from flags and an
/// RPC handshake (out of scope): genesis bytes, the parsed config, a
/// database handle, a shared-memory collaborator and a host-environment
/// callback. Test callers construct this directly; a real plugin boundary
/// would decode these from its own wire messages first.
pub struct InitializeArgs {
    pub db: Box<dyn Database>,
    pub genesis_bytes: Vec<u8>,
    pub config: Config,
    pub shared_memory: Arc<dyn SharedMemory>,
    pub host: Arc<dyn HostEnvironment>,
    pub mempool_max_size: usize,
}

impl InitializeArgs {
    /// A single-process, in-memory bootstrap useful for tests: a fresh
    /// `MemoryDatabase`, the default `Config`, an in-process
    /// `MemorySharedMemory`, and a no-op host.
    pub fn in_memory(genesis_bytes: Vec<u8>) -> Self {
        Self {
            db: Box::new(crate::database::MemoryDatabase::new()),
            genesis_bytes,
            config: Config::default(),
            shared_memory: Arc::new(MemorySharedMemory::new()),
            host: Arc::new(NoopHostEnvironment),
            mempool_max_size: 4_096,
        }
    }
}

/// The running engine: a `State` bootstrapped from genesis, a `BlockManager`
/// overlaying it with processing blocks (components C and G), and a
/// `Mempool` feeding `build_block` (component H). One instance per chain,
/// matching the teacher's one-`Vm`-per-blockchain-process model without the
/// process boundary.
pub struct Vm {
    config: Config,
    chain_id: Id,
    blocks: BlockManager,
    mempool: Mempool,
}

impl Vm {
    /// Bootstraps chain state from `args.genesis_bytes`, seeding the genesis
    /// block as the initial `last_accepted` tip. `chain_id` is this VM's own
    /// chain identity, used by the executor to tell an `ImportTx`'s source
    /// chain from this one (spec.md §4.6).
    pub fn initialize(chain_id: Id, args: InitializeArgs) -> Result<Self> {
        let genesis = Genesis::from_json(&args.genesis_bytes)?;
        let genesis_block_id = genesis.block_id()?;
        let state = State::from_genesis(args.db, &genesis, &args.config)?;
        state.commit()?;

        let blocks = BlockManager::new(
            Arc::new(state),
            args.config.clone(),
            args.shared_memory,
            args.host,
            genesis_block_id,
        );

        Ok(Self {
            config: args.config,
            chain_id,
            blocks,
            mempool: Mempool::new(args.mempool_max_size),
        })
    }

    pub fn last_accepted(&self) -> Id {
        self.blocks.last_accepted()
    }

    /// Fetches a not-yet-accepted block's body by ID. The accepted tip
    /// itself isn't retained here (callers already have its body from
    /// whichever call produced it); only processing blocks are queryable.
    pub fn get_block(&self, block_id: &Id) -> Option<BlockBody> {
        self.blocks.get_processing(block_id)
    }

    pub fn parse_block(&self, bytes: &[u8]) -> Result<(Id, BlockBody)> {
        let body = BlockBody::from_bytes(bytes)?;
        let id = body.id()?;
        Ok((id, body))
    }

    /// Queues `tx` for inclusion in a future block.
    pub fn issue_tx(&mut self, tx: crate::txs::Tx) -> Result<()> {
        self.mempool.add(tx)
    }

    /// Builds the next block atop the current preference (this core always
    /// prefers its own `last_accepted` tip; fork choice beyond that is the
    /// consensus engine's job, out of scope per spec.md §1). `force_advance_time`
    /// is the consensus engine's `BuildBlock` hint that it wants the chain
    /// clock moved forward even though no staker change is due yet (spec.md
    /// §4.8 case 3) -- plumbed straight through to the mempool's builder.
    pub fn build_block(&mut self, height: u64, now: u64, force_advance_time: bool) -> Result<(Id, BlockBody)> {
        let parent_id = self.blocks.last_accepted();
        let parent = self
            .blocks
            .state_for(&parent_id)
            .ok_or_else(|| Error::MissingParentState {
                block_id: format!("{:?}", parent_id),
            })?;
        let body = mempool::build_block(
            &self.config,
            parent.as_ref(),
            parent_id,
            height,
            now,
            force_advance_time,
            &mut self.mempool,
        )?;
        let block_id = body.id()?;
        self.blocks.verify(block_id, body.clone(), &self.chain_id, now)?;
        Ok((block_id, body))
    }

    pub fn verify_block(&self, block_id: Id, body: BlockBody, now: u64) -> Result<()> {
        self.blocks.verify(block_id, body, &self.chain_id, now)
    }

    pub fn accept_block(&mut self, block_id: Id) -> Result<()> {
        if let Some(body) = self.blocks.get_processing(&block_id) {
            if let crate::block::BlockKind::Standard { txs } = &body.kind {
                for tx in txs {
                    if let Ok(tx_id) = tx.id() {
                        self.mempool.remove(&tx_id);
                    }
                }
            }
        }
        self.blocks.accept(block_id)
    }

    pub fn reject_block(&self, block_id: Id) -> Result<()> {
        self.blocks.reject(block_id)
    }

    /// Notifies the VM of the consensus engine's preferred tip. This core
    /// doesn't branch (it only ever builds atop its own `last_accepted`), so
    /// there's nothing to record beyond accepting the call -- a multi-branch
    /// Vm would track `preferred` separately from `last_accepted` here.
    pub fn set_preference(&self, _block_id: Id) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::{Allocation, Genesis};
    use avalanche_types::ids::short;

    fn sample_genesis() -> Vec<u8> {
        let genesis = Genesis {
            network_id: 1,
            allocations: vec![Allocation {
                address: short::Id::empty(),
                initial_amount: 1_000_000,
            }],
            start_time: 0,
            initial_stake_duration_seconds: 100,
            initial_stake_duration_offset_seconds: 0,
            initial_staked_funds: vec![],
            initial_stakers: vec![],
            message: None,
        };
        genesis.to_json().unwrap()
    }

    #[test]
    fn initialize_sets_last_accepted_to_the_genesis_block() {
        let genesis_bytes = sample_genesis();
        let expected = Genesis::from_json(&genesis_bytes).unwrap().block_id().unwrap();
        let vm = Vm::initialize(Id::from_slice(&[7u8; 32]), InitializeArgs::in_memory(genesis_bytes)).unwrap();
        assert_eq!(vm.last_accepted(), expected);
    }

    #[test]
    fn build_block_with_an_empty_mempool_and_no_due_transition_errs() {
        let genesis_bytes = sample_genesis();
        let mut vm = Vm::initialize(Id::from_slice(&[7u8; 32]), InitializeArgs::in_memory(genesis_bytes)).unwrap();
        let err = vm.build_block(1, 0, false).unwrap_err();
        assert!(matches!(err, Error::MissingParentState { .. }) || matches!(err, Error::Other { .. }));
    }

    #[test]
    fn issue_tx_then_build_block_produces_a_proposal_block() {
        use avalanche_types::key::secp256k1::txs::OutputOwners;
        use avalanche_types::platformvm::txs::Validator;
        use crate::txs::{AddValidatorTx, BaseTx, Tx, UnsignedTx};

        let genesis_bytes = sample_genesis();
        let mut vm = Vm::initialize(Id::from_slice(&[7u8; 32]), InitializeArgs::in_memory(genesis_bytes)).unwrap();
        let tx = Tx::new(UnsignedTx::AddValidator(AddValidatorTx {
            base_tx: BaseTx::default(),
            validator: Validator {
                node_id: avalanche_types::ids::node::Id::empty(),
                start: 1_000,
                end: 1_000 + vm.config.min_stake_duration_seconds,
                weight: vm.config.min_validator_stake,
            },
            stake_transferable_outputs: Vec::new(),
            rewards_owner: OutputOwners::default(),
            delegation_shares_ppm: 20_000,
        }));
        vm.issue_tx(tx).unwrap();
        let (_id, body) = vm.build_block(1, 0, false).unwrap();
        assert!(matches!(body.kind, crate::block::BlockKind::Proposal { .. }));
    }
}
