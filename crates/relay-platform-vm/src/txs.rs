//! Component E's data model: one struct per transaction kind, plus the
//! `Tx` envelope that pairs an unsigned variant with its credentials.
//!
//! Grounded on `avalanche_types::platformvm::txs::*`: each variant below
//! mirrors the corresponding teacher struct's field names and embeds the
//! same `txs::Tx` "base" shape (network_id/blockchain_id/transferable
//! in+out/memo) the teacher flattens into every tx kind. Two differences
//! from the teacher, both deliberate:
//!
//! - credentials live on the envelope (`Tx::credentials`), not duplicated
//!   into every variant, following the flatter `Tx { unsigned_tx,
//!   credentials }` shape `platformvm::txs::mod::Tx` itself uses for the
//!   API-response encoding.
//! - `Tx::id` hashes a JSON encoding of the unsigned variant rather than a
//!   packer-built byte-exact wire encoding: byte-for-byte compatibility with
//!   avalanchego's legacy codec is out of scope (spec.md Non-goals say only
//!   internal self-consistency is required), but every variant still needs
//!   a stable, content-addressed identity.
//!
//! `AddDelegatorTx`, `AddPermissionlessDelegatorTx`, and `CreateChainTx` have
//! no dedicated file in the teacher crate (only the validator-side and
//! create-subnet-side txs do); they're modeled analogously to
//! `add_validator::Tx`/`add_permissionless_validator::Tx`/
//! `create_subnet::Tx` with the fields those kinds need instead.
use avalanche_types::ids::{node, Id};
use avalanche_types::key::bls::ProofOfPossession;
use avalanche_types::key::secp256k1::txs::{
    transfer, Credential, Input as AuthInput, OutputOwners,
};
use avalanche_types::platformvm::txs::Validator;
use avalanche_types::txs::transferable;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// The fields every tx kind shares: network scoping, the UTXOs it spends and
/// creates, and a memo. Reused directly from `avalanche_types::txs::Tx`
/// rather than re-derived, so flow-checking a relay tx and flow-checking the
/// wire type it is modeled on walk the identical struct shape.
pub type BaseTx = avalanche_types::txs::Tx;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddValidatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub stake_transferable_outputs: Vec<transferable::Output>,
    pub rewards_owner: OutputOwners,
    /// Parts-per-million of delegation reward this validator keeps for
    /// itself (teacher's `shares` field, same unit as `Config::
    /// min_delegation_fee_ppm`).
    pub delegation_shares_ppm: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddDelegatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub stake_transferable_outputs: Vec<transferable::Output>,
    pub rewards_owner: OutputOwners,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddSubnetValidatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub supernet_id: Id,
    pub supernet_auth: AuthInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddPermissionlessValidatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub supernet_id: Id,
    /// Present only when `supernet_id` is the primary network.
    pub signer: Option<ProofOfPossession>,
    pub stake_transferable_outputs: Vec<transferable::Output>,
    pub validator_rewards_owner: OutputOwners,
    pub delegator_rewards_owner: OutputOwners,
    pub delegation_shares_ppm: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddPermissionlessDelegatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub supernet_id: Id,
    pub stake_transferable_outputs: Vec<transferable::Output>,
    pub rewards_owner: OutputOwners,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardValidatorTx {
    pub base_tx: BaseTx,
    /// `txID` of the staker being removed and, if eligible, rewarded.
    pub staker_tx_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvanceTimeTx {
    pub time: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSupernetTx {
    pub base_tx: BaseTx,
    pub owner: OutputOwners,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateChainTx {
    pub base_tx: BaseTx,
    pub supernet_id: Id,
    pub chain_name: String,
    pub vm_id: Id,
    pub fx_ids: Vec<Id>,
    pub genesis_data: Vec<u8>,
    pub supernet_auth: AuthInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportTx {
    pub base_tx: BaseTx,
    pub source_chain_id: Id,
    pub source_chain_transferable_inputs: Vec<transferable::Input>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportTx {
    pub base_tx: BaseTx,
    pub destination_chain_id: Id,
    pub destination_chain_transferable_outputs: Vec<transferable::Output>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransformSupernetTx {
    pub base_tx: BaseTx,
    pub supernet_id: Id,
    pub asset_id: Id,
    pub initial_supply: u64,
    pub maximum_supply: u64,
    pub min_validator_stake: u64,
    pub max_validator_stake: u64,
    pub min_stake_duration_seconds: u64,
    pub max_stake_duration_seconds: u64,
    pub min_delegation_fee_ppm: u32,
    pub min_delegator_stake: u64,
    pub max_validator_weight_factor: u64,
    pub uptime_requirement_ppm: u32,
    pub reward_share_ppm: u32,
    pub supernet_auth: AuthInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveSupernetValidatorTx {
    pub base_tx: BaseTx,
    pub supernet_id: Id,
    pub node_id: node::Id,
    pub supernet_auth: AuthInput,
}

/// The tagged sum dispatched on in the executor (design note "Visitor
/// pattern"): one variant per transaction kind named in spec.md §4.6.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum UnsignedTx {
    AddValidator(AddValidatorTx),
    AddDelegator(AddDelegatorTx),
    AddSubnetValidator(AddSubnetValidatorTx),
    AddPermissionlessValidator(AddPermissionlessValidatorTx),
    AddPermissionlessDelegator(AddPermissionlessDelegatorTx),
    RewardValidator(RewardValidatorTx),
    AdvanceTime(AdvanceTimeTx),
    CreateSupernet(CreateSupernetTx),
    CreateChain(CreateChainTx),
    Import(ImportTx),
    Export(ExportTx),
    TransformSupernet(TransformSupernetTx),
    RemoveSupernetValidator(RemoveSupernetValidatorTx),
}

impl UnsignedTx {
    /// The embedded `BaseTx`, for the kinds that have one. `AdvanceTimeTx`
    /// and `RewardValidatorTx`'s reward-only path have none/an empty one:
    /// `AdvanceTimeTx` carries no UTXOs or network scoping at all.
    pub fn base_tx(&self) -> Option<&BaseTx> {
        match self {
            UnsignedTx::AddValidator(tx) => Some(&tx.base_tx),
            UnsignedTx::AddDelegator(tx) => Some(&tx.base_tx),
            UnsignedTx::AddSubnetValidator(tx) => Some(&tx.base_tx),
            UnsignedTx::AddPermissionlessValidator(tx) => Some(&tx.base_tx),
            UnsignedTx::AddPermissionlessDelegator(tx) => Some(&tx.base_tx),
            UnsignedTx::RewardValidator(tx) => Some(&tx.base_tx),
            UnsignedTx::AdvanceTime(_) => None,
            UnsignedTx::CreateSupernet(tx) => Some(&tx.base_tx),
            UnsignedTx::CreateChain(tx) => Some(&tx.base_tx),
            UnsignedTx::Import(tx) => Some(&tx.base_tx),
            UnsignedTx::Export(tx) => Some(&tx.base_tx),
            UnsignedTx::TransformSupernet(tx) => Some(&tx.base_tx),
            UnsignedTx::RemoveSupernetValidator(tx) => Some(&tx.base_tx),
        }
    }

    /// Whether this kind is a staker proposal (bundled alone into a
    /// Proposal block) rather than a decision tx (bundled many-to-a-Standard
    /// block). See spec.md §3 "Block" and §4.8.
    pub fn is_staker_proposal(&self) -> bool {
        matches!(
            self,
            UnsignedTx::AddValidator(_)
                | UnsignedTx::AddDelegator(_)
                | UnsignedTx::AddSubnetValidator(_)
                | UnsignedTx::AddPermissionlessValidator(_)
                | UnsignedTx::AddPermissionlessDelegator(_)
                | UnsignedTx::RewardValidator(_)
                | UnsignedTx::AdvanceTime(_)
        )
    }
}

/// A transaction paired with the credentials authorizing it. Mirrors
/// `platformvm::txs::Tx { unsigned_tx, credentials }`'s top-level shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tx {
    pub unsigned: UnsignedTx,
    #[serde(default)]
    pub credentials: Vec<Credential>,
}

impl Tx {
    pub fn new(unsigned: UnsignedTx) -> Self {
        Self {
            unsigned,
            credentials: Vec::new(),
        }
    }

    /// Content-addressed identity: sha256 of the unsigned variant's
    /// canonical JSON encoding. Stable across calls for an unchanged value,
    /// which is all §6's "txID = hash(full bytes)" invariant requires of an
    /// implementation that isn't claiming wire compatibility with
    /// avalanchego's legacy codec.
    pub fn id(&self) -> Result<Id> {
        let bytes = serde_json::to_vec(&self.unsigned).map_err(|e| Error::InvalidTxSyntax {
            message: format!("failed to encode unsigned tx for hashing: {e}"),
        })?;
        Ok(Id::from_slice(&avalanche_types::hash::sha256(&bytes)))
    }

    pub fn base_tx(&self) -> Option<&BaseTx> {
        self.unsigned.base_tx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn id_is_stable_and_content_addressed() {
        let tx = sample_add_validator();
        assert_eq!(tx.id().unwrap(), tx.id().unwrap());

        let mut other = sample_add_validator();
        if let UnsignedTx::AddValidator(inner) = &mut other.unsigned {
            inner.delegation_shares_ppm = 30_000;
        }
        assert_ne!(tx.id().unwrap(), other.id().unwrap());
    }

    #[test]
    fn advance_time_has_no_base_tx() {
        let tx = Tx::new(UnsignedTx::AdvanceTime(AdvanceTimeTx { time: 100 }));
        assert!(tx.base_tx().is_none());
    }

    #[test]
    fn staker_proposal_classification() {
        assert!(sample_add_validator().unsigned.is_staker_proposal());
        let create_supernet = Tx::new(UnsignedTx::CreateSupernet(CreateSupernetTx {
            base_tx: BaseTx::default(),
            owner: OutputOwners::default(),
        }));
        assert!(!create_supernet.unsigned.is_staker_proposal());
    }
}
