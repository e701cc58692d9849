//! The genesis payload: the seed from which a from-scratch chain state is
//! built (initial UTXOs, initial stakers, initial supply).
//!
//! Grounded on `avalanche_types::avalanchego::genesis::Genesis`'s shape
//! (allocations + initial staked funds + initial stakers), trimmed to what
//! the relay chain itself needs -- the teacher's `c_chain_genesis` payload
//! has no counterpart here since auxiliary-chain genesis is out of scope.
use avalanche_types::ids::{short, Id};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One unlocked allocation of the staking asset to an address, present as a
/// UTXO in the genesis state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub address: short::Id,
    pub initial_amount: u64,
}

/// A validator of the primary network present from genesis, validating for
/// `initial_stake_duration_seconds` starting at `Genesis::start_time`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenesisStaker {
    pub node_id: avalanche_types::ids::node::Id,
    pub reward_address: short::Id,
    /// Parts-per-million delegation fee charged to this validator's
    /// delegators once permissionless delegation is live.
    pub delegation_fee_ppm: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    pub network_id: u32,

    #[serde(default)]
    pub allocations: Vec<Allocation>,

    pub start_time: u64,
    pub initial_stake_duration_seconds: u64,
    /// Stakers are staggered across this window so they don't all come up
    /// for their first reward at the same instant.
    #[serde(default)]
    pub initial_stake_duration_offset_seconds: u64,

    /// Addresses whose allocation is locked as stake rather than spendable,
    /// one per `initial_stakers` entry in order.
    #[serde(default)]
    pub initial_staked_funds: Vec<short::Id>,
    #[serde(default)]
    pub initial_stakers: Vec<GenesisStaker>,

    #[serde(default)]
    pub message: Option<String>,
}

impl Genesis {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::Other {
            message: format!("failed to parse genesis json: {e}"),
            retryable: false,
        })
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Other {
            message: format!("failed to serialize genesis json: {e}"),
            retryable: false,
        })
    }

    /// The chain ID the platform genesis block itself is identified by: the
    /// hash of the genesis bytes, the same way the teacher's VM derives a
    /// block ID from its serialized contents.
    pub fn block_id(&self) -> Result<Id> {
        let bytes = self.to_json()?;
        Ok(Id::from_slice(&avalanche_types::hash::sha256(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Genesis {
        Genesis {
            network_id: 12345,
            allocations: vec![Allocation {
                address: short::Id::empty(),
                initial_amount: 1_000_000,
            }],
            start_time: 1_000,
            initial_stake_duration_seconds: 100,
            initial_stake_duration_offset_seconds: 10,
            initial_staked_funds: vec![short::Id::empty()],
            initial_stakers: vec![GenesisStaker {
                node_id: avalanche_types::ids::node::Id::empty(),
                reward_address: short::Id::empty(),
                delegation_fee_ppm: 20_000,
            }],
            message: None,
        }
    }

    #[test]
    fn json_round_trip() {
        let g = sample();
        let bytes = g.to_json().unwrap();
        let back = Genesis::from_json(&bytes).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn block_id_is_stable() {
        let g = sample();
        assert_eq!(g.block_id().unwrap(), g.block_id().unwrap());
    }
}
