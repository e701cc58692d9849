//! Component J: supernets, their owner-threshold authorization, and the
//! permissionless transformation that fixes their rules forever after.
//!
//! Grounded on `avalanche_types::platformvm::txs::create_subnet::Tx`'s
//! `owner: key::secp256k1::txs::OutputOwners` for "who may authorize
//! changes," and `add_subnet_validator::Tx`'s `subnet_auth: key::secp256k1::
//! txs::Input` for how a later tx proves it has that owner's signatures
//! (a set of signature indices into the owner's address list, not the raw
//! signatures -- verification happens at the credential layer, out of scope
//! here per spec.md's Non-goals for component J).
use avalanche_types::ids::Id;
use avalanche_types::key::secp256k1::txs::{Input as AuthInput, OutputOwners};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A supernet's control set: an owner-threshold multisig, exactly the shape
/// `CreateSupernetTx` declares it with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supernet {
    pub id: Id,
    pub owner: OutputOwners,
}

/// Once a supernet transforms, its elastic staking parameters are fixed for
/// good (spec.md PoA-immutability design note): no tx can ever touch
/// `transformation` again for this supernet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transformation {
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
    /// Fixed yield rate this supernet's reward calculator uses in place of
    /// the primary network's calendar anchors, fixed forever at
    /// transformation time (parts-per-million; spec glossary "Reward share").
    pub reward_share_ppm: u32,
}

/// Checks that `auth`'s signature indices are in range for `owner`'s address
/// list and that there are at least `owner.threshold` of them. This is the
/// structural half of authorization; whether the signatures actually verify
/// against those addresses is a credential-layer concern the executor
/// applies before calling into this module.
pub fn check_auth_shape(owner: &OutputOwners, auth: &AuthInput) -> Result<()> {
    if auth.sig_indices.len() < owner.threshold as usize {
        return Err(Error::UnauthorizedSupernetModification {
            supernet_id: "insufficient signature indices for owner threshold".to_string(),
        });
    }
    for &idx in &auth.sig_indices {
        if idx as usize >= owner.addresses.len() {
            return Err(Error::UnauthorizedSupernetModification {
                supernet_id: "signature index out of range for owner address list".to_string(),
            });
        }
    }
    let mut sorted = auth.sig_indices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != auth.sig_indices.len() {
        return Err(Error::UnauthorizedSupernetModification {
            supernet_id: "duplicate signature indices".to_string(),
        });
    }
    Ok(())
}

/// Rejects any attempt to touch a supernet's transformation once it has one
/// (PoA immutability: a transformed supernet's elastic-staking parameters
/// can never change again, and it cannot be transformed a second time).
pub fn check_not_transformed(existing: Option<&Transformation>, supernet_id: &Id) -> Result<()> {
    if existing.is_some() {
        return Err(Error::AlreadyTransformed {
            supernet_id: format!("{:?}", supernet_id),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalanche_types::ids::short;

    fn owner(threshold: u32, n: usize) -> OutputOwners {
        OutputOwners {
            locktime: 0,
            threshold,
            addresses: (0..n).map(|i| short::Id::from_slice(&[i as u8; 20])).collect(),
        }
    }

    #[test]
    fn accepts_enough_distinct_indices() {
        let owner = owner(2, 3);
        let auth = AuthInput {
            sig_indices: vec![0, 2],
        };
        assert!(check_auth_shape(&owner, &auth).is_ok());
    }

    #[test]
    fn rejects_below_threshold() {
        let owner = owner(2, 3);
        let auth = AuthInput {
            sig_indices: vec![0],
        };
        assert!(check_auth_shape(&owner, &auth).is_err());
    }

    #[test]
    fn rejects_out_of_range_index() {
        let owner = owner(1, 2);
        let auth = AuthInput {
            sig_indices: vec![5],
        };
        assert!(check_auth_shape(&owner, &auth).is_err());
    }

    #[test]
    fn rejects_duplicate_indices() {
        let owner = owner(2, 3);
        let auth = AuthInput {
            sig_indices: vec![1, 1],
        };
        assert!(check_auth_shape(&owner, &auth).is_err());
    }

    #[test]
    fn transformed_supernet_rejects_further_transformation() {
        let t = Transformation {
            supernet_id: Id::empty(),
            asset_id: Id::empty(),
            initial_supply: 0,
            maximum_supply: 0,
            min_validator_stake: 0,
            max_validator_stake: 0,
            min_stake_duration_seconds: 0,
            max_stake_duration_seconds: 0,
            min_delegation_fee_ppm: 0,
            min_delegator_stake: 0,
            max_validator_weight_factor: 0,
            uptime_requirement_ppm: 0,
            reward_share_ppm: 0,
        };
        assert!(check_not_transformed(Some(&t), &Id::empty()).is_err());
        assert!(check_not_transformed(None, &Id::empty()).is_ok());
    }
}
