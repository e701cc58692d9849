//! Component E: the tx executor. One function per transaction kind, each
//! validating its kind-specific rules then staging its effects onto a
//! `Diff` -- never onto a base `State` directly (spec.md §4.6, "State
//! mutation is additive to a Diff").
//!
//! Grounded on the "Visitor pattern" design note: `execute` dispatches
//! statically on `UnsignedTx`'s tag and delegates to one `execute_*`
//! function per kind, each returning the same `Outcome` shape (atomic
//! requests plus an optional post-accept action) rather than mutating
//! shared `Inputs`/`AtomicRequests` fields the way a stateful visitor
//! object would -- `Diff` already is that mutable accumulator, so `Outcome`
//! only needs to carry what doesn't fit on a `Diff`.
use std::collections::HashMap;

use avalanche_types::ids::{node, Id};
use avalanche_types::txs::transferable::{self, TransferableOut};
use avalanche_types::txs::utxo::{Id as UtxoId, Utxo};

use crate::atomic::{self, Requests, SharedMemory};
use crate::config::Config;
use crate::diff::Diff;
use crate::errors::{Error, Result};
use crate::stakers::{Priority, Staker};
use crate::state::{Chain, TxStatus};
use crate::subnet::{self, Supernet, Transformation};
use crate::txs::*;

/// An action the block manager performs once this tx's containing block is
/// accepted, beyond applying the diff -- spec.md §4.6's "optional `onAccept`
/// thunk". Modeled as data rather than a boxed closure so `Outcome` stays
/// plain and comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAcceptAction {
    /// `CreateChainTx`'s hook: ask the host environment to instantiate the
    /// new blockchain, if this node validates `supernet_id`.
    InstantiateChain {
        supernet_id: Id,
        chain_id: Id,
        vm_id: Id,
    },
}

/// What executing one tx produces beyond its `Diff` mutations: atomic
/// cross-chain requests (component I) and an optional post-accept action.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub atomic_requests: HashMap<Id, Requests>,
    pub post_accept: Option<PostAcceptAction>,
}

impl Outcome {
    fn none() -> Self {
        Self::default()
    }
}

/// Pure, state-free structural checks every tx passes through before flow
/// verification: referenced UTXOs must be sorted and unique (spec.md §7
/// `InvalidTxSyntax`). Signature/size limits belong to the wire codec
/// (out of scope, spec.md §1); this only checks the one invariant the
/// executor itself depends on not being violated.
fn syntactic_verify_inputs(inputs: &[transferable::Input]) -> Result<()> {
    for window in inputs.windows(2) {
        if window[0].utxo_id >= window[1].utxo_id {
            return Err(Error::InvalidTxSyntax {
                message: "transferable inputs must be sorted and unique".to_string(),
            });
        }
    }
    Ok(())
}

fn out_amount(out: &TransferableOut) -> u64 {
    match out {
        TransferableOut::TransferOutput(o) => o.amount,
        TransferableOut::StakeableLockOut(o) => o.transfer_output.amount,
    }
}

fn out_owners(out: &TransferableOut) -> avalanche_types::key::secp256k1::txs::OutputOwners {
    match out {
        TransferableOut::TransferOutput(o) => o.output_owners.clone(),
        TransferableOut::StakeableLockOut(o) => o.transfer_output.output_owners.clone(),
    }
}

fn out_locktime(out: &TransferableOut) -> u64 {
    match out {
        TransferableOut::TransferOutput(_) => 0,
        TransferableOut::StakeableLockOut(o) => o.locktime,
    }
}

/// Resolves and deletes (from `diff`) the UTXOs a tx's declared inputs
/// reference, returning their per-asset amounts for the flow checker.
fn consume_inputs(
    diff: &mut Diff,
    inputs: &[transferable::Input],
) -> Result<Vec<crate::utxo::Consumed>> {
    syntactic_verify_inputs(inputs)?;
    let mut consumed = Vec::with_capacity(inputs.len());
    for input in inputs {
        let utxo = diff
            .get_utxo(&input.utxo_id)
            .ok_or_else(|| Error::NotFound {
                supernet_id: format!("utxo {:?} not in utxo set", input.utxo_id.id),
            })?;
        let amount = utxo
            .transfer_output
            .as_ref()
            .map(|o| o.amount)
            .or_else(|| utxo.stakeable_lock_out.as_ref().map(|l| l.transfer_output.amount))
            .ok_or_else(|| Error::InvalidTxSyntax {
                message: "utxo carries neither a transfer output nor a stakeable lock".to_string(),
            })?;
        let locktime = utxo
            .stakeable_lock_out
            .as_ref()
            .map(|l| l.locktime)
            .unwrap_or(0);
        consumed.push(crate::utxo::Consumed {
            utxo_id: input.utxo_id.clone(),
            asset_id: utxo.asset_id,
            amount,
            locktime,
        });
        diff.delete_utxo(input.utxo_id.clone());
    }
    Ok(consumed)
}

fn produced_amounts(outputs: &[transferable::Output]) -> Vec<crate::utxo::Produced> {
    outputs
        .iter()
        .map(|o| crate::utxo::Produced {
            asset_id: o.asset_id,
            amount: out_amount(&o.out),
            locktime: out_locktime(&o.out),
        })
        .collect()
}

/// Writes a tx's declared outputs into `diff` as new UTXOs, `utxoID =
/// hash(txID ‖ outputIndex)` (spec.md §3), continuing the output-index
/// sequence from `start_index`. Returns the next free index.
fn write_outputs(
    diff: &mut Diff,
    tx_id: &Id,
    outputs: &[transferable::Output],
    start_index: u32,
) -> Result<u32> {
    let mut index = start_index;
    for output in outputs {
        let utxo_id = UtxoId::new(tx_id.as_ref(), index, false)?;
        let utxo = Utxo {
            utxo_id: utxo_id.clone(),
            asset_id: output.asset_id,
            transfer_output: match &output.out {
                TransferableOut::TransferOutput(o) => Some(o.clone()),
                TransferableOut::StakeableLockOut(_) => None,
            },
            stakeable_lock_out: match &output.out {
                TransferableOut::StakeableLockOut(o) => Some(o.clone()),
                TransferableOut::TransferOutput(_) => None,
            },
        };
        diff.put_utxo(utxo_id, utxo);
        index += 1;
    }
    Ok(index)
}

fn record_committed(diff: &mut Diff, tx_id: Id, tx: Tx) {
    diff.put_tx(tx_id, tx, TxStatus::Committed);
}

/// The structural half of supernet authorization (spec.md §4.10): the last
/// credential in `tx.credentials` must supply at least as many signatures
/// as `supernet_auth` declares sig indices, and those indices must satisfy
/// the owner's threshold. Whether the signatures actually verify against
/// the owner's addresses is the `Fx.VerifyPermission` black box (spec.md
/// Non-goals: cryptographic primitives are out of scope here).
fn verify_supernet_authorization(
    credentials: &[avalanche_types::key::secp256k1::txs::Credential],
    supernet_auth: &avalanche_types::key::secp256k1::txs::Input,
    owner: &avalanche_types::key::secp256k1::txs::OutputOwners,
) -> Result<()> {
    subnet::check_auth_shape(owner, supernet_auth)?;
    let last = credentials
        .last()
        .ok_or_else(|| Error::UnauthorizedSupernetModification {
            supernet_id: "tx carries no credentials for the supernet authorization".to_string(),
        })?;
    if last.signatures.len() < supernet_auth.sig_indices.len() {
        return Err(Error::UnauthorizedSupernetModification {
            supernet_id: "credential carries fewer signatures than sig indices".to_string(),
        });
    }
    Ok(())
}

/// spec.md §4.10's `verifyPoASubnetAuthorization`: the structural owner-auth
/// check plus PoA immutability (testable property 5 -- no owner-keyed
/// modification of a transformed supernet is ever accepted). Used by the
/// permissioned validator-set txs (`AddSubnetValidatorTx`,
/// `RemoveSupernetValidatorTx`); `CreateChainTx`/`TransformSupernetTx` use
/// the plain `verify_supernet_authorization` (creating a chain, and
/// transforming itself, are both still valid on a transformed supernet --
/// the latter guards its own not-yet-transformed precondition separately).
fn verify_poa_supernet_authorization(
    diff: &Diff,
    credentials: &[avalanche_types::key::secp256k1::txs::Credential],
    supernet_id: &Id,
    supernet_auth: &avalanche_types::key::secp256k1::txs::Input,
    owner: &avalanche_types::key::secp256k1::txs::OutputOwners,
) -> Result<()> {
    verify_supernet_authorization(credentials, supernet_auth, owner)?;
    subnet::check_not_transformed(diff.get_transformation(supernet_id).as_ref(), supernet_id)
}

fn lookup_supernet(diff: &Diff, supernet_id: &Id) -> Result<Supernet> {
    diff.get_supernet(supernet_id).ok_or_else(|| Error::NotFound {
        supernet_id: format!("{:?}", supernet_id),
    })
}

/// spec.md §4.6: "for supernet stakers the validation period is a subset of
/// a primary-network validation period for the same node" (testable
/// property 7).
fn check_primary_network_subset(diff: &Diff, node_id: &node::Id, start: u64, end: u64) -> Result<()> {
    let primary = crate::config::primary_network_id();
    let candidate = diff
        .get_current_validator(&primary, node_id)
        .or_else(|| diff.get_pending_validator(&primary, node_id));
    match candidate {
        Some(v) if v.start_time <= start && end <= v.end_time => Ok(()),
        _ => Err(Error::ValidatorSubsetViolation {
            node_id: format!("{:?}", node_id),
        }),
    }
}

fn check_not_duplicate(diff: &Diff, supernet_id: &Id, node_id: &node::Id) -> Result<()> {
    if diff.get_pending_validator(supernet_id, node_id).is_some() {
        return Err(Error::DuplicateValidator {
            node_id: format!("{:?}", node_id),
            supernet_id: format!("{:?}", supernet_id),
            state: "pending".to_string(),
        });
    }
    if diff.get_current_validator(supernet_id, node_id).is_some() {
        return Err(Error::DuplicateValidator {
            node_id: format!("{:?}", node_id),
            supernet_id: format!("{:?}", supernet_id),
            state: "current".to_string(),
        });
    }
    Ok(())
}

fn check_timing(
    config: &Config,
    diff: &Diff,
    start: u64,
    end: u64,
    min_duration: u64,
    max_duration: u64,
) -> Result<()> {
    if start <= diff.timestamp() + config.min_future_start_time_offset_seconds {
        return Err(Error::InvalidTxSyntax {
            message: "staker start time is not far enough ahead of chain time".to_string(),
        });
    }
    if end <= start {
        return Err(Error::InvalidTxSyntax {
            message: "staker end time must be after its start time".to_string(),
        });
    }
    let duration = end - start;
    if duration < min_duration || duration > max_duration {
        return Err(Error::InvalidTxSyntax {
            message: format!(
                "staker duration {duration} outside allowed range [{min_duration}, {max_duration}]"
            ),
        });
    }
    Ok(())
}

// -- AddValidatorTx / AddDelegatorTx (legacy, primary-network-only) --

fn execute_add_validator(config: &Config, diff: &mut Diff, tx: &Tx, inner: &AddValidatorTx) -> Result<Outcome> {
    let primary = crate::config::primary_network_id();
    check_timing(
        config,
        diff,
        inner.validator.start,
        inner.validator.end,
        config.min_stake_duration_seconds,
        config.max_stake_duration_seconds,
    )?;
    if inner.validator.weight < config.min_validator_stake || inner.validator.weight > config.max_validator_stake {
        return Err(Error::InvalidTxSyntax {
            message: "validator weight outside configured stake bounds".to_string(),
        });
    }
    if (inner.delegation_shares_ppm as u64) < config.min_delegation_fee_ppm {
        return Err(Error::InvalidTxSyntax {
            message: "delegation fee below the configured floor".to_string(),
        });
    }
    check_not_duplicate(diff, &primary, &inner.validator.node_id)?;

    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let mut produced = produced_amounts(&outputs);
    produced.extend(produced_amounts(&inner.stake_transferable_outputs));
    crate::utxo::verify_spend(
        &consumed,
        &produced,
        &config.staking_asset_id,
        config.add_primary_network_validator_fee,
        diff.timestamp(),
    )?;

    let tx_id = tx.id()?;
    let next_index = write_outputs(diff, &tx_id, &outputs, 0)?;
    write_outputs(diff, &tx_id, &inner.stake_transferable_outputs, next_index)?;

    diff.add_pending_staker(Staker {
        tx_id,
        node_id: inner.validator.node_id,
        supernet_id: primary,
        weight: inner.validator.weight,
        start_time: inner.validator.start,
        end_time: inner.validator.end,
        next_time: inner.validator.start,
        priority: Priority::PrimaryNetworkValidatorPending,
        potential_reward: 0,
        delegation_fee_ppm: inner.delegation_shares_ppm,
        bls_public_key: None,
    });
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

fn execute_add_delegator(config: &Config, diff: &mut Diff, tx: &Tx, inner: &AddDelegatorTx) -> Result<Outcome> {
    let primary = crate::config::primary_network_id();
    check_timing(
        config,
        diff,
        inner.validator.start,
        inner.validator.end,
        config.min_stake_duration_seconds,
        config.max_stake_duration_seconds,
    )?;
    if inner.validator.weight < config.min_delegator_stake {
        return Err(Error::InvalidTxSyntax {
            message: "delegator weight below the configured minimum".to_string(),
        });
    }
    check_primary_network_subset(diff, &inner.validator.node_id, inner.validator.start, inner.validator.end)?;

    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let mut produced = produced_amounts(&outputs);
    produced.extend(produced_amounts(&inner.stake_transferable_outputs));
    crate::utxo::verify_spend(
        &consumed,
        &produced,
        &config.staking_asset_id,
        config.add_primary_network_delegator_fee,
        diff.timestamp(),
    )?;

    let tx_id = tx.id()?;
    let next_index = write_outputs(diff, &tx_id, &outputs, 0)?;
    write_outputs(diff, &tx_id, &inner.stake_transferable_outputs, next_index)?;

    diff.add_pending_staker(Staker {
        tx_id,
        node_id: inner.validator.node_id,
        supernet_id: primary,
        weight: inner.validator.weight,
        start_time: inner.validator.start,
        end_time: inner.validator.end,
        next_time: inner.validator.start,
        priority: Priority::PrimaryNetworkBanffDelegatorPending,
        potential_reward: 0,
        delegation_fee_ppm: 0,
        bls_public_key: None,
    });
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

fn execute_add_subnet_validator(
    config: &Config,
    diff: &mut Diff,
    tx: &Tx,
    inner: &AddSubnetValidatorTx,
) -> Result<Outcome> {
    let supernet = lookup_supernet(diff, &inner.supernet_id)?;
    verify_poa_supernet_authorization(diff, &tx.credentials, &inner.supernet_id, &inner.supernet_auth, &supernet.owner)?;
    check_timing(
        config,
        diff,
        inner.validator.start,
        inner.validator.end,
        config.min_stake_duration_seconds,
        config.max_stake_duration_seconds,
    )?;
    check_not_duplicate(diff, &inner.supernet_id, &inner.validator.node_id)?;
    check_primary_network_subset(diff, &inner.validator.node_id, inner.validator.start, inner.validator.end)?;

    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let produced = produced_amounts(&outputs);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, config.tx_fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    write_outputs(diff, &tx_id, &outputs, 0)?;

    diff.add_pending_staker(Staker {
        tx_id,
        node_id: inner.validator.node_id,
        supernet_id: inner.supernet_id,
        weight: inner.validator.weight,
        start_time: inner.validator.start,
        end_time: inner.validator.end,
        next_time: inner.validator.start,
        priority: Priority::SupernetPermissionedValidatorPending,
        potential_reward: 0,
        delegation_fee_ppm: 0,
        bls_public_key: None,
    });
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

// -- Banff permissionless Add{Validator,Delegator}Tx --

fn bls_key_in_use(diff: &Diff, public_key: &[u8]) -> bool {
    let primary = crate::config::primary_network_id();
    diff.current_stakers()
        .into_iter()
        .chain(diff.pending_stakers())
        .any(|s| s.supernet_id == primary && s.bls_public_key.as_deref() == Some(public_key))
}

fn execute_add_permissionless_validator(
    config: &Config,
    diff: &mut Diff,
    tx: &Tx,
    inner: &AddPermissionlessValidatorTx,
) -> Result<Outcome> {
    let is_primary = inner.supernet_id == crate::config::primary_network_id();
    let transformation = if is_primary {
        None
    } else {
        Some(
            diff.get_transformation(&inner.supernet_id)
                .ok_or_else(|| Error::NotFound {
                    supernet_id: format!("{:?}", inner.supernet_id),
                })?,
        )
    };

    let (min_stake, max_stake, min_duration, max_duration, min_fee_ppm, asset_id) = match &transformation {
        Some(t) => (
            t.min_validator_stake,
            t.max_validator_stake,
            t.min_stake_duration_seconds,
            t.max_stake_duration_seconds,
            t.min_delegation_fee_ppm as u64,
            t.asset_id,
        ),
        None => (
            config.min_validator_stake,
            config.max_validator_stake,
            config.min_stake_duration_seconds,
            config.max_stake_duration_seconds,
            config.min_delegation_fee_ppm,
            config.staking_asset_id,
        ),
    };

    check_timing(config, diff, inner.validator.start, inner.validator.end, min_duration, max_duration)?;
    if inner.validator.weight < min_stake || inner.validator.weight > max_stake {
        return Err(Error::InvalidTxSyntax {
            message: "validator weight outside configured stake bounds".to_string(),
        });
    }
    if (inner.delegation_shares_ppm as u64) < min_fee_ppm {
        return Err(Error::InvalidTxSyntax {
            message: "delegation fee below the configured floor".to_string(),
        });
    }
    check_not_duplicate(diff, &inner.supernet_id, &inner.validator.node_id)?;
    if !is_primary {
        check_primary_network_subset(diff, &inner.validator.node_id, inner.validator.start, inner.validator.end)?;
    }
    if let Some(signer) = &inner.signer {
        if bls_key_in_use(diff, &signer.public_key) {
            return Err(Error::DuplicateValidator {
                node_id: format!("{:?}", inner.validator.node_id),
                supernet_id: format!("{:?}", inner.supernet_id),
                state: "bls key already registered".to_string(),
            });
        }
    }

    let stake_produced = produced_amounts(&inner.stake_transferable_outputs);
    for p in &stake_produced {
        if p.asset_id != asset_id {
            return Err(Error::InvalidTxSyntax {
                message: "stake output does not use the configured staking asset".to_string(),
            });
        }
    }

    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let mut produced = produced_amounts(&outputs);
    produced.extend(stake_produced);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, config.tx_fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    let next_index = write_outputs(diff, &tx_id, &outputs, 0)?;
    write_outputs(diff, &tx_id, &inner.stake_transferable_outputs, next_index)?;

    let priority = if is_primary {
        Priority::PrimaryNetworkValidatorPending
    } else {
        Priority::SupernetPermissionlessValidatorPending
    };
    diff.add_pending_staker(Staker {
        tx_id,
        node_id: inner.validator.node_id,
        supernet_id: inner.supernet_id,
        weight: inner.validator.weight,
        start_time: inner.validator.start,
        end_time: inner.validator.end,
        next_time: inner.validator.start,
        priority,
        potential_reward: 0,
        delegation_fee_ppm: inner.delegation_shares_ppm,
        bls_public_key: inner.signer.as_ref().map(|s| s.public_key.clone()),
    });
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

fn execute_add_permissionless_delegator(
    config: &Config,
    diff: &mut Diff,
    tx: &Tx,
    inner: &AddPermissionlessDelegatorTx,
) -> Result<Outcome> {
    let is_primary = inner.supernet_id == crate::config::primary_network_id();
    let (min_duration, max_duration, min_delegator_stake, asset_id, max_weight_factor) = if is_primary {
        (
            config.min_stake_duration_seconds,
            config.max_stake_duration_seconds,
            config.min_delegator_stake,
            config.staking_asset_id,
            5u64,
        )
    } else {
        let t = diff
            .get_transformation(&inner.supernet_id)
            .ok_or_else(|| Error::NotFound {
                supernet_id: format!("{:?}", inner.supernet_id),
            })?;
        (
            t.min_stake_duration_seconds,
            t.max_stake_duration_seconds,
            t.min_delegator_stake,
            t.asset_id,
            t.max_validator_weight_factor,
        )
    };

    check_timing(config, diff, inner.validator.start, inner.validator.end, min_duration, max_duration)?;
    if inner.validator.weight < min_delegator_stake {
        return Err(Error::InvalidTxSyntax {
            message: "delegator weight below the configured minimum".to_string(),
        });
    }
    let validator = diff
        .get_current_validator(&inner.supernet_id, &inner.validator.node_id)
        .or_else(|| diff.get_pending_validator(&inner.supernet_id, &inner.validator.node_id))
        .ok_or_else(|| Error::ValidatorSubsetViolation {
            node_id: format!("{:?}", inner.validator.node_id),
        })?;
    if validator.start_time > inner.validator.start || inner.validator.end > validator.end_time {
        return Err(Error::ValidatorSubsetViolation {
            node_id: format!("{:?}", inner.validator.node_id),
        });
    }
    if inner.validator.weight > validator.weight.saturating_mul(max_weight_factor) {
        return Err(Error::InvalidTxSyntax {
            message: "delegator weight exceeds the validator's max weight factor".to_string(),
        });
    }

    let stake_produced = produced_amounts(&inner.stake_transferable_outputs);
    for p in &stake_produced {
        if p.asset_id != asset_id {
            return Err(Error::InvalidTxSyntax {
                message: "stake output does not use the configured staking asset".to_string(),
            });
        }
    }

    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let mut produced = produced_amounts(&outputs);
    produced.extend(stake_produced);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, config.tx_fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    let next_index = write_outputs(diff, &tx_id, &outputs, 0)?;
    write_outputs(diff, &tx_id, &inner.stake_transferable_outputs, next_index)?;

    let priority = if is_primary {
        Priority::PrimaryNetworkBanffDelegatorPending
    } else {
        Priority::SupernetPermissionlessDelegatorPending
    };
    diff.add_pending_staker(Staker {
        tx_id,
        node_id: inner.validator.node_id,
        supernet_id: inner.supernet_id,
        weight: inner.validator.weight,
        start_time: inner.validator.start,
        end_time: inner.validator.end,
        next_time: inner.validator.start,
        priority,
        potential_reward: 0,
        delegation_fee_ppm: 0,
        bls_public_key: None,
    });
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

/// The staker `RewardValidatorTx` may legally reference: the first current
/// staker in total order (§4.2) that is not a permissioned supernet
/// validator (those are only ever removed by time-advance). Exported so the
/// block builder (component H) can construct the matching tx without
/// duplicating this scan.
pub fn next_reward_target(diff: &dyn Chain) -> Option<Staker> {
    diff.current_stakers()
        .into_iter()
        .find(|s| s.priority != Priority::SupernetPermissionedValidatorCurrent)
}

fn execute_reward_validator(config: &Config, diff: &mut Diff, tx: &Tx, inner: &RewardValidatorTx) -> Result<Outcome> {
    let target = next_reward_target(diff).ok_or_else(|| Error::RewardTargetMismatch {
        got: format!("{:?}", inner.staker_tx_id),
        want: "<no removable staker>".to_string(),
    })?;
    if target.tx_id != inner.staker_tx_id {
        return Err(Error::RewardTargetMismatch {
            got: format!("{:?}", inner.staker_tx_id),
            want: format!("{:?}", target.tx_id),
        });
    }

    diff.remove_current_staker(target.clone())?;

    if target.potential_reward > 0 {
        let owner = diff
            .get_tx(&target.tx_id)
            .and_then(|(staker_tx, _)| reward_owner(&staker_tx.unsigned))
            .unwrap_or_default();
        let reward_tx_id = tx.id()?;
        let utxo_id = UtxoId::new(reward_tx_id.as_ref(), 0, false)?;
        let utxo = Utxo {
            utxo_id: utxo_id.clone(),
            asset_id: config.staking_asset_id,
            transfer_output: Some(avalanche_types::key::secp256k1::txs::transfer::Output {
                amount: target.potential_reward,
                output_owners: owner,
            }),
            stakeable_lock_out: None,
        };
        diff.put_utxo(utxo_id, utxo.clone());
        diff.add_reward_utxos(target.tx_id, vec![utxo]);
    }

    let tx_id = tx.id()?;
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

fn reward_owner(unsigned: &UnsignedTx) -> Option<avalanche_types::key::secp256k1::txs::OutputOwners> {
    match unsigned {
        UnsignedTx::AddValidator(t) => Some(t.rewards_owner.clone()),
        UnsignedTx::AddDelegator(t) => Some(t.rewards_owner.clone()),
        UnsignedTx::AddPermissionlessValidator(t) => Some(t.validator_rewards_owner.clone()),
        UnsignedTx::AddPermissionlessDelegator(t) => Some(t.rewards_owner.clone()),
        _ => None,
    }
}

fn execute_advance_time(config: &Config, diff: &mut Diff, new_time: u64, now: u64) -> Result<Outcome> {
    if config.is_banff(new_time) {
        return Err(Error::InvalidTxSyntax {
            message: "AdvanceTimeTx is only valid before the Banff cutover".to_string(),
        });
    }
    crate::time_advance::validate_new_chain_time(config, diff, new_time, now)?;
    let changes = crate::time_advance::advance_time_to(config, diff, new_time)?;
    stage_time_advance(diff, new_time, changes)?;
    Ok(Outcome::none())
}

/// Stages one `StateChanges` bundle (component F's pure description) onto
/// `diff`: moves promoted stakers from pending to current, drops expired
/// permissioned validators, debits rewards paid from each supernet's
/// rewards-pool supply, and records any current-supply growth from minted
/// reward shortfalls. Shared by `AdvanceTimeTx` and empty Banff blocks.
pub fn stage_time_advance(diff: &mut Diff, new_time: u64, changes: crate::time_advance::StateChanges) -> Result<()> {
    for promotion in changes.promotions {
        diff.remove_pending_staker(
            // the pre-promotion staker differs only in priority/next_time/
            // potential_reward, none of which `Staker`'s `Ord`/`Eq` key on
            // (only `tx_id` does), so reusing the promoted value removes the
            // matching pending entry by identity.
            Staker {
                potential_reward: 0,
                ..promotion.staker.clone()
            },
        );
        let mut current = promotion.staker;
        current.potential_reward = promotion.potential_reward;
        diff.add_current_staker(current)?;
    }
    for removed in changes.removed_current {
        diff.remove_current_staker(removed)?;
    }
    for (supernet_id, new_supply) in changes.supply_updates {
        diff.set_supply(supernet_id, new_supply);
    }
    for (supernet_id, new_pool) in changes.rewards_pool_updates {
        diff.set_rewards_pool_supply(supernet_id, new_pool);
    }
    diff.set_timestamp(new_time);
    Ok(())
}

fn execute_create_supernet(config: &Config, diff: &mut Diff, tx: &Tx, inner: &CreateSupernetTx) -> Result<Outcome> {
    let fee = config.create_supernet_tx_fee(diff.timestamp());
    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let produced = produced_amounts(&outputs);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    write_outputs(diff, &tx_id, &outputs, 0)?;
    diff.add_supernet(Supernet {
        id: tx_id,
        owner: inner.owner.clone(),
    });
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

fn execute_create_chain(config: &Config, diff: &mut Diff, tx: &Tx, inner: &CreateChainTx) -> Result<Outcome> {
    let supernet = lookup_supernet(diff, &inner.supernet_id)?;
    verify_supernet_authorization(&tx.credentials, &inner.supernet_auth, &supernet.owner)?;

    let fee = config.create_chain_tx_fee(diff.timestamp());
    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let produced = produced_amounts(&outputs);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    write_outputs(diff, &tx_id, &outputs, 0)?;
    diff.add_chain(inner.supernet_id, tx_id);
    record_committed(diff, tx_id, tx.clone());

    Ok(Outcome {
        atomic_requests: HashMap::new(),
        post_accept: Some(PostAcceptAction::InstantiateChain {
            supernet_id: inner.supernet_id,
            chain_id: tx_id,
            vm_id: inner.vm_id,
        }),
    })
}

fn execute_import(
    config: &Config,
    diff: &mut Diff,
    shared_memory: &dyn SharedMemory,
    this_chain_id: &Id,
    tx: &Tx,
    inner: &ImportTx,
) -> Result<Outcome> {
    let keys: Vec<Vec<u8>> = inner
        .source_chain_transferable_inputs
        .iter()
        .map(|i| i.utxo_id.id.to_vec())
        .collect();
    let raw = shared_memory
        .get(&inner.source_chain_id, &keys)
        .map_err(|_| Error::AtomicMemoryMissing {
            utxo_id: format!("{:?}", keys),
            source_chain_id: format!("{:?}", inner.source_chain_id),
        })?;

    let mut consumed = Vec::new();
    for (input, bytes) in inner.source_chain_transferable_inputs.iter().zip(raw.iter()) {
        let utxo: Utxo = serde_json::from_slice(bytes).map_err(|e| Error::InvalidTxSyntax {
            message: format!("failed to decode imported utxo: {e}"),
        })?;
        let amount = utxo
            .transfer_output
            .as_ref()
            .map(|o| o.amount)
            .ok_or_else(|| Error::InvalidTxSyntax {
                message: "imported utxo carries no transfer output".to_string(),
            })?;
        consumed.push(crate::utxo::Consumed {
            utxo_id: input.utxo_id.clone(),
            asset_id: utxo.asset_id,
            amount,
            locktime: 0,
        });
    }

    let local_inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    consumed.extend(consume_inputs(diff, &local_inputs)?);
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let produced = produced_amounts(&outputs);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, config.tx_fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    write_outputs(diff, &tx_id, &outputs, 0)?;
    record_committed(diff, tx_id, tx.clone());

    let mut requests = HashMap::new();
    requests.insert(
        inner.source_chain_id,
        atomic::Requests {
            puts: Vec::new(),
            removes: keys,
        },
    );
    let _ = this_chain_id;
    Ok(Outcome {
        atomic_requests: requests,
        post_accept: None,
    })
}

fn execute_export(config: &Config, diff: &mut Diff, tx: &Tx, inner: &ExportTx) -> Result<Outcome> {
    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let local_outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let mut produced = produced_amounts(&local_outputs);
    produced.extend(produced_amounts(&inner.destination_chain_transferable_outputs));
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, config.tx_fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    let next_index = write_outputs(diff, &tx_id, &local_outputs, 0)?;

    let mut puts = Vec::new();
    for (offset, output) in inner.destination_chain_transferable_outputs.iter().enumerate() {
        let index = next_index + offset as u32;
        let utxo_id = UtxoId::new(tx_id.as_ref(), index, false)?;
        let utxo = Utxo {
            utxo_id: utxo_id.clone(),
            asset_id: output.asset_id,
            transfer_output: match &output.out {
                TransferableOut::TransferOutput(o) => Some(o.clone()),
                TransferableOut::StakeableLockOut(_) => None,
            },
            stakeable_lock_out: match &output.out {
                TransferableOut::StakeableLockOut(o) => Some(o.clone()),
                TransferableOut::TransferOutput(_) => None,
            },
        };
        let value = serde_json::to_vec(&utxo).map_err(|e| Error::InvalidTxSyntax {
            message: format!("failed to encode exported utxo: {e}"),
        })?;
        puts.push(atomic::Element {
            key: utxo_id.id.to_vec(),
            value,
            traits: out_owners(&output.out).addresses,
        });
    }

    record_committed(diff, tx_id, tx.clone());

    let mut requests = HashMap::new();
    requests.insert(
        inner.destination_chain_id,
        atomic::Requests {
            puts,
            removes: Vec::new(),
        },
    );
    Ok(Outcome {
        atomic_requests: requests,
        post_accept: None,
    })
}

fn execute_transform_supernet(
    config: &Config,
    diff: &mut Diff,
    tx: &Tx,
    inner: &TransformSupernetTx,
) -> Result<Outcome> {
    let supernet = lookup_supernet(diff, &inner.supernet_id)?;
    verify_supernet_authorization(&tx.credentials, &inner.supernet_auth, &supernet.owner)?;
    subnet::check_not_transformed(diff.get_transformation(&inner.supernet_id).as_ref(), &inner.supernet_id)?;

    if inner.min_validator_stake > inner.max_validator_stake
        || inner.min_stake_duration_seconds == 0
        || inner.min_stake_duration_seconds > inner.max_stake_duration_seconds
        || inner.min_delegation_fee_ppm > 1_000_000
        || inner.max_validator_weight_factor == 0
        || inner.uptime_requirement_ppm > 1_000_000
        || inner.reward_share_ppm > 1_000_000
    {
        return Err(Error::InvalidSupernetParams {
            message: "transform-supernet parameters fail bounds checking".to_string(),
        });
    }

    let inputs = inner.base_tx.transferable_inputs.clone().unwrap_or_default();
    let outputs = inner.base_tx.transferable_outputs.clone().unwrap_or_default();
    let consumed = consume_inputs(diff, &inputs)?;
    let produced = produced_amounts(&outputs);
    crate::utxo::verify_spend(&consumed, &produced, &config.staking_asset_id, config.tx_fee, diff.timestamp())?;

    let tx_id = tx.id()?;
    write_outputs(diff, &tx_id, &outputs, 0)?;
    diff.set_transformation(
        inner.supernet_id,
        Transformation {
            supernet_id: inner.supernet_id,
            asset_id: inner.asset_id,
            initial_supply: inner.initial_supply,
            maximum_supply: inner.maximum_supply,
            min_validator_stake: inner.min_validator_stake,
            max_validator_stake: inner.max_validator_stake,
            min_stake_duration_seconds: inner.min_stake_duration_seconds,
            max_stake_duration_seconds: inner.max_stake_duration_seconds,
            min_delegation_fee_ppm: inner.min_delegation_fee_ppm,
            min_delegator_stake: inner.min_delegator_stake,
            max_validator_weight_factor: inner.max_validator_weight_factor,
            uptime_requirement_ppm: inner.uptime_requirement_ppm,
            reward_share_ppm: inner.reward_share_ppm,
        },
    );
    // spec.md §4.6: "initialize the transformed supernet's supply to zero",
    // independent of `initial_supply` (which only bounds future minting via
    // `maximum_supply`, recorded above).
    diff.set_supply(inner.supernet_id, 0);
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

fn execute_remove_supernet_validator(
    diff: &mut Diff,
    tx: &Tx,
    inner: &RemoveSupernetValidatorTx,
) -> Result<Outcome> {
    if inner.supernet_id == crate::config::primary_network_id() {
        return Err(Error::UnauthorizedSupernetModification {
            supernet_id: "the primary network has no owner to authorize removal".to_string(),
        });
    }
    let supernet = lookup_supernet(diff, &inner.supernet_id)?;
    verify_poa_supernet_authorization(diff, &tx.credentials, &inner.supernet_id, &inner.supernet_auth, &supernet.owner)?;

    if let Some(pending) = diff.get_pending_validator(&inner.supernet_id, &inner.node_id) {
        diff.remove_pending_staker(pending);
    } else if let Some(current) = diff.get_current_validator(&inner.supernet_id, &inner.node_id) {
        diff.remove_current_staker(current)?;
    } else {
        return Err(Error::NotFound {
            supernet_id: format!("{:?}", inner.node_id),
        });
    }

    let tx_id = tx.id()?;
    record_committed(diff, tx_id, tx.clone());
    Ok(Outcome::none())
}

/// Dispatches `tx` to its kind-specific executor, staging every resulting
/// mutation onto `diff`. `now`/`shared_memory`/`chain_id` are only consumed
/// by the kinds that need them (`AdvanceTimeTx`, `ImportTx`).
pub fn execute(
    config: &Config,
    diff: &mut Diff,
    shared_memory: &dyn SharedMemory,
    this_chain_id: &Id,
    now: u64,
    tx: &Tx,
) -> Result<Outcome> {
    match &tx.unsigned {
        UnsignedTx::AddValidator(inner) => execute_add_validator(config, diff, tx, inner),
        UnsignedTx::AddDelegator(inner) => execute_add_delegator(config, diff, tx, inner),
        UnsignedTx::AddSubnetValidator(inner) => execute_add_subnet_validator(config, diff, tx, inner),
        UnsignedTx::AddPermissionlessValidator(inner) => {
            execute_add_permissionless_validator(config, diff, tx, inner)
        }
        UnsignedTx::AddPermissionlessDelegator(inner) => {
            execute_add_permissionless_delegator(config, diff, tx, inner)
        }
        UnsignedTx::RewardValidator(inner) => execute_reward_validator(config, diff, tx, inner),
        UnsignedTx::AdvanceTime(inner) => execute_advance_time(config, diff, inner.time, now),
        UnsignedTx::CreateSupernet(inner) => execute_create_supernet(config, diff, tx, inner),
        UnsignedTx::CreateChain(inner) => execute_create_chain(config, diff, tx, inner),
        UnsignedTx::Import(inner) => execute_import(config, diff, shared_memory, this_chain_id, tx, inner),
        UnsignedTx::Export(inner) => execute_export(config, diff, tx, inner),
        UnsignedTx::TransformSupernet(inner) => execute_transform_supernet(config, diff, tx, inner),
        UnsignedTx::RemoveSupernetValidator(inner) => execute_remove_supernet_validator(diff, tx, inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomic::MemorySharedMemory;
    use crate::database::MemoryDatabase;
    use crate::state::State;
    use avalanche_types::key::secp256k1::txs::OutputOwners;
    use avalanche_types::platformvm::txs::Validator;
    use std::sync::Arc;

    fn fresh_diff() -> Diff {
        let base = Arc::new(State::new(Box::new(MemoryDatabase::new())));
        Diff::new(Id::empty(), base)
    }

    #[test]
    fn add_validator_rejects_start_time_too_close_to_now() {
        let config = Config::default();
        let mut diff = fresh_diff();
        let tx = Tx::new(UnsignedTx::AddValidator(AddValidatorTx {
            base_tx: BaseTx::default(),
            validator: Validator {
                node_id: node::Id::empty(),
                start: diff.timestamp(),
                end: diff.timestamp() + config.min_stake_duration_seconds + 10,
                weight: config.min_validator_stake,
            },
            stake_transferable_outputs: Vec::new(),
            rewards_owner: OutputOwners::default(),
            delegation_shares_ppm: config.min_delegation_fee_ppm as u32,
        }));
        let shared = MemorySharedMemory::new();
        let err = execute(&config, &mut diff, &shared, &Id::empty(), 0, &tx).unwrap_err();
        assert!(matches!(err, Error::InvalidTxSyntax { .. }));
    }

    #[test]
    fn add_validator_creates_pending_staker_on_success() {
        let config = Config::default();
        let mut diff = fresh_diff();
        let start = diff.timestamp() + config.min_future_start_time_offset_seconds + 1;
        let end = start + config.min_stake_duration_seconds;
        let tx = Tx::new(UnsignedTx::AddValidator(AddValidatorTx {
            base_tx: BaseTx::default(),
            validator: Validator {
                node_id: node::Id::empty(),
                start,
                end,
                weight: config.min_validator_stake,
            },
            stake_transferable_outputs: Vec::new(),
            rewards_owner: OutputOwners::default(),
            delegation_shares_ppm: config.min_delegation_fee_ppm as u32,
        }));
        let shared = MemorySharedMemory::new();
        execute(&config, &mut diff, &shared, &Id::empty(), 0, &tx).unwrap();
        assert_eq!(diff.pending_stakers().len(), 1);
    }

    #[test]
    fn add_subnet_validator_without_primary_network_coverage_is_rejected() {
        let config = Config::default();
        let mut diff = fresh_diff();
        let supernet_id = Id::from_slice(&[9u8; 32]);
        diff.add_supernet(Supernet {
            id: supernet_id,
            owner: OutputOwners {
                locktime: 0,
                threshold: 1,
                addresses: vec![],
            },
        });
        let start = diff.timestamp() + config.min_future_start_time_offset_seconds + 1;
        let end = start + config.min_stake_duration_seconds;
        let tx = Tx {
            unsigned: UnsignedTx::AddSubnetValidator(AddSubnetValidatorTx {
                base_tx: BaseTx::default(),
                validator: Validator {
                    node_id: node::Id::empty(),
                    start,
                    end,
                    weight: 1,
                },
                supernet_id,
                supernet_auth: avalanche_types::key::secp256k1::txs::Input { sig_indices: vec![] },
            }),
            credentials: vec![avalanche_types::key::secp256k1::txs::Credential { signatures: vec![] }],
        };
        let shared = MemorySharedMemory::new();
        let err = execute(&config, &mut diff, &shared, &Id::empty(), 0, &tx).unwrap_err();
        assert!(matches!(err, Error::ValidatorSubsetViolation { .. }));
    }

    #[test]
    fn reward_validator_must_target_the_first_removable_staker() {
        let mut diff = fresh_diff();
        let primary = crate::config::primary_network_id();
        diff.add_current_staker(Staker {
            tx_id: Id::from_slice(&[1u8; 32]),
            node_id: node::Id::empty(),
            supernet_id: primary,
            weight: 100,
            start_time: 0,
            end_time: 10,
            next_time: 10,
            priority: Priority::PrimaryNetworkValidatorCurrent,
            potential_reward: 0,
            delegation_fee_ppm: 0,
            bls_public_key: None,
        })
        .unwrap();
        let wrong_target = Id::from_slice(&[2u8; 32]);
        let tx = Tx::new(UnsignedTx::RewardValidator(RewardValidatorTx {
            base_tx: BaseTx::default(),
            staker_tx_id: wrong_target,
        }));
        let shared = MemorySharedMemory::new();
        let err = execute(&Config::default(), &mut diff, &shared, &Id::empty(), 0, &tx).unwrap_err();
        assert!(matches!(err, Error::RewardTargetMismatch { .. }));
    }

    /// Testable property 5 (spec.md §8): once a supernet transforms, no
    /// further owner-keyed modification -- including adding a permissioned
    /// validator -- is accepted, even with a fully satisfying credential.
    #[test]
    fn add_subnet_validator_rejected_once_supernet_is_transformed() {
        let config = Config::default();
        let mut diff = fresh_diff();
        let supernet_id = Id::from_slice(&[7u8; 32]);
        diff.add_supernet(Supernet {
            id: supernet_id,
            owner: OutputOwners {
                locktime: 0,
                threshold: 0,
                addresses: vec![],
            },
        });
        diff.set_transformation(
            supernet_id,
            Transformation {
                supernet_id,
                asset_id: Id::empty(),
                initial_supply: 0,
                maximum_supply: 1_000_000,
                min_validator_stake: 1,
                max_validator_stake: u64::MAX,
                min_stake_duration_seconds: 1,
                max_stake_duration_seconds: u64::MAX,
                min_delegation_fee_ppm: 0,
                min_delegator_stake: 1,
                max_validator_weight_factor: 1,
                uptime_requirement_ppm: 0,
                reward_share_ppm: 0,
            },
        );
        let start = diff.timestamp() + config.min_future_start_time_offset_seconds + 1;
        let end = start + config.min_stake_duration_seconds;
        let tx = Tx {
            unsigned: UnsignedTx::AddSubnetValidator(AddSubnetValidatorTx {
                base_tx: BaseTx::default(),
                validator: Validator {
                    node_id: node::Id::empty(),
                    start,
                    end,
                    weight: 1,
                },
                supernet_id,
                supernet_auth: avalanche_types::key::secp256k1::txs::Input { sig_indices: vec![] },
            }),
            credentials: vec![avalanche_types::key::secp256k1::txs::Credential { signatures: vec![] }],
        };
        let shared = MemorySharedMemory::new();
        let err = execute(&config, &mut diff, &shared, &Id::empty(), 0, &tx).unwrap_err();
        assert!(matches!(err, Error::AlreadyTransformed { .. }));
    }

    #[test]
    fn remove_supernet_validator_rejects_primary_network() {
        let mut diff = fresh_diff();
        let tx = Tx {
            unsigned: UnsignedTx::RemoveSupernetValidator(RemoveSupernetValidatorTx {
                base_tx: BaseTx::default(),
                supernet_id: crate::config::primary_network_id(),
                node_id: node::Id::empty(),
                supernet_auth: avalanche_types::key::secp256k1::txs::Input { sig_indices: vec![] },
            }),
            credentials: vec![],
        };
        let shared = MemorySharedMemory::new();
        let err = execute(&Config::default(), &mut diff, &shared, &Id::empty(), 0, &tx).unwrap_err();
        assert!(matches!(err, Error::UnauthorizedSupernetModification { .. }));
    }
}
