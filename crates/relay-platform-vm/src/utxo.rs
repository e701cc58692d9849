//! Component A: the UTXO set and the semantic balance ("flow") checker.
//!
//! Grounded on `avalanche_types::txs::utxo::{Id, Utxo}` for the on-chain
//! record shape and on `avalanche_types::key::secp256k1::txs::transfer::
//! {Input, Output}` for the spend/produce amounts a transaction carries.
//! Credential/signature verification is out of scope here (spec.md
//! Non-goals for component A): this module only checks that what a
//! transaction consumes exists and that the declared amounts balance,
//! including the locked/unlocked split `platformvm.StakeableLockOut`
//! carries alongside a plain `TransferOutput`.
use std::collections::HashMap;

use avalanche_types::ids::Id;
use avalanche_types::txs::utxo::{Id as UtxoId, Utxo};

use crate::errors::{Error, Result};

/// One side of a transaction's declared transfers: a UTXO being consumed, or
/// a new output being produced, each carrying the asset it moves and the
/// `locktime` it's held under (0 for a plain, never-locked `TransferOutput`).
#[derive(Debug, Clone)]
pub struct Consumed {
    pub utxo_id: UtxoId,
    pub asset_id: Id,
    pub amount: u64,
    pub locktime: u64,
}

#[derive(Debug, Clone)]
pub struct Produced {
    pub asset_id: Id,
    pub amount: u64,
    pub locktime: u64,
}

/// Looks up the UTXOs a transaction's inputs reference. A database-backed
/// implementation lives behind the `Chain` capability (see `state.rs`); this
/// trait exists so the flow checker can be exercised without one.
pub trait UtxoLookup {
    fn get_utxo(&self, utxo_id: &UtxoId) -> Option<Utxo>;
}

/// Resolves a raw input list against a lookup, producing per-asset amounts.
/// Fails if any referenced UTXO is missing (spent twice, or never existed).
pub fn resolve_consumed(
    lookup: &impl UtxoLookup,
    utxo_ids: &[UtxoId],
) -> Result<Vec<Consumed>> {
    let mut out = Vec::with_capacity(utxo_ids.len());
    for utxo_id in utxo_ids {
        let utxo = lookup.get_utxo(utxo_id).ok_or_else(|| Error::NotFound {
            supernet_id: format!("utxo {:?} not in utxo set", utxo_id.id),
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
        out.push(Consumed {
            utxo_id: utxo_id.clone(),
            asset_id: utxo.asset_id,
            amount,
            locktime,
        });
    }
    Ok(out)
}

/// The outcome of balancing a transaction: the fee it paid (in the staking
/// asset) and any excess left over per non-fee asset, which a caller may use
/// to require a matching "change" output but which this checker does not
/// itself enforce (spec.md: amounts not accounted for by outputs or the fee
/// are simply burned, which is legal).
#[derive(Debug, Clone, Default)]
pub struct FlowResult {
    pub fee_paid: u64,
}

/// Verifies that, for every asset, consumed amount >= produced amount, that
/// the staking asset covers produced amount plus `required_fee`, and that
/// locked value is not laundered into unlocked value: per asset, the sum of
/// inputs still locked at `chain_time` must cover the sum of outputs
/// declared locked. An output's `locktime` counts as locked only while it
/// hasn't yet expired (`locktime > chain_time`); once expired, it settles
/// into the unlocked bucket on both sides. Mirrors `avalanchego`'s
/// `utxo.Verifier.VerifySpend`, minus credential checking.
pub fn verify_spend(
    consumed: &[Consumed],
    produced: &[Produced],
    staking_asset_id: &Id,
    required_fee: u64,
    chain_time: u64,
) -> Result<FlowResult> {
    let mut in_by_asset: HashMap<Id, u64> = HashMap::new();
    let mut locked_in_by_asset: HashMap<Id, u64> = HashMap::new();
    for c in consumed {
        let total = in_by_asset.entry(c.asset_id).or_insert(0);
        *total = total.checked_add(c.amount).ok_or_else(|| Error::Overflow {
            during: "summing consumed amounts".to_string(),
        })?;
        if c.locktime > chain_time {
            let locked_total = locked_in_by_asset.entry(c.asset_id).or_insert(0);
            *locked_total = locked_total.checked_add(c.amount).ok_or_else(|| Error::Overflow {
                during: "summing locked consumed amounts".to_string(),
            })?;
        }
    }

    let mut out_by_asset: HashMap<Id, u64> = HashMap::new();
    let mut locked_out_by_asset: HashMap<Id, u64> = HashMap::new();
    for p in produced {
        let total = out_by_asset.entry(p.asset_id).or_insert(0);
        *total = total.checked_add(p.amount).ok_or_else(|| Error::Overflow {
            during: "summing produced amounts".to_string(),
        })?;
        if p.locktime > chain_time {
            let locked_total = locked_out_by_asset.entry(p.asset_id).or_insert(0);
            *locked_total = locked_total.checked_add(p.amount).ok_or_else(|| Error::Overflow {
                during: "summing locked produced amounts".to_string(),
            })?;
        }
    }
    *out_by_asset.entry(*staking_asset_id).or_insert(0) = out_by_asset
        .get(staking_asset_id)
        .copied()
        .unwrap_or(0)
        .checked_add(required_fee)
        .ok_or_else(|| Error::Overflow {
            during: "adding required fee to produced amount".to_string(),
        })?;

    for (asset_id, out_amount) in &out_by_asset {
        let in_amount = in_by_asset.get(asset_id).copied().unwrap_or(0);
        if in_amount < *out_amount {
            return Err(Error::InsufficientFunds {
                asset_id: format!("{:?}", asset_id),
                inputs: in_amount,
                outputs: *out_amount,
            });
        }
    }

    for (asset_id, locked_out) in &locked_out_by_asset {
        let locked_in = locked_in_by_asset.get(asset_id).copied().unwrap_or(0);
        if locked_in < *locked_out {
            return Err(Error::InsufficientLockedFunds {
                asset_id: format!("{:?}", asset_id),
                locked_in,
                locked_out: *locked_out,
            });
        }
    }

    Ok(FlowResult {
        fee_paid: required_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalanche_types::key::secp256k1::txs::transfer;

    fn utxo(asset_id: Id, amount: u64) -> Utxo {
        Utxo {
            utxo_id: UtxoId::default(),
            asset_id,
            transfer_output: Some(transfer::Output {
                amount,
                output_owners: Default::default(),
            }),
            stakeable_lock_out: None,
        }
    }

    fn locked_utxo(asset_id: Id, amount: u64, locktime: u64) -> Utxo {
        Utxo {
            utxo_id: UtxoId::default(),
            asset_id,
            transfer_output: None,
            stakeable_lock_out: Some(avalanche_types::platformvm::txs::StakeableLockOut {
                locktime,
                transfer_output: transfer::Output {
                    amount,
                    output_owners: Default::default(),
                },
            }),
        }
    }

    struct FixedLookup(HashMap<Id, Utxo>);

    impl UtxoLookup for FixedLookup {
        fn get_utxo(&self, utxo_id: &UtxoId) -> Option<Utxo> {
            self.0.get(&utxo_id.tx_id).cloned()
        }
    }

    #[test]
    fn balances_when_inputs_cover_outputs_and_fee() {
        let asset = Id::from_slice(&[7u8; 32]);
        let consumed = vec![Consumed {
            utxo_id: UtxoId::default(),
            asset_id: asset,
            amount: 1_000,
            locktime: 0,
        }];
        let produced = vec![Produced {
            asset_id: asset,
            amount: 900,
            locktime: 0,
        }];
        let result = verify_spend(&consumed, &produced, &asset, 100, 0).unwrap();
        assert_eq!(result.fee_paid, 100);
    }

    #[test]
    fn rejects_when_inputs_fall_short() {
        let asset = Id::from_slice(&[7u8; 32]);
        let consumed = vec![Consumed {
            utxo_id: UtxoId::default(),
            asset_id: asset,
            amount: 500,
            locktime: 0,
        }];
        let produced = vec![Produced {
            asset_id: asset,
            amount: 900,
            locktime: 0,
        }];
        let err = verify_spend(&consumed, &produced, &asset, 100, 0).unwrap_err();
        assert!(matches!(err, Error::InsufficientFunds { .. }));
    }

    #[test]
    fn rejects_spending_a_still_locked_utxo_as_unlocked() {
        // A staked/locked input (locktime 1_000, chain time 500: still
        // locked) may not fund an unlocked output.
        let asset = Id::from_slice(&[7u8; 32]);
        let consumed = vec![Consumed {
            utxo_id: UtxoId::default(),
            asset_id: asset,
            amount: 1_000,
            locktime: 1_000,
        }];
        let produced = vec![Produced {
            asset_id: asset,
            amount: 1_000,
            locktime: 0,
        }];
        let err = verify_spend(&consumed, &produced, &asset, 0, 500).unwrap_err();
        assert!(matches!(err, Error::InsufficientLockedFunds { .. }));
    }

    #[test]
    fn allows_spending_an_expired_locked_utxo_as_unlocked() {
        // Same shapes, but chain time has passed the input's locktime: it
        // has settled into the unlocked bucket, so no locked output is owed.
        let asset = Id::from_slice(&[7u8; 32]);
        let consumed = vec![Consumed {
            utxo_id: UtxoId::default(),
            asset_id: asset,
            amount: 1_000,
            locktime: 1_000,
        }];
        let produced = vec![Produced {
            asset_id: asset,
            amount: 1_000,
            locktime: 0,
        }];
        let result = verify_spend(&consumed, &produced, &asset, 0, 1_000).unwrap();
        assert_eq!(result.fee_paid, 0);
    }

    #[test]
    fn allows_re_locking_with_an_equal_or_later_locktime() {
        let asset = Id::from_slice(&[7u8; 32]);
        let consumed = vec![Consumed {
            utxo_id: UtxoId::default(),
            asset_id: asset,
            amount: 1_000,
            locktime: 1_000,
        }];
        let produced = vec![Produced {
            asset_id: asset,
            amount: 1_000,
            locktime: 2_000,
        }];
        let result = verify_spend(&consumed, &produced, &asset, 0, 500).unwrap();
        assert_eq!(result.fee_paid, 0);
    }

    #[test]
    fn resolve_consumed_fails_on_missing_utxo() {
        let lookup = FixedLookup(HashMap::new());
        let err = resolve_consumed(&lookup, &[UtxoId::default()]).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn resolve_consumed_reads_amount_from_transfer_output() {
        let asset = Id::from_slice(&[3u8; 32]);
        let mut map = HashMap::new();
        let utxo_id = UtxoId::new(&[1u8; 32], 0, false).unwrap();
        map.insert(utxo_id.tx_id, utxo(asset, 42));
        let lookup = FixedLookup(map);
        let resolved = resolve_consumed(&lookup, &[utxo_id]).unwrap();
        assert_eq!(resolved[0].amount, 42);
        assert_eq!(resolved[0].asset_id, asset);
        assert_eq!(resolved[0].locktime, 0);
    }

    #[test]
    fn resolve_consumed_reads_locktime_from_stakeable_lock_out() {
        let asset = Id::from_slice(&[3u8; 32]);
        let mut map = HashMap::new();
        let utxo_id = UtxoId::new(&[1u8; 32], 0, false).unwrap();
        map.insert(utxo_id.tx_id, locked_utxo(asset, 42, 12_345));
        let lookup = FixedLookup(map);
        let resolved = resolve_consumed(&lookup, &[utxo_id]).unwrap();
        assert_eq!(resolved[0].amount, 42);
        assert_eq!(resolved[0].locktime, 12_345);
    }
}
