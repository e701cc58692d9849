//! Component F: the pure time-advance engine.
//!
//! `advance_time_to` walks the pending and current staker sets the way
//! `platformvm.state.diff.ApplyValidatorWeightDiffs`'s cousin (the advance
//! logic actually gating block building) does, but expressed as a pure
//! function from a `Chain` snapshot to a `StateChanges` description --
//! spec.md's own "description" framing for this component -- so that
//! computing the next block's would-be mutation and actually staging it
//! onto a `Diff` are separate steps (the latter is the tx executor's job
//! when it handles `AdvanceTimeTx`/empty Banff blocks).
use avalanche_types::ids::Id;

use crate::errors::{Error, Result};
use crate::rewards;
use crate::stakers::{Priority, Staker};
use crate::state::Chain;
use crate::subnet::Transformation;

/// One pending staker promoted to current, carrying the reward it will earn
/// if it completes its term (computed now, against the proposed new chain
/// time, per spec.md §4.5).
#[derive(Debug, Clone)]
pub struct Promotion {
    pub staker: Staker,
    pub potential_reward: u64,
}

/// The pure description of what advancing chain time to `new_chain_time`
/// does: stakers promoted out of pending, stakers removed out of current,
/// and the resulting per-supernet supply changes those promotions cause.
#[derive(Debug, Clone, Default)]
pub struct StateChanges {
    pub promotions: Vec<Promotion>,
    pub removed_current: Vec<Staker>,
    /// `(supernet_id, new_current_supply)` for every supernet whose current
    /// supply grew because a promotion's reward exceeded that supernet's
    /// rewards-pool supply (spec.md §4.4's shortfall-minting tie-break).
    pub supply_updates: Vec<(Id, u64)>,
    /// `(supernet_id, new_rewards_pool_supply)` for every supernet a
    /// promotion drew a reward from: debited by the reward paid, bottoming
    /// out at zero rather than going negative.
    pub rewards_pool_updates: Vec<(Id, u64)>,
}

/// A staker's potential reward is a pure function of its own weight and
/// term (§4.4); what the proposed new chain time actually governs is which
/// supply snapshot the shortfall-minting check below runs against.
fn reward_for(config: &crate::config::Config, state: &dyn Chain, staker: &Staker) -> Result<u64> {
    let is_primary = staker.supernet_id == crate::config::primary_network_id();
    if is_primary {
        rewards::primary_network_reward(config, staker.weight, staker.start_time, staker.end_time)
    } else {
        let transformation: Transformation =
            state.get_transformation(&staker.supernet_id).ok_or_else(|| Error::NotFound {
                supernet_id: format!("{:?}", staker.supernet_id),
            })?;
        rewards::supernet_reward(config, &transformation, staker.weight, staker.start_time, staker.end_time)
    }
}

/// Describes, without mutating `state`, every staker transition that
/// advancing chain time to `new_chain_time` performs. Callers (the tx
/// executor, or the empty-block builder) validate `new_chain_time` against
/// the §4.5 bounds (next staker change time, `now + SyncBound`) before
/// calling this, and are responsible for staging the returned
/// `StateChanges` onto a `Diff` plus bumping the diff's timestamp.
pub fn advance_time_to(
    config: &crate::config::Config,
    state: &dyn Chain,
    new_chain_time: u64,
) -> Result<StateChanges> {
    let mut changes = StateChanges::default();

    for staker in state.pending_stakers() {
        if staker.start_time > new_chain_time {
            break; // stakers iterate in ascending next_time order
        }
        if staker.priority == Priority::SupernetPermissionedValidatorPending {
            // Permissioned supernet validators are promoted without a
            // reward: the supernet isn't elastic, there's no supply to pay
            // one from.
            let mut promoted = staker.clone();
            promoted.priority = Priority::SupernetPermissionedValidatorCurrent;
            promoted.next_time = promoted.end_time;
            changes.promotions.push(Promotion {
                staker: promoted,
                potential_reward: 0,
            });
            continue;
        }

        let reward = reward_for(config, state, &staker)?;

        // spec.md §4.4's tie-break: pay the reward out of the rewards pool
        // first; whatever exceeds it is minted fresh into current supply,
        // and the pool bottoms out at zero rather than underflowing.
        let current_pool = state.rewards_pool_supply(&staker.supernet_id);
        let (shortfall, new_pool) = if reward <= current_pool {
            (0, current_pool - reward)
        } else {
            (reward - current_pool, 0)
        };
        changes.rewards_pool_updates.push((staker.supernet_id, new_pool));
        if shortfall > 0 {
            let current_supply = state.supply(&staker.supernet_id);
            let maximum_supply = state
                .get_transformation(&staker.supernet_id)
                .map(|t| t.maximum_supply);
            let new_supply = rewards::mint_shortfall(current_supply, shortfall, maximum_supply)?;
            changes.supply_updates.push((staker.supernet_id, new_supply));
        }

        let mut promoted = staker.clone();
        promoted.priority = promoted_priority(staker.priority);
        promoted.next_time = promoted.end_time;
        changes.promotions.push(Promotion {
            staker: promoted,
            potential_reward: reward,
        });
    }

    for staker in state.current_stakers() {
        if staker.end_time > new_chain_time {
            break;
        }
        if staker.priority == Priority::SupernetPermissionedValidatorCurrent {
            changes.removed_current.push(staker);
            continue;
        }
        // Permissionless stakers (and primary-network stakers) are removed
        // only via an explicit RewardValidatorTx, never by a bare
        // time-advance (spec.md §4.2's removal-order note); stop at the
        // first staker this advance cannot remove on its own.
        break;
    }

    Ok(changes)
}

fn promoted_priority(pending: Priority) -> Priority {
    match pending {
        Priority::PrimaryNetworkApricotDelegatorPending => Priority::PrimaryNetworkDelegatorCurrent,
        Priority::PrimaryNetworkValidatorPending => Priority::PrimaryNetworkValidatorCurrent,
        Priority::PrimaryNetworkBanffDelegatorPending => Priority::PrimaryNetworkDelegatorCurrent,
        Priority::SupernetPermissionlessValidatorPending => Priority::SupernetPermissionlessValidatorCurrent,
        Priority::SupernetPermissionlessDelegatorPending => Priority::SupernetPermissionlessDelegatorCurrent,
        Priority::SupernetPermissionedValidatorPending => Priority::SupernetPermissionedValidatorCurrent,
        already_current => already_current,
    }
}

/// The earliest `next_time` across both sets: the latest instant chain time
/// may validly advance to without skipping a transition (spec.md §4.5).
pub fn next_staker_change_time(state: &dyn Chain) -> Option<u64> {
    let pending = state.pending_stakers().into_iter().map(|s| s.next_time).min();
    let current = state.current_stakers().into_iter().map(|s| s.next_time).min();
    match (pending, current) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Validates a proposed new chain time against spec.md §4.5's bounds: it
/// must not exceed the next staker change time, and must not exceed
/// `now + sync_bound_seconds`.
pub fn validate_new_chain_time(
    config: &crate::config::Config,
    state: &dyn Chain,
    new_chain_time: u64,
    now: u64,
) -> Result<()> {
    if let Some(next_change) = next_staker_change_time(state) {
        if new_chain_time > next_change {
            return Err(Error::TimestampOutOfRange {
                proposed: new_chain_time,
                bound: next_change,
            });
        }
    }
    let bound = now + config.sync_bound_seconds;
    if new_chain_time > bound {
        return Err(Error::TimestampOutOfRange {
            proposed: new_chain_time,
            bound,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avalanche_types::ids::node;
    use crate::config::{primary_network_id, Config, RewardAnchor};
    use crate::database::MemoryDatabase;
    use crate::state::State;

    fn staker(tx_id: u8, supernet_id: Id, priority: Priority, start: u64, end: u64) -> Staker {
        Staker {
            tx_id: Id::from_slice(&[tx_id; 32]),
            node_id: node::Id::empty(),
            supernet_id,
            weight: 1_000,
            start_time: start,
            end_time: end,
            next_time: if priority.is_pending() { start } else { end },
            priority,
            potential_reward: 0,
            delegation_fee_ppm: 20_000,
            bls_public_key: None,
        }
    }

    #[test]
    fn empty_state_has_no_transitions() {
        let state = State::new(Box::new(MemoryDatabase::new()));
        let config = Config::default();
        let changes = advance_time_to(&config, &state, 0).unwrap();
        assert!(changes.promotions.is_empty());
        assert!(changes.removed_current.is_empty());
    }

    #[test]
    fn promotes_permissioned_pending_validator_without_a_reward() {
        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        let supernet_id = Id::from_slice(&[6u8; 32]);
        diff.add_pending_staker(staker(
            1,
            supernet_id,
            Priority::SupernetPermissionedValidatorPending,
            0,
            100,
        ));
        let config = Config::default();
        let changes = advance_time_to(&config, &diff, 0).unwrap();
        assert_eq!(changes.promotions.len(), 1);
        assert_eq!(changes.promotions[0].potential_reward, 0);
        assert_eq!(
            changes.promotions[0].staker.priority,
            Priority::SupernetPermissionedValidatorCurrent
        );
    }

    #[test]
    fn permissioned_supernet_validator_current_set_is_removed_by_time_advance() {
        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        let supernet_id = Id::from_slice(&[5u8; 32]);
        diff.add_current_staker(staker(
            1,
            supernet_id,
            Priority::SupernetPermissionedValidatorCurrent,
            0,
            50,
        ))
        .unwrap();

        let config = Config::default();
        let changes = advance_time_to(&config, &diff, 100).unwrap();
        assert_eq!(changes.removed_current.len(), 1);
        assert_eq!(changes.removed_current[0].supernet_id, supernet_id);
    }

    #[test]
    fn permissionless_current_staker_survives_time_advance_alone() {
        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        diff.add_current_staker(staker(
            1,
            primary_network_id(),
            Priority::PrimaryNetworkValidatorCurrent,
            0,
            50,
        ))
        .unwrap();
        let config = Config::default();
        let changes = advance_time_to(&config, &diff, 100).unwrap();
        assert!(changes.removed_current.is_empty());
    }

    #[test]
    fn next_staker_change_time_is_none_for_empty_state() {
        let state = State::new(Box::new(MemoryDatabase::new()));
        assert_eq!(next_staker_change_time(&state), None);
    }

    #[test]
    fn promotion_reward_draws_from_rewards_pool_before_minting() {
        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        let mut config = Config::default();
        config.reward_calendar = vec![
            RewardAnchor { time: 0, rate_ppm: 100_000 },
            RewardAnchor { time: 1_000_000_000, rate_ppm: 100_000 },
        ];
        config.max_bonus_reward_share_ppm = 0;
        diff.set_rewards_pool_supply(primary_network_id(), 1_000_000);
        diff.add_pending_staker(staker(
            1,
            primary_network_id(),
            Priority::PrimaryNetworkValidatorPending,
            0,
            config.minting_period_seconds,
        ));

        let changes = advance_time_to(&config, &diff, 0).unwrap();

        let reward = changes.promotions[0].potential_reward;
        assert!(reward > 0);
        assert!(reward <= 1_000_000, "pool comfortably covers this reward");
        assert_eq!(
            changes.rewards_pool_updates,
            vec![(primary_network_id(), 1_000_000 - reward)]
        );
        assert!(
            changes.supply_updates.is_empty(),
            "reward fully covered by the pool mints nothing fresh"
        );
    }

    #[test]
    fn promotion_reward_exceeding_pool_mints_only_the_shortfall() {
        let base = std::sync::Arc::new(State::new(Box::new(MemoryDatabase::new())));
        let mut diff = crate::diff::Diff::new(Id::empty(), base);
        let mut config = Config::default();
        config.reward_calendar = vec![
            RewardAnchor { time: 0, rate_ppm: 100_000 },
            RewardAnchor { time: 1_000_000_000, rate_ppm: 100_000 },
        ];
        config.max_bonus_reward_share_ppm = 0;
        diff.set_rewards_pool_supply(primary_network_id(), 10);
        diff.add_pending_staker(staker(
            1,
            primary_network_id(),
            Priority::PrimaryNetworkValidatorPending,
            0,
            config.minting_period_seconds,
        ));

        let changes = advance_time_to(&config, &diff, 0).unwrap();

        let reward = changes.promotions[0].potential_reward;
        assert!(reward > 10, "test setup expects a pool shortfall");
        assert_eq!(changes.rewards_pool_updates, vec![(primary_network_id(), 0)]);
        assert_eq!(changes.supply_updates, vec![(primary_network_id(), reward - 10)]);
    }

    #[test]
    fn validate_new_chain_time_rejects_beyond_sync_bound() {
        let state = State::new(Box::new(MemoryDatabase::new()));
        let config = Config::default();
        let now = 1_000;
        let err = validate_new_chain_time(&config, &state, now + config.sync_bound_seconds + 1, now)
            .unwrap_err();
        assert!(matches!(err, Error::TimestampOutOfRange { .. }));
    }
}
