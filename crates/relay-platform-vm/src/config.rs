//! Relay VM configuration: calendar cutovers, reward schedule, fee schedule.
//!
//! Grounded on `avalanche_types::avalanchego::config::Config`'s shape: a flat
//! serde struct with `#[serde(default)]` fields, constructed once at VM
//! bootstrap and threaded through as an explicit value rather than read from
//! global/lazy_static state (design note "Global mutable state").
use avalanche_types::ids::Id;
use serde::{Deserialize, Serialize};

/// The reserved supernet ID for the primary network (well-known, all-zero).
pub fn primary_network_id() -> Id {
    Id::empty()
}

/// A single calendar anchor `(unix_seconds, reward_rate_per_million)` used to
/// interpolate the primary network's yield curve (spec §4.4).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardAnchor {
    pub time: u64,
    /// Reward rate in parts-per-million (1_000_000 == 100%/year).
    pub rate_ppm: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub network_id: u32,

    /// Calendar cutover enabling timestamped blocks and permissionless
    /// supernet transactions.
    pub banff_time: u64,
    /// Cutover raising creation fees.
    pub apricot_phase_3_time: u64,
    /// Cutover permitting import on chains previously forbidden.
    pub apricot_phase_5_time: u64,

    /// Allowed positive skew, in seconds, between a block's timestamp and
    /// wall-clock time.
    pub sync_bound_seconds: u64,

    /// Piecewise-linear yield curve anchors for the primary network,
    /// ascending by `time`. Must contain at least two points.
    pub reward_calendar: Vec<RewardAnchor>,
    /// Denominator period (seconds) for the duration-bonus term and for a
    /// transformed supernet's reward curve.
    pub minting_period_seconds: u64,
    /// Upper bound, in parts-per-million, on the duration-bonus term.
    pub max_bonus_reward_share_ppm: u64,

    pub min_validator_stake: u64,
    pub max_validator_stake: u64,
    pub min_delegator_stake: u64,
    pub min_stake_duration_seconds: u64,
    pub max_stake_duration_seconds: u64,
    /// Minimum floor, in parts-per-million, for a validator's delegation fee.
    pub min_delegation_fee_ppm: u64,

    /// Minimum gap, in seconds, a staker's start time must be ahead of chain
    /// time at tx acceptance.
    pub min_future_start_time_offset_seconds: u64,

    pub add_primary_network_validator_fee: u64,
    pub add_primary_network_delegator_fee: u64,
    pub create_supernet_tx_fee: u64,
    pub create_supernet_tx_fee_post_apricot_phase_3: u64,
    pub create_chain_tx_fee: u64,
    pub create_chain_tx_fee_post_apricot_phase_3: u64,
    pub tx_fee: u64,

    pub staking_asset_id: Id,
}

impl Config {
    pub fn is_banff(&self, chain_time: u64) -> bool {
        chain_time >= self.banff_time
    }

    pub fn is_apricot_phase_3(&self, chain_time: u64) -> bool {
        chain_time >= self.apricot_phase_3_time
    }

    pub fn is_apricot_phase_5(&self, chain_time: u64) -> bool {
        chain_time >= self.apricot_phase_5_time
    }

    pub fn create_supernet_tx_fee(&self, chain_time: u64) -> u64 {
        if self.is_apricot_phase_3(chain_time) {
            self.create_supernet_tx_fee_post_apricot_phase_3
        } else {
            self.create_supernet_tx_fee
        }
    }

    pub fn create_chain_tx_fee(&self, chain_time: u64) -> u64 {
        if self.is_apricot_phase_3(chain_time) {
            self.create_chain_tx_fee_post_apricot_phase_3
        } else {
            self.create_chain_tx_fee
        }
    }
}

impl Default for Config {
    /// Mirrors mainnet-ish constants from the primary network's historical
    /// reward calendar; a real deployment overrides these from its own
    /// genesis/flags the way `avalanchego::config::Config` does.
    fn default() -> Self {
        Self {
            network_id: 1,
            banff_time: 1_668_648_000,
            apricot_phase_3_time: 1_607_014_800,
            apricot_phase_5_time: 1_612_378_800,
            sync_bound_seconds: 10,
            reward_calendar: vec![
                RewardAnchor {
                    time: 1_607_626_800,
                    rate_ppm: 120_000,
                },
                RewardAnchor {
                    time: 1_639_162_800,
                    rate_ppm: 100_000,
                },
                RewardAnchor {
                    time: 1_670_698_800,
                    rate_ppm: 80_000,
                },
                RewardAnchor {
                    time: 1_702_234_800,
                    rate_ppm: 70_000,
                },
            ],
            minting_period_seconds: 365 * 24 * 60 * 60,
            max_bonus_reward_share_ppm: 20_000,
            min_validator_stake: 2_000 * avalanche_types::units::AVAX,
            max_validator_stake: 3_000_000 * avalanche_types::units::AVAX,
            min_delegator_stake: 25 * avalanche_types::units::AVAX,
            min_stake_duration_seconds: 2 * 7 * 24 * 60 * 60,
            max_stake_duration_seconds: 365 * 24 * 60 * 60,
            min_delegation_fee_ppm: 20_000,
            min_future_start_time_offset_seconds: 5,
            add_primary_network_validator_fee: 0,
            add_primary_network_delegator_fee: 0,
            create_supernet_tx_fee: 100 * avalanche_types::units::MILLI_AVAX,
            create_supernet_tx_fee_post_apricot_phase_3: avalanche_types::units::AVAX,
            create_chain_tx_fee: 100 * avalanche_types::units::MILLI_AVAX,
            create_chain_tx_fee_post_apricot_phase_3: avalanche_types::units::AVAX,
            tx_fee: avalanche_types::units::MILLI_AVAX,
            staking_asset_id: Id::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_schedule_switches_on_apricot_phase_3() {
        let cfg = Config::default();
        assert_eq!(
            cfg.create_supernet_tx_fee(cfg.apricot_phase_3_time - 1),
            cfg.create_supernet_tx_fee
        );
        assert_eq!(
            cfg.create_supernet_tx_fee(cfg.apricot_phase_3_time),
            cfg.create_supernet_tx_fee_post_apricot_phase_3
        );
    }

    #[test]
    fn banff_cutover() {
        let cfg = Config::default();
        assert!(!cfg.is_banff(cfg.banff_time - 1));
        assert!(cfg.is_banff(cfg.banff_time));
    }
}
