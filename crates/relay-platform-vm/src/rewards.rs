//! Component D: the reward calculator.
//!
//! A staker's potential reward is `weight * duration * rate`, where `rate`
//! comes from a piecewise-linear calendar yield curve (primary network) or a
//! single fixed rate fixed at transformation time (a transformed supernet),
//! plus a duration bonus capped at `max_bonus_reward_share_ppm`. Grounded on
//! `config::Config::reward_calendar`/`RewardAnchor` for the curve shape and
//! on `avalanche_types::units` for the fixed-point arithmetic scale the
//! teacher's fee/stake constants already use (parts-per-million, seconds).
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::subnet::Transformation;

const PPM: u128 = 1_000_000;

fn checked_mul_div(a: u128, b: u128, d: u128, during: &str) -> Result<u64> {
    let product = a.checked_mul(b).ok_or_else(|| Error::Overflow {
        during: during.to_string(),
    })?;
    let result = product / d.max(1);
    u64::try_from(result).map_err(|_| Error::Overflow {
        during: during.to_string(),
    })
}

/// Interpolates the primary network's calendar yield curve at `time`,
/// clamping to the first/last anchor outside its range.
fn calendar_rate_ppm(config: &Config, time: u64) -> u64 {
    let anchors = &config.reward_calendar;
    if anchors.is_empty() {
        return 0;
    }
    if time <= anchors[0].time {
        return anchors[0].rate_ppm;
    }
    let last = anchors.len() - 1;
    if time >= anchors[last].time {
        return anchors[last].rate_ppm;
    }
    for window in anchors.windows(2) {
        let (a, b) = (window[0], window[1]);
        if time >= a.time && time <= b.time {
            if b.time == a.time {
                return a.rate_ppm;
            }
            let span = (b.time - a.time) as u128;
            let elapsed = (time - a.time) as u128;
            let rate_span = b.rate_ppm as i128 - a.rate_ppm as i128;
            let delta = rate_span * elapsed as i128 / span as i128;
            return (a.rate_ppm as i128 + delta) as u64;
        }
    }
    anchors[last].rate_ppm
}

/// The duration bonus: linear in how close `duration` gets to
/// `max_stake_duration_seconds`, capped at `max_bonus_reward_share_ppm`.
fn duration_bonus_ppm(config: &Config, duration_seconds: u64) -> u64 {
    if config.max_stake_duration_seconds == 0 {
        return 0;
    }
    let capped = duration_seconds.min(config.max_stake_duration_seconds);
    let bonus = (capped as u128 * config.max_bonus_reward_share_ppm as u128)
        / config.max_stake_duration_seconds as u128;
    bonus.min(config.max_bonus_reward_share_ppm as u128) as u64
}

/// Computes the reward a staker earns by completing its full term,
/// `weight * duration_seconds / minting_period_seconds * (rate + bonus)`.
pub fn primary_network_reward(config: &Config, weight: u64, start: u64, end: u64) -> Result<u64> {
    if end <= start {
        return Ok(0);
    }
    let duration = end - start;
    let rate = calendar_rate_ppm(config, start) as u128;
    let bonus = duration_bonus_ppm(config, duration) as u128;
    let combined_rate = rate + bonus;

    let per_second = checked_mul_div(
        weight as u128,
        combined_rate,
        PPM,
        "computing per-second reward rate",
    )? as u128;
    checked_mul_div(
        per_second,
        duration as u128,
        config.minting_period_seconds.max(1) as u128,
        "scaling reward by duration",
    )
}

/// Same shape, but for a staker of a transformed supernet: the rate is the
/// fixed point fixed forever at transformation, with the same duration
/// bonus policy.
pub fn supernet_reward(
    config: &Config,
    transformation: &Transformation,
    weight: u64,
    start: u64,
    end: u64,
) -> Result<u64> {
    if end <= start {
        return Ok(0);
    }
    let duration = end - start;
    // A transformed supernet fixes its own uptime/reward requirement, but
    // reuses the primary network's duration-bonus curve shape (spec.md does
    // not carve out a distinct one).
    let bonus = duration_bonus_ppm(config, duration) as u128;
    let rate = transformation.reward_share_ppm as u128 + bonus;
    let per_second = checked_mul_div(weight as u128, rate, PPM, "computing supernet reward rate")?;
    checked_mul_div(
        per_second as u128,
        duration as u128,
        config.minting_period_seconds.max(1) as u128,
        "scaling supernet reward by duration",
    )
}

/// Mints `shortfall` -- the part of a paid reward the rewards-pool supply
/// couldn't cover -- fresh into `current_supply` (Open Question decision:
/// the payout itself is never clipped to make room; supply simply grows to
/// cover it). The one place this does saturate is the supernet's own
/// `maximum_supply` ceiling, per the calculator's "overflow saturates at the
/// remaining mintable supply" rule; the primary network passes `None` and is
/// unbounded.
pub fn mint_shortfall(current_supply: u64, shortfall: u64, maximum_supply: Option<u64>) -> Result<u64> {
    let new_supply = current_supply.checked_add(shortfall).ok_or_else(|| Error::Overflow {
        during: "minting reward shortfall into current supply".to_string(),
    })?;
    if let Some(max) = maximum_supply {
        if new_supply > max {
            return Ok(max);
        }
    }
    Ok(new_supply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewardAnchor;

    fn config_with_flat_curve(rate_ppm: u64) -> Config {
        let mut c = Config::default();
        c.reward_calendar = vec![
            RewardAnchor {
                time: 0,
                rate_ppm,
            },
            RewardAnchor {
                time: 1_000_000,
                rate_ppm,
            },
        ];
        c.max_bonus_reward_share_ppm = 0;
        c.minting_period_seconds = 365 * 24 * 60 * 60;
        c
    }

    #[test]
    fn flat_curve_scales_linearly_with_duration() {
        let config = config_with_flat_curve(100_000); // 10%/year
        let one_year = config.minting_period_seconds;
        let reward = primary_network_reward(&config, 1_000_000, 0, one_year).unwrap();
        assert_eq!(reward, 100_000); // 10% of 1,000,000 over a full year
    }

    #[test]
    fn zero_duration_is_zero_reward() {
        let config = config_with_flat_curve(100_000);
        assert_eq!(primary_network_reward(&config, 1_000_000, 100, 100).unwrap(), 0);
    }

    #[test]
    fn duration_bonus_caps_at_configured_share() {
        let mut config = config_with_flat_curve(0);
        config.max_bonus_reward_share_ppm = 20_000;
        config.max_stake_duration_seconds = 1_000;
        let bonus_at_max = duration_bonus_ppm(&config, 2_000);
        assert_eq!(bonus_at_max, 20_000);
        let bonus_at_half = duration_bonus_ppm(&config, 500);
        assert_eq!(bonus_at_half, 10_000);
    }

    #[test]
    fn interpolates_between_anchors() {
        let mut config = Config::default();
        config.reward_calendar = vec![
            RewardAnchor {
                time: 0,
                rate_ppm: 100_000,
            },
            RewardAnchor {
                time: 100,
                rate_ppm: 200_000,
            },
        ];
        assert_eq!(calendar_rate_ppm(&config, 50), 150_000);
        assert_eq!(calendar_rate_ppm(&config, 0), 100_000);
        assert_eq!(calendar_rate_ppm(&config, 100), 200_000);
        assert_eq!(calendar_rate_ppm(&config, 1_000), 200_000);
    }

    #[test]
    fn shortfall_mints_into_supply_but_clamps_to_maximum() {
        assert_eq!(mint_shortfall(1_000, 500, None).unwrap(), 1_500);
        assert_eq!(mint_shortfall(1_000, 500, Some(1_200)).unwrap(), 1_200);
    }
}
