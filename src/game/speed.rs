//! Tick timing: difficulty tiers and the speed percentage that scales them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Slowest accepted speed setting, in percent of the base speed
pub const MIN_SPEED_PERCENT: u16 = 1;
/// Fastest accepted speed setting, in percent of the base speed
pub const MAX_SPEED_PERCENT: u16 = 200;
/// Speed setting a new game starts with
pub const DEFAULT_SPEED_PERCENT: u16 = 100;

/// Difficulty tier, each with a fixed base tick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 150ms per step
    Easy,
    /// 100ms per step
    #[default]
    Medium,
    /// 70ms per step
    Hard,
}

impl Difficulty {
    /// Base tick interval in milliseconds, before the speed multiplier
    pub fn base_interval_ms(&self) -> u64 {
        match self {
            Self::Easy => 150,
            Self::Medium => 100,
            Self::Hard => 70,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamp a requested speed percentage into the accepted range
pub fn clamp_speed_percent(percent: u16) -> u16 {
    percent.clamp(MIN_SPEED_PERCENT, MAX_SPEED_PERCENT)
}

/// Multiplier applied to the base interval for a speed percentage (100% = 1.0)
pub fn speed_multiplier(percent: u16) -> f64 {
    f64::from(clamp_speed_percent(percent)) / 100.0
}

/// Effective tick interval: `round(base / multiplier)` milliseconds
///
/// Larger multipliers shrink the interval. The result is never shorter than
/// one millisecond.
pub fn effective_interval(base_interval_ms: u64, multiplier: f64) -> Duration {
    let millis = (base_interval_ms as f64 / multiplier).round() as u64;
    Duration::from_millis(millis.max(1))
}

/// Effective tick interval for a difficulty at a speed percentage
pub fn tick_interval(difficulty: Difficulty, speed_percent: u16) -> Duration {
    effective_interval(difficulty.base_interval_ms(), speed_multiplier(speed_percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_intervals() {
        assert_eq!(Difficulty::Easy.base_interval_ms(), 150);
        assert_eq!(Difficulty::Medium.base_interval_ms(), 100);
        assert_eq!(Difficulty::Hard.base_interval_ms(), 70);
    }

    #[test]
    fn test_effective_interval_scales_with_multiplier() {
        assert_eq!(effective_interval(100, 2.0), Duration::from_millis(50));
        assert_eq!(effective_interval(100, 0.5), Duration::from_millis(200));
        assert_eq!(effective_interval(100, 1.0), Duration::from_millis(100));
    }

    #[test]
    fn test_effective_interval_rounds() {
        // 150 / 1.3 = 115.38..
        assert_eq!(effective_interval(150, 1.3), Duration::from_millis(115));
        // 70 / 1.5 = 46.66..
        assert_eq!(effective_interval(70, 1.5), Duration::from_millis(47));
        // 150 / 0.4 = 375 exactly
        assert_eq!(effective_interval(150, 0.4), Duration::from_millis(375));
    }

    #[test]
    fn test_tick_interval_from_percent() {
        assert_eq!(tick_interval(Difficulty::Medium, 200), Duration::from_millis(50));
        assert_eq!(tick_interval(Difficulty::Medium, 50), Duration::from_millis(200));
        assert_eq!(tick_interval(Difficulty::Easy, 100), Duration::from_millis(150));
        assert_eq!(tick_interval(Difficulty::Hard, 1), Duration::from_millis(7000));
    }

    #[test]
    fn test_speed_percent_is_clamped() {
        assert_eq!(clamp_speed_percent(0), MIN_SPEED_PERCENT);
        assert_eq!(clamp_speed_percent(500), MAX_SPEED_PERCENT);
        assert_eq!(clamp_speed_percent(120), 120);
        assert_eq!(speed_multiplier(0), 0.01);
    }
}
