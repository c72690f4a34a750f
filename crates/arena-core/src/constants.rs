//! Engine-wide constants. Tunable values live in `config`; these are the
//! fixed bounds and the reference defaults the config falls back to.

/// Inclusive CVSS range.
pub const CVSS_MIN: f64 = 0.0;
pub const CVSS_MAX: f64 = 10.0;

/// Strategy weight bounds.
pub const MIN_WEIGHT: f64 = 0.1;
pub const MAX_WEIGHT: f64 = 2.0;

/// Reference learning parameters.
pub const LEARNING_RATE: f64 = 0.15;
pub const EXPLORATION_RATE: f64 = 0.1;
pub const EXPLORATION_MAGNITUDE: f64 = 0.1;
pub const BASELINE_WINDOW: usize = 5;

/// Score assigned to a false positive, with no bonuses.
pub const FALSE_POSITIVE_PENALTY: f64 = -20.0;

/// Trend classification slope threshold (points per round).
pub const TREND_SLOPE_THRESHOLD: f64 = 5.0;
