//! Race geometry and fixed-point constants.
//!
//! All randomness-facing arithmetic is 32-bit unsigned with wrapping
//! semantics; the constants here are the shared scale factors that keep the
//! simulation bit-exact across platforms.

/// Number of competitor lanes per race.
pub const NUM_LANES: usize = 6;

/// Valid score domain. Out-of-range inputs are clamped, never rejected.
pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 10;

/// Speed bias at score 1, in basis points (0.9585x).
pub const BIAS_FLOOR: u32 = 9585;

/// Total bias span from score 1 to score 10 (9585 -> 10000 bps).
pub const BIAS_SPAN: u32 = 415;

/// Basis-point scale: 10000 = 1.0x. Also the denominator for the
/// probabilistic-rounding draw in the tick loop.
pub const BASIS_POINTS: u32 = 10_000;

/// Distance a lane must reach to finish.
pub const TRACK_LENGTH: u32 = 1000;

/// Extra distance past the line before a lane stops consuming ticks.
/// The tick loop only terminates early once every lane has overshot.
pub const OVERSHOOT: u32 = 10;

/// Hard cap on simulation ticks. A race that exhausts this is still a valid
/// outcome; unfinished lanes rank by distance instead.
pub const MAX_TICKS: usize = 500;

/// Largest base step drawn per lane per tick (uniform in [1, BASE_STEP_MAX]).
pub const BASE_STEP_MAX: u32 = 10;

/// Sub-tick scaling for finish times: finish = tick * TIME_PRECISION +
/// fraction-of-tick needed to reach the line, also scaled by TIME_PRECISION.
pub const TIME_PRECISION: u64 = 10_000;

/// Sentinel finish time for a lane that never crossed the line.
/// Sorts after every real finish time.
pub const UNFINISHED: u64 = u64::MAX;

/// Payout slot counts for the three tiers.
pub const WIN_SLOTS: usize = 1;
pub const PLACE_SLOTS: usize = 2;
pub const SHOW_SLOTS: usize = 3;
