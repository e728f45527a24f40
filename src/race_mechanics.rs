//! Score clamping and the score-to-bias mapping.

use crate::constants::{BIAS_FLOOR, BIAS_SPAN, MAX_SCORE, MIN_SCORE};

/// Clamp a raw input score into the valid [1, 10] domain.
/// Malformed values are coerced, never rejected.
#[inline(always)]
pub fn clamp_score(score: i32) -> u32 {
    score.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u32
}

/// Multiplicative speed bias for a clamped score, in basis points.
///
/// Linear in score with integer floor: 9585 bps at score 1, 10000 bps at
/// score 10. Callers clamp upstream; this function has no error path.
#[inline(always)]
pub fn speed_bias(score: u32) -> u32 {
    debug_assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
    BIAS_FLOOR + (score - 1) * BIAS_SPAN / (MAX_SCORE - 1)
}
