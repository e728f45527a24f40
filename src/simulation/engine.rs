//! Single-race tick simulator.
//!
//! Advances six lanes tick-by-tick against a shared bit-generator stream.
//! Lane order and per-lane draw order are fixed (lane 0..5, base-step draw
//! then conditional rounding draw), so a race is a bit-exact function of
//! (seed, scores).

use crate::constants::{
    BASE_STEP_MAX, BASIS_POINTS, MAX_TICKS, NUM_LANES, OVERSHOOT, TIME_PRECISION, TRACK_LENGTH,
    UNFINISHED,
};
use crate::race_mechanics::speed_bias;
use crate::rng::Xorshift128;

/// Result of one simulated race.
///
/// `finish_times[i]` is `tick * TIME_PRECISION + fraction-of-tick` for the
/// tick in which lane `i` first crossed [`TRACK_LENGTH`], or [`UNFINISHED`]
/// if the lane never crossed within [`MAX_TICKS`]. Lower finishes earlier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceOutcome {
    pub finish_times: [u64; NUM_LANES],
    pub distances: [u32; NUM_LANES],
}

/// Run one race to completion.
///
/// Per lane per tick: draw a base step uniform in [1, 10], scale by the
/// lane's bias with probabilistic rounding (the rounding draw is skipped
/// when the fractional remainder is zero — stream-consumption contract),
/// and advance at least one unit. The loop ends early once every lane has
/// overshot the line by [`OVERSHOOT`].
pub fn simulate_race(seed: u32, scores: &[u32; NUM_LANES]) -> RaceOutcome {
    let mut rng = Xorshift128::new(seed);

    let mut biases = [0u32; NUM_LANES];
    for (bias, &score) in biases.iter_mut().zip(scores.iter()) {
        *bias = speed_bias(score);
    }

    let mut distances = [0u32; NUM_LANES];
    let mut finish_times = [UNFINISHED; NUM_LANES];
    let goal = TRACK_LENGTH + OVERSHOOT;

    for tick in 0..MAX_TICKS {
        if distances.iter().all(|&d| d >= goal) {
            break;
        }

        for lane in 0..NUM_LANES {
            let base = rng.roll(BASE_STEP_MAX) + 1;
            let raw = base * biases[lane];
            let mut step = raw / BASIS_POINTS;
            let rem = raw % BASIS_POINTS;
            // Second draw only when a fractional remainder exists; expected
            // step then matches the exact fractional bias.
            if rem > 0 && rng.roll(BASIS_POINTS) < rem {
                step += 1;
            }
            if step == 0 {
                step = 1;
            }

            let prior = distances[lane];
            distances[lane] = prior + step;

            if prior < TRACK_LENGTH && distances[lane] >= TRACK_LENGTH {
                // Linear interpolation within the tick: how much of the step
                // was needed to reach the line.
                finish_times[lane] = tick as u64 * TIME_PRECISION
                    + (TRACK_LENGTH - prior) as u64 * TIME_PRECISION / step as u64;
            }
        }
    }

    RaceOutcome {
        finish_times,
        distances,
    }
}
