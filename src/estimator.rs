//! Aggregator/driver — runs N simulations and converts accumulated credit
//! into basis-point probabilities.
//!
//! The sequential [`estimate`] is the reference contract. The parallel
//! variant [`estimate_parallel`] derives every per-sample seed up front in
//! sequencer order, fans the independent simulations across rayon, then
//! folds per-sample credits back in sample order — so its output is
//! bit-identical to the sequential driver.

use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::constants::{BASIS_POINTS, NUM_LANES};
use crate::race_mechanics::clamp_score;
use crate::rng::SeedSequence;
use crate::simulation::{resolve, simulate_race, LaneCredits};

/// Malformed-call errors. Out-of-range score values are clamped, never
/// rejected; only array shape and sample count can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EstimateError {
    /// The score slice did not contain exactly six entries.
    WrongScoreCount(usize),
    /// The sample count was zero.
    ZeroSamples,
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::WrongScoreCount(n) => {
                write!(f, "expected exactly {NUM_LANES} scores, got {n}")
            }
            EstimateError::ZeroSamples => write!(f, "sample count must be positive"),
        }
    }
}

impl std::error::Error for EstimateError {}

/// Aggregate estimation result.
///
/// The three basis-point arrays sum to ~10000, ~20000 and ~30000 (each lane
/// rounds independently, so the totals can be off by a few bps). `elapsed`
/// is diagnostic only and not part of the statistical contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub win_bps: [u32; NUM_LANES],
    pub place_bps: [u32; NUM_LANES],
    pub show_bps: [u32; NUM_LANES],
    /// The clamped scores actually simulated.
    pub scores: [u32; NUM_LANES],
    pub samples: u32,
    pub elapsed: Duration,
}

/// Estimate win/place/show probabilities for six lanes.
///
/// `salt` seeds the run; pass `Some` for reproducible output, `None` for a
/// time-derived seed. Fails fast on a malformed call, otherwise runs
/// `samples` full simulations and never errors mid-loop.
pub fn estimate(
    scores: &[i32],
    samples: u32,
    salt: Option<u32>,
) -> Result<Estimate, EstimateError> {
    let clamped = validate(scores, samples)?;
    let start = Instant::now();

    let mut seq = seed_sequence(&clamped, salt);
    let mut credits = LaneCredits::default();
    for _ in 0..samples {
        let outcome = simulate_race(seq.next_seed(), &clamped);
        let order = resolve(&outcome.finish_times, &outcome.distances);
        credits.accumulate(&order);
    }

    Ok(finish(&credits, clamped, samples, start.elapsed()))
}

/// Parallel batch variant of [`estimate`]. Bit-identical output.
///
/// Only whole simulations parallelize: the seed sequencer is consumed
/// sequentially before the fan-out, and per-sample credits merge back in
/// sample order.
pub fn estimate_parallel(
    scores: &[i32],
    samples: u32,
    salt: Option<u32>,
) -> Result<Estimate, EstimateError> {
    let clamped = validate(scores, samples)?;
    let start = Instant::now();

    let mut seq = seed_sequence(&clamped, salt);
    let seeds: Vec<u32> = (0..samples).map(|_| seq.next_seed()).collect();

    let per_sample: Vec<LaneCredits> = seeds
        .into_par_iter()
        .map(|seed| {
            let outcome = simulate_race(seed, &clamped);
            let order = resolve(&outcome.finish_times, &outcome.distances);
            let mut credits = LaneCredits::default();
            credits.accumulate(&order);
            credits
        })
        .collect();

    let mut credits = LaneCredits::default();
    for sample in &per_sample {
        credits.merge(sample);
    }

    Ok(finish(&credits, clamped, samples, start.elapsed()))
}

fn validate(scores: &[i32], samples: u32) -> Result<[u32; NUM_LANES], EstimateError> {
    if scores.len() != NUM_LANES {
        return Err(EstimateError::WrongScoreCount(scores.len()));
    }
    if samples == 0 {
        return Err(EstimateError::ZeroSamples);
    }
    let mut clamped = [0u32; NUM_LANES];
    for (out, &raw) in clamped.iter_mut().zip(scores.iter()) {
        *out = clamp_score(raw);
    }
    Ok(clamped)
}

/// Build the run's seed sequencer: master seed, then the six clamped scores
/// absorbed in lane order.
fn seed_sequence(scores: &[u32; NUM_LANES], salt: Option<u32>) -> SeedSequence {
    let master = salt.unwrap_or_else(time_salt);
    let mut seq = SeedSequence::new(master);
    for &score in scores {
        seq.absorb(score);
    }
    seq
}

/// Time-derived master seed for callers that did not supply a salt.
fn time_salt() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0x5EED_5EED)
}

fn finish(
    credits: &LaneCredits,
    scores: [u32; NUM_LANES],
    samples: u32,
    elapsed: Duration,
) -> Estimate {
    Estimate {
        win_bps: to_basis_points(&credits.win, samples),
        place_bps: to_basis_points(&credits.place, samples),
        show_bps: to_basis_points(&credits.show, samples),
        scores,
        samples,
        elapsed,
    }
}

/// credit / samples, scaled to basis points and rounded to nearest
/// (ties away from zero, per `f64::round`).
fn to_basis_points(credit: &[f64; NUM_LANES], samples: u32) -> [u32; NUM_LANES] {
    let mut bps = [0u32; NUM_LANES];
    for (out, &c) in bps.iter_mut().zip(credit.iter()) {
        *out = (c / samples as f64 * BASIS_POINTS as f64).round() as u32;
    }
    bps
}
