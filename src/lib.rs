//! # Furlong — Monte Carlo win/place/show estimator
//!
//! Estimates, by repeated random simulation, the probability that each of
//! six competitors finishes 1st (win), in the top two (place), or in the top
//! three (show). Output is basis points (0-10000) per lane; converting
//! probabilities into payout odds (house edge, multipliers) is the caller's
//! concern — this crate is a pure statistical estimator.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | 1 | [`rng`] | xorshift128 bit generator + splitmix-style seed sequencer |
//! | 2 | [`race_mechanics`] | score clamping, score-to-bias mapping (bps) |
//! | 3 | [`simulation::engine`] | tick loop with probabilistic step rounding and sub-tick finish times |
//! | 4 | [`simulation::finish_order`] | dead-heat band resolution |
//! | 5 | [`simulation::credits`] | slot-cascade credit splitting (1/2/3 slots) |
//! | 6 | [`estimator`] | N-sample driver, basis-point conversion |
//!
//! ## Determinism
//!
//! Everything downstream of the master seed is a bit-exact function of
//! (scores, samples, salt): 32-bit wrapping arithmetic in the generators, a
//! fixed lane order in the tick loop, and conditional consumption of the
//! rounding draw. [`estimate`] run twice with the same arguments returns
//! identical arrays; [`estimate_parallel`] matches it bit-for-bit because
//! seeds are derived sequentially up front and per-sample credits fold back
//! in sample order.

#![allow(clippy::needless_range_loop)]

pub mod constants;
pub mod estimator;
pub mod race_mechanics;
pub mod rng;
pub mod simulation;

pub use estimator::{estimate, estimate_parallel, Estimate, EstimateError};
