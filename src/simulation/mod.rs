//! Race simulation and accounting.
//!
//! - [`engine`]: tick-by-tick single-race simulator
//! - [`finish_order`]: dead-heat band resolver
//! - [`credits`]: win/place/show credit accumulation

pub mod credits;
pub mod engine;
pub mod finish_order;

pub use credits::LaneCredits;
pub use engine::{simulate_race, RaceOutcome};
pub use finish_order::{resolve, Band, FinishOrder};
