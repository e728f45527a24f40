//! Dead-heat credit accumulation.
//!
//! Standard payout-splitting convention: a tie that fits entirely within the
//! available slots pays every tied lane in full; a tie that overflows the
//! remaining slots splits only those slots among the tied lanes. The same
//! cascade runs three times per race with 1 (win), 2 (place) and 3 (show)
//! slots.

use crate::constants::{NUM_LANES, PLACE_SLOTS, SHOW_SLOTS, WIN_SLOTS};
use crate::simulation::finish_order::FinishOrder;

/// Per-lane win/place/show credit, summed across simulations.
/// Monotonically non-decreasing; reset only by constructing a fresh value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaneCredits {
    pub win: [f64; NUM_LANES],
    pub place: [f64; NUM_LANES],
    pub show: [f64; NUM_LANES],
}

impl LaneCredits {
    /// Fold one resolved race into the tallies.
    pub fn accumulate(&mut self, order: &FinishOrder) {
        award_slots(WIN_SLOTS, order, &mut self.win);
        award_slots(PLACE_SLOTS, order, &mut self.place);
        award_slots(SHOW_SLOTS, order, &mut self.show);
    }

    /// Add another tally lane-by-lane (used when merging per-sample credits
    /// from the parallel driver).
    pub fn merge(&mut self, other: &LaneCredits) {
        for lane in 0..NUM_LANES {
            self.win[lane] += other.win[lane];
            self.place[lane] += other.place[lane];
            self.show[lane] += other.show[lane];
        }
    }
}

/// Distribute `slots` payout slots across the rank bands in order.
///
/// A band consumes `min(len, remaining)` slots: if it fits, every lane in it
/// gets 1.0 credit; if it overflows, the remaining slots split evenly. An
/// empty band ends the cascade (later bands are empty by construction).
fn award_slots(slots: usize, order: &FinishOrder, tally: &mut [f64; NUM_LANES]) {
    let mut remaining = slots;
    for band in [&order.first, &order.second, &order.third] {
        if remaining == 0 || band.is_empty() {
            break;
        }
        let n = band.len();
        if n <= remaining {
            for &lane in &band.lanes {
                tally[lane] += 1.0;
            }
            remaining -= n;
        } else {
            let share = remaining as f64 / n as f64;
            for &lane in &band.lanes {
                tally[lane] += share;
            }
            remaining = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::finish_order::Band;

    fn order(first: &[usize], second: &[usize], third: &[usize]) -> FinishOrder {
        FinishOrder {
            first: Band { lanes: first.to_vec() },
            second: Band { lanes: second.to_vec() },
            third: Band { lanes: third.to_vec() },
        }
    }

    #[test]
    fn test_clean_finish() {
        let mut credits = LaneCredits::default();
        credits.accumulate(&order(&[3], &[1], &[5]));
        assert_eq!(credits.win, [0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(credits.place, [0.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(credits.show, [0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_pair_dead_heat_for_first() {
        // Lanes {0,1} tie for first, lane 2 alone in second.
        // Win: the single slot splits. Place: the tie exactly fills both
        // slots, lane 2 gets nothing. Show: one slot remains for lane 2.
        let mut credits = LaneCredits::default();
        credits.accumulate(&order(&[0, 1], &[2], &[]));
        assert_eq!(credits.win[0], 0.5);
        assert_eq!(credits.win[1], 0.5);
        assert_eq!(credits.win[2], 0.0);
        assert_eq!(credits.place[0], 1.0);
        assert_eq!(credits.place[1], 1.0);
        assert_eq!(credits.place[2], 0.0);
        assert_eq!(credits.show[0], 1.0);
        assert_eq!(credits.show[1], 1.0);
        assert_eq!(credits.show[2], 1.0);
    }

    #[test]
    fn test_six_way_dead_heat() {
        let mut credits = LaneCredits::default();
        credits.accumulate(&order(&[0, 1, 2, 3, 4, 5], &[], &[]));
        for lane in 0..NUM_LANES {
            assert!((credits.win[lane] - 1.0 / 6.0).abs() < 1e-12);
            assert!((credits.place[lane] - 2.0 / 6.0).abs() < 1e-12);
            assert!((credits.show[lane] - 3.0 / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_overflowing_tie_for_second() {
        // Lane 0 wins alone; lanes {1,2,3} tie for second. Place: one slot
        // remains, split three ways. Show: two slots remain, split 2/3 each.
        let mut credits = LaneCredits::default();
        credits.accumulate(&order(&[0], &[1, 2, 3], &[]));
        assert_eq!(credits.win[0], 1.0);
        assert_eq!(credits.place[0], 1.0);
        for lane in 1..=3 {
            assert!((credits.place[lane] - 1.0 / 3.0).abs() < 1e-12);
            assert!((credits.show[lane] - 2.0 / 3.0).abs() < 1e-12);
        }
        assert_eq!(credits.show[0], 1.0);
        assert_eq!(credits.win[4], 0.0);
        assert_eq!(credits.show[4], 0.0);
    }

    #[test]
    fn test_four_way_tie_for_first_splits_everything() {
        // More lanes tied for first than show slots: later bands are empty
        // and must contribute nothing.
        let mut credits = LaneCredits::default();
        credits.accumulate(&order(&[0, 1, 2, 3], &[], &[]));
        for lane in 0..4 {
            assert!((credits.win[lane] - 0.25).abs() < 1e-12);
            assert!((credits.place[lane] - 0.5).abs() < 1e-12);
            assert!((credits.show[lane] - 0.75).abs() < 1e-12);
        }
        assert_eq!(credits.win[4], 0.0);
        assert_eq!(credits.place[5], 0.0);
    }

    #[test]
    fn test_credit_mass_conserved() {
        // Every accumulation adds exactly 1 win, 2 place and 3 show credits
        // in total, however the ties fall.
        let cases = [
            order(&[0], &[1], &[2]),
            order(&[0, 1], &[2], &[]),
            order(&[0, 1, 2], &[], &[]),
            order(&[0], &[1, 2, 3, 4], &[]),
            order(&[0, 1, 2, 3, 4, 5], &[], &[]),
        ];
        for o in &cases {
            let mut credits = LaneCredits::default();
            credits.accumulate(o);
            let win: f64 = credits.win.iter().sum();
            let place: f64 = credits.place.iter().sum();
            let show: f64 = credits.show.iter().sum();
            assert!((win - 1.0).abs() < 1e-12, "win mass {win} for {o:?}");
            assert!((place - 2.0).abs() < 1e-12, "place mass {place} for {o:?}");
            assert!((show - 3.0).abs() < 1e-12, "show mass {show} for {o:?}");
        }
    }

    #[test]
    fn test_accumulates_across_races() {
        let mut credits = LaneCredits::default();
        credits.accumulate(&order(&[0], &[1], &[2]));
        credits.accumulate(&order(&[0], &[2], &[1]));
        assert_eq!(credits.win[0], 2.0);
        assert_eq!(credits.place[1], 1.0);
        assert_eq!(credits.show[1], 2.0);
        assert_eq!(credits.show[2], 2.0);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let a = order(&[0, 1], &[2], &[]);
        let b = order(&[3], &[4, 5], &[]);

        let mut sequential = LaneCredits::default();
        sequential.accumulate(&a);
        sequential.accumulate(&b);

        let mut left = LaneCredits::default();
        left.accumulate(&a);
        let mut right = LaneCredits::default();
        right.accumulate(&b);
        let mut merged = LaneCredits::default();
        merged.merge(&left);
        merged.merge(&right);

        assert_eq!(sequential, merged);
    }
}
