//! Finish-order resolver — groups lanes into first/second/third dead-heat
//! bands from their finish times.

use crate::constants::{NUM_LANES, SHOW_SLOTS, UNFINISHED};

/// A set of lanes tied at one rank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Band {
    pub lanes: Vec<usize>,
}

impl Band {
    #[inline]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// The first three rank bands of one race. Bands are disjoint; a band that
/// would start at position 3 or later is left empty (e.g. a four-way tie for
/// first leaves `second` and `third` empty).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinishOrder {
    pub first: Band,
    pub second: Band,
    pub third: Band,
}

/// Group lanes into rank bands.
///
/// Lanes sort by finish time ascending, with the [`UNFINISHED`] sentinel
/// last; ties among unfinished lanes break by final distance descending.
/// Consecutive lanes with identical finish time form one dead-heat band —
/// except among unfinished lanes, where a dead heat additionally requires
/// identical distance (the sentinel alone carries no ordering information).
pub fn resolve(
    finish_times: &[u64; NUM_LANES],
    distances: &[u32; NUM_LANES],
) -> FinishOrder {
    let mut order: [usize; NUM_LANES] = [0, 1, 2, 3, 4, 5];
    order.sort_by(|&a, &b| {
        finish_times[a]
            .cmp(&finish_times[b])
            .then(distances[b].cmp(&distances[a]))
    });

    let tied = |a: usize, b: usize| {
        finish_times[a] == finish_times[b]
            && (finish_times[a] != UNFINISHED || distances[a] == distances[b])
    };

    let mut bands: Vec<Band> = Vec::with_capacity(SHOW_SLOTS);
    let mut i = 0;
    while i < NUM_LANES && i < SHOW_SLOTS && bands.len() < SHOW_SLOTS {
        let mut lanes = vec![order[i]];
        let mut j = i + 1;
        while j < NUM_LANES && tied(order[i], order[j]) {
            lanes.push(order[j]);
            j += 1;
        }
        bands.push(Band { lanes });
        i = j;
    }

    let mut bands = bands.into_iter();
    FinishOrder {
        first: bands.next().unwrap_or_default(),
        second: bands.next().unwrap_or_default(),
        third: bands.next().unwrap_or_default(),
    }
}
