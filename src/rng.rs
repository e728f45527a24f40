//! Deterministic RNG — xorshift128 bit generator plus a splitmix-style seed
//! sequencer.
//!
//! Every random decision in a simulation flows through [`Xorshift128`], and
//! every simulation gets its generator seed from [`SeedSequence`]. Both are
//! bit-exact functions of their inputs (wrapping u32 arithmetic only, no
//! widening mid-computation), so a full estimation run is reproducible from
//! one master seed.
//!
//! The generator is intentionally not cryptographic; it is a statistical
//! workhorse in the same spirit as the SplitMix64 used by our batch
//! simulators, shrunk to a 32-bit lane-stream.

/// Odd multipliers for seeding the four generator words. Distinct multipliers
/// per word make nearby seeds diverge within the warm-up window.
const SEED_MIX_Y: u32 = 0x9E37_79B1;
const SEED_MIX_Z: u32 = 0x85EB_CA6B;
const SEED_MIX_W: u32 = 0xC2B2_AE35;

/// Advances discarded after seeding, before the first usable draw.
const WARMUP_ROUNDS: usize = 20;

/// Additive constant for the seed sequencer (odd, golden-ratio derived).
const SEQ_INCREMENT: u32 = 0x9E37_79B9;

/// Marsaglia xorshift128: four u32 words, period 2^128 - 1.
#[derive(Clone, Debug)]
pub struct Xorshift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl Xorshift128 {
    /// Seed all four words from a single u32 and run the warm-up advances.
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            x: seed,
            y: seed.wrapping_mul(SEED_MIX_Y).wrapping_add(0x0139_408D),
            z: seed.wrapping_mul(SEED_MIX_Z).wrapping_add(0x6C07_8965),
            w: seed.wrapping_mul(SEED_MIX_W).wrapping_add(0x2545_F491),
        };
        for _ in 0..WARMUP_ROUNDS {
            rng.next();
        }
        rng
    }

    /// Next pseudo-random u32. The recurrence rotates the four words, folds
    /// the outgoing word through two shift-xors, and mixes it into the head.
    #[inline(always)]
    pub fn next(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = (self.w ^ (self.w >> 19)) ^ (t ^ (t >> 8));
        self.w
    }

    /// Uniform value in [0, n) via modulo. Returns 0 for n <= 1 without
    /// advancing the state.
    #[inline(always)]
    pub fn roll(&mut self, n: u32) -> u32 {
        if n <= 1 {
            return 0;
        }
        self.next() % n
    }
}

/// Single-accumulator sequencer that hands out one fresh generator seed per
/// simulation. Shared across all simulations of one estimation run and
/// advanced strictly sequentially.
#[derive(Clone, Debug)]
pub struct SeedSequence {
    state: u32,
}

impl SeedSequence {
    pub fn new(master: u32) -> Self {
        Self { state: master }
    }

    /// Fold an input value (a clamped lane score) into the accumulator.
    /// Called once per lane before the first simulation, so different score
    /// vectors walk different seed streams.
    pub fn absorb(&mut self, value: u32) {
        self.state = avalanche(self.state ^ value.wrapping_mul(SEED_MIX_Z));
    }

    /// Advance the accumulator and return the avalanched output.
    #[inline(always)]
    pub fn next_seed(&mut self) -> u32 {
        self.state = self.state.wrapping_add(SEQ_INCREMENT);
        avalanche(self.state)
    }
}

/// Three-round multiply/xor/shift finalizer (murmur3-style).
#[inline(always)]
fn avalanche(mut z: u32) -> u32 {
    z = (z ^ (z >> 16)).wrapping_mul(SEED_MIX_Z);
    z = (z ^ (z >> 13)).wrapping_mul(SEED_MIX_W);
    z ^ (z >> 16)
}
