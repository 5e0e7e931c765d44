// Deterministic, portable pseudo-randomness for the Sprawl simulation core.
//
// Two independent utilities live here:
//
// - `coord_hash`: a memoryless hash from `(x, z, seed)` to a value in [0, 1).
//   The world generator derives all chunk content from it, which is what makes
//   chunk regeneration and door-id stability possible. Call sites decorrelate
//   independent draws from the same coordinates by adding a constant offset to
//   the seed (`coord_hash(x, z, seed + EXTRA)`).
// - `StreamRng`: a stateful sequential generator (xoshiro128++ with SplitMix64
//   seeding) advanced by each call. The war simulation draws its per-tick
//   variation from it.
//
// The two must not be confused: `coord_hash` is a pure function with no
// state; `StreamRng` mutates on every draw.
//
// This is a hand-rolled implementation with zero external RNG dependencies,
// chosen to guarantee identical output across all platforms.
//
// **Critical constraint: determinism.** Both utilities must produce identical
// output for identical inputs regardless of platform, compiler version, or
// optimization level. The generator core and the hash are pure integer
// arithmetic; floating point appears only in the final fixed-point conversion
// to [0, 1), which IEEE 754 makes exact.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Memoryless coordinate hash
// ---------------------------------------------------------------------------

/// Hash integer grid coordinates and a seed to a uniform value in [0, 1).
///
/// Pure function: repeated queries for the same `(x, z, seed)` always agree.
/// The `seed` is an `f64` so callers can thread `world_seed + EXTRA` offset
/// constants per derived quantity; the bit pattern of the seed is hashed, so
/// any two distinct seeds give decorrelated outputs.
///
/// Internally this folds the inputs through SplitMix64-style avalanche rounds
/// rather than the scaled-sine trick, so the result does not depend on a
/// platform `sin` implementation.
pub fn coord_hash(x: i32, z: i32, seed: f64) -> f64 {
    let mut h = seed.to_bits();
    h ^= (x as i64 as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    h = avalanche(h);
    h ^= (z as i64 as u64).wrapping_mul(0xc2b2_ae3d_27d4_eb4f);
    h = avalanche(h);
    // Top 53 bits fill the f64 mantissa.
    (h >> 11) as f64 / (1u64 << 53) as f64
}

/// SplitMix64 finalizer. Shared by `coord_hash` and `StreamRng` seeding.
fn avalanche(mut v: u64) -> u64 {
    v = (v ^ (v >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    v = (v ^ (v >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    v ^ (v >> 31)
}

/// SplitMix64 step — used only for expanding a seed into generator state.
///
/// This is the standard recommendation from the xoshiro authors.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    avalanche(*state)
}

// ---------------------------------------------------------------------------
// Sequential generator
// ---------------------------------------------------------------------------

/// Xoshiro128++ PRNG — the sequential randomness source for the war
/// simulation.
///
/// Seeded once at construction; every draw advances the 128-bit state. For a
/// fixed seed, a fixed sequence of calls always yields the same sequence of
/// outputs, which is what makes simulation replay and testing possible.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StreamRng {
    s: [u32; 4],
}

impl StreamRng {
    /// Create a new generator seeded from a `u64`.
    ///
    /// SplitMix64 expands the seed into the 128-bit internal state, so two
    /// generators built from the same seed produce identical streams.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        let a = splitmix64(&mut sm);
        let b = splitmix64(&mut sm);
        Self {
            s: [a as u32, (a >> 32) as u32, b as u32, (b >> 32) as u32],
        }
    }

    /// Generate the next `u32` in the sequence.
    pub fn next_u32(&mut self) -> u32 {
        let result = self.s[0]
            .wrapping_add(self.s[3])
            .rotate_left(7)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 9;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(11);

        result
    }

    /// Generate a uniform `f32` in [0, 1).
    ///
    /// Uses the top 24 bits of an output word — full f32 mantissa precision.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Generate a uniform `f64` in [0, 1).
    ///
    /// Combines two output words and keeps the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        let hi = (self.next_u32() as u64) << 32;
        let lo = self.next_u32() as u64;
        ((hi | lo) >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Generate a uniform random value in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        assert!(low < high, "range_f32: low must be less than high");
        low + self.next_f32() * (high - low)
    }

    /// Generate a uniform random integer in `[low, high]` (inclusive both
    /// ends).
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low > high`.
    pub fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        assert!(low <= high, "range_i32: low must be <= high");
        let span = (high as i64 - low as i64) as u64 + 1;
        if span.is_power_of_two() {
            return low.wrapping_add((self.next_u32() as u64 & (span - 1)) as i32);
        }
        // Rejection sampling against the 32-bit output range.
        let threshold = ((1u64 << 32) - span) % span;
        loop {
            let r = self.next_u32() as u64;
            if r >= threshold {
                return low.wrapping_add((r % span) as i32);
            }
        }
    }
}
