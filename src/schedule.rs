//! Cost-weighted deterministic position permutation (component D) and the
//! used-slot membership structure the camouflage stage consumes.

use crate::config::{LABEL_SCATTER, MIN_COST_THRESHOLD, SWAP_BIAS_PROBABILITY};
use crate::cost_map::CostMap;
use crate::prng;
use crate::slot::total_slots;

/// Weight of a slot given its owning pixel's cost: low-cost (textured)
/// pixels get a large weight, pixels above the risk threshold are nearly
/// excluded.
fn weight_of(cost: f32) -> f64 {
    if cost > 1.0 - MIN_COST_THRESHOLD {
        0.01
    } else {
        1.0 / (cost.max(0.01) as f64)
    }
}

/// Build the deterministic slot permutation for a `width x height` image
/// under `secret`, using `cost_map` to bias the shuffle toward textured
/// regions.
///
/// This is a biased Fisher–Yates, not a textbook weighted shuffle: the
/// swap predicate is `wj > wi OR rng.next_double() < SWAP_BIAS_PROBABILITY`,
/// and weights are read through the *current* contents of `P[i]`/`P[j]`
/// rather than original indices — both are load-bearing for encoder/decoder
/// agreement and must not be "corrected" toward a cleaner algorithm. The
/// final position is never visited by the swap loop (`r <= 1` stops it one
/// slot early); this is intentional and harmless.
pub fn build(width: u32, height: u32, secret: &[u8], cost_map: &CostMap) -> Vec<usize> {
    let total = total_slots(width, height);
    let mut positions: Vec<usize> = (0..total).collect();

    let weights: Vec<f64> = (0..total)
        .map(|slot| weight_of(cost_map.at_slot(slot)))
        .collect();

    let mut rng = prng::seeded(secret, LABEL_SCATTER);

    for i in 0..total {
        let r = total - i;
        if r <= 1 {
            break;
        }
        let u = rng.next_u32() as usize;
        let j = i + (u % r);

        let wi = weights[positions[i]];
        let wj = weights[positions[j]];

        if wj > wi || rng.next_double() < SWAP_BIAS_PROBABILITY {
            positions.swap(i, j);
        }
    }

    positions
}

/// O(1)-membership bit-set over `[0, total_slots)`, built from the first
/// `used_len` entries of a schedule.
pub struct UsedSlots {
    bits: Vec<u64>,
}

impl UsedSlots {
    /// Mark the first `used_len` entries of `schedule` as used.
    pub fn from_schedule(schedule: &[usize], used_len: usize, total_slots: usize) -> Self {
        let mut bits = vec![0u64; total_slots.div_ceil(64)];
        for &slot in &schedule[..used_len] {
            bits[slot / 64] |= 1 << (slot % 64);
        }
        Self { bits }
    }

    pub fn contains(&self, slot: usize) -> bool {
        (self.bits[slot / 64] >> (slot % 64)) & 1 == 1
    }
}
