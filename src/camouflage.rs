//! Adaptive noise over unused slots whose local density mirrors the
//! embedding density (component G).

use crate::config::LABEL_CAMO;
use crate::cost_map::CostMap;
use crate::prng;
use crate::schedule::UsedSlots;
use crate::slot::{rgba_offset, total_slots};

/// Flip LSBs of unused slots in the flat RGBA8 `buf` at a rate proportional
/// to `mod_rate` (`modified_count / (8*base_capacity)`), higher in low-cost
/// (textured) regions so first-order LSB statistics stay flat across the
/// whole image.
///
/// Iterates slots in ascending order (`0..total_slots`), not the schedule
/// order: the decoder never recomputes camouflage, so nothing downstream
/// depends on this order beyond being deterministic.
pub fn apply(
    buf: &mut [u8],
    width: u32,
    height: u32,
    cost_map: &CostMap,
    used: &UsedSlots,
    mod_rate: f64,
    secret: &[u8],
) {
    let total = total_slots(width, height);
    let mut rng = prng::seeded(secret, LABEL_CAMO);

    for slot in 0..total {
        if used.contains(slot) {
            continue;
        }
        let c = cost_map.at_slot(slot);
        let local_rate = if c < 0.3 {
            0.5 * mod_rate
        } else if c < 0.7 {
            0.2 * mod_rate
        } else {
            0.05 * mod_rate
        };

        let u = rng.next_double();
        if u < local_rate {
            let offset = rgba_offset(slot);
            buf[offset] ^= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost_map;
    use image::{Rgba, RgbaImage};

    #[test]
    fn zero_mod_rate_never_flips_anything() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([100, 100, 100, 255]));
        let map = cost_map::compute(&img);
        let used = UsedSlots::from_schedule(&[], 0, total_slots(8, 8));
        let before = img.clone().into_raw();
        let mut buf = img.into_raw();
        apply(&mut buf, 8, 8, &map, &used, 0.0, b"secret");
        assert_eq!(buf, before);
    }

    #[test]
    fn never_touches_used_slots() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([100, 100, 100, 255]));
        let map = cost_map::compute(&img);
        let total = total_slots(8, 8);
        let schedule: Vec<usize> = (0..total).collect();
        let used = UsedSlots::from_schedule(&schedule, total, total);
        let before = img.clone().into_raw();
        let mut buf = img.into_raw();
        apply(&mut buf, 8, 8, &map, &used, 0.9, b"secret");
        assert_eq!(buf, before);
    }

    #[test]
    fn only_flips_lsbs() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([0b1111_1110, 0, 0, 255]));
        let map = cost_map::compute(&img);
        let used = UsedSlots::from_schedule(&[], 0, total_slots(16, 16));
        let mut buf = img.into_raw();
        apply(&mut buf, 16, 16, &map, &used, 1.0, b"secret");
        for chunk in buf.chunks(4) {
            assert!(chunk[0] == 0b1111_1110 || chunk[0] == 0b1111_1111);
        }
    }
}
