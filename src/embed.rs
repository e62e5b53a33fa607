//! Write frame bits into pixel LSBs along a schedule (component E).

use crate::slot::rgba_offset;

/// Write `frame` into the flat RGBA8 `buf` along the first `frame.len() * 8`
/// entries of `schedule`, MSB-first within each byte. Returns the number of
/// slots whose LSB was actually flipped, for the camouflage stage's density
/// target.
///
/// Panics if `schedule` is shorter than `frame.len() * 8` — callers must
/// pass the full `8*BaseCapacity`-entry prefix the caller has already
/// validated against capacity.
pub fn embed(buf: &mut [u8], schedule: &[usize], frame: &[u8]) -> usize {
    let bit_count = frame.len() * 8;
    assert!(schedule.len() >= bit_count, "schedule shorter than frame");

    let mut modified_count = 0;
    for b in 0..bit_count {
        let slot = schedule[b];
        let target = (frame[b / 8] >> (7 - b % 8)) & 1;
        let offset = rgba_offset(slot);
        if buf[offset] & 1 != target {
            buf[offset] = (buf[offset] & 0xFE) | target;
            modified_count += 1;
        }
    }
    modified_count
}
