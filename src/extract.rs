//! Read frame bits back out of pixel LSBs along a schedule (component F).

use crate::envelope;
use crate::error::StegoError;
use crate::frame;
use crate::slot::rgba_offset;

/// Recover the authenticated plaintext from the flat RGBA8 `buf` given
/// `schedule` (the same permutation the encoder used) and `secret`.
///
/// Reads exactly `base_capacity` bytes (`8*base_capacity` bits) along the
/// schedule, MSB-first, then delegates framing validation to
/// [`crate::frame::parse`] and decryption to [`crate::envelope::open`].
/// `AuthFail` and `Malformed` are kept distinguishable only by which stage
/// rejects first; both terminate the same way from the caller's view.
pub fn extract(
    buf: &[u8],
    schedule: &[usize],
    secret: &[u8],
    base_capacity: usize,
) -> Result<Vec<u8>, StegoError> {
    let bit_count = base_capacity * 8;
    if schedule.len() < bit_count {
        return Err(StegoError::Malformed(
            "schedule shorter than declared capacity".into(),
        ));
    }

    let mut frame_bytes = vec![0u8; base_capacity];
    for b in 0..bit_count {
        let slot = schedule[b];
        let bit = buf[rgba_offset(slot)] & 1;
        frame_bytes[b / 8] |= bit << (7 - b % 8);
    }

    let parsed = frame::parse(&frame_bytes, base_capacity)?;
    envelope::open(secret, &parsed.nonce, &parsed.ciphertext, &parsed.tag)
}
