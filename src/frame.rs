//! Wire layout of the payload frame: `LEN ‖ NONCE ‖ CT ‖ TAG ‖ PAD`.
//!
//! `LEN` is a 4-byte big-endian ciphertext length, `NONCE` is the AEAD's
//! 12-byte nonce, `TAG` is its 16-byte authentication tag, and `PAD` is
//! pseudo-random filler drawn from a [`crate::prng::KeyPrng`] seeded with
//! `secret ‖ "PAD_V2"` so the frame always occupies exactly `BaseCapacity`
//! bytes regardless of ciphertext length.

use crate::config::{FRAME_OVERHEAD, LABEL_PAD, LEN_FIELD, NONCE_LEN, TAG_LEN};
use crate::error::StegoError;
use crate::prng;

/// A `LEN ‖ NONCE ‖ CT ‖ TAG` tuple read back out of a frame, PAD discarded.
pub struct ParsedFrame {
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
    pub tag: [u8; TAG_LEN],
}

/// Build a full `BaseCapacity`-byte frame from its parts, filling the
/// remainder with key-derived pseudo-random padding.
pub fn build(
    secret: &[u8],
    nonce: [u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: [u8; TAG_LEN],
    base_capacity: usize,
) -> Result<Vec<u8>, StegoError> {
    let len = ciphertext.len();
    if len + FRAME_OVERHEAD > base_capacity {
        return Err(StegoError::Capacity {
            len,
            max: base_capacity.saturating_sub(FRAME_OVERHEAD),
        });
    }

    let mut frame = Vec::with_capacity(base_capacity);
    frame.extend_from_slice(&(len as u32).to_be_bytes());
    frame.extend_from_slice(&nonce);
    frame.extend_from_slice(ciphertext);
    frame.extend_from_slice(&tag);

    let pad_len = base_capacity - FRAME_OVERHEAD - len;
    let mut pad = vec![0u8; pad_len];
    prng::seeded(secret, LABEL_PAD).fill_bytes(&mut pad);
    frame.extend_from_slice(&pad);

    debug_assert_eq!(frame.len(), base_capacity);
    Ok(frame)
}

/// Parse `LEN ‖ NONCE ‖ CT ‖ TAG` out of a frame-sized byte buffer,
/// ignoring any trailing PAD bytes. `frame_bytes` must be exactly
/// `base_capacity` bytes (the full bit-schedule prefix read back as bytes).
pub fn parse(frame_bytes: &[u8], base_capacity: usize) -> Result<ParsedFrame, StegoError> {
    if frame_bytes.len() < LEN_FIELD {
        return Err(StegoError::Malformed("frame shorter than LEN field".into()));
    }
    let len = u32::from_be_bytes(
        frame_bytes[0..LEN_FIELD]
            .try_into()
            .expect("4-byte slice"),
    ) as usize;

    if len == 0 || len + FRAME_OVERHEAD > base_capacity {
        return Err(StegoError::Malformed(format!(
            "declared length {len} out of range for capacity {base_capacity}"
        )));
    }

    let nonce_start = LEN_FIELD;
    let nonce_end = nonce_start + NONCE_LEN;
    let ct_start = nonce_end;
    let ct_end = ct_start + len;
    let tag_start = ct_end;
    let tag_end = tag_start + TAG_LEN;

    if frame_bytes.len() < tag_end {
        return Err(StegoError::Malformed(
            "frame too short for declared ciphertext and tag".into(),
        ));
    }

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&frame_bytes[nonce_start..nonce_end]);
    let ciphertext = frame_bytes[ct_start..ct_end].to_vec();
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&frame_bytes[tag_start..tag_end]);

    Ok(ParsedFrame {
        nonce,
        ciphertext,
        tag,
    })
}
