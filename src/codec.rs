//! Capacity accounting and the top-level encode/decode pipeline
//! (component H) that wires every other module together.

use image::RgbaImage;

use crate::camouflage;
use crate::config::{BASE_EMBEDDING_RATE, FRAME_OVERHEAD};
use crate::cost_map;
use crate::embed;
use crate::envelope;
use crate::error::StegoError;
use crate::extract;
use crate::frame;
use crate::schedule::{self, UsedSlots};
use crate::slot::total_slots;

/// `BaseCapacity` in bytes: the full frame size a `width x height` cover
/// can hold at [`BASE_EMBEDDING_RATE`].
fn base_capacity(width: u32, height: u32) -> usize {
    let total_bits = (total_slots(width, height) as f64 * BASE_EMBEDDING_RATE).floor();
    total_bits as usize / 8
}

/// Largest plaintext payload a `width x height` cover can hold.
pub fn max_capacity(width: u32, height: u32) -> usize {
    base_capacity(width, height).saturating_sub(FRAME_OVERHEAD)
}

fn validate_image(img: &RgbaImage) -> Result<(), StegoError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(StegoError::InvalidImage(
            "image has a zero dimension".into(),
        ));
    }
    if (img.as_raw().len()) != 4 * img.width() as usize * img.height() as usize {
        return Err(StegoError::InvalidImage(
            "pixel buffer does not match 4*width*height".into(),
        ));
    }
    Ok(())
}

/// Embed `plaintext` into `cover` under `secret`, returning a new stego
/// image of the same dimensions.
pub fn encode_image(
    plaintext: &[u8],
    cover: &RgbaImage,
    secret: &[u8],
) -> Result<RgbaImage, StegoError> {
    validate_image(cover)?;

    let width = cover.width();
    let height = cover.height();
    let capacity = base_capacity(width, height);
    let max_payload = capacity.saturating_sub(FRAME_OVERHEAD);
    if plaintext.len() > max_payload {
        return Err(StegoError::Capacity {
            len: plaintext.len(),
            max: max_payload,
        });
    }
    log::debug!(
        "encode: {}x{} cover, base_capacity={}B, payload={}B",
        width,
        height,
        capacity,
        plaintext.len()
    );

    let (nonce, ciphertext, tag) = envelope::seal(secret, plaintext)?;
    let frame_bytes = frame::build(secret, nonce, &ciphertext, tag, capacity)?;

    let map = cost_map::compute(cover);
    let positions = schedule::build(width, height, secret, &map);
    log::trace!("encode: schedule built, {} slots", positions.len());

    let mut buf = cover.clone().into_raw();
    let modified_count = embed::embed(&mut buf, &positions, &frame_bytes);

    let total = total_slots(width, height);
    let used_bits = frame_bytes.len() * 8;
    let mod_rate = modified_count as f64 / used_bits as f64;
    let used = UsedSlots::from_schedule(&positions, used_bits, total);
    camouflage::apply(&mut buf, width, height, &map, &used, mod_rate, secret);
    log::debug!(
        "encode: modified {modified_count}/{used_bits} slots directly, mod_rate={mod_rate:.4}"
    );

    let stego = RgbaImage::from_raw(width, height, buf)
        .expect("buffer length preserved from validated cover image");
    Ok(stego)
}

/// Recover the plaintext embedded in `stego` under `secret`.
pub fn decode_image(stego: &RgbaImage, secret: &[u8]) -> Result<Vec<u8>, StegoError> {
    validate_image(stego)?;

    let width = stego.width();
    let height = stego.height();
    let capacity = base_capacity(width, height);
    log::debug!("decode: {width}x{height} stego, base_capacity={capacity}B");

    let map = cost_map::compute(stego);
    let positions = schedule::build(width, height, secret, &map);

    let plaintext = extract::extract(stego.as_raw(), &positions, secret, capacity)?;
    log::debug!("decode: recovered {}B plaintext", plaintext.len());
    Ok(plaintext)
}
