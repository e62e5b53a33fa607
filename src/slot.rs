//! Slot addressing: the mapping between a linear bit-plane index and a
//! pixel's color channel.
//!
//! A slot is `pixel_index * 3 + channel`, `channel in {0=R, 1=G, 2=B}`.
//! Alpha never participates.

/// Total number of addressable slots (R, G, B of every pixel) in a `W x H`
/// image.
pub fn total_slots(width: u32, height: u32) -> usize {
    3 * width as usize * height as usize
}

/// Pixel index (`y * width + x`) and channel (`0..3`) addressed by `slot`.
pub fn pixel_and_channel(slot: usize) -> (usize, usize) {
    (slot / 3, slot % 3)
}

/// `(x, y)` coordinates of the pixel addressed by `slot`.
pub fn xy_of(slot: usize, width: u32) -> (u32, u32) {
    let (pixel, _) = pixel_and_channel(slot);
    let width = width as usize;
    ((pixel % width) as u32, (pixel / width) as u32)
}

/// Byte offset into a raw RGBA buffer (4 bytes/pixel) for the channel
/// addressed by `slot`.
pub fn rgba_offset(slot: usize) -> usize {
    let (pixel, channel) = pixel_and_channel(slot);
    pixel * 4 + channel
}
