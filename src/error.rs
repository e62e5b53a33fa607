//! Error taxonomy for the codec pipeline.

use thiserror::Error;

/// Errors produced by [`crate::encode_image`], [`crate::decode_image`], and
/// the component modules they call.
///
/// `AuthFail` and `Malformed` are deliberately shaped the same way (a unit
/// variant and a short, non-secret message) so that a caller comparing
/// error *kinds* can't distinguish "wrong key" from "corrupted frame" by
/// return shape alone — both are reached after the decoder has read the
/// full declared region and attempted an AEAD open.
#[derive(Debug, Error)]
pub enum StegoError {
    /// Image dimensions are zero, or the pixel buffer isn't `4*W*H` bytes.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Payload exceeds `MaxPayload` for the given cover image.
    #[error("payload of {len} bytes exceeds capacity of {max} bytes")]
    Capacity { len: usize, max: usize },

    /// Declared frame `LEN` is out of range for the cover's capacity.
    #[error("malformed frame: {0}")]
    Malformed(String),

    /// AEAD tag mismatch: wrong key, tampered stego image, or wrong carrier.
    #[error("authentication failed")]
    AuthFail,

    /// An underlying cryptographic primitive refused its input (e.g. bad
    /// key or nonce length).
    #[error("cryptographic primitive refused its input: {0}")]
    CryptoInit(String),
}
