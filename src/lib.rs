//! Content-adaptive image steganography: a cost-weighted LSB embedding
//! pipeline wrapped around an AEAD payload envelope.
//!
//! The public surface is intentionally small — [`encode_image`],
//! [`decode_image`], and [`max_capacity`] — with every other module
//! private to the crate. Callers own image file I/O; this crate only
//! ever touches decoded `RgbaImage` buffers.

mod camouflage;
mod codec;
mod config;
mod cost_map;
mod embed;
mod envelope;
mod error;
mod extract;
mod frame;
mod prng;
mod schedule;
mod slot;

pub use codec::{decode_image, encode_image, max_capacity};
pub use error::StegoError;
