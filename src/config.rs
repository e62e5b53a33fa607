//! Compile-time tunables shared by every stage of the pipeline.
//!
//! These are plain constants rather than a lazily-initialized singleton:
//! there is no runtime state to memoize, only values every stage needs to
//! agree on.

/// Fraction of total slots (`3*W*H`) that make up `BaseCapacity`.
pub const BASE_EMBEDDING_RATE: f64 = 0.04;

/// Threshold above which a slot's cost is treated as "too risky to touch"
/// by the schedule's weighting step (`cost > 1 - MIN_COST_THRESHOLD`).
pub const MIN_COST_THRESHOLD: f32 = 0.15;

/// Gradient magnitude that saturates the cost map to its minimum.
pub const MAX_GRADIENT: f32 = 50.0;

/// Bytes consumed by `LEN ‖ NONCE ‖ TAG` outside of the ciphertext itself.
pub const FRAME_OVERHEAD: usize = 32;

/// Probability of an unconditional swap in the biased Fisher–Yates shuffle.
pub const SWAP_BIAS_PROBABILITY: f64 = 0.30;

/// HMAC/label constants. Exact bytes, no terminator, per the wire contract
/// encoder and decoder must agree on.
pub const LABEL_INIT: &[u8] = b"STEG_INIT_V2";
pub const LABEL_ENC: &[u8] = b"STEG_ENC_V2";
pub const LABEL_PAD: &[u8] = b"PAD_V2";
pub const LABEL_SCATTER: &[u8] = b"SCATTER_V2";
pub const LABEL_CAMO: &[u8] = b"CAMO_V2";

/// AES-256-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Length prefix width in bytes (`LEN` field of the frame).
pub const LEN_FIELD: usize = 4;

/// The process-wide "configuration singleton" `spec.md` §3 describes,
/// reduced to what it actually is: a read-only view over the constants
/// above. Zero-sized, never instantiated — a naming convenience for call
/// sites that want `Config::BASE_EMBEDDING_RATE` rather than a bare `use`.
pub struct Config;

impl Config {
    pub const BASE_EMBEDDING_RATE: f64 = BASE_EMBEDDING_RATE;
    pub const MIN_COST_THRESHOLD: f32 = MIN_COST_THRESHOLD;
}
