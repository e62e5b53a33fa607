//! Deterministic keyed byte/word stream (component A).
//!
//! Construction: `k0 = SHA256(seed)`, then `state = HMAC-SHA256(k0,
//! "STEG_INIT_V2")` — the inner label is always the fixed
//! [`crate::config::LABEL_INIT`] constant; domain separation between
//! SCATTER/CAMO/PAD streams comes entirely from `seed` itself (callers
//! concatenate `secret ‖ "SCATTER_V2"` etc. before calling [`KeyPrng::new`]).
//! Each call to [`KeyPrng::next_u32`] advances `state` by hashing
//! `state || LE(counter, 8 bytes)` under itself and returns the first 4
//! bytes of the new state as a little-endian `u32`. This makes the whole
//! stream a pure function of `seed` — the contract the schedule and
//! padding stages depend on for encoder/decoder agreement.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::config::LABEL_INIT;

type HmacSha256 = Hmac<Sha256>;

pub struct KeyPrng {
    state: [u8; 32],
    counter: u64,
}

impl KeyPrng {
    /// Seed the stream from an already domain-separated `seed` (e.g.
    /// `secret ‖ "SCATTER_V2"`).
    pub fn new(seed: &[u8]) -> Self {
        let k0 = Sha256::digest(seed);
        let mut mac = HmacSha256::new_from_slice(&k0).expect("HMAC accepts any key length");
        mac.update(LABEL_INIT);
        let state: [u8; 32] = mac.finalize().into_bytes().into();
        Self { state, counter: 0 }
    }

    /// Draw the next 32-bit word from the stream.
    pub fn next_u32(&mut self) -> u32 {
        self.counter += 1;
        let mut mac =
            HmacSha256::new_from_slice(&self.state).expect("HMAC accepts any key length");
        mac.update(&self.state);
        mac.update(&self.counter.to_le_bytes());
        let next_state: [u8; 32] = mac.finalize().into_bytes().into();
        self.state = next_state;
        u32::from_le_bytes(self.state[0..4].try_into().expect("4-byte slice"))
    }

    /// Low 8 bits of the next word.
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u32() & 0xFF) as u8
    }

    /// Next word normalized to `[0, 1)`. Divides by `u32::MAX`, not `2^32`,
    /// by design — this quirk is load-bearing for the 30% swap-bias draw
    /// in the schedule and must not be "fixed".
    pub fn next_double(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Fill `out` with consecutive bytes from the stream, in draw order.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for b in out.iter_mut() {
            *b = self.next_byte();
        }
    }
}

/// Build a domain-separated seed from `secret` and a label, the
/// concatenation every call site feeds to [`KeyPrng::new`].
pub fn seeded(secret: &[u8], label: &[u8]) -> KeyPrng {
    let mut seed = Vec::with_capacity(secret.len() + label.len());
    seed.extend_from_slice(secret);
    seed.extend_from_slice(label);
    KeyPrng::new(&seed)
}
