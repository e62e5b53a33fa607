//! AEAD payload envelope: AES-256-GCM under a key derived from the shared
//! secret, with a fresh random nonce per call.
//!
//! Key derivation is `SHA256(secret ‖ "STEG_ENC_V2")` — domain-separated
//! from the `KeyPrng` streams ([`crate::prng`]) by label alone, both
//! rooted in the same secret. The nonce is drawn from the OS CSPRNG, not
//! from `KeyPrng`: it only has to be unique per encode, never reproduced.

use aead::generic_array::GenericArray;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::{LABEL_ENC, NONCE_LEN, TAG_LEN};
use crate::error::StegoError;

fn derive_key(secret: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    hasher.update(LABEL_ENC);
    hasher.finalize().into()
}

/// Encrypt `plaintext` under `secret`. Returns the nonce, ciphertext, and
/// detached tag used to build the frame.
pub fn seal(
    secret: &[u8],
    plaintext: &[u8],
) -> Result<([u8; NONCE_LEN], Vec<u8>, [u8; TAG_LEN]), StegoError> {
    let key = derive_key(secret);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| StegoError::CryptoInit(e.to_string()))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = GenericArray::from_slice(&nonce_bytes);

    let mut combined = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| StegoError::CryptoInit(e.to_string()))?;
    let tag_start = combined.len() - TAG_LEN;
    let tag: [u8; TAG_LEN] = combined.split_off(tag_start)[..]
        .try_into()
        .expect("aes-gcm tag is 16 bytes");
    let ciphertext = combined;

    Ok((nonce_bytes, ciphertext, tag))
}

/// Decrypt a `(nonce, ciphertext, tag)` triple under `secret`. A tag
/// mismatch — wrong key, tampered bytes, or wrong carrier — surfaces as
/// [`StegoError::AuthFail`], never a more specific error.
pub fn open(
    secret: &[u8],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Vec<u8>, StegoError> {
    let key = derive_key(secret);
    let cipher = Aes256Gcm::new_from_slice(&key)
        .map_err(|e| StegoError::CryptoInit(e.to_string()))?;

    let nonce = GenericArray::from_slice(nonce);
    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(nonce, combined.as_slice())
        .map_err(|_| StegoError::AuthFail)
}
