// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Password-based authenticated encryption stage.
//!
//! The encryption key is derived from the password with Argon2id and a
//! random salt; the payload is sealed with AES-256-GCM-SIV. The output blob
//! is self-describing — it carries everything the decrypter needs besides
//! the password:
//!
//! ```text
//! [16 bytes] Argon2 salt
//! [12 bytes] AES-GCM-SIV nonce
//! [N bytes ] ciphertext (plaintext_len + 16 bytes for the auth tag)
//! ```
//!
//! AES-256-GCM-SIV is chosen over AES-256-GCM for its nonce-misuse
//! resistance, which provides an extra safety margin since the nonce is
//! randomly generated and embedded alongside the ciphertext.
//!
//! Wrong password, truncated blob, and corrupted ciphertext all fail with
//! the same [`StegoError::Authentication`] so callers cannot be used as a
//! password oracle.

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use argon2::Argon2;
use zeroize::Zeroizing;

use crate::stego::error::StegoError;

/// Argon2 salt length in bytes.
pub const SALT_LEN: usize = 16;
/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM-SIV authentication tag length in bytes.
pub const TAG_LEN: usize = 16;
/// Fixed blob overhead: salt + nonce + auth tag.
pub const BLOB_OVERHEAD: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// Derive the AES-256 encryption key from a password and salt.
fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut key = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(password.as_bytes(), salt, &mut *key)
        .expect("Argon2 key derivation should not fail");
    key
}

/// Encrypt `plaintext` under `password`, returning a self-describing blob.
///
/// Each call draws a fresh random salt and nonce, so encrypting the same
/// plaintext twice produces different blobs.
pub fn encrypt(plaintext: &[u8], password: &str) -> Vec<u8> {
    use rand::RngCore;
    let mut rng = rand::thread_rng();

    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(password, &salt);
    let cipher = Aes256GcmSiv::new_from_slice(&*key).expect("valid key length");
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .expect("AES-GCM-SIV encrypt should not fail");

    let mut blob = Vec::with_capacity(BLOB_OVERHEAD + plaintext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    blob
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
/// Returns [`StegoError::Authentication`] if the blob is too short, the
/// password is wrong, or the ciphertext has been tampered with. The cases
/// are indistinguishable.
pub fn decrypt(blob: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
    if blob.len() < BLOB_OVERHEAD {
        return Err(StegoError::Authentication);
    }

    let salt = &blob[..SALT_LEN];
    let nonce_bytes = &blob[SALT_LEN..SALT_LEN + NONCE_LEN];
    let ciphertext = &blob[SALT_LEN + NONCE_LEN..];

    let key = derive_key(password, salt);
    let cipher = Aes256GcmSiv::new_from_slice(&*key).expect("valid key length");
    let nonce = Nonce::from_slice(nonce_bytes);

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| StegoError::Authentication)
}
