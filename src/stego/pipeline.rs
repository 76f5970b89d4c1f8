// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Pipeline orchestrator: compression ↔ encryption ↔ steganographic codec.
//!
//! Two composite operations with a fixed stage order:
//!
//! - **protect and hide**: `payload → compress → encrypt → hide`
//! - **reveal and recover**: `carrier → reveal → decrypt → decompress`
//!
//! Each stage consumes its input buffer and produces a new owned output;
//! intermediates are dropped as soon as the next stage has consumed them.
//! Any stage failure aborts the chain and propagates that stage's error
//! kind unchanged.

use log::debug;

use crate::stego::codec;
use crate::stego::compress;
use crate::stego::crypto;
use crate::stego::error::StegoError;

/// Compress `payload`, encrypt it under `password`, and embed the result
/// into `carrier`. Returns the stego carrier.
///
/// # Errors
/// Propagates the failing stage's error: [`StegoError::Compression`],
/// [`StegoError::InvalidCarrier`], [`StegoError::CapacityUnderflow`], or
/// [`StegoError::PayloadTooLarge`]. Note that the capacity check applies to
/// the compressed-and-encrypted payload, not the raw input.
pub fn protect_and_hide(
    carrier: Vec<u8>,
    payload: &[u8],
    password: &str,
) -> Result<Vec<u8>, StegoError> {
    let compressed = compress::compress(payload)?;
    debug!(
        "pipeline: payload {} bytes, compressed {} bytes",
        payload.len(),
        compressed.len()
    );

    let encrypted = crypto::encrypt(&compressed, password);
    drop(compressed);
    debug!("pipeline: encrypted {} bytes", encrypted.len());

    codec::hide(carrier, &encrypted)
}

/// Extract the embedded blob from `carrier`, decrypt it under `password`,
/// and decompress the plaintext. Returns the original payload.
///
/// # Errors
/// Propagates the failing stage's error: [`StegoError::NoPayloadFound`],
/// [`StegoError::Authentication`], or [`StegoError::Decompression`].
pub fn reveal_and_recover(carrier: &[u8], password: &str) -> Result<Vec<u8>, StegoError> {
    let extracted = codec::reveal(carrier)?;
    debug!("pipeline: extracted {} bytes", extracted.len());

    let decrypted = crypto::decrypt(&extracted, password)?;
    drop(extracted);
    debug!("pipeline: decrypted {} bytes", decrypted.len());

    compress::decompress(&decrypted)
}
