// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Embedding capacity calculation.
//!
//! Each payload bit consumes one carrier byte, so the pixel region holds
//! `(carrier_len - pixel_offset) / 8` payload bytes, of which the 8-byte
//! stego header claims the first slots. The result is advisory: the embedder
//! still bounds-checks every write independently.

use crate::stego::carrier;
use crate::stego::error::StegoError;
use crate::stego::header::HEADER_LEN;

/// Maximum payload size (in bytes) embeddable in a carrier of `carrier_len`
/// bytes whose pixel data begins at `pixel_offset`.
///
/// `capacity = floor((carrier_len - pixel_offset) / 8) - HEADER_LEN`.
///
/// # Errors
/// Returns [`StegoError::CapacityUnderflow`] if the pixel region cannot hold
/// even the stego header (fewer than 64 usable carrier bytes), or if
/// `pixel_offset` exceeds `carrier_len`.
pub fn capacity(carrier_len: usize, pixel_offset: usize) -> Result<usize, StegoError> {
    let available = carrier_len
        .checked_sub(pixel_offset)
        .ok_or(StegoError::CapacityUnderflow)?;

    let slots = available / 8;
    if slots < HEADER_LEN {
        return Err(StegoError::CapacityUnderflow);
    }

    Ok(slots - HEADER_LEN)
}

/// Capacity of a whole carrier buffer: parse the BMP header, then compute
/// [`capacity`] from its length and pixel offset.
///
/// # Errors
/// [`StegoError::InvalidCarrier`] from parsing, or
/// [`StegoError::CapacityUnderflow`] from the capacity arithmetic.
pub fn carrier_capacity(buffer: &[u8]) -> Result<usize, StegoError> {
    let info = carrier::parse(buffer)?;
    capacity(buffer.len(), info.pixel_offset)
}
