// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! LSB bit embedding and extraction.
//!
//! One payload bit per carrier byte, least-significant bit first. A payload
//! byte therefore occupies exactly 8 consecutive carrier bytes. Bit order is
//! part of the wire contract: embed and extract must agree or round-trips
//! produce garbage with no detectable error.

use crate::stego::error::StegoError;

/// Write the 8 bits of `value` into `carrier[cursor..cursor + 8]`,
/// LSB first, one bit per carrier byte.
///
/// Returns the advanced cursor.
///
/// # Errors
/// Returns [`StegoError::CarrierOverrun`] if any write would land at or past
/// the end of the carrier. Nothing is written in that case.
pub fn embed_byte(carrier: &mut [u8], cursor: usize, value: u8) -> Result<usize, StegoError> {
    let end = cursor.checked_add(8).ok_or(StegoError::CarrierOverrun)?;
    if end > carrier.len() {
        return Err(StegoError::CarrierOverrun);
    }

    for (bit, slot) in carrier[cursor..end].iter_mut().enumerate() {
        *slot = (*slot & 0xFE) | ((value >> bit) & 1);
    }

    Ok(end)
}

/// Read back one payload byte from `carrier[cursor..cursor + 8]`,
/// reassembling the low bits LSB first.
///
/// Returns the byte and the advanced cursor.
///
/// # Errors
/// Returns [`StegoError::CarrierOverrun`] if the read would run past the end
/// of the carrier.
pub fn extract_byte(carrier: &[u8], cursor: usize) -> Result<(u8, usize), StegoError> {
    let end = cursor.checked_add(8).ok_or(StegoError::CarrierOverrun)?;
    if end > carrier.len() {
        return Err(StegoError::CarrierOverrun);
    }

    let mut value = 0u8;
    for (bit, slot) in carrier[cursor..end].iter().enumerate() {
        value |= (slot & 1) << bit;
    }

    Ok((value, end))
}
