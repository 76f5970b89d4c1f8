// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! BMP carrier parsing.
//!
//! Only the 14-byte file header is interpreted:
//!
//! ```text
//! bytes 0-1   : signature, ASCII "BM" (0x42 0x4D)
//! bytes 10-13 : pixel data offset (u32 LE)
//! ```
//!
//! Everything from the pixel offset to the end of the file is treated as an
//! opaque bit-addressable region. Width, height, bit depth, and compression
//! mode are deliberately ignored, so any BMP variant sharing this header
//! prefix is accepted even if its pixel encoding differs.

use crate::stego::error::StegoError;

/// BMP file signature, ASCII "BM".
pub const SIGNATURE: [u8; 2] = [0x42, 0x4D];

/// Minimum carrier length: the BMP file header up to and including the
/// pixel offset field.
pub const MIN_HEADER_LEN: usize = 14;

/// Parsed carrier metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierInfo {
    /// Byte offset where the pixel data (the embeddable region) begins.
    pub pixel_offset: usize,
}

/// Parse and validate a BMP carrier buffer.
///
/// Read-only: the buffer is not modified.
///
/// # Errors
/// Returns [`StegoError::InvalidCarrier`] if the buffer is shorter than
/// [`MIN_HEADER_LEN`], the signature does not match, or the declared pixel
/// offset points past the end of the buffer.
pub fn parse(buffer: &[u8]) -> Result<CarrierInfo, StegoError> {
    if buffer.len() < MIN_HEADER_LEN {
        return Err(StegoError::InvalidCarrier);
    }
    if buffer[..2] != SIGNATURE {
        return Err(StegoError::InvalidCarrier);
    }

    let pixel_offset =
        u32::from_le_bytes([buffer[10], buffer[11], buffer[12], buffer[13]]) as usize;

    // An offset beyond the buffer would make the capacity arithmetic wrap.
    if pixel_offset > buffer.len() {
        return Err(StegoError::InvalidCarrier);
    }

    Ok(CarrierInfo { pixel_offset })
}
