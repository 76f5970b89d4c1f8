// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Zlib compression stage.
//!
//! Thin wrappers over `flate2` zlib streams. The streams are
//! self-terminating, so decompression needs no original-size hint.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::stego::error::StegoError;

/// Compress `data` as a zlib stream at the default compression level.
///
/// # Errors
/// Returns [`StegoError::Compression`] if the encoder fails.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, StegoError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|_| StegoError::Compression)?;
    encoder.finish().map_err(|_| StegoError::Compression)
}

/// Decompress a zlib stream produced by [`compress`].
///
/// # Errors
/// Returns [`StegoError::Decompression`] if `data` is not a valid zlib
/// stream or is truncated.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, StegoError> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|_| StegoError::Decompression)?;
    Ok(out)
}
