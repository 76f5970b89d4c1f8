// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier parsing through
//! compression, encryption, and bit-level embedding.

use core::fmt;
use std::io;

/// Errors that can occur during steganographic embedding or extraction.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier is not a valid BMP: bad signature, truncated header
    /// region, or a declared pixel offset beyond the end of the buffer.
    InvalidCarrier,
    /// The carrier's pixel region is too small to hold even the stego header.
    CapacityUnderflow,
    /// The payload exceeds the carrier's embedding capacity.
    PayloadTooLarge,
    /// A bit write or read would have landed outside the carrier buffer.
    /// This is an internal bounds defect, not a user error.
    CarrierOverrun,
    /// The extracted stego header does not carry the magic value — the
    /// carrier holds no payload (or a corrupted one).
    NoPayloadFound,
    /// The compression stage failed.
    Compression,
    /// The decompression stage failed (corrupted or non-zlib input).
    Decompression,
    /// Decryption failed: wrong password or corrupted input. The two cases
    /// are deliberately indistinguishable.
    Authentication,
    /// File I/O failed.
    Io(io::Error),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCarrier => write!(f, "carrier is not a valid BMP image"),
            Self::CapacityUnderflow => write!(f, "carrier too small to hold a stego header"),
            Self::PayloadTooLarge => write!(f, "payload too large for this carrier"),
            Self::CarrierOverrun => write!(f, "bit cursor ran past the carrier buffer"),
            Self::NoPayloadFound => write!(f, "no hidden payload found in carrier"),
            Self::Compression => write!(f, "compression failed"),
            Self::Decompression => write!(f, "decompression failed (corrupted input?)"),
            Self::Authentication => write!(f, "decryption failed (wrong password or corrupted data)"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StegoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
