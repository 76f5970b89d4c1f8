// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Stego header serialization.
//!
//! The header is the fixed 8-byte descriptor embedded before the payload,
//! making extraction self-describing:
//!
//! ```text
//! [4 bytes] magic (u32 LE, 0x53544547 — "STEG")
//! [4 bytes] payload length (u32 LE)
//! ```
//!
//! Encoding and decoding are pure byte-layout operations. Validating the
//! magic value is the caller's responsibility.

/// Magic value marking an embedded payload. Spells "STEG" in ASCII.
pub const MAGIC: u32 = 0x5354_4547;

/// Serialized header size in bytes.
pub const HEADER_LEN: usize = 8;

/// Serialize a stego header for a payload of `payload_len` bytes.
pub fn encode(payload_len: u32) -> [u8; HEADER_LEN] {
    let mut bytes = [0u8; HEADER_LEN];
    bytes[..4].copy_from_slice(&MAGIC.to_le_bytes());
    bytes[4..].copy_from_slice(&payload_len.to_le_bytes());
    bytes
}

/// Deserialize a stego header into `(magic, payload_len)`.
pub fn decode(bytes: &[u8; HEADER_LEN]) -> (u32, u32) {
    let magic = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let payload_len = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    (magic, payload_len)
}
