// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Steganographic embedding and extraction for BMP carriers.
//!
//! Payload bits are embedded one per carrier byte (least-significant bit
//! first) into the pixel region of an uncompressed BMP, prefixed by a fixed
//! 8-byte stego header:
//!
//! ```text
//! offset 0 : magic       (4 bytes LE, 0x53544547 — "STEG")
//! offset 4 : payload_len (4 bytes LE)
//! offset 8 : payload_len bytes of opaque payload
//! ```
//!
//! Embedding consumes `8 * (8 + payload_len)` carrier bytes starting at the
//! pixel offset declared in the BMP header. The carrier's size and every bit
//! outside the low bits of the consumed pixel bytes are preserved.
//!
//! [`pipeline`] chains this codec with the [`compress`] and [`crypto`]
//! stages into a single reversible transformation.

pub mod bits;
pub mod capacity;
pub mod carrier;
pub mod codec;
pub mod compress;
pub mod crypto;
pub mod error;
pub mod header;
pub mod pipeline;

pub use capacity::{capacity, carrier_capacity};
pub use codec::{hide, reveal};
pub use error::StegoError;
pub use pipeline::{protect_and_hide, reveal_and_recover};
