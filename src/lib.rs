// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! # stegbmp
//!
//! LSB steganography for uncompressed BMP carriers, with an optional
//! compression + authenticated-encryption pipeline.
//!
//! The `stego` module provides the codec (`hide` / `reveal`) and the
//! pipeline orchestrator (`protect_and_hide` / `reveal_and_recover`).
//! Compression is zlib; encryption is AES-256-GCM-SIV with an Argon2id key
//! derived from a password.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stegbmp::{protect_and_hide, reveal_and_recover};
//!
//! let carrier = std::fs::read("photo.bmp")?;
//! let stego = protect_and_hide(carrier, b"secret payload", "passphrase")?;
//! let payload = reveal_and_recover(&stego, "passphrase")?;
//! assert_eq!(payload, b"secret payload");
//! ```

pub mod cli;
pub mod commands;
pub mod stego;

pub use stego::{capacity, carrier_capacity, hide, protect_and_hide, reveal, reveal_and_recover};
pub use stego::StegoError;
