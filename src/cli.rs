// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Command-line interface definition.
//!
//! Each subcommand maps onto one stage function or one orchestrator
//! operation; `full` runs the complete compress → encrypt → hide chain.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hide files in BMP images, optionally compressed and encrypted.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compress a file (zlib).
    Compress {
        /// Input file.
        input: PathBuf,
        /// Compressed output file.
        output: PathBuf,
    },

    /// Decompress a zlib-compressed file.
    Decompress {
        /// Compressed input file.
        input: PathBuf,
        /// Decompressed output file.
        output: PathBuf,
    },

    /// Encrypt a file with a password (Argon2id + AES-256-GCM-SIV).
    Encrypt {
        /// Encryption password.
        password: String,
        /// Input file.
        input: PathBuf,
        /// Encrypted output file.
        output: PathBuf,
    },

    /// Decrypt a file encrypted with `encrypt`.
    Decrypt {
        /// Decryption password.
        password: String,
        /// Encrypted input file.
        input: PathBuf,
        /// Decrypted output file.
        output: PathBuf,
    },

    /// Hide a file inside a BMP image (no compression or encryption).
    Hide {
        /// Carrier BMP image.
        image: PathBuf,
        /// File to hide.
        file: PathBuf,
        /// Output stego image.
        output: PathBuf,
    },

    /// Extract a hidden file from a BMP image.
    ///
    /// With `--password`, runs the full recovery chain
    /// (extract → decrypt → decompress) for images produced by `full`.
    Extract {
        /// Stego BMP image.
        image: PathBuf,
        /// Output file for the extracted payload.
        output: PathBuf,
        /// Password for images produced by `full`.
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the embedding capacity of a BMP image.
    Capacity {
        /// Carrier BMP image.
        image: PathBuf,
    },

    /// Compress + encrypt + hide in one step.
    Full {
        /// Carrier BMP image.
        image: PathBuf,
        /// File to protect and hide.
        file: PathBuf,
        /// Output stego image.
        output: PathBuf,
        /// Encryption password.
        password: String,
    },
}
