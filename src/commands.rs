// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Command handlers: file I/O around the library operations.
//!
//! Handlers read whole files, run one stage or pipeline operation, and
//! write the result. A failed write removes the partial output file so no
//! corrupt artifact is left looking complete.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::stego::{capacity, carrier, codec, compress, crypto, pipeline};

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("unable to read {}", path.display()))
}

/// Write `data` to `path`, removing the partial file on failure.
fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if let Err(e) = fs::write(path, data) {
        let _ = fs::remove_file(path);
        return Err(e).with_context(|| format!("unable to write {}", path.display()));
    }
    Ok(())
}

pub fn handle_compress(input: &Path, output: &Path) -> Result<()> {
    let data = read_input(input)?;
    let compressed = compress::compress(&data)?;
    write_output(output, &compressed)?;
    println!(
        "Compressed {} bytes to {} bytes: {}",
        data.len(),
        compressed.len(),
        output.display()
    );
    Ok(())
}

pub fn handle_decompress(input: &Path, output: &Path) -> Result<()> {
    let data = read_input(input)?;
    let decompressed = compress::decompress(&data)?;
    write_output(output, &decompressed)?;
    println!(
        "Decompressed {} bytes to {} bytes: {}",
        data.len(),
        decompressed.len(),
        output.display()
    );
    Ok(())
}

pub fn handle_encrypt(password: &str, input: &Path, output: &Path) -> Result<()> {
    let data = read_input(input)?;
    let blob = crypto::encrypt(&data, password);
    write_output(output, &blob)?;
    println!("Encrypted {} bytes: {}", data.len(), output.display());
    Ok(())
}

pub fn handle_decrypt(password: &str, input: &Path, output: &Path) -> Result<()> {
    let data = read_input(input)?;
    let plaintext = crypto::decrypt(&data, password)?;
    write_output(output, &plaintext)?;
    println!("Decrypted {} bytes: {}", plaintext.len(), output.display());
    Ok(())
}

pub fn handle_hide(image: &Path, file: &Path, output: &Path) -> Result<()> {
    let image_data = read_input(image)?;
    let payload = read_input(file)?;
    let stego = codec::hide(image_data, &payload)
        .with_context(|| format!("cannot hide {} in {}", file.display(), image.display()))?;
    write_output(output, &stego)?;
    println!("Hid {} bytes in {}", payload.len(), output.display());
    Ok(())
}

pub fn handle_extract(image: &Path, output: &Path, password: Option<&str>) -> Result<()> {
    let image_data = read_input(image)?;
    let payload = match password {
        Some(password) => pipeline::reveal_and_recover(&image_data, password),
        None => codec::reveal(&image_data),
    }
    .with_context(|| format!("cannot extract payload from {}", image.display()))?;
    write_output(output, &payload)?;
    println!("Extracted {} bytes to {}", payload.len(), output.display());
    Ok(())
}

pub fn handle_capacity(image: &Path) -> Result<()> {
    let image_data = read_input(image)?;
    let info = carrier::parse(&image_data)?;
    let cap = capacity::capacity(image_data.len(), info.pixel_offset)?;
    println!(
        "Carrier capacity: {} bytes ({:.2} KiB), pixel data at offset {}",
        cap,
        cap as f64 / 1024.0,
        info.pixel_offset
    );
    Ok(())
}

pub fn handle_full(image: &Path, file: &Path, output: &Path, password: &str) -> Result<()> {
    let image_data = read_input(image)?;
    let payload = read_input(file)?;
    let stego = pipeline::protect_and_hide(image_data, &payload, password).with_context(|| {
        format!(
            "cannot protect and hide {} in {}",
            file.display(),
            image.display()
        )
    })?;
    write_output(output, &stego)?;
    println!(
        "Protected and hid {} bytes in {}",
        payload.len(),
        output.display()
    );
    println!("To recover: extract --password <password> {} <output>", output.display());
    Ok(())
}
