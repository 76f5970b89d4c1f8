// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! File-level tests for the CLI command handlers.

use std::fs;
use std::path::Path;

use stegbmp::commands::{
    handle_capacity, handle_compress, handle_decompress, handle_decrypt, handle_encrypt,
    handle_extract, handle_full, handle_hide,
};
use tempfile::tempdir;

fn write_test_bmp(path: &Path, pixel_bytes: usize) {
    let mut buf = vec![0u8; 54 + pixel_bytes];
    buf[0] = 0x42;
    buf[1] = 0x4D;
    buf[10..14].copy_from_slice(&54u32.to_le_bytes());
    for (i, byte) in buf[54..].iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(197).wrapping_add(11);
    }
    fs::write(path, buf).expect("failed to create test BMP");
}

#[test]
fn hide_and_extract_files() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("carrier.bmp");
    let secret = dir.path().join("secret.txt");
    let stego = dir.path().join("stego.bmp");
    let recovered = dir.path().join("recovered.txt");

    write_test_bmp(&image, 16 * 1024);
    fs::write(&secret, b"handler-level secret")?;

    handle_hide(&image, &secret, &stego)?;
    assert!(stego.exists());

    handle_extract(&stego, &recovered, None)?;
    assert_eq!(fs::read(&recovered)?, b"handler-level secret");
    Ok(())
}

#[test]
fn full_and_recover_files() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("carrier.bmp");
    let secret = dir.path().join("secret.bin");
    let stego = dir.path().join("stego.bmp");
    let recovered = dir.path().join("recovered.bin");

    write_test_bmp(&image, 64 * 1024);
    let payload: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&secret, &payload)?;

    handle_full(&image, &secret, &stego, "file-pw")?;
    handle_extract(&stego, &recovered, Some("file-pw"))?;
    assert_eq!(fs::read(&recovered)?, payload);
    Ok(())
}

#[test]
fn full_then_wrong_password_fails() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("carrier.bmp");
    let secret = dir.path().join("secret.txt");
    let stego = dir.path().join("stego.bmp");
    let recovered = dir.path().join("recovered.txt");

    write_test_bmp(&image, 16 * 1024);
    fs::write(&secret, b"guarded")?;

    handle_full(&image, &secret, &stego, "right")?;
    assert!(handle_extract(&stego, &recovered, Some("wrong")).is_err());
    Ok(())
}

#[test]
fn compress_decompress_files() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("input.txt.z");
    let unpacked = dir.path().join("output.txt");

    let data = b"compress me ".repeat(500);
    fs::write(&input, &data)?;

    handle_compress(&input, &packed)?;
    assert!(fs::metadata(&packed)?.len() < data.len() as u64);

    handle_decompress(&packed, &unpacked)?;
    assert_eq!(fs::read(&unpacked)?, data);
    Ok(())
}

#[test]
fn encrypt_decrypt_files() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("plain.txt");
    let sealed = dir.path().join("plain.enc");
    let opened = dir.path().join("opened.txt");

    fs::write(&input, b"file crypto roundtrip")?;

    handle_encrypt("pw", &input, &sealed)?;
    assert_ne!(fs::read(&sealed)?, b"file crypto roundtrip");

    handle_decrypt("pw", &sealed, &opened)?;
    assert_eq!(fs::read(&opened)?, b"file crypto roundtrip");

    assert!(handle_decrypt("other", &sealed, &opened).is_err());
    Ok(())
}

#[test]
fn capacity_reports_for_valid_bmp() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let image = dir.path().join("carrier.bmp");
    write_test_bmp(&image, 4096);

    handle_capacity(&image)?;

    let not_bmp = dir.path().join("not.bmp");
    fs::write(&not_bmp, b"plain text, not an image")?;
    assert!(handle_capacity(&not_bmp).is_err());
    Ok(())
}

#[test]
fn missing_input_reports_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.bmp");
    let output = dir.path().join("out.bin");
    assert!(handle_extract(&missing, &output, None).is_err());
}
