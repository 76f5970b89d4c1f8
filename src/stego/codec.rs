// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

//! Steganographic codec: `hide` and `reveal`.
//!
//! Composes the carrier parser, capacity calculator, header codec, and the
//! LSB bit primitive into the two reversible operations. Embedding starts at
//! the carrier's pixel offset with the 8-byte stego header, immediately
//! followed by the payload; it mutates only the low bits of pixel bytes and
//! never changes the carrier's length. Total carrier bytes consumed by an
//! embedding is `8 * (8 + payload_len)`.

use log::debug;

use crate::stego::bits;
use crate::stego::capacity::capacity;
use crate::stego::carrier::{self, SIGNATURE};
use crate::stego::error::StegoError;
use crate::stego::header::{self, HEADER_LEN, MAGIC};

/// Embed `payload` into `carrier`, returning the mutated carrier.
///
/// The carrier is consumed and returned with the same length; only the low
/// bits of bytes at and after the pixel offset are modified. After embedding,
/// the signature bytes are re-checked as a self-test against internal bounds
/// bugs.
///
/// # Errors
/// - [`StegoError::InvalidCarrier`] if the carrier is not a valid BMP.
/// - [`StegoError::CapacityUnderflow`] if the pixel region cannot hold the
///   stego header.
/// - [`StegoError::PayloadTooLarge`] if `payload` exceeds the capacity.
/// - [`StegoError::CarrierOverrun`] on an internal bounds violation (defect).
pub fn hide(mut carrier: Vec<u8>, payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    let info = carrier::parse(&carrier)?;
    let cap = capacity(carrier.len(), info.pixel_offset)?;

    debug!(
        "hide: carrier {} bytes, pixel offset {}, capacity {} bytes, payload {} bytes",
        carrier.len(),
        info.pixel_offset,
        cap,
        payload.len()
    );

    if payload.len() > cap || payload.len() > u32::MAX as usize {
        return Err(StegoError::PayloadTooLarge);
    }

    let mut cursor = info.pixel_offset;

    for &byte in header::encode(payload.len() as u32).iter() {
        cursor = bits::embed_byte(&mut carrier, cursor, byte)?;
    }
    debug!("hide: header embedded, cursor at {cursor}");

    for &byte in payload {
        cursor = bits::embed_byte(&mut carrier, cursor, byte)?;
    }
    debug!(
        "hide: payload embedded, cursor at {cursor}, {} carrier bytes consumed",
        cursor - info.pixel_offset
    );

    // Self-test: embedding must never touch bytes before the pixel offset.
    if carrier[..2] != SIGNATURE {
        return Err(StegoError::CarrierOverrun);
    }

    Ok(carrier)
}

/// Extract the payload hidden in `carrier`.
///
/// # Errors
/// - [`StegoError::InvalidCarrier`] if the carrier is not a valid BMP.
/// - [`StegoError::CapacityUnderflow`] if the pixel region is too small to
///   hold a stego header at all.
/// - [`StegoError::NoPayloadFound`] if the extracted magic does not match,
///   or the declared payload length exceeds what this carrier could hold.
pub fn reveal(carrier: &[u8]) -> Result<Vec<u8>, StegoError> {
    let info = carrier::parse(carrier)?;
    let cap = capacity(carrier.len(), info.pixel_offset)?;

    let mut cursor = info.pixel_offset;
    let mut raw = [0u8; HEADER_LEN];
    for slot in raw.iter_mut() {
        let (byte, next) = bits::extract_byte(carrier, cursor)?;
        *slot = byte;
        cursor = next;
    }

    let (magic, payload_len) = header::decode(&raw);
    if magic != MAGIC {
        return Err(StegoError::NoPayloadFound);
    }

    let payload_len = payload_len as usize;
    // A magic-valid header declaring more bytes than the carrier can hold is
    // corruption, not a payload.
    if payload_len > cap {
        return Err(StegoError::NoPayloadFound);
    }

    debug!(
        "reveal: pixel offset {}, declared payload {} bytes",
        info.pixel_offset, payload_len
    );

    let mut payload = Vec::with_capacity(payload_len);
    for _ in 0..payload_len {
        let (byte, next) = bits::extract_byte(carrier, cursor)?;
        payload.push(byte);
        cursor = next;
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_carrier(pixel_bytes: usize) -> Vec<u8> {
        let mut buf = vec![0u8; 54 + pixel_bytes];
        buf[0] = 0x42;
        buf[1] = 0x4D;
        buf[10..14].copy_from_slice(&54u32.to_le_bytes());
        // Deterministic non-trivial pixel pattern.
        for (i, byte) in buf[54..].iter_mut().enumerate() {
            *byte = (i as u8).wrapping_mul(31).wrapping_add(7);
        }
        buf
    }

    #[test]
    fn hide_reveal_roundtrip() {
        let carrier = make_carrier(4096);
        let payload = b"the quick brown fox".to_vec();
        let stego = hide(carrier, &payload).unwrap();
        assert_eq!(reveal(&stego).unwrap(), payload);
    }

    #[test]
    fn empty_payload_roundtrip() {
        let stego = hide(make_carrier(4096), &[]).unwrap();
        assert_eq!(reveal(&stego).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn carrier_length_unchanged() {
        let carrier = make_carrier(1024);
        let len = carrier.len();
        let stego = hide(carrier, b"abc").unwrap();
        assert_eq!(stego.len(), len);
    }

    #[test]
    fn untouched_carrier_has_no_payload() {
        let carrier = make_carrier(1024);
        assert!(matches!(reveal(&carrier), Err(StegoError::NoPayloadFound)));
    }

    #[test]
    fn payload_too_large_rejected() {
        // 80 pixel bytes: 10 slots, capacity = 2.
        let carrier = make_carrier(80);
        assert!(hide(carrier.clone(), b"ab").is_ok());
        assert!(matches!(
            hide(carrier, b"abc"),
            Err(StegoError::PayloadTooLarge)
        ));
    }

    #[test]
    fn header_region_preserved() {
        let carrier = make_carrier(4096);
        let header_before = carrier[..54].to_vec();
        let stego = hide(carrier, b"payload").unwrap();
        assert_eq!(&stego[..54], &header_before[..]);
    }

    #[test]
    fn corrupted_length_field_rejected() {
        let carrier = make_carrier(256);
        let mut stego = hide(carrier, b"hi").unwrap();
        // Force every bit of the embedded length field to 1: the declared
        // length becomes absurd while the magic stays intact.
        for byte in stego[54 + 32..54 + 64].iter_mut() {
            *byte |= 1;
        }
        assert!(matches!(reveal(&stego), Err(StegoError::NoPayloadFound)));
    }
}
