// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{codec, AddrError, IPV4_LEN};

/// Bitwise complement of every byte, reformatted. Family-preserving.
pub fn not(addr: impl AsRef<str>) -> Result<String, AddrError> {
    let mut buf: Vec<u8> = codec::parse(addr.as_ref())?;
    for b in buf.iter_mut() {
        *b = !*b;
    }
    Ok(codec::format(&buf))
}

/**
Bitwise OR of two addresses.

Same-length operands combine over the full width. With mixed families
the 4-byte operand folds into the last 4 bytes of the 16-byte operand,
whose leading bytes pass through; the longer buffer is formatted.
*/
pub fn or(a: impl AsRef<str>, b: impl AsRef<str>) -> Result<String, AddrError> {
    let mut a: Vec<u8> = codec::parse(a.as_ref())?;
    let mut b: Vec<u8> = codec::parse(b.as_ref())?;

    if a.len() == b.len() {
        for (x, y) in a.iter_mut().zip(&b) {
            *x |= y;
        }
        return Ok(codec::format(&a));
    }

    if b.len() > a.len() {
        std::mem::swap(&mut a, &mut b);
    }
    let offset: usize = a.len() - b.len();
    for (i, y) in b.iter().enumerate() {
        a[offset + i] |= y;
    }
    Ok(codec::format(&a))
}

/**
Bitwise AND of an address with a mask, bridging families:
- equal lengths combine element-wise;
- a 4-byte mask against a 16-byte address applies to the address's last
  4 bytes, which land in the low 4 bytes of an otherwise zero 16-byte
  result;
- a 16-byte mask against a 4-byte address builds the `::ffff:a.b.c.d`
  mapped form, masking the embedded quad with the mask's last 4 bytes.

Every output byte not written above is zero.
*/
pub fn mask(addr: impl AsRef<str>, mask: impl AsRef<str>) -> Result<String, AddrError> {
    let addr: Vec<u8> = codec::parse(addr.as_ref())?;
    let mask: Vec<u8> = codec::parse(mask.as_ref())?;

    let mut out: Vec<u8> = vec![0; addr.len().max(mask.len())];

    if addr.len() == mask.len() {
        for i in 0..addr.len() {
            out[i] = addr[i] & mask[i];
        }
    } else if mask.len() == IPV4_LEN {
        let tail: usize = out.len() - IPV4_LEN;
        for i in 0..IPV4_LEN {
            out[tail + i] = addr[addr.len() - IPV4_LEN + i] & mask[i];
        }
    } else {
        out[10] = 0xff;
        out[11] = 0xff;
        for i in 0..IPV4_LEN {
            out[12 + i] = addr[i] & mask[12 + i];
        }
    }

    Ok(codec::format(&out))
}

/* -------------------------------------------------------------------------- */
