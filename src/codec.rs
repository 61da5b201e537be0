// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, AddrError, IPV4_LEN, IPV6_LEN};

const V6_GROUPS: usize = 8;

/**
Whether the text is structurally dotted-quad: four dot-separated groups
of 1-3 decimal digits.

Purely structural, like the classification patterns: `999.1.1.1`
matches here and is only rejected by [parse], which range-checks.
*/
pub fn is_v4_format(ip: impl AsRef<str>) -> bool {
    let mut groups: usize = 0;
    for part in ip.as_ref().split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        groups += 1;
    }
    groups == 4
}

/**
Whether the text is structurally colon-hex IPv6: groups of up to 4 hex
digits (either case), at most one `::` marker, dotted-quad groups
allowed and counting as two. Exactly 8 groups without the marker;
abbreviations beyond a single `::` are not recognized.
*/
pub fn is_v6_format(ip: impl AsRef<str>) -> bool {
    parse_v6_groups(ip.as_ref()).is_ok()
}

/**
Parse dotted-quad or colon-hex text into freshly allocated address
bytes: 4 or 16, network byte order.

### Errors
[AddrError::Invalid] when the text matches neither family pattern, or
an octet is out of range.
*/
pub fn parse(ip: impl AsRef<str>) -> Result<Vec<u8>, AddrError> {
    let ip: &str = ip.as_ref();

    if let Some(quad) = parse_v4_octets(ip) {
        return Ok(quad.to_vec());
    }

    let groups: [u16; V6_GROUPS] = parse_v6_groups(ip)?;
    let mut out: Vec<u8> = Vec::with_capacity(IPV6_LEN);
    for g in groups {
        out.extend_from_slice(&g.to_be_bytes());
    }
    Ok(out)
}

/**
In-place variant of [parse]: writes the encoded bytes at the start of
`out` and returns the written subslice. The caller keeps ownership of
the buffer and expresses an offset by slicing the destination.

### Errors
[AddrError::Invalid] as for [parse]; [AddrError::BufferTooSmall] when
`out` cannot hold the encoding.
*/
pub fn parse_into<'a>(ip: impl AsRef<str>, out: &'a mut [u8]) -> Result<&'a [u8], AddrError> {
    let ip: &str = ip.as_ref();

    if let Some(quad) = parse_v4_octets(ip) {
        check_dst(out, IPV4_LEN)?;
        out[..IPV4_LEN].copy_from_slice(&quad);
        return Ok(&out[..IPV4_LEN]);
    }

    let groups: [u16; V6_GROUPS] = parse_v6_groups(ip)?;
    check_dst(out, IPV6_LEN)?;
    for (i, g) in groups.iter().enumerate() {
        out[i * 2..i * 2 + 2].copy_from_slice(&g.to_be_bytes());
    }
    Ok(&out[..IPV6_LEN])
}

/**
Render address bytes back to text: length 4 as dotted decimal, length
16 as colon-hex with the first run of two or more all-zero groups
compressed to `::` (a lone zero group is never compressed). Any other
length renders an empty string.
*/
pub fn format(bytes: &[u8]) -> String {
    match bytes.len() {
        IPV4_LEN => {
            let octets: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
            octets.join(".")
        }
        IPV6_LEN => format_v6(bytes),
        _ => String::new(),
    }
}

/// Two lowercase hex digits per byte, no separators. Offset/end are
/// expressed by slicing.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        hex.push_str(&format!("{b:02x}"));
    }
    hex
}

/// Combine two consecutive bytes big-endian into a 16-bit group.
pub fn read_u16be(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
}

/* ---------------------------------- */

/// Strict dotted-quad scan: structure per [is_v4_format] plus 0-255
/// octet range.
fn parse_v4_octets(ip: &str) -> Option<[u8; IPV4_LEN]> {
    if !is_v4_format(ip) {
        return None;
    }
    let mut out: [u8; IPV4_LEN] = [0; IPV4_LEN];
    for (i, part) in ip.split('.').enumerate() {
        out[i] = part.parse::<u8>().ok()?;
    }
    Some(out)
}

/**
Expand IPv6 text into its eight 16-bit groups.

Embedded dotted-quads become two groups each; a single `::` marker
expands to however many zero groups reach eight (at the front, back or
interior gap position). Without the marker exactly eight groups are
required.
*/
fn parse_v6_groups(ip: &str) -> Result<[u16; V6_GROUPS], AddrError> {
    let invalid = || AddrError::Invalid(ip.to_string());

    if ip.is_empty() || ip.matches(DOUBLE_COLON).count() > 1 {
        return Err(invalid());
    }

    let (head, tail) = match ip.split_once(DOUBLE_COLON) {
        Some((h, t)) => (h, Some(t)),
        None => (ip, None),
    };

    let mut groups: Vec<u16> = Vec::with_capacity(V6_GROUPS);
    if !expand_part(head, &mut groups) {
        return Err(invalid());
    }
    let gap: Option<usize> = tail.map(|_| groups.len());
    if let Some(tail) = tail {
        if !expand_part(tail, &mut groups) {
            return Err(invalid());
        }
    }

    let mut full: [u16; V6_GROUPS] = [0; V6_GROUPS];
    match gap {
        Some(at) => {
            // marker stands for at least one zero group
            if groups.len() >= V6_GROUPS {
                return Err(invalid());
            }
            full[..at].copy_from_slice(&groups[..at]);
            full[V6_GROUPS - (groups.len() - at)..].copy_from_slice(&groups[at..]);
        }
        None => {
            if groups.len() != V6_GROUPS {
                return Err(invalid());
            }
            full.copy_from_slice(&groups);
        }
    }
    Ok(full)
}

/// Scan one colon-separated run (no `::` inside), pushing its 16-bit
/// groups. Empty input contributes nothing; a dotted-quad group
/// contributes two.
fn expand_part(part: &str, out: &mut Vec<u16>) -> bool {
    if part.is_empty() {
        return true;
    }
    for g in part.split(':') {
        if g.contains('.') {
            let quad: [u8; IPV4_LEN] = match parse_v4_octets(g) {
                Some(quad) => quad,
                None => return false,
            };
            out.push(u16::from_be_bytes([quad[0], quad[1]]));
            out.push(u16::from_be_bytes([quad[2], quad[3]]));
        } else {
            if g.is_empty() || g.len() > 4 || !g.bytes().all(|b| b.is_ascii_hexdigit()) {
                return false;
            }
            match u16::from_str_radix(g, 16) {
                Ok(v) => out.push(v),
                Err(_) => return false,
            }
        }
    }
    true
}

fn format_v6(bytes: &[u8]) -> String {
    let groups: Vec<u16> = (0..IPV6_LEN).step_by(2).map(|i| read_u16be(bytes, i)).collect();

    // locate the first run of two or more consecutive zero groups
    let mut run: Option<(usize, usize)> = None;
    let mut i: usize = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let beg: usize = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        if i - beg >= 2 {
            run = Some((beg, i));
            break;
        }
    }

    let hex = |gs: &[u16]| -> String {
        let parts: Vec<String> = gs.iter().map(|g| format!("{g:x}")).collect();
        parts.join(":")
    };

    match run {
        Some((beg, end)) => {
            format!("{}{DOUBLE_COLON}{}", hex(&groups[..beg]), hex(&groups[end..]))
        }
        None => hex(&groups),
    }
}

fn check_dst(out: &[u8], needed: usize) -> Result<(), AddrError> {
    if out.len() < needed {
        return Err(AddrError::BufferTooSmall { needed, got: out.len() });
    }
    Ok(())
}

/* -------------------------------------------------------------------------- */
