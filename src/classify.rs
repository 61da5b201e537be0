// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{codec, strings::*, structs::IpFam, AddrError, IPV4_LEN};
use lazy_static::lazy_static;
use regex::Regex;

/*
Classification is textual on purpose: the boundaries below (10/8,
172.16-31, 192.168/16, 127/8, 169.254/16, fc00::/7, fe80::/10) are
pattern boundaries, not numeric range checks. The `(::f{4}:)?` marker
admits the IPv4-mapped form of each IPv4 range, any case.
*/
lazy_static! {
    static ref PRIVATE_RE: Vec<Regex> = vec![
        Regex::new(r"(?i)^(::f{4}:)?10\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap(),
        Regex::new(r"(?i)^(::f{4}:)?192\.168\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap(),
        Regex::new(r"(?i)^(::f{4}:)?172\.(1[6-9]|2\d|30|31)\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap(),
        Regex::new(r"(?i)^(::f{4}:)?127\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap(),
        Regex::new(r"(?i)^(::f{4}:)?169\.254\.([0-9]{1,3})\.([0-9]{1,3})$").unwrap(),
        Regex::new(r"(?i)^f[cd][0-9a-f]{2}:").unwrap(),
        Regex::new(r"(?i)^fe80:").unwrap(),
        Regex::new(r"^::1$").unwrap(),
        Regex::new(r"^::$").unwrap(),
    ];
    static ref LOOPBACK_RE: Vec<Regex> = vec![
        Regex::new(r"(?i)^(::f{4}:)?127\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})").unwrap(),
        Regex::new(r"^fe80::1$").unwrap(),
        Regex::new(r"^::1$").unwrap(),
        Regex::new(r"^::$").unwrap(),
    ];
}

/**
Whether the text denotes a private address: RFC 1918 ranges, loopback,
link-local and the IPv6 unique-local/unspecified/loopback forms, with
`::ffff:`-mapped spellings recognized throughout.
*/
pub fn is_private(addr: impl AsRef<str>) -> bool {
    PRIVATE_RE.iter().any(|re| re.is_match(addr.as_ref()))
}

/// Logical negation of [is_private].
pub fn is_public(addr: impl AsRef<str>) -> bool {
    !is_private(addr)
}

/// Whether the text denotes a loopback address: `127.x.x.x` in plain or
/// mapped form, `::1`, `::`, or the conventional `fe80::1`.
pub fn is_loopback(addr: impl AsRef<str>) -> bool {
    LOOPBACK_RE.iter().any(|re| re.is_match(addr.as_ref()))
}

/**
Byte-level equality across families.

Same-length buffers compare directly. A 4-byte buffer equals a 16-byte
one when the long form embeds it in its last 4 bytes behind ten zero
bytes and a `0x0000` or `0xffff` sixth group (the zero-prefixed and
IPv4-mapped embeddings).

### Errors
Parse failures of either argument propagate unwrapped.
*/
pub fn is_equal(a: impl AsRef<str>, b: impl AsRef<str>) -> Result<bool, AddrError> {
    let mut a: Vec<u8> = codec::parse(a.as_ref())?;
    let mut b: Vec<u8> = codec::parse(b.as_ref())?;

    if a.len() == b.len() {
        return Ok(a == b);
    }

    // orient: a short, b long
    if b.len() == IPV4_LEN {
        std::mem::swap(&mut a, &mut b);
    }

    if b[..10].iter().any(|&x| x != 0) {
        return Ok(false);
    }

    let word: u16 = codec::read_u16be(&b, 10);
    if word != 0 && word != 0xffff {
        return Ok(false);
    }

    Ok(b[12..] == a[..])
}

/**
Fold dotted-quad text into a host-order u32, most significant octet
first.

Permissive like the rest of the textual layer: octets that fail to
parse contribute zero and no family check is made, so feed it
dotted-quad text only.
*/
pub fn to_long(ip: impl AsRef<str>) -> u32 {
    ip.as_ref().split('.').fold(0u32, |acc, octet| {
        acc.wrapping_shl(8)
            .wrapping_add(octet.parse::<u32>().unwrap_or(0))
    })
}

/// Unfold a u32 into dotted-quad text. Inverse of [to_long].
pub fn from_long(ipl: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        ipl >> 24,
        (ipl >> 16) & 0xff,
        (ipl >> 8) & 0xff,
        ipl & 0xff
    )
}

/// The loopback address text for a family: `127.0.0.1` or `fe80::1`.
pub fn loopback(family: IpFam) -> &'static str {
    match family {
        IpFam::V4 => LOOPBACK_V4,
        IpFam::V6 => LOOPBACK_V6,
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const PRIVATE: [&str; 16] = [
        "127.0.0.1",
        "10.0.2.3", "10.1.23.45",
        "192.168.0.123", "192.168.122.123",
        "172.16.0.5", "172.16.123.254", "172.25.232.15", "172.31.255.255",
        "169.254.2.3", "169.254.221.9",
        "fd12:3456:789a:1::1", "fe80::f2de:f1ff:fe3f:307e",
        "::ffff:10.100.1.42", "::1", "::",
    ];

    #[rustfmt::skip]
    const PUBLIC: [&str; 9] = [
        "8.8.8.8", "165.225.132.33",
        "192.162.1.2", "171.16.0.5", "172.15.0.5", "172.32.0.5",
        "168.254.2.3", "12.1.2.3",
        "2607:f0d0:1002:51::4",
    ];

    #[test]
    fn test_is_private() {
        for addr in PRIVATE {
            assert!(is_private(addr), "not private: '{addr}'");
            assert!(!is_public(addr), "public: '{addr}'");
        }
    }

    #[test]
    fn test_is_public() {
        for addr in PUBLIC {
            assert!(is_public(addr), "not public: '{addr}'");
            assert!(!is_private(addr), "private: '{addr}'");
        }
    }

    #[test]
    fn test_mapped_forms_any_case() {
        assert!(is_private("::FFFF:172.16.200.1"));
        assert!(is_private("::ffff:192.168.0.1"));
        assert!(is_loopback("::ffff:127.0.0.1"));
    }

    #[test]
    fn test_is_loopback() {
        for addr in ["127.0.0.1", "127.8.8.8", "fe80::1", "::1", "::"] {
            assert!(is_loopback(addr), "not loopback: '{addr}'");
        }
        for addr in ["8.8.8.8", "192.168.1.1", "fe80::2", "fd00::1"] {
            assert!(!is_loopback(addr), "loopback: '{addr}'");
        }
    }

    #[test]
    fn test_is_equal_same_family() {
        assert!(is_equal("127.0.0.1", "127.0.0.1").unwrap());
        assert!(!is_equal("127.0.0.1", "127.0.0.2").unwrap());
        assert!(is_equal("::ffff:127.0.0.1", "::ffff:127.0.0.1").unwrap());
    }

    #[test]
    fn test_is_equal_mixed_family() {
        assert!(is_equal("127.0.0.1", "::7f00:1").unwrap());
        assert!(!is_equal("127.0.0.1", "::7f00:2").unwrap());
        assert!(is_equal("127.0.0.1", "::ffff:7f00:1").unwrap());
        assert!(!is_equal("127.0.0.1", "::ffaf:7f00:1").unwrap());
        assert!(is_equal("::ffff:127.0.0.1", "127.0.0.1").unwrap());
        assert!(!is_equal("1::7f00:1", "127.0.0.1").unwrap());
    }

    #[test]
    fn test_is_equal_propagates_errors() {
        assert!(is_equal("bogus", "127.0.0.1").is_err());
        assert!(is_equal("127.0.0.1", "bogus").is_err());
    }

    #[test]
    fn test_long_round_trip() {
        assert_eq!(to_long("127.0.0.1"), 2130706433);
        assert_eq!(to_long("255.255.255.255"), 4294967295);
        assert_eq!(from_long(2130706433), "127.0.0.1");
        assert_eq!(from_long(4294967295), "255.255.255.255");
        assert_eq!(from_long(0), "0.0.0.0");
    }

    #[test]
    fn test_loopback_text() {
        assert_eq!(loopback(IpFam::V4), "127.0.0.1");
        assert_eq!(loopback(IpFam::V6), "fe80::1");
    }
}
