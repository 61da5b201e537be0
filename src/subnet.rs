// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    bitwise, classify, codec,
    strings::*,
    structs::{IpFam, SubnetInfo},
    AddrError, IPV4_BITS,
};

/**
Build a subnet mask from a prefix length.

Family defaults to IPv4; a prefix over 32 forces IPv6 regardless of the
argument. Oversized prefixes saturate the mask rather than fail.
*/
pub fn from_prefix_len(prefix_len: u8, family: Option<IpFam>) -> String {
    let family: IpFam = if prefix_len > IPV4_BITS {
        IpFam::V6
    } else {
        family.unwrap_or_default()
    };

    let mut buf: Vec<u8> = vec![0; family.byte_len()];
    let mut remaining: u8 = prefix_len;
    for b in buf.iter_mut() {
        let bits: u8 = remaining.min(8);
        remaining -= bits;
        *b = (!(0xffu16 >> bits) & 0xff) as u8;
    }
    codec::format(&buf)
}

/**
Derive the subnet facts for an address under a mask: network address,
usable range, broadcast, mask bit length and address/host counts.

The counts are 32-bit-long based, so they are only meaningful for
IPv4-shaped masks. A /31 or /32 leaves no reserved addresses: the range
covers the whole subnet and `num_hosts` equals `length`.

### Errors
Parse failures of either argument propagate unwrapped.
*/
pub fn subnet(addr: impl AsRef<str>, mask_str: impl AsRef<str>) -> Result<SubnetInfo, AddrError> {
    let mask_str: &str = mask_str.as_ref();
    let network: u64 = classify::to_long(bitwise::mask(addr.as_ref(), mask_str)?) as u64;

    let mask_buf: Vec<u8> = codec::parse(mask_str)?;
    let mask_len: u8 = mask_buf.iter().map(|b| b.leading_ones() as u8).sum();

    let host_bits: u8 = IPV4_BITS.saturating_sub(mask_len);
    let length: u64 = 1u64 << host_bits;

    let (first, last, num_hosts) = if length <= 2 {
        (network, network + length - 1, length)
    } else {
        (network + 1, network + length - 2, length - 2)
    };

    Ok(SubnetInfo {
        network_address: classify::from_long(network as u32),
        first_address: classify::from_long(first as u32),
        last_address: classify::from_long(last as u32),
        broadcast_address: classify::from_long((network + length - 1) as u32),
        subnet_mask: mask_str.to_string(),
        subnet_mask_length: mask_len,
        length,
        num_hosts,
    })
}

/// Mask an address in CIDR notation down to its network address.
pub fn cidr(s: impl AsRef<str>) -> Result<String, AddrError> {
    let (addr, mask_str) = split_cidr(s.as_ref())?;
    bitwise::mask(addr, mask_str)
}

/// Derive the full [SubnetInfo] for an address in CIDR notation.
pub fn cidr_subnet(s: impl AsRef<str>) -> Result<SubnetInfo, AddrError> {
    let (addr, mask_str) = split_cidr(s.as_ref())?;
    subnet(addr, mask_str)
}

/// Split `addr/prefix` and render the prefix as a mask.
fn split_cidr(s: &str) -> Result<(&str, String), AddrError> {
    let parts: Vec<&str> = s.split(SLASH).collect();
    if parts.len() != 2 {
        return Err(AddrError::InvalidCidr(s.to_string()));
    }
    let prefix: u8 = parts[1]
        .parse()
        .map_err(|_| AddrError::InvalidCidr(s.to_string()))?;
    Ok((parts[0], from_prefix_len(prefix, None)))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "192.168.1.134";
    const MASK_26: &str = "255.255.255.192";
    const MASK_31: &str = "255.255.255.254";
    const MASK_32: &str = "255.255.255.255";

    #[test]
    fn test_from_prefix_len_v4() {
        assert_eq!(from_prefix_len(24, None), "255.255.255.0");
        assert_eq!(from_prefix_len(26, None), MASK_26);
        assert_eq!(from_prefix_len(0, None), "0.0.0.0");
        assert_eq!(from_prefix_len(32, None), MASK_32);
    }

    #[test]
    fn test_from_prefix_len_v6() {
        assert_eq!(from_prefix_len(64, None), "ffff:ffff:ffff:ffff::");
        assert_eq!(from_prefix_len(24, Some(IpFam::V6)), "ffff:ff00::");
        assert_eq!(from_prefix_len(33, None), "ffff:ffff:8000::");
        assert_eq!(
            from_prefix_len(128, Some(IpFam::V6)),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_subnet_26() {
        let info: SubnetInfo = subnet(ADDR, MASK_26).unwrap();
        assert_eq!(info.network_address, "192.168.1.128");
        assert_eq!(info.first_address, "192.168.1.129");
        assert_eq!(info.last_address, "192.168.1.190");
        assert_eq!(info.broadcast_address, "192.168.1.191");
        assert_eq!(info.subnet_mask, MASK_26);
        assert_eq!(info.subnet_mask_length, 26);
        assert_eq!(info.length, 64);
        assert_eq!(info.num_hosts, 62);
    }

    #[test]
    fn test_subnet_contains() {
        let info: SubnetInfo = subnet(ADDR, MASK_26).unwrap();
        assert!(info.contains("192.168.1.180"));
        assert!(!info.contains("192.168.1.195"));
        assert!(!info.contains("not an address"));
    }

    #[test]
    fn test_subnet_32_boundary() {
        let info: SubnetInfo = subnet(ADDR, MASK_32).unwrap();
        assert_eq!(info.first_address, ADDR);
        assert_eq!(info.last_address, ADDR);
        assert_eq!(info.broadcast_address, ADDR);
        assert_eq!(info.length, 1);
        assert_eq!(info.num_hosts, 1);
    }

    #[test]
    fn test_subnet_31_boundary() {
        let info: SubnetInfo = subnet(ADDR, MASK_31).unwrap();
        assert_eq!(info.first_address, "192.168.1.134");
        assert_eq!(info.last_address, "192.168.1.135");
        assert_eq!(info.length, 2);
        assert_eq!(info.num_hosts, 2);
    }

    #[test]
    fn test_subnet_zero_mask() {
        let info: SubnetInfo = subnet("1.2.3.4", "0.0.0.0").unwrap();
        assert_eq!(info.network_address, "0.0.0.0");
        assert_eq!(info.first_address, "0.0.0.1");
        assert_eq!(info.last_address, "255.255.255.254");
        assert_eq!(info.broadcast_address, "255.255.255.255");
        assert_eq!(info.length, 1u64 << 32);
        assert_eq!(info.num_hosts, (1u64 << 32) - 2);
    }

    #[test]
    fn test_cidr() {
        assert_eq!(cidr("192.168.1.134/26").unwrap(), "192.168.1.128");
        assert_eq!(cidr("2607:f0d0:1002:51::4/56").unwrap(), "2607:f0d0:1002::");
    }

    #[test]
    fn test_cidr_subnet() {
        let info: SubnetInfo = cidr_subnet("192.168.1.134/26").unwrap();
        assert_eq!(info.network_address, "192.168.1.128");
        assert_eq!(info.first_address, "192.168.1.129");
        assert_eq!(info.last_address, "192.168.1.190");
        assert_eq!(info.broadcast_address, "192.168.1.191");
        assert_eq!(info.subnet_mask, MASK_26);
        assert_eq!(info.subnet_mask_length, 26);
        assert_eq!(info.length, 64);
        assert_eq!(info.num_hosts, 62);
        assert!(info.contains("192.168.1.180"));
        assert!(!info.contains("192.168.1.195"));
    }

    #[test]
    fn test_cidr_rejects_malformed() {
        for bad in ["10.0.0.0", "10.0.0.0/8/8", "10.0.0.0/abc", "10.0.0.0/"] {
            assert_eq!(cidr(bad), Err(AddrError::InvalidCidr(bad.to_string())), "accepted: '{bad}'");
            assert!(cidr_subnet(bad).is_err());
        }
    }
}
