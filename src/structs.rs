// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{bitwise, classify, strings::*, AddrError, IPV4_LEN, IPV6_LEN};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// IP address family
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum IpFam {
    #[default]
    V4,
    V6,
}

impl IpFam {
    /// Address buffer length in bytes for this family.
    pub(crate) fn byte_len(&self) -> usize {
        match self {
            IpFam::V4 => IPV4_LEN,
            IpFam::V6 => IPV6_LEN,
        }
    }
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => write!(f, "{FAM_V4}"),
            IpFam::V6 => write!(f, "{FAM_V6}"),
        }
    }
}

impl FromStr for IpFam {
    type Err = AddrError;

    /// Case-insensitive `ipv4`/`ipv6`; anything else is [AddrError::InvalidFamily].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower: String = s.to_ascii_lowercase();
        if lower == FAM_V4 {
            Ok(IpFam::V4)
        } else if lower == FAM_V6 {
            Ok(IpFam::V6)
        } else {
            Err(AddrError::InvalidFamily(s.to_string()))
        }
    }
}

/* -------------------------------------------------------------------------- */

/// One address record of a network interface, as supplied by the caller.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct InterfaceAddr {
    pub address: String,
    pub family: IpFam,
}

/**
Caller-supplied mapping from interface name to its address records.

This stands in for OS interface enumeration, which is deliberately not
performed here; a BTreeMap keeps the "first matching address" selection
deterministic.
*/
pub type InterfaceTable = BTreeMap<String, Vec<InterfaceAddr>>;

/* -------------------------------------------------------------------------- */

/**
Derived facts about a subnet: the addresses at its range boundaries, the
mask and its bit length, and the address/host counts.

Counts and boundary math are 32-bit-long based and therefore only
meaningful for IPv4-shaped masks.
*/
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SubnetInfo {
    pub network_address: String,
    pub first_address: String,
    pub last_address: String,
    pub broadcast_address: String,
    pub subnet_mask: String,
    pub subnet_mask_length: u8,
    /// total addresses in the subnet
    pub length: u64,
    /// usable hosts (equals `length` for /31 and /32)
    pub num_hosts: u64,
}

impl SubnetInfo {
    /**
    Whether `other` falls inside this subnet.

    Re-derives the network address of `other` under this subnet's mask
    and compares; text that parses as neither family is simply outside.
    */
    pub fn contains(&self, other: impl AsRef<str>) -> bool {
        match bitwise::mask(other.as_ref(), &self.subnet_mask) {
            Ok(masked) => classify::to_long(masked) == classify::to_long(&self.network_address),
            Err(_) => false,
        }
    }
}

impl fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.network_address, self.subnet_mask_length)
    }
}

/* -------------------------------------------------------------------------- */
