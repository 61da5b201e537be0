// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address parsing/formatting, bitwise subnet algebra and classification.
//!
//! Addresses travel as text or as raw network-order bytes (4 for IPv4,
//! 16 for IPv6); the family of a buffer is inferred from its length.

mod bitwise;
mod classify;
mod codec;
mod interfaces;
mod strings;
mod structs;
mod subnet;

use std::{error, fmt};
use strings::*;

pub use bitwise::{mask, not, or};
pub use classify::{
    from_long, is_equal, is_loopback, is_private, is_public, loopback, to_long,
};
pub use codec::{format, is_v4_format, is_v6_format, parse, parse_into, read_u16be, to_hex};
pub use interfaces::address;
pub use structs::{InterfaceAddr, InterfaceTable, IpFam, SubnetInfo};
pub use subnet::{cidr, cidr_subnet, from_prefix_len, subnet};

pub(crate) const IPV4_LEN: usize = 4;
pub(crate) const IPV6_LEN: usize = 16;
pub(crate) const IPV4_BITS: u8 = 32;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddrError {
    /// text matches neither the IPv4 nor the IPv6 structural pattern
    Invalid(String),
    /// CIDR text is not exactly `addr/prefix`
    InvalidCidr(String),
    /// family is neither ipv4 nor ipv6
    InvalidFamily(String),
    /// caller-supplied destination cannot hold the encoding
    BufferTooSmall { needed: usize, got: usize },
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrError::Invalid(ip) => {
                write!(f, "{ERR_INVALID_IP}: '{ip}'")
            }
            AddrError::InvalidCidr(s) => {
                write!(f, "{ERR_CIDR_FMT}: '{s}'")
            }
            AddrError::InvalidFamily(fam) => {
                write!(f, "{ERR_FAMILY}: '{fam}'")
            }
            AddrError::BufferTooSmall { needed, got } => {
                write!(f, "{ERR_BUF_SMALL}: need {needed}, got {got}")
            }
        }
    }
}

impl error::Error for AddrError {}
