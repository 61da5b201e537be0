// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static SLASH: &str = "/";
pub(crate) static DOUBLE_COLON: &str = "::";

// lib.rs
pub(crate) static ERR_INVALID_IP: &str = "invalid IP address";
pub(crate) static ERR_CIDR_FMT: &str = "invalid CIDR subnet";
pub(crate) static ERR_FAMILY: &str = "family must be ipv4 or ipv6";
pub(crate) static ERR_BUF_SMALL: &str = "destination buffer too small";

// structs.rs
pub(crate) static FAM_V4: &str = "ipv4";
pub(crate) static FAM_V6: &str = "ipv6";

// classify.rs
pub(crate) static LOOPBACK_V4: &str = "127.0.0.1";
pub(crate) static LOOPBACK_V6: &str = "fe80::1";

// interfaces.rs
pub(crate) static SEL_PUBLIC: &str = "public";
pub(crate) static SEL_PRIVATE: &str = "private";
