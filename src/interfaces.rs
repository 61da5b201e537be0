// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    classify,
    strings::*,
    structs::{InterfaceTable, IpFam},
};
use tracing::debug;

/**
Select an address from a caller-supplied interface table.

`selector` is either a concrete interface name, or `"public"` /
`"private"` (the default when `None`). A named interface yields its
first address of the requested family, `None` when the interface or a
matching record is absent. The public/private selectors scan every
interface in table order, skip loopback addresses, and yield the first
address of the requested family whose classification matches; when
nothing matches they fall back to the family's loopback address.

`family` defaults to IPv4.
*/
pub fn address(
    selector: Option<&str>,
    family: Option<IpFam>,
    table: &InterfaceTable,
) -> Option<String> {
    let family: IpFam = family.unwrap_or_default();
    let selector: &str = selector.unwrap_or(SEL_PRIVATE);

    if selector != SEL_PRIVATE && selector != SEL_PUBLIC {
        let found: Option<String> = table
            .get(selector)?
            .iter()
            .find(|rec| rec.family == family)
            .map(|rec| rec.address.clone());
        debug!(interface = selector, family = %family, found = found.is_some(), "interface lookup");
        return found;
    }

    let want_public: bool = selector == SEL_PUBLIC;
    for (name, records) in table {
        for rec in records {
            if rec.family != family || classify::is_loopback(&rec.address) {
                continue;
            }
            if classify::is_public(&rec.address) == want_public {
                debug!(interface = %name, address = %rec.address, "selected {selector} address");
                return Some(rec.address.clone());
            }
        }
    }

    debug!(family = %family, "no {selector} address found, falling back to loopback");
    Some(classify::loopback(family).to_string())
}

/* -------------------------------------------------------------------------- */
