// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Typed IP address values for IPv4 and IPv6.

An [Address] is built once from text or raw bytes, validated against the
grammar of its family, and is immutable afterwards. It compares, hashes,
prints and adds like a value. The reachability check is the only
operation touching the network; it reports through an [Outcome] instead
of failing.

```ignore
use ipaddress::Address;

let a: Address = "10.0.0.1".parse()?;
let b: Address = Address::from_bytes(&[0, 0, 0, 255])?;
assert_eq!(a.plus(&b)?.to_string(), "10.0.1.0");
```
*/

pub mod ipaddr;
mod outcome;

pub use ipaddr::{
    Address, AddressError, ErrorKind, IpVersion, Ipv4Address, Ipv6Address, Probe, ProbeError,
    TcpProbe,
};
pub use outcome::{BoxError, Outcome, OutcomeCode};
