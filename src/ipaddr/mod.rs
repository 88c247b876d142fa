// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address value type covering both IPv4 and IPv6.

mod address;
mod probe;
mod strings;
mod v4;
mod v6;
mod version;

use std::{error, fmt};
use strings::*;

pub use address::Address;
pub use probe::{Probe, ProbeError, TcpProbe, DEFAULT_PROBE_PORT, DEFAULT_TIMEOUT};
pub use v4::Ipv4Address;
pub use v6::Ipv6Address;
pub use version::IpVersion;

pub const IPV4_BITS: u8 = 32;
pub const IPV6_BITS: u8 = 128;
pub const IPV4_BYTES: usize = 4;
pub const IPV6_BYTES: usize = 16;

/// Broad category of an [AddressError].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// empty input, unknown family or bad byte length
    InvalidAddress,
    /// text belongs to a family but breaks its grammar
    InvalidFormat,
    /// operands of different families
    IncompatibleVersions,
}

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    Empty,
    /// neither '.' nor ':' in the text
    UnknownVersion(String),
    /// byte length matches no family
    InvalidLength(usize),
    InvalidFormat(IpVersion, String),
    InvalidV4Octet(u32),
    InvalidV6Hextet(u32),
    /// operands are not the same IP family (v4 vs v6).
    Mismatch(IpVersion, IpVersion),
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::Empty
            | AddressError::UnknownVersion(_)
            | AddressError::InvalidLength(_) => ErrorKind::InvalidAddress,
            AddressError::InvalidFormat(..)
            | AddressError::InvalidV4Octet(_)
            | AddressError::InvalidV6Hextet(_) => ErrorKind::InvalidFormat,
            AddressError::Mismatch(..) => ErrorKind::IncompatibleVersions,
        }
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => {
                write!(f, "{ERR_EMPTY}")
            }
            AddressError::UnknownVersion(ip) => {
                write!(f, "{ERR_UNKNOWN_VER}: '{ip}'")
            }
            AddressError::InvalidLength(len) => {
                write!(f, "{ERR_LENGTH}: {len} (expected {IPV4_BYTES} or {IPV6_BYTES})")
            }
            AddressError::InvalidFormat(ver, ip) => {
                write!(f, "{ERR_FORMAT} ({ver}): '{ip}'")
            }
            AddressError::InvalidV4Octet(val) => {
                write!(f, "{ERR_V4_OCTET} {val}")
            }
            AddressError::InvalidV6Hextet(val) => {
                write!(f, "{ERR_V6_HEXTET} {val:#x}")
            }
            AddressError::Mismatch(a, b) => {
                write!(f, "{ERR_MISMATCH}: {a} - {b}")
            }
        }
    }
}

impl error::Error for AddressError {}

/* -------------------------------------------------------------------------- */
