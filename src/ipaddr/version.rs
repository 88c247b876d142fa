// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{AddressError, IPV4_BITS, IPV4_BYTES, IPV6_BITS, IPV6_BYTES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Character separating the groups of this family's text form.
    pub const fn separator(&self) -> char {
        match self {
            IpVersion::V4 => '.',
            IpVersion::V6 => ':',
        }
    }

    /// Width of the raw byte form.
    pub const fn byte_len(&self) -> usize {
        match self {
            IpVersion::V4 => IPV4_BYTES,
            IpVersion::V6 => IPV6_BYTES,
        }
    }

    pub const fn bits(&self) -> u8 {
        match self {
            IpVersion::V4 => IPV4_BITS,
            IpVersion::V6 => IPV6_BITS,
        }
    }

    /**
    Determine the IP version of a text form purely by separator presence.

    IPv6 wins when both separators are present, so IPv4-mapped literals
    such as `::ffff:10.0.0.1` are classified as IPv6. The grammar itself
    is *not* checked here.
    */
    pub fn detect(text: &str) -> Result<Self, AddressError> {
        if text.is_empty() {
            return Err(AddressError::Empty);
        }
        if text.contains(IpVersion::V6.separator()) {
            Ok(IpVersion::V6)
        } else if text.contains(IpVersion::V4.separator()) {
            Ok(IpVersion::V4)
        } else {
            Err(AddressError::UnknownVersion(text.into()))
        }
    }

    /// Version matching a raw byte length, if any.
    pub fn from_byte_len(len: usize) -> Result<Self, AddressError> {
        match len {
            IPV4_BYTES => Ok(IpVersion::V4),
            IPV6_BYTES => Ok(IpVersion::V6),
            _ => Err(AddressError::InvalidLength(len)),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipaddr::ErrorKind;

    #[test]
    fn test_detect() {
        assert_eq!(IpVersion::detect("192.168.1.1"), Ok(IpVersion::V4));
        assert_eq!(IpVersion::detect("2001:db8::1"), Ok(IpVersion::V6));
        assert_eq!(IpVersion::detect("::ffff:10.0.0.1"), Ok(IpVersion::V6));
        // separator presence only, grammar comes later
        assert_eq!(IpVersion::detect("1.2.3.4:80"), Ok(IpVersion::V6));
        assert_eq!(IpVersion::detect("not.an.ip"), Ok(IpVersion::V4));
    }

    #[test]
    fn test_detect_errors() {
        assert_eq!(IpVersion::detect(""), Err(AddressError::Empty));
        let err = IpVersion::detect("localhost").unwrap_err();
        assert_eq!(err, AddressError::UnknownVersion("localhost".into()));
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    }

    #[test]
    fn test_widths() {
        assert_eq!(IpVersion::V4.byte_len(), 4);
        assert_eq!(IpVersion::V6.byte_len(), 16);
        assert_eq!(IpVersion::V4.bits() as usize, IpVersion::V4.byte_len() * 8);
        assert_eq!(IpVersion::V6.bits() as usize, IpVersion::V6.byte_len() * 8);
        assert_eq!(IpVersion::from_byte_len(4), Ok(IpVersion::V4));
        assert_eq!(IpVersion::from_byte_len(16), Ok(IpVersion::V6));
        assert_eq!(IpVersion::from_byte_len(5), Err(AddressError::InvalidLength(5)));
    }

    #[test]
    fn test_order() {
        assert!(IpVersion::V4 < IpVersion::V6);
    }
}
