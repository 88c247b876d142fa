// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{AddressError, IpVersion, Ipv4Address, Ipv6Address};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};
use tracing::debug;

/**
An IP address of either family.

Built once from text or raw bytes and never mutated afterwards.

- equality and hashing use the version and the raw bytes, never the text
- ordering is by version first (every IPv4 address sorts before every
  IPv6 address), then by the bytes read as an unsigned big-endian integer
- [Clone] yields a fully independent copy
*/
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Address {
    V4(Ipv4Address),
    V6(Ipv6Address),
}

impl Address {
    /**
    Parse an address from text.

    The family is decided by separator alone before any grammar check:
    text containing `:` is IPv6 (also when it contains `.`), otherwise
    text containing `.` is IPv4.

    ### Errors
    - [AddressError::Empty] / [AddressError::UnknownVersion] when no
      family can be determined
    - a format error when the text breaks the grammar of its family
    */
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let parsed = IpVersion::detect(text).and_then(|version| match version {
            IpVersion::V4 => Ipv4Address::parse(text).map(Address::V4),
            IpVersion::V6 => Ipv6Address::parse(text).map(Address::V6),
        });
        if let Err(e) = &parsed {
            debug!(input = text, error = %e, "rejected address text");
        }
        parsed
    }

    /// Build an address from raw big-endian bytes: 4 for IPv4, 16 for IPv6.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let built = IpVersion::from_byte_len(bytes.len()).and_then(|version| match version {
            IpVersion::V4 => Ipv4Address::from_bytes(bytes).map(Address::V4),
            IpVersion::V6 => Ipv6Address::from_bytes(bytes).map(Address::V6),
        });
        if let Err(e) = &built {
            debug!(len = bytes.len(), error = %e, "rejected address bytes");
        }
        built
    }

    pub fn version(&self) -> IpVersion {
        match self {
            Address::V4(_) => IpVersion::V4,
            Address::V6(_) => IpVersion::V6,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Address::V6(_))
    }

    /// The text form, exactly as supplied or rendered at construction.
    pub fn as_str(&self) -> &str {
        match self {
            Address::V4(ip) => ip.as_str(),
            Address::V6(ip) => ip.as_str(),
        }
    }

    /// A fresh copy of the raw bytes. Changing it does not affect `self`.
    pub fn raw_bytes(&self) -> Vec<u8> {
        match self {
            Address::V4(ip) => ip.octets().to_vec(),
            Address::V6(ip) => ip.octets().to_vec(),
        }
    }

    /// The address as an unsigned integer of its family's width.
    pub fn to_u128(&self) -> u128 {
        match self {
            Address::V4(ip) => ip.to_u32() as u128,
            Address::V6(ip) => ip.to_u128(),
        }
    }

    /**
    Add two addresses of the same family as unsigned integers.

    The sum wraps modulo 2^32 (IPv4) or 2^128 (IPv6); the result's text
    form is rendered from its bytes.

    ### Errors
    [AddressError::Mismatch] if the families differ.
    */
    pub fn plus(&self, other: &Address) -> Result<Address, AddressError> {
        match (self, other) {
            (Address::V4(a), Address::V4(b)) => Ok(Address::V4(a.wrapping_add(b))),
            (Address::V6(a), Address::V6(b)) => Ok(Address::V6(a.wrapping_add(b))),
            _ => Err(AddressError::Mismatch(self.version(), other.version())),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<Ipv4Address> for Address {
    fn from(ip: Ipv4Address) -> Self {
        Address::V4(ip)
    }
}

impl From<Ipv6Address> for Address {
    fn from(ip: Ipv6Address) -> Self {
        Address::V6(ip)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::V4(v4.into()),
            IpAddr::V6(v6) => Address::V6(v6.into()),
        }
    }
}

impl From<&Address> for IpAddr {
    fn from(ip: &Address) -> Self {
        match ip {
            Address::V4(v4) => IpAddr::V4(Ipv4Addr::from(v4)),
            Address::V6(v6) => IpAddr::V6(Ipv6Addr::from(v6)),
        }
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipaddr::ErrorKind;
    use std::{
        cmp::Ordering,
        collections::{hash_map::DefaultHasher, HashSet},
        hash::{Hash, Hasher},
    };

    const TEST_V4: &str = "192.168.1.1";
    const TEST_V6: &str = "2001:db8::1";
    const TEST_V6_UPPER: &str = "2001:DB8::1";
    const TEST_MAPPED: &str = "::ffff:1.2.3.4";

    fn addr(text: &str) -> Address {
        Address::parse(text).unwrap()
    }

    fn hash_of(a: &Address) -> u64 {
        let mut h = DefaultHasher::new();
        a.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_parse_v4() {
        let a: Address = addr(TEST_V4);
        assert_eq!(a.version(), IpVersion::V4);
        assert_eq!(a.raw_bytes(), vec![192, 168, 1, 1]);
        assert_eq!(a.to_string(), TEST_V4);
        assert!(a.is_ipv4());
    }

    #[test]
    fn test_parse_v6() {
        let a: Address = addr(TEST_V6);
        assert_eq!(a.version(), IpVersion::V6);
        assert_eq!(a.raw_bytes().len(), 16);
        assert_eq!(a.to_string(), TEST_V6);
        assert!(a.is_ipv6());
    }

    #[test]
    fn test_mapped_is_v6() {
        let a: Address = addr(TEST_MAPPED);
        assert_eq!(a.version(), IpVersion::V6);
        assert_eq!(&a.raw_bytes()[10..], &[0xff, 0xff, 1, 2, 3, 4]);
    }

    #[rustfmt::skip]
    #[test]
    fn test_parse_errors() {
        let tests: Vec<(&str, ErrorKind)> = vec![
            ("",                ErrorKind::InvalidAddress),
            ("localhost",       ErrorKind::InvalidAddress),
            ("12345",           ErrorKind::InvalidAddress),
            ("999.1.1.1",       ErrorKind::InvalidFormat),
            ("1.2.3",           ErrorKind::InvalidFormat),
            ("1.2.3.4:80",      ErrorKind::InvalidFormat),
            ("2001:db8::g",     ErrorKind::InvalidFormat),
        ];
        for (text, kind) in tests {
            let err: AddressError = Address::parse(text).unwrap_err();
            assert_eq!(err.kind(), kind, "Failed: '{text}'");
        }
        assert_eq!(Address::parse(""), Err(AddressError::Empty));
        assert_eq!(Address::parse("999.1.1.1"), Err(AddressError::InvalidV4Octet(999)));
    }

    #[test]
    fn test_from_bytes() {
        let v4: Vec<u8> = vec![10, 0, 0, 1];
        let a: Address = Address::from_bytes(&v4).unwrap();
        assert_eq!(a.version(), IpVersion::V4);
        assert_eq!(a.raw_bytes(), v4);
        assert_eq!(a.to_string(), "10.0.0.1");

        let mut v6: Vec<u8> = vec![0; 16];
        v6[15] = 1;
        let b: Address = Address::try_from(v6.as_slice()).unwrap();
        assert_eq!(b.version(), IpVersion::V6);
        assert_eq!(b.raw_bytes(), v6);
        assert_eq!(b.to_string(), "::1");
    }

    #[test]
    fn test_from_bytes_bad_length() {
        for len in [0usize, 1, 3, 5, 15, 17, 32] {
            let err: AddressError = Address::from_bytes(&vec![1u8; len]).unwrap_err();
            assert_eq!(err, AddressError::InvalidLength(len));
            assert_eq!(err.kind(), ErrorKind::InvalidAddress);
        }
    }

    #[test]
    fn test_text_and_bytes_agree() {
        for text in [TEST_V4, "0.0.0.0", "255.255.255.255", TEST_V6, "::", "fe80::1:2"] {
            let a: Address = addr(text);
            let b: Address = Address::from_bytes(&a.raw_bytes()).unwrap();
            assert_eq!(a, b);
            assert_eq!(b.to_string(), text);
            assert_eq!(addr(b.as_str()).raw_bytes(), a.raw_bytes());
        }
    }

    #[test]
    fn test_raw_bytes_are_copies() {
        let a: Address = addr(TEST_V4);
        let mut bytes: Vec<u8> = a.raw_bytes();
        bytes[0] = 0;
        assert_eq!(a.raw_bytes(), vec![192, 168, 1, 1]);

        let copy: Address = a.clone();
        assert_eq!(a, copy);
        assert_eq!(copy.to_string(), a.to_string());

        let mut copy_bytes: Vec<u8> = copy.raw_bytes();
        copy_bytes[3] = 99;
        assert_eq!(a.raw_bytes(), vec![192, 168, 1, 1]);
        assert_eq!(copy.raw_bytes(), vec![192, 168, 1, 1]);
    }

    #[test]
    fn test_equality_ignores_text() {
        let lower: Address = addr(TEST_V6);
        let upper: Address = addr(TEST_V6_UPPER);
        assert_eq!(lower, upper);
        assert_eq!(hash_of(&lower), hash_of(&upper));
        assert_eq!(upper.to_string(), TEST_V6_UPPER);

        let set: HashSet<Address> = [lower, upper].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_cross_family_never_equal() {
        let v4: Address = Address::from_bytes(&[0, 0, 0, 1]).unwrap();
        let v6: Address = addr("::1");
        assert_eq!(v4.to_u128(), v6.to_u128());
        assert_ne!(v4, v6);
    }

    #[test]
    fn test_ordering() {
        let a: Address = addr("10.0.0.1");
        let b: Address = addr("10.0.0.2");
        let c: Address = addr("192.168.0.1");
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert!(a < b && b < c && a < c);

        // version first
        let v4_max: Address = addr("255.255.255.255");
        let v6_min: Address = addr("::");
        assert!(v4_max < v6_min);

        let mut sorted: Vec<Address> = vec![addr("::2"), c.clone(), addr("::1"), a.clone()];
        sorted.sort();
        let texts: Vec<String> = sorted.iter().map(|a| a.to_string()).collect();
        assert_eq!(texts, vec!["10.0.0.1", "192.168.0.1", "::1", "::2"]);
    }

    #[test]
    fn test_plus() {
        let a: Address = addr("10.0.0.1");
        let b: Address = addr("0.0.1.255");
        let sum: Address = a.plus(&b).unwrap();
        assert_eq!(sum.to_string(), "10.0.2.0");
        assert_eq!(sum, b.plus(&a).unwrap());

        let x: Address = addr("2001:db8::ffff");
        let y: Address = addr("::1");
        assert_eq!(x.plus(&y).unwrap().to_string(), "2001:db8::1:0");
        assert_eq!(x.plus(&y).unwrap(), y.plus(&x).unwrap());
    }

    #[test]
    fn test_plus_wraps() {
        let max: Address = addr("255.255.255.255");
        let one: Address = addr("0.0.0.1");
        assert_eq!(max.plus(&one).unwrap().to_string(), "0.0.0.0");
    }

    #[test]
    fn test_plus_mismatch() {
        let v4: Address = addr(TEST_V4);
        let v6: Address = addr(TEST_V6);
        let err: AddressError = v4.plus(&v6).unwrap_err();
        assert_eq!(err, AddressError::Mismatch(IpVersion::V4, IpVersion::V6));
        assert_eq!(err.kind(), ErrorKind::IncompatibleVersions);
        assert_eq!(v6.plus(&v4).unwrap_err().kind(), ErrorKind::IncompatibleVersions);
    }

    #[test]
    fn test_std_conversions() {
        let ip: IpAddr = TEST_V4.parse().unwrap();
        let a: Address = ip.into();
        assert_eq!(a, addr(TEST_V4));
        assert_eq!(IpAddr::from(&a), ip);

        let ip6: IpAddr = TEST_V6.parse().unwrap();
        assert_eq!(IpAddr::from(&addr(TEST_V6_UPPER)), ip6);
    }

    #[test]
    fn test_serde() {
        let a: Address = addr(TEST_V6_UPPER);
        let json: String = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"2001:DB8::1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert_eq!(back.to_string(), TEST_V6_UPPER);

        assert!(serde_json::from_str::<Address>("\"999.1.1.1\"").is_err());
        assert_eq!(serde_json::to_string(&IpVersion::V4).unwrap(), "\"V4\"");
    }
}
