// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{AddressError, IpVersion, IPV4_BYTES};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    net::Ipv4Addr,
    str::FromStr,
};

// Dotted decimal, four octets in 0..=255, no leading zeros. ASCII digits
// only: `\d` would also match other Unicode digits.
lazy_static! {
    static ref V4_GRAMMAR: Regex = Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$"
    )
    .unwrap();
}

/**
An IPv4 address: the text it was built from plus its 4 raw octets.

Equality, ordering and hashing look at the octets only.
*/
#[derive(Clone, Debug)]
pub struct Ipv4Address {
    text: String,
    octets: [u8; IPV4_BYTES],
}

impl Ipv4Address {
    /// Parse dotted-decimal text. The text is kept verbatim.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let octets: [u8; IPV4_BYTES] = parse_octets(text)?;
        Ok(Self {
            text: text.into(),
            octets,
        })
    }

    /// Build from raw octets; the text form is rendered as dotted decimal.
    pub fn from_octets(octets: [u8; IPV4_BYTES]) -> Self {
        Self {
            text: Ipv4Addr::from(octets).to_string(),
            octets,
        }
    }

    /// Build from a byte slice, which must be exactly 4 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if !Self::is_valid_bytes(bytes) {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        let mut octets: [u8; IPV4_BYTES] = [0; IPV4_BYTES];
        octets.copy_from_slice(bytes);
        Ok(Self::from_octets(octets))
    }

    pub fn from_u32(n: u32) -> Self {
        Self::from_octets(n.to_be_bytes())
    }

    /// Whether `text` satisfies the dotted-decimal grammar.
    pub fn is_valid_text(text: &str) -> bool {
        V4_GRAMMAR.is_match(text)
    }

    /// Whether `bytes` is a valid raw IPv4 address. Every 4-byte pattern is.
    pub fn is_valid_bytes(bytes: &[u8]) -> bool {
        bytes.len() == IPV4_BYTES
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The raw octets (a copy).
    pub fn octets(&self) -> [u8; IPV4_BYTES] {
        self.octets
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// Sum of both addresses as 32-bit unsigned integers, wrapping on overflow.
    pub fn wrapping_add(&self, other: &Self) -> Self {
        Self::from_u32(self.to_u32().wrapping_add(other.to_u32()))
    }
}

/// Parse dotted-decimal text into octets, diagnosing what's wrong on failure.
pub(crate) fn parse_octets(text: &str) -> Result<[u8; IPV4_BYTES], AddressError> {
    if text.is_empty() {
        return Err(AddressError::Empty);
    }
    if !Ipv4Address::is_valid_text(text) {
        return Err(diagnose(text));
    }

    let mut octets: [u8; IPV4_BYTES] = [0; IPV4_BYTES];
    for (i, group) in text.split(IpVersion::V4.separator()).enumerate() {
        octets[i] = group
            .parse::<u8>()
            .map_err(|_| AddressError::InvalidFormat(IpVersion::V4, text.into()))?;
    }
    Ok(octets)
}

/// Figure out why `text` failed the grammar. Out-of-range octets get their
/// own error, everything else is a generic format error.
fn diagnose(text: &str) -> AddressError {
    let invalid = || AddressError::InvalidFormat(IpVersion::V4, text.into());

    let groups: Vec<&str> = text.split(IpVersion::V4.separator()).collect();
    if groups.len() != IPV4_BYTES {
        return invalid();
    }

    for group in groups {
        if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
            return invalid();
        }
        if group.len() > 1 && group.starts_with('0') {
            return invalid();
        }
        match group.parse::<u32>() {
            Ok(val) if val > u8::MAX as u32 => return AddressError::InvalidV4Octet(val),
            Ok(_) => {}
            Err(_) => return invalid(),
        }
    }
    invalid()
}

/* ---------------------------------- */

impl PartialEq for Ipv4Address {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl Eq for Ipv4Address {}

impl Hash for Ipv4Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets.hash(state);
    }
}

impl Ord for Ipv4Address {
    fn cmp(&self, other: &Self) -> Ordering {
        // big-endian arrays compare like the integers they encode
        self.octets.cmp(&other.octets)
    }
}

impl PartialOrd for Ipv4Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; IPV4_BYTES]> for Ipv4Address {
    fn from(octets: [u8; IPV4_BYTES]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self::from_octets(ip.octets())
    }
}

impl From<&Ipv4Address> for Ipv4Addr {
    fn from(ip: &Ipv4Address) -> Self {
        Ipv4Addr::from(ip.octets)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */
