// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, v4, AddressError, IpVersion, IPV6_BYTES};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    net::Ipv6Addr,
    str::FromStr,
};

const SEGMENTS: usize = 8;
const MAX_HEXTET_DIGITS: usize = 4;

/**
An IPv6 address: the text it was built from plus its 16 raw octets.

The text is kept as supplied, so `2001:DB8::1` and `2001:db8::1` print
differently but are equal (and hash equally). Addresses built from bytes
get the RFC 5952 form: lowercase, longest zero run compressed, and
IPv4-mapped addresses as `::ffff:a.b.c.d`.
*/
#[derive(Clone, Debug)]
pub struct Ipv6Address {
    text: String,
    octets: [u8; IPV6_BYTES],
}

impl Ipv6Address {
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let octets: [u8; IPV6_BYTES] = parse_octets(text)?;
        Ok(Self {
            text: text.into(),
            octets,
        })
    }

    pub fn from_octets(octets: [u8; IPV6_BYTES]) -> Self {
        Self {
            text: Ipv6Addr::from(octets).to_string(),
            octets,
        }
    }

    /// Build from a byte slice, which must be exactly 16 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if !Self::is_valid_bytes(bytes) {
            return Err(AddressError::InvalidLength(bytes.len()));
        }
        let mut octets: [u8; IPV6_BYTES] = [0; IPV6_BYTES];
        octets.copy_from_slice(bytes);
        Ok(Self::from_octets(octets))
    }

    pub fn from_u128(n: u128) -> Self {
        Self::from_octets(n.to_be_bytes())
    }

    pub fn is_valid_text(text: &str) -> bool {
        parse_octets(text).is_ok()
    }

    /// Whether `bytes` is a valid raw IPv6 address. Every 16-byte pattern is.
    pub fn is_valid_bytes(bytes: &[u8]) -> bool {
        bytes.len() == IPV6_BYTES
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn octets(&self) -> [u8; IPV6_BYTES] {
        self.octets
    }

    /// The eight 16-bit groups, most significant first.
    pub fn segments(&self) -> [u16; SEGMENTS] {
        Ipv6Addr::from(self.octets).segments()
    }

    pub fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.octets)
    }

    /// Sum of both addresses as 128-bit unsigned integers, wrapping on overflow.
    pub fn wrapping_add(&self, other: &Self) -> Self {
        Self::from_u128(self.to_u128().wrapping_add(other.to_u128()))
    }
}

/**
Parse IPv6 text into octets.

Accepted:
- eight groups of 1-4 hex digits separated by `:`
- a single `::` standing in for one or more zero groups
- a dotted IPv4 address in place of the last two groups

Zone ids, brackets and ports are not part of the grammar.
*/
pub(crate) fn parse_octets(text: &str) -> Result<[u8; IPV6_BYTES], AddressError> {
    if text.is_empty() {
        return Err(AddressError::Empty);
    }
    let invalid = || AddressError::InvalidFormat(IpVersion::V6, text.into());

    let halves: Vec<&str> = text.split(DOUBLE_COLON).collect();
    let mut segments: [u16; SEGMENTS] = [0; SEGMENTS];

    match halves.as_slice() {
        [all] => {
            let groups: Vec<u16> = parse_groups(all, true, text)?;
            if groups.len() != SEGMENTS {
                return Err(invalid());
            }
            segments.copy_from_slice(&groups);
        }
        [head, tail] => {
            let head: Vec<u16> = parse_groups(head, false, text)?;
            let tail: Vec<u16> = parse_groups(tail, true, text)?;
            // "::" must stand for at least one group
            if head.len() + tail.len() >= SEGMENTS {
                return Err(invalid());
            }
            segments[..head.len()].copy_from_slice(&head);
            segments[SEGMENTS - tail.len()..].copy_from_slice(&tail);
        }
        _ => return Err(invalid()),
    }

    Ok(Ipv6Addr::from(segments).octets())
}

/// Parse a `:`-separated run of groups. An empty run yields no groups.
fn parse_groups(run: &str, v4_tail: bool, text: &str) -> Result<Vec<u16>, AddressError> {
    let invalid = || AddressError::InvalidFormat(IpVersion::V6, text.into());
    let mut out: Vec<u16> = Vec::with_capacity(SEGMENTS);
    if run.is_empty() {
        return Ok(out);
    }

    let groups: Vec<&str> = run.split(IpVersion::V6.separator()).collect();
    let last: usize = groups.len() - 1;

    for (i, group) in groups.into_iter().enumerate() {
        if v4_tail && i == last && group.contains(IpVersion::V4.separator()) {
            let [a, b, c, d] = v4::parse_octets(group).map_err(|e| match e {
                AddressError::InvalidV4Octet(_) => e,
                _ => invalid(),
            })?;
            out.push(u16::from_be_bytes([a, b]));
            out.push(u16::from_be_bytes([c, d]));
        } else {
            out.push(parse_hextet(group, text)?);
        }
        if out.len() > SEGMENTS {
            return Err(invalid());
        }
    }
    Ok(out)
}

fn parse_hextet(group: &str, text: &str) -> Result<u16, AddressError> {
    let invalid = || AddressError::InvalidFormat(IpVersion::V6, text.into());

    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    if group.len() <= MAX_HEXTET_DIGITS {
        return u16::from_str_radix(group, 16).map_err(|_| invalid());
    }
    match u32::from_str_radix(group, 16) {
        Ok(val) if val > u16::MAX as u32 => Err(AddressError::InvalidV6Hextet(val)),
        _ => Err(invalid()),
    }
}

/* ---------------------------------- */

impl PartialEq for Ipv6Address {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl Eq for Ipv6Address {}

impl Hash for Ipv6Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octets.hash(state);
    }
}

impl Ord for Ipv6Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.octets.cmp(&other.octets)
    }
}

impl PartialOrd for Ipv6Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Ipv6Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; IPV6_BYTES]> for Ipv6Address {
    fn from(octets: [u8; IPV6_BYTES]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(ip: Ipv6Addr) -> Self {
        Self::from_octets(ip.octets())
    }
}

impl From<&Ipv6Address> for Ipv6Addr {
    fn from(ip: &Ipv6Address) -> Self {
        Ipv6Addr::from(ip.octets)
    }
}

impl Serialize for Ipv6Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Ipv6Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

/* -------------------------------------------------------------------------- */
