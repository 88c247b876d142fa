// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOUBLE_COLON: &str = "::";

// mod.rs
pub(crate) static ERR_EMPTY: &str = "IP address cannot be empty";
pub(crate) static ERR_UNKNOWN_VER: &str = "cannot determine IP version";
pub(crate) static ERR_LENGTH: &str = "invalid byte length for an IP address";
pub(crate) static ERR_FORMAT: &str = "invalid IP address format";
pub(crate) static ERR_V4_OCTET: &str = "IPv4 octet must be <= 255, got";
pub(crate) static ERR_V6_HEXTET: &str = "IPv6 hextet must be <= 0xffff, got";
pub(crate) static ERR_MISMATCH: &str = "cannot combine IPv4 and IPv6 addresses";

// probe.rs
pub(crate) static ERR_RESOLVE: &str = "cannot resolve host";
pub(crate) static ERR_PROBE_IO: &str = "probe failed";
pub(crate) static ERR_NO_ADDRS: &str = "no addresses resolved";
pub(crate) static MSG_PING_OK: &str = "successful";
pub(crate) static MSG_PING_FAIL: &str = "failed";
pub(crate) static MSG_PING_ERR: &str = "encountered an error";
pub(crate) static MSG_UNKNOWN_HOST: &str = "Unknown host";
