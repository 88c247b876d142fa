// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, Address};
use crate::Outcome;
use std::{
    error, fmt, io,
    net::{SocketAddr, TcpStream, ToSocketAddrs},
    time::Duration,
};
use tracing::{debug, warn};

/// Timeout used by [Address::check_reachable].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);
/// TCP echo port, the classic fallback target when ICMP is unavailable.
pub const DEFAULT_PROBE_PORT: u16 = 7;

#[derive(Debug)]
pub enum ProbeError {
    /// host name or address could not be resolved
    Resolution(io::Error),
    Io(io::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Resolution(e) => write!(f, "{ERR_RESOLVE}: {e}"),
            ProbeError::Io(e) => write!(f, "{ERR_PROBE_IO}: {e}"),
        }
    }
}

impl error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ProbeError::Resolution(e) | ProbeError::Io(e) => Some(e),
        }
    }
}

/**
Answers "does `host` respond within `timeout`?".

`Ok(true)` means the host answered, `Ok(false)` that it did not answer
in time. Implementations block for at most roughly `timeout` and do
not retry.
*/
pub trait Probe: Send + Sync {
    fn probe(&self, host: &str, timeout: Duration) -> Result<bool, ProbeError>;
}

/**
Reachability via a TCP connection attempt.

Any answer from the host counts as reachable: an accepted connection
as well as a refused one (the host had to be up to send the reset).
A timeout or a missing route means unreachable. Needs no raw-socket
privileges.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TcpProbe {
    pub port: u16,
}

impl TcpProbe {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_PORT)
    }
}

impl Probe for TcpProbe {
    fn probe(&self, host: &str, timeout: Duration) -> Result<bool, ProbeError> {
        let target: SocketAddr = (host, self.port)
            .to_socket_addrs()
            .map_err(ProbeError::Resolution)?
            .next()
            .ok_or_else(|| {
                ProbeError::Resolution(io::Error::new(io::ErrorKind::NotFound, ERR_NO_ADDRS))
            })?;

        // connect_timeout() rejects a zero duration; nothing can answer in no time
        if timeout.is_zero() {
            return Ok(false);
        }

        connect_answer(TcpStream::connect_timeout(&target, timeout))
    }
}

/**
Map the result of a connection attempt to reachability.

- connected or refused: the host answered
- timed out, or no route to the host/network: no answer
- anything else is a genuine error
*/
fn connect_answer(result: io::Result<TcpStream>) -> Result<bool, ProbeError> {
    match result {
        Ok(_) => Ok(true),
        Err(e) => match e.kind() {
            io::ErrorKind::ConnectionRefused => Ok(true),
            io::ErrorKind::TimedOut
            | io::ErrorKind::WouldBlock
            | io::ErrorKind::NetworkUnreachable
            | io::ErrorKind::HostUnreachable
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::InvalidInput => Ok(false),
            _ => Err(ProbeError::Io(e)),
        },
    }
}

/* ---------------------------------- */

impl Address {
    /// [Address::check_reachable_timeout] with [DEFAULT_TIMEOUT].
    pub fn check_reachable(&self) -> Outcome<String> {
        self.check_reachable_timeout(DEFAULT_TIMEOUT)
    }

    /// Check whether this address answers within `timeout`, using a [TcpProbe].
    pub fn check_reachable_timeout(&self, timeout: Duration) -> Outcome<String> {
        self.check_reachable_with(&TcpProbe::default(), timeout)
    }

    /**
    Check whether this address answers within `timeout` using `probe`.

    Blocks for up to about `timeout`. Never fails hard: the probe's answer
    or error is reported through the returned [Outcome]:
    - reachable: `Success` with a descriptive payload
    - not reachable: `Failure`
    - unresolvable host or any other probe error: `Exception`
    */
    pub fn check_reachable_with<P>(&self, probe: &P, timeout: Duration) -> Outcome<String>
    where
        P: Probe + ?Sized,
    {
        let host: &str = self.as_str();
        debug!(host, timeout_ms = timeout.as_millis() as u64, "probing");

        match probe.probe(host, timeout) {
            Ok(true) => {
                debug!(host, "reachable");
                Outcome::success(format!("Ping to {host} {MSG_PING_OK}"))
            }
            Ok(false) => {
                debug!(host, "not reachable");
                Outcome::failure(format!("Ping to {host} {MSG_PING_FAIL}"))
            }
            Err(e @ ProbeError::Resolution(_)) => {
                warn!(host, error = %e, "probe could not resolve host");
                Outcome::exception(format!("{MSG_UNKNOWN_HOST}: {host}"), e)
            }
            Err(e) => {
                warn!(host, error = %e, "probe failed");
                Outcome::exception(format!("Ping to {host} {MSG_PING_ERR}"), e)
            }
        }
    }
}

/* -------------------------------------------------------------------------- */
