// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};
use tracing::trace;

/// Boxed error carried by [Outcome::exception].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum OutcomeCode {
    Success,
    Failure,
    Exception,
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeCode::Success => write!(f, "SUCCESS"),
            OutcomeCode::Failure => write!(f, "FAILURE"),
            OutcomeCode::Exception => write!(f, "EXCEPTION"),
        }
    }
}

/**
Result of an operation that talks to the outside world.

Unlike a plain [Result], an [Outcome] tells apart a *domain* failure
(the operation ran and the answer is "no") from an *exception* (the
operation could not run). It is immutable once built:
- `Success`: carries the payload, message is empty
- `Failure`: carries a message
- `Exception`: carries a message and the underlying error

The local creation time is recorded in every case.
*/
#[derive(Debug)]
pub struct Outcome<T> {
    data: Option<T>,
    code: OutcomeCode,
    message: String,
    error: Option<BoxError>,
    timestamp: DateTime<Local>,
}

impl<T> Outcome<T> {
    fn new(data: Option<T>, code: OutcomeCode, message: String, error: Option<BoxError>) -> Self {
        trace!(%code, message = %message, "outcome");
        Self {
            data,
            code,
            message,
            error,
            timestamp: Local::now(),
        }
    }

    pub fn success(data: T) -> Self {
        Self::new(Some(data), OutcomeCode::Success, String::new(), None)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(None, OutcomeCode::Failure, message.into(), None)
    }

    pub fn exception(message: impl Into<String>, error: impl Into<BoxError>) -> Self {
        Self::new(None, OutcomeCode::Exception, message.into(), Some(error.into()))
    }

    pub fn code(&self) -> OutcomeCode {
        self.code
    }

    /// The payload, present only on success.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error, present only on exception.
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.error.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_success(&self) -> bool {
        self.code == OutcomeCode::Success
    }

    pub fn is_failure(&self) -> bool {
        self.code == OutcomeCode::Failure
    }

    pub fn is_exception(&self) -> bool {
        self.code == OutcomeCode::Exception
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} |", self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"))?;
        write!(f, " {}", self.code)?;
        if let Some(data) = &self.data {
            write!(f, " data: {data}")?;
        }
        if !self.message.is_empty() {
            write!(f, " message: '{}'", self.message)?;
        }
        if let Some(error) = &self.error {
            write!(f, " error: {error}")?;
        }
        Ok(())
    }
}

/* -------------------------------------------------------------------------- */
