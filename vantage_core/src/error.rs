// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared across the Vantage crates.

extern crate alloc;

use alloc::string::String;

/// Errors produced by scale, bounds, and artist construction.
///
/// All failures are synchronous and leave the caller's state untouched;
/// there is no I/O or concurrency in the core, so there is nothing to retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A scale name other than `"linear"` or `"log"` was requested.
    InvalidScale(String),
    /// An array contained no finite samples, so no limits can be computed.
    NoFiniteData,
    /// Two coordinate arrays (or an array and a grid edge) disagree in length.
    DimensionMismatch {
        /// What was being validated (e.g. `"x edges"`).
        what: &'static str,
        /// The length the shape requires.
        expected: usize,
        /// The length that was provided.
        got: usize,
    },
    /// The artist cannot represent itself under a log-scaled axis.
    LogScaleUnsupported(&'static str),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidScale(got) => {
                write!(f, "scale must be 'linear' or 'log', got '{got}'")
            }
            Self::NoFiniteData => {
                write!(f, "no finite values were found, cannot compute limits")
            }
            Self::DimensionMismatch {
                what,
                expected,
                got,
            } => {
                write!(f, "{what}: expected length {expected}, got {got}")
            }
            Self::LogScaleUnsupported(what) => {
                write!(f, "log scale is not supported for {what}")
            }
        }
    }
}

impl core::error::Error for Error {}
