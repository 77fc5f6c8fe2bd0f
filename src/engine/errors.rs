//! Error types for the enumerator
//!
//! This module defines [`EnumerateError`], which represents the two ways a
//! run can fail before producing a count: a negative input, or a count that
//! no longer fits in 64 bits.
//!
//! Both errors abort the whole run. Replay navigation never produces an
//! error; out-of-range steps saturate instead (see [`crate::trace::replay`]).

use crate::engine::memo::Signature;
use std::fmt;

/// Errors that can occur while enumerating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerateError {
    /// A negative N was supplied; nothing is computed or recorded
    InvalidInput { n: i64 },

    /// Accumulating the count at `sig` overflowed u64
    ///
    /// The largest N whose Catalan number fits in a u64 is 36, so any
    /// N >= 37 produces this error rather than a wrapped count.
    Overflow { sig: Signature },
}

impl fmt::Display for EnumerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerateError::InvalidInput { n } => {
                write!(f, "N must be non-negative, got {}", n)
            }
            EnumerateError::Overflow { sig } => {
                write!(
                    f,
                    "count overflowed 64 bits while accumulating {} (max supported N is {})",
                    sig,
                    crate::engine::MAX_N
                )
            }
        }
    }
}

impl std::error::Error for EnumerateError {}
