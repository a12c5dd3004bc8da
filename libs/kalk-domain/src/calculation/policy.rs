//! Overflow policy for 64-bit factorials
//!
//! `20!` is the largest factorial representable in a `u64`. Beyond it the
//! service either keeps wrapping arithmetic or rejects the operand up front.

use std::{fmt, str::FromStr};

use super::error::ParsePolicyError;

/// Largest operand whose factorial fits in a `u64`
pub const MAX_EXACT_OPERAND: u64 = 20;

/// How operands whose factorial overflows `u64` are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Accept any operand; results silently wrap modulo 2^64
    #[default]
    Wrap,
    /// Reject operands above [`MAX_EXACT_OPERAND`] during validation
    Reject,
}

impl OverflowPolicy {
    /// Upper bound enforced by the validator, if any
    pub fn max_operand(&self) -> Option<u64> {
        match self {
            OverflowPolicy::Wrap => None,
            OverflowPolicy::Reject => Some(MAX_EXACT_OPERAND),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Wrap => f.write_str("wrap"),
            OverflowPolicy::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(OverflowPolicy::Wrap),
            "reject" => Ok(OverflowPolicy::Reject),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
