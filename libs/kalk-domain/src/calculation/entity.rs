//! Domain entities for factorial calculation
//!
//! [`Operands`] is the validated form of a calculation request. It can only be
//! built inside this crate (by the [`Validator`](super::Validator)), so holding
//! one proves the input already passed every rule.

use std::fmt;

/// Names one of the two request fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Operand::A => "a",
            Operand::B => "b",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two operands that satisfied every validation rule
///
/// Both values are non-negative by construction. Operands are created once
/// per request, moved into the handler and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    a: u64,
    b: u64,
}

impl Operands {
    pub(crate) fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }
}

/// Result of a calculation: `a!` and `b!`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factorials {
    a: u64,
    b: u64,
}

impl Factorials {
    pub(crate) fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// Factorial of operand `a`
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Factorial of operand `b`
    pub fn b(&self) -> u64 {
        self.b
    }
}
