//! Calculation domain module
//!
//! Holds the validated request model, the validation rules and the engine
//! that evaluates both factorials.

mod engine;
mod entity;
mod error;
mod policy;
mod validator;

pub use engine::{factorial, CalculationEngine, WRAPS_TO_ZERO_FROM};
pub use entity::{Factorials, Operand, Operands};
pub use error::{CalculationError, ParsePolicyError, Result, ValidationError};
pub use policy::{OverflowPolicy, MAX_EXACT_OPERAND};
pub use validator::Validator;
