//! # Kalk Domain Layer
//!
//! Pure business logic for the Kalk factorial service:
//!
//! - **Entities**: validated operands and their factorials
//! - **Validator**: the ordered rule set turning raw input into [`Operands`]
//! - **Engine**: concurrent factorial computation over `u64`
//!
//! ## Architecture
//!
//! This layer has NO dependencies on HTTP or serialization formats. The API
//! crate decodes requests into optional integers and hands them to the
//! [`Validator`]; only a successful validation yields [`Operands`], the sole
//! input accepted by the [`CalculationEngine`].
//!
//! ## Example
//!
//! ```rust
//! use kalk_domain::calculation::{CalculationEngine, Validator};
//!
//! async fn example() {
//!     let operands = Validator::default().validate(Some(2), Some(3)).unwrap();
//!     let factorials = CalculationEngine::new().compute(operands).await.unwrap();
//!     assert_eq!((factorials.a(), factorials.b()), (2, 6));
//! }
//! ```

pub mod calculation;

// Re-export commonly used types
pub use calculation::{
    CalculationEngine, CalculationError, Factorials, Operand, Operands, OverflowPolicy,
    ValidationError, Validator,
};
