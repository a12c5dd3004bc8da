//! Validation rules for calculation requests

use tracing::debug;

use super::{
    entity::{Operand, Operands},
    error::ValidationError,
    policy::OverflowPolicy,
};

/// Turns raw optional integers into [`Operands`]
///
/// Rules are checked in a fixed order and the first failure wins:
/// 1. `a` present
/// 2. `b` present
/// 3. `a` non-negative
/// 4. `b` non-negative
/// 5. `a` within bounds (only under [`OverflowPolicy::Reject`])
/// 6. `b` within bounds (only under [`OverflowPolicy::Reject`])
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: OverflowPolicy,
}

impl Validator {
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// Validate the raw fields of a calculation request
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingField` if a field is absent
    /// - `ValidationError::NegativeValue` if a field is below zero
    /// - `ValidationError::TooLarge` if the policy bounds operands and one exceeds it
    pub fn validate(&self, a: Option<i64>, b: Option<i64>) -> Result<Operands, ValidationError> {
        let a = a.ok_or(ValidationError::missing_field(Operand::A))?;
        let b = b.ok_or(ValidationError::missing_field(Operand::B))?;

        let a = non_negative(Operand::A, a)?;
        let b = non_negative(Operand::B, b)?;

        if let Some(max) = self.policy.max_operand() {
            within_bound(Operand::A, a, max)?;
            within_bound(Operand::B, b, max)?;
        }

        debug!(a, b, policy = %self.policy, "Calculation request validated");
        Ok(Operands::new(a, b))
    }
}

fn non_negative(field: Operand, value: i64) -> Result<u64, ValidationError> {
    u64::try_from(value).map_err(|_| ValidationError::negative_value(field, value))
}

fn within_bound(field: Operand, value: u64, max: u64) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::too_large(field, value, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_operands() {
        let operands = Validator::default().validate(Some(2), Some(3)).unwrap();
        assert_eq!((operands.a(), operands.b()), (2, 3));
    }

    #[test]
    fn test_zero_is_valid() {
        let operands = Validator::default().validate(Some(0), Some(0)).unwrap();
        assert_eq!((operands.a(), operands.b()), (0, 0));
    }

    #[test]
    fn test_missing_a() {
        let err = Validator::default().validate(None, Some(1)).unwrap_err();
        assert_eq!(err, ValidationError::missing_field(Operand::A));
    }

    #[test]
    fn test_missing_b() {
        let err = Validator::default().validate(Some(1), None).unwrap_err();
        assert_eq!(err, ValidationError::missing_field(Operand::B));
    }

    #[test]
    fn test_negative_a() {
        let err = Validator::default().validate(Some(-1), Some(0)).unwrap_err();
        assert_eq!(err, ValidationError::negative_value(Operand::A, -1));
    }

    #[test]
    fn test_negative_b() {
        let err = Validator::default().validate(Some(0), Some(-1)).unwrap_err();
        assert_eq!(err, ValidationError::negative_value(Operand::B, -1));
    }

    #[test]
    fn test_first_failure_wins() {
        let validator = Validator::default();

        // Missing b is reported before negative a
        let err = validator.validate(Some(-5), None).unwrap_err();
        assert_eq!(err, ValidationError::missing_field(Operand::B));

        // Missing a is reported before missing b
        let err = validator.validate(None, None).unwrap_err();
        assert_eq!(err.field(), Operand::A);

        // Negative b is reported before a too-large a
        let err = Validator::new(OverflowPolicy::Reject)
            .validate(Some(100), Some(-2))
            .unwrap_err();
        assert_eq!(err, ValidationError::negative_value(Operand::B, -2));
    }

    #[test]
    fn test_wrap_policy_has_no_upper_bound() {
        let operands = Validator::new(OverflowPolicy::Wrap)
            .validate(Some(i64::MAX), Some(21))
            .unwrap();
        assert_eq!(operands.a(), i64::MAX as u64);
    }

    #[test]
    fn test_reject_policy_bounds_operands() {
        let validator = Validator::new(OverflowPolicy::Reject);

        assert!(validator.validate(Some(20), Some(20)).is_ok());

        let err = validator.validate(Some(21), Some(0)).unwrap_err();
        assert_eq!(err, ValidationError::too_large(Operand::A, 21, 20));

        let err = validator.validate(Some(3), Some(21)).unwrap_err();
        assert_eq!(err, ValidationError::too_large(Operand::B, 21, 20));
    }
}
