//! Calculation engine - concurrent factorials
//!
//! Both factorials are independent, so each runs as its own blocking task and
//! the engine joins the pair before reading either result.

use tracing::debug;

use super::{
    entity::{Factorials, Operand, Operands},
    error::{CalculationError, Result},
};

/// Smallest `n` whose wrapped factorial is zero
///
/// `66!` holds 64 factors of two, so `n! mod 2^64 == 0` for every `n >= 66`.
pub const WRAPS_TO_ZERO_FROM: u64 = 66;

/// `n!` over `u64` with wrapping multiplication
///
/// `0! = 1`. For `n >= 21` the product overflows and wraps modulo 2^64.
pub fn factorial(n: u64) -> u64 {
    if n >= WRAPS_TO_ZERO_FROM {
        return 0;
    }
    (2..=n).fold(1u64, |acc, k| acc.wrapping_mul(k))
}

/// Evaluates the factorials of validated operands
///
/// Stateless: a single engine serves every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculationEngine;

impl CalculationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute `a!` and `b!` concurrently
    ///
    /// Each operand is dispatched to the runtime's blocking pool; the call
    /// returns once both tasks have finished. No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::TaskFailed` if either task panics or is
    /// cancelled by a runtime shutdown.
    pub async fn compute(&self, operands: Operands) -> Result<Factorials> {
        let (a, b) = tokio::join!(
            spawn_factorial(Operand::A, operands.a()),
            spawn_factorial(Operand::B, operands.b()),
        );

        Ok(Factorials::new(a?, b?))
    }
}

async fn spawn_factorial(operand: Operand, n: u64) -> Result<u64> {
    tokio::task::spawn_blocking(move || {
        debug!(operand = %operand, n, "Starting factorial");
        let result = factorial(n);
        debug!(operand = %operand, "Finished factorial");
        result
    })
    .await
    .map_err(|err| CalculationError::task_failed(operand, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{OverflowPolicy, Validator};

    fn operands(a: i64, b: i64) -> Operands {
        Validator::new(OverflowPolicy::Wrap)
            .validate(Some(a), Some(b))
            .unwrap()
    }

    fn wrapping_product(n: u64) -> u64 {
        let mut acc = 1u64;
        for k in 1..=n {
            acc = acc.wrapping_mul(k);
        }
        acc
    }

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
    }

    #[test]
    fn test_factorial_small_values() {
        let expected: [u64; 6] = [1, 1, 2, 6, 24, 120];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(factorial(n as u64), *want, "factorial({})", n);
        }
        assert_eq!(factorial(10), 3_628_800);
    }

    #[test]
    fn test_factorial_recurrence() {
        for n in 1..=20u64 {
            assert_eq!(factorial(n), n * factorial(n - 1));
        }
    }

    #[test]
    fn test_factorial_largest_exact_value() {
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_wraps_past_twenty() {
        assert_eq!(factorial(21), 14_197_454_024_290_336_768);
        assert_eq!(factorial(21), 21u64.wrapping_mul(factorial(20)));
    }

    #[test]
    fn test_zero_shortcut_matches_full_product() {
        assert_ne!(factorial(WRAPS_TO_ZERO_FROM - 1), 0);
        for n in 21..=100 {
            assert_eq!(factorial(n), wrapping_product(n), "factorial({})", n);
        }
        assert_eq!(factorial(u64::MAX), 0);
    }

    #[tokio::test]
    async fn test_compute_two_factorials() {
        let engine = CalculationEngine::new();

        let result = engine.compute(operands(2, 3)).await.unwrap();

        assert_eq!(result.a(), 2);
        assert_eq!(result.b(), 6);
    }

    #[tokio::test]
    async fn test_compute_with_zero() {
        let engine = CalculationEngine::new();

        let result = engine.compute(operands(10, 0)).await.unwrap();

        assert_eq!(result.a(), 3_628_800);
        assert_eq!(result.b(), 1);
    }

    #[tokio::test]
    async fn test_compute_keeps_operand_order() {
        let engine = CalculationEngine::new();

        let forward = engine.compute(operands(5, 12)).await.unwrap();
        let backward = engine.compute(operands(12, 5)).await.unwrap();

        assert_eq!(forward.a(), backward.b());
        assert_eq!(forward.b(), backward.a());
        assert_eq!(forward.a(), factorial(5));
        assert_eq!(forward.b(), factorial(12));
    }

    #[tokio::test]
    async fn test_compute_huge_operand_terminates() {
        let engine = CalculationEngine::new();

        let result = engine.compute(operands(i64::MAX, 21)).await.unwrap();

        assert_eq!(result.a(), 0);
        assert_eq!(result.b(), factorial(21));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_computations_do_not_interfere() {
        let engine = CalculationEngine::new();
        let mut handles = Vec::new();

        for n in 0..20i64 {
            handles.push(tokio::spawn(async move {
                let result = engine.compute(operands(n, 20 - n)).await.unwrap();
                (n as u64, result)
            }));
        }

        for handle in handles {
            let (n, result) = handle.await.unwrap();
            assert_eq!(result.a(), factorial(n));
            assert_eq!(result.b(), factorial(20 - n));
        }
    }
}
