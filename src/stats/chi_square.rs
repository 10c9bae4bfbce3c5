//! Chi-square goodness-of-fit test against the Benford distribution.

use crate::distribution::DigitDistribution;
use crate::error::{AnalysisError, Result};
use crate::stats::gamma::regularized_gamma_upper;
use serde::{Deserialize, Serialize};

/// Nine digit categories with one constraint (totals match).
pub const DEGREES_OF_FREEDOM: u32 = 8;

/// Outcome of one conformity test run. Computed once per analysis from a
/// [`DigitDistribution`], immutable thereafter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConformityTestResult {
    /// Chi-square statistic, >= 0
    pub chi_square: f64,
    /// Fixed at 8 for the nine-digit model
    pub degrees_of_freedom: u32,
    /// Upper-tail probability under the null hypothesis, in [0, 1]
    pub p_value: f64,
}

/// Run the chi-square goodness-of-fit test on a digit distribution.
///
/// Benford expected percentages are strictly positive for every digit, so
/// `total > 0` is the only zero-division guard the model needs. A zero total
/// reaching this point is an upstream invariant violation and fails loudly
/// as `DegenerateDistribution` rather than silently returning zeros.
pub fn goodness_of_fit(dist: &DigitDistribution) -> Result<ConformityTestResult> {
    if dist.total == 0 {
        return Err(AnalysisError::DegenerateDistribution { total: 0 });
    }

    let chi_square: f64 = dist
        .observed_counts
        .iter()
        .zip(dist.expected_counts.iter())
        .map(|(&observed, &expected)| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    Ok(ConformityTestResult {
        chi_square,
        degrees_of_freedom: DEGREES_OF_FREEDOM,
        p_value: survival(chi_square, DEGREES_OF_FREEDOM),
    })
}

/// Right-tail survival function of the chi-square distribution:
/// `P(X > x) = Q(df/2, x/2)`.
pub fn survival(chi_square: f64, degrees_of_freedom: u32) -> f64 {
    if chi_square <= 0.0 {
        return 1.0;
    }
    regularized_gamma_upper(f64::from(degrees_of_freedom) / 2.0, chi_square / 2.0)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::BENFORD_EXPECTED_PCT;

    /// Synthetic digit sequence with the given per-digit counts.
    fn digits_from_counts(counts: [u64; 9]) -> Vec<u8> {
        counts
            .iter()
            .enumerate()
            .flat_map(|(i, &n)| std::iter::repeat((i + 1) as u8).take(n as usize))
            .collect()
    }

    #[test]
    fn test_survival_reference_points() {
        assert_eq!(survival(0.0, 8), 1.0);
        assert!(survival(1e4, 8) < 1e-12);

        // Critical value of chi-square(8) at the 5% level
        let p = survival(15.507, 8);
        assert!((p - 0.05).abs() < 1e-3, "p = {p}");

        // Median of chi-square(8) is ~7.344
        let p = survival(7.344, 8);
        assert!((p - 0.5).abs() < 1e-3, "p = {p}");
    }

    #[test]
    fn test_single_digit_concentration() {
        // Every value leads with digit 1: the statistic reduces to the
        // direct formula over expected counts
        let n = 100u64;
        let digits = digits_from_counts([n, 0, 0, 0, 0, 0, 0, 0, 0]);
        let dist = DigitDistribution::from_digits(&digits);
        let result = goodness_of_fit(&dist).unwrap();

        let expected: Vec<f64> = BENFORD_EXPECTED_PCT
            .iter()
            .map(|pct| pct / 100.0 * n as f64)
            .collect();
        let mut direct = (n as f64 - expected[0]).powi(2) / expected[0];
        for &e in &expected[1..] {
            direct += (0.0 - e).powi(2) / e;
        }

        assert!((result.chi_square - direct).abs() < 1e-9);
        assert!(result.p_value < 1e-6);
    }

    #[test]
    fn test_near_benford_sample() {
        // Counts rounded to the expected percentages at n = 10,000
        let counts = [3010, 1761, 1249, 969, 792, 669, 580, 512, 458];
        assert_eq!(counts.iter().sum::<u64>(), 10_000);

        let dist = DigitDistribution::from_digits(&digits_from_counts(counts));
        let result = goodness_of_fit(&dist).unwrap();

        assert!(result.chi_square < 0.1, "chi2 = {}", result.chi_square);
        assert!(result.p_value > 0.99, "p = {}", result.p_value);
        assert_eq!(result.degrees_of_freedom, 8);
    }

    #[test]
    fn test_single_sample_does_not_divide_by_zero() {
        let dist = DigitDistribution::from_digits(&[7]);
        let result = goodness_of_fit(&dist).unwrap();

        assert!(result.chi_square.is_finite());
        assert!(result.chi_square > 0.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_degenerate_distribution_fails_loudly() {
        let dist = DigitDistribution::from_digits(&[]);
        let err = goodness_of_fit(&dist).unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::DegenerateDistribution { total: 0 }
        ));
    }
}
