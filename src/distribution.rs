//! Leading-digit distribution tabulation against Benford's Law.

use std::sync::LazyLock;

/// Expected Benford percentage for each leading digit 1..=9.
///
/// `100 * log10(1 + 1/d)`, computed once at first use and shared read-only
/// across all concurrent analyses. Approximately:
/// 30.10, 17.61, 12.49, 9.69, 7.92, 6.69, 5.80, 5.12, 4.58.
pub static BENFORD_EXPECTED_PCT: LazyLock<[f64; 9]> = LazyLock::new(|| {
    let mut table = [0.0; 9];
    for (i, slot) in table.iter_mut().enumerate() {
        let d = (i + 1) as f64;
        *slot = 100.0 * (1.0 + 1.0 / d).log10();
    }
    table
});

/// Observed and expected leading-digit frequencies for one analysis run.
///
/// All nine digits are always present, even at zero observed count: a digit
/// never observed is still a data point for the conformity test. Index `i`
/// holds digit `i + 1`.
#[derive(Debug, Clone)]
pub struct DigitDistribution {
    /// Observed count per digit
    pub observed_counts: [u64; 9],
    /// Observed percentage per digit (`100 * count / total`)
    pub observed_pct: [f64; 9],
    /// Expected Benford percentage per digit
    pub expected_pct: [f64; 9],
    /// Expected count per digit (`expected_pct / 100 * total`)
    pub expected_counts: [f64; 9],
    /// Total number of valid digits tabulated
    pub total: u64,
}

impl DigitDistribution {
    /// Tabulate a distribution from extracted leading digits.
    pub fn from_digits(digits: &[u8]) -> Self {
        let mut observed_counts = [0u64; 9];
        for &digit in digits {
            debug_assert!((1..=9).contains(&digit));
            observed_counts[(digit - 1) as usize] += 1;
        }

        let total = digits.len() as u64;
        let expected_pct = *BENFORD_EXPECTED_PCT;

        let mut observed_pct = [0.0; 9];
        let mut expected_counts = [0.0; 9];
        for i in 0..9 {
            if total > 0 {
                observed_pct[i] = 100.0 * observed_counts[i] as f64 / total as f64;
            }
            expected_counts[i] = expected_pct[i] / 100.0 * total as f64;
        }

        Self {
            observed_counts,
            observed_pct,
            expected_pct,
            expected_counts,
            total,
        }
    }

    /// Per-digit deviation of observed from expected percentage.
    pub fn deviation(&self) -> [f64; 9] {
        let mut deviation = [0.0; 9];
        for i in 0..9 {
            deviation[i] = self.observed_pct[i] - self.expected_pct[i];
        }
        deviation
    }

    /// Average absolute percentage-point gap to the Benford curve.
    ///
    /// Sample-size independent, complementing the chi-square statistic.
    pub fn mean_absolute_deviation(&self) -> f64 {
        self.deviation().iter().map(|d| d.abs()).sum::<f64>() / 9.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benford_constants() {
        let expected = [
            30.10, 17.61, 12.49, 9.69, 7.92, 6.69, 5.80, 5.12, 4.58,
        ];
        for (i, &pct) in BENFORD_EXPECTED_PCT.iter().enumerate() {
            assert!((pct - expected[i]).abs() < 0.005, "digit {}", i + 1);
        }

        let sum: f64 = BENFORD_EXPECTED_PCT.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_digits_present() {
        // Only digit 7 observed; the other eight still appear at zero
        let dist = DigitDistribution::from_digits(&[7, 7, 7]);

        assert_eq!(dist.total, 3);
        assert_eq!(dist.observed_counts[6], 3);
        assert_eq!(dist.observed_pct[6], 100.0);
        for i in (0..9).filter(|&i| i != 6) {
            assert_eq!(dist.observed_counts[i], 0);
            assert_eq!(dist.observed_pct[i], 0.0);
            assert!(dist.expected_counts[i] > 0.0);
        }
    }

    #[test]
    fn test_observed_percentages_sum_to_100() {
        let dist = DigitDistribution::from_digits(&[1, 1, 2, 3, 5, 8, 9, 9]);

        let sum: f64 = dist.observed_pct.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_expected_counts_scale_with_total() {
        let dist = DigitDistribution::from_digits(&[1; 1000]);

        assert!((dist.expected_counts[0] - 301.03).abs() < 0.01);
        let sum: f64 = dist.expected_counts.iter().sum();
        assert!((sum - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_mean_absolute_deviation_uniform() {
        // Each digit equally likely (~11.11%) against Benford's skewed curve
        let digits: Vec<u8> = (1..=9).flat_map(|d| std::iter::repeat(d).take(100)).collect();
        let dist = DigitDistribution::from_digits(&digits);

        let mad = dist.mean_absolute_deviation();
        assert!(mad > 5.0, "uniform data must exceed the low-deviation bound, got {mad}");
        assert!(mad < 7.0, "uniform gap to Benford is fixed, got {mad}");
    }
}
