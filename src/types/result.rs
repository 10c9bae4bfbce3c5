//! Aggregate analysis result returned to callers

use crate::distribution::DigitDistribution;
use crate::stats::ConformityTestResult;
use crate::types::assessment::SuspicionAssessment;
use serde::{Deserialize, Serialize};

/// Per-digit series for charting actual vs. theoretical percentages.
///
/// All nine digits are always present, parallel across the three arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Leading digits 1..=9
    pub digits: Vec<u8>,
    /// Observed percentage per digit
    pub actual: Vec<f64>,
    /// Expected Benford percentage per digit
    pub benford: Vec<f64>,
}

impl ChartData {
    /// Build chart series from a digit distribution.
    pub fn from_distribution(dist: &DigitDistribution) -> Self {
        Self {
            digits: (1..=9).collect(),
            actual: dist.observed_pct.to_vec(),
            benford: dist.expected_pct.to_vec(),
        }
    }
}

/// The sole artifact returned to any caller: one complete, immutable
/// analysis of one column. Owns no references back to the input and carries
/// no timestamps or identifiers, so identical inputs serialize to identical
/// bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of valid leading digits analyzed
    pub total_records: u64,
    /// Number of input values discarded by the extractor
    pub rejected_records: u64,
    /// Observed count per digit 1..=9
    pub counts: Vec<u64>,
    /// Compliance percentage, 0-100, higher = more Benford-like
    pub benford_compliance: f64,
    /// Risk score, 0-100, higher = more suspicious
    pub risk_score: f64,
    /// Chi-square goodness-of-fit statistic
    pub chi_square: f64,
    /// Upper-tail probability under the Benford null hypothesis
    pub p_value: f64,
    /// Degrees of freedom of the test (fixed at 8)
    pub degrees_of_freedom: u32,
    /// Per-digit deviation of observed from expected percentage
    pub deviation: Vec<f64>,
    /// Suspicion verdict with rationale
    pub suspicion: SuspicionAssessment,
    /// Per-digit actual vs. theoretical series
    pub chart_data: ChartData,
    /// Present when the sample is below the configured minimum size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl AnalysisResult {
    /// Round a value to the reporting precision used for test statistics.
    pub(crate) fn round_stat(value: f64) -> f64 {
        (value * 10_000.0).round() / 10_000.0
    }

    /// Assemble a result from the outputs of the four pipeline stages.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        dist: &DigitDistribution,
        test: &ConformityTestResult,
        compliance: f64,
        risk_score: f64,
        suspicion: SuspicionAssessment,
        rejected_records: u64,
        warning: Option<String>,
    ) -> Self {
        Self {
            total_records: dist.total,
            rejected_records,
            counts: dist.observed_counts.to_vec(),
            benford_compliance: (compliance * 100.0).round() / 100.0,
            risk_score: (risk_score * 10.0).round() / 10.0,
            chi_square: Self::round_stat(test.chi_square),
            p_value: Self::round_stat(test.p_value),
            degrees_of_freedom: test.degrees_of_freedom,
            deviation: dist.deviation().to_vec(),
            suspicion,
            chart_data: ChartData::from_distribution(dist),
            warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_data_covers_all_nine_digits() {
        let dist = DigitDistribution::from_digits(&[1, 1, 2, 9]);
        let chart = ChartData::from_distribution(&dist);

        assert_eq!(chart.digits, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(chart.actual.len(), 9);
        assert_eq!(chart.benford.len(), 9);
        assert_eq!(chart.actual[0], 50.0);
        assert_eq!(chart.actual[8], 25.0);
    }

    #[test]
    fn test_round_stat_precision() {
        assert_eq!(AnalysisResult::round_stat(0.123456), 0.1235);
        assert_eq!(AnalysisResult::round_stat(15.50731), 15.5073);
        assert_eq!(AnalysisResult::round_stat(1.0), 1.0);
    }
}
