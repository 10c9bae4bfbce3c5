//! Risk scoring over the conformity test outcome.
//!
//! This stage is what a human reads as the verdict, so it is fully
//! deterministic: a compliance percentage from the distribution distance, a
//! risk score escalated on statistical significance, and the named sub-tests
//! that back the classification.

use crate::config::AnalysisConfig;
use crate::distribution::DigitDistribution;
use crate::stats::ConformityTestResult;
use crate::types::assessment::{SuspicionAssessment, SuspicionThresholds};

/// Stable sub-test identifiers surfaced to the caller.
pub const CHI_SQUARE_TEST: &str = "Chi-Square Test";
pub const COMPLIANCE_THRESHOLD: &str = "Compliance Threshold";
pub const LOW_DEVIATION: &str = "Low Deviation";

/// Scores derived from one distribution/test pair.
#[derive(Debug, Clone)]
pub struct RiskScores {
    /// Compliance percentage, 0-100, higher = more Benford-like
    pub compliance: f64,
    /// Risk score, 0-100, higher = more suspicious
    pub risk_score: f64,
    /// Mean absolute percentage-point deviation from the Benford curve
    pub mean_absolute_deviation: f64,
    /// Suspicion verdict
    pub suspicion: SuspicionAssessment,
}

/// Converts distribution deviation and test outcome into scores and a
/// suspicion classification.
pub struct RiskScorer {
    significance_level: f64,
    compliance_threshold: f64,
    max_deviation: f64,
    significance_penalty: f64,
    suspicion_levels: SuspicionThresholds,
}

impl RiskScorer {
    /// Create a scorer from analysis configuration.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            significance_level: config.significance_level,
            compliance_threshold: config.compliance_threshold,
            max_deviation: config.max_deviation,
            significance_penalty: config.significance_penalty,
            suspicion_levels: config.suspicion_levels.clone(),
        }
    }

    /// Score a distribution against its conformity test result.
    ///
    /// Compliance is `100 - mean_absolute_deviation`, clamped to [0, 100]: a
    /// direct distance metric independent of sample size, complementing the
    /// sample-size-sensitive chi-square test. Risk starts as the compliance
    /// complement and is escalated by the configured penalty when the
    /// deviation is statistically significant, so a moderate-looking fit
    /// still raises risk once the test rejects the null hypothesis.
    pub fn score(&self, dist: &DigitDistribution, test: &ConformityTestResult) -> RiskScores {
        let mean_absolute_deviation = dist.mean_absolute_deviation();
        let compliance = (100.0 - mean_absolute_deviation).clamp(0.0, 100.0);

        let mut risk_score = 100.0 - compliance;
        if test.p_value < self.significance_level {
            risk_score = (risk_score + self.significance_penalty).min(100.0);
        }
        // Classify the same one-decimal value the caller sees reported, so
        // a score straddling a level boundary never contradicts its level
        let risk_score = (risk_score * 10.0).round() / 10.0;

        let mut tests_passed = Vec::with_capacity(3);
        if test.p_value >= self.significance_level {
            tests_passed.push(CHI_SQUARE_TEST.to_string());
        }
        if compliance >= self.compliance_threshold {
            tests_passed.push(COMPLIANCE_THRESHOLD.to_string());
        }
        if mean_absolute_deviation <= self.max_deviation {
            tests_passed.push(LOW_DEVIATION.to_string());
        }

        let suspicion =
            SuspicionAssessment::new(risk_score, tests_passed, &self.suspicion_levels);

        RiskScores {
            compliance,
            risk_score,
            mean_absolute_deviation,
            suspicion,
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
