//! Suspicion classification data structures

use serde::{Deserialize, Serialize};

/// Number of sub-tests the risk scorer evaluates.
pub const SUB_TEST_COUNT: usize = 3;

/// Suspicion level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspicionLevel {
    Low,
    Medium,
    High,
}

impl SuspicionLevel {
    /// Determine suspicion level from a risk score and thresholds.
    ///
    /// Boundaries are inclusive on the upper side: a score exactly at the
    /// medium threshold is Medium, exactly at the high threshold is High.
    pub fn from_risk_score(score: f64, thresholds: &SuspicionThresholds) -> Self {
        if score >= thresholds.high {
            SuspicionLevel::High
        } else if score >= thresholds.medium {
            SuspicionLevel::Medium
        } else {
            SuspicionLevel::Low
        }
    }

    /// Color token surfaced to the UI for this level.
    pub fn color(&self) -> &'static str {
        match self {
            SuspicionLevel::Low => "#10b981",
            SuspicionLevel::Medium => "#f59e0b",
            SuspicionLevel::High => "#ef4444",
        }
    }

    /// Fixed description template naming how many sub-tests passed.
    pub fn description(&self, tests_passed: usize) -> String {
        match self {
            SuspicionLevel::Low => format!(
                "Data is consistent with Benford's Law ({tests_passed}/{SUB_TEST_COUNT} sub-tests passed)"
            ),
            SuspicionLevel::Medium => format!(
                "Data partially conforms to Benford's Law ({tests_passed}/{SUB_TEST_COUNT} sub-tests passed)"
            ),
            SuspicionLevel::High => format!(
                "Data significantly deviates from Benford's Law ({tests_passed}/{SUB_TEST_COUNT} sub-tests passed)"
            ),
        }
    }
}

/// Configurable risk score boundaries for the suspicion levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspicionThresholds {
    /// Scores at or above this are at least Medium
    pub medium: f64,
    /// Scores at or above this are High
    pub high: f64,
}

impl Default for SuspicionThresholds {
    fn default() -> Self {
        Self {
            medium: 30.0,
            high: 60.0,
        }
    }
}

/// Suspicion verdict derived deterministically from the conformity test and
/// the compliance/risk scores; never mutated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspicionAssessment {
    /// Suspicion level classification
    pub level: SuspicionLevel,
    /// Color token for the level
    pub color: String,
    /// Human-readable rationale
    pub description: String,
    /// Names of the sub-tests that passed, in evaluation order
    pub tests_passed: Vec<String>,
}

impl SuspicionAssessment {
    /// Build an assessment for a risk score and the sub-tests it passed.
    pub fn new(
        risk_score: f64,
        tests_passed: Vec<String>,
        thresholds: &SuspicionThresholds,
    ) -> Self {
        let level = SuspicionLevel::from_risk_score(risk_score, thresholds);
        Self {
            level,
            color: level.color().to_string(),
            description: level.description(tests_passed.len()),
            tests_passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspicion_level_boundaries() {
        let thresholds = SuspicionThresholds::default();

        assert_eq!(
            SuspicionLevel::from_risk_score(0.0, &thresholds),
            SuspicionLevel::Low
        );
        assert_eq!(
            SuspicionLevel::from_risk_score(29.99, &thresholds),
            SuspicionLevel::Low
        );
        // Exactly 30 is Medium, not Low
        assert_eq!(
            SuspicionLevel::from_risk_score(30.0, &thresholds),
            SuspicionLevel::Medium
        );
        assert_eq!(
            SuspicionLevel::from_risk_score(59.99, &thresholds),
            SuspicionLevel::Medium
        );
        // Exactly 60 is High, not Medium
        assert_eq!(
            SuspicionLevel::from_risk_score(60.0, &thresholds),
            SuspicionLevel::High
        );
        assert_eq!(
            SuspicionLevel::from_risk_score(100.0, &thresholds),
            SuspicionLevel::High
        );
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(SuspicionLevel::Low.color(), "#10b981");
        assert_eq!(SuspicionLevel::Medium.color(), "#f59e0b");
        assert_eq!(SuspicionLevel::High.color(), "#ef4444");
    }

    #[test]
    fn test_assessment_construction() {
        let thresholds = SuspicionThresholds::default();
        let assessment = SuspicionAssessment::new(
            10.0,
            vec!["Chi-Square Test".to_string(), "Low Deviation".to_string()],
            &thresholds,
        );

        assert_eq!(assessment.level, SuspicionLevel::Low);
        assert_eq!(assessment.color, "#10b981");
        assert!(assessment.description.contains("2/3 sub-tests passed"));
        assert_eq!(assessment.tests_passed.len(), 2);
    }

    #[test]
    fn test_assessments_from_equal_inputs_are_equal() {
        let thresholds = SuspicionThresholds::default();
        let passed = vec!["Chi-Square Test".to_string()];

        let first = SuspicionAssessment::new(45.0, passed.clone(), &thresholds);
        let second = SuspicionAssessment::new(45.0, passed, &thresholds);

        assert_eq!(first, second);
    }

    #[test]
    fn test_assessment_serialization() {
        let thresholds = SuspicionThresholds::default();
        let assessment = SuspicionAssessment::new(75.0, Vec::new(), &thresholds);

        let json = serde_json::to_string(&assessment).unwrap();
        let deserialized: SuspicionAssessment = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.level, SuspicionLevel::High);
        assert_eq!(deserialized.color, assessment.color);
        assert_eq!(deserialized.tests_passed, assessment.tests_passed);
    }
}
