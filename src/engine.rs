//! Analysis engine wiring the four pipeline stages.

use crate::config::AnalysisConfig;
use crate::distribution::DigitDistribution;
use crate::error::{AnalysisError, Result};
use crate::extractor::DigitExtractor;
use crate::scoring::RiskScorer;
use crate::stats::goodness_of_fit;
use crate::types::result::AnalysisResult;
use tracing::{debug, info, warn};

/// Single-pass Benford conformity engine.
///
/// Extractor -> distribution builder -> conformity tester -> risk scorer,
/// strictly forward. Each run takes an immutable input sequence and returns
/// an immutable result; the only shared state is the read-only Benford
/// table, so independent analyses may run concurrently without coordination.
pub struct AnalysisEngine {
    extractor: DigitExtractor,
    scorer: RiskScorer,
    min_sample_size: usize,
}

impl AnalysisEngine {
    /// Create an engine from analysis configuration.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            extractor: DigitExtractor::new(),
            scorer: RiskScorer::new(config),
            min_sample_size: config.min_sample_size,
        }
    }

    /// Analyze one column of raw values.
    ///
    /// Returns `InsufficientData` when no valid leading digit survives
    /// extraction; a sample between one and the configured minimum gets a
    /// warning on the result rather than a hard failure.
    pub fn analyze(&self, column_values: &[String]) -> Result<AnalysisResult> {
        if column_values.is_empty() {
            return Err(AnalysisError::InsufficientData { valid: 0 });
        }

        let extracted = self.extractor.extract(column_values)?;
        debug!(
            valid = extracted.digits.len(),
            rejected = extracted.rejected,
            "Leading digits extracted"
        );

        let dist = DigitDistribution::from_digits(&extracted.digits);
        let test = goodness_of_fit(&dist)?;
        let scores = self.scorer.score(&dist, &test);

        let warning = if (dist.total as usize) < self.min_sample_size {
            warn!(
                valid = dist.total,
                minimum = self.min_sample_size,
                "Sample below minimum size for a reliable chi-square result"
            );
            Some(format!(
                "Only {} valid values; at least {} are recommended for a reliable chi-square result",
                dist.total, self.min_sample_size
            ))
        } else {
            None
        };

        info!(
            total = dist.total,
            rejected = extracted.rejected,
            chi_square = test.chi_square,
            p_value = test.p_value,
            compliance = scores.compliance,
            risk_score = scores.risk_score,
            level = ?scores.suspicion.level,
            "Column analysis complete"
        );

        Ok(AnalysisResult::assemble(
            &dist,
            &test,
            scores.compliance,
            scores.risk_score,
            scores.suspicion,
            extracted.rejected as u64,
            warning,
        ))
    }

    /// Minimum sample size below which results carry a warning.
    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}
