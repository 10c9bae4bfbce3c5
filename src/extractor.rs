//! Leading-digit extraction from raw column values.
//!
//! This module turns the text cells of a selected column into the set of
//! valid leading digits (1-9) that the distribution builder consumes,
//! discarding non-numeric, zero, and malformed entries.

use crate::error::{AnalysisError, Result};

/// Extracted leading digits plus the count of rejected entries.
#[derive(Debug, Clone)]
pub struct ExtractedDigits {
    /// Leading digits in input order, each in 1..=9
    pub digits: Vec<u8>,
    /// Number of input values that did not yield a digit
    pub rejected: usize,
}

/// Extractor that reduces raw column values to their leading digits.
///
/// A pure function over its input: no side effects, no state. Sign is
/// irrelevant to Benford's Law, so values are taken by absolute value.
pub struct DigitExtractor;

impl DigitExtractor {
    /// Create a new digit extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract leading digits from an ordered sequence of raw values.
    ///
    /// A value is rejected if it is empty or whitespace-only, fails to parse
    /// as a finite real number, or has zero magnitude. Returns
    /// `InsufficientData` when no value survives: downstream stages must
    /// never run a statistical test on zero samples.
    pub fn extract(&self, values: &[String]) -> Result<ExtractedDigits> {
        let mut digits = Vec::with_capacity(values.len());
        let mut rejected = 0usize;

        for raw in values {
            match Self::parse_numeric(raw).and_then(Self::leading_digit) {
                Some(digit) => digits.push(digit),
                None => rejected += 1,
            }
        }

        if digits.is_empty() {
            return Err(AnalysisError::InsufficientData { valid: 0 });
        }

        Ok(ExtractedDigits { digits, rejected })
    }

    /// Parse a raw cell into a finite number, or `None` if malformed.
    ///
    /// Thousands separators (commas) are tolerated and a single leading sign
    /// is accepted; multiple decimal points, embedded letters, or multiple
    /// signs fail the parse outright rather than being partially consumed.
    /// Separator grouping is not validated: commas are stripped wherever
    /// they appear, so `"1,2"` reads as 12 rather than being rejected.
    fn parse_numeric(raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();

        match cleaned.parse::<f64>() {
            // str::parse accepts "inf" and "NaN" spellings; neither is a
            // real measurement
            Ok(value) if value.is_finite() => Some(value),
            _ => None,
        }
    }

    /// Reduce a number to its most significant decimal digit in 1..=9.
    ///
    /// Returns `None` for zero magnitude (digit zero never leads a nonzero
    /// number in positional notation).
    fn leading_digit(value: f64) -> Option<u8> {
        let mut magnitude = value.abs();
        if magnitude == 0.0 {
            return None;
        }

        while magnitude >= 10.0 {
            magnitude /= 10.0;
        }
        while magnitude < 1.0 {
            magnitude *= 10.0;
        }

        // magnitude is now in [1, 10); truncation lands in 1..=9
        Some((magnitude as u8).clamp(1, 9))
    }
}

impl Default for DigitExtractor {
    fn default() -> Self {
        Self::new()
    }
}
