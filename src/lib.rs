//! Benford's-Law Conformity Analysis Library
//!
//! A deterministic, single-pass statistical engine that checks whether the
//! leading-digit distribution of a numeric column matches Benford's Law and
//! derives a reproducible fraud-risk classification from the fit.

pub mod column;
pub mod config;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod metrics;
pub mod scoring;
pub mod stats;
pub mod types;

pub use config::AppConfig;
pub use engine::AnalysisEngine;
pub use error::{AnalysisError, Result};
pub use extractor::DigitExtractor;
pub use scoring::RiskScorer;
pub use types::{assessment::SuspicionLevel, result::AnalysisResult};
