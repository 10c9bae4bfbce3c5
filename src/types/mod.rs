//! Type definitions for the analysis engine

pub mod assessment;
pub mod result;

pub use assessment::{SuspicionAssessment, SuspicionLevel, SuspicionThresholds};
pub use result::{AnalysisResult, ChartData};
