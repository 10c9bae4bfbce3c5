//! Statistical conformity testing components

pub mod chi_square;
pub mod gamma;

pub use chi_square::{goodness_of_fit, ConformityTestResult, DEGREES_OF_FREEDOM};
