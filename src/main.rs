//! Benford Analysis - Serving Binary
//!
//! Extracts a named column from a CSV file, runs the conformity engine, and
//! prints the analysis result as JSON on stdout. Errors are emitted as a
//! JSON body containing an `error` string, matching the convention the
//! upstream UI expects.

use anyhow::{bail, Context, Result};
use benford_analysis::{
    column, config::AppConfig, engine::AnalysisEngine, metrics::EngineMetrics,
};
use std::time::Instant;
use tracing::{info, warn};

fn main() {
    // Initialize logging before anything else can fail
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("benford_analysis=info".parse().expect("valid directive")),
        )
        .init();

    if let Err(e) = run() {
        // The serving contract: failures surface as { "error": ... }
        println!("{}", serde_json::json!({ "error": e.to_string() }));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (csv_path, column_name) = match (args.next(), args.next()) {
        (Some(path), Some(column)) => (path, column),
        _ => bail!("usage: benford-analysis <file.csv> <column>"),
    };

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Configuration not loaded, using defaults");
            AppConfig::default()
        }
    };
    info!(
        min_sample_size = config.analysis.min_sample_size,
        significance_level = config.analysis.significance_level,
        max_rows = config.limits.max_rows,
        "Starting Benford analysis"
    );

    let metrics = EngineMetrics::new();
    let engine = AnalysisEngine::new(&config.analysis);

    let values = column::extract_column_from_path(&csv_path, &column_name)
        .with_context(|| format!("failed to extract column '{column_name}' from {csv_path}"))?;

    // Input size bound is deployment policy, enforced here rather than in
    // the engine contract
    if values.len() > config.limits.max_rows {
        bail!(
            "column has {} rows, exceeding the configured limit of {}",
            values.len(),
            config.limits.max_rows
        );
    }

    let start = Instant::now();
    let result = match engine.analyze(&values) {
        Ok(result) => result,
        Err(e) => {
            metrics.record_failure();
            return Err(e).with_context(|| format!("analysis of column '{column_name}' failed"));
        }
    };
    metrics.record_analysis(start.elapsed(), &result);

    println!("{}", serde_json::to_string_pretty(&result)?);

    metrics.print_summary();
    Ok(())
}
