//! Process metrics for analysis runs.

use crate::types::result::AnalysisResult;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for the analysis engine
pub struct EngineMetrics {
    /// Completed analyses
    pub analyses_completed: AtomicU64,
    /// Analyses rejected with an error
    pub analyses_failed: AtomicU64,
    /// Total valid digits across all analyses
    values_analyzed: AtomicU64,
    /// Total values discarded by the extractor
    values_rejected: AtomicU64,
    /// Results by suspicion level
    results_by_level: RwLock<HashMap<String, u64>>,
    /// Analysis durations (in microseconds)
    analysis_times: RwLock<Vec<u64>>,
    /// Risk score distribution buckets (0-10, 10-20, ...)
    score_buckets: RwLock<[u64; 10]>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl EngineMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            analyses_completed: AtomicU64::new(0),
            analyses_failed: AtomicU64::new(0),
            values_analyzed: AtomicU64::new(0),
            values_rejected: AtomicU64::new(0),
            results_by_level: RwLock::new(HashMap::new()),
            analysis_times: RwLock::new(Vec::with_capacity(100)),
            score_buckets: RwLock::new([0; 10]),
            start_time: Instant::now(),
        }
    }

    /// Record a completed analysis
    pub fn record_analysis(&self, duration: Duration, result: &AnalysisResult) {
        self.analyses_completed.fetch_add(1, Ordering::Relaxed);
        self.values_analyzed
            .fetch_add(result.total_records, Ordering::Relaxed);
        self.values_rejected
            .fetch_add(result.rejected_records, Ordering::Relaxed);

        if let Ok(mut by_level) = self.results_by_level.write() {
            let level = format!("{:?}", result.suspicion.level).to_lowercase();
            *by_level.entry(level).or_insert(0) += 1;
        }

        if let Ok(mut times) = self.analysis_times.write() {
            times.push(duration.as_micros() as u64);
            // Keep only the most recent window
            if times.len() > 10_000 {
                times.drain(0..5_000);
            }
        }

        let bucket = ((result.risk_score / 10.0) as usize).min(9);
        if let Ok(mut buckets) = self.score_buckets.write() {
            buckets[bucket] += 1;
        }
    }

    /// Record a failed analysis
    pub fn record_failure(&self) {
        self.analyses_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get analysis duration statistics
    pub fn get_timing_stats(&self) -> TimingStats {
        let times = self.analysis_times.read().unwrap();
        if times.is_empty() {
            return TimingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        TimingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get results by suspicion level
    pub fn get_results_by_level(&self) -> HashMap<String, u64> {
        self.results_by_level.read().unwrap().clone()
    }

    /// Get risk score distribution
    pub fn get_score_distribution(&self) -> [u64; 10] {
        *self.score_buckets.read().unwrap()
    }

    /// Overall rejection rate across all analyses, as a percentage
    pub fn get_rejection_rate(&self) -> f64 {
        let analyzed = self.values_analyzed.load(Ordering::Relaxed);
        let rejected = self.values_rejected.load(Ordering::Relaxed);
        let seen = analyzed + rejected;
        if seen > 0 {
            rejected as f64 / seen as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let completed = self.analyses_completed.load(Ordering::Relaxed);
        let failed = self.analyses_failed.load(Ordering::Relaxed);
        let timing = self.get_timing_stats();
        let by_level = self.get_results_by_level();
        let elapsed = self.start_time.elapsed().as_secs_f64();

        info!(
            completed = completed,
            failed = failed,
            values_analyzed = self.values_analyzed.load(Ordering::Relaxed),
            rejection_rate = format!("{:.1}%", self.get_rejection_rate()),
            elapsed_s = format!("{:.1}", elapsed),
            "Analysis metrics summary"
        );
        info!(
            mean_us = timing.mean_us,
            p50_us = timing.p50_us,
            p99_us = timing.p99_us,
            max_us = timing.max_us,
            "Analysis timing (microseconds)"
        );
        for (level, count) in &by_level {
            info!(level = %level, count = count, "Results by suspicion level");
        }
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Analysis duration statistics
#[derive(Debug, Default)]
pub struct TimingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnalysisEngine;

    fn sample_result() -> AnalysisResult {
        let engine = AnalysisEngine::default();
        let column: Vec<String> = (0..40).map(|i| format!("{}", 100 + i * 7)).collect();
        engine.analyze(&column).unwrap()
    }

    #[test]
    fn test_metrics_recording() {
        let metrics = EngineMetrics::new();
        let result = sample_result();

        metrics.record_analysis(Duration::from_micros(150), &result);
        metrics.record_analysis(Duration::from_micros(250), &result);
        metrics.record_failure();

        assert_eq!(metrics.analyses_completed.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.analyses_failed.load(Ordering::Relaxed), 1);

        let timing = metrics.get_timing_stats();
        assert_eq!(timing.count, 2);
        assert_eq!(timing.mean_us, 200);
    }

    #[test]
    fn test_results_counted_by_level() {
        let metrics = EngineMetrics::new();
        let result = sample_result();

        metrics.record_analysis(Duration::from_micros(100), &result);

        let by_level = metrics.get_results_by_level();
        assert_eq!(by_level.values().sum::<u64>(), 1);

        let buckets = metrics.get_score_distribution();
        assert_eq!(buckets.iter().sum::<u64>(), 1);
    }
}
