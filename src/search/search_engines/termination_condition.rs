use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Cooperative resource probe, consulted by the search engine at every pop of
/// the open list. Both limits are optional; with neither set the probe only
/// provides the periodic progress log.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        Self {
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    /// Samples memory usage and logs progress, at most once every 10 s.
    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = self.start_time.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }

    /// Returns the result to report if a limit has been exceeded. The memory
    /// check runs against the last sampled peak, so its granularity is the
    /// logging interval.
    pub fn should_terminate(&self) -> Option<SearchResult> {
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let (Some(limit), Some(peak)) = (self.memory_limit_mb, self.peak_memory_usage_mb) {
            if peak > limit {
                return Some(SearchResult::MemoryLimitExceeded);
            }
        }
        None
    }
}
