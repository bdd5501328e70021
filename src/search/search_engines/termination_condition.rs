use crate::search::PlanningError;
use memory_stats::memory_stats;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Resident memory is only sampled every this many checks.
const MEMORY_CHECK_INTERVAL: u64 = 1024;

/// A flag shared between a running search and whoever may want to stop it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
pub struct TerminationCondition {
    cancellation: CancellationToken,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
    checks: u64,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        Self {
            cancellation: CancellationToken::new(),
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
            checks: 0,
        }
    }

    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Restarts the clock, e.g. when the condition is reused for another
    /// search.
    pub fn restart(&mut self) {
        self.start_time = Instant::now();
        self.last_log_time = Instant::now();
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Checked by the search engines before every expansion.
    pub fn should_terminate(&mut self) -> Option<PlanningError> {
        self.checks += 1;
        if self.cancellation.is_cancelled() {
            return Some(PlanningError::Cancelled);
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(PlanningError::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if self.checks % MEMORY_CHECK_INTERVAL == 1 {
                self.sample_memory();
            }
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(PlanningError::MemoryLimitExceeded);
                }
            }
        }
        self.log_if_needed();
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_shared_between_clones() {
        let token = CancellationToken::new();
        let mut condition = TerminationCondition::default().with_cancellation_token(token.clone());
        assert!(condition.should_terminate().is_none());
        token.cancel();
        assert!(matches!(
            condition.should_terminate(),
            Some(PlanningError::Cancelled)
        ));
    }

    #[test]
    fn zero_time_limit_expires() {
        let mut condition = TerminationCondition::new(Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(2));
        assert!(matches!(
            condition.should_terminate(),
            Some(PlanningError::TimeLimitExceeded)
        ));
    }
}
