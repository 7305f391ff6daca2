use std::num::NonZeroUsize;
use std::thread;

use crate::error::{Error, Result};

/// Validated input to one pi calculation.
///
/// The only way to obtain a value is through [`IntegrationConfig::new`], so a
/// config in hand always has at least one interval and one thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationConfig {
    total_intervals: i64,
    thread_count: usize,
}

impl IntegrationConfig {
    /// Creates a config, rejecting non-positive interval or thread counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use midpoint_pi::math::IntegrationConfig;
    ///
    /// let config = IntegrationConfig::new(1_000_000, 4).unwrap();
    /// assert_eq!(config.thread_count(), 4);
    /// assert!(IntegrationConfig::new(0, 4).is_err());
    /// ```
    pub fn new(total_intervals: i64, thread_count: i64) -> Result<Self> {
        if total_intervals <= 0 || thread_count <= 0 {
            return Err(Error::InvalidConfig {
                intervals: total_intervals,
                threads: thread_count,
            });
        }
        let thread_count = usize::try_from(thread_count).map_err(|_| Error::InvalidConfig {
            intervals: total_intervals,
            threads: thread_count,
        })?;
        Ok(Self {
            total_intervals,
            thread_count,
        })
    }

    /// Uses one thread per available core, or a single thread when the core
    /// count cannot be determined.
    pub fn with_default_threads(total_intervals: i64) -> Result<Self> {
        let threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::new(total_intervals, threads as i64)
    }

    pub fn total_intervals(&self) -> i64 {
        self.total_intervals
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Width of a single interval, `1 / total_intervals`.
    pub fn step_width(&self) -> f64 {
        1.0 / self.total_intervals as f64
    }
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            total_intervals: 1_000_000,
            thread_count: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = IntegrationConfig::new(10, 3).unwrap();
        assert_eq!(config.total_intervals(), 10);
        assert_eq!(config.thread_count(), 3);
        assert_eq!(config.step_width(), 0.1);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        for (intervals, threads) in [(0, 1), (1, 0), (-5, 4), (100, -1), (0, 0)] {
            assert_eq!(
                IntegrationConfig::new(intervals, threads),
                Err(Error::InvalidConfig { intervals, threads })
            );
        }
    }

    #[test]
    fn test_more_threads_than_intervals_is_allowed() {
        let config = IntegrationConfig::new(2, 8).unwrap();
        assert_eq!(config.thread_count(), 8);
    }

    #[test]
    fn test_default_threads() {
        let config = IntegrationConfig::with_default_threads(1000).unwrap();
        assert!(config.thread_count() >= 1);
        assert_eq!(config.total_intervals(), 1000);
    }

    #[test]
    fn test_default() {
        let config = IntegrationConfig::default();
        assert_eq!(config.total_intervals(), 1_000_000);
        assert_eq!(config.thread_count(), 4);
    }
}
