use log::debug;

use crate::error::{Error, Result};
use crate::math::integration::IntegrationConfig;

/// Contiguous slice `[start_index, end_index)` of the interval index space,
/// owned by exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkRange {
    pub(super) start_index: i64,
    pub(super) end_index: i64,
    pub(super) step_width: f64,
    pub(super) local_result: f64,
}

impl WorkRange {
    pub fn new(start_index: i64, end_index: i64, step_width: f64) -> Self {
        Self {
            start_index,
            end_index,
            step_width,
            local_result: 0.0,
        }
    }

    pub fn start_index(&self) -> i64 {
        self.start_index
    }

    /// Exclusive upper bound.
    pub fn end_index(&self) -> i64 {
        self.end_index
    }

    pub fn step_width(&self) -> f64 {
        self.step_width
    }

    /// Partial sum written by the worker; `0.0` until the range is computed.
    pub fn local_result(&self) -> f64 {
        self.local_result
    }

    pub fn len(&self) -> i64 {
        self.end_index - self.start_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `[0, total_intervals)` into `thread_count` contiguous ranges.
///
/// The first `total_intervals % thread_count` ranges get one extra index, so
/// range sizes never differ by more than one. With more threads than
/// intervals the trailing ranges are empty.
///
/// # Examples
///
/// ```
/// use midpoint_pi::math::partition;
///
/// let ranges = partition(10, 3).unwrap();
/// let sizes: Vec<i64> = ranges.iter().map(|r| r.len()).collect();
/// assert_eq!(sizes, vec![4, 3, 3]);
/// assert_eq!(ranges[2].end_index(), 10);
/// ```
pub fn partition(total_intervals: i64, thread_count: i64) -> Result<Vec<WorkRange>> {
    let config = IntegrationConfig::new(total_intervals, thread_count)?;
    partition_config(&config)
}

pub(crate) fn partition_config(config: &IntegrationConfig) -> Result<Vec<WorkRange>> {
    let total = config.total_intervals();
    let threads = config.thread_count() as i64;
    let step = config.step_width();

    let base_count = total / threads;
    let remainder = total % threads;

    let mut ranges: Vec<WorkRange> = Vec::new();
    ranges
        .try_reserve_exact(config.thread_count())
        .map_err(|_| Error::TooManyThreads {
            threads: config.thread_count(),
        })?;
    let mut cursor = 0;
    for i in 0..threads {
        let size = base_count + i64::from(i < remainder);
        ranges.push(WorkRange::new(cursor, cursor + size, step));
        cursor += size;
    }
    debug_assert_eq!(cursor, total);

    debug!(
        "partitioned {} intervals into {} ranges (base {}, {} with one extra)",
        total, threads, base_count, remainder
    );
    Ok(ranges)
}
