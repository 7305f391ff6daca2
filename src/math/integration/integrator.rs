use std::thread;

use log::debug;

use crate::error::{Error, Result};
use crate::math::integration::kahan::reduce;
use crate::math::integration::partition::partition_config;
use crate::math::integration::{IntegrationConfig, WorkRange};

/// Approximates pi with one OS thread per partition range.
///
/// Every range is moved into its own scoped thread and moved back out on
/// join. All threads are joined, in spawn order, before any partial sum is
/// combined, so the reduction order is fixed regardless of which worker
/// finishes first. If any worker panics the whole call fails with
/// [`Error::WorkerPanicked`]; if the OS refuses a thread it fails with
/// [`Error::Spawn`].
///
/// # Examples
///
/// ```
/// use midpoint_pi::math::{calculate_pi, IntegrationConfig};
///
/// let config = IntegrationConfig::new(1_000_000, 4).unwrap();
/// let pi = calculate_pi(&config).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 1e-4);
/// ```
pub fn calculate_pi(config: &IntegrationConfig) -> Result<f64> {
    let ranges = partition_config(config)?;
    let computed = run_workers(ranges, worker_builder, |_, range| range.compute())?;
    debug!("joined {} workers", computed.len());

    Ok(reduce_ranges(&computed))
}

fn worker_builder(worker: usize) -> thread::Builder {
    thread::Builder::new().name(format!("pi-worker-{worker}"))
}

/// Runs `work` on every range, one scoped thread each, and collects the
/// ranges back in spawn order.
///
/// Threads that did start are always joined before returning. A spawn
/// failure stops further spawning and wins over any worker panic.
fn run_workers<F>(
    ranges: Vec<WorkRange>,
    builder: fn(usize) -> thread::Builder,
    work: F,
) -> Result<Vec<WorkRange>>
where
    F: Fn(usize, WorkRange) -> WorkRange + Sync,
{
    let work = &work;
    thread::scope(|scope| {
        let mut handles = Vec::new();
        let mut spawn_error = None;
        for (worker, range) in ranges.into_iter().enumerate() {
            match builder(worker).spawn_scoped(scope, move || work(worker, range)) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(Error::Spawn {
                        worker,
                        kind: e.kind(),
                    });
                    break;
                }
            }
        }
        debug!("spawned {} workers", handles.len());

        let mut computed = Vec::with_capacity(handles.len());
        let mut failed = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(range) => computed.push(range),
                Err(_) => {
                    failed.get_or_insert(worker);
                }
            }
        }

        if let Some(err) = spawn_error {
            return Err(err);
        }
        match failed {
            Some(worker) => Err(Error::WorkerPanicked { worker }),
            None => Ok(computed),
        }
    })
}

/// Same partition, worker sums and reduction as [`calculate_pi`], run on the
/// calling thread.
pub fn calculate_pi_sequential(config: &IntegrationConfig) -> Result<f64> {
    let computed: Vec<WorkRange> = partition_config(config)?
        .into_iter()
        .map(WorkRange::compute)
        .collect();
    Ok(reduce_ranges(&computed))
}

fn reduce_ranges(ranges: &[WorkRange]) -> f64 {
    let results: Vec<f64> = ranges.iter().map(WorkRange::local_result).collect();
    reduce(&results)
}

/// A pi calculation bound to one configuration.
///
/// Holds nothing but the validated config; no threads or partial results
/// outlive a call to [`Integration::calculate_pi`], so the same value can be
/// used repeatedly or from several threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integration {
    config: IntegrationConfig,
}

impl Integration {
    pub fn new(total_intervals: i64, thread_count: i64) -> Result<Self> {
        Ok(Self {
            config: IntegrationConfig::new(total_intervals, thread_count)?,
        })
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    pub fn step_width(&self) -> f64 {
        self.config.step_width()
    }

    pub fn calculate_pi(&self) -> Result<f64> {
        calculate_pi(&self.config)
    }
}

impl From<IntegrationConfig> for Integration {
    fn from(config: IntegrationConfig) -> Self {
        Self { config }
    }
}
