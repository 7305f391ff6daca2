//! Midpoint-rule integration of the quarter disk, split across worker threads.
//!
//! The integral of `sqrt(1 - x^2)` over `[0, 1]` is `pi / 4`. The index space
//! `[0, total_intervals)` is cut into one contiguous [`WorkRange`] per worker,
//! each worker sums its own midpoints, and the partial sums are combined with
//! Kahan summation in worker order before scaling by 4.

pub mod config;
pub mod integrator;
pub mod kahan;
pub mod partition;
pub mod worker;


pub use config::IntegrationConfig;
pub use integrator::{calculate_pi, calculate_pi_sequential, Integration};
pub use kahan::{kahan_sum, reduce, KahanSum};
pub use partition::{partition, WorkRange};
pub use worker::integrand;
