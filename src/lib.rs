//! Multi-threaded midpoint-rule approximation of pi.
//!
//! See [`math::integration`] for the partitioning, worker and reduction
//! pieces, and [`math::calculate_pi`] for the entry point.

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{calculate_pi, Integration, IntegrationConfig};
