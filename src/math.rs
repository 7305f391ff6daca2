pub mod integration;

pub use integration::{
    calculate_pi, calculate_pi_sequential, integrand, kahan_sum, partition, reduce,
    Integration, IntegrationConfig, KahanSum, WorkRange,
};
