use log::trace;

use crate::math::integration::WorkRange;

/// The quarter-circle `sqrt(1 - x^2)`.
///
/// `x` is clamped to `[0, 1]` first, so a midpoint nudged past the domain by
/// rounding evaluates to a finite value instead of NaN.
pub fn integrand(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    (1.0 - x * x).sqrt()
}

impl WorkRange {
    /// Midpoint-rule sum over this range's indices.
    ///
    /// Consumes the range and hands it back with `local_result` written, so
    /// the worker that owns it is the only writer.
    pub fn compute(mut self) -> Self {
        let step = self.step_width;
        let mut local_sum = 0.0;
        for i in self.start_index..self.end_index {
            let x = i as f64 * step + step / 2.0;
            local_sum += integrand(x) * step;
        }
        self.local_result = local_sum;

        trace!(
            "range [{}, {}) -> {}",
            self.start_index,
            self.end_index,
            self.local_result
        );
        self
    }
}
