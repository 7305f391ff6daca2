/// Kahan (compensated) running sum.
///
/// Carries the low-order bits lost by each addition in `compensation` and
/// feeds them back into the next one, keeping the error of the total at
/// O(eps) instead of O(n * eps).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KahanSum {
    total: f64,
    compensation: f64,
}

impl KahanSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.total + y;
        self.compensation = (t - self.total) - y;
        self.total = t;
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Extend<f64> for KahanSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for KahanSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}

/// Compensated sum of `values`, taken in slice order.
pub fn kahan_sum(values: &[f64]) -> f64 {
    values.iter().copied().collect::<KahanSum>().total()
}

/// Combines per-worker quarter-disk areas into the pi estimate.
///
/// # Examples
///
/// ```
/// use midpoint_pi::math::reduce;
///
/// assert_eq!(reduce(&[0.25, 0.5]), 3.0);
/// assert_eq!(reduce(&[]), 0.0);
/// ```
pub fn reduce(results: &[f64]) -> f64 {
    kahan_sum(results) * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(kahan_sum(&[]), 0.0);
        assert_eq!(KahanSum::new().total(), 0.0);
    }

    #[test]
    fn test_exact_small_sum() {
        assert_eq!(kahan_sum(&[1.0, 2.0, 3.5]), 6.5);
    }

    #[test]
    fn test_recovers_lost_low_bits() {
        // 1.0 followed by many values below half an ulp of 1.0.
        let tiny = f64::EPSILON / 4.0;
        let mut values = vec![1.0];
        values.extend(std::iter::repeat(tiny).take(1000));

        let naive: f64 = values.iter().sum();
        assert_eq!(naive, 1.0);

        let compensated = kahan_sum(&values);
        assert_eq!(compensated, 1.0 + 1000.0 * tiny);
    }

    #[test]
    fn test_tenths_beat_naive_sum() {
        let values = vec![0.1; 10_000];
        let naive: f64 = values.iter().sum();
        let compensated = kahan_sum(&values);
        assert!((compensated - 1000.0).abs() <= (naive - 1000.0).abs());
        assert!((compensated - 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_incremental_matches_slice() {
        let values = [0.3, 1e-17, 2.5, -0.7, 1e16, -1e16];
        let mut sum = KahanSum::new();
        for &v in &values {
            sum.add(v);
        }
        assert_eq!(sum.total(), kahan_sum(&values));
    }

    #[test]
    fn test_reduce_scales_by_four() {
        assert_eq!(reduce(&[0.125, 0.125]), 1.0);
        assert_eq!(reduce(&[0.5, 0.0, 0.0]), 2.0);
    }
}
