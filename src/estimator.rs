use crate::vector::ParamArray;

/*
 * Welford's online variance, elementwise over a parameter vector
 * https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm
 */
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OnlineVariance<const N: usize> {
    pub sample_count: u32,
    pub running_mean: ParamArray<N>,
    pub sum_squared_deviation: ParamArray<N>,
}

impl<const N: usize> OnlineVariance<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observed: &ParamArray<N>) {
        self.sample_count += 1;

        let delta = *observed - self.running_mean;
        self.running_mean = self.running_mean + delta / self.sample_count as f32;
        let delta2 = *observed - self.running_mean;
        self.sum_squared_deviation = self.sum_squared_deviation + delta.multiply_element(&delta2);
    }

    // unbiased, None until two samples have been seen
    pub fn sample_variance(&self) -> Option<ParamArray<N>> {
        if self.sample_count < 2 {
            return None;
        }
        Some(self.sum_squared_deviation / (self.sample_count - 1) as f32)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vec3 = ParamArray<3>;

    fn push_all(values: &[f32]) -> OnlineVariance<3> {
        let mut estimator = OnlineVariance::new();
        for &v in values {
            estimator.push(&Vec3::from_element(v));
        }
        estimator
    }

    #[test]
    fn single_sample_has_no_variance() {
        let estimator = push_all(&[1.0]);
        assert_eq!(estimator.sample_count, 1);
        assert!(estimator.sample_variance().is_none());
        assert_eq!(estimator.running_mean, Vec3::from_element(1.0));
    }

    #[test]
    fn matches_closed_form() {
        let one_zero = push_all(&[1.0, 0.0]).sample_variance().expect("two samples");
        assert!(one_zero.iter().all(|&v| (v - 0.5).abs() < 1e-6));

        let one_half = push_all(&[1.0, 0.5]).sample_variance().expect("two samples");
        assert!(one_half.iter().all(|&v| (v - 0.125).abs() < 1e-6));

        let zeros = push_all(&[0.0, 0.0]).sample_variance().expect("two samples");
        assert!(zeros.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn longer_sequence_matches_two_pass() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let estimator = push_all(&data);

        let mean = data.iter().sum::<f32>() / data.len() as f32;
        let expected = data.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (data.len() - 1) as f32;
        let variance = estimator.sample_variance().expect("enough samples");
        assert!((variance[0] - expected).abs() < 1e-4);
        assert!((estimator.running_mean[2] - 5.0).abs() < 1e-6);
    }

    #[test]
    fn reset_clears_history() {
        let mut estimator = push_all(&[1.0, 3.0]);
        estimator.reset();
        assert_eq!(estimator, OnlineVariance::new());
    }
}
