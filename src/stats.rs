//! Sample mean and spread over a run that may contain missing entries.

pub fn score_sum(scores: &[Option<f64>]) -> f64 {
    scores.iter().flatten().sum()
}

pub fn valid_count(scores: &[Option<f64>]) -> usize {
    scores.iter().filter(|s| s.is_some()).count()
}

/// Bessel-corrected sample standard deviation over the present values.
///
/// Returns `None` when there are no present values, when their sum is
/// exactly zero, or when every present value is identical. A `None` here
/// means "no usable spread"; callers must propagate it instead of reading
/// it as a zero-variance sample.
pub fn stddev(scores: &[Option<f64>]) -> Option<f64> {
    let count = valid_count(scores);
    let sum = score_sum(scores);
    if count == 0 || sum == 0.0 {
        return None;
    }
    let mean = sum / count as f64;
    let mut sq_sum = 0.0;
    for &score in scores.iter().flatten() {
        let diff = score - mean;
        sq_sum += diff * diff;
    }
    if sq_sum == 0.0 {
        return None;
    }
    Some((sq_sum / (count as f64 - 1.0)).sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn present(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_stddev_one_through_ten() {
        let scores = present(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let sd = stddev(&scores).unwrap();
        assert_relative_eq!(sd, 3.0276503540974917, epsilon = 1e-12);
    }

    #[test]
    fn test_stddev_empty_is_undefined() {
        assert_eq!(stddev(&[]), None);
    }

    #[test]
    fn test_stddev_all_missing_is_undefined() {
        assert_eq!(stddev(&[None, None, None]), None);
    }

    #[test]
    fn test_stddev_zero_sum_is_undefined() {
        let scores = present(&[-1.0, 1.0, -2.0, 2.0]);
        assert_eq!(stddev(&scores), None);
    }

    #[test]
    fn test_stddev_identical_values_is_undefined() {
        let scores = present(&[5.0; 10]);
        assert_eq!(stddev(&scores), None);
    }

    #[test]
    fn test_stddev_single_value_is_undefined() {
        assert_eq!(stddev(&[Some(7.0)]), None);
    }

    #[test]
    fn test_stddev_skips_missing_entries() {
        let scores = vec![Some(2.0), None, Some(4.0), None];
        let sd = stddev(&scores).unwrap();
        // Two present values around mean 3.0, variance 2.0.
        assert_relative_eq!(sd, 2.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_sum_and_count_ignore_missing() {
        let scores = vec![Some(1.0), None, Some(2.5)];
        assert_eq!(score_sum(&scores), 3.5);
        assert_eq!(valid_count(&scores), 2);
    }
}
