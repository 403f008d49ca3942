//! Relative confidence interval of one score run.

use crate::stats;
use crate::tdist;

/// Quantities produced by one pass over a score run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub samples: usize,
    pub valid: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub stddev: Option<f64>,
    pub degrees_of_freedom: usize,
    pub t_value: f64,
    pub interval: Option<f64>,
}

/// Relative margin of error `stddev * t / mean / sqrt(n)` over the run.
///
/// A run whose sum is exactly zero short-circuits to `Some(0.0)` before
/// any spread computation. A run without usable spread (see
/// [`stats::stddev`]) yields `None`.
pub fn confidence_interval(scores: &[Option<f64>]) -> Option<f64> {
    analyze(scores).interval
}

pub fn analyze(scores: &[Option<f64>]) -> Analysis {
    let samples = scores.len();
    let valid = stats::valid_count(scores);
    let sum = stats::score_sum(scores);

    // The mean and the t lookup run over every line read, missing entries
    // included; stats::stddev counts only the present ones.
    let degrees_of_freedom = samples.saturating_sub(1);
    let t_value = tdist::two_tailed_05(degrees_of_freedom);
    let mean = (samples > 0).then(|| sum / samples as f64);
    let stddev = stats::stddev(scores);

    let interval = if sum == 0.0 {
        Some(0.0)
    } else {
        match (stddev, mean) {
            (Some(sd), Some(mean)) => Some(sd * t_value / mean / (samples as f64).sqrt()),
            _ => None,
        }
    };

    Analysis {
        samples,
        valid,
        sum,
        mean,
        stddev,
        degrees_of_freedom,
        t_value,
        interval,
    }
}
