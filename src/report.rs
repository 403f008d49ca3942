//! Result rendering: the bare value line and the JSON summary.

use serde::Serialize;

use crate::ci::Analysis;

/// Rounds a relative interval to 4 decimal places, then scales to percent.
/// Rounding happens before scaling; downstream consumers diff the printed
/// value across runs.
pub fn percent(interval: f64) -> f64 {
    (interval * 10_000.0).round() / 100.0
}

/// The value-mode line: shortest float notation, `NaN` when the interval
/// is undefined.
pub fn render_value(interval: Option<f64>) -> String {
    format!("{}", percent(interval.unwrap_or(f64::NAN)))
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub tool: String,
    pub version: String,
    pub samples: usize,
    pub valid: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub stddev: Option<f64>,
    pub degrees_of_freedom: usize,
    pub t_value: f64,
    pub interval: Option<f64>,
    pub percent: Option<f64>,
}

impl Summary {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Summary {
            tool: "bench-ci".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            samples: analysis.samples,
            valid: analysis.valid,
            sum: analysis.sum,
            mean: analysis.mean,
            stddev: analysis.stddev,
            degrees_of_freedom: analysis.degrees_of_freedom,
            t_value: analysis.t_value,
            interval: analysis.interval,
            percent: analysis.interval.map(percent),
        }
    }
}

pub fn render_summary_json(summary: &Summary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
