// File: crates/scatter-core/src/summary.rs
// Summary: Text payload for the host's info panel (count, r, slope, intercept).

use std::fmt;

use crate::stats::{correlation, linear_regression, Regression, StatsError};
use crate::types::DataPoint;

/// Shown in place of a statistic that is undefined for the current points.
pub const PLACEHOLDER: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub point_count: usize,
    pub correlation: String,
    pub slope: String,
    pub intercept: String,
}

impl Summary {
    pub fn from_points(points: &[DataPoint]) -> Self {
        Self::with_fit(points, &linear_regression(points))
    }

    /// Reuse a fit already computed for this frame.
    pub(crate) fn with_fit(points: &[DataPoint], fit: &Result<Regression, StatsError>) -> Self {
        let correlation = if points.len() >= 2 { fixed4(correlation(points)) } else { PLACEHOLDER.to_string() };
        let (slope, intercept) = match fit {
            Ok(reg) => (fixed4(reg.slope), fixed4(reg.intercept)),
            Err(_) => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
        };
        Self { point_count: points.len(), correlation, slope, intercept }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "points: {}  r: {}  slope: {}  intercept: {}",
            self.point_count, self.correlation, self.slope, self.intercept
        )
    }
}

fn fixed4(v: f64) -> String {
    format!("{v:.4}")
}
