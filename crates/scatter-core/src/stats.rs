// File: crates/scatter-core/src/stats.rs
// Summary: Mean, ordinary-least-squares regression and Pearson correlation over data points.

use thiserror::Error;

use crate::types::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("regression needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    /// Every x coincides, so the slope is not finite.
    #[error("regression undefined: points have no spread in x")]
    DegenerateFit,
}

/// Fitted line `y = slope * x + intercept` in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Arithmetic mean. NaN for an empty slice; callers check the length first.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Closed-form OLS fit from the running sums Sx, Sy, Sxx, Sxy.
pub fn linear_regression(points: &[DataPoint]) -> Result<Regression, StatsError> {
    let n = points.len();
    if n < 2 {
        return Err(StatsError::TooFewPoints(n));
    }

    let (sx, sy, sxx, sxy) = points.iter().fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxx, sxy), p| {
        (sx + p.x, sy + p.y, sxx + p.x * p.x, sxy + p.x * p.y)
    });

    // Identical x values can leave a rounding residue in the denominator instead of an exact 0.
    let nf = n as f64;
    let slope = (nf * sxy - sx * sy) / (nf * sxx - sx * sx);
    if !slope.is_finite() || points.iter().all(|p| p.x == points[0].x) {
        return Err(StatsError::DegenerateFit);
    }
    let intercept = (sy - slope * sx) / nf;
    Ok(Regression { slope, intercept })
}

/// Pearson's r. Exactly 0 below two points or when either axis has zero variance.
pub fn correlation(points: &[DataPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    // Centring identical values can leave a residue of ~1e-33 instead of 0.
    let first = points[0];
    if points.iter().all(|p| p.x == first.x) || points.iter().all(|p| p.y == first.y) {
        return 0.0;
    }

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mx = mean(&xs);
    let my = mean(&ys);

    let mut num = 0.0;
    let mut dx = 0.0;
    let mut dy = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        let cx = x - mx;
        let cy = y - my;
        num += cx * cy;
        dx += cx * cx;
        dy += cy * cy;
    }

    if dx * dy == 0.0 { 0.0 } else { num / (dx * dy).sqrt() }
}
