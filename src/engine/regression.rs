//! Ordinary least squares line fit
//!
//! One fit per sliding window; inputs are a handful of timestamps (hours)
//! and the matching log2 values. Mean-centered sums keep the arithmetic
//! stable for timestamps far from zero.

/// Slope and intercept of a fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
}

/// Fit an ordinary least-squares line of `y` against `x`.
///
/// The caller guarantees equal lengths and at least two points with some
/// variance in `x` (monotonic timestamps with positive spacing satisfy
/// this); a zero-variance `x` is not guarded and yields non-finite
/// output.
#[must_use]
pub fn fit_line(x: &[f64], y: &[f64]) -> LineFit {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        sxx += dx * dx;
        sxy += dx * (yi - mean_y);
    }

    let slope = sxy / sxx;
    LineFit {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}
