//! Sliding-window doubling-time estimation
//!
//! A fixed-width window slides over the conditioned (log2) series with
//! stride 1; each position gets one OLS fit of log-value vs time in
//! hours, and the doubling time for that window is the reciprocal of the
//! fitted slope.

use tracing::trace;

use super::regression;
use crate::{Error, Result};

/// Estimate doubling times over a conditioned series.
///
/// For each start `k` while `k + window < L`, fits a line to the `window`
/// log2 values and hours at `[k, k + window)` and appends `1 / slope` —
/// or `0.0` when the slope is exactly zero. Produces exactly
/// `max(0, L - window)` estimates; `window >= L` yields an empty vector,
/// not an error.
///
/// Two deliberate compatibility behaviors, preserved from the measurement
/// workflow this replaces:
///
/// - the `0.0` sentinel for a flat window conflates "no measurable
///   change" with a literal zero doubling time; downstream consumers must
///   treat `0.0` as non-physical rather than near-infinite growth;
/// - windows positioned before or across the artifact cutoff are *not*
///   excluded here. The report carries each well's cutoff, and consumers
///   filter by position.
///
/// # Errors
///
/// Returns [`Error::Precondition`] for a zero window size and
/// [`Error::InputShape`] when the series and hours lengths disagree (the
/// engine never truncates one to the other).
pub fn estimate_doubling_times(
    log_series: &[f64],
    hours: &[f64],
    window: usize,
) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(Error::Precondition(
            "window size must be a positive number of timepoints".to_string(),
        ));
    }
    if log_series.len() != hours.len() {
        return Err(Error::InputShape {
            context: "log series vs hours".to_string(),
            expected: hours.len(),
            actual: log_series.len(),
        });
    }

    let len = log_series.len();
    let mut estimates = Vec::with_capacity(len.saturating_sub(window));

    let mut start = 0;
    while start + window < len {
        let end = start + window;
        let fit = regression::fit_line(&hours[start..end], &log_series[start..end]);
        let doubling = if fit.slope == 0.0 { 0.0 } else { 1.0 / fit.slope };
        trace!(start, slope = fit.slope, doubling, "window fitted");
        estimates.push(doubling);
        start += 1;
    }

    Ok(estimates)
}
