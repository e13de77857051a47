//! Time Axis - shared measurement timestamps in seconds and hours

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Seconds per hour, for deriving the hours axis from the instrument's
/// seconds timestamps.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// The shared measurement timestamps for a plate: the instrument's seconds
/// values and the co-derived hours values the regressions run against.
///
/// Every well's reading series has the same cardinality as this axis; the
/// axis is monotonically non-decreasing (checked at construction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeAxis {
    seconds: Vec<f64>,
    hours: Vec<f64>,
}

impl TimeAxis {
    /// Build a time axis from the instrument's seconds timestamps; the
    /// hours sequence is derived as `seconds / 3600`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the timestamps are not
    /// monotonically non-decreasing.
    pub fn from_seconds(seconds: Vec<f64>) -> Result<Self> {
        if let Some(i) = seconds.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::Precondition(format!(
                "time axis must be monotonically non-decreasing, violated at index {}",
                i + 1
            )));
        }
        let hours = seconds.iter().map(|s| s / SECONDS_PER_HOUR).collect();
        Ok(Self { seconds, hours })
    }

    /// Get the timestamps in seconds.
    #[must_use]
    pub fn seconds(&self) -> &[f64] {
        &self.seconds
    }

    /// Get the timestamps in hours.
    #[must_use]
    pub fn hours(&self) -> &[f64] {
        &self.hours
    }

    /// Number of timepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// Check whether the axis is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_derived_from_seconds() {
        let axis = TimeAxis::from_seconds(vec![0.0, 1800.0, 3600.0]).unwrap();
        assert_eq!(axis.hours(), &[0.0, 0.5, 1.0]);
        assert_eq!(axis.len(), 3);
    }

    #[test]
    fn test_non_monotonic_rejected() {
        let result = TimeAxis::from_seconds(vec![0.0, 600.0, 300.0]);
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_equal_timestamps_allowed() {
        // Non-decreasing, not strictly increasing
        assert!(TimeAxis::from_seconds(vec![0.0, 300.0, 300.0]).is_ok());
    }

    #[test]
    fn test_empty_axis() {
        let axis = TimeAxis::from_seconds(vec![]).unwrap();
        assert!(axis.is_empty());
    }
}
