//! Series conditioning: repair non-physical values, then log-transform
//!
//! After baseline subtraction a series may contain zeros or negatives.
//! `log2` of those is `-inf`/`NaN`, which would corrupt every window
//! regression that touches them, so the series is repaired into a strictly
//! positive one first.

use crate::plate::WellRecord;
use crate::Result;

/// Replacement for a non-positive value at index 0: a small positive
/// epsilon standing in for "effectively zero signal".
pub const ZERO_SUBSTITUTE: f64 = 1e-9;

/// Repair a baseline-subtracted series into a strictly positive one.
///
/// Single left-to-right pass:
/// - index 0: a non-positive value becomes [`ZERO_SUBSTITUTE`];
/// - index i > 0: a non-positive value copies the *already-repaired* value
///   at i-1 (carry-forward hold: "no change from the last known-good
///   level"), not the original;
/// - positive values pass through unmodified.
///
/// The output has the input's length and is strictly positive by
/// induction: index 0 is forced positive and every later index is either
/// positive or a copy of a previously-positive value. Already-positive
/// series pass through unchanged, so the repair is idempotent.
#[must_use]
pub fn repair_non_positive(adjusted: &[f64]) -> Vec<f64> {
    let mut repaired = Vec::with_capacity(adjusted.len());
    for (i, &value) in adjusted.iter().enumerate() {
        if value > 0.0 {
            repaired.push(value);
        } else if i == 0 {
            repaired.push(ZERO_SUBSTITUTE);
        } else {
            repaired.push(repaired[i - 1]);
        }
    }
    repaired
}

/// Elementwise base-2 logarithm.
#[must_use]
pub fn log2_series(series: &[f64]) -> Vec<f64> {
    series.iter().map(|v| v.log2()).collect()
}

/// Condition a well's full series for estimation: subtract the resolved
/// baseline, repair non-positive values, log2-transform. The well itself
/// is not mutated.
///
/// # Errors
///
/// Returns [`crate::Error::Precondition`] if the well's baseline is
/// unresolved.
pub fn condition(well: &WellRecord) -> Result<Vec<f64>> {
    let adjusted = well.readings_less_baseline()?;
    Ok(log2_series(&repair_non_positive(&adjusted)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_series_passes_through() {
        let input = vec![1.0, 2.0, 0.5];
        assert_eq!(repair_non_positive(&input), input);
    }

    #[test]
    fn test_leading_non_positive_becomes_epsilon() {
        let repaired = repair_non_positive(&[-0.3, 2.0]);
        assert_eq!(repaired, vec![ZERO_SUBSTITUTE, 2.0]);
    }

    #[test]
    fn test_carry_forward_uses_repaired_value() {
        // Index 1 copies the repaired epsilon, not the original -0.3
        let repaired = repair_non_positive(&[-0.3, -0.1, 4.0]);
        assert_eq!(repaired, vec![ZERO_SUBSTITUTE, ZERO_SUBSTITUTE, 4.0]);
    }

    #[test]
    fn test_carry_forward_holds_last_good_level() {
        let repaired = repair_non_positive(&[1.0, -1.0, 1.0, 1.0]);
        assert_eq!(repaired, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_zero_counts_as_non_positive() {
        let repaired = repair_non_positive(&[2.0, 0.0, 3.0]);
        assert_eq!(repaired, vec![2.0, 2.0, 3.0]);
    }

    #[test]
    fn test_log2_of_powers_of_two() {
        let logs = log2_series(&[1.0, 2.0, 4.0, 8.0]);
        assert_eq!(logs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_condition_requires_baseline() {
        let well = WellRecord::new("A1", "wt", 0.01, vec![1.0, 2.0]);
        assert!(condition(&well).is_err());
    }

    #[test]
    fn test_condition_full_pipeline() {
        let mut well = WellRecord::new("A1", "wt", 0.01, vec![1.5, 2.5, 0.5]);
        well.set_baseline(0.5).unwrap();
        // adjusted: [1, 2, 0] -> repaired: [1, 2, 2] -> log2: [0, 1, 1]
        assert_eq!(condition(&well).unwrap(), vec![0.0, 1.0, 1.0]);
    }
}
