//! Artifact cutoff and baseline resolution
//!
//! The instrument's first readings carry a startup transient (a spike that
//! then drops). Which index the transient ends at is ultimately an
//! operator decision: this module owns the *detection heuristic* and the
//! baseline order-statistic, while final index selection goes through the
//! [`CutoffResolver`] seam (persisted file, auto-accept, or an interactive
//! review UI outside this crate).

use std::collections::HashMap;

use tracing::debug;

use crate::plate::WellRecord;
use crate::{Error, Result};

/// Number of samples after the cutoff the baseline minimum is taken over.
pub const BASELINE_WINDOW: usize = 10;

/// Default number of leading samples the cutoff heuristic inspects.
pub const DEFAULT_PREVIEW: usize = 100;

/// Resolve a well's baseline: the minimum reading over the
/// [`BASELINE_WINDOW`] samples immediately following the artifact cutoff.
/// Near the end of the series the window narrows to whatever remains.
///
/// Mutates the well's baseline field and returns the resolved value. The
/// baseline is a measured minimum; it may be negative.
///
/// # Errors
///
/// Returns [`Error::Precondition`] if the well's cutoff is unresolved
/// (baseline resolution attempted out of order) or its baseline was
/// already resolved.
pub fn resolve_baseline(well: &mut WellRecord) -> Result<f64> {
    let start = well.cutoff().ok_or_else(|| {
        Error::Precondition(format!(
            "artifact cutoff for well {} must be resolved before the baseline",
            well.label()
        ))
    })?;

    // The cutoff invariant (index < len) keeps this window non-empty
    let end = (start + BASELINE_WINDOW).min(well.len());
    let base = well.readings()[start..end]
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    well.set_baseline(base)?;
    debug!(
        well = well.label(),
        cutoff = start,
        baseline = base,
        "baseline resolved"
    );
    Ok(base)
}

/// The heuristic's report on where a well's startup transient ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffSuggestion {
    /// Index of the maximum reading within the preview range
    pub peak_index: usize,
    /// Value of that maximum reading
    pub peak_value: f64,
    /// Suggested first post-artifact index: one past the peak when the
    /// peak sits strictly inside the preview range, else 0
    pub suggested_start: usize,
}

/// Inspect the first `preview` readings (clamped to the series length) and
/// suggest where the startup transient ends: if the maximum falls strictly
/// before the end of the preview range it is taken for the transient's
/// spike and the suggested start is the index after it; a maximum at the
/// very end of the range suggests genuine growth, so the suggested start
/// is 0.
///
/// An empty series yields the all-zero suggestion.
#[must_use]
pub fn suggest_cutoff(readings: &[f64], preview: usize) -> CutoffSuggestion {
    let end = preview.min(readings.len());
    if end == 0 {
        return CutoffSuggestion {
            peak_index: 0,
            peak_value: 0.0,
            suggested_start: 0,
        };
    }

    let mut peak_index = 0;
    let mut peak_value = readings[0];
    for (i, &value) in readings[..end].iter().enumerate().skip(1) {
        if value > peak_value {
            peak_value = value;
            peak_index = i;
        }
    }

    let suggested_start = if peak_index + 1 < end { peak_index + 1 } else { 0 };
    CutoffSuggestion {
        peak_index,
        peak_value,
        suggested_start,
    }
}

/// The seam where final cutoff selection plugs in. The engine computes a
/// [`CutoffSuggestion`] per well; a resolver turns it into the confirmed
/// index. An interactive plot-and-confirm loop is one implementor (outside
/// this crate); [`FileCutoffs`] and [`AcceptSuggested`] are shipped here.
pub trait CutoffResolver {
    /// Produce the confirmed first post-artifact index for `well`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when no index can be produced for
    /// this well (e.g. the persisted file has no entry for its label).
    fn resolve(&self, well: &WellRecord, suggestion: CutoffSuggestion) -> Result<usize>;
}

/// Resolver backed by a persisted label → index map (see
/// [`crate::io::cutoffs`] for the file format).
#[derive(Debug, Clone, Default)]
pub struct FileCutoffs {
    map: HashMap<String, usize>,
}

impl FileCutoffs {
    /// Create a resolver over an already-loaded label → index map.
    #[must_use]
    pub fn new(map: HashMap<String, usize>) -> Self {
        Self { map }
    }

    /// Number of persisted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl CutoffResolver for FileCutoffs {
    fn resolve(&self, well: &WellRecord, _suggestion: CutoffSuggestion) -> Result<usize> {
        self.map
            .get(well.label())
            .copied()
            .ok_or_else(|| Error::UnknownWell(well.label().to_string()))
    }
}

/// Resolver that accepts the heuristic's suggestion unmodified
/// (non-interactive batch mode).
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptSuggested;

impl CutoffResolver for AcceptSuggested {
    fn resolve(&self, _well: &WellRecord, suggestion: CutoffSuggestion) -> Result<usize> {
        Ok(suggestion.suggested_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well(readings: Vec<f64>) -> WellRecord {
        WellRecord::new("A1", "wt", 0.01, readings)
    }

    #[test]
    fn test_baseline_is_min_of_first_ten() {
        let mut w = well(vec![5.0, 2.0, 8.0, 1.0, 9.0, 6.0, 7.0, 4.0, 3.0, 10.0, 0.5]);
        w.set_cutoff(0).unwrap();
        // Window is readings[0..10]; the 0.5 at index 10 is outside it
        assert_eq!(resolve_baseline(&mut w).unwrap(), 1.0);
        assert_eq!(w.baseline(), Some(1.0));
    }

    #[test]
    fn test_baseline_window_narrows_at_tail() {
        let mut w = well(vec![5.0, 2.0, 8.0, 1.0]);
        w.set_cutoff(2).unwrap();
        // Only readings[2..4] remain
        assert_eq!(resolve_baseline(&mut w).unwrap(), 1.0);
    }

    #[test]
    fn test_baseline_requires_cutoff() {
        let mut w = well(vec![5.0, 2.0]);
        let result = resolve_baseline(&mut w);
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn test_suggest_peak_inside_preview() {
        // Spike at index 2, then decay: transient suspected
        let s = suggest_cutoff(&[0.1, 0.5, 0.9, 0.2, 0.1, 0.1], 6);
        assert_eq!(s.peak_index, 2);
        assert_eq!(s.peak_value, 0.9);
        assert_eq!(s.suggested_start, 3);
    }

    #[test]
    fn test_suggest_peak_at_preview_end_means_growth() {
        // Monotone rise: max at the end of the range, no transient
        let s = suggest_cutoff(&[0.1, 0.2, 0.3, 0.4], 4);
        assert_eq!(s.peak_index, 3);
        assert_eq!(s.suggested_start, 0);
    }

    #[test]
    fn test_suggest_preview_clamped() {
        let s = suggest_cutoff(&[0.3, 0.1], DEFAULT_PREVIEW);
        assert_eq!(s.peak_index, 0);
        assert_eq!(s.suggested_start, 1);
    }

    #[test]
    fn test_suggest_empty_series() {
        let s = suggest_cutoff(&[], DEFAULT_PREVIEW);
        assert_eq!(s.suggested_start, 0);
    }

    #[test]
    fn test_file_cutoffs_resolver() {
        let mut map = HashMap::new();
        map.insert("A1".to_string(), 7);
        let resolver = FileCutoffs::new(map);
        let w = well(vec![0.0; 20]);
        let s = suggest_cutoff(w.readings(), DEFAULT_PREVIEW);
        assert_eq!(resolver.resolve(&w, s).unwrap(), 7);
    }

    #[test]
    fn test_file_cutoffs_missing_label() {
        let resolver = FileCutoffs::default();
        let w = well(vec![0.0; 5]);
        let s = suggest_cutoff(w.readings(), DEFAULT_PREVIEW);
        assert!(matches!(
            resolver.resolve(&w, s),
            Err(Error::UnknownWell(_))
        ));
    }

    #[test]
    fn test_accept_suggested_resolver() {
        let w = well(vec![0.1, 0.9, 0.2, 0.1]);
        let s = suggest_cutoff(w.readings(), DEFAULT_PREVIEW);
        assert_eq!(AcceptSuggested.resolve(&w, s).unwrap(), 2);
    }
}
