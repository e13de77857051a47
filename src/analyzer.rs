//! Analyzer - run orchestration over a joined plate
//!
//! Drives the fixed pipeline in order: cutoff resolution (through a
//! [`CutoffResolver`]), baseline resolution, then per-well conditioning
//! and estimation into a [`ResultSet`]. Per-well estimation shares no
//! mutable state, so with the default `rayon` feature the estimation pass
//! fans out across wells.

use tracing::{debug, info};

use crate::engine::baseline::{self, CutoffResolver, DEFAULT_PREVIEW};
use crate::engine::{conditioner, estimator, ResultSet};
use crate::plate::{Plate, WellRecord};
use crate::{Error, Result};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Orchestrates one analysis run over a plate.
///
/// The window size is caller-supplied configuration with no internal
/// default; any positive value is accepted, though only a window smaller
/// than the series length produces output.
#[derive(Debug)]
pub struct Analyzer {
    plate: Plate,
    window_size: usize,
    preview: usize,
}

impl Analyzer {
    /// Create an analyzer over a joined plate with an explicit window
    /// size (number of timepoints per regression window).
    #[must_use]
    pub fn new(plate: Plate, window_size: usize) -> Self {
        Self {
            plate,
            window_size,
            preview: DEFAULT_PREVIEW,
        }
    }

    /// Override how many leading samples the cutoff heuristic inspects
    /// (default [`DEFAULT_PREVIEW`]).
    #[must_use]
    pub fn with_preview(mut self, preview: usize) -> Self {
        self.preview = preview;
        self
    }

    /// The plate under analysis.
    #[must_use]
    pub const fn plate(&self) -> &Plate {
        &self.plate
    }

    /// The plate under analysis, mutably (e.g. for manual cutoff edits
    /// before the baseline pass).
    pub fn plate_mut(&mut self) -> &mut Plate {
        &mut self.plate
    }

    /// Consume the analyzer and return the plate.
    #[must_use]
    pub fn into_plate(self) -> Plate {
        self.plate
    }

    /// Resolve the artifact cutoff for every well that lacks one, feeding
    /// each well's heuristic suggestion through `resolver`.
    ///
    /// Wells with an already-resolved cutoff are left untouched, so a
    /// partial cutoff file plus an [`baseline::AcceptSuggested`] second
    /// pass compose cleanly.
    ///
    /// # Errors
    ///
    /// The first failing well aborts the pass, wrapped as
    /// [`Error::Well`].
    pub fn resolve_cutoffs(&mut self, resolver: &dyn CutoffResolver) -> Result<()> {
        let preview = self.preview;
        for well in self.plate.wells_mut() {
            if well.cutoff().is_some() {
                continue;
            }
            let suggestion = baseline::suggest_cutoff(well.readings(), preview);
            let index = match resolver.resolve(well, suggestion) {
                Ok(index) => index,
                Err(e) => return Err(Error::for_well(well.label(), e)),
            };
            if let Err(e) = well.set_cutoff(index) {
                return Err(Error::for_well(well.label(), e));
            }
            debug!(
                well = well.label(),
                peak = suggestion.peak_index,
                cutoff = index,
                "cutoff resolved"
            );
        }
        Ok(())
    }

    /// Resolve the baseline for every well (minimum over the fixed window
    /// after each well's cutoff).
    ///
    /// # Errors
    ///
    /// The first failing well aborts the pass, wrapped as
    /// [`Error::Well`]; an unresolved cutoff anywhere is a caller error
    /// surfaced as a precondition failure for that well.
    pub fn resolve_baselines(&mut self) -> Result<()> {
        for well in self.plate.wells_mut() {
            baseline::resolve_baseline(well).map_err(|e| Error::for_well(well.label(), e))?;
        }
        Ok(())
    }

    /// Condition and estimate a single well against the shared time axis.
    fn analyze_well(&self, well: &WellRecord) -> Result<Vec<f64>> {
        let log_series = conditioner::condition(well)?;
        estimator::estimate_doubling_times(
            &log_series,
            self.plate.time_axis().hours(),
            self.window_size,
        )
    }

    /// Run estimation over every well, failing the whole run on the first
    /// per-well failure (abort policy).
    ///
    /// # Errors
    ///
    /// Returns the first per-well failure as [`Error::Well`]. No partial
    /// result set is returned on failure.
    pub fn run(&self) -> Result<ResultSet> {
        let (results, mut failures) = self.run_partial();
        if let Some((label, source)) = failures.drain(..).next() {
            return Err(Error::for_well(label, source));
        }
        info!(
            wells = results.len(),
            window = self.window_size,
            "plate run complete"
        );
        Ok(results)
    }

    /// Run estimation over every well, collecting per-well failures
    /// instead of aborting (skip policy).
    ///
    /// Successful wells land in the [`ResultSet`] in plate order; failed
    /// wells are returned as `(label, error)` pairs so the caller can
    /// log, retry upstream, or abort. A failed well is never silently
    /// dropped.
    #[must_use]
    pub fn run_partial(&self) -> (ResultSet, Vec<(String, Error)>) {
        #[cfg(feature = "rayon")]
        let outcomes: Vec<(String, Result<Vec<f64>>)> = self
            .plate
            .wells()
            .par_iter()
            .map(|well| (well.label().to_string(), self.analyze_well(well)))
            .collect();

        #[cfg(not(feature = "rayon"))]
        let outcomes: Vec<(String, Result<Vec<f64>>)> = self
            .plate
            .wells()
            .iter()
            .map(|well| (well.label().to_string(), self.analyze_well(well)))
            .collect();

        let mut results = ResultSet::new(self.window_size);
        let mut failures = Vec::new();
        for (label, outcome) in outcomes {
            match outcome {
                Ok(estimates) => {
                    debug!(well = %label, windows = estimates.len(), "well estimated");
                    results.insert(label, estimates);
                }
                Err(source) => failures.push((label, source)),
            }
        }
        (results, failures)
    }
}
