//! # Plategrowth: Microplate Growth-Curve Analytics Engine
//!
//! Plategrowth estimates exponential doubling times per well of a 96-well
//! plate from optical-density time series, tolerating instrument startup
//! artifacts, baseline offset, and non-physical (zero/negative) readings.
//!
//! ## Pipeline
//!
//! 1. **Cutoff** - where the instrument's startup transient ends, per
//!    well: loaded from a persisted file or confirmed through the
//!    [`engine::baseline::CutoffResolver`] seam.
//! 2. **Baseline** - noise floor, the minimum over the ten readings after
//!    the cutoff; subtracted from the full series.
//! 3. **Conditioning** - non-positive values repaired (epsilon at index
//!    0, carry-forward hold after), then log2.
//! 4. **Estimation** - a stride-1 window of width W over the conditioned
//!    series; one least-squares fit per window; doubling time = 1/slope.
//!
//! ## Example Usage
//!
//! ```rust
//! use plategrowth::plate::{Plate, TimeAxis, WellRecord};
//! use plategrowth::Analyzer;
//!
//! // One well, doubling every hour
//! let axis = TimeAxis::from_seconds(vec![0.0, 3600.0, 7200.0, 10800.0, 14400.0])?;
//! let mut plate = Plate::new(axis);
//! plate.add_well(WellRecord::new("A1", "MG1655", 0.01, vec![1.0, 2.0, 4.0, 8.0, 16.0]))?;
//! plate.get_mut("A1").unwrap().set_cutoff(0)?;
//!
//! let mut analyzer = Analyzer::new(plate, 3);
//! analyzer.resolve_baselines()?;
//! let results = analyzer.run()?;
//!
//! let estimates = results.get("A1").unwrap();
//! assert_eq!(estimates.len(), 2);
//! # Ok::<(), plategrowth::Error>(())
//! ```
//!
//! File parsing for the instrument export, the annotation file, persisted
//! cutoffs and the doubling-times report lives in [`io`]; interactive
//! cutoff review (plot, confirm, override) is left to callers through the
//! resolver seam.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod analyzer;
pub mod engine;
pub mod error;
pub mod io;
pub mod plate;

pub use analyzer::Analyzer;
pub use engine::ResultSet;
pub use error::{Error, Result};
