//! Plate Schema - wells, shared time axis, and the run-scoped store
//!
//! This module provides the data structures for one analysis run over a
//! microplate, joined from the instrument export and the hand-made
//! annotation file.
//!
//! ## Schema Overview
//!
//! ```text
//! Plate (1) ──< WellRecord (N, ≤ 96)   [label-keyed O(1) lookup]
//!   │
//!   └── TimeAxis (1, shared read-only) [seconds + co-derived hours]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use plategrowth::plate::{Plate, TimeAxis, WellRecord};
//!
//! let axis = TimeAxis::from_seconds(vec![0.0, 3600.0, 7200.0])?;
//! let mut plate = Plate::new(axis);
//!
//! let well = WellRecord::new("A1", "MG1655", 0.01, vec![0.02, 0.04, 0.08]);
//! plate.add_well(well)?;
//!
//! assert_eq!(plate.get("A1").unwrap().strain(), "MG1655");
//! # Ok::<(), plategrowth::Error>(())
//! ```

mod store;
mod time_axis;
mod well;

pub use store::{Plate, PLATE_CAPACITY};
pub use time_axis::{TimeAxis, SECONDS_PER_HOUR};
pub use well::WellRecord;
