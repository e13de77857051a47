//! Plate Store - the run-scoped collection of wells plus the shared axis
//!
//! ## Design
//!
//! Wells are stored in plate order (A1..H12 as joined) with a label-keyed
//! hash index for O(1) lookup. The well set is fixed in count and identity
//! for the duration of a run; only each well's cutoff and baseline mutate
//! during preprocessing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{TimeAxis, WellRecord};
use crate::{Error, Result};

/// Maximum number of wells on the supported plate format (8 rows x 12
/// columns).
pub const PLATE_CAPACITY: usize = 96;

/// A microplate joined for one analysis run: up to [`PLATE_CAPACITY`]
/// wells sharing one read-only [`TimeAxis`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plate {
    time_axis: TimeAxis,
    wells: Vec<WellRecord>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Plate {
    /// Create an empty plate over the given time axis.
    #[must_use]
    pub fn new(time_axis: TimeAxis) -> Self {
        Self {
            time_axis,
            wells: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get the shared time axis.
    #[must_use]
    pub const fn time_axis(&self) -> &TimeAxis {
        &self.time_axis
    }

    /// Add a well to the plate, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputShape`] if the well's series length differs
    /// from the time axis, and [`Error::Precondition`] on a duplicate
    /// label or a full plate.
    pub fn add_well(&mut self, well: WellRecord) -> Result<()> {
        if well.len() != self.time_axis.len() {
            return Err(Error::InputShape {
                context: format!("readings of well {} vs time axis", well.label()),
                expected: self.time_axis.len(),
                actual: well.len(),
            });
        }
        if self.index.contains_key(well.label()) {
            return Err(Error::Precondition(format!(
                "duplicate well label: {}",
                well.label()
            )));
        }
        if self.wells.len() >= PLATE_CAPACITY {
            return Err(Error::Precondition(format!(
                "plate capacity of {PLATE_CAPACITY} wells exceeded"
            )));
        }
        self.index.insert(well.label().to_string(), self.wells.len());
        self.wells.push(well);
        Ok(())
    }

    /// Look up a well by label, O(1).
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&WellRecord> {
        self.index.get(label).map(|&i| &self.wells[i])
    }

    /// Look up a well mutably by label, O(1).
    #[must_use]
    pub fn get_mut(&mut self, label: &str) -> Option<&mut WellRecord> {
        self.index.get(label).map(|&i| &mut self.wells[i])
    }

    /// All wells in plate order.
    #[must_use]
    pub fn wells(&self) -> &[WellRecord] {
        &self.wells
    }

    /// All wells in plate order, mutably (for the preprocessing passes).
    #[must_use]
    pub fn wells_mut(&mut self) -> &mut [WellRecord] {
        &mut self.wells
    }

    /// Number of wells on the plate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wells.len()
    }

    /// Check whether the plate has no wells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// Rebuild the label index. Needed after deserialization, which skips
    /// the index field.
    pub fn rebuild_index(&mut self) {
        self.index = self
            .wells
            .iter()
            .enumerate()
            .map(|(i, w)| (w.label().to_string(), i))
            .collect();
    }
}
