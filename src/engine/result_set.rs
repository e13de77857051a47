//! Result Set - per-well doubling-time sequences for one analysis run
//!
//! An explicit value returned to the caller (not process-global state):
//! the ordered mapping from well label to that well's window estimates,
//! plus the provenance a report writer needs (window size, creation
//! time).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered well label → doubling-time sequence mapping for one run.
///
/// Insertion order is preserved exactly (no reordering, no merging across
/// wells) so report rows come out in plate order. Lookup by label is
/// O(1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    window_size: usize,
    created_at: DateTime<Utc>,
    order: Vec<String>,
    rates: HashMap<String, Vec<f64>>,
}

impl ResultSet {
    /// Create an empty result set for a run with the given window size.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            created_at: Utc::now(),
            order: Vec::new(),
            rates: HashMap::new(),
        }
    }

    /// The window size the run used.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// When this result set was produced.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Record one well's estimate sequence. First insertion of a label
    /// fixes its position; re-inserting a label replaces its sequence
    /// without moving it.
    pub fn insert(&mut self, label: impl Into<String>, estimates: Vec<f64>) {
        let label = label.into();
        if !self.rates.contains_key(&label) {
            self.order.push(label.clone());
        }
        self.rates.insert(label, estimates);
    }

    /// Get a well's estimate sequence by label, O(1).
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.rates.get(label).map(Vec::as_slice)
    }

    /// Well labels in insertion order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    /// Iterate `(label, estimates)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.order
            .iter()
            .map(|label| (label.as_str(), self.rates[label].as_slice()))
    }

    /// Number of wells with recorded estimates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether any well has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
