//! File-format collaborators for the engine
//!
//! Thin parse/serialize layers over the tab-delimited files the plate
//! workflow exchanges; no analysis logic lives here.
//!
//! - [`od600`] - the instrument's OD600 export section and the hand-made
//!   annotation file, joined into a [`crate::plate::Plate`];
//! - [`cutoffs`] - the persisted per-well artifact-cutoff index file;
//! - [`report`] - the doubling-times report the run produces.

pub mod cutoffs;
pub mod od600;
pub mod report;
