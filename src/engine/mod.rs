//! Doubling-Time Engine - the preprocessing and estimation pipeline
//!
//! **Problem**: raw plate-reader series carry a startup transient and a
//! baseline offset, and contain non-physical (zero/negative) readings that
//! a log transform would turn into `NaN`/`-inf` and corrupt every
//! downstream regression.
//!
//! **Solution**: a fixed pipeline per well:
//!
//! ```text
//! raw readings ──(cutoff s, baseline = min over 10 after s)──▶ baseline
//!      │
//!      └─▶ readings - baseline ──(repair ≤0, log2)──▶ conditioned series
//!                │
//!                └─▶ stride-1 window of width W, OLS per window
//!                        └─▶ doubling time = 1/slope per window
//! ```
//!
//! The stages are pure computations over in-memory sequences; file formats
//! and interactive cutoff review live in collaborators ([`crate::io`] and
//! implementors of [`baseline::CutoffResolver`]).

pub mod baseline;
pub mod conditioner;
pub mod estimator;
pub mod regression;
pub mod result_set;

pub use baseline::{AcceptSuggested, CutoffResolver, CutoffSuggestion, FileCutoffs};
pub use result_set::ResultSet;
