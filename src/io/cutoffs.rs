//! Persisted per-well artifact-cutoff indices
//!
//! One row per well, tab-delimited:
//!
//! ```text
//! A1    12
//! A2    0
//! ```
//!
//! Reviewing 96 curves is slow, so confirmed indices are written out once
//! and reloaded on later runs.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::plate::Plate;
use crate::{Error, Result};

/// Parse a cutoff file into a label → index map.
///
/// # Errors
///
/// Returns [`Error::Parse`] on a malformed row and [`Error::Io`] on read
/// failure.
pub fn read_cutoffs<R: BufRead>(reader: R) -> Result<HashMap<String, usize>> {
    let mut cutoffs = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split('\t');
        let (Some(label), Some(index)) = (tokens.next(), tokens.next()) else {
            return Err(Error::Parse(format!(
                "cutoff row needs label and index: {line:?}"
            )));
        };
        let index: usize = index.trim().parse().map_err(|_| {
            Error::Parse(format!("non-integer cutoff index {index:?} for well {label}"))
        })?;
        cutoffs.insert(label.trim().to_string(), index);
    }
    Ok(cutoffs)
}

/// Load a cutoff file from disk.
///
/// # Errors
///
/// See [`read_cutoffs`]; additionally [`Error::Io`] when the file cannot
/// be opened.
pub fn load_cutoffs(path: &Path) -> Result<HashMap<String, usize>> {
    read_cutoffs(BufReader::new(File::open(path)?))
}

/// Write the resolved cutoff of every well on the plate, in plate order.
///
/// # Errors
///
/// Returns [`Error::Precondition`] if any well's cutoff is still
/// unresolved (persist only confirmed indices) and [`Error::Io`] on write
/// failure.
pub fn write_cutoffs<W: Write>(mut writer: W, plate: &Plate) -> Result<()> {
    for well in plate.wells() {
        let cutoff = well.cutoff().ok_or_else(|| {
            Error::Precondition(format!(
                "cutoff for well {} unresolved, nothing to persist",
                well.label()
            ))
        })?;
        writeln!(writer, "{}\t{}", well.label(), cutoff)?;
    }
    Ok(())
}

/// Save every well's resolved cutoff to disk.
///
/// # Errors
///
/// See [`write_cutoffs`].
pub fn save_cutoffs(path: &Path, plate: &Plate) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_cutoffs(&mut writer, plate)?;
    writer.flush()?;
    Ok(())
}
