//! Doubling-times report writer
//!
//! Tab-delimited, one banner line, two header rows (window start
//! timepoints and the hour intervals they cover), then one row per well:
//!
//! ```text
//! OD600 Doubling Times
//! - \t - \t - \t - \t Timepoint: \t 0 \t 1 ...
//! Well \t Strain \t Dilution \t First Timepoint After Artifact \t Interval (hrs): \t 0 - 3.33 ...
//! A1 \t wt \t 0.01 \t 12 \t\t 1.04 \t 1.11 ...
//! ```
//!
//! Wells appear in plate order; a well absent from the result set (failed
//! and skipped upstream) gets no row. An unresolved cutoff prints as -1,
//! keeping the column format of the workflow this report feeds.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::ResultSet;
use crate::plate::Plate;
use crate::Result;

/// Write the doubling-times report for one run.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] on write failure.
pub fn write_report<W: Write>(mut writer: W, plate: &Plate, results: &ResultSet) -> Result<()> {
    let hours = plate.time_axis().hours();
    let window = results.window_size();

    writeln!(writer, "OD600 Doubling Times")?;

    write!(writer, "-\t-\t-\t-\tTimepoint:")?;
    let mut n = 0;
    while n + window < hours.len() {
        write!(writer, "\t{n}")?;
        n += 1;
    }
    writeln!(writer)?;

    write!(
        writer,
        "Well\tStrain\tDilution\tFirst Timepoint After Artifact\tInterval (hrs):"
    )?;
    let mut n = 0;
    while n + window < hours.len() {
        write!(writer, "\t{} - {}", hours[n], hours[n + window])?;
        n += 1;
    }
    writeln!(writer)?;

    for well in plate.wells() {
        let Some(estimates) = results.get(well.label()) else {
            continue;
        };
        let cutoff = well.cutoff().map_or(-1, |c| c as i64);
        write!(
            writer,
            "{}\t{}\t{}\t{}\t",
            well.label(),
            well.strain(),
            well.dilution(),
            cutoff
        )?;
        for estimate in estimates {
            write!(writer, "\t{estimate}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write the report to disk.
///
/// # Errors
///
/// See [`write_report`].
pub fn save_report(path: &Path, plate: &Plate, results: &ResultSet) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, plate, results)?;
    writer.flush()?;
    Ok(())
}
