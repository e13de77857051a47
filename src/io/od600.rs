//! OD600 export and annotation file parsing
//!
//! The OD600 file is a tab-delimited copy of the OD600 section of the
//! instrument's data file:
//!
//! ```text
//! OD600
//! Cycle Nr.   1     2     3    ...
//! Time [s]    0     300   600  ...
//! Temp [C]    37    37    37   ...
//! A1          0.01  0.02  0.03 ...
//! ...
//! H12         0.01  0.02  0.03 ...
//! ```
//!
//! The annotation file is hand-made, one row per well:
//!
//! ```text
//! A1    [strain name]    [dilution]
//! ```
//!
//! Rows are joined one-to-one by well label (map-based; row order in the
//! two files need not match).

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::plate::{Plate, TimeAxis, WellRecord};
use crate::{Error, Result};

/// Strain and dilution for one well, parsed from the annotation file.
#[derive(Debug, Clone, PartialEq)]
pub struct WellAnnotation {
    /// Strain name
    pub strain: String,
    /// Dilution
    pub dilution: f64,
}

fn parse_number(token: &str, context: &str) -> Result<f64> {
    token
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("non-numeric value {token:?} in {context}")))
}

fn next_line<B: BufRead>(lines: &mut std::io::Lines<B>, what: &str) -> Result<String> {
    lines
        .next()
        .transpose()?
        .ok_or_else(|| Error::Parse(format!("OD600 file ended before {what}")))
}

/// Parse the OD600 section: the time axis plus one labeled reading row
/// per well, in file order.
///
/// # Errors
///
/// Returns [`Error::Parse`] on a truncated header or non-numeric token
/// and [`Error::Io`] on read failure. Row-length consistency is *not*
/// checked here; the join into a [`Plate`] enforces it against the time
/// axis.
pub fn parse_od600<R: BufRead>(reader: R) -> Result<(TimeAxis, Vec<(String, Vec<f64>)>)> {
    let mut lines = reader.lines();

    next_line(&mut lines, "the OD600 banner")?; // "OD600"
    next_line(&mut lines, "the cycle-number row")?; // "Cycle Nr. ..."

    let time_row = next_line(&mut lines, "the time row")?;
    let mut tokens = time_row.split('\t');
    tokens.next(); // "Time [s]" label
    let seconds = tokens
        .map(|t| parse_number(t, "time row"))
        .collect::<Result<Vec<f64>>>()?;
    let axis = TimeAxis::from_seconds(seconds)?;

    next_line(&mut lines, "the temperature row")?; // "Temp [C] ..."

    let mut rows = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split('\t');
        let label = tokens
            .next()
            .ok_or_else(|| Error::Parse("reading row without a well label".to_string()))?
            .trim()
            .to_string();
        let context = format!("readings of well {label}");
        let readings = tokens
            .map(|t| parse_number(t, &context))
            .collect::<Result<Vec<f64>>>()?;
        rows.push((label, readings));
    }

    Ok((axis, rows))
}

/// Parse the annotation file into a label → annotation map.
///
/// # Errors
///
/// Returns [`Error::Parse`] on a malformed row (fewer than three
/// tab-separated columns, non-numeric dilution).
pub fn parse_annotations<R: BufRead>(reader: R) -> Result<HashMap<String, WellAnnotation>> {
    let mut annotations = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split('\t');
        let (Some(label), Some(strain), Some(dilution)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(Error::Parse(format!(
                "annotation row needs label, strain and dilution: {line:?}"
            )));
        };
        let label = label.trim().to_string();
        let dilution = parse_number(dilution, &format!("dilution of well {label}"))?;
        annotations.insert(
            label,
            WellAnnotation {
                strain: strain.trim().to_string(),
                dilution,
            },
        );
    }
    Ok(annotations)
}

/// Join parsed OD600 rows with their annotations into a [`Plate`], in
/// OD600 row order.
///
/// # Errors
///
/// Returns [`Error::UnknownWell`] for a reading row with no annotation,
/// [`Error::InputShape`] when a row's length differs from the time axis,
/// and [`Error::Precondition`] for duplicate labels or an over-full
/// plate.
pub fn join_plate(
    axis: TimeAxis,
    rows: Vec<(String, Vec<f64>)>,
    annotations: &HashMap<String, WellAnnotation>,
) -> Result<Plate> {
    let mut plate = Plate::new(axis);
    for (label, readings) in rows {
        let annotation = annotations
            .get(&label)
            .ok_or_else(|| Error::UnknownWell(label.clone()))?;
        plate.add_well(WellRecord::new(
            label,
            annotation.strain.clone(),
            annotation.dilution,
            readings,
        ))?;
    }
    Ok(plate)
}

/// Read and join the OD600 export and annotation files from disk.
///
/// # Errors
///
/// Any parse or join failure from [`parse_od600`], [`parse_annotations`]
/// or [`join_plate`], plus [`Error::Io`] on file access.
pub fn read_plate(od600_path: &Path, annotations_path: &Path) -> Result<Plate> {
    let (axis, rows) = parse_od600(BufReader::new(File::open(od600_path)?))?;
    let annotations = parse_annotations(BufReader::new(File::open(annotations_path)?))?;
    let plate = join_plate(axis, rows, &annotations)?;
    info!(
        wells = plate.len(),
        timepoints = plate.time_axis().len(),
        "plate loaded"
    );
    Ok(plate)
}
