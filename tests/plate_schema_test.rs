//! Plate schema tests: records, axis, and the label-keyed store

use plategrowth::plate::{Plate, TimeAxis, WellRecord, PLATE_CAPACITY};
use plategrowth::Error;

// =============================================================================
// WellRecord Tests
// =============================================================================

#[test]
fn test_well_record_creation() {
    let well = WellRecord::new("A1", "MG1655", 0.01, vec![0.02, 0.04, 0.08]);

    assert_eq!(well.label(), "A1");
    assert_eq!(well.strain(), "MG1655");
    assert_eq!(well.dilution(), 0.01);
    assert_eq!(well.readings(), &[0.02, 0.04, 0.08]);
    assert_eq!(well.cutoff(), None);
    assert_eq!(well.baseline(), None);
}

#[test]
fn test_well_record_resolution_is_single_shot() {
    let mut well = WellRecord::new("A1", "wt", 0.01, vec![0.1, 0.2, 0.3]);

    well.set_cutoff(1).expect("first cutoff resolution");
    well.set_baseline(0.05).expect("first baseline resolution");

    assert!(matches!(well.set_cutoff(0), Err(Error::Precondition(_))));
    assert!(matches!(well.set_baseline(0.0), Err(Error::Precondition(_))));
}

#[test]
fn test_well_record_serialization() {
    let mut well = WellRecord::new("B3", "mutant", 0.1, vec![0.1, 0.2]);
    well.set_cutoff(1).unwrap();
    well.set_baseline(-0.02).unwrap();

    let json = serde_json::to_string(&well).expect("serialization failed");
    let restored: WellRecord = serde_json::from_str(&json).expect("deserialization failed");

    assert_eq!(restored, well);
    assert_eq!(restored.cutoff(), Some(1));
    assert_eq!(restored.baseline(), Some(-0.02));
}

// =============================================================================
// TimeAxis Tests
// =============================================================================

#[test]
fn test_time_axis_hours_co_derived() {
    let axis = TimeAxis::from_seconds(vec![0.0, 900.0, 1800.0, 3600.0]).unwrap();
    assert_eq!(axis.hours(), &[0.0, 0.25, 0.5, 1.0]);
    assert_eq!(axis.seconds().len(), axis.hours().len());
}

#[test]
fn test_time_axis_rejects_decreasing_timestamps() {
    assert!(matches!(
        TimeAxis::from_seconds(vec![0.0, 300.0, 200.0]),
        Err(Error::Precondition(_))
    ));
}

// =============================================================================
// Plate Store Tests
// =============================================================================

fn axis_of(n: usize) -> TimeAxis {
    TimeAxis::from_seconds((0..n).map(|i| i as f64 * 300.0).collect()).unwrap()
}

#[test]
fn test_plate_join_and_lookup() {
    let mut plate = Plate::new(axis_of(2));
    plate
        .add_well(WellRecord::new("A1", "wt", 0.01, vec![0.1, 0.2]))
        .unwrap();
    plate
        .add_well(WellRecord::new("H12", "mutant", 0.1, vec![0.3, 0.4]))
        .unwrap();

    assert_eq!(plate.len(), 2);
    assert_eq!(plate.get("H12").unwrap().strain(), "mutant");
    assert!(plate.get("D6").is_none());
    assert_eq!(plate.time_axis().len(), 2);
}

#[test]
fn test_plate_enforces_shared_axis_cardinality() {
    let mut plate = Plate::new(axis_of(5));
    let result = plate.add_well(WellRecord::new("A1", "wt", 0.01, vec![0.1, 0.2]));
    assert!(matches!(
        result,
        Err(Error::InputShape {
            expected: 5,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn test_plate_capacity_is_96() {
    assert_eq!(PLATE_CAPACITY, 96);
}

#[test]
fn test_plate_well_identity_fixed_labels() {
    let mut plate = Plate::new(axis_of(1));
    plate
        .add_well(WellRecord::new("A1", "wt", 0.01, vec![0.1]))
        .unwrap();
    assert!(plate
        .add_well(WellRecord::new("A1", "other", 0.5, vec![0.2]))
        .is_err());
}
