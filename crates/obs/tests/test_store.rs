//! Integration tests: single-file variable retrieval against real
//! NetCDF fixtures.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use ncdiag_io::IoError;
use ncdiag_obs::{NameMap, Obs, ObsError};

/// Write a diag-style NetCDF file with one observation dimension and
/// the given named 1-D variables.
fn write_diag(dir: &Path, filename: &str, vars: &[(&str, &[f64])]) -> PathBuf {
    let path = dir.join(filename);
    let mut file = netcdf::create(&path).expect("failed to create NetCDF file");

    let nobs = vars.first().map(|(_, v)| v.len()).unwrap_or(0);
    file.add_dimension("nobs", nobs).expect("add dim nobs");

    for &(name, values) in vars {
        let mut var = file
            .add_variable::<f64>(name, &["nobs"])
            .expect("add variable");
        var.put_values(values, ..).expect("put values");
    }

    path
}

/// Name map matching the GSI merged-diag conventions used in fixtures.
fn names() -> NameMap {
    let mut map = BTreeMap::new();
    map.insert("omf".to_string(), "Obs_Minus_Forecast".to_string());
    map.insert("oma".to_string(), "Obs_Minus_Analysis".to_string());
    map.insert("used".to_string(), "Analysis_Use_Flag".to_string());
    NameMap::new(map)
}

#[test]
fn raw_variable_by_short_name() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[("Obs_Minus_Forecast", &[1.0, -0.5, 2.25])],
    );

    let obs = Obs::new(path, names());
    let omf = obs.get_var("omf", None).unwrap();
    assert_eq!(omf, vec![1.0, -0.5, 2.25]);
}

#[test]
fn raw_variable_by_long_name() {
    let dir = tempdir().unwrap();
    let path = write_diag(dir.path(), "diag.nc4", &[("Errinv_Final", &[0.5, 0.25])]);

    let obs = Obs::new(path, names());
    let values = obs.get_var("Errinv_Final", None).unwrap();
    assert_eq!(values, vec![0.5, 0.25]);
}

#[test]
fn masked_fetch_filters_and_preserves_order() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[
            ("Obs_Minus_Forecast", &[1.0, 2.0, 3.0, 4.0]),
            ("Analysis_Use_Flag", &[1.0, 0.0, 1.0, 0.0]),
        ],
    );

    let obs = Obs::new(path, names());
    let omf = obs.get_var("omf", Some("(used==1)")).unwrap();
    assert_eq!(omf, vec![1.0, 3.0]);
}

#[test]
fn default_mask_applies_when_call_has_none() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[
            ("Obs_Minus_Forecast", &[1.0, 2.0, 3.0]),
            ("Analysis_Use_Flag", &[1.0, -1.0, 1.0]),
        ],
    );

    let obs = Obs::new(path, names()).with_mask_expr("(used==1)");
    assert_eq!(obs.get_var("omf", None).unwrap(), vec![1.0, 3.0]);
}

#[test]
fn call_mask_overrides_default() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[
            ("Obs_Minus_Forecast", &[1.0, 2.0, 3.0]),
            ("Analysis_Use_Flag", &[1.0, -1.0, 1.0]),
        ],
    );

    let obs = Obs::new(path, names()).with_mask_expr("(used==1)");
    assert_eq!(obs.get_var("omf", Some("(used==-1)")).unwrap(), vec![2.0]);
}

#[test]
fn derived_amb_subtracts_dependencies() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[
            ("Obs_Minus_Forecast", &[1.0, 2.0, 3.0]),
            ("Obs_Minus_Analysis", &[0.5, 1.0, 1.5]),
        ],
    );

    let obs = Obs::new(path, names());
    let amb = obs.get_var("amb", None).unwrap();
    assert_eq!(amb, vec![0.5, 1.0, 1.5]);
}

#[test]
fn derived_amb_applies_mask_to_each_dependency() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[
            ("Obs_Minus_Forecast", &[1.0, 2.0, 3.0, 4.0]),
            ("Obs_Minus_Analysis", &[0.5, 0.5, 0.5, 0.5]),
            ("Analysis_Use_Flag", &[1.0, 0.0, 0.0, 1.0]),
        ],
    );

    let obs = Obs::new(path, names());
    let amb = obs.get_var("amb", Some("(used==1)")).unwrap();
    assert_eq!(amb, vec![0.5, 3.5]);
}

#[test]
fn derived_sigo_reciprocal_with_cap() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[("Errinv_Final", &[0.0001, 1.0, 0.0])],
    );

    let obs = Obs::new(path, names());
    let sigo = obs.get_var("sigo", None).unwrap();
    // 1/0.0001 and 1/0 both exceed the cap and become the sentinel.
    assert_eq!(sigo, vec![-9999.9, 1.0, -9999.9]);

    // sigo_final reads the same field.
    let sigo_final = obs.get_var("sigo_final", None).unwrap();
    assert_eq!(sigo_final, sigo);
}

#[test]
fn derived_sigo_input_reads_input_field() {
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[("Errinv_Input", &[2.0, 4.0]), ("Errinv_Final", &[1.0, 1.0])],
    );

    let obs = Obs::new(path, names());
    let sigo_input = obs.get_var("sigo_input", None).unwrap();
    assert_eq!(sigo_input, vec![0.5, 0.25]);
}

#[test]
fn missing_file_propagates_io_error() {
    let obs = Obs::new("/tmp/ncdiag_test_no_such_diag.nc4", names());
    let err = obs.get_var("omf", None).unwrap_err();
    assert!(
        matches!(err, ObsError::Io(IoError::FileNotFound { .. })),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn missing_variable_propagates_io_error() {
    let dir = tempdir().unwrap();
    let path = write_diag(dir.path(), "diag.nc4", &[("Observation", &[1.0])]);

    let obs = Obs::new(path, names());
    let err = obs.get_var("omf", None).unwrap_err();
    assert!(
        matches!(err, ObsError::Io(IoError::MissingVariable { .. })),
        "expected MissingVariable, got {err:?}",
    );
}

#[test]
fn malformed_mask_rejected_before_filtering() {
    let dir = tempdir().unwrap();
    let path = write_diag(dir.path(), "diag.nc4", &[("Obs_Minus_Forecast", &[1.0])]);

    let obs = Obs::new(path, names());
    let err = obs.get_var("omf", Some("used==1")).unwrap_err();
    assert!(matches!(err, ObsError::MaskFormat { .. }));
}

#[test]
fn mask_field_resolves_through_name_map() {
    // The mask field is given by short name and read under its long name.
    let dir = tempdir().unwrap();
    let path = write_diag(
        dir.path(),
        "diag.nc4",
        &[
            ("Observation", &[5.0, 6.0]),
            ("Analysis_Use_Flag", &[0.0, 1.0]),
        ],
    );

    let obs = Obs::new(path, names());
    let kept = obs.get_var("Observation", Some("(used==1)")).unwrap();
    assert_eq!(kept, vec![6.0]);
}
