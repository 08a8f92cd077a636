//! Loading observation files and converting them in batch.

use altaz::io::{load_records, parse_records_str};
use altaz::{convert_batch, AltazConfig};
use std::io::Write;
use std::path::Path;

fn shipped_observations() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/observations.json")
}

#[test]
fn shipped_observations_load() {
    let records = load_records(&shipped_observations()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Sirius from Paris");
    assert_eq!(records[1].latitude, 50.0);
}

#[test]
fn shipped_observations_convert() {
    let records = load_records(&shipped_observations()).unwrap();
    let config = AltazConfig::default();
    let summary = convert_batch(&records, &config.engine(), &config).unwrap();

    assert!(summary.failures.is_empty());
    assert!(summary.reports[0].within_tolerance, "{:?}", summary.reports[0]);
    // the quoted answer for the 1980 observation is about 23 degrees off in RA
    let synthetic = &summary.reports[1];
    assert!(!synthetic.within_tolerance);
    assert!(synthetic.ra_residual_deg > 20.0);

    let mismatched: Vec<_> = summary.mismatches().map(|r| r.name.as_str()).collect();
    assert_eq!(mismatched, vec!["Synthetic 1980"]);
}

#[test]
fn bad_record_does_not_abort_batch() {
    let json = r#"[
        {"name": "north pole", "latitude": 90, "longitude": 0, "az": 0, "alt": 45,
         "time": "2024-06-21T00:00:00", "ra": 0, "de": 45},
        {"name": "impossible", "latitude": 95, "longitude": 0, "az": 0, "alt": 45,
         "time": "2024-06-21T00:00:00", "ra": 0, "de": 45}
    ]"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let records = load_records(file.path()).unwrap();
    let config = AltazConfig::default();
    let summary = convert_batch(&records, &config.engine(), &config).unwrap();

    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].name, "impossible");
    assert!(summary.failures[0].error.contains("Latitude"), "{}", summary.failures[0].error);
    // at the pole, altitude equals declination
    let dec = summary.reports[0].computed.declination().in_degrees();
    assert!((dec - 45.0).abs() < 0.5, "{dec}");
}

#[test]
fn malformed_file_reports_field() {
    let err = parse_records_str(r#"[{"name": 3}]"#).unwrap_err();
    assert!(err.to_string().contains("[0].name"), "{err}");
}

#[test]
fn legacy_formatting_from_config() {
    let records = load_records(&shipped_observations()).unwrap();
    let config: AltazConfig = "[format]\nseconds_decimals = 0\nrounding = \"legacy\"".parse().unwrap();
    let summary = convert_batch(&records[..1], &config.engine(), &config).unwrap();
    assert_eq!(summary.reports[0].ra_hms, "6h45m7s");
    assert_eq!(summary.reports[0].dec_dms, "-16d43m28s");
}
