// tests/test_packages.rs
use std::fs;

use workout_core::{load_packages, parse_packages, sample_packages, Package, PackageError};

#[test]
fn test_parse_tuple_and_object_forms() {
    let json = r#"[
        ["SWM", [720, 1, 80, 25, 40]],
        {"code": "RUN", "data": [15000, 1, 75]},
        {"workout_type": "WLK", "data": [9000, 1.5, 75, 180]}
    ]"#;
    let packages = parse_packages(json).unwrap();
    assert_eq!(
        packages,
        vec![
            Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            Package::new("RUN", [15000.0, 1.0, 75.0]),
            Package::new("WLK", [9000.0, 1.5, 75.0, 180.0]),
        ]
    );
}

#[test]
fn test_parse_error_reports_path() {
    let json = r#"[["RUN", [15000, 1, 75]], ["RUN", "fast"]]"#;
    match parse_packages(json) {
        Err(PackageError::Parse { path, .. }) => assert_eq!(path, "[1]"),
        other => panic!("expected parse error, got {:?}", other),
    }

    assert!(matches!(parse_packages("[] trailing"), Err(PackageError::Parse { .. })));
}

#[test]
fn test_unknown_codes_survive_parsing() {
    // koden valideres først i dispatcheren
    let packages = parse_packages(r#"[["XYZ", [1, 2, 3]]]"#).unwrap();
    assert_eq!(packages[0].code, "XYZ");
}

#[test]
fn test_load_packages_from_file() {
    let path = std::env::temp_dir().join(format!("workout_packages_{}.json", std::process::id()));
    let json = serde_json::to_string(&sample_packages()).unwrap();
    fs::write(&path, json).unwrap();

    let loaded = load_packages(&path).expect("load_packages failed");
    assert_eq!(loaded, sample_packages());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_missing_file() {
    let err = load_packages("tests/does_not_exist.json").unwrap_err();
    assert!(matches!(err, PackageError::Io { .. }));
}
