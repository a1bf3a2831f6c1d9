// tests/test_dispatch.rs
use workout_core::{read_package, Workout, WorkoutError};

#[test]
fn test_read_package_run() {
    let w = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert!(matches!(w, Workout::Running(_)));
    assert_eq!(
        w.summarize().get_message(),
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 797.805."
    );
}

#[test]
fn test_read_package_wlk() {
    let w = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert!(matches!(w, Workout::SportsWalking(_)));
    assert_eq!(
        w.summarize().to_string(),
        "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories burned: 349.252."
    );
}

#[test]
fn test_read_package_swm() {
    let w = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    match w {
        Workout::Swimming(s) => {
            assert_eq!(s.length_pool(), 25.0);
            assert_eq!(s.count_pool(), 40);
        }
        other => panic!("expected Swimming, got {:?}", other),
    }
    assert_eq!(
        w.summarize().get_message(),
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories burned: 336.000."
    );
}

#[test]
fn test_unknown_code_is_invalid_input() {
    let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, WorkoutError::InvalidInput { code: "XYZ".into() });
    assert!(err.to_string().starts_with("invalid input"));
    assert!(err.is_invalid_input());
}

#[test]
fn test_arity_mismatch() {
    let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
    assert_eq!(err, WorkoutError::Arity { code: "RUN".into(), expected: 3, got: 2 });

    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::Arity { expected: 5, got: 6, .. }));

    assert!(read_package("WLK", &[]).is_err());
}

#[test]
fn test_invalid_values() {
    // varighet 0 → valideringsfeil, ikke deling på null
    assert!(matches!(
        read_package("RUN", &[15000.0, 0.0, 75.0]),
        Err(WorkoutError::InvalidValue { field: "duration", .. })
    ));
    assert!(matches!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]),
        Err(WorkoutError::InvalidValue { field: "height", .. })
    ));
    assert!(matches!(
        read_package("RUN", &[1.5, 1.0, 75.0]),
        Err(WorkoutError::InvalidValue { field: "action", .. })
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
        Err(WorkoutError::InvalidValue { field: "count_pool", .. })
    ));
    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, f64::NAN]),
        Err(WorkoutError::InvalidValue { field: "weight", .. })
    ));
}

#[test]
fn test_non_finite_summary_rejected() {
    // subnormal varighet → fart og kalorier blir inf
    let err = read_package("RUN", &[15000.0, 1e-310, 75.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidValue { field: "mean_speed", .. }));

    // samme med vekt 0 ville gitt NaN-kalorier
    assert!(read_package("RUN", &[15000.0, 1e-310, 0.0]).is_err());

    let err = read_package("SWM", &[720.0, 1.0, 80.0, 1e308, 40.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidValue { field: "mean_speed", .. }));

    let err = read_package("WLK", &[9000.0, 1e-310, 75.0, 180.0]).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_large_step_counts() {
    let w = read_package("RUN", &[5_000_000_000.0, 1000.0, 75.0]).unwrap();
    assert_eq!(w.session().action(), 5_000_000_000);
    assert_eq!(w.distance_km(), 5_000_000_000.0 * 0.65 / 1000.0);
}

#[test]
fn test_every_dispatch_error_is_invalid_input() {
    let cases: &[(&str, &[f64])] = &[
        ("XYZ", &[1.0, 2.0, 3.0]),
        ("RUN", &[15000.0, 1.0]),
        ("RUN", &[15000.0, 0.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, -180.0]),
        ("SWM", &[720.0, 1.0, 80.0, 25.0, f64::INFINITY]),
        ("SWM", &[720.0, 1.0, 80.0, 1e308, 40.0]),
    ];
    for (code, data) in cases {
        let err = read_package(code, data).unwrap_err();
        assert!(err.is_invalid_input(), "{} {:?}: {}", code, data, err);
    }
}
