//! Unit tests for batch processing and rendered output.

use workout_metrics::recording::summary::MessageLocale;
use workout_metrics::workouts::batch::{process_batch, run_batch, sample_packages};
use workout_metrics::workouts::types::{WorkoutError, WorkoutKind, WorkoutPackage};

#[test]
fn test_sample_batch_output() {
    let lines = run_batch(&sample_packages(), MessageLocale::En);

    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Avg speed: 1.000 km/h; Calories spent: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories spent: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Avg speed: 5.850 km/h; Calories spent: 157.500.",
        ]
    );
}

#[test]
fn test_sample_batch_output_russian() {
    let lines = run_batch(&sample_packages(), MessageLocale::Ru);

    assert_eq!(
        lines[1],
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
    );
}

#[test]
fn test_unknown_tag_prints_failure_only() {
    let packages = vec![
        WorkoutPackage::new("XYZ", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
    ];
    let lines = run_batch(&packages, MessageLocale::En);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "No such workout.");
    assert!(lines[1].starts_with("Workout type: Running;"));
}

#[test]
fn test_wrong_arity_is_handled() {
    let outcomes = process_batch(&[WorkoutPackage::new("RUN", [15000.0, 1.0])]);

    assert_eq!(
        outcomes[0],
        Err(WorkoutError::ArityMismatch {
            kind: WorkoutKind::Running,
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn test_invalid_reading_is_handled_per_record() {
    let packages = vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("WLK", [9000.0, 0.0, 75.0, 180.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
    ];
    let outcomes = process_batch(&packages);

    assert!(outcomes[0].is_ok());
    assert!(matches!(
        outcomes[1],
        Err(WorkoutError::InvalidReading {
            field: "duration_hours",
            ..
        })
    ));
    assert!(outcomes[2].is_ok());
}

#[test]
fn test_every_field_has_three_decimals() {
    let lines = run_batch(
        &[WorkoutPackage::new("RUN", [12345.0, 0.987654, 71.3])],
        MessageLocale::En,
    );

    // "Duration: 0.988 h; Distance: ..." -> every token that starts with a digit
    let numbers: Vec<&str> = lines[0]
        .split([' ', ';'])
        .filter(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .map(|token| token.trim_end_matches('.'))
        .collect();

    assert_eq!(numbers.len(), 4);
    for number in numbers {
        let decimals = number.split('.').nth(1).expect("fixed point");
        assert_eq!(decimals.len(), 3, "{} in {}", number, lines[0]);
    }
}

#[test]
fn test_fractional_counts_summarize() {
    let packages = vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.5]),
        WorkoutPackage::new("RUN", [100.5, 1.0, 75.0]),
    ];
    let outcomes = process_batch(&packages);

    let swim = outcomes[0].as_ref().expect("swimming summary");
    assert!((swim.avg_speed_kmh - 1.0125).abs() < 1e-9);

    let run = outcomes[1].as_ref().expect("running summary");
    assert!((run.distance_km - 100.5 * 0.65 / 1000.0).abs() < 1e-9);
}

#[test]
fn test_non_positive_weight_prints_failure() {
    let packages = vec![
        WorkoutPackage::new("RUN", [15000.0, 1.0, 0.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, -75.0]),
    ];

    for outcome in process_batch(&packages) {
        assert!(matches!(
            outcome,
            Err(WorkoutError::InvalidReading {
                field: "weight_kg",
                ..
            })
        ));
    }
    assert_eq!(
        run_batch(&packages, MessageLocale::En),
        vec!["No such workout.", "No such workout."]
    );
}
