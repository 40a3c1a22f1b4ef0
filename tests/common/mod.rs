//! Shared test utilities and fixture builders

#![allow(dead_code)]

use iris_dash::data::{Dataset, Record, Species};

/// Build a record with the given sepal and petal lengths; widths are fixed.
pub fn record(sepal_length: f64, petal_length: f64, species: Species) -> Record {
    Record {
        sepal_length,
        sepal_width: 3.0,
        petal_length,
        petal_width: 1.0,
        species,
    }
}

/// Small dataset with no Virginica rows, for empty-subset scenarios.
///
/// Order: Setosa, Versicolor, Setosa, Versicolor.
pub fn dataset_without_virginica() -> Dataset {
    Dataset::new(vec![
        record(5.0, 1.4, Species::Setosa),
        record(6.0, 4.5, Species::Versicolor),
        record(4.8, 1.6, Species::Setosa),
        record(6.4, 4.1, Species::Versicolor),
    ])
    .unwrap()
}

/// Assert two floats agree to within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
