//! Tests for histogram binning and box plot summaries

use iris_dash::data::summary::{BoxSummary, Histogram, MAX_BINS};
use iris_dash::data::{filter, load, FilterSelection, Measurement, Species};

#[path = "common/mod.rs"]
mod common;
use common::{dataset_without_virginica, record};

#[test]
fn test_histogram_counts_every_record() {
    let ds = load().unwrap();
    let view = filter(ds, FilterSelection::All);
    let hist = Histogram::build(&view, Measurement::SepalLength, 0.2);

    let total: usize = hist.bins.iter().map(|b| b.total()).sum();
    assert_eq!(total, 150);
    for species in Species::ALL {
        let n: usize = hist.bins.iter().map(|b| b.count_for(species)).sum();
        assert_eq!(n, 50, "{species}");
    }

    let first = hist.bins.first().unwrap();
    let last = hist.bins.last().unwrap();
    assert!(first.start <= 4.3 && 4.3 < first.start + hist.bin_width);
    assert!(last.start <= 7.9 && 7.9 < last.start + hist.bin_width + 1e-9);
}

#[test]
fn test_histogram_bins_align_to_width() {
    let ds = iris_dash::data::Dataset::new(vec![
        record(1.0, 1.0, Species::Setosa),
        record(1.5, 1.0, Species::Setosa),
        record(2.0, 1.0, Species::Versicolor),
        record(2.9, 1.0, Species::Versicolor),
    ])
    .unwrap();
    let view = filter(&ds, FilterSelection::All);
    let hist = Histogram::build(&view, Measurement::SepalLength, 1.0);

    assert_eq!(hist.bins.len(), 2);
    assert_eq!(hist.bins[0].start, 1.0);
    assert_eq!(hist.bins[0].counts, [2, 0, 0]);
    assert_eq!(hist.bins[1].start, 2.0);
    assert_eq!(hist.bins[1].counts, [0, 2, 0]);
}

#[test]
fn test_histogram_of_empty_view_has_no_bins() {
    let ds = dataset_without_virginica();
    let view = filter(&ds, FilterSelection::Species(Species::Virginica));
    let hist = Histogram::build(&view, Measurement::SepalLength, 0.2);
    assert!(hist.bins.is_empty());
}

#[test]
fn test_histogram_rejects_bad_width() {
    let ds = dataset_without_virginica();
    let view = filter(&ds, FilterSelection::All);
    assert!(Histogram::build(&view, Measurement::PetalLength, 0.0).bins.is_empty());
    assert!(Histogram::build(&view, Measurement::PetalLength, f64::NAN).bins.is_empty());
}

#[test]
fn test_histogram_with_tiny_width_is_bounded() {
    let view = filter(load().unwrap(), FilterSelection::All);

    let hist = Histogram::build(&view, Measurement::SepalLength, 1e-300);
    assert!(hist.bins.is_empty());

    // 3.6 cm range at 1e-9 would need billions of bins.
    let hist = Histogram::build(&view, Measurement::SepalLength, 1e-9);
    assert!(hist.bins.is_empty());

    // A fine but reasonable width still bins every record.
    let hist = Histogram::build(&view, Measurement::SepalLength, 0.001);
    assert!(!hist.bins.is_empty() && hist.bins.len() <= MAX_BINS);
    let total: usize = hist.bins.iter().map(|b| b.total()).sum();
    assert_eq!(total, 150);
}

#[test]
fn test_box_summary_of_setosa_sepal_length() {
    let ds = load().unwrap();
    let view = filter(ds, FilterSelection::Species(Species::Setosa));
    let summary = BoxSummary::from_values(&view.values(Measurement::SepalLength)).unwrap();

    assert!((summary.median - 5.0).abs() < 1e-9);
    assert!((summary.q1 - 4.8).abs() < 1e-9);
    assert!((summary.q3 - 5.2).abs() < 1e-9);
    assert!(summary.lower_whisker >= 4.3 && summary.upper_whisker <= 5.8);
    assert!(summary.outliers.is_empty());
}
