use std::io::Read;
use std::sync::OnceLock;

use serde::Deserialize;

use super::error::DataError;
use super::model::{Dataset, Record, Species};

/// The classic Iris measurements: 150 rows, 50 per species, species as
/// numeric codes 0 / 1 / 2.
const BUNDLED_IRIS_CSV: &str = include_str!("../../assets/iris.csv");

static DATASET: OnceLock<Result<Dataset, DataError>> = OnceLock::new();

/// Number of times the bundled source has been parsed.
#[cfg(test)]
static PARSE_COUNT: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the bundled dataset.
///
/// Parsing happens at most once per process, even when several threads
/// race on the first call; every later call returns the same shared
/// dataset (or the same error).
pub fn load() -> Result<&'static Dataset, DataError> {
    DATASET
        .get_or_init(|| {
            log::debug!("Parsing bundled Iris dataset");
            #[cfg(test)]
            PARSE_COUNT.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            let result = parse_csv(BUNDLED_IRIS_CSV.as_bytes());
            match &result {
                Ok(ds) => log::info!("Loaded {} Iris records", ds.len()),
                Err(e) => log::error!("Bundled Iris dataset is invalid: {e}"),
            }
            result
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Parse Iris-shaped CSV without caching.
///
/// Expected header (the raw source names):
///
/// ```text
/// sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
/// ```
///
/// `target` is mapped 0 → Setosa, 1 → Versicolor, 2 → Virginica.
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in reader.deserialize::<SourceRow>().enumerate() {
        let raw = result.map_err(|e| DataError::Malformed {
            row,
            message: e.to_string(),
        })?;
        records.push(raw.into_record(row)?);
    }

    Dataset::new(records)
}

// ---------------------------------------------------------------------------
// Source row → Record
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SourceRow {
    #[serde(rename = "sepal length (cm)")]
    sepal_length: f64,
    #[serde(rename = "sepal width (cm)")]
    sepal_width: f64,
    #[serde(rename = "petal length (cm)")]
    petal_length: f64,
    #[serde(rename = "petal width (cm)")]
    petal_width: f64,
    target: i64,
}

impl SourceRow {
    fn into_record(self, row: usize) -> Result<Record, DataError> {
        let species = Species::from_code(self.target).ok_or(DataError::UnknownSpeciesCode {
            row,
            code: self.target,
        })?;
        let record = Record {
            sepal_length: self.sepal_length,
            sepal_width: self.sepal_width,
            petal_length: self.petal_length,
            petal_width: self.petal_width,
            species,
        };
        record.ensure_finite(row)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Barrier;

    use super::*;

    const HEADER: &str =
        "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target\n";

    #[test]
    fn maps_codes_and_keeps_order() {
        let csv = format!("{HEADER}6.3,3.3,6.0,2.5,2\n5.1,3.5,1.4,0.2,0\n7.0,3.2,4.7,1.4,1\n");
        let ds = parse_csv(csv.as_bytes()).unwrap();
        let species: Vec<Species> = ds.iter().map(|r| r.species).collect();
        assert_eq!(
            species,
            vec![Species::Virginica, Species::Setosa, Species::Versicolor]
        );
        assert_eq!(ds.records()[1].petal_length, 1.4);
    }

    #[test]
    fn rejects_unknown_species_code() {
        let csv = format!("{HEADER}5.1,3.5,1.4,0.2,0\n5.1,3.5,1.4,0.2,3\n");
        assert_eq!(
            parse_csv(csv.as_bytes()).unwrap_err(),
            DataError::UnknownSpeciesCode { row: 1, code: 3 }
        );
    }

    #[test]
    fn rejects_nan_measurement() {
        let csv = format!("{HEADER}5.1,NaN,1.4,0.2,0\n");
        match parse_csv(csv.as_bytes()).unwrap_err() {
            DataError::NonFiniteMeasurement { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, "Sepal Width");
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reports_first_offending_row() {
        let csv = format!("{HEADER}5.1,3.5,NaN,0.2,0\n4.9,3.0,1.4,0.2,0\n6.3,3.3,6.0,2.5,7\n");
        assert!(matches!(
            parse_csv(csv.as_bytes()).unwrap_err(),
            DataError::NonFiniteMeasurement { row: 0, column: "Petal Length", .. }
        ));

        let csv = format!("{HEADER}5.1,3.5,1.4,0.2,7\n4.9,3.0,inf,0.2,0\n");
        assert_eq!(
            parse_csv(csv.as_bytes()).unwrap_err(),
            DataError::UnknownSpeciesCode { row: 0, code: 7 }
        );
    }

    #[test]
    fn rejects_malformed_field() {
        let csv = format!("{HEADER}5.1,3.5,abc,0.2,0\n");
        assert!(matches!(
            parse_csv(csv.as_bytes()),
            Err(DataError::Malformed { row: 0, .. })
        ));
    }

    // The only test in this binary that touches the process-wide cache, so
    // the threads below are the first callers.
    #[test]
    fn concurrent_first_load_parses_once() {
        const THREADS: usize = 8;
        let barrier = Barrier::new(THREADS);

        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        load().unwrap() as *const Dataset as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(PARSE_COUNT.load(Ordering::SeqCst), 1);
        assert_eq!(load().unwrap().len(), 150);
        assert_eq!(PARSE_COUNT.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let ds = parse_csv(HEADER.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
