use std::fmt;
use std::str::FromStr;

use super::error::{DataError, InvalidSelectionError};
use super::summary::mean;

// ---------------------------------------------------------------------------
// Species – the categorical label of a record
// ---------------------------------------------------------------------------

/// One of the three Iris species in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Map the numeric code used by the source (`0`, `1`, `2`).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Setosa => "Setosa",
            Species::Versicolor => "Versicolor",
            Species::Virginica => "Virginica",
        }
    }

    /// Position in [`Species::ALL`], handy for per-species arrays.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Measurement – the four numeric columns
// ---------------------------------------------------------------------------

/// A numeric column of the dataset, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::SepalLength,
        Measurement::SepalWidth,
        Measurement::PetalLength,
        Measurement::PetalWidth,
    ];

    /// Column name after renaming, as shown in tables and exports.
    pub fn display_name(self) -> &'static str {
        match self {
            Measurement::SepalLength => "Sepal Length",
            Measurement::SepalWidth => "Sepal Width",
            Measurement::PetalLength => "Petal Length",
            Measurement::PetalWidth => "Petal Width",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Record – one observation
// ---------------------------------------------------------------------------

/// A single flower: four measurements plus its species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl Record {
    /// Fail on the first non-finite measurement; `row` is reported in the error.
    pub(crate) fn ensure_finite(&self, row: usize) -> Result<(), DataError> {
        for m in Measurement::ALL {
            let value = self.value(m);
            if !value.is_finite() {
                return Err(DataError::NonFiniteMeasurement {
                    row,
                    column: m.display_name(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn value(&self, measurement: Measurement) -> f64 {
        match measurement {
            Measurement::SepalLength => self.sepal_length,
            Measurement::SepalWidth => self.sepal_width,
            Measurement::PetalLength => self.petal_length,
            Measurement::PetalWidth => self.petal_width,
        }
    }
}

/// Distinct species of `records` in order of first appearance.
fn species_in_order(records: &[Record]) -> Vec<Species> {
    let mut seen = Vec::with_capacity(Species::ALL.len());
    for record in records {
        if !seen.contains(&record.species) {
            seen.push(record.species);
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Dataset – the immutable, ordered collection of records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from typed records, rejecting non-finite measurements.
    pub fn new(records: Vec<Record>) -> Result<Self, DataError> {
        for (row, record) in records.iter().enumerate() {
            record.ensure_finite(row)?;
        }
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct species in order of first appearance.
    pub fn species_in_order(&self) -> Vec<Species> {
        species_in_order(&self.records)
    }
}

// ---------------------------------------------------------------------------
// FilterSelection – "All" or a single species
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Species(Species),
}

impl FilterSelection {
    /// Selector entries: `All` followed by the species present in `dataset`.
    pub fn options(dataset: &Dataset) -> Vec<FilterSelection> {
        std::iter::once(FilterSelection::All)
            .chain(
                dataset
                    .species_in_order()
                    .into_iter()
                    .map(FilterSelection::Species),
            )
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::All => "All",
            FilterSelection::Species(species) => species.label(),
        }
    }

    pub fn matches(self, record: &Record) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Species(species) => record.species == species,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterSelection {
    type Err = InvalidSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(FilterSelection::All);
        }
        Species::ALL
            .into_iter()
            .find(|species| species.label() == s)
            .map(FilterSelection::Species)
            .ok_or_else(|| InvalidSelectionError {
                selection: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// FilteredView – subset of records plus summary scalars
// ---------------------------------------------------------------------------

/// The records matching a selection, in dataset order, with their count and
/// means. A mean is `None` when the subset is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub selection: FilterSelection,
    records: Vec<Record>,
    mean_sepal_length: Option<f64>,
    mean_petal_length: Option<f64>,
}

impl FilteredView {
    pub(crate) fn new(selection: FilterSelection, records: Vec<Record>) -> Self {
        let sepal: Vec<f64> = records.iter().map(|r| r.sepal_length).collect();
        let petal: Vec<f64> = records.iter().map(|r| r.petal_length).collect();
        FilteredView {
            selection,
            mean_sepal_length: mean(&sepal),
            mean_petal_length: mean(&petal),
            records,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn mean_sepal_length(&self) -> Option<f64> {
        self.mean_sepal_length
    }

    pub fn mean_petal_length(&self) -> Option<f64> {
        self.mean_petal_length
    }

    /// All values of one column, in record order.
    pub fn values(&self, measurement: Measurement) -> Vec<f64> {
        self.records.iter().map(|r| r.value(measurement)).collect()
    }

    /// Species that occur in the view, in order of first appearance.
    pub fn species_present(&self) -> Vec<Species> {
        species_in_order(&self.records)
    }

    pub fn records_of(&self, species: Species) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.species == species)
    }
}
