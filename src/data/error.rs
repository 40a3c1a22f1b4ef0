use thiserror::Error;

/// The bundled source violated its expected shape.
///
/// `row` is the 0-based index of the offending data record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("row {row}: malformed record: {message}")]
    Malformed { row: usize, message: String },

    #[error("row {row}: unknown species code {code} (expected 0, 1 or 2)")]
    UnknownSpeciesCode { row: usize, code: i64 },

    #[error("row {row}: non-finite value {value} in '{column}'")]
    NonFiniteMeasurement {
        row: usize,
        column: &'static str,
        value: f64,
    },
}

/// A selection label outside `All` / `Setosa` / `Versicolor` / `Virginica`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selection '{selection}': expected All, Setosa, Versicolor or Virginica")]
pub struct InvalidSelectionError {
    pub selection: String,
}
