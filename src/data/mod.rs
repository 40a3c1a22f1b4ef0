/// Data layer: core types, loading, filtering, summaries and export.
///
/// Architecture:
/// ```text
///  assets/iris.csv (bundled)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + rename + map species codes → Dataset (cached once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterSelection → FilteredView (records + count + means)
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │ summary   │   │  export   │  csv / json / parquet
///   └──────────┘   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

pub use error::{DataError, InvalidSelectionError};
pub use filter::{filter, filter_by_label};
pub use loader::load;
pub use model::{Dataset, FilterSelection, FilteredView, Measurement, Record, Species};
