//! Iris dashboard core: bundled dataset loading, species filtering and
//! the summary statistics the dashboard renders.

pub mod data;
