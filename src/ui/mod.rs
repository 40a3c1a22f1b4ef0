pub mod panels;
pub mod plot;
pub mod table;

/// Shown in place of numbers and charts when the selection has no records.
pub const NO_DATA: &str = "No data";
