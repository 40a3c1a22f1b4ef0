use super::error::InvalidSelectionError;
use super::model::{Dataset, FilterSelection, FilteredView};

/// Records of `dataset` matching `selection`, in dataset order, with their
/// count and means. An empty result is a valid view, not an error.
pub fn filter(dataset: &Dataset, selection: FilterSelection) -> FilteredView {
    let records = dataset
        .iter()
        .filter(|record| selection.matches(record))
        .copied()
        .collect();
    FilteredView::new(selection, records)
}

/// Like [`filter`], for a selection that arrives as text (`"All"` or an
/// exact species label).
pub fn filter_by_label(
    dataset: &Dataset,
    label: &str,
) -> Result<FilteredView, InvalidSelectionError> {
    let selection: FilterSelection = label.parse()?;
    Ok(filter(dataset, selection))
}
