use iris_dash::data::{self, DataError, Dataset, FilterSelection, FilteredView};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Shared bundled dataset (None if it failed to load).
    pub dataset: Option<&'static Dataset>,

    /// Why the dataset could not be loaded.
    pub load_error: Option<String>,

    /// Current selector value.
    pub selection: FilterSelection,

    /// Records and summaries for `selection` (recomputed on change).
    pub view: Option<FilteredView>,

    /// Species colours for plots and table.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_load(data::load())
    }
}

impl AppState {
    /// Build the state from the outcome of loading the dataset.
    pub fn from_load(loaded: Result<&'static Dataset, DataError>) -> Self {
        let mut state = Self {
            dataset: None,
            load_error: None,
            selection: FilterSelection::All,
            view: None,
            color_map: ColorMap::default(),
            status_message: None,
        };
        match loaded {
            Ok(dataset) => {
                state.dataset = Some(dataset);
                state.refilter();
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                state.load_error = Some(e.to_string());
            }
        }
        state
    }

    /// Entries for the species selector.
    pub fn selection_options(&self) -> Vec<FilterSelection> {
        self.dataset
            .map(FilterSelection::options)
            .unwrap_or_default()
    }

    pub fn set_selection(&mut self, selection: FilterSelection) {
        if selection == self.selection && self.view.is_some() {
            return;
        }
        log::debug!("Selection changed: {} -> {selection}", self.selection);
        self.selection = selection;
        self.refilter();
    }

    /// Recompute `view` for the current selection.
    pub fn refilter(&mut self) {
        if let Some(ds) = self.dataset {
            self.view = Some(data::filter(ds, self.selection));
        }
    }
}
