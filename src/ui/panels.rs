use eframe::egui::{self, Color32, RichText, Ui};

use iris_dash::data::{export, FilterSelection, FilteredView};

use super::NO_DATA;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – species selector
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let options = state.selection_options();
    let mut selected = state.selection;

    ui.strong("Select Species");
    egui::ComboBox::from_id_salt("species_select")
        .selected_text(selected.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &options {
                ui.selectable_value(&mut selected, *option, option.label());
            }
        });

    if selected != state.selection {
        state.set_selection(selected);
    }

    ui.add_space(8.0);
    ui.separator();
    for species in state
        .view
        .as_ref()
        .map(FilteredView::species_present)
        .unwrap_or_default()
    {
        let color = state.color_map.color_for(species);
        ui.label(RichText::new(format!("● {species}")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let can_export = state.view.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export filtered data…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (state.dataset, &state.view) {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                view.count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Metrics row
// ---------------------------------------------------------------------------

/// Format a mean for display; an undefined mean is shown as "No data".
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(m) => format!("{m:.2}"),
        None => NO_DATA.to_string(),
    }
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).size(28.0).strong());
    });
}

/// Count and the two means, side by side.
pub fn metrics_row(ui: &mut Ui, view: &FilteredView) {
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Observations", &view.count().to_string());
        metric(
            &mut cols[1],
            "Avg. Sepal Length (cm)",
            &format_mean(view.mean_sepal_length()),
        );
        metric(
            &mut cols[2],
            "Avg. Petal Length (cm)",
            &format_mean(view.mean_petal_length()),
        );
    });
}

/// Section header for the current selection.
pub fn selection_header(selection: FilterSelection) -> String {
    format!("{selection} Species Data")
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

pub fn export_file_dialog(state: &mut AppState) {
    let Some(view) = state.view.as_ref() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export filtered data")
        .set_file_name(format!(
            "iris_{}.csv",
            view.selection.label().to_ascii_lowercase()
        ))
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let count = view.count();
    match export::write_view(view, &path) {
        Ok(()) => {
            log::info!("Exported {count} records to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
