use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct IrisDashApp {
    pub state: AppState,
}

impl eframe::App for IrisDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: species selector ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading(RichText::new("Iris Data Visualization").size(30.0).strong());
    ui.label("Exploring the characteristics of three Iris species using a custom color scheme.");
    ui.add_space(6.0);

    if let Some(err) = &state.load_error {
        ui.label(RichText::new(format!("Error: {err}")).color(Color32::RED));
        return;
    }
    let Some(view) = &state.view else {
        return;
    };

    ui.heading(panels::selection_header(state.selection));
    panels::metrics_row(ui, view);
    ui.separator();

    ui.columns(2, |cols: &mut [Ui]| {
        plot::petal_scatter(&mut cols[0], view, &state.color_map);
        plot::sepal_histogram(&mut cols[1], view, &state.color_map);
    });
    ui.separator();

    ui.heading("Filtered Raw Data");
    table::raw_data_table(ui, view, &state.color_map);
}
