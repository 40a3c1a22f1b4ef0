use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use iris_dash::data::{FilteredView, Measurement};

use super::NO_DATA;
use crate::color::ColorMap;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// Render every record of the view, one row per record.
pub fn raw_data_table(ui: &mut Ui, view: &FilteredView, colors: &ColorMap) {
    if view.is_empty() {
        ui.label(NO_DATA);
        return;
    }

    let records = view.records();

    // The outer panel scrolls, so the table grows to fit its rows.
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .column(Column::auto().at_least(40.0))
        .columns(Column::auto().at_least(90.0), Measurement::ALL.len())
        .column(Column::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("#");
            });
            for m in Measurement::ALL {
                header.col(|ui: &mut Ui| {
                    ui.strong(m.display_name());
                });
            }
            header.col(|ui: &mut Ui| {
                ui.strong("Species");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let idx = row.index();
                let record = &records[idx];
                row.col(|ui: &mut Ui| {
                    ui.label(idx.to_string());
                });
                for m in Measurement::ALL {
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.1}", record.value(m)));
                    });
                }
                row.col(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(record.species.label())
                            .color(colors.color_for(record.species)),
                    );
                });
            });
        });
}
