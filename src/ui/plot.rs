use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

use iris_dash::data::summary::{BoxSummary, Histogram};
use iris_dash::data::{FilteredView, Measurement};

use super::NO_DATA;
use crate::color::ColorMap;

const PLOT_HEIGHT: f32 = 320.0;
const MARGINAL_HEIGHT: f32 = 110.0;
const SEPAL_BIN_WIDTH: f64 = 0.2;

fn no_data(ui: &mut Ui, height: f32) {
    ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(NO_DATA);
        });
    });
}

// ---------------------------------------------------------------------------
// Petal scatter plot
// ---------------------------------------------------------------------------

/// Petal length (x) against petal width (y), one series per species.
pub fn petal_scatter(ui: &mut Ui, view: &FilteredView, colors: &ColorMap) {
    ui.strong(format!("Petal Dimensions for {} Species", view.selection));
    if view.is_empty() {
        no_data(ui, PLOT_HEIGHT);
        return;
    }

    Plot::new("petal_scatter")
        .legend(Legend::default())
        .x_axis_label("Petal Length (cm)")
        .y_axis_label("Petal Width (cm)")
        .height(PLOT_HEIGHT)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for species in view.species_present() {
                let points: PlotPoints = view
                    .records_of(species)
                    .map(|r| [r.petal_length, r.petal_width])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(species.label())
                        .color(colors.color_for(species))
                        .radius(3.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Sepal length histogram with marginal box plots
// ---------------------------------------------------------------------------

/// Stacked sepal-length histogram grouped by species, with a box plot per
/// species drawn above it.
pub fn sepal_histogram(ui: &mut Ui, view: &FilteredView, colors: &ColorMap) {
    ui.strong(format!(
        "Sepal Length Distribution for {} Species",
        view.selection
    ));
    if view.is_empty() {
        no_data(ui, PLOT_HEIGHT + MARGINAL_HEIGHT);
        return;
    }

    let species_present = view.species_present();

    // ---- Marginal box plots, one row per species ----
    Plot::new("sepal_marginal_box")
        .height(MARGINAL_HEIGHT)
        .show_axes([false, false])
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (row, &species) in species_present.iter().enumerate() {
                let values: Vec<f64> = view
                    .records_of(species)
                    .map(|r| r.sepal_length)
                    .collect();
                let Some(summary) = BoxSummary::from_values(&values) else {
                    continue;
                };
                let y = row as f64;
                let color = colors.color_for(species);

                let elem = BoxElem::new(
                    y,
                    BoxSpread::new(
                        summary.lower_whisker,
                        summary.q1,
                        summary.median,
                        summary.q3,
                        summary.upper_whisker,
                    ),
                )
                .name(species.label())
                .box_width(0.6)
                .whisker_width(0.3)
                .fill(colors.box_fill_for(species))
                .stroke(Stroke::new(1.5, color));

                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(species.label()).horizontal());

                if !summary.outliers.is_empty() {
                    let outliers: PlotPoints =
                        summary.outliers.iter().map(|&v| [v, y]).collect();
                    plot_ui.points(Points::new(outliers).color(color).radius(2.5));
                }
            }
        });

    // ---- Stacked histogram ----
    let histogram = Histogram::build(view, Measurement::SepalLength, SEPAL_BIN_WIDTH);
    let mut charts: Vec<BarChart> = Vec::with_capacity(species_present.len());
    for &species in &species_present {
        let bars: Vec<Bar> = histogram
            .bins
            .iter()
            .map(|bin| {
                Bar::new(
                    bin.start + histogram.bin_width / 2.0,
                    bin.count_for(species) as f64,
                )
                .width(histogram.bin_width)
            })
            .collect();

        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(species.label())
            .color(colors.bar_fill_for(species))
            .stack_on(&below);
        charts.push(chart);
    }

    Plot::new("sepal_histogram")
        .legend(Legend::default())
        .x_axis_label("Sepal Length (cm)")
        .y_axis_label("Count")
        .height(PLOT_HEIGHT)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
