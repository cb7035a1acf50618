use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::species_color;
use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bill scatter plot
// ---------------------------------------------------------------------------

/// Scatter of bill length vs bill depth over the filtered view, one series
/// per species. Rows missing either coordinate are skipped; an empty view
/// simply draws an empty plot area.
pub fn bill_scatter(ui: &mut Ui, state: &AppState) {
    ui.strong("Bill length vs bill depth");

    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for sp in Species::ALL {
                let points: PlotPoints = state
                    .visible
                    .iter()
                    .map(|&i| &state.dataset.penguins[i])
                    .filter(|p| p.species == sp)
                    .filter_map(|p| Some([p.bill_length_mm?, p.bill_depth_mm?]))
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(sp.name())
                        .color(species_color(sp))
                        .radius(3.0),
                );
            }
        });
}
