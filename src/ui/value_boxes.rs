use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::lighten;
use crate::data::stats::{format_mm, Summary};

// ---------------------------------------------------------------------------
// Value boxes: count and mean readouts
// ---------------------------------------------------------------------------

/// Render the three summary readouts in a horizontal row.
pub fn row(ui: &mut Ui, summary: &Summary) {
    let width = (ui.available_width() - 2.0 * ui.spacing().item_spacing.x) / 3.0;
    ui.horizontal(|ui: &mut Ui| {
        value_box(ui, width, "Number of penguins", &summary.count.to_string());
        value_box(
            ui,
            width,
            "Average bill length",
            &format_mm(summary.mean_bill_length_mm),
        );
        value_box(
            ui,
            width,
            "Average bill depth",
            &format_mm(summary.mean_bill_depth_mm),
        );
    });
}

fn value_box(ui: &mut Ui, width: f32, title: &str, value: &str) {
    let fill = lighten(ui.visuals().faint_bg_color, 0.03);
    egui::Frame::group(ui.style())
        .fill(fill)
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(width - 16.0);
            ui.vertical(|ui: &mut Ui| {
                ui.label(RichText::new(title).small().color(Color32::GRAY));
                ui.label(RichText::new(value).heading());
            });
        });
}
