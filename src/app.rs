use eframe::egui;

use crate::data::model::PenguinDataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table, value_boxes};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(dataset: PenguinDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, plot, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            value_boxes::row(ui, &self.state.summary);
            ui.add_space(8.0);
            ui.columns(2, |cols| {
                plot::bill_scatter(&mut cols[0], &self.state);
                table::data_table(&mut cols[1], &mut self.state);
            });
        });
    }
}
