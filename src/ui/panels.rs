use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::color::species_color;
use crate::data::filter::{MASS_SLIDER_MAX, MASS_SLIDER_MIN};
use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter sidebar: mass slider, species multi-select, links.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Body mass threshold ----
    ui.strong("Body mass");
    let slider = Slider::new(
        &mut state.filters.mass_threshold,
        MASS_SLIDER_MIN..=MASS_SLIDER_MAX,
    )
    .suffix(" g")
    .integer();
    if ui.add(slider).changed() {
        state.refilter();
    }
    ui.add_space(8.0);

    // ---- Species multi-select ----
    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });
    for sp in Species::ALL {
        let mut checked = state.filters.species.contains(&sp);
        let label = RichText::new(sp.name()).color(species_color(sp));
        if ui.checkbox(&mut checked, label).changed() {
            state.toggle_species(sp);
        }
    }

    ui.separator();

    // ---- Links ----
    ui.label(RichText::new("Links").small().strong());
    ui.hyperlink_to(
        "Palmer Penguins dataset",
        "https://allisonhorst.github.io/palmerpenguins/",
    );
    ui.hyperlink_to("egui", "https://github.com/emilk/egui");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} penguins loaded, {} shown",
            state.dataset.len(),
            state.visible.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user replace the built-in dataset with their own CSV/JSON file.
/// On failure the current dataset is kept and the error is shown in the
/// top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open penguin data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} penguins from {} across islands {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.islands
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
