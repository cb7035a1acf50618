use crate::data::filter::{filtered_indices, FilterParams};
use crate::data::model::{PenguinDataset, Species};
use crate::data::stats::Summary;
use crate::ui::table::TableState;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded before the state is built and is read-only from
/// then on; `visible` and `summary` are caches over (dataset, filters) and
/// are rebuilt together whenever the filters change, so every widget in a
/// frame sees the same filtered view.
pub struct AppState {
    /// Loaded dataset, immutable until the user opens a replacement file.
    pub dataset: PenguinDataset,

    /// The two filter controls: species multi-select and mass threshold.
    pub filters: FilterParams,

    /// Indices of penguins passing the current filters (cached).
    pub visible: Vec<usize>,

    /// Count and mean readouts over `visible` (cached).
    pub summary: Summary,

    /// Sort order and column filters of the data table (presentation only).
    pub table: TableState,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: PenguinDataset) -> Self {
        let mut state = AppState {
            dataset,
            filters: FilterParams::default(),
            visible: Vec::new(),
            summary: Summary::default(),
            table: TableState::default(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Swap in a newly loaded dataset and reset the filters to defaults.
    pub fn set_dataset(&mut self, dataset: PenguinDataset) {
        self.dataset = dataset;
        self.filters = FilterParams::default();
        self.table = TableState::default();
        self.status_message = None;
        self.refilter();
    }

    /// Rebuild `visible` and `summary` from the current filters.
    pub fn refilter(&mut self) {
        self.visible = filtered_indices(&self.dataset, &self.filters);
        self.summary = Summary::compute(&self.dataset, &self.visible);
    }

    /// Flip one species in the multi-select.
    pub fn toggle_species(&mut self, sp: Species) {
        self.filters.toggle_species(sp);
        self.refilter();
    }

    pub fn select_all_species(&mut self) {
        self.filters.select_all_species();
        self.refilter();
    }

    pub fn select_no_species(&mut self) {
        self.filters.select_no_species();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_builtin;

    #[test]
    fn new_state_shows_everything_under_default_threshold() {
        let state = AppState::new(load_builtin().unwrap());
        assert_eq!(state.summary.count, state.visible.len());
        // Default threshold is the slider maximum, so only birds at or above
        // 6000 g (or with no recorded mass) are hidden.
        for &i in &state.visible {
            assert!(state.dataset.penguins[i].body_mass_g.unwrap() < 6000.0);
        }
    }

    #[test]
    fn deselecting_all_species_empties_the_view() {
        let mut state = AppState::new(load_builtin().unwrap());
        state.select_no_species();
        assert!(state.visible.is_empty());
        assert_eq!(state.summary.count, 0);
        assert_eq!(state.summary.mean_bill_length_mm, None);

        state.select_all_species();
        assert!(!state.visible.is_empty());
    }

    #[test]
    fn toggling_a_species_removes_its_rows() {
        let mut state = AppState::new(load_builtin().unwrap());
        state.toggle_species(Species::Gentoo);
        assert!(state
            .visible
            .iter()
            .all(|&i| state.dataset.penguins[i].species != Species::Gentoo));
    }
}
