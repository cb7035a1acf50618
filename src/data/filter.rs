use std::collections::BTreeSet;

use super::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Filter parameters: the two user-controlled inputs
// ---------------------------------------------------------------------------

/// Slider bounds for the body-mass threshold, in grams.
pub const MASS_SLIDER_MIN: f64 = 2000.0;
pub const MASS_SLIDER_MAX: f64 = 6000.0;
pub const MASS_SLIDER_DEFAULT: f64 = 6000.0;

/// The current filter criteria, owned by the UI and mutated only through
/// direct user interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Species to include. Empty is legal and yields an empty view.
    pub species: BTreeSet<Species>,
    /// Exclusive upper bound on body mass in grams.
    pub mass_threshold: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            species: Species::ALL.into_iter().collect(),
            mass_threshold: MASS_SLIDER_DEFAULT,
        }
    }
}

impl FilterParams {
    /// Flip one species in or out of the selection.
    pub fn toggle_species(&mut self, sp: Species) {
        if !self.species.remove(&sp) {
            self.species.insert(sp);
        }
    }

    pub fn select_all_species(&mut self) {
        self.species = Species::ALL.into_iter().collect();
    }

    pub fn select_no_species(&mut self) {
        self.species.clear();
    }
}

// ---------------------------------------------------------------------------
// The filtered view
// ---------------------------------------------------------------------------

/// Return indices of penguins passing the current filters, in dataset order.
///
/// A penguin passes when its species is selected AND its body mass is
/// strictly below the threshold. A missing body mass never passes, matching
/// the source survey convention that an unmeasured bird is not comparable.
///
/// Pure over its inputs: same (dataset, params) always yields the same
/// sequence, and nothing is mutated.
pub fn filtered_indices(dataset: &PenguinDataset, params: &FilterParams) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            params.species.contains(&p.species)
                && p.body_mass_g.is_some_and(|m| m < params.mass_threshold)
        })
        .map(|(i, _)| i)
        .collect()
}
