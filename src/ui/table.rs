use std::cmp::Ordering;

use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::species_color;
use crate::data::model::PenguinDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Table state: sort order and column filters (presentation only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Species,
    Island,
    BillLength,
    BillDepth,
    BodyMass,
}

/// Sorting and per-column text filters for the data grid. This state only
/// affects how the table displays the filtered view; the view itself, the
/// value boxes, and the plot are untouched by it.
#[derive(Debug, Clone)]
pub struct TableState {
    pub sort: Option<SortColumn>,
    pub ascending: bool,
    pub species_query: String,
    pub island_query: String,
}

impl Default for TableState {
    fn default() -> Self {
        TableState {
            sort: None,
            ascending: true,
            species_query: String::new(),
            island_query: String::new(),
        }
    }
}

impl TableState {
    /// Toggle sorting on a column: first click ascending, second descending.
    pub fn click_column(&mut self, col: SortColumn) {
        if self.sort == Some(col) {
            self.ascending = !self.ascending;
        } else {
            self.sort = Some(col);
            self.ascending = true;
        }
    }

    /// Display order of the visible rows after column filters and sorting.
    /// With no sort active the dataset order is kept as-is.
    pub fn display_rows(&self, dataset: &PenguinDataset, visible: &[usize]) -> Vec<usize> {
        let species_query = self.species_query.to_lowercase();
        let island_query = self.island_query.to_lowercase();

        let mut rows: Vec<usize> = visible
            .iter()
            .copied()
            .filter(|&i| {
                let p = &dataset.penguins[i];
                (species_query.is_empty()
                    || p.species.name().to_lowercase().contains(&species_query))
                    && (island_query.is_empty()
                        || p.island.to_lowercase().contains(&island_query))
            })
            .collect();

        if let Some(col) = self.sort {
            // Stable sort keeps dataset order within equal keys.
            rows.sort_by(|&a, &b| {
                let pa = &dataset.penguins[a];
                let pb = &dataset.penguins[b];
                match col {
                    SortColumn::Species => pa.species.cmp(&pb.species),
                    SortColumn::Island => pa.island.cmp(&pb.island),
                    SortColumn::BillLength => cmp_opt(pa.bill_length_mm, pb.bill_length_mm),
                    SortColumn::BillDepth => cmp_opt(pa.bill_depth_mm, pb.bill_depth_mm),
                    SortColumn::BodyMass => cmp_opt(pa.body_mass_g, pb.body_mass_g),
                }
            });
            if !self.ascending {
                rows.reverse();
            }
        }
        rows
    }
}

/// Total order over optional measurements: missing values first, present
/// values by `total_cmp` so NaN cells from a user-loaded CSV cannot hand
/// `sort_by` an inconsistent comparator.
fn cmp_opt(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the data grid over the current filtered view.
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Penguin data");

    // Column text filters, mirroring a filterable data grid.
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Species:");
        ui.add(
            egui::TextEdit::singleline(&mut state.table.species_query)
                .hint_text("filter…")
                .desired_width(80.0),
        );
        ui.label("Island:");
        ui.add(
            egui::TextEdit::singleline(&mut state.table.island_query)
                .hint_text("filter…")
                .desired_width(80.0),
        );
    });
    ui.add_space(4.0);

    let rows = state.table.display_rows(&state.dataset, &state.visible);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| sortable_header(ui, state, "Species", SortColumn::Species));
            header.col(|ui| sortable_header(ui, state, "Island", SortColumn::Island));
            header.col(|ui| sortable_header(ui, state, "Bill length", SortColumn::BillLength));
            header.col(|ui| sortable_header(ui, state, "Bill depth", SortColumn::BillDepth));
            header.col(|ui| sortable_header(ui, state, "Body mass", SortColumn::BodyMass));
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let penguin = &state.dataset.penguins[rows[row.index()]];
                row.col(|ui| {
                    ui.colored_label(species_color(penguin.species), penguin.species.name());
                });
                row.col(|ui| {
                    ui.label(&penguin.island);
                });
                row.col(|ui| {
                    ui.label(fmt_cell(penguin.bill_length_mm, 1));
                });
                row.col(|ui| {
                    ui.label(fmt_cell(penguin.bill_depth_mm, 1));
                });
                row.col(|ui| {
                    ui.label(fmt_cell(penguin.body_mass_g, 0));
                });
            });
        });
}

/// Clickable header label with an arrow on the active sort column.
fn sortable_header(ui: &mut Ui, state: &mut AppState, label: &str, col: SortColumn) {
    let text = if state.table.sort == Some(col) {
        if state.table.ascending {
            format!("{label} ⬆")
        } else {
            format!("{label} ⬇")
        }
    } else {
        label.to_string()
    };
    if ui.selectable_label(state.table.sort == Some(col), text).clicked() {
        state.table.click_column(col);
    }
}

fn fmt_cell(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Penguin, Species};

    fn dataset() -> PenguinDataset {
        let row = |species: Species, island: &str, mass: f64| Penguin {
            species,
            island: island.to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: None,
            body_mass_g: Some(mass),
            sex: None,
            year: 2008,
        };
        PenguinDataset::from_penguins(vec![
            row(Species::Gentoo, "Biscoe", 5000.0),
            row(Species::Adelie, "Dream", 3600.0),
            row(Species::Adelie, "Torgersen", 3200.0),
        ])
    }

    #[test]
    fn unsorted_display_keeps_view_order() {
        let ds = dataset();
        let table = TableState::default();
        assert_eq!(table.display_rows(&ds, &[0, 1, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn sorting_by_mass_orders_rows_without_touching_the_view() {
        let ds = dataset();
        let visible = vec![0, 1, 2];
        let mut table = TableState::default();
        table.click_column(SortColumn::BodyMass);
        assert_eq!(table.display_rows(&ds, &visible), vec![2, 1, 0]);

        // Second click flips direction.
        table.click_column(SortColumn::BodyMass);
        assert_eq!(table.display_rows(&ds, &visible), vec![0, 1, 2]);

        // The view itself is untouched.
        assert_eq!(visible, vec![0, 1, 2]);
    }

    #[test]
    fn column_filters_match_substrings_case_insensitively() {
        let ds = dataset();
        let mut table = TableState::default();
        table.island_query = "dre".to_string();
        assert_eq!(table.display_rows(&ds, &[0, 1, 2]), vec![1]);

        table.island_query.clear();
        table.species_query = "ADELIE".to_string();
        assert_eq!(table.display_rows(&ds, &[0, 1, 2]), vec![1, 2]);
    }

    #[test]
    fn sorting_totally_orders_nan_and_missing_bill_values() {
        let row = |bill: Option<f64>| Penguin {
            species: Species::Adelie,
            island: "Dream".to_string(),
            bill_length_mm: bill,
            bill_depth_mm: Some(18.0),
            flipper_length_mm: None,
            body_mass_g: Some(3500.0),
            sex: None,
            year: 2008,
        };
        let ds = PenguinDataset::from_penguins(vec![
            row(Some(f64::NAN)),
            row(Some(2.0)),
            row(None),
            row(Some(1.0)),
        ]);
        let mut table = TableState::default();
        table.click_column(SortColumn::BillLength);
        // Missing first, then finite values, NaN last; the comparator is
        // consistent so sort_by never sees a total-order violation.
        assert_eq!(table.display_rows(&ds, &[0, 1, 2, 3]), vec![2, 3, 1, 0]);

        assert_eq!(cmp_opt(Some(f64::NAN), Some(1.0)), Ordering::Greater);
        assert_eq!(cmp_opt(Some(f64::NAN), Some(f64::NAN)), Ordering::Equal);
        assert_eq!(cmp_opt(None, Some(f64::NAN)), Ordering::Less);
    }

    #[test]
    fn empty_view_displays_an_empty_grid() {
        let ds = dataset();
        let table = TableState::default();
        assert!(table.display_rows(&ds, &[]).is_empty());
    }
}
