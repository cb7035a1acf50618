use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Species – the primary grouping attribute
// ---------------------------------------------------------------------------

/// The three penguin species of the Palmer Archipelago survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// All species in display order.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Chinstrap, Species::Gentoo];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown species: {0:?}")]
pub struct UnknownSpecies(pub String);

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(UnknownSpecies(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// One measured penguin (one row of the source table).
///
/// The survey data has gaps, so every measurement is optional. A missing
/// body mass makes the row fail the mass filter; missing bill measurements
/// drop the row from the scatter plot and from the respective mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<String>,
    pub year: i32,
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset. Built once at startup (or on File → Open) and
/// never mutated afterwards; every widget reads it through shared borrows.
#[derive(Debug, Clone)]
pub struct PenguinDataset {
    /// All penguins (rows), in source order.
    pub penguins: Vec<Penguin>,
    /// Sorted unique island names, for the table's island filter.
    pub islands: Vec<String>,
}

impl PenguinDataset {
    /// Build the island index from the loaded rows.
    pub fn from_penguins(penguins: Vec<Penguin>) -> Self {
        let islands: BTreeSet<String> = penguins.iter().map(|p| p.island.clone()).collect();
        PenguinDataset {
            penguins,
            islands: islands.into_iter().collect(),
        }
    }

    /// Number of penguins.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_round_trips_through_str() {
        for sp in Species::ALL {
            assert_eq!(sp.name().parse::<Species>().unwrap(), sp);
        }
        assert!("Emperor".parse::<Species>().is_err());
    }

    #[test]
    fn island_index_is_sorted_and_unique() {
        let rows = vec![
            penguin(Species::Gentoo, "Biscoe"),
            penguin(Species::Adelie, "Torgersen"),
            penguin(Species::Adelie, "Biscoe"),
        ];
        let ds = PenguinDataset::from_penguins(rows);
        assert_eq!(ds.islands, vec!["Biscoe", "Torgersen"]);
        assert_eq!(ds.len(), 3);
    }

    fn penguin(species: Species, island: &str) -> Penguin {
        Penguin {
            species,
            island: island.to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: Some(3800.0),
            sex: None,
            year: 2008,
        }
    }
}
