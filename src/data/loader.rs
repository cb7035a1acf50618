use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Penguin, PenguinDataset};

/// The built-in Palmer Penguins table, embedded at compile time.
const BUILTIN_CSV: &str = include_str!("../../assets/penguins.csv");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse the embedded dataset. Called once at startup; a failure here means
/// the shipped asset is broken and the process should not come up.
pub fn load_builtin() -> Result<PenguinDataset> {
    parse_csv(BUILTIN_CSV).context("parsing built-in penguin dataset")
}

/// Load a replacement dataset from a user-chosen file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the penguin columns; empty cells are missing
/// * `.json` – records-oriented: `[{ "species": "Adelie", ... }, ...]`
pub fn load_file(path: &Path) -> Result<PenguinDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parse: fn(&str) -> Result<PenguinDataset> = match ext.as_str() {
        "csv" => parse_csv,
        "json" => parse_json,
        other => return Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dataset = parse(&text)?;

    if dataset.is_empty() {
        return Err(LoadError::Empty.into());
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Format parsers
// ---------------------------------------------------------------------------

/// CSV layout: header row
/// `species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year`
/// with empty cells for missing measurements.
fn parse_csv(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut penguins = Vec::new();

    for (row_no, result) in reader.deserialize::<Penguin>().enumerate() {
        // Line number as a user counts them: header is line 1.
        let penguin = result.with_context(|| format!("CSV line {}", row_no + 2))?;
        penguins.push(penguin);
    }

    Ok(PenguinDataset::from_penguins(penguins))
}

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "species": "Adelie",
///     "island": "Torgersen",
///     "bill_length_mm": 39.1,
///     "bill_depth_mm": 18.7,
///     "flipper_length_mm": 181.0,
///     "body_mass_g": 3750.0,
///     "sex": "male",
///     "year": 2007
///   },
///   ...
/// ]
/// ```
///
/// Missing measurements are `null`.
fn parse_json(text: &str) -> Result<PenguinDataset> {
    let penguins: Vec<Penguin> = serde_json::from_str(text).context("parsing JSON records")?;
    Ok(PenguinDataset::from_penguins(penguins))
}
