/// Data layer: core types, loading, filtering, and summary statistics.
///
/// Architecture:
/// ```text
///  assets/penguins.csv  /  user .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PenguinDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ PenguinDataset  │  Vec<Penguin>, island index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  filter   │ ──▶ │  stats    │  visible indices → count / means
///   └──────────┘     └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
