/// Data layer: core types and ingestion.
///
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → coerce + validate rows
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CoordinateSet │  ordered, immutable point set
///   └───────────────┘
///        │
///        ▼
///   rendering boundary (scene config + layers)
/// ```
pub mod loader;
pub mod model;
