/// Data layer: the columnar table and the transformations over it.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Table, infer column types
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  encode  │  low-cardinality text → cat_ code columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  drop rows matching the literal predicate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer  │  Table → Parquet (and back, for verification)
///   └──────────┘
/// ```
pub mod encode;
pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
