/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (fatal LoadError at startup)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Pokemon>, distinct types, Total bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (Dataset, Selection) → counts / range listing
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
