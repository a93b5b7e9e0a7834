/// Data layer: core types, loading, validation, filtering and aggregation.
///
/// Architecture:
/// ```text
///  day.csv / hour.csv  (.json / .parquet)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate schema → BikeShareData
///   └──────────┘
///        │
///        ├──────────────► validate   holiday/workingday, count totals
///        ▼
///   ┌──────────┐
///   │  filter   │  date range + weather codes → filtered records
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────────┐
///   │ aggregate / metrics   │  summaries and scalar tiles
///   └──────────────────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod validate;
