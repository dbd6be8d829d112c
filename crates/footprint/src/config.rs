pub const PRODUCT_NAME: &str = "EcoTrack";
/// Lowercase product slug used in file names.
pub const PRODUCT_SLUG: &str = "ecotrack";

pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const KG_PER_TON: f64 = 1000.0;

/// Reference annual footprint (kg CO₂/year) used for the "compared to
/// average" percentage. Roughly the US per-capita figure.
pub const REFERENCE_AVERAGE_KG: f64 = 16_000.0;

/// Annual goal (kg CO₂/year) until the user sets their own.
pub const DEFAULT_GOAL_KG: i64 = 12_000;

/// Offset price used for the headline offset cost.
pub const DEFAULT_OFFSET_PRICE_PER_TON: f64 = 25.0;

/// Storage key for the latest assessment record.
pub const ASSESSMENT_KEY: &str = "ecotrack_emissions";
/// Storage key for the user's annual goal.
pub const GOAL_KEY: &str = "ecotrack_goal";
