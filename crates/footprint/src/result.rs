//! Estimation output and the rounding rules shared by every consumer.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::config::{DAYS_PER_YEAR, KG_PER_TON, MONTHS_PER_YEAR, REFERENCE_AVERAGE_KG};

/// Largest magnitude that still rounds to an exact whole kilogram (2^53).
pub const MAX_EXACT_KG: f64 = 9_007_199_254_740_992.0;

/// Round half toward positive infinity (`-2.5` → `-2`, `2.5` → `3`).
///
/// Values past the `i64` range saturate and `NaN` reads as 0, the way an
/// `as` cast does.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Whole-percent share of `total` held by `part`. 0 when the total is 0.
pub fn share_percent_of(part: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    round_half_up(part as f64 / total as f64 * 100.0)
}

/// Format kilograms as tons with one decimal place.
///
/// Exact ties (a fraction of .25 or .75 tons) round up.
pub fn format_tons(kg: f64) -> String {
    let tons = kg / KG_PER_TON;
    let frac = tons.fract().abs();
    if frac == 0.25 || frac == 0.75 {
        let tenths = round_half_up(tons * 10.0);
        return format!("{:.1}", tenths as f64 / 10.0);
    }
    format!("{tons:.1}")
}

/// Unrounded per-category subtotals in kg CO₂/year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    pub transport: f64,
    pub home: f64,
    pub food: f64,
    pub shopping: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Home => self.home,
            Category::Food => self.food,
            Category::Shopping => self.shopping,
        }
    }

    pub fn sum(&self) -> f64 {
        self.transport + self.home + self.food + self.shopping
    }
}

/// Rounded per-category subtotals in kg CO₂/year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub transport: i64,
    pub home: i64,
    pub food: i64,
    pub shopping: i64,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> i64 {
        match category {
            Category::Transport => self.transport,
            Category::Home => self.home,
            Category::Food => self.food,
            Category::Shopping => self.shopping,
        }
    }
}

/// Annual footprint estimate. Produced fresh by every estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsResult {
    /// kg CO₂/year, rounded once from the unrounded category sum.
    pub total: i64,
    pub breakdown: Breakdown,
    pub daily_average: i64,
    pub monthly_average: i64,
    /// Percentage of the reference annual footprint.
    pub compared_to_average: i64,
}

impl EmissionsResult {
    pub fn from_totals(totals: CategoryTotals) -> Self {
        let total = totals.sum();
        Self {
            total: round_half_up(total),
            breakdown: Breakdown {
                transport: round_half_up(totals.transport),
                home: round_half_up(totals.home),
                food: round_half_up(totals.food),
                shopping: round_half_up(totals.shopping),
            },
            daily_average: round_half_up(total / DAYS_PER_YEAR),
            monthly_average: round_half_up(total / MONTHS_PER_YEAR),
            compared_to_average: round_half_up(total / REFERENCE_AVERAGE_KG * 100.0),
        }
    }

    /// [`Self::from_totals`], or `None` when a subtotal or the sum is not
    /// finite or lies beyond [`MAX_EXACT_KG`].
    pub fn checked_from_totals(totals: CategoryTotals) -> Option<Self> {
        let in_range = |kg: f64| kg.is_finite() && kg.abs() <= MAX_EXACT_KG;
        [
            totals.transport,
            totals.home,
            totals.food,
            totals.shopping,
            totals.sum(),
        ]
        .into_iter()
        .all(in_range)
        .then(|| Self::from_totals(totals))
    }

    /// Share of the total for one category, in whole percent.
    pub fn share_percent(&self, category: Category) -> i64 {
        share_percent_of(self.breakdown.get(category), self.total)
    }
}
