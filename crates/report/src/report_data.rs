//! The report view handed to every export format.

use chrono::{DateTime, Utc};
use serde::Serialize;

use footprint::assessment::serialize_iso;
use footprint::goal::UserGoal;
use footprint::result::{share_percent_of, Breakdown};
use footprint::{Category, EmissionsResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    /// kg CO₂/year.
    pub total: i64,
    pub breakdown: Breakdown,
    /// Annual goal in kg CO₂.
    pub goal: i64,
    /// Percent below the goal (negative when above it).
    pub progress: i64,
    #[serde(serialize_with = "serialize_iso")]
    pub date: DateTime<Utc>,
}

impl ReportData {
    pub fn new(result: &EmissionsResult, goal: UserGoal, date: DateTime<Utc>) -> Self {
        Self {
            total: result.total,
            breakdown: result.breakdown,
            goal: goal.kg(),
            progress: goal.progress_percent(result.total),
            date,
        }
    }

    /// Whole-percent share of the total for one category; 0 for an empty
    /// total.
    pub fn share_percent(&self, category: Category) -> i64 {
        share_percent_of(self.breakdown.get(category), self.total)
    }
}
