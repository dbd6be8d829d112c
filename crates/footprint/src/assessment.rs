//! The persisted record of one completed estimation.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::estimator::estimate;
use crate::result::EmissionsResult;
use crate::snapshot::LifestyleSnapshot;

/// Snapshot answers, their result and when they were computed.
///
/// Serializes flat: the four answer records sit beside `totalEmissions` and
/// `date`, the layout records have always been stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub snapshot: LifestyleSnapshot,
    #[serde(rename = "totalEmissions")]
    pub result: EmissionsResult,
    #[serde(serialize_with = "serialize_iso")]
    pub date: DateTime<Utc>,
}

impl Assessment {
    /// Run the estimator once over a finalized snapshot.
    pub fn compute(snapshot: LifestyleSnapshot, date: DateTime<Utc>) -> Self {
        let result = estimate(&snapshot);
        Self {
            snapshot,
            result,
            date,
        }
    }

    /// `date` as ISO-8601 with milliseconds and a `Z` suffix.
    pub fn date_iso(&self) -> String {
        iso_timestamp(self.date)
    }
}

pub fn iso_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter writing a timestamp through [`iso_timestamp`].
pub fn serialize_iso<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_timestamp(*date))
}
