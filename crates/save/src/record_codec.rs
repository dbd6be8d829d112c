// ---------------------------------------------------------------------------
// record_codec – JSON payloads for the assessment and goal records
// ---------------------------------------------------------------------------

use footprint::config::{ASSESSMENT_KEY, GOAL_KEY};
use footprint::goal::UserGoal;
use footprint::Assessment;

use crate::file_header::{unwrap_header, wrap_with_header, UnwrapResult};
use crate::save_error::SaveError;
use crate::store::KeyValueStore;

fn strip_header(bytes: &[u8]) -> Result<&[u8], SaveError> {
    match unwrap_header(bytes)? {
        UnwrapResult::WithHeader { payload, .. } => Ok(payload),
        UnwrapResult::Legacy(payload) => Ok(payload),
    }
}

// =============================================================================
// Assessment
// =============================================================================

pub fn encode_assessment(assessment: &Assessment) -> Result<Vec<u8>, SaveError> {
    let json = serde_json::to_vec(assessment).map_err(|e| SaveError::Encode(e.to_string()))?;
    Ok(wrap_with_header(&json))
}

/// Accepts both headered records and raw JSON written by the browser version.
pub fn decode_assessment(bytes: &[u8]) -> Result<Assessment, SaveError> {
    let payload = strip_header(bytes)?;
    Ok(serde_json::from_slice(payload)?)
}

// =============================================================================
// Goal
// =============================================================================

/// The goal payload is a bare JSON number of kg.
pub fn encode_goal(goal: &UserGoal) -> Vec<u8> {
    wrap_with_header(goal.kg().to_string().as_bytes())
}

/// Accepts a JSON number or a quoted number; the result must be a valid goal.
pub fn decode_goal(bytes: &[u8]) -> Result<UserGoal, SaveError> {
    let payload = strip_header(bytes)?;
    let value: serde_json::Value = serde_json::from_slice(payload)?;

    let kg = match &value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| SaveError::Decode(format!("goal is not a number: {value}")))?;

    UserGoal::new(kg).map_err(|e| SaveError::Decode(e.to_string()))
}

// =============================================================================
// Store helpers
// =============================================================================

pub fn save_assessment(
    store: &mut dyn KeyValueStore,
    assessment: &Assessment,
) -> Result<(), SaveError> {
    store.set(ASSESSMENT_KEY, &encode_assessment(assessment)?)
}

pub fn load_assessment(store: &dyn KeyValueStore) -> Result<Option<Assessment>, SaveError> {
    store
        .get(ASSESSMENT_KEY)?
        .map(|bytes| decode_assessment(&bytes))
        .transpose()
}

pub fn save_goal(store: &mut dyn KeyValueStore, goal: &UserGoal) -> Result<(), SaveError> {
    store.set(GOAL_KEY, &encode_goal(goal))
}

pub fn load_goal(store: &dyn KeyValueStore) -> Result<Option<UserGoal>, SaveError> {
    store
        .get(GOAL_KEY)?
        .map(|bytes| decode_goal(&bytes))
        .transpose()
}

/// Removes both records.
pub fn clear_records(store: &mut dyn KeyValueStore) -> Result<(), SaveError> {
    store.remove(ASSESSMENT_KEY)?;
    store.remove(GOAL_KEY)
}
