//! Agent text protocol types for the headless `ecotrack` binary.
//!
//! Defines the JSON command/response envelope that external programs
//! (scripts, test harnesses, front ends) use to drive the tracker over
//! newline-delimited JSON on stdin/stdout.
//!
//! These types live in the `footprint` crate so they can be unit-tested
//! without pulling in the binary. The actual I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::export_format::ExportFormat;
use crate::goal::{share_message, GoalStatus, UserGoal};
use crate::notifications::Notification;
use crate::offset::{default_offset_cost_usd, OffsetQuote};
use crate::result::EmissionsResult;
use crate::snapshot::LifestyleSnapshot;
use crate::tips::{focus_category, Tip};
use crate::wizard::{FieldError, StepInfo};

// ---------------------------------------------------------------------------
// Commands (stdin → tracker)
// ---------------------------------------------------------------------------

/// A single command sent over stdin. The `cmd` field is the discriminator.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Submit one step's form answers. `answers` uses the camelCase form
    /// keys; numbers may be given as JSON numbers or as form text.
    #[serde(rename = "submit_stage")]
    SubmitStage {
        stage: Category,
        answers: serde_json::Value,
    },

    /// Jump to a tracker step.
    #[serde(rename = "go_to_step")]
    GoToStep { step: Category },

    /// Move back one step.
    #[serde(rename = "previous_step")]
    PreviousStep,

    /// Move forward one step. Refused until the current step is accepted.
    #[serde(rename = "next_step")]
    NextStep,

    /// Finalize the tracker and estimate once.
    #[serde(rename = "calculate")]
    Calculate,

    /// Estimate a complete snapshot without touching the tracker or the
    /// saved record.
    #[serde(rename = "estimate")]
    Estimate { snapshot: LifestyleSnapshot },

    /// Report tracker progress, the goal and the latest result.
    #[serde(rename = "status")]
    Status,

    /// Set the annual goal in kg CO₂.
    #[serde(rename = "set_goal")]
    SetGoal { kg: i64 },

    /// Write a report of the latest result.
    #[serde(rename = "export")]
    Export {
        #[serde(default)]
        format: ExportFormat,
    },

    /// Price offsets for the latest result.
    #[serde(rename = "offsets")]
    Offsets,

    /// Reduction tips. Without a category, tips for the largest category
    /// of the latest result.
    #[serde(rename = "tips")]
    Tips {
        #[serde(default)]
        category: Option<Category>,
    },

    /// Restart the tracker from the first step.
    #[serde(rename = "reset")]
    Reset,

    /// Forget the saved assessment and goal.
    #[serde(rename = "clear_saved")]
    ClearSaved,

    /// Gracefully shut down the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (tracker → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version, any notifications raised
/// while handling the command, and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Tracker progress and the current goal.
#[derive(Debug, Clone, Serialize)]
pub struct TrackerStatus {
    pub current_step: Category,
    pub progress_percent: i64,
    pub steps: Vec<StepInfo>,
    pub goal_kg: i64,
    pub latest: Option<ResultSummary>,
}

/// An estimation result with everything the dashboard derives from it.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub emissions: EmissionsResult,
    pub goal_kg: i64,
    pub goal_progress: i64,
    pub goal_status: GoalStatus,
    pub goal_message: String,
    pub share_message: String,
    pub offset_cost_usd: i64,
    pub focus_category: Option<Category>,
}

impl ResultSummary {
    pub fn new(emissions: EmissionsResult, goal: UserGoal) -> Self {
        let goal_progress = goal.progress_percent(emissions.total);
        let goal_status = GoalStatus::from_progress(goal_progress);
        Self {
            emissions,
            goal_kg: goal.kg(),
            goal_progress,
            goal_status,
            goal_message: goal_status.message(),
            share_message: share_message(goal_progress, goal.kg()),
            offset_cost_usd: default_offset_cost_usd(emissions.total),
            focus_category: focus_category(&emissions),
        }
    }
}

/// Tagged payload variants for agent responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "status")]
    Status { status: TrackerStatus },

    /// Accepted step submission; `next_step` is where the tracker moved.
    #[serde(rename = "stage_accepted")]
    StageAccepted { stage: Category, next_step: Category },

    /// Step submission failed validation; nothing was stored.
    #[serde(rename = "stage_rejected")]
    StageRejected {
        stage: Category,
        errors: Vec<FieldError>,
    },

    #[serde(rename = "result")]
    Result { summary: ResultSummary },

    #[serde(rename = "exported")]
    Exported { format: ExportFormat, path: String },

    #[serde(rename = "offsets")]
    Offsets {
        total_kg: i64,
        cost_usd: i64,
        quotes: Vec<OffsetQuote>,
    },

    #[serde(rename = "tips")]
    Tips {
        category: Option<Category>,
        tips: Vec<Tip>,
    },

    /// Generic success acknowledgement.
    #[serde(rename = "ok")]
    Ok,

    #[serde(rename = "error")]
    Error { message: String },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        notifications: Vec::new(),
        payload,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
