//! The user's annual emissions target and progress against it.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GOAL_KG, PRODUCT_NAME};
use crate::result::{format_tons, round_half_up};

/// Annual emissions target in kg CO₂. Always positive.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGoal {
    kg: i64,
}

impl Default for UserGoal {
    fn default() -> Self {
        Self {
            kg: DEFAULT_GOAL_KG,
        }
    }
}

impl UserGoal {
    pub fn new(kg: i64) -> Result<Self, GoalError> {
        if kg <= 0 {
            return Err(GoalError::NotPositive(kg));
        }
        Ok(Self { kg })
    }

    pub fn kg(&self) -> i64 {
        self.kg
    }

    pub fn progress_percent(&self, total_kg: i64) -> i64 {
        goal_progress_percent(total_kg, self.kg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    NotPositive(i64),
}

impl fmt::Display for GoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalError::NotPositive(kg) => {
                write!(f, "goal must be a positive number of kg, got {kg}")
            }
        }
    }
}

impl std::error::Error for GoalError {}

/// `round((1 − total/goal) × 100)`. Positive when emissions are below the
/// goal, negative when above.
pub fn goal_progress_percent(total_kg: i64, goal_kg: i64) -> i64 {
    if goal_kg <= 0 {
        return 0;
    }
    round_half_up((1.0 - total_kg as f64 / goal_kg as f64) * 100.0)
}

/// Where the user stands relative to their goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "percent", rename_all = "lowercase")]
pub enum GoalStatus {
    /// Below the goal by this many percent.
    Ahead(i64),
    /// Above the goal (or exactly on it) by this many percent.
    Behind(i64),
}

impl GoalStatus {
    pub fn from_progress(progress: i64) -> Self {
        if progress > 0 {
            GoalStatus::Ahead(progress)
        } else {
            GoalStatus::Behind(progress.abs())
        }
    }

    pub fn message(&self) -> String {
        match self {
            GoalStatus::Ahead(percent) => format!(
                "You're doing great! Your emissions are {percent}% lower than your target"
            ),
            GoalStatus::Behind(percent) => {
                format!("You're {percent}% above your target emissions")
            }
        }
    }
}

/// Text offered by the share action.
pub fn share_message(progress: i64, goal_kg: i64) -> String {
    format!(
        "I've reduced my carbon footprint by {progress}% compared to my target of {} tons CO₂/year! Check out my progress on {PRODUCT_NAME}.",
        format_tons(goal_kg as f64)
    )
}
