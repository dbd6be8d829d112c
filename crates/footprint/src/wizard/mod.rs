//! The four-step tracker that assembles a snapshot.
//!
//! Steps run Transport → Home → Food → Shopping. Each accepted submission
//! replaces that step's answers and moves to the following step. The
//! snapshot is released to the estimator only once every step has been
//! accepted at least once.

mod validation;

#[cfg(test)]
mod tests;

use std::fmt;

use bevy::prelude::*;
use serde::Serialize;

use crate::category::Category;
use crate::result::round_half_up;
use crate::snapshot::{
    FoodAnswers, HomeAnswers, LifestyleSnapshot, ShoppingAnswers, TransportAnswers,
};

pub use validation::{
    validate, validate_food, validate_home, validate_shopping, validate_transport, FieldError,
};

pub const STEP_COUNT: usize = Category::ALL.len();

// =============================================================================
// Stage answers
// =============================================================================

/// The answers submitted for one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StageAnswers {
    Transport(TransportAnswers),
    Home(HomeAnswers),
    Food(FoodAnswers),
    Shopping(ShoppingAnswers),
}

impl StageAnswers {
    pub fn category(&self) -> Category {
        match self {
            StageAnswers::Transport(_) => Category::Transport,
            StageAnswers::Home(_) => Category::Home,
            StageAnswers::Food(_) => Category::Food,
            StageAnswers::Shopping(_) => Category::Shopping,
        }
    }

    /// Decode a form record for `category` from loose JSON.
    pub fn from_value(
        category: Category,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match category {
            Category::Transport => StageAnswers::Transport(serde_json::from_value(value)?),
            Category::Home => StageAnswers::Home(serde_json::from_value(value)?),
            Category::Food => StageAnswers::Food(serde_json::from_value(value)?),
            Category::Shopping => StageAnswers::Shopping(serde_json::from_value(value)?),
        })
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The submission failed validation; nothing was stored.
    Rejected {
        stage: Category,
        errors: Vec<FieldError>,
    },
    /// Finalize was asked for before this step was completed.
    Incomplete(Category),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Rejected { stage, errors } => {
                write!(f, "{} answers rejected:", stage.label())?;
                for error in errors {
                    write!(f, " {}.", error.message)?;
                }
                Ok(())
            }
            WizardError::Incomplete(stage) => {
                write!(f, "Please complete the {} step first", stage.label())
            }
        }
    }
}

impl std::error::Error for WizardError {}

// =============================================================================
// Step view
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub id: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

// =============================================================================
// TrackerWizard Resource
// =============================================================================

#[derive(Resource, Debug, Clone, Default)]
pub struct TrackerWizard {
    current: usize,
    answers: LifestyleSnapshot,
    completed: [bool; STEP_COUNT],
}

impl TrackerWizard {
    pub fn current_step(&self) -> Category {
        Category::from_index(self.current).unwrap_or(Category::Shopping)
    }

    /// Answers accepted so far. Steps not yet submitted are empty.
    pub fn answers(&self) -> &LifestyleSnapshot {
        &self.answers
    }

    pub fn is_completed(&self, step: Category) -> bool {
        self.completed[step.index()]
    }

    pub fn all_completed(&self) -> bool {
        self.completed.iter().all(|done| *done)
    }

    pub fn steps(&self) -> Vec<StepInfo> {
        Category::ALL
            .into_iter()
            .map(|step| StepInfo {
                id: step,
                title: step.label(),
                description: step.description(),
                completed: self.is_completed(step),
            })
            .collect()
    }

    /// `round(step index / 4 × 100)`: 0 on the first step, 75 on the last.
    pub fn progress_percent(&self) -> i64 {
        round_half_up(self.current as f64 / STEP_COUNT as f64 * 100.0)
    }

    /// Validate and store one step's answers. On success the wizard moves
    /// to the step after the submitted one and returns it.
    pub fn submit(&mut self, answers: StageAnswers) -> Result<Category, WizardError> {
        let stage = answers.category();
        let errors = validate(&answers);
        if !errors.is_empty() {
            return Err(WizardError::Rejected { stage, errors });
        }

        match answers {
            StageAnswers::Transport(transport) => self.answers.transport = transport,
            StageAnswers::Home(home) => self.answers.home = home,
            StageAnswers::Food(food) => self.answers.food = food,
            StageAnswers::Shopping(shopping) => self.answers.shopping = shopping,
        }
        self.completed[stage.index()] = true;
        self.current = (stage.index() + 1).min(STEP_COUNT - 1);
        Ok(self.current_step())
    }

    pub fn go_to(&mut self, step: Category) {
        self.current = step.index();
    }

    pub fn previous(&mut self) -> Category {
        self.current = self.current.saturating_sub(1);
        self.current_step()
    }

    /// Advance one step. Only allowed once the current step is completed.
    pub fn next(&mut self) -> Option<Category> {
        if !self.completed[self.current] {
            return None;
        }
        self.current = (self.current + 1).min(STEP_COUNT - 1);
        Some(self.current_step())
    }

    /// The assembled snapshot, or the first step still missing.
    pub fn finalize(&self) -> Result<LifestyleSnapshot, WizardError> {
        if let Some(missing) = Category::ALL
            .into_iter()
            .find(|step| !self.is_completed(*step))
        {
            return Err(WizardError::Incomplete(missing));
        }
        Ok(self.answers.clone())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
