//! ECS wiring for the tracker.
//!
//! Commands arrive as events, the tracker state lives in resources, and a
//! completed estimation leaves as an `AssessmentComputed` event that the
//! save and report collaborators consume. Collaborator failures never reach
//! these systems; they come back as `NotificationEvent`s.

use bevy::prelude::*;
use chrono::Utc;

use crate::assessment::Assessment;
use crate::category::Category;
use crate::goal::{GoalStatus, UserGoal};
use crate::notifications::NotificationEvent;
use crate::result::EmissionsResult;
use crate::tracker_sets::TrackerSet;
use crate::wizard::{FieldError, StageAnswers, TrackerWizard, WizardError};

// =============================================================================
// Events
// =============================================================================

/// Submit one step's answers.
#[derive(Event, Debug, Clone)]
pub struct SubmitStageEvent(pub StageAnswers);

#[derive(Event, Debug, Clone, Copy)]
pub struct GoToStepEvent(pub Category);

/// Step back one step. Stays on the first step.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PreviousStepEvent;

/// Step forward one step once the current one is completed.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct NextStepEvent;

/// Finalize the tracker and estimate.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CalculateEvent;

#[derive(Event, Debug, Clone, Copy)]
pub struct SetGoalEvent {
    pub kg: i64,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetTrackerEvent;

/// A new assessment was computed from the tracker.
#[derive(Event, Debug, Clone)]
pub struct AssessmentComputed(pub Assessment);

/// The user goal changed through `SetGoalEvent`.
#[derive(Event, Debug, Clone, Copy)]
pub struct GoalChanged(pub UserGoal);

// =============================================================================
// Resources
// =============================================================================

/// The most recent assessment, computed this session or loaded from storage.
#[derive(Resource, Debug, Clone, Default)]
pub struct LatestAssessment {
    assessment: Option<Assessment>,
    /// Incremented whenever `assessment` is replaced or cleared.
    revision: u64,
}

impl LatestAssessment {
    pub fn get(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    pub fn result(&self) -> Option<EmissionsResult> {
        self.assessment.as_ref().map(|a| a.result)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, assessment: Assessment) {
        self.assessment = Some(assessment);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.assessment = None;
        self.revision += 1;
    }
}

/// Validation errors of the last rejected submission. Cleared when a
/// submission is accepted or the tracker resets.
#[derive(Resource, Debug, Clone, Default)]
pub struct StageErrors {
    pub stage: Option<Category>,
    pub errors: Vec<FieldError>,
}

impl StageErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn clear(&mut self) {
        self.stage = None;
        self.errors.clear();
    }
}

// =============================================================================
// Systems
// =============================================================================

fn handle_reset(
    mut events: EventReader<ResetTrackerEvent>,
    mut wizard: ResMut<TrackerWizard>,
    mut stage_errors: ResMut<StageErrors>,
) {
    if events.read().last().is_some() {
        wizard.reset();
        stage_errors.clear();
        info!("Tracker reset");
    }
}

fn handle_stage_submissions(
    mut events: EventReader<SubmitStageEvent>,
    mut wizard: ResMut<TrackerWizard>,
    mut stage_errors: ResMut<StageErrors>,
) {
    for SubmitStageEvent(answers) in events.read() {
        match wizard.submit(answers.clone()) {
            Ok(next) => {
                stage_errors.clear();
                info!(
                    "{} answers accepted, now on {}",
                    answers.category().label(),
                    next.label()
                );
            }
            Err(WizardError::Rejected { stage, errors }) => {
                stage_errors.stage = Some(stage);
                stage_errors.errors = errors;
            }
            Err(other) => warn!("Unexpected tracker error: {other}"),
        }
    }
}

fn handle_step_navigation(
    mut go_to: EventReader<GoToStepEvent>,
    mut previous: EventReader<PreviousStepEvent>,
    mut next: EventReader<NextStepEvent>,
    mut wizard: ResMut<TrackerWizard>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for GoToStepEvent(step) in go_to.read() {
        wizard.go_to(*step);
    }
    for _ in previous.read() {
        wizard.previous();
    }
    for _ in next.read() {
        let current = wizard.current_step();
        if wizard.next().is_none() {
            notifications.send(NotificationEvent::warning(
                WizardError::Incomplete(current).to_string(),
            ));
        }
    }
}

fn handle_set_goal(
    mut events: EventReader<SetGoalEvent>,
    mut goal: ResMut<UserGoal>,
    mut changed: EventWriter<GoalChanged>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for event in events.read() {
        match UserGoal::new(event.kg) {
            Ok(new_goal) => {
                *goal = new_goal;
                changed.send(GoalChanged(new_goal));
                info!("Goal set to {} kg CO₂/year", new_goal.kg());
            }
            Err(err) => {
                notifications.send(NotificationEvent::warning(format!(
                    "Goal not changed: {err}"
                )));
            }
        }
    }
}

fn handle_calculate(
    mut events: EventReader<CalculateEvent>,
    wizard: Res<TrackerWizard>,
    goal: Res<UserGoal>,
    mut latest: ResMut<LatestAssessment>,
    mut computed: EventWriter<AssessmentComputed>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    // Several requests in one frame still estimate once.
    if events.read().last().is_none() {
        return;
    }

    let snapshot = match wizard.finalize() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            notifications.send(NotificationEvent::warning(err.to_string()));
            return;
        }
    };

    let assessment = Assessment::compute(snapshot, Utc::now());
    let result = assessment.result;
    info!(
        "Assessment computed: {} kg CO₂/year ({}% of reference average)",
        result.total, result.compared_to_average
    );

    let status = GoalStatus::from_progress(goal.progress_percent(result.total));
    notifications.send(match status {
        GoalStatus::Ahead(_) => NotificationEvent::positive(status.message()),
        GoalStatus::Behind(_) => NotificationEvent::info(status.message()),
    });

    latest.set(assessment.clone());
    computed.send(AssessmentComputed(assessment));
}

// =============================================================================
// Plugin
// =============================================================================

pub struct TrackerPlugin;

impl Plugin for TrackerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackerWizard>()
            .init_resource::<UserGoal>()
            .init_resource::<LatestAssessment>()
            .init_resource::<StageErrors>()
            .add_event::<SubmitStageEvent>()
            .add_event::<GoToStepEvent>()
            .add_event::<PreviousStepEvent>()
            .add_event::<NextStepEvent>()
            .add_event::<CalculateEvent>()
            .add_event::<SetGoalEvent>()
            .add_event::<ResetTrackerEvent>()
            .add_event::<AssessmentComputed>()
            .add_event::<GoalChanged>()
            .add_systems(
                Update,
                (
                    handle_reset,
                    handle_stage_submissions,
                    handle_step_navigation,
                    handle_set_goal,
                    handle_calculate,
                )
                    .chain()
                    .in_set(TrackerSet::Input),
            );
    }
}

// =============================================================================
// Tests
// =============================================================================
