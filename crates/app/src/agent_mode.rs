//! Line-oriented JSON protocol over stdin/stdout.
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. Notifications raised while handling a command travel
//! with its response. See [`footprint::agent_protocol`] for the schema.

use std::io::{BufRead, Write};

use bevy::prelude::*;

use footprint::agent_protocol::{
    make_response, AgentCommand, AgentResponse, ResponsePayload, ResultSummary, TrackerStatus,
    PROTOCOL_VERSION,
};
use footprint::checked_estimate;
use footprint::goal::UserGoal;
use footprint::notifications::{Notification, NotificationLog, NotificationPriority};
use footprint::offset::{default_offset_cost_usd, quotes};
use footprint::tips::{focus_category, recommended, tips_for, TIPS};
use footprint::tracker_plugin::{
    CalculateEvent, GoToStepEvent, LatestAssessment, NextStepEvent, PreviousStepEvent,
    ResetTrackerEvent, SetGoalEvent, StageErrors, SubmitStageEvent,
};
use footprint::wizard::{StageAnswers, TrackerWizard};
use report::{ExportReportEvent, LastExport};
use save::ClearSavedDataEvent;

pub fn run_agent_mode(app: &mut App) {
    // Startup systems run here, including loading saved records.
    app.update();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    let mut ready = make_response(ResponsePayload::Ready);
    ready.notifications = drain_notifications(app);
    write_response(&mut stdout, &ready);

    info!("EcoTrack protocol v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: AgentCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                let resp = make_response(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                });
                write_response(&mut stdout, &resp);
                continue;
            }
        };

        let response = process_command(cmd, app);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    info!("EcoTrack shutting down");
}

fn write_response(out: &mut impl Write, response: &AgentResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            if let Err(e) = writeln!(out, "{json}").and_then(|()| out.flush()) {
                error!("stdout write error: {e}");
            }
        }
        Err(e) => error!("response could not be encoded: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn drain_notifications(app: &mut App) -> Vec<Notification> {
    app.world_mut()
        .get_resource_mut::<NotificationLog>()
        .map(|mut log| log.drain_active())
        .unwrap_or_default()
}

/// The newest undelivered warning, if any.
fn pending_warning(app: &App) -> Option<String> {
    app.world()
        .get_resource::<NotificationLog>()?
        .active
        .iter()
        .rev()
        .find(|n| n.priority == NotificationPriority::Warning)
        .map(|n| n.text.clone())
}

fn current_goal(app: &App) -> UserGoal {
    app.world()
        .get_resource::<UserGoal>()
        .copied()
        .unwrap_or_default()
}

fn tracker_status(app: &App) -> TrackerStatus {
    let world = app.world();
    let wizard = world.resource::<TrackerWizard>();
    let goal = current_goal(app);
    TrackerStatus {
        current_step: wizard.current_step(),
        progress_percent: wizard.progress_percent(),
        steps: wizard.steps(),
        goal_kg: goal.kg(),
        latest: world
            .resource::<LatestAssessment>()
            .result()
            .map(|result| ResultSummary::new(result, goal)),
    }
}

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    let payload = dispatch(cmd, app);
    let mut response = make_response(payload);
    response.notifications = drain_notifications(app);
    response
}

fn dispatch(cmd: AgentCommand, app: &mut App) -> ResponsePayload {
    match cmd {
        AgentCommand::SubmitStage { stage, answers } => {
            let answers = match StageAnswers::from_value(stage, answers) {
                Ok(a) => a,
                Err(e) => {
                    return ResponsePayload::Error {
                        message: format!("Invalid {} answers: {e}", stage.label()),
                    }
                }
            };

            app.world_mut().send_event(SubmitStageEvent(answers));
            app.update();

            let errors = app.world().resource::<StageErrors>();
            if errors.stage == Some(stage) && !errors.is_empty() {
                ResponsePayload::StageRejected {
                    stage,
                    errors: errors.errors.clone(),
                }
            } else {
                ResponsePayload::StageAccepted {
                    stage,
                    next_step: app.world().resource::<TrackerWizard>().current_step(),
                }
            }
        }

        AgentCommand::GoToStep { step } => {
            app.world_mut().send_event(GoToStepEvent(step));
            app.update();
            ResponsePayload::Status {
                status: tracker_status(app),
            }
        }

        AgentCommand::PreviousStep => {
            app.world_mut().send_event(PreviousStepEvent);
            app.update();
            ResponsePayload::Status {
                status: tracker_status(app),
            }
        }

        AgentCommand::NextStep => {
            app.world_mut().send_event(NextStepEvent);
            app.update();
            match pending_warning(app) {
                Some(message) => ResponsePayload::Error { message },
                None => ResponsePayload::Status {
                    status: tracker_status(app),
                },
            }
        }

        AgentCommand::Calculate => {
            let before = app.world().resource::<LatestAssessment>().revision();
            app.world_mut().send_event(CalculateEvent);
            app.update();

            let latest = app.world().resource::<LatestAssessment>();
            match latest.result() {
                Some(result) if latest.revision() != before => ResponsePayload::Result {
                    summary: ResultSummary::new(result, current_goal(app)),
                },
                _ => ResponsePayload::Error {
                    message: pending_warning(app)
                        .unwrap_or_else(|| "Emissions were not calculated".to_string()),
                },
            }
        }

        AgentCommand::Estimate { snapshot } => match checked_estimate(&snapshot) {
            Some(result) => ResponsePayload::Result {
                summary: ResultSummary::new(result, current_goal(app)),
            },
            None => ResponsePayload::Error {
                message: "Snapshot values are too large to estimate".to_string(),
            },
        },

        AgentCommand::Status => ResponsePayload::Status {
            status: tracker_status(app),
        },

        AgentCommand::SetGoal { kg } => {
            app.world_mut().send_event(SetGoalEvent { kg });
            app.update();
            if current_goal(app).kg() == kg {
                ResponsePayload::Ok
            } else {
                ResponsePayload::Error {
                    message: pending_warning(app)
                        .unwrap_or_else(|| format!("Goal not changed to {kg}")),
                }
            }
        }

        AgentCommand::Export { format } => {
            let before = app.world().resource::<LastExport>().revision();
            app.world_mut().send_event(ExportReportEvent { format });
            app.update();

            let last = app.world().resource::<LastExport>();
            match last.get() {
                Some(exported) if last.revision() != before => ResponsePayload::Exported {
                    format: exported.format,
                    path: exported.path.display().to_string(),
                },
                _ => ResponsePayload::Error {
                    message: pending_warning(app)
                        .unwrap_or_else(|| "Unable to export report".to_string()),
                },
            }
        }

        AgentCommand::Offsets => match app.world().resource::<LatestAssessment>().result() {
            Some(result) => ResponsePayload::Offsets {
                total_kg: result.total,
                cost_usd: default_offset_cost_usd(result.total),
                quotes: quotes(result.total),
            },
            None => ResponsePayload::Error {
                message: "Calculate your emissions before pricing offsets".to_string(),
            },
        },

        AgentCommand::Tips { category } => {
            let latest = app.world().resource::<LatestAssessment>().result();
            match (category, latest) {
                (Some(category), _) => ResponsePayload::Tips {
                    category: Some(category),
                    tips: tips_for(category).copied().collect(),
                },
                (None, Some(result)) => ResponsePayload::Tips {
                    category: focus_category(&result),
                    tips: recommended(&result).into_iter().copied().collect(),
                },
                (None, None) => ResponsePayload::Tips {
                    category: None,
                    tips: TIPS.to_vec(),
                },
            }
        }

        AgentCommand::Reset => {
            app.world_mut().send_event(ResetTrackerEvent);
            app.update();
            ResponsePayload::Ok
        }

        AgentCommand::ClearSaved => {
            app.world_mut().send_event(ClearSavedDataEvent);
            app.update();
            match pending_warning(app) {
                Some(message) => ResponsePayload::Error { message },
                None => ResponsePayload::Ok,
            }
        }

        AgentCommand::Quit => ResponsePayload::Goodbye,
    }
}
