use std::path::PathBuf;

use bevy::prelude::*;
use chrono::Utc;
use footprint::export_format::ExportFormat;
use footprint::goal::UserGoal;
use footprint::notifications::NotificationEvent;
use footprint::tracker_plugin::LatestAssessment;
use footprint::TrackerSet;

use crate::export::{export_report, ExportError};
use crate::report_data::ReportData;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Directory exported reports are written to.
#[derive(Resource, Debug, Clone)]
pub struct ExportSettings {
    pub dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("ecotrack-exports"),
        }
    }
}

/// The most recent successful export.
#[derive(Resource, Debug, Clone, Default)]
pub struct LastExport {
    export: Option<ReportExported>,
    revision: u64,
}

impl LastExport {
    pub fn get(&self) -> Option<&ReportExported> {
        self.export.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn record(&mut self, exported: ReportExported) {
        self.export = Some(exported);
        self.revision += 1;
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ExportReportEvent {
    pub format: ExportFormat,
}

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ReportExported {
    pub format: ExportFormat,
    pub path: PathBuf,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct ReportPlugin {
    pub export_dir: PathBuf,
}

impl Default for ReportPlugin {
    fn default() -> Self {
        Self {
            export_dir: ExportSettings::default().dir,
        }
    }
}

impl Plugin for ReportPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ExportSettings {
            dir: self.export_dir.clone(),
        })
        .init_resource::<LastExport>()
        .init_resource::<LatestAssessment>()
        .init_resource::<UserGoal>()
        .add_event::<NotificationEvent>()
        .add_event::<ExportReportEvent>()
        .add_event::<ReportExported>()
        .add_systems(Update, handle_export.in_set(TrackerSet::Output));
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn handle_export(
    mut events: EventReader<ExportReportEvent>,
    latest: Res<LatestAssessment>,
    goal: Res<UserGoal>,
    settings: Res<ExportSettings>,
    mut last: ResMut<LastExport>,
    mut exported: EventWriter<ReportExported>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for event in events.read() {
        let outcome = match latest.result() {
            Some(result) => {
                let data = ReportData::new(&result, *goal, Utc::now());
                export_report(&settings.dir, event.format, &data)
            }
            None => Err(ExportError::NoAssessment),
        };

        match outcome {
            Ok(path) => {
                info!("Report exported to {}", path.display());
                let done = ReportExported {
                    format: event.format,
                    path,
                };
                last.record(done.clone());
                exported.send(done);
            }
            Err(e) => {
                warn!("Export failed: {e}");
                notifications.send(NotificationEvent::warning(format!(
                    "Unable to export report: {e}"
                )));
            }
        }
    }
}
