use std::path::PathBuf;

use bevy::prelude::*;
use footprint::goal::UserGoal;
use footprint::notifications::NotificationEvent;
use footprint::tracker_plugin::{AssessmentComputed, GoalChanged, LatestAssessment};
use footprint::TrackerSet;

use crate::record_codec::{clear_records, load_assessment, load_goal, save_assessment, save_goal};
use crate::store::{FileStore, KeyValueStore};

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Backing store for persisted records. Insert one before adding
/// [`SavePlugin`] to override the default file store.
#[derive(Resource)]
pub struct SaveStore(pub Box<dyn KeyValueStore + Send + Sync>);

impl SaveStore {
    pub fn new(store: impl KeyValueStore + Send + Sync + 'static) -> Self {
        Self(Box::new(store))
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Re-read both records from the store.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct LoadSavedDataEvent;

/// Remove both records and return the tracker to its defaults.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClearSavedDataEvent;

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SavePlugin {
    pub data_dir: PathBuf,
}

impl Default for SavePlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("ecotrack-data"),
        }
    }
}

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SaveStore>() {
            app.insert_resource(SaveStore::new(FileStore::new(self.data_dir.clone())));
        }

        app.init_resource::<LatestAssessment>()
            .init_resource::<UserGoal>()
            .add_event::<NotificationEvent>()
            .add_event::<AssessmentComputed>()
            .add_event::<GoalChanged>()
            .add_event::<LoadSavedDataEvent>()
            .add_event::<ClearSavedDataEvent>();

        app.add_systems(Startup, load_on_startup);
        app.add_systems(
            Update,
            (
                detect_load_event,
                detect_clear_event,
                persist_assessment,
                persist_goal,
            )
                .chain()
                .in_set(TrackerSet::Persist),
        );
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Fills `LatestAssessment` and `UserGoal` from the store. A record that
/// cannot be read is reported and treated as absent.
fn load_records(
    store: &SaveStore,
    latest: &mut LatestAssessment,
    goal: &mut UserGoal,
    notifications: &mut EventWriter<NotificationEvent>,
) {
    match load_assessment(store.0.as_ref()) {
        Ok(Some(assessment)) => {
            info!(
                "Loaded saved assessment from {} ({} kg CO₂/year)",
                assessment.date_iso(),
                assessment.result.total
            );
            latest.set(assessment);
        }
        Ok(None) => {}
        Err(e) => {
            let msg = format!("Saved assessment could not be read: {e}");
            warn!("{msg}");
            notifications.send(NotificationEvent::warning(msg));
        }
    }

    match load_goal(store.0.as_ref()) {
        Ok(Some(saved)) => *goal = saved,
        Ok(None) => {}
        Err(e) => {
            let msg = format!("Saved goal could not be read: {e}");
            warn!("{msg}");
            notifications.send(NotificationEvent::warning(msg));
        }
    }
}

fn load_on_startup(
    store: Res<SaveStore>,
    mut latest: ResMut<LatestAssessment>,
    mut goal: ResMut<UserGoal>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    load_records(&store, &mut latest, &mut goal, &mut notifications);
}

fn detect_load_event(
    mut events: EventReader<LoadSavedDataEvent>,
    store: Res<SaveStore>,
    mut latest: ResMut<LatestAssessment>,
    mut goal: ResMut<UserGoal>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    if events.read().last().is_some() {
        load_records(&store, &mut latest, &mut goal, &mut notifications);
    }
}

fn detect_clear_event(
    mut events: EventReader<ClearSavedDataEvent>,
    mut store: ResMut<SaveStore>,
    mut latest: ResMut<LatestAssessment>,
    mut goal: ResMut<UserGoal>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    if events.read().last().is_none() {
        return;
    }

    match clear_records(store.0.as_mut()) {
        Ok(()) => {
            latest.clear();
            *goal = UserGoal::default();
            notifications.send(NotificationEvent::info("Saved data cleared"));
        }
        Err(e) => {
            let msg = format!("Could not clear saved data: {e}");
            warn!("{msg}");
            notifications.send(NotificationEvent::warning(msg));
        }
    }
}

fn persist_assessment(
    mut events: EventReader<AssessmentComputed>,
    mut store: ResMut<SaveStore>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    // Only the newest assessment is kept.
    let Some(AssessmentComputed(assessment)) = events.read().last() else {
        return;
    };

    match save_assessment(store.0.as_mut(), assessment) {
        Ok(()) => info!("Assessment saved ({} kg CO₂/year)", assessment.result.total),
        Err(e) => {
            let msg = format!("Could not save assessment: {e}");
            warn!("{msg}");
            notifications.send(NotificationEvent::warning(msg));
        }
    }
}

fn persist_goal(
    mut events: EventReader<GoalChanged>,
    mut store: ResMut<SaveStore>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    let Some(GoalChanged(goal)) = events.read().last() else {
        return;
    };

    if let Err(e) = save_goal(store.0.as_mut(), goal) {
        let msg = format!("Could not save goal: {e}");
        warn!("{msg}");
        notifications.send(NotificationEvent::warning(msg));
    }
}
