use bevy::prelude::*;

pub mod agent_protocol;
pub mod assessment;
pub mod category;
pub mod choice;
pub mod config;
pub mod emission_factors;
pub mod estimator;
pub mod export_format;
pub mod goal;
pub mod notifications;
pub mod offset;
pub mod quantity;
pub mod result;
pub mod snapshot;
pub mod tips;
pub mod tracker_plugin;
pub mod tracker_sets;
pub mod wizard;

pub use assessment::Assessment;
pub use category::Category;
pub use estimator::{checked_estimate, estimate};
pub use result::EmissionsResult;
pub use snapshot::LifestyleSnapshot;
pub use tracker_sets::TrackerSet;

/// Tracker state, events and notifications. Persistence and export are
/// separate plugins in the `save` and `report` crates.
pub struct FootprintPlugin;

impl Plugin for FootprintPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TrackerSet::Input,
                TrackerSet::Persist,
                TrackerSet::Output,
                TrackerSet::Notify,
            )
                .chain(),
        );

        app.init_resource::<notifications::NotificationLog>()
            .add_event::<notifications::NotificationEvent>()
            .add_systems(
                Update,
                notifications::collect_notifications.in_set(TrackerSet::Notify),
            );

        app.add_plugins(tracker_plugin::TrackerPlugin);
    }
}
