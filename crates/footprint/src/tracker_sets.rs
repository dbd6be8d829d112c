//! Update ordering via `SystemSet` phases.
//!
//! Every command the tracker receives is handled within a single
//! `app.update()`. Plugins place their systems into one of these sets so a
//! command, its persistence and its notifications all land in the same
//! frame.
//!
//! ```text
//! Input  →  Persist  →  Output  →  Notify
//! ```
//!
//! * **Input** – Tracker events: stage submission, navigation, calculation,
//!   goal changes, reset. Produces `AssessmentComputed` and `GoalChanged`.
//! * **Persist** – Durable storage of what Input produced, plus loading and
//!   clearing saved records.
//! * **Output** – Collaborators that read results without changing them
//!   (report export).
//! * **Notify** – Collects every `NotificationEvent` sent earlier in the
//!   frame into `NotificationLog`.

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
///
/// Configured as a chain by `FootprintPlugin`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackerSet {
    Input,
    Persist,
    Output,
    Notify,
}
