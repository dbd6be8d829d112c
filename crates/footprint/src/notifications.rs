//! User-facing notifications.
//!
//! Collaborator failures (a blocked export, a corrupt saved record, an
//! incomplete tracker) are reported here instead of aborting the command
//! that hit them. Systems emit `NotificationEvent`s which are collected into
//! `NotificationLog`; the agent loop drains the active list into each
//! response.

use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;

// =============================================================================
// Priority Levels
// =============================================================================

/// Notification priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    /// Something the user asked for did not happen.
    Warning,
    /// General information (record saved, report written).
    Info,
    /// Good news (emissions below target).
    Positive,
}

// =============================================================================
// Notification Struct
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    pub priority: NotificationPriority,
    pub created_at: DateTime<Utc>,
}

/// An archived notification stored in the journal.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub text: String,
    pub priority: NotificationPriority,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Bevy Event
// =============================================================================

/// Event emitted by other systems to create a notification.
///
/// # Example
/// ```ignore
/// fn my_system(mut events: EventWriter<NotificationEvent>) {
///     events.send(NotificationEvent::warning("Unable to export report."));
/// }
/// ```
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub text: String,
    pub priority: NotificationPriority,
}

impl NotificationEvent {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Warning,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Info,
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: NotificationPriority::Positive,
        }
    }
}

// =============================================================================
// NotificationLog Resource
// =============================================================================

/// Undelivered notifications and the archived journal.
#[derive(Resource)]
pub struct NotificationLog {
    /// Notifications not yet delivered to the user.
    pub active: Vec<Notification>,
    pub journal: Vec<JournalEntry>,
    /// Maximum journal size before old entries are trimmed.
    pub max_journal: usize,
    next_id: u64,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            journal: Vec::new(),
            max_journal: 200,
            next_id: 1,
        }
    }
}

impl NotificationLog {
    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push(&mut self, event: &NotificationEvent, now: DateTime<Utc>) {
        let id = self.next_id();
        self.active.push(Notification {
            id,
            text: event.text.clone(),
            priority: event.priority,
            created_at: now,
        });

        self.journal.push(JournalEntry {
            text: event.text.clone(),
            priority: event.priority,
            created_at: now,
        });

        if self.journal.len() > self.max_journal {
            let excess = self.journal.len() - self.max_journal;
            self.journal.drain(0..excess);
        }
    }

    /// Take every undelivered notification. The journal keeps its copy.
    pub fn drain_active(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.active)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|n| n.id != id);
    }

    pub fn has_warnings(&self) -> bool {
        self.active
            .iter()
            .any(|n| n.priority == NotificationPriority::Warning)
    }
}

// =============================================================================
// Systems
// =============================================================================

pub(crate) fn collect_notifications(
    mut events: EventReader<NotificationEvent>,
    mut log: ResMut<NotificationLog>,
) {
    for event in events.read() {
        match event.priority {
            NotificationPriority::Warning => warn!("{}", event.text),
            _ => info!("{}", event.text),
        }
        log.push(event, Utc::now());
    }
}

// =============================================================================
// Tests
// =============================================================================
