//! Data carried from a status-page payload to the dispatch pipeline.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// One name/value pair rendered into the dispatched update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateField {
    pub name: String,
    pub value: String,
}

impl UpdateField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One incident or scheduled-maintenance entry from a status page.
///
/// Lives for a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentData {
    pub title: String,
    pub link: String,
    /// Set for scheduled maintenance; `None` for live incidents.
    pub scheduled_for: Option<DateTime<Utc>>,
    pub fields: Vec<UpdateField>,
}

/// The value handed to the update-dispatch pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub incident: IncidentData,
    pub fields: Vec<UpdateField>,
}

impl Update {
    pub fn new(incident: IncidentData) -> Self {
        let fields = incident.fields.clone();
        Self { incident, fields }
    }
}

/// Static description of a supported status page, resolved from the
/// user-supplied short name by the host's converter before the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Short name the user typed, e.g. `discord`.
    pub name: String,
    /// Display name, e.g. `Discord`.
    pub friendly: String,
    /// statuspage.io page id used in API URLs.
    pub id: String,
}

impl ServiceDescriptor {
    pub fn new(
        name: impl Into<String>,
        friendly: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            friendly: friendly.into(),
            id: id.into(),
        }
    }
}

/// How updates are delivered to one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMode {
    /// Every update as a new message.
    All,
    /// Only the latest update.
    Latest,
    /// Edit the previously sent message.
    Edit,
}

/// Per-channel entry in the delivery-mode map given to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSettings {
    pub mode: SendMode,
    pub webhook: bool,
    /// Incident id to previously-sent message id, for edit mode.
    pub edit_id: HashMap<String, u64>,
}

impl Default for ChannelSettings {
    /// The manual on-demand check: plain message, nothing to edit.
    fn default() -> Self {
        Self {
            mode: SendMode::All,
            webhook: false,
            edit_id: HashMap::new(),
        }
    }
}
