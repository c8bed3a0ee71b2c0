//! Parsing of statuspage.io summary payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::status::types::{IncidentData, UpdateField};

/// Which half of the summary to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// Live incidents.
    Incidents,
    /// Scheduled maintenance, including future-dated entries.
    Scheduled,
}

/// statuspage.io `/summary.json` shape; only the two entry arrays matter.
#[derive(Debug, Deserialize, Default)]
struct SummaryPayload {
    #[serde(default)]
    incidents: Vec<RawEntry>,
    #[serde(default)]
    scheduled_maintenances: Vec<RawEntry>,
}

#[derive(Debug, Deserialize, Default)]
struct RawEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    shortlink: String,
    #[serde(default)]
    scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    incident_updates: Vec<RawUpdate>,
}

#[derive(Debug, Deserialize, Default)]
struct RawUpdate {
    #[serde(default)]
    status: String,
    #[serde(default)]
    body: String,
}

/// Extracts incident entries from a summary payload, preserving payload
/// order (statuspage returns newest first). A payload without the requested
/// array, or one that doesn't conform, yields an empty list.
pub fn process_summary(payload: &serde_json::Value, kind: SummaryKind) -> Vec<IncidentData> {
    let summary = SummaryPayload::deserialize(payload).unwrap_or_default();
    let entries = match kind {
        SummaryKind::Incidents => summary.incidents,
        SummaryKind::Scheduled => summary.scheduled_maintenances,
    };

    entries
        .into_iter()
        .map(|entry| IncidentData {
            title: entry.name,
            link: entry.shortlink,
            scheduled_for: entry.scheduled_for,
            fields: entry
                .incident_updates
                .into_iter()
                .map(|update| UpdateField::new(capitalize(&update.status), update.body))
                .collect(),
        })
        .collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
