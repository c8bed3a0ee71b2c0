//! Plain-text version report shown inside a Discord code block.
//!
//! Layout: a header naming the cog, a three-row comparison table (this cog /
//! bundled utils / Red), remediation lines for whatever is outdated, and an
//! optional second table with loop health and caller-supplied extras.

use std::path::Path;

use indexmap::IndexMap;
use semver::Version;

use crate::config::{COGS_REPO_URL, GREEN_CIRCLE, RED_CIRCLE, RED_UPDATE_DOCS_URL};
use crate::meta::reconcile::reconcile;
use crate::meta::source::{VersionSource, current_versions};
use crate::meta::types::VersionReport;
use crate::meta::FetchError;

/// A caller-supplied extra row in the info table.
///
/// Flags render as the green/red circles, text passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraValue {
    Text(String),
    Flag(bool),
}

impl From<bool> for ExtraValue {
    fn from(value: bool) -> Self {
        ExtraValue::Flag(value)
    }
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        ExtraValue::Text(value.to_string())
    }
}

impl From<String> for ExtraValue {
    fn from(value: String) -> Self {
        ExtraValue::Text(value)
    }
}

impl ExtraValue {
    fn rendered(&self) -> String {
        match self {
            ExtraValue::Text(text) => text.clone(),
            ExtraValue::Flag(true) => GREEN_CIRCLE.to_string(),
            ExtraValue::Flag(false) => RED_CIRCLE.to_string(),
        }
    }
}

/// Health of one periodic task, shown as a name + glyph row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskHealth {
    pub name: String,
    pub healthy: bool,
}

impl TaskHealth {
    pub fn new(name: impl Into<String>, healthy: bool) -> Self {
        Self {
            name: name.into(),
            healthy,
        }
    }
}

/// Fetches, reconciles, and renders the full info text for one cog.
///
/// A failed remote fetch degrades to `Unknown` indicators; a missing or
/// malformed sidecar propagates, since that is a packaging defect rather
/// than a runtime condition.
#[allow(clippy::too_many_arguments)]
pub async fn format_info(
    source: &VersionSource,
    sidecar: &Path,
    prefix: &str,
    qualified_name: &str,
    cog_version: &str,
    red_version: Version,
    extras: &IndexMap<String, ExtraValue>,
    loops: &[TaskHealth],
) -> Result<String, FetchError> {
    let current = current_versions(sidecar, qualified_name, cog_version, red_version)?;
    let latest = source.fetch_latest().await;
    let report = reconcile(qualified_name, current, latest);
    Ok(render_report(prefix, qualified_name, &report, extras, loops))
}

/// Renders an already-reconciled report. Pure; exists so the layout is
/// testable without any I/O.
pub fn render_report(
    prefix: &str,
    qualified_name: &str,
    report: &VersionReport,
    extras: &IndexMap<String, ExtraValue>,
    loops: &[TaskHealth],
) -> String {
    let name = qualified_name.to_lowercase();
    let current_cog = report
        .current
        .cogs
        .get(&name)
        .map_or_else(|| "Unknown".to_string(), Version::to_string);
    let (latest_cog, latest_utils, latest_red) = match &report.latest {
        Some(latest) => (
            latest
                .cogs
                .get(&name)
                .map_or_else(|| "Unknown".to_string(), Version::to_string),
            latest.utils_commit.clone(),
            latest.red.to_string(),
        ),
        None => (
            "Unknown".to_string(),
            "Unknown".to_string(),
            "Unknown".to_string(),
        ),
    };

    let versions = [
        vec![
            "This Cog".to_string(),
            current_cog,
            latest_cog,
            report.cog.glyph().to_string(),
        ],
        vec![
            "Bundled Utils".to_string(),
            report.current.utils_commit.clone(),
            latest_utils,
            report.utils.glyph().to_string(),
        ],
        vec![
            "Red".to_string(),
            report.current.red.to_string(),
            latest_red,
            report.red.glyph().to_string(),
        ],
    ];

    let start = format!("{qualified_name} by Vexed.\n<{COGS_REPO_URL}>\n\n");
    let mut boxed = box_text(&render_table(
        &["", "Your Version", "Latest version", "Up to date?"],
        &versions,
    ));

    let mut update_msg = "\n".to_string();
    if report.cog.is_outdated() {
        update_msg.push_str(&format!(
            "To update this cog, use the `{prefix}cog update` command.\n"
        ));
    }
    if report.utils.is_outdated() {
        update_msg.push_str(&format!(
            "To update the bundled utils, use the `{prefix}cog update` command.\n"
        ));
    }
    if report.red.is_outdated() {
        update_msg.push_str(&format!("To update Red, see {RED_UPDATE_DOCS_URL}\n"));
    }
    boxed.push_str(&update_msg);

    let mut data: Vec<Vec<String>> = Vec::new();
    for task in loops {
        let glyph = if task.healthy {
            GREEN_CIRCLE
        } else {
            RED_CIRCLE
        };
        data.push(vec![task.name.clone(), glyph.to_string()]);
    }
    if !extras.is_empty() {
        if !data.is_empty() {
            data.push(Vec::new());
        }
        for (key, value) in extras {
            data.push(vec![key.clone(), value.rendered()]);
        }
    }
    if !data.is_empty() {
        boxed.push_str(&box_text(&render_plain(&data)));
    }

    format!("{start}{boxed}")
}

fn box_text(text: &str) -> String {
    format!("```\n{text}\n```")
}

/// Column-aligned table with a header and a dashed underline, in the style
/// of tabulate's "simple" format.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    lines.push(format_row(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for row in rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

/// Column-aligned rows with no header; an empty row renders as a blank line.
fn render_plain(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| format_row(row, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}
