//! Version/update checking for cogs.
//!
//! Every cog tracks three independent version axes: its own release version,
//! the commit of the shared utilities bundled with it, and the Red framework
//! version it runs on. This module fetches the latest published values for
//! all three, reconciles them against the running versions, and renders the
//! result as a plain-text table.
//!
//! - [`source`]: HTTP client for the two remote version sources plus the
//!   local `commit.json` sidecar
//! - [`reconcile`]: per-axis up-to-date comparison, never fails
//! - [`report`]: the formatted status table shown to users
//! - [`freshness`]: startup staleness warning, pure telemetry
//! - [`types`]: [`VersionSet`](types::VersionSet) and friends
//! - [`error`]: the fetch-layer error type

pub mod error;
pub mod freshness;
pub mod reconcile;
pub mod report;
pub mod source;
pub mod types;

pub use error::FetchError;
pub use freshness::out_of_date_check;
pub use reconcile::reconcile;
pub use report::{ExtraValue, TaskHealth, format_info};
pub use source::{VersionSource, current_versions};
pub use types::{AxisStatus, VersionReport, VersionSet};
