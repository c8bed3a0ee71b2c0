//! Core of the `status` chat command.
//!
//! The command checks a statuspage.io summary for one service and sends the
//! first live incident (or already-started scheduled maintenance) through the
//! host's update-dispatch pipeline, summarizing the rest as counts. Cooldown
//! tracking, per-guild channel restrictions, the HTTP client, and dispatch
//! itself are host collaborators behind the traits in [`traits`].

pub mod command;
pub mod parse;
pub mod traits;
pub mod types;

pub use command::{StatusCommand, StatusContext};
pub use parse::{SummaryKind, process_summary};
pub use types::{ChannelSettings, IncidentData, SendMode, ServiceDescriptor, Update, UpdateField};
