//! Shared building blocks for Red-DiscordBot cogs.
//!
//! Two loosely related features live here:
//!
//! - [`meta`]: a version/update check utility that compares a running cog's
//!   version against the published latest versions (cog, bundled utils, and
//!   the Red framework itself) and formats a status table for display.
//! - [`status`]: the core of a `status` chat command that queries a
//!   statuspage.io summary for a service (Discord, GitHub, Zoom, ...) and
//!   hands the first live incident to an external update-dispatch pipeline.
//!
//! The crate never talks to Discord directly. Message delivery, cooldown
//! bookkeeping, and per-guild restrictions are behind the traits in
//! [`status::traits`] so the host framework supplies them.

pub mod config;
pub mod meta;
pub mod status;
