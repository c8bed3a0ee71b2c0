//! Version data shared by the source client, reconciler, and formatter.

use std::collections::HashMap;

use semver::Version;

use crate::config::{GREEN_CIRCLE, RED_CIRCLE};

/// Versions for the three independently tracked axes.
///
/// Two instances exist per check: the running ("current") versions and the
/// published ("latest") ones. Rebuilt on every check, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSet {
    /// Lowercased cog name to its release version.
    pub cogs: HashMap<String, Version>,
    /// Short commit hash identifying the bundled shared utilities, or
    /// `"Unknown"` when the sidecar did not record one.
    pub utils_commit: String,
    /// Red framework version.
    pub red: Version,
}

/// Reconciled freshness of one version axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisStatus {
    UpToDate,
    Outdated,
    /// No remote data to compare against.
    Unknown,
}

impl AxisStatus {
    /// Green/red circle, or the literal `Unknown` when there was nothing to
    /// compare.
    pub fn glyph(self) -> &'static str {
        match self {
            AxisStatus::UpToDate => GREEN_CIRCLE,
            AxisStatus::Outdated => RED_CIRCLE,
            AxisStatus::Unknown => "Unknown",
        }
    }

    pub fn is_outdated(self) -> bool {
        self == AxisStatus::Outdated
    }
}

/// Outcome of comparing current versions against the latest published ones.
///
/// There is deliberately no combined "everything up to date" boolean; the
/// axes are independent and callers must look at each one.
#[derive(Debug, Clone)]
pub struct VersionReport {
    /// This cog's own version axis.
    pub cog: AxisStatus,
    /// Bundled shared-utils commit axis (exact string equality).
    pub utils: AxisStatus,
    /// Red framework axis.
    pub red: AxisStatus,
    /// The versions the check ran against.
    pub current: VersionSet,
    /// `None` when the remote fetch failed; the fetch is all-or-nothing.
    pub latest: Option<VersionSet>,
}
