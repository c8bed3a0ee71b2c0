//! Per-axis up-to-date reconciliation.

use tracing::warn;

use crate::meta::error::FetchError;
use crate::meta::types::{AxisStatus, VersionReport, VersionSet};

/// Compares current versions against the result of a latest-versions fetch.
///
/// Infallible by contract: a failed fetch is logged and every axis becomes
/// [`AxisStatus::Unknown`], so callers always get a renderable report. The
/// axes stay independent; a cog missing from either set only affects the cog
/// axis.
pub fn reconcile(
    cog_name: &str,
    current: VersionSet,
    latest: Result<VersionSet, FetchError>,
) -> VersionReport {
    let latest = match latest {
        Ok(latest) => latest,
        Err(e) => {
            warn!("Unable to fetch latest versions: {e}");
            return VersionReport {
                cog: AxisStatus::Unknown,
                utils: AxisStatus::Unknown,
                red: AxisStatus::Unknown,
                current,
                latest: None,
            };
        }
    };

    let name = cog_name.to_lowercase();
    let cog = match (current.cogs.get(&name), latest.cogs.get(&name)) {
        (Some(cur), Some(new)) => up_to_date(cur >= new),
        _ => AxisStatus::Unknown,
    };
    // Exact equality of the short hash, not an ordering: a different commit
    // in either direction means the bundled utils need a refresh.
    let utils = up_to_date(current.utils_commit == latest.utils_commit);
    let red = up_to_date(current.red >= latest.red);

    VersionReport {
        cog,
        utils,
        red,
        current,
        latest: Some(latest),
    }
}

fn up_to_date(fresh: bool) -> AxisStatus {
    if fresh {
        AxisStatus::UpToDate
    } else {
        AxisStatus::Outdated
    }
}
