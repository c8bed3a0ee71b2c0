//! Fire-and-forget staleness warning, run once per cog at load.

use semver::Version;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::meta::source::VersionSource;
use crate::meta::types::VersionSet;

/// Logs a warning if the named cog is out of date, a debug line otherwise.
///
/// `lock` is the process-wide fetch lock, created once by the host and passed
/// in by every cog. It serializes the remote fetch so a dozen cogs loading at
/// startup don't hit the API at once; each caller still performs its own
/// fetch after acquiring it.
///
/// Pure telemetry: every failure is swallowed at debug level and the caller's
/// control flow is never affected.
pub async fn out_of_date_check(
    lock: &Mutex<()>,
    source: &VersionSource,
    cog_name: &str,
    current_version: &str,
) {
    let latest = {
        let _guard = lock.lock().await;
        source.fetch_latest().await
    };
    let latest = match latest {
        Ok(latest) => latest,
        Err(e) => {
            debug!("Something went wrong checking if {cog_name} cog is up to date: {e}");
            return;
        }
    };

    match is_stale(&latest, cog_name, current_version) {
        Some(true) => warn!(
            "Your {cog_name} cog, from Vexed, is out of date. You can update your cogs with the \
             'cog update' command in Discord."
        ),
        Some(false) => debug!("{cog_name} cog is up to date"),
        None => debug!(
            "Something went wrong checking if {cog_name} cog is up to date: \
             no comparable version data"
        ),
    }
}

/// `None` when the current version doesn't parse or the cog isn't published.
fn is_stale(latest: &VersionSet, cog_name: &str, current_version: &str) -> Option<bool> {
    let current = Version::parse(current_version).ok()?;
    let published = latest.cogs.get(&cog_name.to_lowercase())?;
    Some(current < *published)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn latest_with(version: &str) -> VersionSet {
        VersionSet {
            cogs: HashMap::from([("somecog".to_string(), Version::parse(version).unwrap())]),
            utils_commit: "abcdef1".to_string(),
            red: Version::new(3, 5, 14),
        }
    }

    #[test]
    fn stale_when_published_version_is_newer() {
        assert_eq!(is_stale(&latest_with("1.1.0"), "SomeCog", "1.0.0"), Some(true));
    }

    #[test]
    fn fresh_when_current_matches_or_exceeds_published() {
        assert_eq!(is_stale(&latest_with("1.1.0"), "somecog", "1.1.0"), Some(false));
        assert_eq!(is_stale(&latest_with("1.1.0"), "somecog", "1.2.0"), Some(false));
    }

    #[test]
    fn unpublished_cog_or_bad_version_is_not_comparable() {
        assert_eq!(is_stale(&latest_with("1.1.0"), "othercog", "1.0.0"), None);
        assert_eq!(is_stale(&latest_with("1.1.0"), "somecog", "garbage"), None);
    }

    #[tokio::test]
    async fn fetch_failure_never_escapes() {
        let lock = Mutex::new(());
        let source = VersionSource::new(
            "http://invalid.localhost.test:1/v1/vers/".to_string(),
            "http://invalid.localhost.test:1/pypi/Red-DiscordBot/json".to_string(),
        );

        // must return normally, whatever happened underneath
        out_of_date_check(&lock, &source, "somecog", "1.0.0").await;
    }

    #[tokio::test]
    async fn lock_is_released_for_the_next_caller() {
        let lock = Mutex::new(());
        let source = VersionSource::new(
            "http://invalid.localhost.test:1/v1/vers/".to_string(),
            "http://invalid.localhost.test:1/pypi/Red-DiscordBot/json".to_string(),
        );

        out_of_date_check(&lock, &source, "somecog", "1.0.0").await;
        out_of_date_check(&lock, &source, "othercog", "1.0.0").await;

        assert!(lock.try_lock().is_ok());
    }
}
