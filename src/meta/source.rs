//! Clients for the two remote version sources and the local sidecar.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use tracing::debug;

use crate::config::{
    COMMIT_PREFIX_LEN, HOST_PACKAGE_TIMEOUT_MS, HOST_PACKAGE_URL, VERSION_API_TIMEOUT_MS,
    VERSION_API_URL,
};
use crate::meta::error::FetchError;
use crate::meta::types::VersionSet;

/// Client for the latest-versions API and the PyPI lookup.
///
/// Both URLs are injectable so tests can point at a local server; `Default`
/// uses the production endpoints.
pub struct VersionSource {
    client: Client,
    vers_url: String,
    host_url: String,
}

impl Default for VersionSource {
    fn default() -> Self {
        Self::new(VERSION_API_URL.to_string(), HOST_PACKAGE_URL.to_string())
    }
}

/// PyPI JSON API response; only `info.version` matters.
#[derive(Debug, Deserialize, Default)]
struct PypiResponse {
    #[serde(default)]
    info: PypiInfo,
}

#[derive(Debug, Deserialize, Default)]
struct PypiInfo {
    version: Option<String>,
}

/// Bundled `commit.json` sidecar.
#[derive(Debug, Deserialize)]
struct Sidecar {
    latest_commit: Option<String>,
}

impl VersionSource {
    pub fn new(vers_url: String, host_url: String) -> Self {
        Self {
            client: Client::new(),
            vers_url,
            host_url,
        }
    }

    /// Fetches the latest published versions for every axis.
    ///
    /// The first-party API is one flat JSON object: a `utils` key holding a
    /// commit hash (first 7 characters significant) plus one
    /// `cogName: versionString` pair per cog. The PyPI response contributes
    /// `info.version`, defaulting to `0.0.0` when the field is absent.
    ///
    /// All-or-nothing: any network, timeout, or parse failure on either call
    /// fails the whole fetch. No retries.
    pub async fn fetch_latest(&self) -> Result<VersionSet, FetchError> {
        debug!("Fetching latest versions: {}", self.vers_url);
        let response = self
            .client
            .get(&self.vers_url)
            .timeout(Duration::from_millis(VERSION_API_TIMEOUT_MS))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::InvalidResponse(format!(
                "version API returned status {}",
                response.status()
            )));
        }
        let mut data: HashMap<String, String> = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        let utils_commit: String = data
            .remove("utils")
            .ok_or_else(|| FetchError::InvalidResponse("missing utils key".to_string()))?
            .chars()
            .take(COMMIT_PREFIX_LEN)
            .collect();

        let mut cogs = HashMap::with_capacity(data.len());
        for (name, raw) in data {
            let version = parse_version(&raw)?;
            cogs.insert(name.to_lowercase(), version);
        }

        debug!("Fetching latest host version: {}", self.host_url);
        let response = self
            .client
            .get(&self.host_url)
            .timeout(Duration::from_millis(HOST_PACKAGE_TIMEOUT_MS))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::InvalidResponse(format!(
                "PyPI returned status {}",
                response.status()
            )));
        }
        let pypi: PypiResponse = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
        let red = parse_version(&pypi.info.version.unwrap_or_else(|| "0.0.0".to_string()))?;

        Ok(VersionSet {
            cogs,
            utils_commit,
            red,
        })
    }
}

/// Builds the "current" version set from the bundled sidecar and the
/// caller-supplied versions.
///
/// The sidecar ships with every cog; a missing or malformed file is a
/// packaging defect, so the error propagates rather than degrading to
/// `Unknown`. A sidecar without a `latest_commit` key records `"Unknown"`.
pub fn current_versions(
    sidecar: &Path,
    cog_name: &str,
    cog_version: &str,
    red_version: Version,
) -> Result<VersionSet, FetchError> {
    let raw = fs::read_to_string(sidecar)?;
    let sidecar: Sidecar = serde_json::from_str(&raw)?;
    let utils_commit: String = sidecar
        .latest_commit
        .unwrap_or_else(|| "Unknown".to_string())
        .chars()
        .take(COMMIT_PREFIX_LEN)
        .collect();

    let mut cogs = HashMap::new();
    cogs.insert(cog_name.to_lowercase(), parse_version(cog_version)?);

    Ok(VersionSet {
        cogs,
        utils_commit,
        red: red_version,
    })
}

fn parse_version(raw: &str) -> Result<Version, FetchError> {
    Version::parse(raw).map_err(|source| FetchError::InvalidVersion {
        raw: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn source_for(server: &Server) -> VersionSource {
        VersionSource::new(
            format!("{}/v1/vers/", server.url()),
            format!("{}/pypi/Red-DiscordBot/json", server.url()),
        )
    }

    #[tokio::test]
    async fn fetch_latest_parses_both_endpoints() {
        let mut server = Server::new_async().await;
        let vers_mock = server
            .mock("GET", "/v1/vers/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "utils": "abcdef1234567890",
                    "anticommandlog": "1.0.1",
                    "betteruptime": "2.3.0"
                }"#,
            )
            .create_async()
            .await;
        let pypi_mock = server
            .mock("GET", "/pypi/Red-DiscordBot/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"info": {"version": "3.5.14"}}"#)
            .create_async()
            .await;

        let latest = source_for(&server).fetch_latest().await.unwrap();

        vers_mock.assert_async().await;
        pypi_mock.assert_async().await;

        assert_eq!(latest.utils_commit, "abcdef1");
        assert_eq!(
            latest.cogs.get("betteruptime"),
            Some(&Version::new(2, 3, 0))
        );
        assert_eq!(latest.cogs.len(), 2);
        assert_eq!(latest.red, Version::new(3, 5, 14));
    }

    #[tokio::test]
    async fn fetch_latest_defaults_host_version_when_absent() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/vers/")
            .with_status(200)
            .with_body(r#"{"utils": "abcdef1", "somecog": "1.0.0"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/pypi/Red-DiscordBot/json")
            .with_status(200)
            .with_body(r#"{"info": {}}"#)
            .create_async()
            .await;

        let latest = source_for(&server).fetch_latest().await.unwrap();

        assert_eq!(latest.red, Version::new(0, 0, 0));
    }

    #[tokio::test]
    async fn fetch_latest_rejects_missing_utils_key() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/vers/")
            .with_status(200)
            .with_body(r#"{"somecog": "1.0.0"}"#)
            .create_async()
            .await;

        let result = source_for(&server).fetch_latest().await;

        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_latest_rejects_http_error_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/vers/")
            .with_status(503)
            .create_async()
            .await;

        let result = source_for(&server).fetch_latest().await;

        assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_latest_rejects_unparseable_cog_version() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v1/vers/")
            .with_status(200)
            .with_body(r#"{"utils": "abcdef1", "somecog": "not-a-version"}"#)
            .create_async()
            .await;

        let result = source_for(&server).fetch_latest().await;

        assert!(matches!(result, Err(FetchError::InvalidVersion { .. })));
    }

    #[test]
    fn current_versions_reads_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commit.json");
        fs::write(&path, r#"{"latest_commit": "1234567890abcdef"}"#).unwrap();

        let current =
            current_versions(&path, "BetterUptime", "2.3.0", Version::new(3, 5, 14)).unwrap();

        assert_eq!(current.utils_commit, "1234567");
        assert_eq!(
            current.cogs.get("betteruptime"),
            Some(&Version::new(2, 3, 0))
        );
        assert_eq!(current.red, Version::new(3, 5, 14));
    }

    #[test]
    fn current_versions_defaults_commit_when_key_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commit.json");
        fs::write(&path, r#"{}"#).unwrap();

        let current = current_versions(&path, "somecog", "1.0.0", Version::new(3, 5, 0)).unwrap();

        assert_eq!(current.utils_commit, "Unknown");
    }

    #[test]
    fn current_versions_propagates_missing_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result = current_versions(&path, "somecog", "1.0.0", Version::new(3, 5, 0));

        assert!(matches!(result, Err(FetchError::SidecarIo(_))));
    }

    #[test]
    fn current_versions_propagates_malformed_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("commit.json");
        fs::write(&path, "not json").unwrap();

        let result = current_versions(&path, "somecog", "1.0.0", Version::new(3, 5, 0));

        assert!(matches!(result, Err(FetchError::SidecarFormat(_))));
    }
}
