use thiserror::Error;

/// Failure while fetching or parsing remote version data.
///
/// Callers treat every variant the same way: the whole fetch is discarded
/// and the report falls back to the `Unknown` sentinel. The variants exist
/// so logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    InvalidResponse(String),

    #[error("invalid version string {raw:?}: {source}")]
    InvalidVersion {
        raw: String,
        #[source]
        source: semver::Error,
    },

    #[error("commit sidecar unreadable: {0}")]
    SidecarIo(#[from] std::io::Error),

    #[error("commit sidecar malformed: {0}")]
    SidecarFormat(#[from] serde_json::Error),
}
