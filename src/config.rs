//! Fixed endpoints, timeouts, and display glyphs.

// =============================================================================
// Remote endpoints
// =============================================================================

/// First-party "latest versions" API. Returns a JSON object with a `utils`
/// commit hash plus one `cogName: version` pair per published cog.
pub const VERSION_API_URL: &str = "https://api.vexcodes.com/v1/vers/";

/// PyPI metadata for the host framework; `info.version` is the latest release.
pub const HOST_PACKAGE_URL: &str = "https://pypi.org/pypi/Red-DiscordBot/json";

/// Timeout for the first-party version API (5 seconds).
pub const VERSION_API_TIMEOUT_MS: u64 = 5_000;

/// Timeout for the PyPI lookup (3 seconds).
pub const HOST_PACKAGE_TIMEOUT_MS: u64 = 3_000;

// =============================================================================
// Local data
// =============================================================================

/// Sidecar file bundled with each cog, recording the shared-utils commit it
/// shipped with: `{"latest_commit": "<hash>"}`.
pub const SIDECAR_FILE: &str = "commit.json";

/// Significant length of the shared-utils commit identifier.
pub const COMMIT_PREFIX_LEN: usize = 7;

// =============================================================================
// Display text
// =============================================================================

/// Repository link shown in the version report header.
pub const COGS_REPO_URL: &str = "https://github.com/Vexed01/Vex-Cogs";

/// Where to send users who need to update Red itself.
pub const RED_UPDATE_DOCS_URL: &str = "https://docs.discord.red/en/stable/update_red.html";

/// Large green circle, shown for an up-to-date axis or a healthy loop.
pub const GREEN_CIRCLE: &str = "\u{1F7E2}";

/// Large red circle, shown for an outdated axis or a broken loop.
pub const RED_CIRCLE: &str = "\u{1F534}";

/// White heavy check mark, used for the "no live incidents" reply.
pub const CHECK_MARK: &str = "\u{2705}";
