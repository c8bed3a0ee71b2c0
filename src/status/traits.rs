//! Contracts for the host-framework collaborators the command depends on.
//!
//! The host owns cooldown buckets, per-guild restriction settings, the
//! status-page HTTP client, message delivery, and the update-dispatch
//! pipeline; this crate only consumes them.

use std::collections::HashMap;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::status::types::{ChannelSettings, Update};

/// Per-user-and-service command cooldown tracker.
#[cfg_attr(test, automock)]
pub trait ServiceCooldown: Send + Sync {
    /// Seconds remaining before this user may check this service again, or
    /// `None` if they may proceed now (which starts a new cooldown window).
    fn handle(&self, user_id: u64, service_name: &str) -> Option<u64>;
}

/// Per-guild channel restrictions for status updates.
#[cfg_attr(test, automock)]
pub trait RestrictionsCache: Send + Sync {
    /// Channels this guild limits the service's updates to, if configured.
    fn get_guild(&self, guild_id: u64, service_name: &str) -> Option<Vec<u64>>;
}

/// Client for the statuspage.io API.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StatusApi: Send + Sync {
    /// Current status summary for a service page.
    ///
    /// Returns the JSON payload, the cache-validation etag, and the HTTP
    /// status code. Transport errors propagate.
    async fn summary(&self, service_id: &str)
    -> anyhow::Result<(serde_json::Value, String, u16)>;
}

/// The update-dispatch pipeline that formats and delivers an update.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UpdateDispatcher: Send + Sync {
    /// Delivers one update to the given channels.
    ///
    /// `dispatch` controls whether the periodic-broadcast event fires;
    /// `force` bypasses per-channel delivery-mode filtering. Returns once
    /// delivery to the target channels completes.
    async fn send(
        &self,
        update: &Update,
        service_name: &str,
        targets: &HashMap<u64, ChannelSettings>,
        dispatch: bool,
        force: bool,
    ) -> anyhow::Result<()>;
}

/// Plain-text replies to the invoking channel.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Responder: Send + Sync {
    /// Sends `message`, optionally deleting it after `delete_after`.
    async fn send(&self, message: &str, delete_after: Option<Duration>) -> anyhow::Result<()>;
}
