//! The `status` command flow: cooldown gate, restriction gate, fetch,
//! incident selection, dispatch.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;

use crate::config::CHECK_MARK;
use crate::status::parse::{SummaryKind, process_summary};
use crate::status::traits::{
    Responder, RestrictionsCache, ServiceCooldown, StatusApi, UpdateDispatcher,
};
use crate::status::types::{ChannelSettings, IncidentData, ServiceDescriptor, Update};

/// Delay between the dispatched update and the secondary summary message.
const SUMMARY_DELAY: Duration = Duration::from_millis(200);

/// Where the command was invoked.
#[derive(Debug, Clone, Copy)]
pub struct StatusContext {
    pub user_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
}

/// One-shot orchestrator for the `status` command.
///
/// Borrows the host collaborators; holds no state of its own, so every
/// invocation is independent.
pub struct StatusCommand<'a> {
    cooldown: &'a dyn ServiceCooldown,
    restrictions: &'a dyn RestrictionsCache,
    api: &'a dyn StatusApi,
    dispatcher: &'a dyn UpdateDispatcher,
}

impl<'a> StatusCommand<'a> {
    pub fn new(
        cooldown: &'a dyn ServiceCooldown,
        restrictions: &'a dyn RestrictionsCache,
        api: &'a dyn StatusApi,
        dispatcher: &'a dyn UpdateDispatcher,
    ) -> Self {
        Self {
            cooldown,
            restrictions,
            api,
            dispatcher,
        }
    }

    /// Checks for live incidents on `service` and reports them.
    ///
    /// Linear flow with early exits: cooldown, channel restrictions, fetch,
    /// selection, dispatch. A non-200 from the status page becomes an
    /// apology reply; transport errors propagate to the host's command-error
    /// handler.
    pub async fn invoke(
        &self,
        ctx: &StatusContext,
        responder: &dyn Responder,
        service: &ServiceDescriptor,
    ) -> anyhow::Result<()> {
        if let Some(remaining) = self.cooldown.handle(ctx.user_id, &service.name) {
            let message = format!(
                "Status updates for {} are on cooldown. Try again in {}.",
                service.friendly,
                humanize_seconds(remaining)
            );
            responder
                .send(&message, Some(Duration::from_secs(remaining)))
                .await?;
            return Ok(());
        }

        if let Some(channels) = self.restrictions.get_guild(ctx.guild_id, &service.name) {
            if !channels.is_empty() && !channels.contains(&ctx.channel_id) {
                let mentions: Vec<String> =
                    channels.iter().map(|id| format!("<#{id}>")).collect();
                let message = format!(
                    "You can check updates for {} in {}.",
                    service.friendly,
                    humanize_list(&mentions, "or")
                );
                responder.send(&message, None).await?;
                return Ok(());
            }
        }

        let (payload, _etag, status) = self.api.summary(&service.id).await?;
        if status != 200 {
            let message = format!(
                "Hmm, I can't get {}'s status at the moment.",
                service.friendly
            );
            responder.send(&message, None).await?;
            return Ok(());
        }

        let incidents = process_summary(&payload, SummaryKind::Incidents);
        let now = Utc::now();
        // only maintenance that has actually begun; purely future entries
        // are not live yet
        let scheduled: Vec<IncidentData> = process_summary(&payload, SummaryKind::Scheduled)
            .into_iter()
            .filter(|entry| entry.scheduled_for.is_some_and(|when| when < now))
            .collect();

        let (to_send, other_incidents, other_scheduled) =
            if let Some((first, rest)) = incidents.split_first() {
                (first.clone(), rest.to_vec(), Vec::new())
            } else if let Some((first, rest)) = scheduled.split_first() {
                (first.clone(), Vec::new(), rest.to_vec())
            } else {
                let message = format!("{CHECK_MARK} There are currently no live incidents.");
                responder.send(&message, None).await?;
                return Ok(());
            };

        // manual check: deliver to this channel only, skip the periodic
        // broadcast path
        let targets = HashMap::from([(ctx.channel_id, ChannelSettings::default())]);
        let update = Update::new(to_send);
        self.dispatcher
            .send(&update, &service.name, &targets, false, true)
            .await?;
        tokio::time::sleep(SUMMARY_DELAY).await;

        let mut message = String::new();
        if !other_incidents.is_empty() {
            message.push_str(&format!(
                "{} other incidents are live at the moment:\n",
                other_incidents.len()
            ));
            for incident in &other_incidents {
                message.push_str(&format!("{} (<{}>)\n", incident.title, incident.link));
            }
        }
        if !other_scheduled.is_empty() {
            message.push_str(&format!(
                "\n{} other scheduled maintenance events are live at the moment:\n",
                other_scheduled.len()
            ));
            for incident in &other_scheduled {
                message.push_str(&format!("{} (<{}>)", incident.title, incident.link));
            }
        }
        if !message.is_empty() {
            responder.send(&message, None).await?;
        }

        Ok(())
    }
}

/// "45 seconds", "2 minutes, 5 seconds", "1 hour, 1 second".
fn humanize_seconds(seconds: u64) -> String {
    const UNITS: [(&str, u64); 3] = [("hour", 3_600), ("minute", 60), ("second", 1)];

    let mut parts = Vec::new();
    let mut rest = seconds;
    for (unit, size) in UNITS {
        let count = rest / size;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{count} {unit}{plural}"));
            rest %= size;
        }
    }
    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(", ")
    }
}

/// "a", "a or b", "a, b, or c".
fn humanize_list(items: &[String], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {conjunction} {second}"),
        [head @ .., last] => format!("{}, {conjunction} {last}", head.join(", ")),
    }
}
