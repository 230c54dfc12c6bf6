//! Fire-and-forget notifier.

use log::{debug, error};

use crate::embed::{self, Embed, WebhookPayload};
use crate::error::NotifyError;
use crate::notice::{BanNotice, UnbanNotice};
use crate::settings::WebhookSettings;
use crate::sink::NotificationSink;

/// Builds embeds from settings and hands them to a sink. Never fails
/// outward: every method returns whether a payload was delivered.
pub struct Notifier<S: NotificationSink> {
    settings: WebhookSettings,
    sink: S,
}

impl<S: NotificationSink> Notifier<S> {
    pub fn new(settings: WebhookSettings, sink: S) -> Self {
        Self { settings, sink }
    }

    pub fn notify_ban(&mut self, notice: &BanNotice, timestamp: &str) -> bool {
        let embed = embed::ban_embed(notice, &self.settings, timestamp);
        self.send("ban", embed)
    }

    pub fn notify_unban(&mut self, notice: &UnbanNotice, timestamp: &str) -> bool {
        let embed = embed::unban_embed(notice, &self.settings, timestamp);
        self.send("unban", embed)
    }

    fn send(&mut self, what: &str, embed: Result<Embed, NotifyError>) -> bool {
        let Some(url) = self.settings.active_url() else {
            debug!("{what} webhook skipped: no url configured");
            return false;
        };

        let result = embed
            .and_then(|embed| self.sink.deliver(url, &WebhookPayload::single(embed)));
        match result {
            Ok(()) => true,
            Err(e) => {
                error!("failed to send {what} webhook: {e}");
                false
            }
        }
    }

    pub fn settings(&self) -> &WebhookSettings {
        &self.settings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
