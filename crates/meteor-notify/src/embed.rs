//! Webhook embed payloads.

use serde::{Deserialize, Serialize};

use crate::error::NotifyError;
use crate::notice::{BanNotice, UnbanNotice};
use crate::settings::{parse_color, WebhookSettings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_owned(),
            value: value.into(),
            inline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    /// ISO-8601 timestamp supplied by the caller.
    pub timestamp: String,
    pub fields: Vec<EmbedField>,
}

/// Body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    pub fn single(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }

    pub fn to_json(&self) -> Result<String, NotifyError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn ban_embed(
    notice: &BanNotice,
    settings: &WebhookSettings,
    timestamp: &str,
) -> Result<Embed, NotifyError> {
    let (title, description, color) = match notice.role() {
        Some(role) => (
            format!("Role ban: {role}"),
            format!("Role **{role}** banned for the player"),
            &settings.role_ban_color,
        ),
        None => (
            "Game ban".to_owned(),
            "Player banned from the server".to_owned(),
            &settings.ban_color,
        ),
    };

    Ok(Embed {
        title,
        description,
        color: parse_color(color)?,
        timestamp: timestamp.to_owned(),
        fields: vec![
            EmbedField::inline("Admin", notice.admin_text()),
            EmbedField::inline("Target", notice.target_text()),
            EmbedField::inline("Reason", notice.reason.clone()),
            EmbedField::inline("Duration", notice.duration_text()),
            EmbedField::inline("Severity", notice.severity.clone()),
        ],
    })
}

pub fn unban_embed(
    notice: &UnbanNotice,
    settings: &WebhookSettings,
    timestamp: &str,
) -> Result<Embed, NotifyError> {
    let mut fields = vec![
        EmbedField::inline("Admin", notice.admin_text()),
        EmbedField::inline("Ban ID", notice.ban_id.to_string()),
    ];

    let (title, description) = match notice.role() {
        Some(role) => {
            fields.push(EmbedField::inline("Role", role));
            (
                format!("Role unban: {role}"),
                format!("Role **{role}** unbanned for the player"),
            )
        }
        None => ("Unban".to_owned(), "Player unbanned on the server".to_owned()),
    };

    Ok(Embed {
        title,
        description,
        color: parse_color(&settings.unban_color)?,
        timestamp: timestamp.to_owned(),
        fields,
    })
}
