//! Webhook settings, loaded from JSON with per-field defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

pub const DEFAULT_BAN_COLOR: &str = "#CC3333";
pub const DEFAULT_ROLE_BAN_COLOR: &str = "#E69A2E";
pub const DEFAULT_UNBAN_COLOR: &str = "#3BA55C";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSettings {
    /// Target webhook. Blank or absent disables notifications.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_ban_color")]
    pub ban_color: String,
    #[serde(default = "default_role_ban_color")]
    pub role_ban_color: String,
    #[serde(default = "default_unban_color")]
    pub unban_color: String,
}

fn default_ban_color() -> String {
    DEFAULT_BAN_COLOR.to_owned()
}
fn default_role_ban_color() -> String {
    DEFAULT_ROLE_BAN_COLOR.to_owned()
}
fn default_unban_color() -> String {
    DEFAULT_UNBAN_COLOR.to_owned()
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: None,
            ban_color: default_ban_color(),
            role_ban_color: default_role_ban_color(),
            unban_color: default_unban_color(),
        }
    }
}

impl WebhookSettings {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Parse settings and check every color.
    pub fn from_json_str(json: &str) -> Result<Self, NotifyError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, NotifyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), NotifyError> {
        for color in [&self.ban_color, &self.role_ban_color, &self.unban_color] {
            parse_color(color)?;
        }
        Ok(())
    }

    /// The configured url, unless blank.
    pub fn active_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional) into a packed RGB integer.
pub fn parse_color(hex: &str) -> Result<u32, NotifyError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(NotifyError::InvalidColor(hex.to_owned()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| NotifyError::InvalidColor(hex.to_owned()))
}
