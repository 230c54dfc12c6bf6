//! Administrative actions that trigger a notification.

use serde::{Deserialize, Serialize};

/// A player was banned from the game, or from a single role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanNotice {
    pub target_id: Option<String>,
    pub target_name: Option<String>,
    pub admin_id: Option<String>,
    pub admin_name: Option<String>,
    /// Ban length. `None` or zero means permanent.
    pub minutes: Option<u32>,
    pub reason: String,
    pub severity: String,
    /// Set for a role ban.
    pub role: Option<String>,
}

/// A ban was lifted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbanNotice {
    pub ban_id: i64,
    pub admin_id: Option<String>,
    pub admin_name: Option<String>,
    pub role: Option<String>,
}

impl BanNotice {
    pub fn role(&self) -> Option<&str> {
        non_empty(self.role.as_deref())
    }

    /// "{n} minutes", or "Permanent" for an absent or zero length.
    pub fn duration_text(&self) -> String {
        match self.minutes {
            Some(n) if n > 0 => format!("{n} minutes"),
            _ => "Permanent".to_owned(),
        }
    }

    pub fn admin_text(&self) -> String {
        admin_text(self.admin_name.as_deref(), self.admin_id.as_deref())
    }

    pub fn target_text(&self) -> String {
        self.target_name
            .as_deref()
            .or(self.target_id.as_deref())
            .unwrap_or("N/A")
            .to_owned()
    }
}

impl UnbanNotice {
    pub fn role(&self) -> Option<&str> {
        non_empty(self.role.as_deref())
    }

    pub fn admin_text(&self) -> String {
        admin_text(self.admin_name.as_deref(), self.admin_id.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn admin_text(name: Option<&str>, id: Option<&str>) -> String {
    name.or(id).unwrap_or("System").to_owned()
}
