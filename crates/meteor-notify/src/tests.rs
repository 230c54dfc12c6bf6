use crate::embed::{ban_embed, unban_embed, WebhookPayload};
use crate::error::NotifyError;
use crate::notice::{BanNotice, UnbanNotice};
use crate::notifier::Notifier;
use crate::settings::{parse_color, WebhookSettings};
use crate::sink::{JsonLinesSink, MemorySink, NotificationSink};

const TS: &str = "2026-10-18T12:00:00Z";

fn ban() -> BanNotice {
    BanNotice {
        target_id: Some("c0ffee".into()),
        target_name: Some("Grifter".into()),
        admin_id: Some("a11ce".into()),
        admin_name: Some("Moderator".into()),
        minutes: Some(90),
        reason: "Spacing the bridge".into(),
        severity: "High".into(),
        role: None,
    }
}

fn field<'a>(embed: &'a crate::embed::Embed, name: &str) -> &'a str {
    embed
        .fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.value.as_str())
        .unwrap_or_else(|| panic!("missing field {name}"))
}

struct FailingSink;

impl NotificationSink for FailingSink {
    fn deliver(&mut self, _url: &str, _payload: &WebhookPayload) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected("503".into()))
    }
}

// ---- Colors and settings ----

#[test]
fn test_parse_color() {
    assert_eq!(parse_color("#FF8000").unwrap(), 0xFF8000);
    assert_eq!(parse_color("00ff00").unwrap(), 0x00FF00);
    assert!(matches!(parse_color("#FFF"), Err(NotifyError::InvalidColor(_))));
    assert!(matches!(parse_color("#GG0000"), Err(NotifyError::InvalidColor(_))));
    assert!(parse_color("").is_err());
}

#[test]
fn test_settings_defaults_from_json() {
    let settings = WebhookSettings::from_json_str(r#"{ "url": "https://hooks.example/1" }"#).unwrap();
    assert_eq!(settings.active_url(), Some("https://hooks.example/1"));
    assert_eq!(settings.ban_color, WebhookSettings::default().ban_color);

    let blank = WebhookSettings::from_json_str(r#"{ "url": "   " }"#).unwrap();
    assert_eq!(blank.active_url(), None);
}

#[test]
fn test_settings_reject_bad_color() {
    let result = WebhookSettings::from_json_str(r#"{ "unban_color": "green" }"#);
    assert!(matches!(result, Err(NotifyError::InvalidColor(c)) if c == "green"));
}

// ---- Embeds ----

#[test]
fn test_game_ban_embed() {
    let settings = WebhookSettings::default();
    let embed = ban_embed(&ban(), &settings, TS).unwrap();
    assert_eq!(embed.title, "Game ban");
    assert_eq!(embed.color, parse_color(&settings.ban_color).unwrap());
    assert_eq!(embed.timestamp, TS);

    let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Admin", "Target", "Reason", "Duration", "Severity"]);
    assert!(embed.fields.iter().all(|f| f.inline));
    assert_eq!(field(&embed, "Admin"), "Moderator");
    assert_eq!(field(&embed, "Target"), "Grifter");
    assert_eq!(field(&embed, "Duration"), "90 minutes");
}

#[test]
fn test_role_ban_embed() {
    let settings = WebhookSettings::default();
    let notice = BanNotice {
        role: Some("Captain".into()),
        ..ban()
    };
    let embed = ban_embed(&notice, &settings, TS).unwrap();
    assert_eq!(embed.title, "Role ban: Captain");
    assert!(embed.description.contains("**Captain**"));
    assert_eq!(embed.color, parse_color(&settings.role_ban_color).unwrap());
}

#[test]
fn test_empty_role_is_game_ban() {
    let notice = BanNotice {
        role: Some(String::new()),
        ..ban()
    };
    let embed = ban_embed(&notice, &WebhookSettings::default(), TS).unwrap();
    assert_eq!(embed.title, "Game ban");
}

#[test]
fn test_ban_fallbacks() {
    let anonymous = BanNotice {
        minutes: Some(0),
        reason: "x".into(),
        severity: "Low".into(),
        ..Default::default()
    };
    let embed = ban_embed(&anonymous, &WebhookSettings::default(), TS).unwrap();
    assert_eq!(field(&embed, "Admin"), "System");
    assert_eq!(field(&embed, "Target"), "N/A");
    assert_eq!(field(&embed, "Duration"), "Permanent");

    let ids_only = BanNotice {
        admin_name: None,
        target_name: None,
        minutes: None,
        ..ban()
    };
    let embed = ban_embed(&ids_only, &WebhookSettings::default(), TS).unwrap();
    assert_eq!(field(&embed, "Admin"), "a11ce");
    assert_eq!(field(&embed, "Target"), "c0ffee");
    assert_eq!(field(&embed, "Duration"), "Permanent");
}

#[test]
fn test_unban_embeds() {
    let settings = WebhookSettings::default();
    let notice = UnbanNotice {
        ban_id: 4242,
        admin_name: Some("Moderator".into()),
        ..Default::default()
    };
    let embed = unban_embed(&notice, &settings, TS).unwrap();
    assert_eq!(embed.title, "Unban");
    assert_eq!(embed.color, parse_color(&settings.unban_color).unwrap());
    assert_eq!(field(&embed, "Ban ID"), "4242");
    assert_eq!(embed.fields.len(), 2);

    let role = UnbanNotice {
        role: Some("Security".into()),
        ..notice
    };
    let embed = unban_embed(&role, &settings, TS).unwrap();
    assert_eq!(embed.title, "Role unban: Security");
    assert_eq!(field(&embed, "Role"), "Security");
    assert_eq!(embed.fields.len(), 3);
}

#[test]
fn test_payload_json_shape() {
    let embed = ban_embed(&ban(), &WebhookSettings::default(), TS).unwrap();
    let json = WebhookPayload::single(embed).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["embeds"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["embeds"][0]["title"], "Game ban");
    assert_eq!(value["embeds"][0]["fields"][0]["name"], "Admin");
    assert_eq!(value["embeds"][0]["fields"][0]["inline"], true);
    assert!(value["embeds"][0]["color"].is_u64());
}

// ---- Notifier ----

#[test]
fn test_notifier_skips_without_url() {
    let mut notifier = Notifier::new(WebhookSettings::default(), MemorySink::default());
    assert!(!notifier.notify_ban(&ban(), TS));
    assert!(notifier.sink().delivered.is_empty());
}

#[test]
fn test_notifier_delivers_to_url() {
    let settings = WebhookSettings::with_url("https://hooks.example/bans");
    let mut notifier = Notifier::new(settings, MemorySink::default());
    assert!(notifier.notify_ban(&ban(), TS));
    assert!(notifier.notify_unban(&UnbanNotice::default(), TS));

    let sink = notifier.into_sink();
    assert_eq!(sink.delivered.len(), 2);
    assert_eq!(sink.delivered[0].0, "https://hooks.example/bans");
    assert_eq!(sink.delivered[1].1.embeds[0].title, "Unban");
}

#[test]
fn test_notifier_swallows_errors() {
    let mut notifier = Notifier::new(WebhookSettings::with_url("https://hooks.example"), FailingSink);
    assert!(!notifier.notify_ban(&ban(), TS));

    let settings = WebhookSettings {
        ban_color: "nope".into(),
        ..WebhookSettings::with_url("https://hooks.example")
    };
    let mut notifier = Notifier::new(settings, MemorySink::default());
    assert!(!notifier.notify_ban(&ban(), TS));
    assert!(notifier.sink().delivered.is_empty());
}

#[test]
fn test_json_lines_sink() {
    let settings = WebhookSettings::with_url("https://hooks.example");
    let mut notifier = Notifier::new(settings, JsonLinesSink::new(Vec::new()));
    notifier.notify_ban(&ban(), TS);
    notifier.notify_unban(&UnbanNotice::default(), TS);

    let bytes = notifier.into_sink().into_inner();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let payload: WebhookPayload = serde_json::from_str(line).unwrap();
        assert_eq!(payload.embeds.len(), 1);
    }
}
