//! Delivery targets for webhook payloads.

use std::io::Write;

use crate::embed::WebhookPayload;
use crate::error::NotifyError;

/// Transport for a built payload. HTTP delivery lives outside this crate.
pub trait NotificationSink {
    fn deliver(&mut self, url: &str, payload: &WebhookPayload) -> Result<(), NotifyError>;
}

/// Writes one JSON payload per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> NotificationSink for JsonLinesSink<W> {
    fn deliver(&mut self, _url: &str, payload: &WebhookPayload) -> Result<(), NotifyError> {
        serde_json::to_writer(&mut self.writer, payload)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every delivered payload with the url it was addressed to.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub delivered: Vec<(String, WebhookPayload)>,
}

impl NotificationSink for MemorySink {
    fn deliver(&mut self, url: &str, payload: &WebhookPayload) -> Result<(), NotifyError> {
        self.delivered.push((url.to_owned(), payload.clone()));
        Ok(())
    }
}
