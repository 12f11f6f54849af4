use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::OutboundMessage;
use crate::services::clock::format_send_at;

pub const API_KEY_HEADER: &str = "x-api-key";
const JSON_MIME: &str = "application/json";

/// A fully built request, ready for a `MessagingProvider`.
#[derive(Clone)]
pub struct SendRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
    pub send_at: String,
}

impl SendRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for SendRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if *k == API_KEY_HEADER {
                    (*k, "<redacted>")
                } else {
                    (*k, v.as_str())
                }
            })
            .collect();

        f.debug_struct("SendRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .field("send_at", &self.send_at)
            .finish()
    }
}

/// Builds the provider request without touching the network or the system clock.
pub fn build_request(
    config: &AppConfig,
    message: &OutboundMessage,
    now: DateTime<Utc>,
) -> Result<SendRequest, AppError> {
    config.validate()?;
    message.validate()?;

    let body = serde_json::to_string(message)?;

    Ok(SendRequest {
        url: config.api_url.clone(),
        headers: vec![
            (API_KEY_HEADER, config.api_key.clone()),
            ("Accept", JSON_MIME.to_string()),
            ("Content-Type", JSON_MIME.to_string()),
        ],
        body,
        send_at: format_send_at(now)?,
    })
}
