use std::time::Duration;

use async_trait::async_trait;

use super::MessagingProvider;
use crate::errors::AppError;
use crate::models::ProviderResponse;
use crate::services::request::SendRequest;

const EXCERPT_CHARS: usize = 200;

pub struct HttpSmsProvider {
    client: reqwest::Client,
}

impl HttpSmsProvider {
    /// Without a timeout the request waits as long as the network stack allows.
    pub fn new(timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl MessagingProvider for HttpSmsProvider {
    async fn send(&self, request: &SendRequest) -> Result<ProviderResponse, AppError> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let resp = builder.body(request.body.clone()).send().await?;

        // Status is recorded, never turned into an error
        let status = resp.status().as_u16();
        let text = resp.text().await?;

        let body: serde_json::Value =
            serde_json::from_str(&text).map_err(|_| AppError::Decode {
                status,
                excerpt: excerpt(&text),
            })?;

        Ok(ProviderResponse::from_parts(status, body))
    }
}

fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(EXCERPT_CHARS).collect();
    format!("{cut}...")
}
